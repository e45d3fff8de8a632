use std::fmt;
use std::str;

// flags from linux/spi/spi.h
const SPI_CPHA: u8 = 0x01;
const SPI_CPOL: u8 = 0x02;

/// SPI clock polarity/phase mode
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
pub enum Mode {
	Mode0,
	Mode1,
	Mode2,
	Mode3,
}

impl Mode {
	pub fn from_bits(bits: u8) -> Option<Mode> {
		match bits {
			0 => Some(Mode::Mode0),
			1 => Some(Mode::Mode1),
			2 => Some(Mode::Mode2),
			3 => Some(Mode::Mode3),
			_ => None,
		}
	}

	/// Value for `SPI_IOC_WR_MODE`
	pub fn bits(&self) -> u8 {
		match self {
			Mode::Mode0 => 0,
			Mode::Mode1 => SPI_CPHA,
			Mode::Mode2 => SPI_CPOL,
			Mode::Mode3 => SPI_CPOL | SPI_CPHA,
		}
	}

	/// clock idles high
	pub fn cpol(&self) -> bool {
		0 != self.bits() & SPI_CPOL
	}

	/// data sampled on the trailing clock edge
	pub fn cpha(&self) -> bool {
		0 != self.bits() & SPI_CPHA
	}
}

impl Default for Mode {
	fn default() -> Self {
		Mode::Mode0
	}
}

impl fmt::Display for Mode {
	fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
		write!(f, "{}", self.bits())
	}
}

impl str::FromStr for Mode {
	type Err = ::failure::Error;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		let bits = with_context!(("invalid SPI mode: {}", s),
			Ok(s.parse::<u8>()?)
		)?;
		match Mode::from_bits(bits) {
			Some(mode) => Ok(mode),
			None => bail!("invalid SPI mode: {} (must be 0 to 3)", bits),
		}
	}
}

#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct SpiConfig {
	/// must not exceed what the device is rated for (10MHz for the BME280)
	pub clock_hz: u32,
	pub mode: Mode,
	pub bits_per_word: u8,
}

impl SpiConfig {
	pub fn new(clock_hz: u32, mode: Mode) -> Self {
		SpiConfig {
			clock_hz,
			mode,
			..SpiConfig::default()
		}
	}
}

impl Default for SpiConfig {
	fn default() -> Self {
		SpiConfig {
			clock_hz: 1_000_000,
			mode: Mode::Mode0,
			bits_per_word: 8,
		}
	}
}

impl fmt::Display for SpiConfig {
	fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
		write!(f, "{} Hz, mode {}, {} bits per word", self.clock_hz, self.mode, self.bits_per_word)
	}
}

#[cfg(test)]
mod test {
	use super::*;

	#[test]
	fn mode_bits() {
		assert_eq!((Mode::Mode0.cpol(), Mode::Mode0.cpha()), (false, false));
		assert_eq!((Mode::Mode1.cpol(), Mode::Mode1.cpha()), (false, true));
		assert_eq!((Mode::Mode2.cpol(), Mode::Mode2.cpha()), (true, false));
		assert_eq!((Mode::Mode3.cpol(), Mode::Mode3.cpha()), (true, true));
		for bits in 0..4 {
			assert_eq!(Mode::from_bits(bits).map(|m| m.bits()), Some(bits));
		}
		assert_eq!(Mode::from_bits(4), None);
	}

	#[test]
	fn parse_mode() {
		assert_eq!("0".parse::<Mode>().ok(), Some(Mode::Mode0));
		assert_eq!("3".parse::<Mode>().ok(), Some(Mode::Mode3));
		assert!("4".parse::<Mode>().is_err());
		assert!("".parse::<Mode>().is_err());
		assert!("x".parse::<Mode>().is_err());
	}

	#[test]
	fn default_config() {
		let config = SpiConfig::default();
		assert_eq!(config.clock_hz, 1_000_000);
		assert_eq!(config.mode, Mode::Mode0);
		assert_eq!(config.bits_per_word, 8);
		assert_eq!(SpiConfig::new(500_000, Mode::Mode3).bits_per_word, 8);
	}
}
