use std::fmt;
use std::path::PathBuf;
use std::str;

/// SPI bus number and chip select line, as in `/dev/spidevB.C`
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
pub struct SpiDevice {
	pub bus: u16,
	pub chip_select: u16,
}

impl SpiDevice {
	pub fn new(bus: u16, chip_select: u16) -> Self {
		SpiDevice {
			bus,
			chip_select,
		}
	}

	pub fn path(&self) -> PathBuf {
		PathBuf::from(format!("/dev/spidev{}.{}", self.bus, self.chip_select))
	}
}

impl Default for SpiDevice {
	// bus 0, CE0 (pin 24 on a Raspberry Pi header)
	fn default() -> Self {
		SpiDevice::new(0, 0)
	}
}

impl fmt::Display for SpiDevice {
	fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
		write!(f, "{}.{}", self.bus, self.chip_select)
	}
}

impl str::FromStr for SpiDevice {
	type Err = ::failure::Error;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		let (bus_s, cs_s) = match s.find('.') {
			Some(pos) => (&s[..pos], &s[pos + 1..]),
			None => bail!("Couldn't find '.' in SPI bus.chip_select: {:?}", s),
		};

		ensure!(!bus_s.is_empty(), "missing SPI bus in {:?}", s);
		ensure!(!cs_s.is_empty(), "missing SPI chip select in {:?}", s);
		ensure!(
			bus_s.bytes().chain(cs_s.bytes()).all(|b| b.is_ascii_digit()),
			"SPI bus.chip_select must be decimal: {:?}", s
		);

		let bus = with_context!(("invalid SPI bus: {}", bus_s),
			Ok(bus_s.parse::<u16>()?)
		)?;
		let chip_select = with_context!(("invalid SPI chip select: {}", cs_s),
			Ok(cs_s.parse::<u16>()?)
		)?;

		Ok(SpiDevice {
			bus,
			chip_select,
		})
	}
}

#[cfg(test)]
mod test {
	use super::SpiDevice;

	fn check_device(bus: u16, cs: u16, repr: &str) {
		match repr.parse::<SpiDevice>() {
			Err(e) => panic!("{} failed to parse as SpiDevice: {}", repr, e),
			Ok(dev) => assert_eq!(SpiDevice::new(bus, cs), dev, "failed validating parsed {}", repr),
		}
	}

	fn check_device_canonical(bus: u16, cs: u16, repr: &str) {
		check_device(bus, cs, repr);
		assert_eq!(SpiDevice::new(bus, cs).to_string(), repr, "failed stringifying bus {} chip select {}", bus, cs);
	}

	fn check_invalid_device(repr: &str) {
		assert!(repr.parse::<SpiDevice>().is_err(), "{:?} must not be a valid BUS.CS", repr);
	}

	#[test]
	fn parse_device() {
		check_device_canonical(0, 0, "0.0");
		check_device_canonical(0, 1, "0.1");
		check_device_canonical(1, 2, "1.2");
		check_device_canonical(32766, 0, "32766.0");
		check_device(0, 1, "00.01");
		check_invalid_device("");
		check_invalid_device(".");
		check_invalid_device("0.");
		check_invalid_device(".0");
		check_invalid_device("0");
		check_invalid_device("0.0.0");
		check_invalid_device("a.0");
		check_invalid_device("0.-1");
		check_invalid_device("+0.0");
		check_invalid_device("65536.0");
	}

	#[test]
	fn device_path() {
		assert_eq!(SpiDevice::new(0, 0).path().to_str(), Some("/dev/spidev0.0"));
		assert_eq!(SpiDevice::new(1, 2).path().to_str(), Some("/dev/spidev1.2"));
		assert_eq!(SpiDevice::default(), SpiDevice::new(0, 0));
	}
}
