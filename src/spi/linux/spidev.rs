use std::fs;
use std::io;
use std::os::unix::io::AsRawFd;
use std::path::PathBuf;

use super::ioctl::{
	self,
	SpiIocTransfer,
};
use crate::spi::{
	Mode,
	SpiBus,
	SpiConfig,
	SpiDevice,
};

/// Open `/dev/spidevB.C`; closed when dropped.
#[derive(Debug)]
pub struct Spidev {
	file: fs::File,
	device: SpiDevice,
	config: SpiConfig,
}

impl Drop for Spidev {
	fn drop(&mut self) {
		debug!("SPI {}: releasing bus", self.device);
	}
}

impl Spidev {
	pub fn set_mode(&mut self, mode: Mode) -> io::Result<()> {
		ioctl::write_mode(self.file.as_raw_fd(), mode.bits())?;
		self.config.mode = mode;
		Ok(())
	}

	pub fn set_bits_per_word(&mut self, bits: u8) -> io::Result<()> {
		ioctl::write_bits_per_word(self.file.as_raw_fd(), bits)?;
		self.config.bits_per_word = bits;
		Ok(())
	}

	pub fn set_max_speed(&mut self, clock_hz: u32) -> io::Result<()> {
		ioctl::write_max_speed_hz(self.file.as_raw_fd(), clock_hz)?;
		self.config.clock_hz = clock_hz;
		Ok(())
	}
}

impl SpiBus for Spidev {
	fn configure(&mut self, config: &SpiConfig) -> io::Result<()> {
		debug!("SPI {}: configuring {}", self.device, config);
		self.set_mode(config.mode)?;
		self.set_bits_per_word(config.bits_per_word)?;
		self.set_max_speed(config.clock_hz)?;
		Ok(())
	}

	fn transfer(&mut self, tx: &[u8], rx: &mut [u8]) -> io::Result<()> {
		check_buffers(tx, rx)?;

		let transfer = SpiIocTransfer {
			tx_buf: tx.as_ptr() as u64,
			rx_buf: rx.as_mut_ptr() as u64,
			len: tx.len() as u32,
			speed_hz: self.config.clock_hz,
			bits_per_word: self.config.bits_per_word,
			..SpiIocTransfer::default()
		};

		let l = ioctl::message(self.file.as_raw_fd(), &transfer)?;
		if l != tx.len() {
			return Err(io::Error::new(io::ErrorKind::Other, "failed to transfer whole buffer"));
		}
		debug!("SPI {}: tx {:02x?} rx {:02x?}", self.device, tx, rx);
		Ok(())
	}
}

fn check_buffers(tx: &[u8], rx: &[u8]) -> io::Result<()> {
	if tx.len() != rx.len() {
		return Err(io::Error::new(io::ErrorKind::InvalidInput, "full-duplex transfer needs equally sized buffers"));
	}
	if tx.len() > u32::max_value() as usize {
		return Err(io::Error::new(io::ErrorKind::InvalidInput, "transfer too long"));
	}
	Ok(())
}

pub fn inner_open(device: SpiDevice, path: PathBuf) -> io::Result<Spidev> {
	let file = fs::OpenOptions::new()
		.read(true)
		.write(true)
		.open(path)?;

	debug!("SPI {}: opened bus", device);

	Ok(Spidev {
		file,
		device,
		config: SpiConfig::default(),
	})
}

#[cfg(test)]
mod test {
	use std::io;

	use super::check_buffers;

	#[test]
	fn mismatched_buffers() {
		let e = check_buffers(&[0xd0, 0x00], &[0u8; 1]).unwrap_err();
		assert_eq!(e.kind(), io::ErrorKind::InvalidInput);
		let e = check_buffers(&[0xd0], &[0u8; 2]).unwrap_err();
		assert_eq!(e.kind(), io::ErrorKind::InvalidInput);
		assert!(check_buffers(&[0xd0, 0x00], &[0u8; 2]).is_ok());
		assert!(check_buffers(&[], &[]).is_ok());
	}
}
