use std::io;

use super::SpiConfig;

/// An opened SPI bus with one device selected.
///
/// Dropping the bus releases it.
pub trait SpiBus {
	fn configure(&mut self, config: &SpiConfig) -> io::Result<()>;

	/// Full-duplex exchange: clocks out `tx` while filling `rx`.
	///
	/// Both buffers must have the same length.
	fn transfer(&mut self, tx: &[u8], rx: &mut [u8]) -> io::Result<()>;
}

impl<B: SpiBus + ?Sized> SpiBus for &mut B {
	fn configure(&mut self, config: &SpiConfig) -> io::Result<()> {
		(**self).configure(config)
	}

	fn transfer(&mut self, tx: &[u8], rx: &mut [u8]) -> io::Result<()> {
		(**self).transfer(tx, rx)
	}
}
