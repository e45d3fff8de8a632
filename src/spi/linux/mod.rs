use std::io;

mod ioctl;
mod spidev;

pub use self::spidev::Spidev;

use crate::spi::SpiDevice;

/// Open the spidev node for `device`; configure it with
/// [`SpiBus::configure`](crate::spi::SpiBus::configure) before transferring.
pub fn open(device: SpiDevice) -> io::Result<Spidev> {
	spidev::inner_open(device, device.path())
}
