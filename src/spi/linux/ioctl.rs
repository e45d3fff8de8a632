/* requests and structures from linux/spi/spidev.h */

use std::io;
use std::os::unix::io::RawFd;

const SPI_IOC_MAGIC: u8 = b'k';

/// `struct spi_ioc_transfer`
#[repr(C)]
#[derive(Clone, Copy, Default, Debug)]
pub struct SpiIocTransfer {
	pub tx_buf: u64,
	pub rx_buf: u64,
	pub len: u32,
	pub speed_hz: u32,
	pub delay_usecs: u16,
	pub bits_per_word: u8,
	pub cs_change: u8,
	pub tx_nbits: u8,
	pub rx_nbits: u8,
	pub word_delay_usecs: u8,
	pub pad: u8,
}

mod raw {
	use super::{
		SPI_IOC_MAGIC,
		SpiIocTransfer,
	};

	ioctl_write_ptr!(spi_write_mode, SPI_IOC_MAGIC, 1, u8);
	ioctl_write_ptr!(spi_write_bits_per_word, SPI_IOC_MAGIC, 3, u8);
	ioctl_write_ptr!(spi_write_max_speed_hz, SPI_IOC_MAGIC, 4, u32);
	// SPI_IOC_MESSAGE(N): size encodes the number of transfers
	ioctl_write_buf!(spi_message, SPI_IOC_MAGIC, 0, SpiIocTransfer);
}

pub fn write_mode(fd: RawFd, mode: u8) -> io::Result<()> {
	unsafe { raw::spi_write_mode(fd, &mode) }?;
	Ok(())
}

pub fn write_bits_per_word(fd: RawFd, bits: u8) -> io::Result<()> {
	unsafe { raw::spi_write_bits_per_word(fd, &bits) }?;
	Ok(())
}

pub fn write_max_speed_hz(fd: RawFd, clock_hz: u32) -> io::Result<()> {
	unsafe { raw::spi_write_max_speed_hz(fd, &clock_hz) }?;
	Ok(())
}

/// returns number of bytes transferred
///
/// buffers referenced by `transfer` must stay valid for the call
pub fn message(fd: RawFd, transfer: &SpiIocTransfer) -> io::Result<usize> {
	let res = unsafe { raw::spi_message(fd, std::slice::from_ref(transfer)) }?;
	Ok(res as usize)
}
