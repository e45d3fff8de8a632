/* Chip documentation: Bosch BME280 datasheet, section 6.3 "Serial peripheral interface" */

use std::io;

use crate::error::{
	BusFailure,
	Stage,
};
use crate::spi::{
	self,
	SpiBus,
	SpiConfig,
	SpiDevice,
};

mod identity;

pub use self::identity::{
	BME280_CHIP_ID,
	BMP280_CHIP_ID,
	Identity,
};

/// "id" register, read only
pub const REG_ID: u8 = 0xd0;

/// bit 7 of the control byte selects read (1) or write (0)
pub const READ_BIT: u8 = 0x80;

/// Parse a register address in hex, with or without `0x` prefix.
pub fn parse_register(s: &str) -> crate::AResult<u8> {
	let digits = s.strip_prefix("0x").or_else(|| s.strip_prefix("0X")).unwrap_or(s);
	ensure!(!digits.is_empty(), "missing register address in {:?}", s);
	ensure!(digits.bytes().all(|b| b.is_ascii_hexdigit()), "register address must be hex: {:?}", s);
	with_context!(("invalid register address {:?}", s),
		Ok(u8::from_str_radix(digits, 16)?)
	)
}

/// Read one register.
///
/// The device only decodes the address during the first byte, so the
/// first received byte is garbage; the register content arrives while the
/// dummy byte is clocked out.
pub fn read_register<B>(bus: &mut B, register: u8) -> io::Result<u8>
where
	B: SpiBus + ?Sized,
{
	let tx = [register | READ_BIT, 0x00];
	let mut rx = [0u8; 2];
	bus.transfer(&tx, &mut rx)?;
	Ok(rx[1])
}

/// Acquire a bus through `open`, configure it and read `register`.
///
/// The bus is dropped before returning, whatever the outcome.
pub fn probe_register<F, B>(open: F, config: &SpiConfig, register: u8) -> Result<u8, BusFailure>
where
	F: FnOnce() -> io::Result<B>,
	B: SpiBus,
{
	let mut bus = open().map_err(BusFailure::at(Stage::Open))?;
	bus.configure(config).map_err(BusFailure::at(Stage::Configure))?;
	read_register(&mut bus, register).map_err(BusFailure::at(Stage::Exchange))
}

pub fn probe_identity<F, B>(open: F, config: &SpiConfig) -> Result<u8, BusFailure>
where
	F: FnOnce() -> io::Result<B>,
	B: SpiBus,
{
	probe_register(open, config, REG_ID)
}

/// Read the chip ID of the BME280 behind `device`.
pub fn read_identity_register(device: SpiDevice, config: &SpiConfig) -> Result<u8, BusFailure> {
	probe_identity(|| spi::open(device), config)
}
