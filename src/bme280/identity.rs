use std::fmt;

pub const BME280_CHIP_ID: u8 = 0x60;
pub const BMP280_CHIP_ID: u8 = 0x58;

/// What the value of the chip ID register says about the device on the bus.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
pub enum Identity {
	/// 0x60
	Bme280,
	/// 0x58: pressure and temperature only
	Bmp280,
	/// 0x00 or 0xff: lines floating or stuck; usually a wiring or chip select problem
	Invalid(u8),
	Unknown(u8),
}

impl Identity {
	pub fn classify(chip_id: u8) -> Identity {
		match chip_id {
			BME280_CHIP_ID => Identity::Bme280,
			BMP280_CHIP_ID => Identity::Bmp280,
			0x00 | 0xff => Identity::Invalid(chip_id),
			_ => Identity::Unknown(chip_id),
		}
	}
}

impl fmt::Display for Identity {
	fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
		match self {
			Identity::Bme280 => write!(f, "Valid BME280 sensor detected."),
			Identity::Bmp280 => write!(f, "BMP280 detected (no humidity)."),
			Identity::Invalid(_) => write!(f, "Invalid ID. Check wiring, specifically the CS pin."),
			Identity::Unknown(id) => write!(f, "Unknown ID 0x{:02x}.", id),
		}
	}
}
