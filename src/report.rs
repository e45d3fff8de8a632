use std::io::{
	self,
	Write,
};

use crate::bme280::Identity;
use crate::error::BusFailure;

/// Print the outcome of a chip ID read.
///
/// A bus failure is part of the report, not an error of the report.
pub fn report<W: Write + ?Sized>(out: &mut W, result: &Result<u8, BusFailure>) -> io::Result<()> {
	match result {
		Ok(chip_id) => {
			writeln!(out, "Success! Chip ID: 0x{:02x}", chip_id)?;
			writeln!(out, "Status: {}", Identity::classify(*chip_id))?;
		},
		Err(e) => {
			writeln!(out, "An error occurred: {}", e)?;
		},
	}
	Ok(())
}

#[cfg(test)]
mod test {
	use std::io;

	use super::report;
	use crate::error::{
		BusFailure,
		Stage,
	};

	fn report_string(result: Result<u8, BusFailure>) -> String {
		let mut out = Vec::new();
		report(&mut out, &result).expect("writing to a Vec can't fail");
		String::from_utf8(out).unwrap()
	}

	#[test]
	fn report_bme280() {
		assert_eq!(report_string(Ok(0x60)), "Success! Chip ID: 0x60\nStatus: Valid BME280 sensor detected.\n");
	}

	#[test]
	fn report_bmp280() {
		assert_eq!(report_string(Ok(0x58)), "Success! Chip ID: 0x58\nStatus: BMP280 detected (no humidity).\n");
	}

	#[test]
	fn report_wiring_fault() {
		assert_eq!(
			report_string(Ok(0x00)),
			"Success! Chip ID: 0x00\nStatus: Invalid ID. Check wiring, specifically the CS pin.\n"
		);
	}

	#[test]
	fn report_unknown() {
		assert_eq!(report_string(Ok(0x61)), "Success! Chip ID: 0x61\nStatus: Unknown ID 0x61.\n");
	}

	#[test]
	fn report_open_failure() {
		let failure = BusFailure::new(Stage::Open, io::Error::from_raw_os_error(libc::ENOENT));
		let expected = format!("An error occurred: SPI open failed: {}\n", io::Error::from_raw_os_error(libc::ENOENT));
		let text = report_string(Err(failure));
		assert!(text.starts_with("An error occurred: SPI open failed: "), "{}", text);
		assert_eq!(text, expected);
	}
}
