#[macro_use]
extern crate clap;
#[macro_use]
extern crate failure;
#[macro_use]
extern crate log;

extern crate bme280_spi_id;
use bme280_spi_id::*;

use std::io;
use std::process::exit;

use bme280_spi_id::spi::{
	Mode,
	SpiConfig,
	SpiDevice,
};

fn get_param<T>(matches: &clap::ArgMatches, name: &str) -> AResult<T>
where
	T: std::str::FromStr,
	failure::Error: From<<T as std::str::FromStr>::Err>,
{
	let param = match matches.value_of(name) {
		Some(p) => p,
		None => bail!("missing parameter {}", name),
	};
	param.parse::<T>().map_err(|e| {
		let e = failure::Error::from(e);
		let msg = format!("invalid paramater {}: {}", name, e);
		e.context(msg).into()
	})
}

fn get_register(matches: &clap::ArgMatches, name: &str) -> AResult<u8> {
	match matches.value_of(name) {
		Some(p) => bme280::parse_register(p),
		None => bail!("missing parameter {}", name),
	}
}

fn main_app() -> AResult<()> {
	let matches = clap_app!(@app (app_from_crate!())
		(about: "Read the chip ID of a BME280 sensor over SPI")
		(@arg device: -d --device +takes_value default_value("0.0") "SPI bus and chip select (BUS.CS, /dev/spidevBUS.CS)")
		(@arg speed: -s --speed +takes_value default_value("1000000") "SPI clock in Hz (BME280: at most 10MHz)")
		(@arg mode: -m --mode +takes_value default_value("0") "SPI mode (0-3)")
		(@arg register: -r --register +takes_value default_value("0xd0") "register to read (hex)")
	).get_matches();

	let device: SpiDevice = get_param(&matches, "device")?;
	let clock_hz: u32 = get_param(&matches, "speed")?;
	let mode: Mode = get_param(&matches, "mode")?;
	let register = get_register(&matches, "register")?;
	let config = SpiConfig::new(clock_hz, mode);

	// BME280 samples on the rising edge, only modes 0 and 3 work
	if mode.cpol() != mode.cpha() {
		warn!("SPI {}: BME280 doesn't support mode {}", device, mode);
	}

	println!("Reading BME280 chip ID via SPI {} (register 0x{:02x})...", device, register);
	info!("SPI {}: {}", device, config);

	let result = bme280::probe_register(|| spi::open(device), &config, register);
	// a bus failure is reported, but not a reason to fail the process
	let stdout = io::stdout();
	report::report(&mut stdout.lock(), &result)?;

	Ok(())
}

fn main() {
	env_logger::from_env(env_logger::Env::default().default_filter_or("info")).init();

	if let Err(e) = main_app() {
		error!("Error: {}", e);
		exit(1);
	}
}
