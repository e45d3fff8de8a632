mod bus;
mod config;
mod device;
mod linux;

pub use self::bus::{
	SpiBus,
};

pub use self::config::{
	Mode,
	SpiConfig,
};

pub use self::device::{
	SpiDevice,
};

// OS-specific. for now linux only.
pub use self::linux::{
	Spidev,
	open,
};
