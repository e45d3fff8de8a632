use std::fmt;
use std::io;

use failure::Fail;

/// Where a bus transaction broke down.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
pub enum Stage {
	Open,
	Configure,
	Exchange,
}

impl fmt::Display for Stage {
	fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
		match self {
			Stage::Open => write!(f, "open"),
			Stage::Configure => write!(f, "configure"),
			Stage::Exchange => write!(f, "exchange"),
		}
	}
}

/// Any failure to open, configure or exchange on the SPI bus.
///
/// Only transport errors end up here; the stage is informational.
#[derive(Debug, Fail)]
#[fail(display = "SPI {} failed: {}", stage, cause)]
pub struct BusFailure {
	pub stage: Stage,
	#[fail(cause)]
	pub cause: io::Error,
}

impl BusFailure {
	pub fn new(stage: Stage, cause: io::Error) -> Self {
		BusFailure {
			stage,
			cause,
		}
	}

	pub(crate) fn at(stage: Stage) -> impl FnOnce(io::Error) -> Self {
		move |cause| BusFailure::new(stage, cause)
	}
}
