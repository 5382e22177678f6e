pub mod config;
pub mod inputs;
pub mod interval;
pub mod range_union;

pub use config::{
	Config,
	ConfigParseError,
	EnablementLevel,
	PartialConfig,
	app_dirs,
	default_config_path,
	DEFAULT_CONFIG,
};
pub use interval::{BoundsViolation, Interval, RangeError, MAX_BOUND, MIN_BOUND};
pub use range_union::{collapse, RangeCollapser};
