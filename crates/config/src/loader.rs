//! Configuration loading utilities

use crate::Settings;
use config::{Config, ConfigError, File};

/// Load configuration from the default config file (`config/config.*`)
///
/// The file is optional; missing keys fall back to [`Settings::default`].
pub fn load_config() -> Result<Settings, ConfigError> {
	load_config_from("config/config")
}

/// Load configuration from the given file stem
pub fn load_config_from(path: &str) -> Result<Settings, ConfigError> {
	let s = Config::builder()
		.add_source(File::with_name(path).required(false))
		.build()?;

	s.try_deserialize()
}
