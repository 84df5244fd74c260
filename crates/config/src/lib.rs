//! Glossary Configuration
//!
//! Configuration management and startup utilities for the chain glossary service.

pub mod loader;
pub mod settings;
pub mod startup_logger;

pub use loader::{load_config, load_config_from};
pub use settings::{
	ConfigValidationError, DefaultToggles, LogFormat, LoggingSettings, ServerSettings, Settings,
	SourceSettings,
};
pub use startup_logger::{log_service_info, log_service_shutdown, log_startup_complete};
