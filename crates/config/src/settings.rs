//! Configuration settings structures

use glossary_types::FetchParameters;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use thiserror::Error;

/// Default chain directory
pub const DEFAULT_BASE_URL: &str = "https://api.skip.build";
/// Path of the chain listing below the base URL
pub const DEFAULT_CHAINS_PATH: &str = "/v2/info/chains";

/// Main application settings
#[derive(Debug, Serialize, Deserialize, Clone, Default)]
#[serde(default)]
pub struct Settings {
	pub server: ServerSettings,
	pub source: SourceSettings,
	pub defaults: DefaultToggles,
	pub logging: LoggingSettings,
}

/// Server configuration
#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct ServerSettings {
	pub host: String,
	pub port: u16,
}

impl Default for ServerSettings {
	fn default() -> Self {
		Self {
			host: "0.0.0.0".to_string(),
			port: 3000,
		}
	}
}

/// Remote chain directory configuration
#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct SourceSettings {
	pub base_url: String,
	pub chains_path: String,
	/// Upper bound for a single directory request
	pub request_timeout_ms: u64,
	/// How long a successful response is served from cache
	pub cache_ttl_secs: u64,
	pub user_agent: String,
}

impl Default for SourceSettings {
	fn default() -> Self {
		Self {
			base_url: DEFAULT_BASE_URL.to_string(),
			chains_path: DEFAULT_CHAINS_PATH.to_string(),
			request_timeout_ms: 10_000,
			cache_ttl_secs: 60 * 60,
			user_agent: format!("chain-glossary/{}", env!("CARGO_PKG_VERSION")),
		}
	}
}

/// Toggle values used when a request leaves one out
#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct DefaultToggles {
	pub include_evm: bool,
	pub include_svm: bool,
	pub only_testnets: bool,
}

impl Default for DefaultToggles {
	fn default() -> Self {
		let params = FetchParameters::default();
		Self {
			include_evm: params.include_evm,
			include_svm: params.include_svm,
			only_testnets: params.only_testnets,
		}
	}
}

impl From<&DefaultToggles> for FetchParameters {
	fn from(toggles: &DefaultToggles) -> Self {
		FetchParameters::new(
			toggles.include_evm,
			toggles.include_svm,
			toggles.only_testnets,
		)
	}
}

/// Logging configuration
#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct LoggingSettings {
	pub level: String,
	pub format: LogFormat,
	pub structured: bool,
}

impl Default for LoggingSettings {
	fn default() -> Self {
		Self {
			level: "info".to_string(),
			format: LogFormat::Pretty,
			structured: false,
		}
	}
}

/// Log format options
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
	Json,
	Pretty,
	Compact,
}

/// Errors found while validating settings
#[derive(Error, Debug, PartialEq)]
pub enum ConfigValidationError {
	#[error("source.base_url must not be empty")]
	EmptyBaseUrl,

	#[error("source.base_url must start with http:// or https://, got {0}")]
	InvalidBaseUrl(String),

	#[error("source.request_timeout_ms must be greater than zero")]
	ZeroTimeout,

	#[error("source.cache_ttl_secs must be greater than zero")]
	ZeroCacheTtl,
}

impl Settings {
	/// Get server bind address
	pub fn bind_address(&self) -> String {
		format!("{}:{}", self.server.host, self.server.port)
	}

	/// Full URL of the chain listing
	pub fn chains_url(&self) -> String {
		format!(
			"{}/{}",
			self.source.base_url.trim_end_matches('/'),
			self.source.chains_path.trim_start_matches('/')
		)
	}

	pub fn request_timeout(&self) -> Duration {
		Duration::from_millis(self.source.request_timeout_ms)
	}

	pub fn cache_ttl(&self) -> Duration {
		Duration::from_secs(self.source.cache_ttl_secs)
	}

	/// Toggles applied when a request omits them
	pub fn default_params(&self) -> FetchParameters {
		FetchParameters::from(&self.defaults)
	}

	/// Reject settings the service cannot run with
	pub fn validate(&self) -> Result<(), ConfigValidationError> {
		let base_url = self.source.base_url.trim();
		if base_url.is_empty() {
			return Err(ConfigValidationError::EmptyBaseUrl);
		}
		if !(base_url.starts_with("http://") || base_url.starts_with("https://")) {
			return Err(ConfigValidationError::InvalidBaseUrl(base_url.to_string()));
		}
		if self.source.request_timeout_ms == 0 {
			return Err(ConfigValidationError::ZeroTimeout);
		}
		if self.source.cache_ttl_secs == 0 {
			return Err(ConfigValidationError::ZeroCacheTtl);
		}
		Ok(())
	}
}
