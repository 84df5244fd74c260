//! Error types for directory fetches

use thiserror::Error;

/// Failure to obtain a JSON payload from the chain directory
///
/// Carries only descriptions so results can be cloned, compared and handed
/// to the presentation layer verbatim.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FetchError {
	#[error("Error fetching data from API: {0}")]
	Transport(String),

	#[error("Error fetching data from API: request timed out after {timeout_ms}ms")]
	Timeout { timeout_ms: u64 },

	#[error("Error fetching data from API: HTTP {status_code}: {reason}")]
	HttpStatus { status_code: u16, reason: String },

	#[error("Error fetching data from API: invalid JSON body: {0}")]
	InvalidBody(String),

	#[error("HTTP client could not be built: {0}")]
	Client(String),
}
