//! Pipeline output and diagnostics

use serde::{Deserialize, Serialize};

use super::ChainRecordSet;

/// Outcome of a pipeline run, reported next to the records
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum Diagnostic {
	Ok,
	/// The directory could not be reached or answered with an error
	FetchError { message: String },
	/// The directory answered without any usable chain entries
	NoData,
	/// A fault inside the pipeline itself
	Internal { message: String },
}

impl Diagnostic {
	/// Human-readable explanation shown in place of the table
	pub fn message(&self) -> Option<&str> {
		match self {
			Self::Ok => None,
			Self::FetchError { message } | Self::Internal { message } => Some(message),
			Self::NoData => Some("No data available. Please try again later."),
		}
	}
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PipelineOutput {
	pub records: ChainRecordSet,
	pub diagnostic: Diagnostic,
}

impl PipelineOutput {
	pub fn ok(records: ChainRecordSet) -> Self {
		Self {
			records,
			diagnostic: Diagnostic::Ok,
		}
	}

	/// Empty result carrying the reason nothing could be shown
	pub fn empty(diagnostic: Diagnostic) -> Self {
		Self {
			records: Vec::new(),
			diagnostic,
		}
	}
}
