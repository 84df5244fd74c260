//! Glossary Types
//!
//! Shared models and traits for the chain glossary.
//! This crate contains the normalized chain records, the query model and the source seam.

pub mod chains;
pub mod params;
pub mod sources;

// Re-export chrono and serde_json for convenience
pub use chrono;
pub use serde_json;

pub use chains::{
	ChainQuery, ChainRecord, ChainRecordSet, Diagnostic, FlagValue, PipelineOutput,
	SortDirection, SortField, SortParseError, NOT_AVAILABLE,
};
pub use params::FetchParameters;
pub use sources::{ChainSource, FetchError, FetchResult};

#[cfg(any(test, feature = "testing"))]
pub use sources::MockChainSource;
