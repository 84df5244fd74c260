//! Core source trait implemented by directory clients and caches

use async_trait::async_trait;
use serde_json::Value;
use std::sync::Arc;

use super::FetchResult;
use crate::params::FetchParameters;

/// Something that can return the raw chain directory payload for a parameter set
///
/// Implementations return the decoded JSON untouched; interpreting its shape is
/// left to normalization.
#[cfg_attr(any(test, feature = "testing"), mockall::automock)]
#[async_trait]
pub trait ChainSource: Send + Sync {
	/// Fetch the raw payload for the given toggles
	async fn fetch_chains(&self, params: FetchParameters) -> FetchResult<Value>;
}

#[async_trait]
impl<T: ChainSource + ?Sized> ChainSource for Arc<T> {
	async fn fetch_chains(&self, params: FetchParameters) -> FetchResult<Value> {
		(**self).fetch_chains(params).await
	}
}
