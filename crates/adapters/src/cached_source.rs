//! Memoizing wrapper around any [`ChainSource`]

use async_trait::async_trait;
use glossary_types::{ChainSource, FetchParameters, FetchResult};
use serde_json::Value;
use std::sync::Arc;
use tracing::{debug, info};

use crate::response_cache::ResponseCache;

/// Serves repeated fetches for the same parameters from a [`ResponseCache`]
///
/// Only successful payloads are cached; a failed fetch is retried on the next call.
#[derive(Debug, Clone)]
pub struct CachedChainSource<S> {
	inner: Arc<S>,
	cache: ResponseCache,
}

impl<S: ChainSource> CachedChainSource<S> {
	pub fn new(inner: S, cache: ResponseCache) -> Self {
		Self {
			inner: Arc::new(inner),
			cache,
		}
	}
}

#[async_trait]
impl<S: ChainSource> ChainSource for CachedChainSource<S> {
	async fn fetch_chains(&self, params: FetchParameters) -> FetchResult<Value> {
		if let Some(payload) = self.cache.get(&params) {
			debug!("Cache hit for {}", params);
			return Ok(payload.as_ref().clone());
		}

		info!("Cache miss for {}, fetching from directory", params);
		let payload = self.inner.fetch_chains(params).await?;
		self.cache.insert(params, payload.clone());
		Ok(payload)
	}
}
