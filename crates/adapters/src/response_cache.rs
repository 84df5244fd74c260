//! Directory response cache
//!
//! Memoizes successful directory payloads per parameter set, with expiry checked on read.

use dashmap::DashMap;
use glossary_types::FetchParameters;
use serde::Serialize;
use serde_json::Value;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tracing::debug;

/// Default lifetime of a cached payload (one hour)
pub const DEFAULT_RESPONSE_TTL: Duration = Duration::from_secs(60 * 60);

/// Cached payload with insertion timestamp for TTL management
#[derive(Debug, Clone)]
struct CachedResponse {
	payload: Arc<Value>,
	inserted_at: Instant,
}

impl CachedResponse {
	fn new(payload: Value) -> Self {
		Self {
			payload: Arc::new(payload),
			inserted_at: Instant::now(),
		}
	}

	fn is_expired(&self, ttl: Duration) -> bool {
		self.inserted_at.elapsed() >= ttl
	}
}

/// Snapshot of the cache for diagnostics endpoints
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct CacheStats {
	pub entries: usize,
	pub ttl_secs: u64,
}

/// Thread-safe payload cache keyed by the exact [`FetchParameters`] tuple
///
/// Clones share the same underlying map.
#[derive(Clone, Debug)]
pub struct ResponseCache {
	entries: Arc<DashMap<FetchParameters, CachedResponse>>,
	ttl: Duration,
}

impl ResponseCache {
	/// Create a new cache with the default one-hour TTL
	pub fn new() -> Self {
		Self::with_ttl(DEFAULT_RESPONSE_TTL)
	}

	/// Create a new cache with custom TTL
	pub fn with_ttl(ttl: Duration) -> Self {
		Self {
			entries: Arc::new(DashMap::new()),
			ttl,
		}
	}

	/// Return the cached payload if present and still fresh
	///
	/// An expired entry is removed as a side effect.
	pub fn get(&self, params: &FetchParameters) -> Option<Arc<Value>> {
		self.entries.remove_if(params, |_, cached| {
			let is_expired = cached.is_expired(self.ttl);
			if is_expired {
				debug!(
					"Cached response expired for {} (age: {:?})",
					params,
					cached.inserted_at.elapsed()
				);
			}
			is_expired
		});

		self.entries.get(params).map(|entry| {
			debug!(
				"Serving cached response for {} (age: {:?})",
				params,
				entry.inserted_at.elapsed()
			);
			Arc::clone(&entry.payload)
		})
	}

	/// Store a payload, replacing any previous entry for the same parameters
	pub fn insert(&self, params: FetchParameters, payload: Value) -> Arc<Value> {
		let cached = CachedResponse::new(payload);
		let payload = Arc::clone(&cached.payload);
		self.entries.insert(params, cached);
		debug!("Cached response for {}", params);
		payload
	}

	/// Clear the cache
	pub fn clear(&self) {
		let count = self.entries.len();
		self.entries.clear();
		debug!("Cleared all {} responses from cache", count);
	}

	pub fn len(&self) -> usize {
		self.entries.len()
	}

	pub fn is_empty(&self) -> bool {
		self.entries.is_empty()
	}

	pub fn stats(&self) -> CacheStats {
		CacheStats {
			entries: self.len(),
			ttl_secs: self.ttl.as_secs(),
		}
	}
}

impl Default for ResponseCache {
	fn default() -> Self {
		Self::new()
	}
}
