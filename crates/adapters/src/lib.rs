//! Glossary Adapters
//!
//! Remote chain directory client and the response cache placed in front of it.

pub mod cached_source;
pub mod directory_client;
pub mod response_cache;

pub use cached_source::CachedChainSource;
pub use directory_client::{DirectoryClient, DirectoryConfig, DEFAULT_REQUEST_TIMEOUT};
pub use glossary_types::{ChainSource, FetchError, FetchResult};
pub use response_cache::{CacheStats, ResponseCache, DEFAULT_RESPONSE_TTL};
