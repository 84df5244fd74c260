//! Remote chain directory seam

pub mod errors;
pub mod traits;

pub use errors::FetchError;
pub use traits::ChainSource;

#[cfg(any(test, feature = "testing"))]
pub use traits::MockChainSource;

/// Result type for directory fetches
pub type FetchResult<T> = Result<T, FetchError>;
