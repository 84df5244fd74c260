pub mod cache;
pub mod chains;
pub mod common;
pub mod health;

pub use cache::{clear_cache, get_cache_stats};
pub use chains::{get_chains, get_columns};
pub use health::health;
