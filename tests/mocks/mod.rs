//! Shared fixtures for integration tests

pub mod directory;
pub mod test_server;

pub use directory::{unreachable_base_url, FakeDirectory};
pub use test_server::TestServer;
