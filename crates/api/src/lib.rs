//! Glossary API
//!
//! Axum-based API exposing the chain pipeline over HTTP.

pub mod handlers;
pub mod router;
pub mod state;

pub use router::create_router;
pub use state::AppState;
