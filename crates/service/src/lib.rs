//! Glossary Service
//!
//! Normalization, filtering, sorting and the pipeline that composes them.

pub mod filter;
pub mod normalizer;
pub mod pipeline;
pub mod sorter;

pub use filter::filter_records;
pub use normalizer::{normalize, normalize_entry, CHAINS_KEY};
pub use pipeline::{GlossaryService, GlossaryServiceTrait};
pub use sorter::{compare_records, sort_records};
