//! Chain glossary pipeline
//!
//! Fetch → normalize → default name sort → filter → requested sort. Every
//! failure is turned into a [`Diagnostic`] here; nothing escapes the run.

use async_trait::async_trait;
use futures::FutureExt;
use glossary_types::{
	ChainQuery, ChainSource, Diagnostic, PipelineOutput, SortDirection, SortField,
};
use std::any::Any;
use std::panic::AssertUnwindSafe;
use std::sync::Arc;
use tracing::{debug, error, info, warn};

use crate::filter::filter_records;
use crate::normalizer::normalize;
use crate::sorter::sort_records;

/// Entry point used by the HTTP layer
#[async_trait]
pub trait GlossaryServiceTrait: Send + Sync {
	/// Run the whole pipeline for one interaction
	async fn run(&self, query: &ChainQuery) -> PipelineOutput;
}

#[derive(Clone)]
pub struct GlossaryService {
	source: Arc<dyn ChainSource>,
}

impl GlossaryService {
	pub fn new(source: Arc<dyn ChainSource>) -> Self {
		Self { source }
	}

	async fn run_stages(&self, query: &ChainQuery) -> PipelineOutput {
		let raw = match self.source.fetch_chains(query.params).await {
			Ok(raw) => raw,
			Err(e) => {
				warn!("Fetch failed for {}: {}", query.params, e);
				return PipelineOutput::empty(Diagnostic::FetchError {
					message: e.to_string(),
				});
			},
		};

		let records = normalize(Some(&raw));
		if records.is_empty() {
			warn!("No data available for {}", query.params);
			return PipelineOutput::empty(Diagnostic::NoData);
		}

		let base = sort_records(&records, SortField::Name, SortDirection::Asc);
		let filtered = filter_records(&base, &query.search);
		let sorted = sort_records(&filtered, query.sort_by, query.direction);

		debug!(
			"Returning {} of {} chains sorted by {} {}",
			sorted.len(),
			records.len(),
			query.sort_by,
			query.direction
		);
		PipelineOutput::ok(sorted)
	}
}

#[async_trait]
impl GlossaryServiceTrait for GlossaryService {
	async fn run(&self, query: &ChainQuery) -> PipelineOutput {
		info!("Running chain pipeline for {}", query.params);

		match AssertUnwindSafe(self.run_stages(query)).catch_unwind().await {
			Ok(output) => output,
			Err(panic) => {
				let message = format!("An unexpected error occurred: {}", panic_message(&*panic));
				error!("{}", message);
				PipelineOutput::empty(Diagnostic::Internal { message })
			},
		}
	}
}

fn panic_message(panic: &(dyn Any + Send)) -> String {
	if let Some(message) = panic.downcast_ref::<&str>() {
		(*message).to_string()
	} else if let Some(message) = panic.downcast_ref::<String>() {
		message.clone()
	} else {
		"unknown panic".to_string()
	}
}
