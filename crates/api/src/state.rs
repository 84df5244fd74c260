use std::sync::Arc;

use glossary_adapters::ResponseCache;
use glossary_service::GlossaryServiceTrait;
use glossary_types::FetchParameters;

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
	pub glossary_service: Arc<dyn GlossaryServiceTrait>,
	pub cache: ResponseCache,
	/// Toggles used when a request leaves one out
	pub default_params: FetchParameters,
}
