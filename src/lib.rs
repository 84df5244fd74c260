//! Chain Glossary Library
//!
//! Browse, search and sort the blockchain networks published by a remote chain
//! directory, with responses cached per toggle combination.

use glossary_adapters::{CachedChainSource, DirectoryClient, DirectoryConfig, ResponseCache};
use glossary_service::{GlossaryService, GlossaryServiceTrait};

// Core domain types
pub use glossary_types::{
	chrono,
	serde_json,
	ChainQuery,
	ChainRecord,
	ChainSource,
	Diagnostic,
	FetchError,
	FetchParameters,
	FetchResult,
	FlagValue,
	PipelineOutput,
	SortDirection,
	SortField,
	NOT_AVAILABLE,
};

// Service layer
pub use glossary_service::{filter_records, normalize, sort_records};

// API layer
pub use glossary_api::{create_router, AppState};

// Config
pub use glossary_config::{load_config, log_service_info, log_startup_complete, Settings};

pub mod config {
	pub use glossary_config::*;
}

pub mod adapters {
	pub use glossary_adapters::*;
}

pub mod api {
	pub use glossary_api::*;
}

pub mod service {
	pub use glossary_service::*;
}

pub mod models {
	pub use glossary_types::*;
}

use std::net::SocketAddr;
use std::sync::Arc;
use tracing::info;

/// Builder pattern for configuring the glossary service
#[derive(Default)]
pub struct GlossaryBuilder {
	settings: Option<Settings>,
	source: Option<Arc<dyn ChainSource>>,
}

impl GlossaryBuilder {
	/// Create a new builder that talks to the configured directory
	pub fn new() -> Self {
		Self::default()
	}

	/// Set custom settings
	pub fn with_settings(mut self, settings: Settings) -> Self {
		self.settings = Some(settings);
		self
	}

	/// Replace the HTTP directory client; the response cache still wraps it
	pub fn with_source(mut self, source: Arc<dyn ChainSource>) -> Self {
		self.source = Some(source);
		self
	}

	/// Initialize tracing with configuration-based settings
	fn init_tracing_from_settings(
		&self,
		settings: &Settings,
	) -> Result<(), Box<dyn std::error::Error>> {
		use glossary_config::LogFormat;

		let log_level = &settings.logging.level;
		let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
			.unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(log_level));

		match settings.logging.format {
			LogFormat::Json => {
				let subscriber = tracing_subscriber::fmt().json().with_env_filter(env_filter);

				if settings.logging.structured {
					subscriber
						.with_target(true)
						.with_thread_ids(true)
						.try_init()
						.map_err(tracing_error)?;
				} else {
					subscriber.try_init().map_err(tracing_error)?;
				}
			},
			LogFormat::Pretty => {
				let subscriber = tracing_subscriber::fmt()
					.pretty()
					.with_env_filter(env_filter);

				if settings.logging.structured {
					subscriber
						.with_target(true)
						.with_thread_ids(true)
						.try_init()
						.map_err(tracing_error)?;
				} else {
					subscriber.try_init().map_err(tracing_error)?;
				}
			},
			LogFormat::Compact => {
				let subscriber = tracing_subscriber::fmt()
					.compact()
					.with_env_filter(env_filter);

				if settings.logging.structured {
					subscriber
						.with_target(true)
						.with_thread_ids(true)
						.try_init()
						.map_err(tracing_error)?;
				} else {
					subscriber.try_init().map_err(tracing_error)?;
				}
			},
		}

		info!(
			"Logging configuration applied: level={}, format={:?}, structured={}",
			settings.logging.level, settings.logging.format, settings.logging.structured
		);

		Ok(())
	}

	/// Build the pipeline and return the configured router with state
	pub async fn start(self) -> Result<(axum::Router, AppState), Box<dyn std::error::Error>> {
		let settings = self.settings.unwrap_or_default();
		settings
			.validate()
			.map_err(|e| format!("Invalid configuration: {}", e))?;

		let source: Arc<dyn ChainSource> = match self.source {
			Some(source) => source,
			None => {
				let config = DirectoryConfig::new(settings.chains_url())
					.with_timeout(settings.request_timeout())
					.with_user_agent(settings.source.user_agent.clone());
				let client = DirectoryClient::new(config)
					.map_err(|e| format!("Failed to create directory client: {}", e))?;
				Arc::new(client)
			},
		};

		let cache = ResponseCache::with_ttl(settings.cache_ttl());
		let cached = CachedChainSource::new(source, cache.clone());
		info!(
			"Chain source ready with {}s response cache",
			settings.source.cache_ttl_secs
		);

		let app_state = AppState {
			glossary_service: Arc::new(GlossaryService::new(Arc::new(cached)))
				as Arc<dyn GlossaryServiceTrait>,
			cache,
			default_params: settings.default_params(),
		};

		let router = create_router().with_state(app_state.clone());

		Ok((router, app_state))
	}

	/// Start the complete server with all defaults and setup
	///
	/// Loads `.env`, reads configuration, initializes tracing, then binds and serves.
	pub async fn start_server(mut self) -> Result<(), Box<dyn std::error::Error>> {
		dotenvy::dotenv().ok();

		let settings = match self.settings.take() {
			Some(settings) => settings,
			None => load_config().unwrap_or_default(),
		};

		self.init_tracing_from_settings(&settings)?;
		log_service_info(&settings);

		let bind_addr = settings.bind_address();
		let addr: SocketAddr = bind_addr
			.parse()
			.map_err(|e| format!("Invalid bind address '{}': {}", bind_addr, e))?;

		self.settings = Some(settings);
		let (app, _) = self.start().await?;

		let listener = tokio::net::TcpListener::bind(addr).await?;

		log_startup_complete(&bind_addr);
		info!("API endpoints available:");
		info!("  GET    /health");
		info!("  GET    /api/v1/chains");
		info!("  GET    /api/v1/chains/columns");
		info!("  GET    /api/v1/cache");
		info!("  DELETE /api/v1/cache");

		axum::serve(listener, app)
			.with_graceful_shutdown(shutdown_signal())
			.await?;

		glossary_config::log_service_shutdown();
		Ok(())
	}
}

fn tracing_error(err: impl std::fmt::Display) -> String {
	format!("Failed to initialize tracing: {}", err)
}

async fn shutdown_signal() {
	if let Err(e) = tokio::signal::ctrl_c().await {
		tracing::warn!("Failed to listen for shutdown signal: {}", e);
		std::future::pending::<()>().await;
	}
}
