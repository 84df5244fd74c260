//! Service startup logging for the chain glossary
//!
//! Logs service, platform and environment details when the server starts and stops.

use std::env;
use tracing::info;

use crate::Settings;

/// Logs service information at startup
pub fn log_service_info(settings: &Settings) {
	// Use the root package name, not the current crate
	let service_name = "chain-glossary";
	let service_version = env!("CARGO_PKG_VERSION");

	info!("=== Chain Glossary Service Starting ===");
	info!("🚀 Service: {} v{}", service_name, service_version);
	info!("💻 Platform: {}", env::consts::OS);
	info!("🏗️ Architecture: {}", env::consts::ARCH);

	if let Ok(cwd) = env::current_dir() {
		info!("📁 Working Directory: {}", cwd.display());
	}

	if let Ok(rust_log) = env::var("RUST_LOG") {
		info!("🔧 Log Level: {}", rust_log);
	}

	info!("🔗 Chain directory: {}", settings.chains_url());
	info!(
		"⏱️ Request timeout: {}ms, cache TTL: {}s",
		settings.source.request_timeout_ms, settings.source.cache_ttl_secs
	);
	info!("🎛️ Default toggles: {}", settings.default_params());

	info!(
		"🕒 Started at: {}",
		chrono::Utc::now().format("%Y-%m-%d %H:%M:%S UTC")
	);
}

/// Logs service shutdown information
pub fn log_service_shutdown() {
	info!("🛑 Chain Glossary Service Shutting Down");
	info!(
		"🕒 Shutdown at: {}",
		chrono::Utc::now().format("%Y-%m-%d %H:%M:%S UTC")
	);
}

/// Logs additional startup completion information
pub fn log_startup_complete(bind_address: &str) {
	info!("✅ Chain Glossary Service Started Successfully");
	info!("🌐 Server listening on: {}", bind_address);
	info!("📡 Ready to accept requests");
}
