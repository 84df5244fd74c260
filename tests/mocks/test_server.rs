//! Glossary server for end-to-end tests

use chain_glossary::{GlossaryBuilder, Settings};
use tokio::task::JoinHandle;

/// Running glossary instance bound to a random local port
pub struct TestServer {
	pub base_url: String,
	pub handle: JoinHandle<()>,
}

impl TestServer {
	/// Spawn a glossary that reads from the directory at `directory_url`
	pub async fn spawn_against(directory_url: &str) -> Result<Self, Box<dyn std::error::Error>> {
		let mut settings = Settings::default();
		settings.source.base_url = directory_url.to_string();
		settings.source.request_timeout_ms = 2_000;

		Self::spawn_with_settings(settings).await
	}

	pub async fn spawn_with_settings(settings: Settings) -> Result<Self, Box<dyn std::error::Error>> {
		let (app, _state) = GlossaryBuilder::new()
			.with_settings(settings)
			.start()
			.await?;

		let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await?;
		let addr = listener.local_addr()?;
		let handle = tokio::spawn(async move {
			axum::serve(listener, app).await.expect("glossary server");
		});

		Ok(Self {
			base_url: format!("http://{}", addr),
			handle,
		})
	}

	/// Stop the server
	pub fn abort(self) {
		self.handle.abort();
	}
}
