//! HTTP client for the remote chain directory

use async_trait::async_trait;
use glossary_types::{ChainSource, FetchError, FetchParameters, FetchResult};
use reqwest::{
	header::{HeaderMap, HeaderValue, ACCEPT, USER_AGENT},
	Client,
};
use serde_json::Value;
use std::error::Error as StdError;
use std::time::Duration;
use tracing::{debug, error, info};

/// Default upper bound for one directory request
pub const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Connection settings for [`DirectoryClient`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirectoryConfig {
	/// Full URL of the chain listing endpoint
	pub chains_url: String,
	pub timeout: Duration,
	pub user_agent: String,
}

impl DirectoryConfig {
	pub fn new(chains_url: impl Into<String>) -> Self {
		Self {
			chains_url: chains_url.into(),
			timeout: DEFAULT_REQUEST_TIMEOUT,
			user_agent: format!("chain-glossary/{}", env!("CARGO_PKG_VERSION")),
		}
	}

	pub fn with_timeout(mut self, timeout: Duration) -> Self {
		self.timeout = timeout;
		self
	}

	pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
		self.user_agent = user_agent.into();
		self
	}
}

/// Fetches the raw chain listing over HTTP
///
/// Every call performs a network round trip; wrap it in
/// [`CachedChainSource`](crate::CachedChainSource) for memoization.
#[derive(Debug, Clone)]
pub struct DirectoryClient {
	client: Client,
	config: DirectoryConfig,
}

impl DirectoryClient {
	pub fn new(config: DirectoryConfig) -> FetchResult<Self> {
		let mut headers = HeaderMap::new();
		headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
		let user_agent = HeaderValue::from_str(&config.user_agent).map_err(|e| {
			FetchError::Client(format!("invalid user agent {:?}: {}", config.user_agent, e))
		})?;
		headers.insert(USER_AGENT, user_agent);

		let client = Client::builder()
			.default_headers(headers)
			.timeout(config.timeout)
			.build()
			.map_err(|e| FetchError::Client(describe_error(&e)))?;

		Ok(Self { client, config })
	}

	async fn request(&self, params: FetchParameters) -> FetchResult<Value> {
		let response = self
			.client
			.get(&self.config.chains_url)
			.query(&params.query_pairs())
			.send()
			.await
			.map_err(|e| self.map_send_error(e))?;

		let status = response.status();
		if !status.is_success() {
			return Err(FetchError::HttpStatus {
				status_code: status.as_u16(),
				reason: status
					.canonical_reason()
					.unwrap_or("unexpected status")
					.to_string(),
			});
		}

		let body = response.text().await.map_err(|e| self.map_send_error(e))?;
		debug!("API response body: {} bytes", body.len());

		serde_json::from_str(&body).map_err(|e| FetchError::InvalidBody(e.to_string()))
	}

	fn map_send_error(&self, err: reqwest::Error) -> FetchError {
		if err.is_timeout() {
			FetchError::Timeout {
				timeout_ms: self.config.timeout.as_millis() as u64,
			}
		} else {
			FetchError::Transport(describe_error(&err))
		}
	}
}

#[async_trait]
impl ChainSource for DirectoryClient {
	async fn fetch_chains(&self, params: FetchParameters) -> FetchResult<Value> {
		debug!(
			"Fetching data from API at {} with params: {}",
			self.config.chains_url, params
		);

		let result = self.request(params).await;
		match &result {
			Ok(_) => info!("API response received successfully for {}", params),
			Err(e) => error!("{}", e),
		}

		result
	}
}

/// Flatten an error and its sources into one line
fn describe_error(err: &(dyn StdError + 'static)) -> String {
	let mut message = err.to_string();
	let mut source = err.source();
	while let Some(cause) = source {
		let cause_text = cause.to_string();
		if !message.contains(&cause_text) {
			message.push_str(": ");
			message.push_str(&cause_text);
		}
		source = cause.source();
	}
	message
}
