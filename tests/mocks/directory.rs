//! Fake chain directory served from a local port

use axum::{
	extract::{RawQuery, State},
	http::StatusCode,
	response::{IntoResponse, Response},
	routing::get,
	Json, Router,
};
use serde_json::Value;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use tokio::task::JoinHandle;

#[derive(Clone)]
struct DirectoryState {
	payload: Value,
	status: StatusCode,
	hits: Arc<AtomicUsize>,
	queries: Arc<Mutex<Vec<String>>>,
}

/// Directory answering `GET /v2/info/chains` with a fixed payload
pub struct FakeDirectory {
	pub base_url: String,
	hits: Arc<AtomicUsize>,
	queries: Arc<Mutex<Vec<String>>>,
	handle: JoinHandle<()>,
}

impl FakeDirectory {
	pub async fn serving(payload: Value) -> Self {
		Self::spawn(payload, StatusCode::OK).await
	}

	#[allow(dead_code)]
	pub async fn failing(status: StatusCode) -> Self {
		Self::spawn(Value::Null, status).await
	}

	async fn spawn(payload: Value, status: StatusCode) -> Self {
		let hits = Arc::new(AtomicUsize::new(0));
		let queries = Arc::new(Mutex::new(Vec::new()));
		let state = DirectoryState {
			payload,
			status,
			hits: Arc::clone(&hits),
			queries: Arc::clone(&queries),
		};

		let app = Router::new()
			.route("/v2/info/chains", get(list_chains))
			.with_state(state);

		let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
			.await
			.expect("bind fake directory");
		let addr = listener.local_addr().expect("fake directory address");
		let handle = tokio::spawn(async move {
			axum::serve(listener, app).await.expect("fake directory");
		});

		Self {
			base_url: format!("http://{}", addr),
			hits,
			queries,
			handle,
		}
	}

	/// Number of requests the directory has answered
	pub fn hits(&self) -> usize {
		self.hits.load(Ordering::SeqCst)
	}

	/// Raw query strings received, oldest first
	#[allow(dead_code)]
	pub fn queries(&self) -> Vec<String> {
		self.queries.lock().expect("queries lock").clone()
	}
}

impl Drop for FakeDirectory {
	fn drop(&mut self) {
		self.handle.abort();
	}
}

async fn list_chains(State(state): State<DirectoryState>, RawQuery(query): RawQuery) -> Response {
	state.hits.fetch_add(1, Ordering::SeqCst);
	state
		.queries
		.lock()
		.expect("queries lock")
		.push(query.unwrap_or_default());

	if state.status.is_success() {
		Json(state.payload).into_response()
	} else {
		(state.status, "directory unavailable").into_response()
	}
}

/// Base URL nothing is listening on
#[allow(dead_code)]
pub async fn unreachable_base_url() -> String {
	let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
		.await
		.expect("bind probe");
	let addr = listener.local_addr().expect("probe address");
	drop(listener);
	format!("http://{}", addr)
}
