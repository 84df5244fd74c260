use axum::{http::StatusCode, response::Json};
use serde::{Deserialize, Serialize};

/// Error response format shared by handlers
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
	pub error: String,
	pub message: String,
	pub timestamp: i64,
}

impl ErrorResponse {
	pub fn bad_request(error: &str, message: impl Into<String>) -> (StatusCode, Json<Self>) {
		(
			StatusCode::BAD_REQUEST,
			Json(Self {
				error: error.to_string(),
				message: message.into(),
				timestamp: chrono::Utc::now().timestamp(),
			}),
		)
	}
}
