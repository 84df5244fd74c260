//! Chain listing handlers

use axum::{
	extract::{Query, State},
	http::StatusCode,
	response::Json,
};
use glossary_types::{
	ChainQuery, ChainRecord, Diagnostic, FetchParameters, SortDirection, SortField,
};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::handlers::common::ErrorResponse;
use crate::state::AppState;

/// Query string accepted by `GET /api/v1/chains`
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ChainsQuery {
	pub include_evm: Option<String>,
	pub include_svm: Option<String>,
	pub only_testnets: Option<String>,
	/// Free-text search
	pub q: Option<String>,
	pub sort_by: Option<String>,
	pub order: Option<String>,
}

impl ChainsQuery {
	/// Resolve into a pipeline query, filling gaps from `defaults`
	pub fn into_chain_query(
		self,
		defaults: FetchParameters,
	) -> Result<ChainQuery, (StatusCode, Json<ErrorResponse>)> {
		let sort_by = match self.sort_by.as_deref() {
			Some(raw) => raw
				.parse::<SortField>()
				.map_err(|e| ErrorResponse::bad_request("INVALID_SORT_FIELD", e.to_string()))?,
			None => SortField::default(),
		};
		let direction = match self.order.as_deref() {
			Some(raw) => raw
				.parse::<SortDirection>()
				.map_err(|e| ErrorResponse::bad_request("INVALID_SORT_ORDER", e.to_string()))?,
			None => SortDirection::default(),
		};

		let params = FetchParameters::new(
			parse_toggle("include_evm", self.include_evm.as_deref(), defaults.include_evm)?,
			parse_toggle("include_svm", self.include_svm.as_deref(), defaults.include_svm)?,
			parse_toggle(
				"only_testnets",
				self.only_testnets.as_deref(),
				defaults.only_testnets,
			)?,
		);

		Ok(ChainQuery::new(params)
			.with_search(self.q.unwrap_or_default())
			.sorted_by(sort_by, direction))
	}
}

/// Accepts `true`/`false` in any case; absent means `default`
fn parse_toggle(
	name: &str,
	raw: Option<&str>,
	default: bool,
) -> Result<bool, (StatusCode, Json<ErrorResponse>)> {
	match raw.map(str::trim) {
		None => Ok(default),
		Some(value) if value.eq_ignore_ascii_case("true") => Ok(true),
		Some(value) if value.eq_ignore_ascii_case("false") => Ok(false),
		Some(value) => Err(ErrorResponse::bad_request(
			"INVALID_TOGGLE",
			format!("{} must be true or false, got '{}'", name, value),
		)),
	}
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ChainsResponse {
	pub chains: Vec<ChainRecord>,
	pub total: usize,
	/// Why the list is empty, or `ok`
	pub diagnostic: Diagnostic,
	/// Text to show instead of the table; absent when the run succeeded
	#[serde(skip_serializing_if = "Option::is_none")]
	pub message: Option<String>,
	pub params: FetchParameters,
	pub search: String,
	pub sort_by: SortField,
	pub order: SortDirection,
	pub timestamp: i64,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ColumnInfo {
	pub key: String,
	pub label: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ColumnsResponse {
	pub columns: Vec<ColumnInfo>,
}

/// GET /api/v1/chains - Filtered and sorted chain listing
///
/// Fetch failures and empty directories still answer 200; the `diagnostic`
/// field tells the client what to show instead of the table.
pub async fn get_chains(
	State(state): State<AppState>,
	Query(query): Query<ChainsQuery>,
) -> Result<Json<ChainsResponse>, (StatusCode, Json<ErrorResponse>)> {
	let chain_query = query.into_chain_query(state.default_params)?;
	debug!("Listing chains for {:?}", chain_query);

	let output = state.glossary_service.run(&chain_query).await;

	Ok(Json(ChainsResponse {
		total: output.records.len(),
		chains: output.records,
		message: output.diagnostic.message().map(str::to_string),
		diagnostic: output.diagnostic,
		params: chain_query.params,
		search: chain_query.search,
		sort_by: chain_query.sort_by,
		order: chain_query.direction,
		timestamp: chrono::Utc::now().timestamp(),
	}))
}

/// GET /api/v1/chains/columns - Sortable columns in display order
pub async fn get_columns() -> Json<ColumnsResponse> {
	let columns = SortField::ALL
		.into_iter()
		.map(|field| ColumnInfo {
			key: field.key().to_string(),
			label: field.label().to_string(),
		})
		.collect();

	Json(ColumnsResponse { columns })
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_missing_toggles_use_defaults() {
		let defaults = FetchParameters::new(false, true, true);
		let query = ChainsQuery {
			include_evm: Some("true".to_string()),
			..Default::default()
		}
		.into_chain_query(defaults)
		.unwrap();

		assert_eq!(query.params, FetchParameters::new(true, true, true));
		assert_eq!(query.sort_by, SortField::Name);
		assert_eq!(query.direction, SortDirection::Asc);
		assert!(query.search.is_empty());
	}

	#[test]
	fn test_sort_options_are_parsed() {
		let query = ChainsQuery {
			q: Some("osmo".to_string()),
			sort_by: Some("Chain ID".to_string()),
			order: Some("desc".to_string()),
			..Default::default()
		}
		.into_chain_query(FetchParameters::default())
		.unwrap();

		assert_eq!(query.search, "osmo");
		assert_eq!(query.sort_by, SortField::ChainId);
		assert_eq!(query.direction, SortDirection::Desc);
	}

	#[test]
	fn test_unknown_sort_field_is_bad_request() {
		let (status, Json(body)) = ChainsQuery {
			sort_by: Some("height".to_string()),
			..Default::default()
		}
		.into_chain_query(FetchParameters::default())
		.unwrap_err();

		assert_eq!(status, StatusCode::BAD_REQUEST);
		assert_eq!(body.error, "INVALID_SORT_FIELD");
	}

	#[test]
	fn test_toggles_are_parsed_case_insensitively() {
		let query = ChainsQuery {
			include_svm: Some("FALSE".to_string()),
			only_testnets: Some("True".to_string()),
			..Default::default()
		}
		.into_chain_query(FetchParameters::default())
		.unwrap();

		assert_eq!(query.params, FetchParameters::new(true, false, true));
	}

	#[test]
	fn test_malformed_toggle_is_bad_request() {
		let (status, Json(body)) = ChainsQuery {
			include_evm: Some("yes".to_string()),
			..Default::default()
		}
		.into_chain_query(FetchParameters::default())
		.unwrap_err();

		assert_eq!(status, StatusCode::BAD_REQUEST);
		assert_eq!(body.error, "INVALID_TOGGLE");
		assert!(body.message.contains("include_evm"));
	}
}
