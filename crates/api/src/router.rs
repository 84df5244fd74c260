use axum::{
	http::header::{HeaderName, HeaderValue},
	routing::get,
	Router,
};
use tower::ServiceBuilder;
use tower_http::{
	compression::CompressionLayer,
	cors::CorsLayer,
	request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer},
	set_header::SetResponseHeaderLayer,
	trace::TraceLayer,
};
use tracing::Level;

use crate::handlers::{clear_cache, get_cache_stats, get_chains, get_columns, health};
use crate::state::AppState;

pub fn create_router() -> Router<AppState> {
	let cors = CorsLayer::permissive();
	let trace = TraceLayer::new_for_http()
		.make_span_with(|req: &axum::http::Request<_>| {
			let req_id = req
				.headers()
				.get("x-request-id")
				.and_then(|v| v.to_str().ok())
				.unwrap_or("-");
			tracing::info_span!(
				"http_request",
				method = %req.method(),
				uri = %req.uri(),
				req_id
			)
		})
		.on_request(tower_http::trace::DefaultOnRequest::new().level(Level::INFO))
		.on_response(
			tower_http::trace::DefaultOnResponse::new()
				.level(Level::INFO)
				.latency_unit(tower_http::LatencyUnit::Millis),
		);
	let req_id = ServiceBuilder::new()
		.layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
		.layer(PropagateRequestIdLayer::x_request_id());

	let router = Router::new()
		.route("/health", get(health))
		.route("/api/v1/chains", get(get_chains))
		.route("/api/v1/chains/columns", get(get_columns))
		.route("/api/v1/cache", get(get_cache_stats).delete(clear_cache));

	let router = router
		.layer(cors)
		.layer(CompressionLayer::new())
		.layer(trace)
		.layer(req_id);

	add_response_headers(router)
}

/// Headers every JSON response carries unless a handler set them
fn add_response_headers<S>(router: Router<S>) -> Router<S>
where
	S: Clone + Send + Sync + 'static,
{
	router.layer(
		ServiceBuilder::new()
			.layer(SetResponseHeaderLayer::if_not_present(
				HeaderName::from_static("x-content-type-options"),
				HeaderValue::from_static("nosniff"),
			))
			.layer(SetResponseHeaderLayer::if_not_present(
				HeaderName::from_static("cache-control"),
				HeaderValue::from_static("no-cache"),
			)),
	)
}
