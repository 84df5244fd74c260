//! Chain listing E2E tests against a local fake directory

mod mocks;

use crate::mocks::{unreachable_base_url, FakeDirectory, TestServer};
use axum::http::StatusCode;
use reqwest::Client;
use serde_json::{json, Value};

async fn get_json(client: &Client, url: String) -> Value {
	let resp = client.get(url).send().await.unwrap();
	assert_eq!(resp.status(), StatusCode::OK);
	resp.json().await.unwrap()
}

#[tokio::test]
async fn test_single_chain_is_normalized() {
	let directory = FakeDirectory::serving(json!({
		"chains": [{"chain_name": "Osmosis", "chain_id": "osmosis-1"}]
	}))
	.await;
	let server = TestServer::spawn_against(&directory.base_url)
		.await
		.expect("Failed to start test server");
	let client = Client::new();

	let body = get_json(&client, format!("{}/api/v1/chains", server.base_url)).await;

	assert_eq!(body["diagnostic"]["status"], "ok");
	assert_eq!(body["total"], 1);
	assert_eq!(
		body["chains"][0],
		json!({
			"logoUri": "N/A",
			"name": "osmosis",
			"chainId": "osmosis-1",
			"pfmEnabled": "N/A",
			"chainType": "N/A",
			"isTestnet": "N/A",
			"prettyName": "N/A",
			"bech32Prefix": ""
		})
	);

	server.abort();
}

#[tokio::test]
async fn test_missing_chains_key_reports_no_data() {
	let directory = FakeDirectory::serving(json!({"unexpected": true})).await;
	let server = TestServer::spawn_against(&directory.base_url)
		.await
		.expect("Failed to start test server");
	let client = Client::new();

	let body = get_json(&client, format!("{}/api/v1/chains", server.base_url)).await;

	assert_eq!(body["diagnostic"]["status"], "no_data");
	assert_eq!(body["chains"], json!([]));
	assert_eq!(body["total"], 0);

	server.abort();
}

#[tokio::test]
async fn test_search_is_case_insensitive() {
	let directory = FakeDirectory::serving(json!({"chains": [
		{"chain_name": "osmosis", "chain_id": "osmosis-1"},
		{"chain_name": "Juno", "chain_id": "juno-1"}
	]}))
	.await;
	let server = TestServer::spawn_against(&directory.base_url)
		.await
		.expect("Failed to start test server");
	let client = Client::new();

	let body = get_json(&client, format!("{}/api/v1/chains?q=OSMO", server.base_url)).await;

	assert_eq!(body["total"], 1);
	assert_eq!(body["chains"][0]["name"], "osmosis");
	assert_eq!(body["search"], "OSMO");

	server.abort();
}

#[tokio::test]
async fn test_sort_by_chain_id_descending() {
	let directory = FakeDirectory::serving(json!({"chains": [
		{"chain_name": "alpha", "chain_id": "a-1"},
		{"chain_name": "bravo", "chain_id": "b-2"},
		{"chain_name": "charlie", "chain_id": "c-3"}
	]}))
	.await;
	let server = TestServer::spawn_against(&directory.base_url)
		.await
		.expect("Failed to start test server");
	let client = Client::new();

	let body = get_json(
		&client,
		format!("{}/api/v1/chains?sort_by=chainId&order=desc", server.base_url),
	)
	.await;

	let ids: Vec<&str> = body["chains"]
		.as_array()
		.unwrap()
		.iter()
		.map(|chain| chain["chainId"].as_str().unwrap())
		.collect();
	assert_eq!(ids, vec!["c-3", "b-2", "a-1"]);
	assert_eq!(body["sort_by"], "chainId");
	assert_eq!(body["order"], "desc");

	server.abort();
}

#[tokio::test]
async fn test_unreachable_directory_reports_fetch_error() {
	let server = TestServer::spawn_against(&unreachable_base_url().await)
		.await
		.expect("Failed to start test server");
	let client = Client::new();

	let body = get_json(&client, format!("{}/api/v1/chains", server.base_url)).await;

	assert_eq!(body["diagnostic"]["status"], "fetch_error");
	let message = body["diagnostic"]["message"].as_str().unwrap();
	assert!(message.starts_with("Error fetching data from API"));
	assert_eq!(body["chains"], json!([]));

	server.abort();
}

#[tokio::test]
async fn test_directory_http_error_reports_fetch_error() {
	let directory = FakeDirectory::failing(StatusCode::SERVICE_UNAVAILABLE).await;
	let server = TestServer::spawn_against(&directory.base_url)
		.await
		.expect("Failed to start test server");
	let client = Client::new();

	let body = get_json(&client, format!("{}/api/v1/chains", server.base_url)).await;

	assert_eq!(body["diagnostic"]["status"], "fetch_error");
	assert!(body["diagnostic"]["message"]
		.as_str()
		.unwrap()
		.contains("503"));

	server.abort();
}

#[tokio::test]
async fn test_identical_toggles_hit_directory_once() {
	let directory = FakeDirectory::serving(json!({"chains": [{"chain_name": "juno"}]})).await;
	let server = TestServer::spawn_against(&directory.base_url)
		.await
		.expect("Failed to start test server");
	let client = Client::new();

	let url = format!("{}/api/v1/chains", server.base_url);
	get_json(&client, url.clone()).await;
	get_json(&client, format!("{}?q=ju&sort_by=name&order=desc", url)).await;
	assert_eq!(directory.hits(), 1);

	get_json(&client, format!("{}?only_testnets=true", url)).await;
	assert_eq!(directory.hits(), 2);

	assert_eq!(
		directory.queries(),
		vec![
			"include_evm=true&include_svm=true&only_testnets=false".to_string(),
			"include_evm=true&include_svm=true&only_testnets=true".to_string(),
		]
	);

	let stats = get_json(&client, format!("{}/api/v1/cache", server.base_url)).await;
	assert_eq!(stats["entries"], 2);
	assert_eq!(stats["ttl_secs"], 3600);

	server.abort();
}

#[tokio::test]
async fn test_clearing_cache_forces_refetch() {
	let directory = FakeDirectory::serving(json!({"chains": [{"chain_name": "juno"}]})).await;
	let server = TestServer::spawn_against(&directory.base_url)
		.await
		.expect("Failed to start test server");
	let client = Client::new();

	let url = format!("{}/api/v1/chains", server.base_url);
	get_json(&client, url.clone()).await;

	let resp = client
		.delete(format!("{}/api/v1/cache", server.base_url))
		.send()
		.await
		.unwrap();
	assert_eq!(resp.status(), StatusCode::OK);
	let cleared: Value = resp.json().await.unwrap();
	assert_eq!(cleared["cleared"], 1);

	get_json(&client, url).await;
	assert_eq!(directory.hits(), 2);

	server.abort();
}

#[tokio::test]
async fn test_failed_fetch_is_retried() {
	let directory = FakeDirectory::failing(StatusCode::BAD_GATEWAY).await;
	let server = TestServer::spawn_against(&directory.base_url)
		.await
		.expect("Failed to start test server");
	let client = Client::new();

	let url = format!("{}/api/v1/chains", server.base_url);
	get_json(&client, url.clone()).await;
	get_json(&client, url).await;

	assert_eq!(directory.hits(), 2);

	server.abort();
}
