#![cfg(feature = "reqwest")]

// crates.io
use httpmock::prelude::*;
use serde_json::json;
// self
use okta_oidc::{
	_preludet::*,
	client::OktaClient,
	config::{Endpoint, OktaConfig},
	error::TransportError,
};

const TOKEN_PATH: &str = "/oauth2/v1/token";

#[tokio::test]
async fn exchange_code_returns_the_provider_body_verbatim() {
	let server = MockServer::start_async().await;
	let client = build_reqwest_test_client(&server.base_url());
	let mock = server
		.mock_async(|when, then| {
			when.method(POST)
				.path(TOKEN_PATH)
				.header("content-type", "application/x-www-form-urlencoded")
				.header("accept", "application/json");
			then.status(200)
				.header("content-type", "application/json")
				.body("{\"access_token\":\"abc\",\"id_token\":\"xyz\"}");
		})
		.await;
	let tokens = client
		.exchange_code("valid-code")
		.await
		.expect("Authorization code exchange should succeed.");

	mock.assert_async().await;

	let expected = json!({ "access_token": "abc", "id_token": "xyz" });

	assert_eq!(Some(tokens.as_map()), expected.as_object());
	assert_eq!(tokens.access_token(), Some("abc"));
	assert_eq!(tokens.id_token(), Some("xyz"));
}

#[tokio::test]
async fn exchange_code_keeps_unknown_fields() {
	let server = MockServer::start_async().await;
	let client = build_reqwest_test_client(&server.base_url());
	let body = json!({
		"access_token": "abc",
		"token_type": "Bearer",
		"expires_in": 3600,
		"scope": "openid profile email groups",
		"id_token": "xyz",
		"vendor": { "tier": "gold" },
	});
	let response_body = body.to_string();
	let mock = server
		.mock_async(|when, then| {
			when.method(POST).path(TOKEN_PATH);
			then.status(200).header("content-type", "application/json").body(response_body.as_str());
		})
		.await;
	let tokens = client.exchange_code("code").await.expect("Exchange should succeed.");

	mock.assert_async().await;

	assert_eq!(serde_json::to_value(&tokens).expect("Tokens should serialize."), body);
	assert_eq!(tokens.expires_in(), Some(Duration::hours(1)));
}

#[cfg(feature = "tracing")]
#[tokio::test]
async fn exchange_code_logs_and_reports_non_200_status() {
	let server = MockServer::start_async().await;
	let recorder = RecordingSubscriber::default();
	let client = build_logged_test_client(
		&server.base_url(),
		okta_oidc::obs::Logger::with_dispatch(recorder.clone()),
	);
	let mock = server
		.mock_async(|when, then| {
			when.method(POST).path(TOKEN_PATH);
			then.status(400)
				.header("content-type", "application/json")
				.body("{\"error\":\"invalid_grant\",\"error_description\":\"already used\"}");
		})
		.await;
	let err = client.exchange_code("stale-code").await.expect_err("A 400 response should fail.");

	mock.assert_async().await;

	assert!(matches!(err, Error::TokenExchangeFailed { status: 400, retry_after: None }));
	assert_eq!(err.status(), Some(400));
	assert!(err.is_rejection());
	assert!(recorder.contains(tracing::Level::ERROR, "status=400"));
	assert!(recorder.contains(tracing::Level::ERROR, "already used"));
	assert!(recorder.span_contains("okta_oidc.request", "operation=\"exchange_code\""));
	assert!(recorder.span_contains("okta_oidc.request", "outcome=\"failure\""));
}

#[tokio::test]
async fn exchange_code_treats_other_success_codes_as_failures() {
	let server = MockServer::start_async().await;
	let client = build_reqwest_test_client(&server.base_url());
	let mock = server
		.mock_async(|when, then| {
			when.method(POST).path(TOKEN_PATH);
			then.status(201).header("content-type", "application/json").body("{}");
		})
		.await;
	let err = client.exchange_code("code").await.expect_err("Only HTTP 200 is a success.");

	mock.assert_async().await;

	assert!(matches!(err, Error::TokenExchangeFailed { status: 201, .. }));
}

#[tokio::test]
async fn exchange_code_surfaces_retry_after_on_throttling() {
	let server = MockServer::start_async().await;
	let client = build_reqwest_test_client(&server.base_url());
	let mock = server
		.mock_async(|when, then| {
			when.method(POST).path(TOKEN_PATH);
			then.status(503).header("retry-after", "30").body("upstream busy");
		})
		.await;
	let err = client.exchange_code("code").await.expect_err("A 503 response should fail.");

	mock.assert_async().await;

	assert_eq!(err.status(), Some(503));
	assert_eq!(err.retry_after(), Some(Duration::seconds(30)));
	assert!(err.is_transient());
}

#[tokio::test]
async fn exchange_code_reports_malformed_success_bodies() {
	let server = MockServer::start_async().await;
	let client = build_reqwest_test_client(&server.base_url());
	let mock = server
		.mock_async(|when, then| {
			when.method(POST).path(TOKEN_PATH);
			then.status(200).header("content-type", "text/html").body("<html>login</html>");
		})
		.await;
	let err = client.exchange_code("code").await.expect_err("HTML is not a token response.");

	mock.assert_async().await;

	assert!(matches!(err, Error::ResponseParse { endpoint: Endpoint::Token, .. }));
}

#[tokio::test]
async fn exchange_code_without_org_url_fails_in_transport() {
	let client = OktaClient::new(OktaConfig::from_lookup(|_| None));
	let err = client.exchange_code("code").await.expect_err("A relative token URL cannot be sent.");

	assert!(matches!(
		err,
		Error::Transport(TransportError::Network { endpoint: Endpoint::Token, .. })
	));
}
