#![cfg(feature = "reqwest")]

// self
use okta_oidc::{
	_preludet::*,
	client::{OktaClient, TokenStatus},
	config::{Endpoint, OktaConfig},
	error::TransportError,
	http::{ProviderHttpClient, ResponseMetadata, ResponseMetadataSlot},
	oauth2::{AsyncHttpClient, HttpClientError, HttpRequest, HttpResponse, http::StatusCode},
	obs::Logger,
};

#[derive(Debug)]
enum FakeTransportError {
	Unreachable,
}
impl Display for FakeTransportError {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		match self {
			Self::Unreachable => write!(f, "Provider unreachable."),
		}
	}
}
impl StdError for FakeTransportError {}

#[derive(Clone, Debug)]
struct RecordedRequest {
	uri: String,
	authorization: Option<String>,
}

/// Canned transport: either fails every call or answers every call with one response.
#[derive(Clone, Default)]
struct FakeHttpClient {
	reply: Option<(u16, &'static str)>,
	requests: Arc<Mutex<Vec<RecordedRequest>>>,
}
impl FakeHttpClient {
	fn unreachable() -> Self {
		Self::default()
	}

	fn replying(status: u16, body: &'static str) -> Self {
		Self { reply: Some((status, body)), ..Self::default() }
	}

	fn recorded_requests(&self) -> Vec<RecordedRequest> {
		self.requests.lock().clone()
	}
}
impl ProviderHttpClient for FakeHttpClient {
	type Handle = FakeHttpHandle;
	type TransportError = FakeTransportError;

	fn with_metadata(&self, slot: ResponseMetadataSlot) -> Self::Handle {
		FakeHttpHandle { slot, client: self.clone() }
	}
}

struct FakeHttpHandle {
	slot: ResponseMetadataSlot,
	client: FakeHttpClient,
}
impl<'a> AsyncHttpClient<'a> for FakeHttpHandle {
	type Error = HttpClientError<FakeTransportError>;
	type Future =
		Pin<Box<dyn Future<Output = Result<HttpResponse, Self::Error>> + 'a + Send + Sync>>;

	fn call(&'a self, request: HttpRequest) -> Self::Future {
		let slot = self.slot.clone();
		let reply = self.client.reply;

		self.client.requests.lock().push(RecordedRequest {
			uri: request.uri().to_string(),
			authorization: request
				.headers()
				.get("authorization")
				.and_then(|value| value.to_str().ok())
				.map(str::to_owned),
		});

		Box::pin(async move {
			assert!(
				slot.take().is_none(),
				"ResponseMetadataSlot must be clear before dispatching a request."
			);

			let Some((status, body)) = reply else {
				return Err(HttpClientError::Reqwest(Box::new(FakeTransportError::Unreachable)));
			};
			let mut response = HttpResponse::new(body.as_bytes().to_vec());

			*response.status_mut() =
				StatusCode::from_u16(status).expect("Fake status should be a valid HTTP status.");

			if status == 429 {
				slot.store(ResponseMetadata {
					status: Some(status),
					retry_after: Some(Duration::seconds(5)),
				});
			}

			Ok(response)
		})
	}
}

fn fake_client(http_client: FakeHttpClient) -> OktaClient<FakeHttpClient> {
	OktaClient::with_http_client(
		test_config("https://acme.okta.com"),
		Arc::new(http_client),
		Logger::global(),
	)
}

#[tokio::test]
async fn unreachable_provider_is_unavailable_not_rejected() {
	let client = fake_client(FakeHttpClient::unreachable());

	match client.check_token("any").await {
		TokenStatus::Unavailable(Error::Transport(TransportError::Network {
			endpoint: Endpoint::UserInfo,
			..
		})) => {},
		other => panic!("Unexpected token status: {other:?}."),
	}

	assert_eq!(client.validate_token("any").await, (false, None));
}

#[tokio::test]
async fn unreachable_provider_fails_code_exchange() {
	let client = fake_client(FakeHttpClient::unreachable());
	let err = client.exchange_code("code").await.expect_err("Exchange should fail.");

	assert!(err.is_transient());
	assert!(matches!(
		err,
		Error::Transport(TransportError::Network { endpoint: Endpoint::Token, .. })
	));
}

#[tokio::test]
async fn custom_transport_receives_fully_formed_requests() {
	let http_client = FakeHttpClient::replying(200, "{\"sub\":\"u1\",\"groups\":[\"ops\"]}");
	let client = fake_client(http_client.clone());
	let groups = client.user_groups("tok").await.expect("Group lookup should succeed.");

	assert_eq!(groups, ["ops"]);

	let requests = http_client.recorded_requests();
	let request = requests.first().expect("One request should have been sent.");

	assert_eq!(requests.len(), 1);
	assert_eq!(request.uri, "https://acme.okta.com/oauth2/v1/userinfo");
	assert_eq!(request.authorization.as_deref(), Some("Bearer tok"));
}

#[tokio::test]
async fn transport_metadata_flows_into_errors() {
	let client = fake_client(FakeHttpClient::replying(429, "slow down"));
	let err = client.user_info("tok").await.expect_err("A 429 response should fail.");

	assert!(matches!(err, Error::UserInfoFailed { status: 429, .. }));
	assert_eq!(err.retry_after(), Some(Duration::seconds(5)));
	assert!(err.is_transient());
}

#[tokio::test]
async fn missing_metadata_falls_back_to_the_response_status() {
	let client = fake_client(FakeHttpClient::replying(500, "oops"));
	let err = client.exchange_code("code").await.expect_err("A 500 response should fail.");

	assert!(matches!(err, Error::TokenExchangeFailed { status: 500, retry_after: None }));
}

#[cfg(feature = "tracing")]
#[test]
fn incomplete_configuration_warns_through_the_injected_logger() {
	let recorder = RecordingSubscriber::default();
	let client: OktaClient<FakeHttpClient> = OktaClient::with_http_client(
		OktaConfig::builder("").client_id("only-client-id").build(),
		Arc::new(FakeHttpClient::unreachable()),
		Logger::with_dispatch(recorder.clone()),
	);

	assert!(!client.is_configured());
	assert!(recorder.contains(tracing::Level::WARN, "org_url"));
	assert!(recorder.contains(tracing::Level::WARN, "client_secret"));
	assert!(!recorder.contains(tracing::Level::WARN, "\"client_id\""));
}

#[cfg(feature = "tracing")]
#[test]
fn complete_configuration_does_not_warn() {
	let recorder = RecordingSubscriber::default();
	let _client: OktaClient<FakeHttpClient> = OktaClient::with_http_client(
		test_config("https://acme.okta.com"),
		Arc::new(FakeHttpClient::unreachable()),
		Logger::with_dispatch(recorder.clone()),
	);

	assert!(recorder.events().is_empty());
}
