//! Provider client and its operations.
//!
//! [`OktaClient`] holds the immutable configuration, the derived endpoints, the HTTP
//! transport, and the [`Logger`] it reports through. Each operation lives in its own
//! module as an `impl` block:
//!
//! - [`authorize`]: builds the browser redirect URL (no network call).
//! - [`token`]: exchanges an authorization code at the token endpoint.
//! - [`userinfo`]: fetches userinfo claims and group memberships.
//! - [`validate`]: resolves a bearer token against userinfo.
//!
//! Every network operation is a single request/response round trip. Nothing is cached
//! and nothing is retried.

pub mod authorize;
pub mod token;
pub mod userinfo;
pub mod validate;

pub use authorize::*;
pub use validate::*;

// crates.io
use serde::de::DeserializeOwned;
// self
use crate::{
	_prelude::*,
	config::{Endpoint, OktaConfig, ProviderEndpoints},
	http::ProviderHttpClient,
	obs::{self, Logger, Observation, Operation, Outcome},
};
#[cfg(feature = "reqwest")] use crate::http::ReqwestHttpClient;

#[cfg(feature = "reqwest")]
/// Client specialized for the crate's default reqwest transport.
pub type ReqwestOktaClient = OktaClient<ReqwestHttpClient>;

/// OAuth 2.0 / OIDC authorization-code client bound to one Okta organization.
///
/// Configuration is fixed at construction. A client built from incomplete configuration
/// is still returned; it only emits a warning through its [`Logger`]. Clones share the
/// transport and are safe to use from many tasks at once.
pub struct OktaClient<C>
where
	C: ?Sized + ProviderHttpClient,
{
	config: OktaConfig,
	endpoints: ProviderEndpoints,
	http_client: Arc<C>,
	logger: Logger,
}
impl<C> OktaClient<C>
where
	C: ?Sized + ProviderHttpClient,
{
	/// Creates a client that reuses the caller-provided transport and logger.
	pub fn with_http_client(
		config: OktaConfig,
		http_client: impl Into<Arc<C>>,
		logger: Logger,
	) -> Self {
		let missing = config.missing_fields();

		if !missing.is_empty() {
			logger.in_scope(|| obs::config_incomplete(&missing));
		}

		let endpoints = config.endpoints();

		Self { config, endpoints, http_client: http_client.into(), logger }
	}

	/// Configuration the client was built from.
	pub fn config(&self) -> &OktaConfig {
		&self.config
	}

	/// Endpoints derived from the organization base URL.
	pub fn endpoints(&self) -> &ProviderEndpoints {
		&self.endpoints
	}

	/// Logger the client reports through.
	pub fn logger(&self) -> &Logger {
		&self.logger
	}

	/// Returns true when every required configuration field is populated.
	pub fn is_configured(&self) -> bool {
		self.config.is_complete()
	}

	/// Runs `fut` under the client's logger as one observed `operation`; `succeeded`
	/// decides the outcome reported for its output.
	async fn observe<F>(
		&self,
		operation: Operation,
		succeeded: fn(&F::Output) -> bool,
		fut: F,
	) -> F::Output
	where
		F: Future,
	{
		self.logger
			.scope(async move {
				let observation = Observation::begin(operation);
				let output = observation.run(fut).await;

				observation.finish(Outcome::from(succeeded(&output)));

				output
			})
			.await
	}
}
#[cfg(feature = "reqwest")]
impl OktaClient<ReqwestHttpClient> {
	/// Creates a client with a default reqwest transport that logs through the global
	/// subscriber.
	pub fn new(config: OktaConfig) -> Self {
		Self::with_logger(config, Logger::global())
	}

	/// Creates a client with a default reqwest transport that logs through `logger`.
	pub fn with_logger(config: OktaConfig, logger: Logger) -> Self {
		Self::with_http_client(config, ReqwestHttpClient::default(), logger)
	}

	/// Creates a client from the `OKTA_*` environment variables.
	pub fn from_env() -> Self {
		Self::new(OktaConfig::from_env())
	}
}
impl<C> Clone for OktaClient<C>
where
	C: ?Sized + ProviderHttpClient,
{
	fn clone(&self) -> Self {
		Self {
			config: self.config.clone(),
			endpoints: self.endpoints.clone(),
			http_client: Arc::clone(&self.http_client),
			logger: self.logger.clone(),
		}
	}
}
impl<C> Debug for OktaClient<C>
where
	C: ?Sized + ProviderHttpClient,
{
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.debug_struct("OktaClient")
			.field("endpoints", &self.endpoints)
			.field("client_id", &self.config.client_id)
			.field("client_secret_set", &!self.config.client_secret.is_empty())
			.field("redirect_uri", &self.config.redirect_uri)
			.field("logger", &self.logger)
			.finish()
	}
}

/// Decodes a successful response body, keeping the failing path on error.
pub(crate) fn decode_json<T>(endpoint: Endpoint, body: &[u8]) -> Result<T>
where
	T: DeserializeOwned,
{
	let mut de = serde_json::Deserializer::from_slice(body);

	serde_path_to_error::deserialize(&mut de)
		.map_err(|source| Error::ResponseParse { endpoint, source })
}
