//! Client configuration, environment loading, and derived provider endpoints.
//!
//! [`OktaConfig`] is resolved once (from the environment, a caller's config file, or the
//! builder) and never mutated afterwards. Incomplete configuration is accepted: the
//! client built from it logs a warning and keeps going, so every operation still
//! produces a request, just one the provider will refuse.

// self
use crate::{_prelude::*, auth::Secret};

/// Redirect URI used when none is configured.
pub const DEFAULT_REDIRECT_URI: &str = "http://localhost:7860/callback";
/// Environment variable holding the organization base URL.
pub const ENV_ORG_URL: &str = "OKTA_ORG_URL";
/// Environment variable holding the client identifier.
pub const ENV_CLIENT_ID: &str = "OKTA_CLIENT_ID";
/// Environment variable holding the client secret.
pub const ENV_CLIENT_SECRET: &str = "OKTA_CLIENT_SECRET";
/// Environment variable holding the redirect URI.
pub const ENV_REDIRECT_URI: &str = "OKTA_REDIRECT_URI";

const AUTHORIZATION_PATH: &str = "/oauth2/v1/authorize";
const TOKEN_PATH: &str = "/oauth2/v1/token";
const USERINFO_PATH: &str = "/oauth2/v1/userinfo";

/// Provider endpoints contacted (or linked to) by the client.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Endpoint {
	/// Browser-facing authorization endpoint.
	Authorization,
	/// Token endpoint used for code exchanges.
	Token,
	/// OIDC userinfo endpoint.
	UserInfo,
}
impl Endpoint {
	/// Returns a stable label suitable for log fields and error messages.
	pub const fn as_str(self) -> &'static str {
		match self {
			Endpoint::Authorization => "authorization",
			Endpoint::Token => "token",
			Endpoint::UserInfo => "userinfo",
		}
	}
}
impl Display for Endpoint {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str(self.as_str())
	}
}

/// Endpoint URLs derived from the organization base URL.
///
/// Values are plain strings built by concatenation so an empty or malformed base URL
/// still yields (unusable) endpoints instead of a construction error.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ProviderEndpoints {
	/// Authorization endpoint used to start the Authorization Code flow.
	pub authorization: String,
	/// Token endpoint used for code exchanges.
	pub token: String,
	/// Userinfo endpoint used for claim lookups and token validation.
	pub userinfo: String,
}
impl ProviderEndpoints {
	/// Derives the org authorization server endpoints from `org_url`.
	pub fn from_org_url(org_url: &str) -> Self {
		let base = org_url.trim_end_matches('/');

		Self {
			authorization: format!("{base}{AUTHORIZATION_PATH}"),
			token: format!("{base}{TOKEN_PATH}"),
			userinfo: format!("{base}{USERINFO_PATH}"),
		}
	}

	/// Returns the URL for `endpoint`.
	pub fn get(&self, endpoint: Endpoint) -> &str {
		match endpoint {
			Endpoint::Authorization => &self.authorization,
			Endpoint::Token => &self.token,
			Endpoint::UserInfo => &self.userinfo,
		}
	}
}

/// Immutable client configuration.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct OktaConfig {
	/// Organization base URL (e.g. `https://example.okta.com`), trailing `/` trimmed.
	#[serde(default, deserialize_with = "deserialize_org_url")]
	pub org_url: String,
	/// OAuth 2.0 client identifier.
	#[serde(default)]
	pub client_id: String,
	/// OAuth 2.0 client secret.
	#[serde(default)]
	pub client_secret: Secret,
	/// Redirect URI registered with the provider.
	#[serde(default = "default_redirect_uri")]
	pub redirect_uri: String,
}
impl OktaConfig {
	/// Creates a new builder for the provided organization base URL.
	pub fn builder(org_url: impl Into<String>) -> OktaConfigBuilder {
		OktaConfigBuilder::new(org_url)
	}

	/// Reads the `OKTA_*` variables from the process environment.
	///
	/// Unset (or non-UTF-8) variables resolve to empty strings, except the redirect URI
	/// which falls back to [`DEFAULT_REDIRECT_URI`].
	pub fn from_env() -> Self {
		Self::from_lookup(|key| std::env::var(key).ok())
	}

	/// Resolves the `OKTA_*` variables through `lookup` instead of the process environment.
	pub fn from_lookup<F>(lookup: F) -> Self
	where
		F: Fn(&str) -> Option<String>,
	{
		let mut builder = Self::builder(lookup(ENV_ORG_URL).unwrap_or_default())
			.client_id(lookup(ENV_CLIENT_ID).unwrap_or_default())
			.client_secret(lookup(ENV_CLIENT_SECRET).unwrap_or_default());

		if let Some(redirect_uri) = lookup(ENV_REDIRECT_URI) {
			builder = builder.redirect_uri(redirect_uri);
		}

		builder.build()
	}

	/// Derives the provider endpoints from the organization base URL.
	pub fn endpoints(&self) -> ProviderEndpoints {
		ProviderEndpoints::from_org_url(&self.org_url)
	}

	/// Names of required fields that are empty.
	pub fn missing_fields(&self) -> Vec<&'static str> {
		let mut missing = Vec::new();

		if self.org_url.is_empty() {
			missing.push("org_url");
		}
		if self.client_id.is_empty() {
			missing.push("client_id");
		}
		if self.client_secret.is_empty() {
			missing.push("client_secret");
		}

		missing
	}

	/// Returns true when every required field is populated.
	pub fn is_complete(&self) -> bool {
		self.missing_fields().is_empty()
	}
}

/// Builder for [`OktaConfig`] values.
#[derive(Debug)]
pub struct OktaConfigBuilder {
	/// Organization base URL.
	pub org_url: String,
	/// OAuth 2.0 client identifier.
	pub client_id: String,
	/// OAuth 2.0 client secret.
	pub client_secret: Secret,
	/// Redirect URI registered with the provider.
	pub redirect_uri: String,
}
impl OktaConfigBuilder {
	/// Creates a new builder seeded with the organization base URL.
	pub fn new(org_url: impl Into<String>) -> Self {
		Self {
			org_url: org_url.into(),
			client_id: String::new(),
			client_secret: Secret::default(),
			redirect_uri: DEFAULT_REDIRECT_URI.into(),
		}
	}

	/// Sets the client identifier.
	pub fn client_id(mut self, client_id: impl Into<String>) -> Self {
		self.client_id = client_id.into();

		self
	}

	/// Sets the client secret.
	pub fn client_secret(mut self, client_secret: impl Into<String>) -> Self {
		self.client_secret = Secret::new(client_secret);

		self
	}

	/// Overrides the redirect URI (defaults to [`DEFAULT_REDIRECT_URI`]).
	pub fn redirect_uri(mut self, redirect_uri: impl Into<String>) -> Self {
		self.redirect_uri = redirect_uri.into();

		self
	}

	/// Consumes the builder. Never fails; see [`OktaConfig::missing_fields`].
	pub fn build(self) -> OktaConfig {
		OktaConfig {
			org_url: trim_org_url(self.org_url),
			client_id: self.client_id,
			client_secret: self.client_secret,
			redirect_uri: self.redirect_uri,
		}
	}
}

fn trim_org_url(mut org_url: String) -> String {
	let trimmed = org_url.trim_end_matches('/').len();

	org_url.truncate(trimmed);

	org_url
}

fn default_redirect_uri() -> String {
	DEFAULT_REDIRECT_URI.into()
}

fn deserialize_org_url<'de, D>(deserializer: D) -> Result<String, D::Error>
where
	D: serde::Deserializer<'de>,
{
	String::deserialize(deserializer).map(trim_org_url)
}
