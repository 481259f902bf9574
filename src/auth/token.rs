//! Token endpoint response returned verbatim to callers.

// std
use std::ops::Deref;
// self
use crate::_prelude::*;

/// Decoded token endpoint response.
///
/// The JSON object is kept exactly as the provider sent it (`access_token`, `id_token`,
/// `token_type`, `expires_in`, and any vendor extensions). Accessors read well-known
/// keys without validating them; a missing or mistyped key simply yields `None`.
#[derive(Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TokenResponse(JsonMap<String, JsonValue>);
impl TokenResponse {
	/// Wraps an already-decoded JSON object.
	pub fn new(fields: JsonMap<String, JsonValue>) -> Self {
		Self(fields)
	}

	/// Returns the `access_token` value. Callers must avoid logging this string.
	pub fn access_token(&self) -> Option<&str> {
		self.str_field("access_token")
	}

	/// Returns the `id_token` value (a JWT, not verified here).
	pub fn id_token(&self) -> Option<&str> {
		self.str_field("id_token")
	}

	/// Returns the `refresh_token` value, when `offline_access` was granted.
	pub fn refresh_token(&self) -> Option<&str> {
		self.str_field("refresh_token")
	}

	/// Returns the `token_type` value (usually `Bearer`).
	pub fn token_type(&self) -> Option<&str> {
		self.str_field("token_type")
	}

	/// Returns the space-delimited `scope` value granted by the provider.
	pub fn scope(&self) -> Option<&str> {
		self.str_field("scope")
	}

	/// Returns `expires_in` as a duration.
	pub fn expires_in(&self) -> Option<Duration> {
		self.0.get("expires_in").and_then(JsonValue::as_i64).map(Duration::seconds)
	}

	/// Borrows the raw JSON object.
	pub fn as_map(&self) -> &JsonMap<String, JsonValue> {
		&self.0
	}

	/// Returns the raw JSON object.
	pub fn into_inner(self) -> JsonMap<String, JsonValue> {
		self.0
	}

	fn str_field(&self, key: &str) -> Option<&str> {
		self.0.get(key).and_then(JsonValue::as_str)
	}
}
impl Deref for TokenResponse {
	type Target = JsonMap<String, JsonValue>;

	fn deref(&self) -> &Self::Target {
		&self.0
	}
}
impl From<JsonMap<String, JsonValue>> for TokenResponse {
	fn from(fields: JsonMap<String, JsonValue>) -> Self {
		Self(fields)
	}
}
impl Debug for TokenResponse {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.debug_struct("TokenResponse").field("keys", &self.0.keys().collect::<Vec<_>>()).finish()
	}
}
