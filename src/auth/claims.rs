//! Userinfo claims returned verbatim by the provider.

// std
use std::ops::Deref;
// self
use crate::_prelude::*;

/// Claim carrying the user's group memberships when the `groups` scope was granted.
pub const GROUPS_CLAIM: &str = "groups";

/// Decoded userinfo response.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserInfo(JsonMap<String, JsonValue>);
impl UserInfo {
	/// Wraps an already-decoded JSON object.
	pub fn new(claims: JsonMap<String, JsonValue>) -> Self {
		Self(claims)
	}

	/// Subject identifier.
	pub fn sub(&self) -> Option<&str> {
		self.0.get("sub").and_then(JsonValue::as_str)
	}

	/// Email address, when the `email` scope was granted.
	pub fn email(&self) -> Option<&str> {
		self.0.get("email").and_then(JsonValue::as_str)
	}

	/// Group names from the `groups` claim, in provider order.
	///
	/// An absent or `null` claim yields an empty list. Anything other than an array of
	/// strings fails with [`Error::InvalidClaim`].
	pub fn groups(&self) -> Result<Vec<String>> {
		match self.0.get(GROUPS_CLAIM) {
			None | Some(JsonValue::Null) => Ok(Vec::new()),
			Some(value) => Vec::<String>::deserialize(value)
				.map_err(|source| Error::InvalidClaim { claim: GROUPS_CLAIM, source }),
		}
	}

	/// Borrows the raw JSON object.
	pub fn as_map(&self) -> &JsonMap<String, JsonValue> {
		&self.0
	}

	/// Returns the raw JSON object.
	pub fn into_inner(self) -> JsonMap<String, JsonValue> {
		self.0
	}
}
impl Deref for UserInfo {
	type Target = JsonMap<String, JsonValue>;

	fn deref(&self) -> &Self::Target {
		&self.0
	}
}
impl From<JsonMap<String, JsonValue>> for UserInfo {
	fn from(claims: JsonMap<String, JsonValue>) -> Self {
		Self(claims)
	}
}
