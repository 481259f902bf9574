//! Authorization redirect URL construction.

// crates.io
use url::form_urlencoded::Serializer;
// self
use crate::{client::OktaClient, http::ProviderHttpClient};

/// Scopes requested on every authorization redirect.
pub const AUTHORIZATION_SCOPE: &str = "openid profile email groups";

impl<C> OktaClient<C>
where
	C: ?Sized + ProviderHttpClient,
{
	/// Builds the URL that starts the Authorization Code flow.
	///
	/// `state` is caller-generated and should be unguessable per flow; it is embedded as-is
	/// and not remembered or validated here. The query carries `client_id`,
	/// `response_type=code`, the fixed [`AUTHORIZATION_SCOPE`], `redirect_uri`, and `state`,
	/// in that order. Incomplete configuration yields empty values rather than an error.
	pub fn authorization_url(&self, state: &str) -> String {
		let query = Serializer::new(String::new())
			.append_pair("client_id", &self.config.client_id)
			.append_pair("response_type", "code")
			.append_pair("scope", AUTHORIZATION_SCOPE)
			.append_pair("redirect_uri", &self.config.redirect_uri)
			.append_pair("state", state)
			.finish();

		format!("{}?{query}", self.endpoints.authorization)
	}
}
