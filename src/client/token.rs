//! Authorization code exchange at the token endpoint.

// crates.io
use oauth2::{
	HttpRequest,
	http::{
		Method, Request,
		header::{ACCEPT, CONTENT_TYPE},
	},
};
use url::form_urlencoded::Serializer;
// self
use crate::{
	_prelude::*,
	auth::TokenResponse,
	client::{self, OktaClient},
	config::Endpoint,
	error::ConfigError,
	http::{self, ProviderHttpClient},
	obs::{self, Operation},
};

impl<C> OktaClient<C>
where
	C: ?Sized + ProviderHttpClient,
{
	/// Exchanges an authorization code for tokens.
	///
	/// Sends one form-encoded `grant_type=authorization_code` POST carrying the code,
	/// redirect URI, client id, and client secret. An HTTP 200 yields the decoded body
	/// verbatim. Any other status logs the body at ERROR and fails with
	/// [`Error::TokenExchangeFailed`]; nothing is retried.
	pub async fn exchange_code(&self, code: &str) -> Result<TokenResponse> {
		self.observe(Operation::ExchangeCode, Result::is_ok, async move {
			let request = self.token_request(code)?;
			let (response, meta) =
				http::dispatch(self.http_client.as_ref(), Endpoint::Token, request).await?;
			let status = response.status().as_u16();

			if status != 200 {
				obs::error_response(Endpoint::Token, status, response.body());

				return Err(Error::TokenExchangeFailed { status, retry_after: meta.retry_after });
			}

			client::decode_json::<TokenResponse>(Endpoint::Token, response.body())
		})
		.await
	}

	fn token_request(&self, code: &str) -> Result<HttpRequest> {
		let body = Serializer::new(String::new())
			.append_pair("grant_type", "authorization_code")
			.append_pair("code", code)
			.append_pair("redirect_uri", &self.config.redirect_uri)
			.append_pair("client_id", &self.config.client_id)
			.append_pair("client_secret", self.config.client_secret.expose())
			.finish();

		Request::builder()
			.method(Method::POST)
			.uri(self.endpoints.token.as_str())
			.header(CONTENT_TYPE, "application/x-www-form-urlencoded")
			.header(ACCEPT, "application/json")
			.body(body.into_bytes())
			.map_err(|err| ConfigError::from(err).into())
	}
}
