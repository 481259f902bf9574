//! Userinfo claims and group memberships.

// crates.io
use oauth2::{
	HttpRequest,
	http::{
		Method, Request,
		header::{ACCEPT, AUTHORIZATION},
	},
};
// self
use crate::{
	_prelude::*,
	auth::UserInfo,
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
	/// Fetches the userinfo claims for `access_token`.
	///
	/// Sends one GET with `Authorization: Bearer <token>`. Any status other than 200 logs
	/// the body at ERROR and fails with [`Error::UserInfoFailed`].
	pub async fn user_info(&self, access_token: &str) -> Result<UserInfo> {
		self.observe(Operation::UserInfo, Result::is_ok, async move {
			let request = self.userinfo_request(access_token)?;
			let (response, meta) =
				http::dispatch(self.http_client.as_ref(), Endpoint::UserInfo, request).await?;
			let status = response.status().as_u16();

			if status != 200 {
				obs::error_response(Endpoint::UserInfo, status, response.body());

				return Err(Error::UserInfoFailed { status, retry_after: meta.retry_after });
			}

			client::decode_json::<UserInfo>(Endpoint::UserInfo, response.body())
		})
		.await
	}

	/// Returns the `groups` claim for `access_token`, empty when the provider omits it.
	///
	/// Userinfo failures propagate unchanged.
	pub async fn user_groups(&self, access_token: &str) -> Result<Vec<String>> {
		self.observe(Operation::UserGroups, Result::is_ok, async move {
			self.user_info(access_token).await?.groups()
		})
		.await
	}

	fn userinfo_request(&self, access_token: &str) -> Result<HttpRequest> {
		Request::builder()
			.method(Method::GET)
			.uri(self.endpoints.userinfo.as_str())
			.header(AUTHORIZATION, format!("Bearer {access_token}"))
			.header(ACCEPT, "application/json")
			.body(Vec::new())
			.map_err(|err| ConfigError::from(err).into())
	}
}
