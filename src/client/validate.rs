//! Bearer token validation backed by the userinfo endpoint.
//!
//! There is no local verification: a token is valid exactly when the provider resolves
//! it to userinfo claims right now. [`OktaClient::check_token`] reports *why* a token was
//! not accepted, while [`OktaClient::validate_token`] keeps the plain valid/invalid
//! contract for callers that only need a yes or no.

// self
use crate::{
	_prelude::*,
	auth::UserInfo,
	client::OktaClient,
	http::ProviderHttpClient,
	obs::{self, Operation},
};

/// Result of resolving a bearer token against the userinfo endpoint.
#[derive(Debug)]
pub enum TokenStatus {
	/// The provider accepted the token and returned these claims.
	Active(UserInfo),
	/// The provider refused the token (HTTP 400, 401, or 403).
	Rejected {
		/// HTTP status returned by the userinfo endpoint.
		status: u16,
	},
	/// The provider could not be asked, or answered with something other than a
	/// rejection (network failure, throttling, 5xx, malformed body).
	Unavailable(Error),
}
impl TokenStatus {
	/// Returns true when the provider accepted the token.
	pub fn is_active(&self) -> bool {
		matches!(self, Self::Active(_))
	}

	/// Borrows the claims of an active token.
	pub fn user_info(&self) -> Option<&UserInfo> {
		match self {
			Self::Active(info) => Some(info),
			_ => None,
		}
	}

	/// Returns the claims of an active token.
	pub fn into_user_info(self) -> Option<UserInfo> {
		match self {
			Self::Active(info) => Some(info),
			_ => None,
		}
	}
}
impl From<Result<UserInfo>> for TokenStatus {
	fn from(result: Result<UserInfo>) -> Self {
		match result {
			Ok(info) => Self::Active(info),
			Err(err) => match err.status() {
				Some(status) if err.is_rejection() => Self::Rejected { status },
				_ => Self::Unavailable(err),
			},
		}
	}
}

impl<C> OktaClient<C>
where
	C: ?Sized + ProviderHttpClient,
{
	/// Resolves `token` against the userinfo endpoint and classifies the outcome.
	///
	/// Failures are logged at ERROR and never returned as `Err`.
	pub async fn check_token(&self, token: &str) -> TokenStatus {
		self.observe(Operation::ValidateToken, TokenStatus::is_active, async move {
			let result = self.user_info(token).await;

			if let Err(err) = &result {
				obs::validation_failed(err);
			}

			TokenStatus::from(result)
		})
		.await
	}

	/// Returns `(true, Some(claims))` when the provider accepts `token`, `(false, None)`
	/// otherwise.
	///
	/// A rejected token and an unreachable provider look the same here; use
	/// [`check_token`](Self::check_token) to tell them apart.
	pub async fn validate_token(&self, token: &str) -> (bool, Option<UserInfo>) {
		match self.check_token(token).await.into_user_info() {
			Some(info) => (true, Some(info)),
			None => (false, None),
		}
	}
}

#[cfg(test)]
mod tests {
	// crates.io
	use serde_json::json;
	// self
	use super::*;
	use crate::{config::Endpoint, error::TransportError};

	#[test]
	fn rejections_keep_their_status() {
		let status = TokenStatus::from(Err(Error::UserInfoFailed { status: 401, retry_after: None }));

		assert!(matches!(status, TokenStatus::Rejected { status: 401 }));
		assert!(!status.is_active());
	}

	#[test]
	fn provider_trouble_is_unavailable() {
		let status = TokenStatus::from(Err(Error::UserInfoFailed { status: 502, retry_after: None }));

		assert!(matches!(
			status,
			TokenStatus::Unavailable(Error::UserInfoFailed { status: 502, .. })
		));

		let status = TokenStatus::from(Err(
			TransportError::Other { endpoint: Endpoint::UserInfo, message: "reset".into() }.into(),
		));

		assert!(matches!(status, TokenStatus::Unavailable(Error::Transport(_))));
	}

	#[test]
	fn active_tokens_expose_claims() {
		let info: UserInfo =
			serde_json::from_value(json!({ "sub": "u1" })).expect("Userinfo fixture should decode.");
		let status = TokenStatus::from(Ok(info.clone()));

		assert!(status.is_active());
		assert_eq!(status.user_info(), Some(&info));
		assert_eq!(status.into_user_info(), Some(info));
	}
}
