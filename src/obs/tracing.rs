// self
use crate::{_prelude::*, config::Endpoint};
#[cfg(feature = "tracing")] use crate::obs::Operation;

/// Opens the `okta_oidc.request` span for `operation`; `outcome` is filled in when the
/// operation finishes.
#[cfg(feature = "tracing")]
pub(crate) fn request_span(operation: Operation) -> tracing::Span {
	tracing::info_span!(
		"okta_oidc.request",
		operation = operation.as_str(),
		outcome = tracing::field::Empty
	)
}

/// Warns that the client was built from incomplete configuration.
pub(crate) fn config_incomplete(missing: &[&'static str]) {
	#[cfg(feature = "tracing")]
	tracing::warn!(?missing, "Okta configuration is incomplete. Some features may not work.");
	#[cfg(not(feature = "tracing"))]
	let _ = missing;
}

/// Reports a non-200 provider response together with its raw body.
pub(crate) fn error_response(endpoint: Endpoint, status: u16, body: &[u8]) {
	#[cfg(feature = "tracing")]
	{
		let body = String::from_utf8_lossy(body);

		tracing::error!(
			endpoint = endpoint.as_str(),
			status,
			%body,
			"Provider returned an error response."
		);
	}
	#[cfg(not(feature = "tracing"))]
	let _ = (endpoint, status, body);
}

/// Reports a failed token validation.
pub(crate) fn validation_failed(err: &Error) {
	#[cfg(feature = "tracing")]
	tracing::error!(error = %err, "Token validation failed.");
	#[cfg(not(feature = "tracing"))]
	let _ = err;
}
