//! Client-level error types shared by every provider operation.

// self
use crate::{_prelude::*, config::Endpoint};

/// Client-wide result type alias returning [`Error`] by default.
pub type Result<T, E = Error> = std::result::Result<T, E>;

type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Canonical client error exposed by public APIs.
#[derive(Debug, ThisError)]
pub enum Error {
	/// Local configuration or request-construction problem.
	#[error(transparent)]
	Config(#[from] ConfigError),
	/// Transport failure (DNS, TCP, TLS) before any HTTP status was received.
	#[error(transparent)]
	Transport(#[from] TransportError),

	/// Token endpoint answered the code exchange with a non-200 status.
	#[error("Failed to exchange code for tokens: HTTP {status}.")]
	TokenExchangeFailed {
		/// HTTP status code returned by the token endpoint.
		status: u16,
		/// Retry-After hint from upstream, if supplied.
		retry_after: Option<Duration>,
	},
	/// Userinfo endpoint answered with a non-200 status.
	#[error("Failed to get user info: HTTP {status}.")]
	UserInfoFailed {
		/// HTTP status code returned by the userinfo endpoint.
		status: u16,
		/// Retry-After hint from upstream, if supplied.
		retry_after: Option<Duration>,
	},
	/// A 200 response carried a body that is not a JSON object.
	#[error("The {endpoint} endpoint returned malformed JSON.")]
	ResponseParse {
		/// Endpoint that produced the body.
		endpoint: Endpoint,
		/// Structured parsing failure.
		#[source]
		source: serde_path_to_error::Error<serde_json::Error>,
	},
	/// A claim is present but does not have the expected shape.
	#[error("Claim `{claim}` has an unexpected shape.")]
	InvalidClaim {
		/// Claim name.
		claim: &'static str,
		/// Underlying conversion failure.
		#[source]
		source: serde_json::Error,
	},
}
impl Error {
	/// HTTP status carried by the error, if the provider answered at all.
	pub fn status(&self) -> Option<u16> {
		match self {
			Self::TokenExchangeFailed { status, .. } | Self::UserInfoFailed { status, .. } =>
				Some(*status),
			_ => None,
		}
	}

	/// Retry-After hint carried by the error, if the provider sent one.
	pub fn retry_after(&self) -> Option<Duration> {
		match self {
			Self::TokenExchangeFailed { retry_after, .. }
			| Self::UserInfoFailed { retry_after, .. } => *retry_after,
			_ => None,
		}
	}

	/// Returns true when the provider explicitly rejected the presented code or token.
	pub fn is_rejection(&self) -> bool {
		matches!(self.status(), Some(400 | 401 | 403))
	}

	/// Returns true for failures worth retrying later (network trouble, throttling, 5xx).
	pub fn is_transient(&self) -> bool {
		match self {
			Self::Transport(_) => true,
			_ => matches!(self.status(), Some(code) if code == 429 || code >= 500),
		}
	}
}

/// Configuration and request-construction failures.
#[derive(Debug, ThisError)]
pub enum ConfigError {
	/// HTTP client could not be constructed.
	#[error("HTTP client could not be constructed.")]
	HttpClientBuild {
		/// Underlying transport builder failure.
		#[source]
		source: BoxError,
	},
	/// HTTP request construction failed.
	#[error(transparent)]
	HttpRequest(#[from] oauth2::http::Error),
}
impl ConfigError {
	/// Wraps a transport's builder failure inside [`ConfigError`].
	pub fn http_client_build(src: impl 'static + Send + Sync + std::error::Error) -> Self {
		Self::HttpClientBuild { source: Box::new(src) }
	}
}
#[cfg(feature = "reqwest")]
impl From<ReqwestError> for ConfigError {
	fn from(e: ReqwestError) -> Self {
		Self::http_client_build(e)
	}
}

/// Transport-level failures (network, IO).
#[derive(Debug, ThisError)]
pub enum TransportError {
	/// Underlying HTTP client reported a network failure.
	#[error("Network error occurred while calling the {endpoint} endpoint.")]
	Network {
		/// Endpoint being called.
		endpoint: Endpoint,
		/// Transport-specific network error.
		#[source]
		source: BoxError,
	},
	/// Underlying IO failure surfaced during transport.
	#[error("I/O error occurred while calling the {endpoint} endpoint.")]
	Io {
		/// Endpoint being called.
		endpoint: Endpoint,
		/// Underlying IO failure.
		#[source]
		source: std::io::Error,
	},
	/// The HTTP client failed without a structured cause.
	#[error("HTTP client error occurred while calling the {endpoint} endpoint: {message}.")]
	Other {
		/// Endpoint being called.
		endpoint: Endpoint,
		/// Transport-supplied message.
		message: String,
	},
}
impl TransportError {
	/// Wraps a transport-specific network error.
	pub fn network(endpoint: Endpoint, src: impl 'static + Send + Sync + std::error::Error) -> Self {
		Self::Network { endpoint, source: Box::new(src) }
	}
}
