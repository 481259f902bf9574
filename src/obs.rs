//! Observability for provider operations.
//!
//! # Feature Flags
//!
//! - `tracing` (default): every operation runs inside an `okta_oidc.request` span carrying
//!   `operation`, with `outcome` recorded once it finishes. The WARN/ERROR events
//!   described on each operation are emitted too.
//! - `metrics`: each finished operation increments [`REQUESTS_TOTAL`] and records its
//!   latency in [`REQUEST_DURATION_SECONDS`], both labeled by `operation` + `outcome`.
//!
//! Events go to the [`Logger`] handed to the client at construction, which defaults to the
//! process-global subscriber.

mod logger;
mod metrics;
mod tracing;

pub use logger::*;
pub use metrics::{REQUEST_DURATION_SECONDS, REQUESTS_TOTAL};
pub(crate) use tracing::*;

// std
use std::time::Instant;
// self
use crate::_prelude::*;

/// Provider operations observed by the client.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Operation {
	/// Authorization code for token exchange.
	ExchangeCode,
	/// Userinfo lookup.
	UserInfo,
	/// Group claim lookup (backed by userinfo).
	UserGroups,
	/// Bearer token validation (backed by userinfo).
	ValidateToken,
}
impl Operation {
	/// Returns a stable label suitable for span or metric fields.
	pub const fn as_str(self) -> &'static str {
		match self {
			Operation::ExchangeCode => "exchange_code",
			Operation::UserInfo => "user_info",
			Operation::UserGroups => "user_groups",
			Operation::ValidateToken => "validate_token",
		}
	}
}
impl Display for Operation {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str(self.as_str())
	}
}

/// How an operation ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Outcome {
	/// The caller received what it asked for.
	Success,
	/// The caller received an error, a rejected token, or an unavailable provider.
	Failure,
}
impl Outcome {
	/// Returns a stable label suitable for span or metric fields.
	pub const fn as_str(self) -> &'static str {
		match self {
			Outcome::Success => "success",
			Outcome::Failure => "failure",
		}
	}
}
impl Display for Outcome {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str(self.as_str())
	}
}
impl From<bool> for Outcome {
	fn from(succeeded: bool) -> Self {
		if succeeded { Self::Success } else { Self::Failure }
	}
}

/// One in-flight operation: its span, its start time, and where its outcome is reported.
///
/// Must be created while the client's [`Logger`] is in scope so the span lands on the
/// right subscriber.
pub(crate) struct Observation {
	operation: Operation,
	started: Instant,
	#[cfg(feature = "tracing")]
	span: ::tracing::Span,
}
impl Observation {
	pub(crate) fn begin(operation: Operation) -> Self {
		Self {
			operation,
			started: Instant::now(),
			#[cfg(feature = "tracing")]
			span: request_span(operation),
		}
	}

	/// Drives `fut` inside the operation span without holding a guard across `.await`.
	pub(crate) async fn run<F>(&self, fut: F) -> F::Output
	where
		F: Future,
	{
		#[cfg(feature = "tracing")]
		let fut = ::tracing::Instrument::instrument(fut, self.span.clone());

		fut.await
	}

	pub(crate) fn finish(self, outcome: Outcome) {
		#[cfg(feature = "tracing")]
		self.span.record("outcome", outcome.as_str());

		metrics::record_request(self.operation, outcome, self.started.elapsed());
	}
}
