// std
use std::time::Duration as StdDuration;
// self
use crate::obs::{Operation, Outcome};

/// Counter incremented once per finished operation.
pub const REQUESTS_TOTAL: &str = "okta_oidc_requests_total";
/// Histogram of wall-clock seconds spent per operation, provider round trip included.
pub const REQUEST_DURATION_SECONDS: &str = "okta_oidc_request_duration_seconds";

/// Feeds a finished operation to the global metrics recorder (when enabled).
pub(crate) fn record_request(operation: Operation, outcome: Outcome, elapsed: StdDuration) {
	#[cfg(feature = "metrics")]
	{
		metrics::counter!(
			REQUESTS_TOTAL,
			"operation" => operation.as_str(),
			"outcome" => outcome.as_str()
		)
		.increment(1);
		metrics::histogram!(
			REQUEST_DURATION_SECONDS,
			"operation" => operation.as_str(),
			"outcome" => outcome.as_str()
		)
		.record(elapsed.as_secs_f64());
	}
	#[cfg(not(feature = "metrics"))]
	let _ = (operation, outcome, elapsed);
}
