// self
use crate::_prelude::*;

/// Logging capability handed to a client at construction.
///
/// With the `tracing` feature, a logger either targets a specific [`tracing::Dispatch`] or
/// falls back to whatever subscriber is current when an operation runs. Every span and
/// event the client emits is produced inside [`Logger::scope`] / [`Logger::in_scope`], so
/// two clients in one process can report to different subscribers.
#[derive(Clone, Debug, Default)]
pub struct Logger {
	#[cfg(feature = "tracing")]
	dispatch: Option<tracing::Dispatch>,
}
impl Logger {
	/// Logger that reports to the current (usually process-global) subscriber.
	pub fn global() -> Self {
		Self::default()
	}

	/// Logger that reports to `dispatch` regardless of the caller's current subscriber.
	#[cfg(feature = "tracing")]
	pub fn with_dispatch(dispatch: impl Into<tracing::Dispatch>) -> Self {
		Self { dispatch: Some(dispatch.into()) }
	}

	/// Returns true when a dedicated dispatcher was supplied.
	pub fn is_scoped(&self) -> bool {
		#[cfg(feature = "tracing")]
		{
			self.dispatch.is_some()
		}
		#[cfg(not(feature = "tracing"))]
		{
			false
		}
	}

	/// Runs `f` with this logger's dispatcher as the default.
	pub fn in_scope<R>(&self, f: impl FnOnce() -> R) -> R {
		#[cfg(feature = "tracing")]
		if let Some(dispatch) = &self.dispatch {
			return tracing::dispatcher::with_default(dispatch, f);
		}

		f()
	}

	/// Drives `fut` with this logger's dispatcher as the default on every poll.
	pub async fn scope<F>(&self, fut: F) -> F::Output
	where
		F: Future,
	{
		#[cfg(feature = "tracing")]
		if let Some(dispatch) = &self.dispatch {
			use tracing::instrument::WithSubscriber;

			return fut.with_subscriber(dispatch.clone()).await;
		}

		fut.await
	}
}
