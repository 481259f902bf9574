//! Okta OIDC authorization-code client—authorize URLs, code exchanges, userinfo claims, and
//! bearer token validation over a pluggable HTTP transport.

#![deny(clippy::all, missing_docs, unused_crate_dependencies)]

pub mod auth;
pub mod client;
pub mod config;
pub mod error;
pub mod http;
pub mod obs;
#[cfg(all(any(test, feature = "test"), feature = "reqwest"))]
pub mod _preludet {
	//! Convenience re-exports and helpers for integration tests; enabled via `cfg(test)` or the
	//! `test` crate feature.

	pub use crate::_prelude::*;

	// self
	use crate::{
		client::{OktaClient, ReqwestOktaClient},
		config::OktaConfig,
		http::ReqwestHttpClient,
		obs::Logger,
	};

	/// Client identifier used by test fixtures.
	pub const TEST_CLIENT_ID: &str = "client-it";
	/// Client secret used by test fixtures.
	pub const TEST_CLIENT_SECRET: &str = "secret-it";
	/// Redirect URI used by test fixtures.
	pub const TEST_REDIRECT_URI: &str = "https://app.example.com/callback";

	/// Builds a complete configuration that points at `org_url` (typically an `httpmock`
	/// server's base URL).
	pub fn test_config(org_url: &str) -> OktaConfig {
		OktaConfig::builder(org_url)
			.client_id(TEST_CLIENT_ID)
			.client_secret(TEST_CLIENT_SECRET)
			.redirect_uri(TEST_REDIRECT_URI)
			.build()
	}

	/// Constructs a reqwest-backed [`OktaClient`] for `org_url` that logs through the
	/// process-global subscriber.
	pub fn build_reqwest_test_client(org_url: &str) -> ReqwestOktaClient {
		build_logged_test_client(org_url, Logger::global())
	}

	/// Constructs a reqwest-backed [`OktaClient`] for `org_url` that logs through `logger`.
	pub fn build_logged_test_client(org_url: &str, logger: Logger) -> ReqwestOktaClient {
		OktaClient::with_http_client(test_config(org_url), ReqwestHttpClient::default(), logger)
	}

	#[cfg(feature = "tracing")]
	pub use recording::*;
	#[cfg(feature = "tracing")]
	mod recording {
		// std
		use std::fmt::Write;
		// crates.io
		use tracing::{
			Event, Level, Metadata, Subscriber,
			field::{Field, Visit},
			span::{Attributes, Id, Record},
		};
		// self
		use crate::_prelude::*;

		/// Event captured by [`RecordingSubscriber`].
		#[derive(Clone, Debug)]
		pub struct RecordedEvent {
			/// Event severity.
			pub level: Level,
			/// Every field rendered as `name=value`, space separated.
			pub fields: String,
		}

		/// Span captured by [`RecordingSubscriber`], including values recorded after creation.
		#[derive(Clone, Debug)]
		pub struct RecordedSpan {
			/// Span name.
			pub name: &'static str,
			/// Every non-empty field rendered as `name=value`, space separated.
			pub fields: String,
		}

		/// Subscriber that keeps every event and span in memory so tests can assert on log
		/// output.
		///
		/// Hand a clone to [`Logger::with_dispatch`](crate::obs::Logger::with_dispatch) and
		/// inspect the original afterwards.
		#[derive(Clone, Debug, Default)]
		pub struct RecordingSubscriber {
			events: Arc<Mutex<Vec<RecordedEvent>>>,
			spans: Arc<Mutex<Vec<RecordedSpan>>>,
		}
		impl RecordingSubscriber {
			/// Snapshot of the events recorded so far.
			pub fn events(&self) -> Vec<RecordedEvent> {
				self.events.lock().clone()
			}

			/// Snapshot of the spans opened so far, in creation order.
			pub fn spans(&self) -> Vec<RecordedSpan> {
				self.spans.lock().clone()
			}

			/// Returns true when an event at `level` rendered a field containing `needle`.
			pub fn contains(&self, level: Level, needle: &str) -> bool {
				self.events
					.lock()
					.iter()
					.any(|event| event.level == level && event.fields.contains(needle))
			}

			/// Returns true when a span called `name` rendered a field containing `needle`.
			pub fn span_contains(&self, name: &str, needle: &str) -> bool {
				self.spans
					.lock()
					.iter()
					.any(|span| span.name == name && span.fields.contains(needle))
			}
		}
		impl Subscriber for RecordingSubscriber {
			fn enabled(&self, _: &Metadata<'_>) -> bool {
				true
			}

			fn new_span(&self, attrs: &Attributes<'_>) -> Id {
				let mut visitor = FieldWriter::default();

				attrs.record(&mut visitor);

				let mut spans = self.spans.lock();

				spans.push(RecordedSpan { name: attrs.metadata().name(), fields: visitor.0 });

				Id::from_u64(spans.len() as u64)
			}

			fn record(&self, id: &Id, values: &Record<'_>) {
				let mut visitor = FieldWriter::default();

				values.record(&mut visitor);

				if let Some(span) = self.spans.lock().get_mut(id.into_u64() as usize - 1) {
					span.fields.push_str(&visitor.0);
				}
			}

			fn record_follows_from(&self, _: &Id, _: &Id) {}

			fn event(&self, event: &Event<'_>) {
				let mut visitor = FieldWriter::default();

				event.record(&mut visitor);

				self.events
					.lock()
					.push(RecordedEvent { level: *event.metadata().level(), fields: visitor.0 });
			}

			fn enter(&self, _: &Id) {}

			fn exit(&self, _: &Id) {}
		}

		#[derive(Default)]
		struct FieldWriter(String);
		impl Visit for FieldWriter {
			fn record_debug(&mut self, field: &Field, value: &dyn Debug) {
				let _ = write!(self.0, "{}={:?} ", field.name(), value);
			}
		}
	}
}

mod _prelude {
	pub use std::{
		error::Error as StdError,
		fmt::{Debug, Display, Formatter, Result as FmtResult},
		future::Future,
		pin::Pin,
		sync::Arc,
	};

	pub use parking_lot::Mutex;
	#[cfg(feature = "reqwest")]
	pub use reqwest::{Client as ReqwestClient, Error as ReqwestError};
	pub use serde::{Deserialize, Serialize};
	pub use serde_json::{Map as JsonMap, Value as JsonValue};
	pub use thiserror::Error as ThisError;
	pub use time::{Duration, OffsetDateTime};
	pub use url::Url;

	pub use crate::error::{Error, Result};
}

pub use oauth2;
#[cfg(feature = "reqwest")] pub use reqwest;
pub use url;
#[cfg(test)] use {color_eyre as _, httpmock as _, okta_oidc as _, tokio as _};
