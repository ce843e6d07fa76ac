// Copyright 2026 The brook developers
// SPDX-License-Identifier: MIT OR Apache-2.0

//! # brook
//!
//! An event signal/stream library: the whole idea in three steps.
//!
//! 1) We usually attach a handler straight to the event source and do
//! everything inside it:
//!
//! ```
//! # use brook_rx::prelude::*;
//! # fn render_notice(_: &str) {}
//! # #[tokio::main(flavor = "current_thread")]
//! # async fn main() {
//! let clicks = EventSource::<String>::new();
//!
//! let _unsubscriber = spawn_on_value(
//!     clicks.subscribe().unwrap(),
//!     |text, _unsubscriber| async move {
//!         if !text.is_empty() {
//!             render_notice(&text);
//!         }
//!         Ok::<(), std::convert::Infallible>(())
//!     },
//!     |error| eprintln!("{error}"),
//! );
//! # }
//! ```
//!
//! 2) The subscription already is a proxy object, so nothing stops us from
//! keeping the stream around as a value.
//!
//! 3) And that is where it pays off: once the event abstraction is a value,
//! transformation and filtering become derived streams, and the handler at
//! the end only deals with exactly the values it cares about:
//!
//! ```
//! # use brook_rx::prelude::*;
//! # fn render_notice(_: &str) {}
//! # #[tokio::main(flavor = "current_thread")]
//! # async fn main() {
//! let clicks = EventSource::<String>::new();
//!
//! let non_empty_values = EventStream::from_source(&clicks)
//!     .unwrap()
//!     .map(|text| text.trim().to_string())
//!     .filter(|text| !text.is_empty())
//!     .boxed();
//!
//! let _unsubscriber = spawn_on_value(
//!     non_empty_values,
//!     |text, _unsubscriber| async move {
//!         render_notice(&text);
//!         Ok::<(), std::convert::Infallible>(())
//!     },
//!     |error| eprintln!("{error}"),
//! );
//! # }
//! ```
//!
//! The same abstraction comes in a value-retaining flavor:
//! [`Signal`](brook_signal::Signal) holds a current value and replays it to
//! new subscribers; step any stream into one with
//! [`hold`](brook_signal::HoldExt::hold).

// Re-export core types
pub use brook_core::{
    BrookError, Event, EventSource, IntoBrookError, IntoEventStream, Result, ResultExt,
    SourceBoxStream, SourceError, Unsubscriber,
};

// Re-export the stream wrapper and combinator traits
pub use brook_stream::{BoxEventStream, EventStream};

// Re-export signals
pub use brook_signal::{HoldExt, Signal, WeakSignal};

// Re-export terminal subscriptions
pub use brook_exec::{spawn_on_value, OnValueExt, OnValueLatestExt};

mod channel_ext;
pub use channel_ext::UnboundedReceiverExt;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::channel_ext::UnboundedReceiverExt;
    pub use brook_core::{BrookError, Event, EventSource, IntoEventStream, Unsubscriber};
    pub use brook_exec::{spawn_on_value, OnValueExt, OnValueLatestExt};
    pub use brook_signal::{HoldExt, Signal};
    pub use brook_stream::prelude::*;
}
