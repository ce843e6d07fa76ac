// Copyright 2026 The brook developers
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Combinators for brook event streams.
//!
//! This crate provides the derived-transformation half of the signal/stream
//! abstraction: wrap any `Stream` of [`Event<T>`](brook_core::Event) in an
//! [`EventStream`] and chain combinators on it, ending in a terminal
//! subscription from `brook-exec`.
//!
//! # Architecture
//!
//! - **[`EventStream`]**: a wrapper around any `Stream` that provides all
//!   combinators as inherent methods for easy chaining
//! - **Extension traits**: each combinator also exists as an extension trait
//!   in its own module, usable on plain streams
//! - **Error passthrough**: combinators transform `Next` values and propagate
//!   `Error` events unchanged
//!
//! # Example
//!
//! The motivating pipeline, derive-then-subscribe:
//!
//! ```
//! use brook_stream::EventStream;
//! use futures::StreamExt;
//!
//! # #[tokio::main(flavor = "current_thread")]
//! # async fn main() {
//! let values = EventStream::from_values(vec!["alice", "", "bob"]);
//!
//! let mut non_empty = values
//!     .map(str::to_owned)
//!     .filter(|value| !value.is_empty())
//!     .boxed();
//!
//! assert_eq!(non_empty.next().await.unwrap().unwrap(), "alice");
//! assert_eq!(non_empty.next().await.unwrap().unwrap(), "bob");
//! assert!(non_empty.next().await.is_none());
//! # }
//! ```

pub mod combine_latest;
pub mod distinct_until_changed;
pub mod event_stream;
pub mod filter;
pub mod filter_map;
pub mod map;
pub mod merge;
pub mod on_error;
pub mod prelude;
pub mod scan;
pub mod skip_events;
pub mod start_with;
pub mod take_events;
pub mod tap;

pub use combine_latest::CombineLatestExt;
pub use distinct_until_changed::DistinctUntilChangedExt;
pub use event_stream::{BoxEventStream, EventStream};
pub use filter::FilterValuesExt;
pub use filter_map::FilterMapValuesExt;
pub use map::MapValuesExt;
pub use merge::MergeExt;
pub use on_error::OnErrorExt;
pub use scan::ScanValuesExt;
pub use skip_events::SkipEventsExt;
pub use start_with::StartWithExt;
pub use take_events::TakeEventsExt;
pub use tap::TapExt;
