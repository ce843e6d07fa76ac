// Copyright 2026 The brook developers
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Terminal subscriptions for brook event streams.
//!
//! After deriving a pipeline with the combinators in `brook-stream`, attach a
//! value callback to it here:
//!
//! - [`OnValueExt::on_value`]: await the stream, invoking an async handler
//!   per value, sequentially
//! - [`OnValueLatestExt::on_value_latest`]: same surface, but a newer value
//!   revokes the in-flight handler
//! - [`spawn_on_value`]: non-blocking registration that returns the
//!   [`Unsubscriber`](brook_core::Unsubscriber) teardown handle
//!
//! Stream errors and handler errors both go to the error callback; a failing
//! handler never terminates the subscription.

#[macro_use]
mod logging;
pub mod on_value;
pub mod on_value_latest;
pub mod spawn;

pub use on_value::OnValueExt;
pub use on_value_latest::OnValueLatestExt;
pub use spawn::spawn_on_value;
