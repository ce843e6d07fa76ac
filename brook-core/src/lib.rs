// Copyright 2026 The brook developers
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Core types for the brook event signal/stream library.
//!
//! This crate defines the vocabulary the rest of the workspace is built on:
//!
//! - [`Event<T>`]: the value-or-error unit that flows through every stream
//! - [`EventSource<T>`]: a hot, multi-subscriber entry point for pushing events
//! - [`BrookError`]: the root error type, with [`Result`] and context helpers
//! - [`Unsubscriber`]: the teardown handle for subscriptions
//!
//! Combinators live in `brook-stream`, signals in `brook-signal`, and the
//! terminal `on_value` subscription in `brook-exec`.

pub mod error;
pub mod event;
pub mod into_event_stream;
pub mod source;
pub mod source_error;
pub mod unsubscriber;

pub use self::error::{BrookError, IntoBrookError, Result, ResultExt};
pub use self::event::Event;
pub use self::into_event_stream::IntoEventStream;
pub use self::source::{EventSource, SourceBoxStream};
pub use self::source_error::SourceError;
pub use self::unsubscriber::Unsubscriber;
