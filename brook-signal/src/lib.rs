// Copyright 2026 The brook developers
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Signals: current-value-holding event abstractions.
//!
//! A [`Signal`] is the value-retaining sibling of an event stream. Where a
//! stream is purely discrete, a signal always has a current value: reading it
//! is immediate ([`Signal::get`]), and a new subscriber first observes the
//! current value, then subsequent changes.
//!
//! Any event stream can be stepped into a signal with
//! [`hold`](HoldExt::hold).

pub mod hold;
pub mod signal;

pub use hold::HoldExt;
pub use signal::{Signal, SignalBoxStream, WeakSignal};
