// Copyright 2026 The brook developers
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Test utilities and fixtures for the brook workspace.
//!
//! Provides push-capable channels, assertion helpers, and fixture data for
//! testing stream combinators and subscriptions. Intended for development
//! and testing only, not for production code.
//!
//! # Key types
//!
//! - [`TestChannel`]: pairs an unbounded sender with an [`EventStream`],
//!   solving the conflict between consuming combinators (which take `self`)
//!   and test setup (which wants to keep pushing values)
//! - [`input`]: UI-flavored fixtures ([`Click`](input::Click),
//!   [`KeyPress`](input::KeyPress)) in the domain of the library's
//!   motivating example
//! - [`helpers`]: `expect_*` and `assert_no_event_emitted` assertions
//!
//! [`EventStream`]: brook_stream::EventStream

pub mod helpers;
pub mod input;
pub mod test_channel;

pub use helpers::{assert_no_event_emitted, expect_end, expect_error, expect_next_value};
pub use input::{Click, Input, KeyPress};
pub use test_channel::{event_channel, TestChannel, TestChannels};
