// Copyright 2026 The brook developers
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Skip-events operator that discards the first n events of a stream.

use brook_core::Event;
use futures::{Stream, StreamExt};

/// Extension trait providing the `skip_events` operator for event streams.
pub trait SkipEventsExt<T>: Stream<Item = Event<T>> + Sized {
    /// Discards the first `n` events, emitting everything after them.
    ///
    /// Errors count as events for the purpose of skipping, like
    /// [`take_events`](crate::TakeEventsExt::take_events).
    fn skip_events(self, n: usize) -> impl Stream<Item = Event<T>> + Send
    where
        Self: Send + 'static,
        T: Send + 'static;
}

impl<S, T> SkipEventsExt<T> for S
where
    S: Stream<Item = Event<T>>,
{
    fn skip_events(self, n: usize) -> impl Stream<Item = Event<T>> + Send
    where
        Self: Send + 'static,
        T: Send + 'static,
    {
        StreamExt::skip(self, n)
    }
}
