// Copyright 2026 The brook developers
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Take-events operator that bounds a stream to its first n events.

use brook_core::Event;
use futures::{Stream, StreamExt};

/// Extension trait providing the `take_events` operator for event streams.
pub trait TakeEventsExt<T>: Stream<Item = Event<T>> + Sized {
    /// Emits only the first `n` events, then ends the stream.
    ///
    /// Errors count as events: taking 2 from `[Error, Next, Next]` yields the
    /// error and the first value. Use
    /// [`on_error`](crate::OnErrorExt::on_error) beforehand if errors should
    /// not count.
    fn take_events(self, n: usize) -> impl Stream<Item = Event<T>> + Send
    where
        Self: Send + 'static,
        T: Send + 'static;
}

impl<S, T> TakeEventsExt<T> for S
where
    S: Stream<Item = Event<T>>,
{
    fn take_events(self, n: usize) -> impl Stream<Item = Event<T>> + Send
    where
        Self: Send + 'static,
        T: Send + 'static,
    {
        StreamExt::take(self, n)
    }
}
