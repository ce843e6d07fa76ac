// Copyright 2026 The brook developers
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Start-with operator that prepends initial values to a stream.

use brook_core::Event;
use futures::stream::iter;
use futures::{Stream, StreamExt};

/// Extension trait providing the `start_with` operator for event streams.
pub trait StartWithExt<T>: Stream<Item = Event<T>> + Sized {
    /// Prepends initial values to the stream.
    ///
    /// The initial values are emitted first, in the order provided, followed
    /// by all events from the source stream. Errors from the source flow
    /// through unchanged.
    fn start_with(self, initial_values: Vec<T>) -> impl Stream<Item = Event<T>> + Send
    where
        Self: Send + 'static,
        T: Send + 'static;
}

impl<S, T> StartWithExt<T> for S
where
    S: Stream<Item = Event<T>>,
{
    fn start_with(self, initial_values: Vec<T>) -> impl Stream<Item = Event<T>> + Send
    where
        Self: Send + 'static,
        T: Send + 'static,
    {
        let initial = initial_values
            .into_iter()
            .map(Event::Next)
            .collect::<Vec<_>>();
        iter(initial).chain(self)
    }
}
