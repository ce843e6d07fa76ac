// Copyright 2026 The brook developers
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Fused map-and-filter operator.

use brook_core::Event;
use futures::future::ready;
use futures::{Stream, StreamExt};

/// Extension trait providing the `filter_map_values` operator for event streams.
pub trait FilterMapValuesExt<T>: Stream<Item = Event<T>> + Sized {
    /// Transforms each value with `f`, dropping values mapped to `None`.
    /// Errors pass through unchanged.
    fn filter_map_values<U, F>(self, f: F) -> impl Stream<Item = Event<U>> + Send
    where
        Self: Send + 'static,
        F: FnMut(T) -> Option<U> + Send + 'static,
        T: Send + 'static,
        U: Send + 'static;
}

impl<S, T> FilterMapValuesExt<T> for S
where
    S: Stream<Item = Event<T>>,
{
    fn filter_map_values<U, F>(self, mut f: F) -> impl Stream<Item = Event<U>> + Send
    where
        Self: Send + 'static,
        F: FnMut(T) -> Option<U> + Send + 'static,
        T: Send + 'static,
        U: Send + 'static,
    {
        self.filter_map(move |event| {
            ready(match event {
                Event::Next(value) => f(value).map(Event::Next),
                Event::Error(error) => Some(Event::Error(error)),
            })
        })
    }
}
