// Copyright 2026 The brook developers
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Side-effect operator for observing values in a pipeline.
//!
//! The [`tap`](TapExt::tap) operator invokes a function for each value
//! without modifying the stream, useful for debugging or metrics collection
//! in the middle of a combinator chain. The function is only called for
//! values; errors pass through without invoking it.

use brook_core::Event;
use futures::{Stream, StreamExt};

/// Extension trait providing the [`tap`](Self::tap) operator.
pub trait TapExt<T>: Stream<Item = Event<T>> + Sized {
    /// Invokes `f` for each value without affecting the stream.
    fn tap<F>(self, f: F) -> impl Stream<Item = Event<T>> + Send
    where
        Self: Send + 'static,
        F: FnMut(&T) + Send + 'static,
        T: Send + 'static;
}

impl<S, T> TapExt<T> for S
where
    S: Stream<Item = Event<T>>,
{
    fn tap<F>(self, mut f: F) -> impl Stream<Item = Event<T>> + Send
    where
        Self: Send + 'static,
        F: FnMut(&T) + Send + 'static,
        T: Send + 'static,
    {
        self.map(move |event| {
            if let Event::Next(value) = &event {
                f(value);
            }
            event
        })
    }
}
