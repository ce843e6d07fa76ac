// Copyright 2026 The brook developers
// SPDX-License-Identifier: MIT OR Apache-2.0

use brook_core::Event;
use futures::{Stream, StreamExt};

/// Extension trait providing the `map_values` operator for event streams.
///
/// This is the `map` of the signal/stream abstraction: it transforms the
/// values carried by a stream while leaving the event envelope intact.
pub trait MapValuesExt<T>: Stream<Item = Event<T>> + Sized {
    /// Transforms each value with `f`; errors pass through unchanged.
    ///
    /// # Examples
    ///
    /// ```
    /// use brook_core::Event;
    /// use brook_stream::MapValuesExt;
    /// use futures::channel::mpsc::unbounded;
    /// use futures::StreamExt;
    ///
    /// # #[tokio::main(flavor = "current_thread")]
    /// # async fn main() {
    /// let (tx, rx) = unbounded();
    ///
    /// let mut lengths = rx.map_values(|text: String| text.len()).boxed();
    ///
    /// tx.unbounded_send(Event::Next("alice".to_string())).unwrap();
    /// assert_eq!(lengths.next().await.unwrap().unwrap(), 5);
    /// # }
    /// ```
    ///
    /// # See Also
    ///
    /// - [`filter_values`](crate::FilterValuesExt::filter_values) - keep only matching values
    fn map_values<U, F>(self, f: F) -> impl Stream<Item = Event<U>> + Send
    where
        Self: Send + 'static,
        F: FnMut(T) -> U + Send + 'static,
        T: Send + 'static,
        U: Send + 'static;
}

impl<S, T> MapValuesExt<T> for S
where
    S: Stream<Item = Event<T>>,
{
    fn map_values<U, F>(self, mut f: F) -> impl Stream<Item = Event<U>> + Send
    where
        Self: Send + 'static,
        F: FnMut(T) -> U + Send + 'static,
        T: Send + 'static,
        U: Send + 'static,
    {
        self.map(move |event| event.map(&mut f))
    }
}
