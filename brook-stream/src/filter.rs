// Copyright 2026 The brook developers
// SPDX-License-Identifier: MIT OR Apache-2.0

use brook_core::Event;
use futures::future::ready;
use futures::{Stream, StreamExt};

/// Extension trait providing the `filter_values` operator for event streams.
pub trait FilterValuesExt<T>: Stream<Item = Event<T>> + Sized {
    /// Keeps only values satisfying `predicate`; errors pass through.
    ///
    /// # Examples
    ///
    /// ```
    /// use brook_core::Event;
    /// use brook_stream::FilterValuesExt;
    /// use futures::channel::mpsc::unbounded;
    /// use futures::StreamExt;
    ///
    /// # #[tokio::main(flavor = "current_thread")]
    /// # async fn main() {
    /// let (tx, rx) = unbounded();
    ///
    /// let mut non_empty = rx.filter_values(|text: &String| !text.is_empty()).boxed();
    ///
    /// tx.unbounded_send(Event::Next(String::new())).unwrap();
    /// tx.unbounded_send(Event::Next("bob".to_string())).unwrap();
    ///
    /// // The empty value is filtered out
    /// assert_eq!(non_empty.next().await.unwrap().unwrap(), "bob");
    /// # }
    /// ```
    ///
    /// # See Also
    ///
    /// - [`map_values`](crate::MapValuesExt::map_values) - transform values
    /// - [`filter_map_values`](crate::FilterMapValuesExt::filter_map_values) - fused map and filter
    fn filter_values<F>(self, predicate: F) -> impl Stream<Item = Event<T>> + Send
    where
        Self: Send + 'static,
        F: FnMut(&T) -> bool + Send + 'static,
        T: Send + 'static;
}

impl<S, T> FilterValuesExt<T> for S
where
    S: Stream<Item = Event<T>>,
{
    fn filter_values<F>(self, mut predicate: F) -> impl Stream<Item = Event<T>> + Send
    where
        Self: Send + 'static,
        F: FnMut(&T) -> bool + Send + 'static,
        T: Send + 'static,
    {
        self.filter(move |event| {
            let keep = match event {
                Event::Next(value) => predicate(value),
                Event::Error(_) => true,
            };
            ready(keep)
        })
    }
}
