// Copyright 2026 The brook developers
// SPDX-License-Identifier: MIT OR Apache-2.0

use brook_core::Event;
use futures::future::ready;
use futures::{Stream, StreamExt};

/// Extension trait providing the `distinct_until_changed` operator.
///
/// Filters out consecutive duplicate values, emitting only when the value
/// changes from the previous emission.
pub trait DistinctUntilChangedExt<T>: Stream<Item = Event<T>> + Sized {
    /// Emits values only when they differ from the previously emitted value.
    ///
    /// # Behavior
    ///
    /// - The first value is always emitted (there is no previous value)
    /// - Subsequent values are compared against the last emitted value
    /// - Errors always propagate and do not reset the last-seen value
    ///
    /// # Examples
    ///
    /// ```
    /// use brook_core::Event;
    /// use brook_stream::DistinctUntilChangedExt;
    /// use futures::channel::mpsc::unbounded;
    /// use futures::StreamExt;
    ///
    /// # #[tokio::main(flavor = "current_thread")]
    /// # async fn main() {
    /// let (tx, rx) = unbounded();
    ///
    /// let mut distinct = rx.distinct_until_changed().boxed();
    ///
    /// // Send: 1, 1, 2, 2, 3, 2
    /// for n in [1, 1, 2, 2, 3, 2] {
    ///     tx.unbounded_send(Event::Next(n)).unwrap();
    /// }
    ///
    /// // Output: 1, 2, 3, 2
    /// assert_eq!(distinct.next().await.unwrap().unwrap(), 1);
    /// assert_eq!(distinct.next().await.unwrap().unwrap(), 2);
    /// assert_eq!(distinct.next().await.unwrap().unwrap(), 3);
    /// assert_eq!(distinct.next().await.unwrap().unwrap(), 2);
    /// # }
    /// ```
    fn distinct_until_changed(self) -> impl Stream<Item = Event<T>> + Send
    where
        Self: Send + 'static,
        T: Clone + PartialEq + Send + 'static;
}

impl<S, T> DistinctUntilChangedExt<T> for S
where
    S: Stream<Item = Event<T>>,
{
    fn distinct_until_changed(self) -> impl Stream<Item = Event<T>> + Send
    where
        Self: Send + 'static,
        T: Clone + PartialEq + Send + 'static,
    {
        let mut last: Option<T> = None;
        self.filter_map(move |event| {
            let out = match event {
                Event::Next(value) => {
                    if last.as_ref() == Some(&value) {
                        None
                    } else {
                        last = Some(value.clone());
                        Some(Event::Next(value))
                    }
                }
                Event::Error(error) => Some(Event::Error(error)),
            };
            ready(out)
        })
    }
}
