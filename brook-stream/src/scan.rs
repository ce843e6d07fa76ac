// Copyright 2026 The brook developers
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Running-accumulation operator.

use brook_core::Event;
use futures::future::ready;
use futures::{Stream, StreamExt};

/// Extension trait providing the `scan_values` operator for event streams.
pub trait ScanValuesExt<T>: Stream<Item = Event<T>> + Sized {
    /// Folds values into an accumulator, emitting every intermediate state.
    ///
    /// The accumulator starts at `initial` (which itself is not emitted);
    /// each value produces `f(&acc, value)`, which is both emitted and kept
    /// as the next accumulator. Errors pass through without touching the
    /// accumulator.
    ///
    /// # Examples
    ///
    /// ```
    /// use brook_core::Event;
    /// use brook_stream::ScanValuesExt;
    /// use futures::channel::mpsc::unbounded;
    /// use futures::StreamExt;
    ///
    /// # #[tokio::main(flavor = "current_thread")]
    /// # async fn main() {
    /// let (tx, rx) = unbounded();
    ///
    /// let mut totals = rx.scan_values(0, |total, n: u32| total + n).boxed();
    ///
    /// tx.unbounded_send(Event::Next(1)).unwrap();
    /// tx.unbounded_send(Event::Next(2)).unwrap();
    /// tx.unbounded_send(Event::Next(3)).unwrap();
    ///
    /// assert_eq!(totals.next().await.unwrap().unwrap(), 1);
    /// assert_eq!(totals.next().await.unwrap().unwrap(), 3);
    /// assert_eq!(totals.next().await.unwrap().unwrap(), 6);
    /// # }
    /// ```
    fn scan_values<Acc, F>(self, initial: Acc, f: F) -> impl Stream<Item = Event<Acc>> + Send
    where
        Self: Send + 'static,
        Acc: Clone + Send + 'static,
        F: FnMut(&Acc, T) -> Acc + Send + 'static,
        T: Send + 'static;
}

impl<S, T> ScanValuesExt<T> for S
where
    S: Stream<Item = Event<T>>,
{
    fn scan_values<Acc, F>(self, initial: Acc, mut f: F) -> impl Stream<Item = Event<Acc>> + Send
    where
        Self: Send + 'static,
        Acc: Clone + Send + 'static,
        F: FnMut(&Acc, T) -> Acc + Send + 'static,
        T: Send + 'static,
    {
        self.scan(initial, move |acc, event| {
            let out = match event {
                Event::Next(value) => {
                    let next = f(acc, value);
                    *acc = next.clone();
                    Event::Next(next)
                }
                Event::Error(error) => Event::Error(error),
            };
            ready(Some(out))
        })
    }
}
