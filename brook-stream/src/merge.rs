// Copyright 2026 The brook developers
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Arrival-order interleaving of several event streams.

use brook_core::{Event, IntoEventStream};
use futures::{Stream, StreamExt};
use std::pin::Pin;

/// Extension trait providing the `merge` operator for event streams.
pub trait MergeExt<T>: Stream<Item = Event<T>> + Sized {
    /// Interleaves this stream with `others` in arrival order.
    ///
    /// Every event of every input appears in the output; the merged stream
    /// ends once all inputs have ended. No ordering is imposed beyond each
    /// input's own FIFO order.
    ///
    /// # Examples
    ///
    /// ```
    /// use brook_core::Event;
    /// use brook_stream::MergeExt;
    /// use futures::channel::mpsc::unbounded;
    /// use futures::StreamExt;
    ///
    /// # #[tokio::main(flavor = "current_thread")]
    /// # async fn main() {
    /// let (tx1, rx1) = unbounded();
    /// let (tx2, rx2) = unbounded();
    ///
    /// let mut merged = rx1.merge(vec![rx2]).boxed();
    ///
    /// tx1.unbounded_send(Event::Next("left")).unwrap();
    /// tx2.unbounded_send(Event::Next("right")).unwrap();
    /// drop((tx1, tx2));
    ///
    /// let mut seen = Vec::new();
    /// while let Some(event) = merged.next().await {
    ///     seen.push(event.unwrap());
    /// }
    /// seen.sort_unstable();
    /// assert_eq!(seen, vec!["left", "right"]);
    /// # }
    /// ```
    fn merge<IS>(self, others: Vec<IS>) -> impl Stream<Item = Event<T>> + Send
    where
        Self: Send + 'static,
        IS: IntoEventStream<Item = Event<T>>,
        IS::Stream: Send + 'static,
        T: Send + 'static;
}

impl<S, T> MergeExt<T> for S
where
    S: Stream<Item = Event<T>>,
{
    fn merge<IS>(self, others: Vec<IS>) -> impl Stream<Item = Event<T>> + Send
    where
        Self: Send + 'static,
        IS: IntoEventStream<Item = Event<T>>,
        IS::Stream: Send + 'static,
        T: Send + 'static,
    {
        let mut streams: Vec<Pin<Box<dyn Stream<Item = Event<T>> + Send>>> =
            Vec::with_capacity(others.len() + 1);
        streams.push(Box::pin(self));
        for other in others {
            streams.push(Box::pin(other.into_event_stream()));
        }
        futures::stream::select_all(streams)
    }
}
