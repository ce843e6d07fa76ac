// Copyright 2026 The brook developers
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Extension methods for tokio receivers to create event streams.

use brook_core::Event;
use brook_stream::{BoxEventStream, EventStream};
use futures::StreamExt;
use tokio::sync::mpsc::UnboundedReceiver;
use tokio_stream::wrappers::UnboundedReceiverStream;

/// Extension trait for `UnboundedReceiver` to create event streams.
pub trait UnboundedReceiverExt<T> {
    /// Converts an `UnboundedReceiver<T>` into an `EventStream<U>` by
    /// applying a transformation.
    ///
    /// The returned stream is boxed, which erases the concrete channel type.
    /// This lets receivers of different item types be collected together
    /// (e.g. for [`merge`](brook_stream::MergeExt::merge) or
    /// [`combine_latest`](brook_stream::CombineLatestExt::combine_latest)),
    /// as long as they all map to the same output type `U`.
    ///
    /// # Examples
    ///
    /// ```
    /// use brook_rx::prelude::*;
    /// use futures::StreamExt;
    ///
    /// # #[tokio::main(flavor = "current_thread")]
    /// # async fn main() {
    /// let (tx, rx) = tokio::sync::mpsc::unbounded_channel::<u32>();
    ///
    /// let mut labels = rx.into_event_stream(|n| format!("#{n}"));
    ///
    /// tx.send(7).unwrap();
    /// assert_eq!(labels.next().await.unwrap().unwrap(), "#7");
    /// # }
    /// ```
    fn into_event_stream<U, F>(self, mapper: F) -> EventStream<BoxEventStream<U>>
    where
        F: FnMut(T) -> U + Send + 'static,
        U: Send + 'static;
}

impl<T> UnboundedReceiverExt<T> for UnboundedReceiver<T>
where
    T: Send + 'static,
{
    fn into_event_stream<U, F>(self, mut mapper: F) -> EventStream<BoxEventStream<U>>
    where
        F: FnMut(T) -> U + Send + 'static,
        U: Send + 'static,
    {
        let stream =
            UnboundedReceiverStream::new(self).map(move |value| Event::Next(mapper(value)));
        EventStream::new(Box::pin(stream) as BoxEventStream<U>)
    }
}
