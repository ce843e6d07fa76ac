// Copyright 2026 The brook developers
// SPDX-License-Identifier: MIT OR Apache-2.0

use brook_core::{BrookError, Event};
use futures::future::ready;
use futures::{Stream, StreamExt};

/// Extension trait providing the `on_error` operator for event streams.
pub trait OnErrorExt<T>: Stream<Item = Event<T>> + Sized {
    /// Handles errors in the stream with a handler function.
    ///
    /// The handler receives a reference to each error and returns:
    /// - `true` to consume the error (remove it from the stream)
    /// - `false` to propagate the error downstream
    ///
    /// Several `on_error` operators can be chained, each handling the error
    /// classes it recognizes and passing the rest along.
    ///
    /// # Examples
    ///
    /// ```
    /// use brook_core::{BrookError, Event};
    /// use brook_stream::OnErrorExt;
    /// use futures::channel::mpsc::unbounded;
    /// use futures::StreamExt;
    ///
    /// # #[tokio::main(flavor = "current_thread")]
    /// # async fn main() {
    /// let (tx, rx) = unbounded();
    ///
    /// let mut stream = rx
    ///     .on_error(|error| error.to_string().contains("validation"))
    ///     .boxed();
    ///
    /// tx.unbounded_send(Event::Error(BrookError::processing("validation failed"))).unwrap();
    /// tx.unbounded_send(Event::Next(1)).unwrap();
    ///
    /// // The validation error was consumed; the value arrives
    /// assert_eq!(stream.next().await.unwrap().unwrap(), 1);
    /// # }
    /// ```
    fn on_error<F>(self, handler: F) -> impl Stream<Item = Event<T>> + Send
    where
        Self: Send + 'static,
        F: FnMut(&BrookError) -> bool + Send + 'static,
        T: Send + 'static;
}

impl<S, T> OnErrorExt<T> for S
where
    S: Stream<Item = Event<T>>,
{
    fn on_error<F>(self, mut handler: F) -> impl Stream<Item = Event<T>> + Send
    where
        Self: Send + 'static,
        F: FnMut(&BrookError) -> bool + Send + 'static,
        T: Send + 'static,
    {
        self.filter_map(move |event| {
            ready(match event {
                Event::Error(error) => {
                    if handler(&error) {
                        None
                    } else {
                        Some(Event::Error(error))
                    }
                }
                next => Some(next),
            })
        })
    }
}
