// Copyright 2026 The brook developers
// SPDX-License-Identifier: MIT OR Apache-2.0

use async_trait::async_trait;
use brook_core::{BrookError, Event, Result, Unsubscriber};
use futures::stream::Stream;
use futures::StreamExt;
use std::error::Error;
use std::future::Future;

/// Extension trait providing the terminal `on_value` subscription.
///
/// This is the end of the pipeline: where a derived stream turns back into
/// side effects.
#[async_trait]
pub trait OnValueExt<T>: Stream<Item = Event<T>> + Sized {
    /// Subscribes to the stream with an async value handler, processing
    /// values sequentially.
    ///
    /// # Behavior
    ///
    /// - Each `Next` value is handed to `on_value_func`, which is awaited to
    ///   completion before the next event is processed
    /// - Handler errors are wrapped into
    ///   [`BrookError::Callback`](brook_core::BrookError) and passed to
    ///   `on_error_callback`; the subscription continues
    /// - `Error` events are passed to `on_error_callback` directly
    /// - Returns when the stream ends or the unsubscriber fires; once it has
    ///   fired, no further handler invocation begins
    ///
    /// # Arguments
    ///
    /// * `on_value_func` - async handler called per value; also receives the
    ///   subscription's [`Unsubscriber`] so it can tear itself down
    /// * `on_error_callback` - called for every stream or handler failure
    /// * `unsubscriber` - optional teardown handle; a fresh one is created
    ///   when `None`
    ///
    /// # Errors
    ///
    /// Completion of the stream is not an error; the returned `Result` is
    /// reserved for subscription-level failures.
    ///
    /// # Examples
    ///
    /// ```
    /// use brook_core::Event;
    /// use brook_exec::OnValueExt;
    /// use futures::channel::mpsc::unbounded;
    /// use std::convert::Infallible;
    /// use std::sync::{Arc, Mutex};
    ///
    /// # #[tokio::main(flavor = "current_thread")]
    /// # async fn main() {
    /// let (tx, rx) = unbounded();
    /// let seen = Arc::new(Mutex::new(Vec::new()));
    /// let sink = Arc::clone(&seen);
    ///
    /// tx.unbounded_send(Event::Next(1)).unwrap();
    /// tx.unbounded_send(Event::Next(2)).unwrap();
    /// drop(tx);
    ///
    /// rx.on_value(
    ///     move |value, _unsubscriber| {
    ///         let sink = Arc::clone(&sink);
    ///         async move {
    ///             sink.lock().unwrap().push(value);
    ///             Ok::<(), Infallible>(())
    ///         }
    ///     },
    ///     |error| panic!("unexpected error: {error}"),
    ///     None,
    /// )
    /// .await
    /// .unwrap();
    ///
    /// assert_eq!(*seen.lock().unwrap(), vec![1, 2]);
    /// # }
    /// ```
    ///
    /// # See Also
    ///
    /// - [`on_value_latest`](crate::OnValueLatestExt::on_value_latest) - revokes in-flight work for newer values
    /// - [`spawn_on_value`](crate::spawn_on_value) - non-blocking registration
    async fn on_value<F, Fut, E, OnError>(
        self,
        on_value_func: F,
        on_error_callback: OnError,
        unsubscriber: Option<Unsubscriber>,
    ) -> Result<()>
    where
        F: Fn(T, Unsubscriber) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = std::result::Result<(), E>> + Send + 'static,
        E: Error + Send + Sync + 'static,
        OnError: Fn(BrookError) + Send + Sync + 'static,
        T: Send + 'static;
}

#[async_trait]
impl<S, T> OnValueExt<T> for S
where
    S: Stream<Item = Event<T>> + Send + Unpin + 'static,
    T: Send + 'static,
{
    async fn on_value<F, Fut, E, OnError>(
        mut self,
        on_value_func: F,
        on_error_callback: OnError,
        unsubscriber: Option<Unsubscriber>,
    ) -> Result<()>
    where
        F: Fn(T, Unsubscriber) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = std::result::Result<(), E>> + Send + 'static,
        E: Error + Send + Sync + 'static,
        OnError: Fn(BrookError) + Send + Sync + 'static,
        T: Send + 'static,
    {
        let unsubscriber = unsubscriber.unwrap_or_default();

        loop {
            let event = tokio::select! {
                biased;
                () = unsubscriber.unsubscribed() => break,
                event = self.next() => match event {
                    Some(event) => event,
                    None => break,
                },
            };

            match event {
                Event::Next(value) => {
                    if let Err(error) = on_value_func(value, unsubscriber.clone()).await {
                        on_error_callback(BrookError::callback(error));
                    }
                }
                Event::Error(error) => on_error_callback(error),
            }
        }

        Ok(())
    }
}
