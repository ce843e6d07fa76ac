// Copyright 2026 The brook developers
// SPDX-License-Identifier: MIT OR Apache-2.0

use async_trait::async_trait;
use brook_core::{BrookError, Event, Result, Unsubscriber};
use futures::stream::Stream;
use futures::StreamExt;
use std::error::Error;
use std::future::Future;
use std::pin::Pin;

type InFlight<E> = Pin<Box<dyn Future<Output = std::result::Result<(), E>> + Send>>;

// What a wait round resolved to while a handler was in flight.
enum Step<T, E> {
    Stop,
    HandlerDone(std::result::Result<(), E>),
    Incoming(Option<Event<T>>),
}

/// Extension trait providing the latest-wins `on_value_latest` subscription.
///
/// Use this when only the most recent value matters and work on outdated
/// values should be abandoned.
#[async_trait]
pub trait OnValueLatestExt<T>: Stream<Item = Event<T>> + Sized {
    /// Subscribes to the stream, revoking the in-flight handler when a newer
    /// value arrives.
    ///
    /// # Behavior
    ///
    /// - At most one handler runs at a time
    /// - When a value arrives while a handler is running, the running handler
    ///   is revoked: its per-value [`Unsubscriber`] fires and its future is
    ///   dropped; the new value's handler starts in its place
    /// - `Error` events go to `on_error_callback` without disturbing the
    ///   running handler
    /// - When the stream ends, the in-flight handler runs to completion
    /// - The subscription-level `unsubscriber` stops everything, revoking the
    ///   in-flight handler
    ///
    /// Each handler invocation receives its own per-value `Unsubscriber`:
    /// spawned sub-work can watch it to stop early once the value is
    /// outdated.
    ///
    /// # Errors
    ///
    /// Completion of the stream is not an error; the returned `Result` is
    /// reserved for subscription-level failures.
    ///
    /// # See Also
    ///
    /// - [`on_value`](crate::OnValueExt::on_value) - processes every value sequentially
    async fn on_value_latest<F, Fut, E, OnError>(
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
impl<S, T> OnValueLatestExt<T> for S
where
    S: Stream<Item = Event<T>> + Send + Unpin + 'static,
    T: Send + 'static,
{
    async fn on_value_latest<F, Fut, E, OnError>(
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
        let mut in_flight: Option<(InFlight<E>, Unsubscriber)> = None;

        let start = |value: T| {
            let token = Unsubscriber::new();
            let fut: InFlight<E> = Box::pin(on_value_func(value, token.clone()));
            (fut, token)
        };

        while !unsubscriber.is_unsubscribed() {
            match in_flight.take() {
                Some((mut fut, token)) => {
                    let step = tokio::select! {
                        biased;
                        () = unsubscriber.unsubscribed() => Step::Stop,
                        result = &mut fut => Step::HandlerDone(result),
                        event = self.next() => Step::Incoming(event),
                    };

                    match step {
                        Step::Stop => {
                            token.unsubscribe();
                            break;
                        }
                        Step::HandlerDone(result) => {
                            if let Err(error) = result {
                                on_error_callback(BrookError::callback(error));
                            }
                        }
                        Step::Incoming(Some(Event::Next(value))) => {
                            // Newer value wins: revoke and replace
                            token.unsubscribe();
                            drop(fut);
                            in_flight = Some(start(value));
                        }
                        Step::Incoming(Some(Event::Error(error))) => {
                            on_error_callback(error);
                            in_flight = Some((fut, token));
                        }
                        Step::Incoming(None) => {
                            // Stream ended: let the last handler finish
                            if let Err(error) = fut.await {
                                on_error_callback(BrookError::callback(error));
                            }
                            break;
                        }
                    }
                }
                None => {
                    tokio::select! {
                        biased;
                        () = unsubscriber.unsubscribed() => break,
                        event = self.next() => match event {
                            Some(Event::Next(value)) => in_flight = Some(start(value)),
                            Some(Event::Error(error)) => on_error_callback(error),
                            None => break,
                        },
                    }
                }
            }
        }

        Ok(())
    }
}
