// Copyright 2026 The brook developers
// SPDX-License-Identifier: MIT OR Apache-2.0

use crate::on_value::OnValueExt;
use brook_core::{BrookError, Event, Unsubscriber};
use futures::stream::Stream;
use std::error::Error;
use std::future::Future;

/// Registers an [`on_value`](OnValueExt::on_value) subscription without
/// blocking, returning its teardown handle.
///
/// The subscription loop is spawned on the tokio runtime; the returned
/// [`Unsubscriber`] tears it down. This mirrors the attach-and-move-on shape
/// of callback registration: derive the pipeline, hand it a callback, keep
/// only the unsubscriber.
///
/// Must be called from within a tokio runtime.
///
/// # Examples
///
/// ```
/// use brook_core::{Event, EventSource};
/// use brook_exec::spawn_on_value;
/// use futures::channel::mpsc::unbounded;
/// use futures::StreamExt;
/// use std::convert::Infallible;
///
/// # #[tokio::main(flavor = "current_thread")]
/// # async fn main() {
/// let clicks = EventSource::<u32>::new();
/// let (seen_tx, mut seen_rx) = unbounded();
///
/// let unsubscriber = spawn_on_value(
///     clicks.subscribe().unwrap(),
///     move |value, _unsubscriber| {
///         let seen_tx = seen_tx.clone();
///         async move {
///             let _ = seen_tx.unbounded_send(value);
///             Ok::<(), Infallible>(())
///         }
///     },
///     |error| panic!("unexpected error: {error}"),
/// );
///
/// clicks.emit(7).unwrap();
/// assert_eq!(seen_rx.next().await, Some(7));
///
/// unsubscriber.unsubscribe();
/// # }
/// ```
pub fn spawn_on_value<S, T, F, Fut, E, OnError>(
    stream: S,
    on_value_func: F,
    on_error_callback: OnError,
) -> Unsubscriber
where
    S: Stream<Item = Event<T>> + Send + Unpin + 'static,
    T: Send + 'static,
    F: Fn(T, Unsubscriber) -> Fut + Send + Sync + 'static,
    Fut: Future<Output = std::result::Result<(), E>> + Send + 'static,
    E: Error + Send + Sync + 'static,
    OnError: Fn(BrookError) + Send + Sync + 'static,
{
    let unsubscriber = Unsubscriber::new();
    let token = unsubscriber.clone();

    tokio::spawn(async move {
        if let Err(error) = stream
            .on_value(on_value_func, on_error_callback, Some(token))
            .await
        {
            // Detached subscriptions have no caller to return errors to
            warn_dropped!("on_value subscription ended with an error: {error}");
        }
    });

    unsubscriber
}
