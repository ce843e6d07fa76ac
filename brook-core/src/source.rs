// Copyright 2026 The brook developers
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Hot, multi-subscriber event source.
//!
//! An [`EventSource`] is the entry point for pushing values into a brook
//! pipeline: the Rust rendering of attaching a signal/stream proxy to an
//! event emitter. It broadcasts each [`Event<T>`] to all active subscribers.
//!
//! ## Characteristics
//!
//! - **Hot**: late subscribers do not receive past events, only events emitted
//!   after subscribing.
//! - **Unbounded**: uses unbounded mpsc channels internally (no backpressure).
//! - **Thread-safe**: cheap to clone; all clones share the same state.
//! - **Error/close**: a failure is broadcast to all subscribers and
//!   terminates the source.
//!
//! ## Example
//!
//! ```
//! use brook_core::{Event, EventSource};
//! use futures::StreamExt;
//!
//! # #[tokio::main(flavor = "current_thread")]
//! # async fn main() {
//! let clicks = EventSource::<u32>::new();
//!
//! // Subscribe before emitting
//! let mut stream = clicks.subscribe().unwrap();
//!
//! clicks.emit(1).unwrap();
//! clicks.emit(2).unwrap();
//! clicks.close();
//!
//! assert_eq!(stream.next().await, Some(Event::Next(1)));
//! assert_eq!(stream.next().await, Some(Event::Next(2)));
//! assert_eq!(stream.next().await, None); // Source closed
//! # }
//! ```

use crate::{BrookError, Event, SourceError};
use futures::channel::mpsc::{self, UnboundedReceiver, UnboundedSender};
use futures::Stream;
use parking_lot::Mutex;
use std::pin::Pin;
use std::sync::Arc;
use std::task::{Context, Poll};

/// Boxed stream handed out by [`EventSource::subscribe`].
pub type SourceBoxStream<T> = Pin<Box<dyn Stream<Item = Event<T>> + Send + Sync + 'static>>;

struct SourceState<T> {
    closed: bool,
    senders: Vec<UnboundedSender<Event<T>>>,
}

// Sync-capable wrapper around the unbounded receiver backing a subscription.
struct Subscription<T> {
    inner: Arc<Mutex<UnboundedReceiver<Event<T>>>>,
}

impl<T: Clone + Send + Sync + 'static> Subscription<T> {
    fn into_boxed_stream(rx: UnboundedReceiver<Event<T>>) -> SourceBoxStream<T> {
        Box::pin(Self {
            inner: Arc::new(Mutex::new(rx)),
        })
    }
}

impl<T: Clone + Send + Sync + 'static> Stream for Subscription<T> {
    type Item = Event<T>;

    fn poll_next(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<Self::Item>> {
        let mut guard = self.inner.lock();
        Pin::new(&mut *guard).poll_next(cx)
    }
}

/// A hot, unbounded source that broadcasts events to all current subscribers.
///
/// `EventSource` implements a publish-subscribe pattern: every subscriber
/// receives the same events, in emission order. It is the construction point
/// of the signal/stream abstraction; derive streams from it via `subscribe`
/// (or `EventStream::from_source` in `brook-stream`).
///
/// See the [module documentation](self) for examples and more details.
pub struct EventSource<T: Clone + Send + Sync + 'static> {
    state: Arc<Mutex<SourceState<T>>>,
}

impl<T: Clone + Send + Sync + 'static> EventSource<T> {
    /// Creates a new open source with no subscribers.
    #[must_use]
    pub fn new() -> Self {
        Self {
            state: Arc::new(Mutex::new(SourceState {
                closed: false,
                senders: Vec::new(),
            })),
        }
    }

    /// Subscribes to this source and receives a stream of `Event<T>`.
    /// Late subscribers do not receive previously emitted events.
    ///
    /// # Errors
    ///
    /// Returns `SourceError::Closed` if the source has been closed.
    pub fn subscribe(&self) -> Result<SourceBoxStream<T>, SourceError> {
        let mut state = self.state.lock();
        if state.closed {
            return Err(SourceError::Closed);
        }

        let (tx, rx) = mpsc::unbounded();
        state.senders.push(tx);
        Ok(Subscription::into_boxed_stream(rx))
    }

    /// Sends an event to all active subscribers.
    ///
    /// Senders whose subscriber was dropped are pruned as part of the send.
    ///
    /// # Errors
    ///
    /// Returns `SourceError::Closed` if the source has been closed.
    pub fn send(&self, event: Event<T>) -> Result<(), SourceError> {
        let mut state = self.state.lock();
        if state.closed {
            return Err(SourceError::Closed);
        }

        state
            .senders
            .retain(|tx| tx.unbounded_send(event.clone()).is_ok());
        Ok(())
    }

    /// Emits a value to all active subscribers.
    ///
    /// Convenience wrapper around `send(Event::Next(value))`.
    ///
    /// # Errors
    ///
    /// Returns `SourceError::Closed` if the source has been closed.
    pub fn emit(&self, value: T) -> Result<(), SourceError> {
        self.send(Event::Next(value))
    }

    /// Broadcasts a failure to all subscribers and terminates the source.
    ///
    /// # Errors
    ///
    /// Returns `SourceError::Closed` if the source was already closed.
    pub fn fail(&self, error: BrookError) -> Result<(), SourceError> {
        let result = self.send(Event::Error(error));
        self.close();
        result
    }

    /// Closes the source, completing all subscriber streams.
    ///
    /// After closing:
    /// - existing subscribers receive `None` on their next poll (stream ends)
    /// - `emit`, `send` and `fail` return `SourceError::Closed`
    /// - `subscribe` returns `SourceError::Closed`
    ///
    /// Closing is idempotent.
    pub fn close(&self) {
        let mut state = self.state.lock();
        state.closed = true;
        state.senders.clear();
    }

    /// Returns `true` if the source has been closed.
    #[must_use]
    pub fn is_closed(&self) -> bool {
        self.state.lock().closed
    }

    /// Returns the number of currently active subscribers.
    ///
    /// The count is updated lazily: dropped subscribers are pruned on the
    /// next `send`, not immediately when dropped.
    #[must_use]
    pub fn subscriber_count(&self) -> usize {
        self.state.lock().senders.len()
    }
}

impl<T: Clone + Send + Sync + 'static> Default for EventSource<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone + Send + Sync + 'static> Clone for EventSource<T> {
    fn clone(&self) -> Self {
        Self {
            state: Arc::clone(&self.state),
        }
    }
}
