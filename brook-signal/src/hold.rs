// Copyright 2026 The brook developers
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Stepping an event stream into a signal.

use crate::signal::{Signal, WeakSignal};
use brook_core::Event;
use futures::{Stream, StreamExt};
use std::pin::Pin;

/// Extension trait stepping an event stream into a [`Signal`].
pub trait HoldExt<T>: Stream<Item = Event<T>> + Sized
where
    T: Clone + Send + 'static,
{
    /// Returns a signal that starts at `initial` and tracks the stream.
    ///
    /// A background driver task consumes the stream: each `Next` value is
    /// applied with [`Signal::set`], errors are forwarded to change
    /// subscribers. The driver stops when the stream ends, or on the first
    /// event after every signal handle has been dropped (it only holds a
    /// weak handle).
    ///
    /// Must be called from within a tokio runtime.
    ///
    /// # Examples
    ///
    /// ```
    /// use brook_core::{Event, EventSource};
    /// use brook_signal::HoldExt;
    /// use futures::StreamExt;
    ///
    /// # #[tokio::main(flavor = "current_thread")]
    /// # async fn main() {
    /// let keystrokes = EventSource::<String>::new();
    /// let text = keystrokes.subscribe().unwrap().hold(String::new());
    ///
    /// let mut seen = text.subscribe();
    /// assert_eq!(seen.next().await, Some(Event::Next(String::new())));
    ///
    /// keystrokes.emit("a".to_string()).unwrap();
    /// assert_eq!(seen.next().await, Some(Event::Next("a".to_string())));
    /// assert_eq!(text.get(), "a");
    /// # }
    /// ```
    fn hold(self, initial: T) -> Signal<T>
    where
        Self: Send + 'static;
}

impl<S, T> HoldExt<T> for S
where
    S: Stream<Item = Event<T>>,
    T: Clone + Send + 'static,
{
    fn hold(self, initial: T) -> Signal<T>
    where
        Self: Send + 'static,
    {
        let signal = Signal::new(initial);
        let weak = signal.downgrade();
        tokio::spawn(drive(Box::pin(self), weak));
        signal
    }
}

async fn drive<T>(
    mut stream: Pin<Box<dyn Stream<Item = Event<T>> + Send>>,
    weak: WeakSignal<T>,
) where
    T: Clone + Send + 'static,
{
    while let Some(event) = stream.next().await {
        let Some(signal) = weak.upgrade() else { break };
        match event {
            Event::Next(value) => signal.set(value),
            Event::Error(error) => signal.send_error(error),
        }
    }
}
