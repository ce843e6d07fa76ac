// Copyright 2026 The brook developers
// SPDX-License-Identifier: MIT OR Apache-2.0

use brook_core::{BrookError, Event};
use brook_stream::EventStream;
use futures::channel::mpsc::{self, TrySendError, UnboundedReceiver, UnboundedSender};

/// A test channel that pairs a sender with an [`EventStream`].
///
/// Values pushed with [`send`](TestChannel::send) arrive as `Event::Next`;
/// failures injected with [`fail`](TestChannel::fail) arrive as
/// `Event::Error`.
pub struct TestChannel<T> {
    pub sender: UnboundedSender<Event<T>>,
    pub stream: EventStream<UnboundedReceiver<Event<T>>>,
}

impl<T> TestChannel<T> {
    /// Creates a new test channel with unbounded capacity.
    #[must_use]
    pub fn new() -> Self {
        let (sender, stream) = event_channel();
        Self { sender, stream }
    }

    /// Sends a value through the channel.
    ///
    /// # Errors
    ///
    /// Returns an error if the receiving stream has been dropped.
    pub fn send(&self, value: T) -> Result<(), TrySendError<Event<T>>> {
        self.sender.unbounded_send(Event::Next(value))
    }

    /// Injects a failure into the stream.
    ///
    /// # Errors
    ///
    /// Returns an error if the receiving stream has been dropped.
    pub fn fail(&self, error: BrookError) -> Result<(), TrySendError<Event<T>>> {
        self.sender.unbounded_send(Event::Error(error))
    }

    /// Closes the sender side of the channel, ending the stream.
    pub fn close(self) {
        drop(self.sender);
    }
}

impl<T> Default for TestChannel<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// Creates an unbounded event channel: a raw sender plus the wrapped stream.
#[must_use]
pub fn event_channel<T>() -> (
    UnboundedSender<Event<T>>,
    EventStream<UnboundedReceiver<Event<T>>>,
) {
    let (sender, receiver) = mpsc::unbounded();
    (sender, EventStream::new(receiver))
}

/// Helper to create multiple test channels at once.
pub struct TestChannels;

impl TestChannels {
    /// Creates two test channels.
    #[must_use]
    pub fn two<T>() -> (TestChannel<T>, TestChannel<T>) {
        (TestChannel::new(), TestChannel::new())
    }

    /// Creates three test channels.
    #[must_use]
    pub fn three<T>() -> (TestChannel<T>, TestChannel<T>, TestChannel<T>) {
        (TestChannel::new(), TestChannel::new(), TestChannel::new())
    }
}
