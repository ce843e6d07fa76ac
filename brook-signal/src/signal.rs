// Copyright 2026 The brook developers
// SPDX-License-Identifier: MIT OR Apache-2.0

use brook_core::{BrookError, Event};
use brook_stream::MapValuesExt;
use futures::channel::mpsc::{self, UnboundedSender};
use futures::{Stream, StreamExt};
use parking_lot::Mutex;
use std::pin::Pin;
use std::sync::{Arc, Weak};

use crate::hold::HoldExt;

/// Boxed stream of a signal's events.
pub type SignalBoxStream<T> = Pin<Box<dyn Stream<Item = Event<T>> + Send + 'static>>;

struct SignalState<T> {
    current: T,
    senders: Vec<UnboundedSender<Event<T>>>,
}

/// A current-value-holding event abstraction.
///
/// `Signal` pairs a value cell with a change broadcast: [`set`](Signal::set)
/// stores a new value and notifies every change subscriber,
/// [`get`](Signal::get) reads the latest value immediately, and
/// [`subscribe`](Signal::subscribe) yields the current value first and then
/// every subsequent change.
///
/// Signals are cheap to clone; all clones share the same state.
///
/// # Example
///
/// ```
/// use brook_core::Event;
/// use brook_signal::Signal;
/// use futures::StreamExt;
///
/// # #[tokio::main(flavor = "current_thread")]
/// # async fn main() {
/// let name = Signal::new("alice".to_string());
///
/// let mut changes = name.subscribe();
/// name.set("bob".to_string());
///
/// // Subscribers see the current value first, then changes
/// assert_eq!(changes.next().await, Some(Event::Next("alice".to_string())));
/// assert_eq!(changes.next().await, Some(Event::Next("bob".to_string())));
/// # }
/// ```
pub struct Signal<T: Clone + Send + 'static> {
    state: Arc<Mutex<SignalState<T>>>,
}

impl<T: Clone + Send + 'static> Signal<T> {
    /// Creates a signal holding `initial`.
    #[must_use]
    pub fn new(initial: T) -> Self {
        Self {
            state: Arc::new(Mutex::new(SignalState {
                current: initial,
                senders: Vec::new(),
            })),
        }
    }

    /// Returns a clone of the current value.
    #[must_use]
    pub fn get(&self) -> T {
        self.state.lock().current.clone()
    }

    /// Runs `f` against a borrow of the current value.
    pub fn with<R>(&self, f: impl FnOnce(&T) -> R) -> R {
        f(&self.state.lock().current)
    }

    /// Stores `value` as the current value and broadcasts the change.
    pub fn set(&self, value: T) {
        let mut state = self.state.lock();
        state.current = value.clone();
        Self::broadcast(&mut state, Event::Next(value));
    }

    /// Updates the current value in place and broadcasts the result.
    pub fn modify(&self, f: impl FnOnce(&mut T)) {
        let mut state = self.state.lock();
        f(&mut state.current);
        let value = state.current.clone();
        Self::broadcast(&mut state, Event::Next(value));
    }

    /// Forwards a failure to change subscribers; the current value is kept.
    pub(crate) fn send_error(&self, error: BrookError) {
        let mut state = self.state.lock();
        Self::broadcast(&mut state, Event::Error(error));
    }

    /// Returns a stream of changes made after this call.
    ///
    /// The current value is not replayed; use [`subscribe`](Signal::subscribe)
    /// for current-then-changes semantics.
    pub fn changes(&self) -> SignalBoxStream<T> {
        let (tx, rx) = mpsc::unbounded();
        self.state.lock().senders.push(tx);
        Box::pin(rx)
    }

    /// Returns a stream yielding the current value, then every change.
    ///
    /// The current-value snapshot and the change registration happen under
    /// one lock, so no change is missed or seen twice.
    pub fn subscribe(&self) -> SignalBoxStream<T> {
        let (current, changes) = self.subscribe_changes_with_current();
        Box::pin(futures::stream::iter([Event::Next(current)]).chain(changes))
    }

    /// Derives a signal whose value tracks `f` applied to this signal.
    ///
    /// The derived signal is kept up to date by a background driver task; it
    /// stops when this signal's change stream ends or every handle to the
    /// derived signal has been dropped.
    #[must_use]
    pub fn map<U, F>(&self, mut f: F) -> Signal<U>
    where
        F: FnMut(T) -> U + Send + 'static,
        U: Clone + Send + 'static,
    {
        let (current, changes) = self.subscribe_changes_with_current();
        let initial = f(current);
        changes.map_values(f).hold(initial)
    }

    /// Downgrades to a weak handle that does not keep the signal alive.
    #[must_use]
    pub fn downgrade(&self) -> WeakSignal<T> {
        WeakSignal {
            state: Arc::downgrade(&self.state),
        }
    }

    /// Returns the number of live change subscribers.
    ///
    /// Updated lazily: dropped subscribers are pruned on the next broadcast.
    #[must_use]
    pub fn subscriber_count(&self) -> usize {
        self.state.lock().senders.len()
    }

    // Snapshot + registration under one lock.
    fn subscribe_changes_with_current(&self) -> (T, SignalBoxStream<T>) {
        let mut state = self.state.lock();
        let current = state.current.clone();
        let (tx, rx) = mpsc::unbounded();
        state.senders.push(tx);
        (current, Box::pin(rx))
    }

    fn broadcast(state: &mut SignalState<T>, event: Event<T>) {
        state
            .senders
            .retain(|tx| tx.unbounded_send(event.clone()).is_ok());
    }
}

impl<T: Clone + Send + 'static> Clone for Signal<T> {
    fn clone(&self) -> Self {
        Self {
            state: Arc::clone(&self.state),
        }
    }
}

impl<T: Clone + Send + Default + 'static> Default for Signal<T> {
    fn default() -> Self {
        Self::new(T::default())
    }
}

/// A weak handle to a [`Signal`], used by driver tasks so they do not keep
/// the signal alive on their own.
pub struct WeakSignal<T: Clone + Send + 'static> {
    state: Weak<Mutex<SignalState<T>>>,
}

impl<T: Clone + Send + 'static> WeakSignal<T> {
    /// Upgrades to a strong handle if any other handle is still alive.
    #[must_use]
    pub fn upgrade(&self) -> Option<Signal<T>> {
        self.state.upgrade().map(|state| Signal { state })
    }
}

impl<T: Clone + Send + 'static> Clone for WeakSignal<T> {
    fn clone(&self) -> Self {
        Self {
            state: Weak::clone(&self.state),
        }
    }
}
