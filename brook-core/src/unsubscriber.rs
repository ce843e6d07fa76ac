// Copyright 2026 The brook developers
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Teardown handle for subscriptions.
//!
//! Attaching a value callback to a stream yields an [`Unsubscriber`]: the
//! handle that tears the subscription down again. It can be cloned and
//! triggered from any task; pending [`unsubscribed`](Unsubscriber::unsubscribed)
//! futures are woken when any clone fires.

use event_listener::{Event, EventListener};
use std::future::Future;
use std::pin::Pin;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::task::{Context, Poll};

/// Teardown handle for a subscription.
///
/// An `Unsubscriber` can be cloned to create multiple handles to the same
/// teardown state. When `unsubscribe()` is called on any clone, all waiters
/// on `unsubscribed()` are notified.
///
/// # Example
///
/// ```
/// use brook_core::Unsubscriber;
///
/// # #[tokio::main(flavor = "current_thread")]
/// # async fn main() {
/// let unsubscriber = Unsubscriber::new();
/// let handle = unsubscriber.clone();
///
/// let waiter = tokio::spawn(async move {
///     handle.unsubscribed().await;
/// });
///
/// unsubscriber.unsubscribe();
/// waiter.await.unwrap();
/// # }
/// ```
#[derive(Clone, Debug)]
pub struct Unsubscriber {
    inner: Arc<Inner>,
}

#[derive(Debug)]
struct Inner {
    unsubscribed: AtomicBool,
    event: Event,
}

impl Unsubscriber {
    /// Creates a new, still-subscribed handle.
    #[must_use]
    pub fn new() -> Self {
        Self {
            inner: Arc::new(Inner {
                unsubscribed: AtomicBool::new(false),
                event: Event::new(),
            }),
        }
    }

    /// Tears the subscription down, waking all listeners.
    ///
    /// Idempotent: calling it multiple times has the same effect as once.
    pub fn unsubscribe(&self) {
        // Release so the flag is visible before waiters are woken
        self.inner.unsubscribed.store(true, Ordering::Release);
        self.inner.event.notify(usize::MAX);
    }

    /// Checks whether the subscription has been torn down (non-blocking).
    #[must_use]
    pub fn is_unsubscribed(&self) -> bool {
        self.inner.unsubscribed.load(Ordering::Acquire)
    }

    /// Waits asynchronously until the subscription is torn down.
    ///
    /// Resolves immediately if `unsubscribe` has already been called.
    pub fn unsubscribed(&self) -> Unsubscribed<'_> {
        Unsubscribed {
            handle: self,
            listener: None,
        }
    }
}

impl Default for Unsubscriber {
    fn default() -> Self {
        Self::new()
    }
}

/// Future returned by [`Unsubscriber::unsubscribed`].
pub struct Unsubscribed<'a> {
    handle: &'a Unsubscriber,
    listener: Option<EventListener>,
}

impl Future for Unsubscribed<'_> {
    type Output = ();

    fn poll(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<()> {
        if self.handle.is_unsubscribed() {
            return Poll::Ready(());
        }

        if self.listener.is_none() {
            self.listener = Some(self.handle.inner.event.listen());

            // Re-check after registering: unsubscribe() may have fired between
            // the first check and listen()
            if self.handle.is_unsubscribed() {
                return Poll::Ready(());
            }
        }

        match self
            .listener
            .as_mut()
            .map(|listener| Pin::new(listener).poll(cx))
        {
            Some(Poll::Ready(())) => Poll::Ready(()),
            _ => Poll::Pending,
        }
    }
}
