// Copyright 2026 The brook developers
// SPDX-License-Identifier: MIT OR Apache-2.0

use brook_core::{BrookError, Event};
use futures::stream::StreamExt;
use futures::Stream;
use std::fmt::Debug;
use std::time::Duration;
use tokio::time::sleep;

/// Asserts that nothing is emitted within the given window.
///
/// # Panics
///
/// Panics if any item arrives before the timeout elapses.
pub async fn assert_no_event_emitted<S, T>(stream: &mut S, timeout_ms: u64)
where
    S: Stream<Item = T> + Unpin,
{
    tokio::select! {
        event = stream.next() => {
            if event.is_some() {
                panic!("unexpected event emitted, expected silence");
            }
            // `None` means the stream ended (e.g. the sender was dropped on
            // teardown); that is silence, not an emitted item.
        }
        () = sleep(Duration::from_millis(timeout_ms)) => {}
    }
}

/// Expects the next event to be `Next(expected)`.
///
/// # Panics
///
/// Panics if the stream ends, or the next event is an error or a different
/// value.
pub async fn expect_next_value<S, T>(stream: &mut S, expected: T)
where
    S: Stream<Item = Event<T>> + Unpin,
    T: PartialEq + Debug,
{
    match stream.next().await.expect("expected another event") {
        Event::Next(value) => assert_eq!(value, expected),
        Event::Error(error) => panic!("expected value {expected:?}, got error: {error}"),
    }
}

/// Expects the next event to be an error and returns it for inspection.
///
/// # Panics
///
/// Panics if the stream ends or the next event is a value.
pub async fn expect_error<S, T>(stream: &mut S) -> BrookError
where
    S: Stream<Item = Event<T>> + Unpin,
    T: Debug,
{
    match stream.next().await.expect("expected another event") {
        Event::Next(value) => panic!("expected error, got value: {value:?}"),
        Event::Error(error) => error,
    }
}

/// Expects the stream to have ended.
///
/// # Panics
///
/// Panics if another event arrives.
pub async fn expect_end<S, T>(stream: &mut S)
where
    S: Stream<Item = Event<T>> + Unpin,
    T: Debug,
{
    assert!(
        stream.next().await.is_none(),
        "expected end of stream, got another event"
    );
}
