// Copyright 2026 The brook developers
// SPDX-License-Identifier: MIT OR Apache-2.0

use brook_core::{BrookError, Event, Unsubscriber};
use brook_exec::{spawn_on_value, OnValueExt};
use brook_test_utils::{assert_no_event_emitted, TestChannel};
use futures::channel::mpsc::unbounded;
use futures::lock::Mutex as FutureMutex;
use futures::StreamExt;
use std::sync::Arc;

#[derive(Debug, thiserror::Error)]
#[error("test error: {0}")]
struct TestError(String);

impl TestError {
    fn new(msg: impl Into<String>) -> Self {
        Self(msg.into())
    }
}

#[tokio::test]
async fn test_on_value_processes_values_in_order() -> anyhow::Result<()> {
    // Arrange: a small derived pipeline feeding the subscription
    let TestChannel { sender, stream } = TestChannel::<u32>::new();
    let stream = stream.map(|n| n * 10).boxed();
    let results = Arc::new(FutureMutex::new(Vec::new()));
    let (notify_tx, mut notify_rx) = unbounded();

    let on_value_func = {
        let results = Arc::clone(&results);
        move |value, _unsubscriber: Unsubscriber| {
            let results = Arc::clone(&results);
            let notify_tx = notify_tx.clone();
            async move {
                results.lock().await.push(value);
                let _ = notify_tx.unbounded_send(());
                Ok::<(), TestError>(())
            }
        }
    };

    let task = tokio::spawn(async move {
        stream
            .on_value(
                on_value_func,
                |error| panic!("unexpected error: {error}"),
                None,
            )
            .await
            .expect("subscription should succeed");
    });

    // Act & Assert: wait for actual processing after each send
    sender.unbounded_send(Event::Next(1))?;
    notify_rx.next().await.unwrap();
    assert_eq!(*results.lock().await, vec![10]);

    sender.unbounded_send(Event::Next(2))?;
    notify_rx.next().await.unwrap();
    assert_eq!(*results.lock().await, vec![10, 20]);

    drop(sender);
    task.await?;
    Ok(())
}

#[tokio::test]
async fn test_callback_errors_reach_the_error_callback_without_stopping() -> anyhow::Result<()> {
    // Arrange
    let TestChannel { sender, stream } = TestChannel::<u32>::new();
    let (error_tx, mut error_rx) = unbounded();
    let results = Arc::new(FutureMutex::new(Vec::new()));

    let on_value_func = {
        let results = Arc::clone(&results);
        move |value: u32, _unsubscriber: Unsubscriber| {
            let results = Arc::clone(&results);
            async move {
                if value % 2 == 0 {
                    return Err(TestError::new(format!("even number: {value}")));
                }
                results.lock().await.push(value);
                Ok(())
            }
        }
    };

    let on_error = move |error: BrookError| {
        let _ = error_tx.unbounded_send(error.to_string());
    };

    let task = tokio::spawn(async move {
        stream
            .on_value(on_value_func, on_error, None)
            .await
            .expect("subscription should succeed");
    });

    // Act
    sender.unbounded_send(Event::Next(1))?;
    sender.unbounded_send(Event::Next(2))?;
    sender.unbounded_send(Event::Next(3))?;
    drop(sender);
    task.await?;

    // Assert: the even value errored, the odd ones were processed
    let reported = error_rx.next().await.unwrap();
    assert!(reported.contains("even number: 2"));
    assert_eq!(*results.lock().await, vec![1, 3]);
    Ok(())
}

#[tokio::test]
async fn test_stream_errors_reach_the_error_callback() -> anyhow::Result<()> {
    // Arrange
    let TestChannel { sender, stream } = TestChannel::<u32>::new();
    let (error_tx, mut error_rx) = unbounded();

    let task = tokio::spawn(async move {
        stream
            .on_value(
                |_value, _unsubscriber| async move { Ok::<(), TestError>(()) },
                move |error| {
                    let _ = error_tx.unbounded_send(error.to_string());
                },
                None,
            )
            .await
            .expect("subscription should succeed");
    });

    // Act
    sender.unbounded_send(Event::Error(BrookError::processing("upstream broke")))?;
    drop(sender);
    task.await?;

    // Assert
    let reported = error_rx.next().await.unwrap();
    assert!(reported.contains("upstream broke"));
    Ok(())
}

#[tokio::test]
async fn test_unsubscribe_stops_further_processing() -> anyhow::Result<()> {
    // Arrange
    let TestChannel { sender, stream } = TestChannel::<u32>::new();
    let (notify_tx, mut notify_rx) = unbounded();

    let unsubscriber = spawn_on_value(
        stream,
        move |_value, _unsubscriber| {
            let notify_tx = notify_tx.clone();
            async move {
                let _ = notify_tx.unbounded_send(());
                Ok::<(), TestError>(())
            }
        },
        |error| panic!("unexpected error: {error}"),
    );

    // Act: one value goes through, then the subscription is torn down
    sender.unbounded_send(Event::Next(1))?;
    notify_rx.next().await.unwrap();
    unsubscriber.unsubscribe();
    sender.unbounded_send(Event::Next(2))?;

    // Assert
    assert_no_event_emitted(&mut notify_rx, 50).await;
    Ok(())
}

#[tokio::test]
async fn test_handler_can_tear_down_its_own_subscription() -> anyhow::Result<()> {
    // Arrange
    let TestChannel { sender, stream } = TestChannel::<u32>::new();
    let results = Arc::new(FutureMutex::new(Vec::new()));

    sender.unbounded_send(Event::Next(1))?;
    sender.unbounded_send(Event::Next(2))?;

    // Act: the handler unsubscribes after the first value
    let on_value_func = {
        let results = Arc::clone(&results);
        move |value, unsubscriber: Unsubscriber| {
            let results = Arc::clone(&results);
            async move {
                results.lock().await.push(value);
                unsubscriber.unsubscribe();
                Ok::<(), TestError>(())
            }
        }
    };
    stream
        .on_value(
            on_value_func,
            |error| panic!("unexpected error: {error}"),
            None,
        )
        .await?;

    // Assert: the queued second value was never processed
    assert_eq!(*results.lock().await, vec![1]);
    drop(sender);
    Ok(())
}
