// Copyright 2026 The brook developers
// SPDX-License-Identifier: MIT OR Apache-2.0

use brook_core::{BrookError, Event, Unsubscriber};
use brook_exec::OnValueLatestExt;
use brook_test_utils::TestChannel;
use futures::channel::mpsc::unbounded;
use futures::lock::Mutex as FutureMutex;
use futures::StreamExt;
use std::sync::Arc;
use tokio::sync::Semaphore;

#[derive(Debug, thiserror::Error)]
#[error("test error: {0}")]
struct TestError(String);

#[tokio::test]
async fn test_newer_values_revoke_the_in_flight_handler() -> anyhow::Result<()> {
    // Arrange: values 1 and 2 park on their per-value unsubscriber, so only a
    // later value can ever complete
    let TestChannel { sender, stream } = TestChannel::<u32>::new();
    let log = Arc::new(FutureMutex::new(Vec::new()));

    sender.unbounded_send(Event::Next(1))?;
    sender.unbounded_send(Event::Next(2))?;
    sender.unbounded_send(Event::Next(3))?;
    drop(sender);

    let on_value_func = {
        let log = Arc::clone(&log);
        move |value: u32, unsubscriber: Unsubscriber| {
            let log = Arc::clone(&log);
            async move {
                log.lock().await.push(format!("started:{value}"));
                if value != 3 {
                    // Outdated values wait here until they are revoked
                    unsubscriber.unsubscribed().await;
                    return Ok(());
                }
                log.lock().await.push(format!("completed:{value}"));
                Ok::<(), TestError>(())
            }
        }
    };

    // Act
    stream
        .on_value_latest(
            on_value_func,
            |error| panic!("unexpected error: {error}"),
            None,
        )
        .await?;

    // Assert: every value started, only the latest completed
    assert_eq!(
        *log.lock().await,
        vec!["started:1", "started:2", "started:3", "completed:3"]
    );
    Ok(())
}

#[tokio::test]
async fn test_in_flight_handler_finishes_when_the_stream_ends() -> anyhow::Result<()> {
    // Arrange: the handler blocks on a gate the test releases later
    let TestChannel { sender, stream } = TestChannel::<u32>::new();
    let gate = Arc::new(Semaphore::new(0));
    let (started_tx, mut started_rx) = unbounded();
    let (completed_tx, mut completed_rx) = unbounded();

    let on_value_func = {
        let gate = Arc::clone(&gate);
        move |value: u32, _unsubscriber: Unsubscriber| {
            let gate = Arc::clone(&gate);
            let started_tx = started_tx.clone();
            let completed_tx = completed_tx.clone();
            async move {
                let _ = started_tx.unbounded_send(value);
                gate.acquire().await.expect("gate closed").forget();
                let _ = completed_tx.unbounded_send(value);
                Ok::<(), TestError>(())
            }
        }
    };

    let task = tokio::spawn(async move {
        stream
            .on_value_latest(
                on_value_func,
                |error| panic!("unexpected error: {error}"),
                None,
            )
            .await
            .expect("subscription should succeed");
    });

    // Act
    sender.unbounded_send(Event::Next(1))?;
    assert_eq!(started_rx.next().await, Some(1));
    drop(sender); // stream ends while the handler is still gated
    gate.add_permits(1);
    task.await?;

    // Assert
    assert_eq!(completed_rx.next().await, Some(1));
    Ok(())
}

#[tokio::test]
async fn test_error_events_do_not_disturb_the_running_handler() -> anyhow::Result<()> {
    // Arrange
    let TestChannel { sender, stream } = TestChannel::<u32>::new();
    let gate = Arc::new(Semaphore::new(0));
    let (started_tx, mut started_rx) = unbounded();
    let (completed_tx, mut completed_rx) = unbounded();
    let (error_tx, mut error_rx) = unbounded();

    let on_value_func = {
        let gate = Arc::clone(&gate);
        move |value: u32, _unsubscriber: Unsubscriber| {
            let gate = Arc::clone(&gate);
            let started_tx = started_tx.clone();
            let completed_tx = completed_tx.clone();
            async move {
                let _ = started_tx.unbounded_send(value);
                gate.acquire().await.expect("gate closed").forget();
                let _ = completed_tx.unbounded_send(value);
                Ok::<(), TestError>(())
            }
        }
    };

    let task = tokio::spawn(async move {
        stream
            .on_value_latest(
                on_value_func,
                move |error| {
                    let _ = error_tx.unbounded_send(error.to_string());
                },
                None,
            )
            .await
            .expect("subscription should succeed");
    });

    // Act: an error arrives while the handler for 1 is gated
    sender.unbounded_send(Event::Next(1))?;
    assert_eq!(started_rx.next().await, Some(1));
    sender.unbounded_send(Event::Error(BrookError::processing("transient")))?;
    assert!(error_rx.next().await.unwrap().contains("transient"));

    gate.add_permits(1);
    assert_eq!(completed_rx.next().await, Some(1));

    drop(sender);
    task.await?;
    Ok(())
}
