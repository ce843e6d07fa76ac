// Copyright 2026 The brook developers
// SPDX-License-Identifier: MIT OR Apache-2.0

use brook_core::{BrookError, Event};
use brook_test_utils::{assert_no_event_emitted, expect_end, expect_error, expect_next_value, TestChannels};
use futures::StreamExt;

#[tokio::test]
async fn test_merge_interleaves_all_inputs() -> anyhow::Result<()> {
    // Arrange
    let (left, right) = TestChannels::two::<&'static str>();
    let mut merged = left.stream.merge(vec![right.stream]).boxed();

    // Act
    left.sender.unbounded_send(Event::Next("left-1"))?;
    right.sender.unbounded_send(Event::Next("right-1"))?;
    left.sender.unbounded_send(Event::Next("left-2"))?;
    drop((left.sender, right.sender));

    // Assert: every event appears exactly once
    let mut seen = Vec::new();
    while let Some(event) = merged.next().await {
        seen.push(event.unwrap());
    }
    seen.sort_unstable();
    assert_eq!(seen, vec!["left-1", "left-2", "right-1"]);
    Ok(())
}

#[tokio::test]
async fn test_merge_preserves_per_input_order() -> anyhow::Result<()> {
    // Arrange
    let (left, right) = TestChannels::two::<u32>();
    let mut merged = left.stream.merge(vec![right.stream]).boxed();

    // Act
    left.sender.unbounded_send(Event::Next(1))?;
    left.sender.unbounded_send(Event::Next(2))?;
    left.sender.unbounded_send(Event::Next(3))?;
    drop((left.sender, right.sender));

    // Assert
    expect_next_value(&mut merged, 1).await;
    expect_next_value(&mut merged, 2).await;
    expect_next_value(&mut merged, 3).await;
    expect_end(&mut merged).await;
    Ok(())
}

#[tokio::test]
async fn test_combine_latest_waits_for_every_input() -> anyhow::Result<()> {
    // Arrange
    let (first, second) = TestChannels::two::<u32>();
    let mut combined = first
        .stream
        .combine_latest(vec![second.stream], |values| (values[0], values[1]));

    // Act & Assert: nothing until both inputs have emitted
    first.sender.unbounded_send(Event::Next(1))?;
    assert_no_event_emitted(&mut combined, 50).await;

    second.sender.unbounded_send(Event::Next(10))?;
    expect_next_value(&mut combined, (1, 10)).await;

    // Any further input emission produces a combined value
    first.sender.unbounded_send(Event::Next(2))?;
    expect_next_value(&mut combined, (2, 10)).await;

    second.sender.unbounded_send(Event::Next(20))?;
    expect_next_value(&mut combined, (2, 20)).await;
    Ok(())
}

#[tokio::test]
async fn test_combine_latest_propagates_errors_immediately() -> anyhow::Result<()> {
    // Arrange
    let (first, second) = TestChannels::two::<u32>();
    let mut combined = first
        .stream
        .combine_latest(vec![second.stream], |values| values.to_vec());

    // Act: an error before the state is complete
    first.sender.unbounded_send(Event::Next(1))?;
    second
        .sender
        .unbounded_send(Event::Error(BrookError::processing("sensor offline")))?;

    // Assert
    let error = expect_error(&mut combined).await;
    assert!(error.to_string().contains("sensor offline"));

    // The state machine is untouched: completing it still works
    second.sender.unbounded_send(Event::Next(10))?;
    expect_next_value(&mut combined, vec![1, 10]).await;
    Ok(())
}

#[tokio::test]
async fn test_combine_latest_with_three_inputs_keeps_input_order() -> anyhow::Result<()> {
    // Arrange
    let (a, b, c) = TestChannels::three::<u32>();
    let mut combined = a
        .stream
        .combine_latest(vec![b.stream, c.stream], |values| values.to_vec());

    // Act: fill in reverse order
    c.sender.unbounded_send(Event::Next(3))?;
    b.sender.unbounded_send(Event::Next(2))?;
    a.sender.unbounded_send(Event::Next(1))?;

    // Assert: selector sees values ordered self-first regardless of arrival
    expect_next_value(&mut combined, vec![1, 2, 3]).await;
    Ok(())
}
