// Copyright 2026 The brook developers
// SPDX-License-Identifier: MIT OR Apache-2.0

use brook_core::{BrookError, Event};
use brook_test_utils::{expect_end, expect_error, expect_next_value, TestChannel};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

#[tokio::test]
async fn test_scan_emits_every_accumulator_state() -> anyhow::Result<()> {
    // Arrange
    let TestChannel { sender, stream } = TestChannel::<u32>::new();
    let mut totals = stream.scan(0, |total, n| total + n).boxed();

    // Act
    for n in [1, 2, 3] {
        sender.unbounded_send(Event::Next(n))?;
    }
    drop(sender);

    // Assert
    expect_next_value(&mut totals, 1).await;
    expect_next_value(&mut totals, 3).await;
    expect_next_value(&mut totals, 6).await;
    expect_end(&mut totals).await;
    Ok(())
}

#[tokio::test]
async fn test_scan_passes_errors_through_without_touching_the_accumulator() -> anyhow::Result<()> {
    // Arrange
    let TestChannel { sender, stream } = TestChannel::<u32>::new();
    let mut totals = stream.scan(0, |total, n| total + n).boxed();

    // Act
    sender.unbounded_send(Event::Next(1))?;
    sender.unbounded_send(Event::Error(BrookError::processing("boom")))?;
    sender.unbounded_send(Event::Next(2))?;
    drop(sender);

    // Assert: the accumulation resumes where it left off
    expect_next_value(&mut totals, 1).await;
    let _error = expect_error(&mut totals).await;
    expect_next_value(&mut totals, 3).await;
    expect_end(&mut totals).await;
    Ok(())
}

#[tokio::test]
async fn test_distinct_until_changed_suppresses_consecutive_duplicates() -> anyhow::Result<()> {
    // Arrange
    let TestChannel { sender, stream } = TestChannel::<u32>::new();
    let mut distinct = stream.distinct_until_changed().boxed();

    // Act: 1, 1, 2, 2, 3, 2
    for n in [1, 1, 2, 2, 3, 2] {
        sender.unbounded_send(Event::Next(n))?;
    }
    drop(sender);

    // Assert: 1, 2, 3, 2
    expect_next_value(&mut distinct, 1).await;
    expect_next_value(&mut distinct, 2).await;
    expect_next_value(&mut distinct, 3).await;
    expect_next_value(&mut distinct, 2).await;
    expect_end(&mut distinct).await;
    Ok(())
}

#[tokio::test]
async fn test_start_with_prepends_initial_values() -> anyhow::Result<()> {
    // Arrange
    let TestChannel { sender, stream } = TestChannel::<u32>::new();
    let mut with_prefix = stream.start_with(vec![1, 2]).boxed();

    // Act
    sender.unbounded_send(Event::Next(3))?;
    drop(sender);

    // Assert
    expect_next_value(&mut with_prefix, 1).await;
    expect_next_value(&mut with_prefix, 2).await;
    expect_next_value(&mut with_prefix, 3).await;
    expect_end(&mut with_prefix).await;
    Ok(())
}

#[tokio::test]
async fn test_take_and_skip_bound_the_stream() -> anyhow::Result<()> {
    // Arrange
    let TestChannel { sender, stream } = TestChannel::<u32>::new();
    let mut window = stream.skip_events(1).take_events(2).boxed();

    // Act
    for n in [1, 2, 3, 4] {
        sender.unbounded_send(Event::Next(n))?;
    }

    // Assert: skips 1, takes 2 and 3, ends without waiting for sender drop
    expect_next_value(&mut window, 2).await;
    expect_next_value(&mut window, 3).await;
    expect_end(&mut window).await;
    drop(sender);
    Ok(())
}

#[tokio::test]
async fn test_tap_observes_values_without_changing_them() -> anyhow::Result<()> {
    // Arrange
    let observed = Arc::new(AtomicUsize::new(0));
    let counter = Arc::clone(&observed);
    let TestChannel { sender, stream } = TestChannel::<u32>::new();
    let mut tapped = stream
        .tap(move |_| {
            counter.fetch_add(1, Ordering::SeqCst);
        })
        .boxed();

    // Act
    sender.unbounded_send(Event::Next(7))?;
    sender.unbounded_send(Event::Error(BrookError::processing("boom")))?;
    drop(sender);

    // Assert: the value passes through and only values are observed
    expect_next_value(&mut tapped, 7).await;
    let _error = expect_error(&mut tapped).await;
    expect_end(&mut tapped).await;
    assert_eq!(observed.load(Ordering::SeqCst), 1);
    Ok(())
}

#[tokio::test]
async fn test_on_error_chain_consumes_recognized_errors() -> anyhow::Result<()> {
    // Arrange
    let caught = Arc::new(AtomicUsize::new(0));
    let catch_all = Arc::clone(&caught);
    let TestChannel { sender, stream } = TestChannel::<u32>::new();
    let mut stream = stream
        .on_error(|error| error.to_string().contains("validation"))
        .on_error(move |_| {
            catch_all.fetch_add(1, Ordering::SeqCst);
            true
        })
        .boxed();

    // Act
    sender.unbounded_send(Event::Error(BrookError::processing("validation failed")))?;
    sender.unbounded_send(Event::Error(BrookError::processing("io failed")))?;
    sender.unbounded_send(Event::Next(1))?;
    drop(sender);

    // Assert: both errors consumed, only the second by the catch-all
    expect_next_value(&mut stream, 1).await;
    expect_end(&mut stream).await;
    assert_eq!(caught.load(Ordering::SeqCst), 1);
    Ok(())
}
