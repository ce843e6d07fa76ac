// Copyright 2026 The brook developers
// SPDX-License-Identifier: MIT OR Apache-2.0

//! The motivating derivation chain: raw inputs mapped to values, filtered to
//! the ones worth acting on.

use brook_core::BrookError;
use brook_test_utils::input::{click_login, keypress_login, Input};
use brook_test_utils::{assert_no_event_emitted, expect_end, expect_error, expect_next_value, TestChannel};

#[tokio::test]
async fn test_map_then_filter_keeps_only_non_empty_values() -> anyhow::Result<()> {
    // Arrange
    let TestChannel { sender, stream } = TestChannel::<Input>::new();
    let mut values = stream
        .map(|input| match input {
            Input::KeyPress(keypress) => keypress.text,
            Input::Click(_) => String::new(),
        })
        .filter(|text| !text.is_empty())
        .boxed();

    // Act: a click (maps to empty), an empty keypress, then real text
    sender.unbounded_send(brook_core::Event::Next(click_login()))?;
    sender.unbounded_send(brook_core::Event::Next(keypress_login("")))?;
    sender.unbounded_send(brook_core::Event::Next(keypress_login("alice")))?;

    // Assert: only the non-empty value survives
    expect_next_value(&mut values, "alice".to_string()).await;
    assert_no_event_emitted(&mut values, 50).await;
    Ok(())
}

#[tokio::test]
async fn test_map_and_filter_pass_errors_through() -> anyhow::Result<()> {
    // Arrange
    let TestChannel { sender, stream } = TestChannel::<u32>::new();
    let mut doubled = stream.map(|n| n * 2).filter(|n| *n > 2).boxed();

    // Act
    sender.unbounded_send(brook_core::Event::Next(1))?; // doubled to 2, filtered
    sender.unbounded_send(brook_core::Event::Error(BrookError::processing("boom")))?;
    sender.unbounded_send(brook_core::Event::Next(5))?;
    drop(sender);

    // Assert: the error arrives even though its neighbors were filtered
    let error = expect_error(&mut doubled).await;
    assert!(error.to_string().contains("boom"));
    expect_next_value(&mut doubled, 10).await;
    expect_end(&mut doubled).await;
    Ok(())
}

#[tokio::test]
async fn test_filter_map_fuses_extraction_and_selection() -> anyhow::Result<()> {
    // Arrange
    let TestChannel { sender, stream } = TestChannel::<Input>::new();
    let mut texts = stream
        .filter_map(|input| match input {
            Input::KeyPress(keypress) if !keypress.text.is_empty() => Some(keypress.text),
            _ => None,
        })
        .boxed();

    // Act
    sender.unbounded_send(brook_core::Event::Next(click_login()))?;
    sender.unbounded_send(brook_core::Event::Next(keypress_login("bob")))?;
    drop(sender);

    // Assert
    expect_next_value(&mut texts, "bob".to_string()).await;
    expect_end(&mut texts).await;
    Ok(())
}
