// Copyright 2026 The brook developers
// SPDX-License-Identifier: MIT OR Apache-2.0

//! The motivating pipeline, end to end: clicks on a login button carry the
//! text of an input field; the pipeline extracts the value, keeps only
//! non-empty ones, and writes them to a notice.
//!
//! Run with: `cargo run --example login_form`

use brook_rx::prelude::*;
use std::convert::Infallible;

#[derive(Debug, Clone)]
struct Click {
    input_value: String,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let login_clicks = EventSource::<Click>::new();

    // Derive: click -> value -> non-empty value
    let non_empty_values = EventStream::from_source(&login_clicks)?
        .map(|click| click.input_value)
        .filter(|value| !value.is_empty())
        .boxed();

    // Subscribe: the handler only ever sees values worth showing
    let (notice_tx, mut notice_rx) = tokio::sync::mpsc::unbounded_channel();
    let unsubscriber = spawn_on_value(
        non_empty_values,
        move |value, _unsubscriber| {
            let notice_tx = notice_tx.clone();
            async move {
                let _ = notice_tx.send(value);
                Ok::<(), Infallible>(())
            }
        },
        |error| eprintln!("pipeline error: {error}"),
    );

    // Simulate the user: two clicks with an empty field, then a real one
    for input_value in ["", "", "alice@example.com"] {
        login_clicks.emit(Click {
            input_value: input_value.to_string(),
        })?;
    }

    let notice = notice_rx.recv().await.expect("notice should arrive");
    println!("notice: {notice}");

    unsubscriber.unsubscribe();
    login_clicks.close();
    Ok(())
}
