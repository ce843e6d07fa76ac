// Copyright 2026 The brook developers
// SPDX-License-Identifier: MIT OR Apache-2.0

use crate::error::BrookError;

/// A single occurrence flowing through an event stream.
///
/// Brook streams carry `Event<T>` rather than bare values so that failures can
/// travel the same path as data: combinators transform [`Next`](Event::Next)
/// values and pass [`Error`](Event::Error) through untouched. Errors are only
/// consumed deliberately, by `on_error` or by the error callback of a terminal
/// subscription.
#[derive(Debug, Clone)]
pub enum Event<T> {
    /// A value produced by a source or combinator.
    Next(T),
    /// A failure propagated downstream.
    Error(BrookError),
}

impl<T: PartialEq> PartialEq for Event<T> {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Event::Next(a), Event::Next(b)) => a == b,
            _ => false, // Errors are never equal
        }
    }
}

impl<T> Event<T> {
    /// Returns `true` if this is a `Next` value.
    pub const fn is_next(&self) -> bool {
        matches!(self, Event::Next(_))
    }

    /// Returns `true` if this is an `Error`.
    pub const fn is_error(&self) -> bool {
        matches!(self, Event::Error(_))
    }

    /// Converts from `Event<T>` to `Option<T>`, discarding errors.
    pub fn ok(self) -> Option<T> {
        match self {
            Event::Next(value) => Some(value),
            Event::Error(_) => None,
        }
    }

    /// Converts from `Event<T>` to `Option<BrookError>`, discarding values.
    pub fn err(self) -> Option<BrookError> {
        match self {
            Event::Next(_) => None,
            Event::Error(error) => Some(error),
        }
    }

    /// Maps an `Event<T>` to `Event<U>` by applying a function to the
    /// contained value. Errors pass through unchanged.
    pub fn map<U, F>(self, f: F) -> Event<U>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Event::Next(value) => Event::Next(f(value)),
            Event::Error(error) => Event::Error(error),
        }
    }

    /// Maps an `Event<T>` to `Event<U>` by applying a function that can fail.
    /// Errors pass through unchanged.
    pub fn and_then<U, F>(self, f: F) -> Event<U>
    where
        F: FnOnce(T) -> Event<U>,
    {
        match self {
            Event::Next(value) => f(value),
            Event::Error(error) => Event::Error(error),
        }
    }

    /// Returns the contained value.
    ///
    /// # Panics
    ///
    /// Panics if the event is an `Error`.
    pub fn unwrap(self) -> T {
        match self {
            Event::Next(value) => value,
            Event::Error(error) => {
                panic!("called `Event::unwrap()` on an `Error` event: {error:?}")
            }
        }
    }

    /// Returns the contained value, panicking with a custom message on error.
    ///
    /// # Panics
    ///
    /// Panics with the provided message if the event is an `Error`.
    pub fn expect(self, msg: &str) -> T {
        match self {
            Event::Next(value) => value,
            Event::Error(error) => panic!("{msg}: {error:?}"),
        }
    }
}

impl<T> From<Result<T, BrookError>> for Event<T> {
    fn from(result: Result<T, BrookError>) -> Self {
        match result {
            Ok(value) => Event::Next(value),
            Err(error) => Event::Error(error),
        }
    }
}

impl<T> From<Event<T>> for Result<T, BrookError> {
    fn from(event: Event<T>) -> Self {
        match event {
            Event::Next(value) => Ok(value),
            Event::Error(error) => Err(error),
        }
    }
}
