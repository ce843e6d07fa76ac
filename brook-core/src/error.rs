// Copyright 2026 The brook developers
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Error types for the brook signal/stream library.
//!
//! The root [`BrookError`] type covers failures in the stream machinery
//! itself, failures returned by user callbacks, and collections of callback
//! failures gathered by a subscription.

/// Root error type for all brook operations.
#[derive(Debug, thiserror::Error)]
pub enum BrookError {
    /// A failure inside the stream machinery itself.
    #[error("event processing error: {context}")]
    Processing {
        /// Description of what went wrong.
        context: String,
    },

    /// A failure returned by a user-provided callback.
    #[error("callback error: {0}")]
    Callback(#[source] Box<dyn std::error::Error + Send + Sync>),

    /// Several callback failures collected from one subscription.
    #[error("multiple errors occurred: {count} errors")]
    Multiple {
        /// Number of errors that occurred.
        count: usize,
        /// The individual errors.
        errors: Vec<BrookError>,
    },
}

impl BrookError {
    /// Creates a processing error with the given context.
    pub fn processing(context: impl Into<String>) -> Self {
        Self::Processing {
            context: context.into(),
        }
    }

    /// Wraps a user callback error.
    pub fn callback(error: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Callback(Box::new(error))
    }

    /// Aggregates several callback errors into a `Multiple` variant.
    pub fn from_callback_errors<E>(errors: Vec<E>) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        let count = errors.len();
        let errors = errors.into_iter().map(Self::callback).collect();
        Self::Multiple { count, errors }
    }
}

impl Clone for BrookError {
    fn clone(&self) -> Self {
        match self {
            Self::Processing { context } => Self::Processing {
                context: context.clone(),
            },
            // Boxed callback errors cannot be cloned, degrade to a message
            Self::Callback(error) => Self::Processing {
                context: format!("callback error: {error}"),
            },
            Self::Multiple { count, errors } => Self::Multiple {
                count: *count,
                errors: errors.clone(),
            },
        }
    }
}

/// Specialized `Result` type for brook operations.
pub type Result<T> = std::result::Result<T, BrookError>;

/// Extension trait for converting arbitrary errors into [`BrookError`].
///
/// Automatically implemented for all `std::error::Error + Send + Sync`
/// types.
pub trait IntoBrookError {
    /// Converts this error into a [`BrookError`].
    fn into_brook(self) -> BrookError;
}

impl<E: std::error::Error + Send + Sync + 'static> IntoBrookError for E {
    fn into_brook(self) -> BrookError {
        BrookError::callback(self)
    }
}

/// Helper trait for adding context to brook `Result`s in a fluent style.
pub trait ResultExt<T> {
    /// Adds context to an error.
    ///
    /// # Errors
    /// Returns `Err(BrookError)` if the underlying result is `Err`.
    fn context(self, context: impl Into<String>) -> Result<T>;

    /// Adds context to an error using a closure (lazy evaluation).
    ///
    /// # Errors
    /// Returns `Err(BrookError)` if the underlying result is `Err`.
    fn with_context<F>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> String;
}

impl<T> ResultExt<T> for Result<T> {
    fn context(self, context: impl Into<String>) -> Result<T> {
        self.map_err(|error| {
            let context = context.into();
            match error {
                BrookError::Callback(inner) => BrookError::Processing {
                    context: format!("{context}: {inner}"),
                },
                other => other,
            }
        })
    }

    fn with_context<F>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> String,
    {
        self.map_err(|error| {
            let context = f();
            match error {
                BrookError::Callback(inner) => BrookError::Processing {
                    context: format!("{context}: {inner}"),
                },
                other => other,
            }
        })
    }
}
