//! Error types for string conversion

use std::num::{ParseFloatError, ParseIntError};

/// Errors that can occur when converting a string into a typed value.
///
/// Every error is terminal: container conversions abort on the first
/// element failure and surface it unchanged, so the variant always
/// describes the innermost leaf (or hook) that rejected its input.
///
/// Note that "this type cannot be converted at all" is not represented
/// here: a type without a [`Parse`](crate::Parse) implementation is
/// rejected by the compiler, not at runtime.
#[derive(Debug, thiserror::Error)]
pub enum ParseError {
    /// Input was not a valid base-10 integer literal.
    #[error("invalid integer literal '{input}': {source}")]
    Int {
        /// The offending input
        input: String,
        /// Underlying parse failure
        #[source]
        source: ParseIntError,
    },

    /// Input was not a valid decimal floating-point literal.
    #[error("invalid float literal '{input}': {source}")]
    Float {
        /// The offending input
        input: String,
        /// Underlying parse failure
        #[source]
        source: ParseFloatError,
    },

    /// Input was not one of the accepted boolean literals.
    ///
    /// See the `bool` implementation of [`Parse`](crate::Parse) for the
    /// accepted literal set.
    #[error("invalid boolean literal '{input}'")]
    Bool {
        /// The offending input
        input: String,
    },

    /// Input was not a valid human-readable duration (e.g. `1h`, `30s`).
    #[error("invalid duration '{input}': {source}")]
    Duration {
        /// The offending input
        input: String,
        /// Underlying parse failure
        #[source]
        source: humantime::DurationError,
    },

    /// Input did not match the configured time layout.
    #[error("invalid timestamp '{input}' for layout '{layout}': {message}")]
    Timestamp {
        /// The offending input
        input: String,
        /// The strftime layout the input was parsed against
        layout: String,
        /// Message from the underlying time parser
        message: String,
    },

    /// A fixed-size array received the wrong number of parts.
    ///
    /// Unlike `Vec<T>`, which accepts any part count, `[T; N]` requires the
    /// separator-split input to contain exactly `N` parts.
    #[error("cannot fill array: expected {expected} parts, got {actual}")]
    Length {
        /// Declared array length
        expected: usize,
        /// Number of parts the input split into
        actual: usize,
    },

    /// A structured record failed to decode from its JSON encoding.
    #[error("invalid record: {source}")]
    Record {
        /// Underlying decode failure
        #[source]
        source: serde_json::Error,
    },

    /// Error surfaced by a user-supplied [`Parse`](crate::Parse)
    /// implementation, passed through unchanged.
    #[error(transparent)]
    Custom(#[from] anyhow::Error),
}

impl ParseError {
    /// Create a timestamp error (used by the timestamp leaf)
    pub(crate) fn timestamp(
        input: impl Into<String>,
        layout: impl Into<String>,
        message: impl std::fmt::Display,
    ) -> Self {
        Self::Timestamp {
            input: input.into(),
            layout: layout.into(),
            message: message.to_string(),
        }
    }
}
