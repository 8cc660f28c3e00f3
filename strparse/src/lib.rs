//! Generic string-to-typed-value conversion
//!
//! This library converts arbitrary textual input into strongly-typed
//! values, recursing through composite types (`Option<T>`, `Vec<T>`,
//! fixed-size arrays, JSON records) and terminating at primitive leaf
//! conversions (integers, floats, booleans, strings, durations,
//! timestamps).
//!
//! # Features
//!
//! - **Type-driven**: the target type selects the conversion; containers
//!   recurse into their element types
//! - **Empty-input tolerance**: an empty string yields the type's default
//!   state instead of an error
//! - **Custom conversions**: any type can replace the built-in logic by
//!   implementing [`Parse`] itself
//! - **Tunable**: timestamp layout and sequence separator are configured
//!   per call via [`Config`]
//!
//! # Value Parsing
//!
//! **Leaves**:
//! - Integers: base-10 (`MAX_CONNECTIONS=42`)
//! - Floats: decimal (`RATIO=0.75`)
//! - Booleans: `1 t T TRUE true True` / `0 f F FALSE false False`
//! - Durations: unit suffixes (`TIMEOUT=1m 30s`) via [`humantime`]
//! - Timestamps: the configured strftime layout, ISO 8601 by default
//!
//! **Containers**:
//! - `Option<T>`: empty input stays `None`
//! - `Vec<T>`: separator-delimited, any length (`PORTS=80,443,8080`)
//! - `[T; N]`: separator-delimited, exactly `N` parts
//! - [`Json<T>`]: one JSON document decoding into any
//!   [`serde::Deserialize`] record
//!
//! # Example
//!
//! ```rust
//! use std::time::Duration;
//!
//! let count: u32 = strparse::parse("42")?;
//! assert_eq!(count, 42);
//!
//! let flags: Vec<bool> = strparse::parse("t,t,f")?;
//! assert_eq!(flags, vec![true, true, false]);
//!
//! let timeout: Option<Duration> = strparse::parse("1h")?;
//! assert_eq!(timeout, Some(Duration::from_secs(3600)));
//!
//! // Empty input is not an error; it leaves the target at its default.
//! let timeout: Option<Duration> = strparse::parse("")?;
//! assert_eq!(timeout, None);
//! # Ok::<(), strparse::ParseError>(())
//! ```
//!
//! # Options
//!
//! Conversion is tunable through [`Config`], built once and shared across
//! calls:
//!
//! ```rust
//! use chrono::{DateTime, Utc};
//! use strparse::Config;
//!
//! let config = Config::new().separator(";").time_layout("%Y-%m-%d");
//!
//! let ports: Vec<u16> = strparse::parse_with(&config, "80;443")?;
//! assert_eq!(ports, vec![80, 443]);
//!
//! let day: DateTime<Utc> = strparse::parse_with(&config, "2021-01-01")?;
//! assert_eq!(day.to_rfc3339(), "2021-01-01T00:00:00+00:00");
//! # Ok::<(), strparse::ParseError>(())
//! ```

mod config;
mod de;
mod error;

pub use config::{Config, DEFAULT_SEPARATOR, DEFAULT_TIME_LAYOUT};
pub use de::{Json, Outcome, Parse};
pub use error::ParseError;

// Re-export for custom `Parse` implementations
pub use anyhow;

/// Convert `input` into a `T` using the default [`Config`].
///
/// Returns an error when the input does not conform to the target type's
/// grammar. An empty input is not an error: the target is left at its
/// default state (zero, `false`, empty, `None`, the Unix epoch).
///
/// # Example
///
/// ```rust
/// let limit: u64 = strparse::parse("1024")?;
/// assert_eq!(limit, 1024);
/// # Ok::<(), strparse::ParseError>(())
/// ```
pub fn parse<T: Parse>(input: &str) -> Result<T, ParseError> {
    parse_with(&Config::default(), input)
}

/// Convert `input` into a `T` using a pre-built [`Config`].
///
/// Use this form when the same options are reused across many calls.
pub fn parse_with<T: Parse>(config: &Config, input: &str) -> Result<T, ParseError> {
    T::parse_str(input, config).map(Outcome::into_value)
}

/// Like [`parse`], but panics on error.
///
/// # Panics
///
/// Panics when the conversion fails.
pub fn must_parse<T: Parse>(input: &str) -> T {
    must_parse_with(&Config::default(), input)
}

/// Like [`parse_with`], but panics on error.
///
/// # Panics
///
/// Panics when the conversion fails.
pub fn must_parse_with<T: Parse>(config: &Config, input: &str) -> T {
    match parse_with(config, input) {
        Ok(value) => value,
        Err(err) => panic!("conversion failed: {err}"),
    }
}
