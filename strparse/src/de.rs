//! The conversion engine: the [`Parse`] trait and its built-in
//! implementations.
//!
//! Conversion is driven entirely by the target type. Leaf types (integers,
//! floats, booleans, strings, durations, timestamps) parse the input
//! directly; container types (`Option<T>`, `Vec<T>`, `[T; N]`, [`Json<T>`])
//! derive sub-inputs and recurse, threading the same [`Config`] through
//! every step.

use std::time::Duration;

use chrono::format::{self, Parsed, StrftimeItems};
use chrono::offset::Offset;
use chrono::{DateTime, FixedOffset, NaiveTime, Utc};
use serde::de::DeserializeOwned;

use crate::config::Config;
use crate::error::ParseError;

/// Outcome of a single conversion step.
///
/// Both variants carry a value, so a caller can always materialize the
/// target; the variant records whether the input actually assigned
/// anything. An empty input to a leaf is `Unset`, not an error, and the
/// carried value is the leaf's default state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome<T> {
    /// The input was non-empty and produced a value.
    Set(T),
    /// Nothing was assigned. The carried value is whatever default state
    /// the handler materialized for the target.
    Unset(T),
}

impl<T> Outcome<T> {
    /// Unwrap the carried value, set or not.
    pub fn into_value(self) -> T {
        match self {
            Self::Set(value) | Self::Unset(value) => value,
        }
    }

    /// Whether the input assigned a value.
    pub fn is_set(&self) -> bool {
        matches!(self, Self::Set(_))
    }
}

/// A type that can be converted from a textual input.
///
/// Built-in implementations cover the primitive leaves, `Option<T>`,
/// `Vec<T>`, fixed-size arrays, [`Duration`], [`chrono::DateTime`] and
/// [`Json<T>`]. The entry points [`parse`](crate::parse) and friends
/// collapse the [`Outcome`] to a plain value.
///
/// # Custom conversions
///
/// A user type opts in by implementing this trait directly, which replaces
/// all built-in logic for that type, including the empty-input handling,
/// which the implementation then owns. Arbitrary failures can be surfaced
/// through [`ParseError::Custom`]:
///
/// ```rust
/// use strparse::{anyhow, Config, Outcome, Parse, ParseError};
///
/// #[derive(Debug, PartialEq)]
/// struct Shouted(String);
///
/// impl Parse for Shouted {
///     fn parse_str(input: &str, _config: &Config) -> Result<Outcome<Self>, ParseError> {
///         if input.chars().any(|c| c.is_ascii_digit()) {
///             return Err(anyhow::anyhow!("digits cannot be shouted").into());
///         }
///         Ok(Outcome::Set(Shouted(input.to_uppercase())))
///     }
/// }
///
/// let loud: Shouted = strparse::parse("hey")?;
/// assert_eq!(loud, Shouted("HEY".into()));
/// # Ok::<(), ParseError>(())
/// ```
///
/// Implementations must be side-effect free and reentrant; the engine holds
/// no state and may be called from any number of threads at once.
pub trait Parse: Sized {
    /// Convert `input` into a value of this type.
    fn parse_str(input: &str, config: &Config) -> Result<Outcome<Self>, ParseError>;
}

macro_rules! impl_parse_for_int {
    ($($ty:ty),* $(,)?) => {$(
        impl Parse for $ty {
            fn parse_str(input: &str, _config: &Config) -> Result<Outcome<Self>, ParseError> {
                if input.is_empty() {
                    return Ok(Outcome::Unset(0));
                }
                input.parse().map(Outcome::Set).map_err(|source| ParseError::Int {
                    input: input.to_owned(),
                    source,
                })
            }
        }
    )*};
}

impl_parse_for_int!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

macro_rules! impl_parse_for_float {
    ($($ty:ty),* $(,)?) => {$(
        impl Parse for $ty {
            fn parse_str(input: &str, _config: &Config) -> Result<Outcome<Self>, ParseError> {
                if input.is_empty() {
                    return Ok(Outcome::Unset(0.0));
                }
                input.parse().map(Outcome::Set).map_err(|source| ParseError::Float {
                    input: input.to_owned(),
                    source,
                })
            }
        }
    )*};
}

impl_parse_for_float!(f32, f64);

/// Accepts `1`, `t`, `T`, `TRUE`, `true`, `True` and their false
/// counterparts, not just the `true`/`false` pair of `bool::from_str`.
impl Parse for bool {
    fn parse_str(input: &str, _config: &Config) -> Result<Outcome<Self>, ParseError> {
        if input.is_empty() {
            return Ok(Outcome::Unset(false));
        }
        match input {
            "1" | "t" | "T" | "TRUE" | "true" | "True" => Ok(Outcome::Set(true)),
            "0" | "f" | "F" | "FALSE" | "false" | "False" => Ok(Outcome::Set(false)),
            _ => Err(ParseError::Bool {
                input: input.to_owned(),
            }),
        }
    }
}

impl Parse for String {
    fn parse_str(input: &str, _config: &Config) -> Result<Outcome<Self>, ParseError> {
        if input.is_empty() {
            return Ok(Outcome::Unset(String::new()));
        }
        Ok(Outcome::Set(input.to_owned()))
    }
}

/// Durations use human-readable unit grammar (`1h`, `300ms`, `1m 30s`),
/// not plain integer grammar.
impl Parse for Duration {
    fn parse_str(input: &str, _config: &Config) -> Result<Outcome<Self>, ParseError> {
        if input.is_empty() {
            return Ok(Outcome::Unset(Duration::ZERO));
        }
        humantime::parse_duration(input)
            .map(Outcome::Set)
            .map_err(|source| ParseError::Duration {
                input: input.to_owned(),
                source,
            })
    }
}

/// Timestamps parse against [`Config::time_layout`]. A layout without a
/// time-of-day resolves to midnight, and one without a zone to UTC, so
/// date-only layouts such as `%Y-%m-%d` work. Unset is the Unix epoch.
impl Parse for DateTime<FixedOffset> {
    fn parse_str(input: &str, config: &Config) -> Result<Outcome<Self>, ParseError> {
        if input.is_empty() {
            return Ok(Outcome::Unset(DateTime::UNIX_EPOCH.fixed_offset()));
        }
        parse_timestamp(input, &config.time_layout).map(Outcome::Set)
    }
}

impl Parse for DateTime<Utc> {
    fn parse_str(input: &str, config: &Config) -> Result<Outcome<Self>, ParseError> {
        Ok(match <DateTime<FixedOffset>>::parse_str(input, config)? {
            Outcome::Set(at) => Outcome::Set(at.with_timezone(&Utc)),
            Outcome::Unset(_) => Outcome::Unset(DateTime::UNIX_EPOCH),
        })
    }
}

fn parse_timestamp(input: &str, layout: &str) -> Result<DateTime<FixedOffset>, ParseError> {
    let mut fields = Parsed::new();
    format::parse(&mut fields, input, StrftimeItems::new(layout))
        .map_err(|err| ParseError::timestamp(input, layout, err))?;
    let date = fields
        .to_naive_date()
        .map_err(|err| ParseError::timestamp(input, layout, err))?;
    let time = fields.to_naive_time().unwrap_or(NaiveTime::MIN);
    let offset = fields.to_fixed_offset().unwrap_or_else(|_| Utc.fix());
    date.and_time(time)
        .checked_sub_offset(offset)
        .map(|utc| DateTime::from_naive_utc_and_offset(utc, offset))
        .ok_or_else(|| ParseError::timestamp(input, layout, "timestamp out of range"))
}

/// An unset inner value is discarded, leaving `None`; this means an empty
/// input (or a sequence input whose parts are all empty) collapses the
/// whole `Option` to `None`.
impl<T: Parse> Parse for Option<T> {
    fn parse_str(input: &str, config: &Config) -> Result<Outcome<Self>, ParseError> {
        Ok(match T::parse_str(input, config)? {
            Outcome::Set(value) => Outcome::Set(Some(value)),
            Outcome::Unset(_) => Outcome::Unset(None),
        })
    }
}

/// Splits the input on [`Config::separator`] and converts each part in
/// order, aborting on the first element error. Empty parts leave their
/// element at its default state; the sequence reports `Set` only if at
/// least one element was set.
impl<T: Parse> Parse for Vec<T> {
    fn parse_str(input: &str, config: &Config) -> Result<Outcome<Self>, ParseError> {
        if input.is_empty() {
            return Ok(Outcome::Unset(Vec::new()));
        }
        let parts: Vec<&str> = input.split(config.separator.as_str()).collect();
        let mut values = Vec::with_capacity(parts.len());
        let mut any_set = false;
        for part in parts {
            let outcome = T::parse_str(part, config)?;
            any_set |= outcome.is_set();
            values.push(outcome.into_value());
        }
        if any_set {
            Ok(Outcome::Set(values))
        } else {
            Ok(Outcome::Unset(values))
        }
    }
}

/// Unlike `Vec<T>`, the part count must match `N` exactly, and the array
/// as a whole is always `Set`; empty parts only default individual slots.
impl<T: Parse, const N: usize> Parse for [T; N] {
    fn parse_str(input: &str, config: &Config) -> Result<Outcome<Self>, ParseError> {
        let parts: Vec<&str> = input.split(config.separator.as_str()).collect();
        if parts.len() != N {
            return Err(ParseError::Length {
                expected: N,
                actual: parts.len(),
            });
        }
        let mut values = Vec::with_capacity(N);
        for part in parts {
            values.push(T::parse_str(part, config)?.into_value());
        }
        match values.try_into() {
            Ok(array) => Ok(Outcome::Set(array)),
            // part count was checked against N above
            Err(_) => unreachable!(),
        }
    }
}

/// Adapter that decodes the whole input as a JSON document into `T`.
///
/// This is the structured-record path: the input is handed to
/// [`serde_json`] as-is, so the decoder owns empty-input handling (an
/// empty document is a decode error) and a successful decode always
/// counts as set.
///
/// ```rust
/// use serde::Deserialize;
/// use strparse::Json;
///
/// #[derive(Debug, Deserialize, PartialEq)]
/// struct Endpoint {
///     host: String,
///     port: u16,
/// }
///
/// let Json(endpoint): Json<Endpoint> =
///     strparse::parse(r#"{"host":"localhost","port":5432}"#)?;
/// assert_eq!(endpoint.port, 5432);
/// # Ok::<(), strparse::ParseError>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Json<T>(pub T);

impl<T> Json<T> {
    /// Unwrap the decoded record.
    pub fn into_inner(self) -> T {
        self.0
    }
}

impl<T: DeserializeOwned> Parse for Json<T> {
    fn parse_str(input: &str, _config: &Config) -> Result<Outcome<Self>, ParseError> {
        serde_json::from_str(input)
            .map(|value| Outcome::Set(Json(value)))
            .map_err(|source| ParseError::Record { source })
    }
}
