//! Environment variable lookup with typed conversion
//!
//! A thin wrapper over [`std::env`] that feeds raw variable values into the
//! [`strparse`] engine. A variable that is absent, or present but empty,
//! falls back to the caller-supplied default string, and the resulting raw
//! string is converted into the requested type.
//!
//! # Example
//!
//! ```rust
//! use std::time::Duration;
//!
//! std::env::set_var("EXPIRES_IN", "1h");
//!
//! let expires_in: Duration = strparse_env::get("EXPIRES_IN");
//! assert_eq!(expires_in, Duration::from_secs(3600));
//!
//! let retries: u32 = strparse_env::get_or("RETRIES_UNSET", "3");
//! assert_eq!(retries, 3);
//! # std::env::remove_var("EXPIRES_IN");
//! ```
//!
//! The fallible variants return the conversion error instead of panicking:
//!
//! ```rust
//! std::env::set_var("MAX_JOBS", "lots");
//! let result: Result<u32, _> = strparse_env::try_get("MAX_JOBS");
//! assert!(result.is_err());
//! # std::env::remove_var("MAX_JOBS");
//! ```

use strparse::{Parse, ParseError};

/// Read `key` as a raw string, falling back to the empty string.
pub fn get_string(key: &str) -> String {
    lookup(key, None)
}

/// Read `key` as a raw string, falling back to `default` when the variable
/// is absent or empty.
pub fn get_string_or(key: &str, default: &str) -> String {
    lookup(key, Some(default))
}

/// Read `key` and convert it into a `T`.
///
/// An absent variable converts the empty string, which yields the type's
/// default state for every built-in conversion.
///
/// # Panics
///
/// Panics when the conversion fails.
pub fn get<T: Parse>(key: &str) -> T {
    strparse::must_parse(&lookup(key, None))
}

/// Read `key` and convert it into a `T`, falling back to `default` when the
/// variable is absent or empty.
///
/// # Panics
///
/// Panics when the conversion fails.
pub fn get_or<T: Parse>(key: &str, default: &str) -> T {
    strparse::must_parse(&lookup(key, Some(default)))
}

/// Read `key` and convert it into a `T`, returning the conversion error.
pub fn try_get<T: Parse>(key: &str) -> Result<T, ParseError> {
    strparse::parse(&lookup(key, None))
}

/// Read `key` and convert it into a `T`, falling back to `default` when the
/// variable is absent or empty, returning the conversion error.
pub fn try_get_or<T: Parse>(key: &str, default: &str) -> Result<T, ParseError> {
    strparse::parse(&lookup(key, Some(default)))
}

fn lookup(key: &str, default: Option<&str>) -> String {
    let value = std::env::var(key).unwrap_or_default();
    if value.is_empty() {
        if let Some(default) = default {
            return default.to_owned();
        }
    }
    value
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use std::env;
    use std::time::Duration;

    #[test]
    #[serial]
    fn test_get_string() {
        env::set_var("TEST_NAME", "value");
        assert_eq!(get_string("TEST_NAME"), "value");
        env::remove_var("TEST_NAME");

        assert_eq!(get_string("TEST_NAME"), "");
        assert_eq!(get_string_or("TEST_NAME", "fallback"), "fallback");
    }

    #[test]
    #[serial]
    fn test_default_applies_to_empty_value_too() {
        env::set_var("TEST_EMPTY", "");
        assert_eq!(get_string_or("TEST_EMPTY", "fallback"), "fallback");
        env::remove_var("TEST_EMPTY");
    }

    #[test]
    #[serial]
    fn test_get_typed() {
        env::set_var("TEST_PORT", "8080");
        let port: u16 = get("TEST_PORT");
        assert_eq!(port, 8080);
        env::remove_var("TEST_PORT");
    }

    #[test]
    #[serial]
    fn test_get_missing_yields_default_state() {
        env::remove_var("TEST_MISSING");
        let count: u32 = get("TEST_MISSING");
        assert_eq!(count, 0);
        let opt: Option<u32> = get("TEST_MISSING");
        assert_eq!(opt, None);
    }

    #[test]
    #[serial]
    fn test_get_or_uses_default_string() {
        env::remove_var("TEST_TIMEOUT");
        let timeout: Duration = get_or("TEST_TIMEOUT", "30s");
        assert_eq!(timeout, Duration::from_secs(30));

        env::set_var("TEST_TIMEOUT", "1m");
        let timeout: Duration = get_or("TEST_TIMEOUT", "30s");
        assert_eq!(timeout, Duration::from_secs(60));
        env::remove_var("TEST_TIMEOUT");
    }

    #[test]
    #[serial]
    fn test_try_get_surfaces_conversion_error() {
        env::set_var("TEST_BROKEN", "not-a-number");
        let result: Result<u32, _> = try_get("TEST_BROKEN");
        assert!(result.is_err());
        env::remove_var("TEST_BROKEN");
    }

    #[test]
    #[serial]
    fn test_try_get_or_converts_the_default() {
        env::remove_var("TEST_FLAGS");
        let flags: Vec<bool> = try_get_or("TEST_FLAGS", "t,f").unwrap();
        assert_eq!(flags, vec![true, false]);
    }

    #[test]
    #[serial]
    #[should_panic(expected = "conversion failed")]
    fn test_get_panics_on_conversion_error() {
        env::set_var("TEST_PANIC", "wat");
        let _: u8 = get("TEST_PANIC");
    }
}
