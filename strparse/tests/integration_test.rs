//! Integration tests

use std::time::Duration;

use chrono::{DateTime, TimeZone, Utc};
use serde::Deserialize;
use strparse::{Config, Json, Outcome, Parse, ParseError};

#[derive(Debug, PartialEq)]
struct Tag(String);

impl Parse for Tag {
    fn parse_str(input: &str, _config: &Config) -> Result<Outcome<Self>, ParseError> {
        Ok(Outcome::Set(Tag(format!("{input}!"))))
    }
}

#[derive(Debug, Deserialize, PartialEq)]
struct Database {
    host: String,
    port: u16,
}

#[test]
fn test_leaf_conversions_end_to_end() {
    assert_eq!(strparse::parse::<i64>("123").unwrap(), 123);
    assert_eq!(strparse::parse::<u16>("8080").unwrap(), 8080);
    assert_eq!(strparse::parse::<f64>("0.5").unwrap(), 0.5);
    assert!(strparse::parse::<bool>("t").unwrap());
    assert_eq!(strparse::parse::<String>("plain").unwrap(), "plain");
    assert_eq!(
        strparse::parse::<Duration>("90s").unwrap(),
        Duration::from_secs(90)
    );
}

#[test]
fn test_empty_input_defaults_every_leaf() {
    assert_eq!(strparse::parse::<i64>("").unwrap(), 0);
    assert_eq!(strparse::parse::<u64>("").unwrap(), 0);
    assert_eq!(strparse::parse::<f64>("").unwrap(), 0.0);
    assert!(!strparse::parse::<bool>("").unwrap());
    assert_eq!(strparse::parse::<String>("").unwrap(), "");
    assert_eq!(strparse::parse::<Duration>("").unwrap(), Duration::ZERO);
    assert_eq!(
        strparse::parse::<DateTime<Utc>>("").unwrap(),
        DateTime::UNIX_EPOCH
    );
}

#[test]
fn test_custom_conversion_overrides_builtin_shape() {
    // Tag is string-shaped, but its own implementation wins.
    assert_eq!(
        strparse::parse::<Tag>("hello").unwrap(),
        Tag("hello!".to_owned())
    );
    assert_eq!(
        strparse::parse::<Vec<Tag>>("a,b").unwrap(),
        vec![Tag("a!".to_owned()), Tag("b!".to_owned())]
    );
}

#[test]
fn test_configured_separator_applies_recursively() {
    let config = Config::new().separator("|");
    let grid: Vec<u8> = strparse::parse_with(&config, "1|2|3").unwrap();
    assert_eq!(grid, vec![1, 2, 3]);

    // The default separator no longer splits.
    let whole: Vec<String> = strparse::parse_with(&config, "a,b").unwrap();
    assert_eq!(whole, vec!["a,b"]);
}

#[test]
fn test_configured_time_layout() {
    let config = Config::new().time_layout("%d/%m/%Y %H:%M");
    let at: DateTime<Utc> = strparse::parse_with(&config, "23/01/2021 12:34").unwrap();
    assert_eq!(at, Utc.with_ymd_and_hms(2021, 1, 23, 12, 34, 0).unwrap());

    let result: Result<DateTime<Utc>, _> = strparse::parse_with(&config, "2021-01-23");
    assert!(matches!(result, Err(ParseError::Timestamp { .. })));
}

#[test]
fn test_record_inside_option() {
    let parsed: Option<Json<Database>> =
        strparse::parse(r#"{"host":"db.internal","port":5432}"#).unwrap();
    assert_eq!(
        parsed.map(Json::into_inner),
        Some(Database {
            host: "db.internal".to_owned(),
            port: 5432
        })
    );

    // The record decoder owns empty-input handling: an empty document is
    // an error even through an Option, never a silent None.
    let result: Result<Option<Json<Database>>, _> = strparse::parse("");
    assert!(matches!(result, Err(ParseError::Record { .. })));
}

#[test]
fn test_deep_nesting() {
    // A nested sequence shares the single separator, so inner arrays can
    // only hold one part each.
    let cells: Vec<[u8; 1]> = strparse::parse("1,2").unwrap();
    assert_eq!(cells, vec![[1], [2]]);

    let timeouts: Option<Vec<Duration>> = strparse::parse("250ms,1s").unwrap();
    assert_eq!(
        timeouts,
        Some(vec![Duration::from_millis(250), Duration::from_secs(1)])
    );
}

#[test]
fn test_error_messages_carry_the_offending_input() {
    let err = strparse::parse::<u32>("12x").unwrap_err();
    assert!(err.to_string().contains("12x"));

    let err = strparse::parse::<[i32; 4]>("1,2").unwrap_err();
    assert!(err.to_string().contains("expected 4 parts, got 2"));
}
