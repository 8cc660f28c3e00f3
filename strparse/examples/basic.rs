//! Example demonstrating leaf, container and custom conversions

use chrono::{DateTime, FixedOffset, Utc};
use strparse::{Config, Outcome, Parse, ParseError};

#[derive(Debug, PartialEq)]
struct Excited(String);

impl Parse for Excited {
    fn parse_str(input: &str, _config: &Config) -> Result<Outcome<Self>, ParseError> {
        Ok(Outcome::Set(Excited(format!("{input}!"))))
    }
}

fn main() -> anyhow::Result<()> {
    // Leaf conversion
    let n: i64 = strparse::parse("123")?;
    println!("i64: {n}");

    // Sequence with tolerated empty parts
    let flags: Vec<bool> = strparse::parse("t,t,t,f,,")?;
    println!("Vec<bool>: {flags:?}");

    // Custom conversion replacing the built-in string logic
    let greeting: Excited = strparse::parse("hello")?;
    println!("Excited: {greeting:?}");

    // Timestamp with a layout override
    let config = Config::new().time_layout("%Y-%m-%d");
    let day: DateTime<Utc> = strparse::parse_with(&config, "2021-01-01")?;
    println!("DateTime<Utc>: {day}");

    // Timestamp with the default ISO 8601 layout
    let at: DateTime<FixedOffset> = strparse::parse("1234-01-23T12:34:56Z")?;
    println!("DateTime<FixedOffset>: {at}");

    Ok(())
}
