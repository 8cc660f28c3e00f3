//! Conversion options

/// Default strftime layout for timestamp conversion (ISO 8601 / RFC 3339).
pub const DEFAULT_TIME_LAYOUT: &str = "%+";

/// Default separator for sequence and fixed-array conversion.
pub const DEFAULT_SEPARATOR: &str = ",";

/// Options threaded through every recursive conversion.
///
/// A `Config` is built once and never mutated afterwards: start from the
/// package defaults with [`Config::new`] (or `Default`), override what you
/// need with the chained builder methods, and pass it by reference to
/// [`parse_with`](crate::parse_with), including across threads; the bundle
/// is plain immutable data.
///
/// Override values are not validated. In particular an empty separator is
/// accepted and will split sequence inputs degenerately.
///
/// # Example
///
/// ```rust
/// use strparse::Config;
///
/// let config = Config::new().separator(";");
/// let ports: Vec<u16> = strparse::parse_with(&config, "80;443;8080")?;
/// assert_eq!(ports, vec![80, 443, 8080]);
/// # Ok::<(), strparse::ParseError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// strftime pattern used by the timestamp leaf
    pub time_layout: String,
    /// Separator splitting sequence and fixed-array inputs
    pub separator: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            time_layout: DEFAULT_TIME_LAYOUT.to_owned(),
            separator: DEFAULT_SEPARATOR.to_owned(),
        }
    }
}

impl Config {
    /// Create a config holding the package defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Override the strftime layout used for timestamps.
    pub fn time_layout(mut self, layout: impl Into<String>) -> Self {
        self.time_layout = layout.into();
        self
    }

    /// Override the separator used to split sequence inputs.
    pub fn separator(mut self, separator: impl Into<String>) -> Self {
        self.separator = separator.into();
        self
    }
}
