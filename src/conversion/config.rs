//! Configuration options for field-value conversion

use serde::{Deserialize, Serialize};

use crate::conversion::charset::NumericCharSet;
use crate::error::{ConfigError, ConversionError};

/// Date formats attempted, in order, by the free-form date parse.
///
/// Month-first formats come first to match the originating systems; the
/// remainder cover the interchange formats those systems emit.
const DEFAULT_DATE_FORMATS: &[&str] = &[
    "%m/%d/%Y",
    "%m-%d-%Y",
    "%Y-%m-%d",
    "%Y/%m/%d",
    "%m/%d/%y",
    "%B %d, %Y",
    "%d %B %Y",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%d %H:%M:%S",
    "%m/%d/%Y %H:%M:%S",
];

/// Conversion configuration options
///
/// Loaded once at startup (or taken from `Default`) and treated as immutable
/// afterwards. Every conversion is a pure function of its input plus this
/// configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConversionConfig {
    /// Grouping separator stripped before numeric parsing
    pub grouping_separator: char,
    /// Currency symbol stripped before numeric parsing and skipped during
    /// prefix recovery
    pub currency_symbol: char,
    /// Characters accepted during numeric prefix recovery
    pub numeric_chars: NumericCharSet,
    /// Date formats attempted, in order, by the free-form date parse
    pub date_formats: Vec<String>,
}

impl Default for ConversionConfig {
    fn default() -> Self {
        Self {
            grouping_separator: ',',
            currency_symbol: '$',
            numeric_chars: NumericCharSet::default(),
            date_formats: DEFAULT_DATE_FORMATS.iter().map(|f| f.to_string()).collect(),
        }
    }
}

impl ConversionConfig {
    /// Create a new configuration with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Load a configuration from a JSON document
    ///
    /// Intended for startup-time loading of a locale-tuned character table.
    /// The loaded configuration is validated before it is returned.
    pub fn from_json_str(json: &str) -> Result<Self, ConversionError> {
        let config: Self =
            serde_json::from_str(json).map_err(|e| ConversionError::Other(anyhow::Error::new(e)))?;
        config.validate()?;
        Ok(config)
    }

    /// Set the grouping separator
    pub fn with_grouping_separator(mut self, separator: char) -> Self {
        self.grouping_separator = separator;
        self
    }

    /// Set the currency symbol
    pub fn with_currency_symbol(mut self, symbol: char) -> Self {
        self.currency_symbol = symbol;
        self
    }

    /// Set the numeric character set used during prefix recovery
    pub fn with_numeric_chars(mut self, chars: NumericCharSet) -> Self {
        self.numeric_chars = chars;
        self
    }

    /// Set the list of accepted date formats
    pub fn with_date_formats(mut self, formats: Vec<String>) -> Self {
        self.date_formats = formats;
        self
    }

    /// Validate configuration consistency
    pub fn validate(&self) -> Result<(), ConfigError> {
        // A charset without the digits rejects every numeric prefix
        if !self.numeric_chars.covers_digits() {
            return Err(ConfigError::MissingDigits);
        }

        if self.date_formats.is_empty() {
            return Err(ConfigError::NoDateFormats);
        }

        Ok(())
    }
}
