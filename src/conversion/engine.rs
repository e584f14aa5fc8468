//! Conversion engine binding every operation to one configuration

use chrono::NaiveDate;

use crate::conversion::config::ConversionConfig;
use crate::conversion::value::DbValue;
use crate::conversion::{date, numeric, value};

/// Main conversion engine
///
/// Holds one immutable [`ConversionConfig`] and exposes every conversion as
/// a method. The engine has no other state, so a single instance can be
/// shared freely across threads.
#[derive(Debug, Clone)]
pub struct Converter {
    config: ConversionConfig,
}

impl Converter {
    /// Create a new converter with the given configuration
    pub fn new(config: ConversionConfig) -> Self {
        Self { config }
    }

    /// Create a converter with the default configuration
    pub fn with_defaults() -> Self {
        Self::new(ConversionConfig::default())
    }

    /// The configuration this converter was built with
    pub fn config(&self) -> &ConversionConfig {
        &self.config
    }

    /// Convert a database value to a trimmed string, empty on NULL/absence
    pub fn db_value_to_string(&self, source: Option<&DbValue>) -> String {
        value::db_value_to_string(source)
    }

    /// Project a byte buffer to a string at ordinal value, empty on absence
    pub fn byte_array_to_string(&self, bytes: Option<&[u8]>) -> String {
        value::byte_array_to_string(bytes)
    }

    /// Reformat a `YYYYMMDD` string as `MM/DD/YYYY`, other lengths unchanged
    pub fn reformat_year_based_date(&self, source: &str) -> String {
        date::reformat_year_based_date(source)
    }

    /// Convert a string to a date, the minimum sentinel on failure
    pub fn string_to_date(&self, source: &str) -> NaiveDate {
        date::string_to_date(source, &self.config)
    }

    /// Convert a string to a whole number, zero on failure
    pub fn string_to_int(&self, source: &str) -> i64 {
        numeric::string_to_int(source, &self.config)
    }

    /// Convert a string to a floating-point number, zero on failure
    pub fn string_to_double(&self, source: &str) -> f64 {
        numeric::string_to_double(source, &self.config)
    }

    /// Convert a string to a decimal percentage, zero on failure
    pub fn string_to_percent(&self, source: &str) -> f64 {
        numeric::string_to_percent(source, &self.config)
    }
}

impl Default for Converter {
    fn default() -> Self {
        Self::with_defaults()
    }
}
