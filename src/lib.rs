//! Defensive field-value conversion
//!
//! A Rust library for converting loosely-formatted external input (database
//! values, formatted numeric strings, compact date strings, raw byte
//! buffers) into strict typed values without failing on malformed input.
//! Every conversion is total: null, blank, and adversarial input all
//! collapse to a documented default instead of an error.

pub mod conversion;
pub mod error;

// Re-export commonly used types
pub use conversion::{
    byte_array_to_string, db_value_to_string, min_date, reformat_year_based_date, ConversionConfig,
    Converter, DbValue, NumericCharSet,
};
pub use error::{ConfigError, ConversionError};

use chrono::NaiveDate;

/// Convert a string to a date with the default configuration
pub fn string_to_date(source: &str) -> NaiveDate {
    conversion::date::string_to_date(source, &ConversionConfig::default())
}

/// Convert a string to a whole number with the default configuration
pub fn string_to_int(source: &str) -> i64 {
    conversion::numeric::string_to_int(source, &ConversionConfig::default())
}

/// Convert a string to a floating-point number with the default configuration
pub fn string_to_double(source: &str) -> f64 {
    conversion::numeric::string_to_double(source, &ConversionConfig::default())
}

/// Convert a string to a decimal percentage with the default configuration
pub fn string_to_percent(source: &str) -> f64 {
    conversion::numeric::string_to_percent(source, &ConversionConfig::default())
}
