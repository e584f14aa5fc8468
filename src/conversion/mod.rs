//! Field-value conversion module
//!
//! This module contains the conversion engine, configuration, and the
//! individual conversion routines.

pub mod charset;
pub mod config;
pub mod date;
pub mod engine;
pub mod numeric;
pub mod value;

pub use charset::NumericCharSet;
pub use config::ConversionConfig;

pub use date::{min_date, reformat_year_based_date, string_to_date};
pub use engine::Converter;
pub use numeric::{string_to_double, string_to_int, string_to_percent};
pub use value::{byte_array_to_string, db_value_to_string, DbValue};
