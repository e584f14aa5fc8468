//! Date conversion: free-form parsing and fixed-width reformatting

use chrono::NaiveDate;

use crate::conversion::config::ConversionConfig;

/// The minimum sentinel date returned whenever a date parse is not possible
///
/// Callers compare against this value to detect an unparseable input, so it
/// must stay a fixed, representable calendar date rather than an `Option`.
pub fn min_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(1, 1, 1).expect("0001-01-01 is a valid date")
}

/// Convert the given string to a date
///
/// Attempts each configured format in order and returns the first success.
/// Blank input and input matching no format both yield the minimum sentinel
/// date. Dates get no prefix recovery, unlike numbers.
pub fn string_to_date(input: &str, config: &ConversionConfig) -> NaiveDate {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return min_date();
    }

    for format in &config.date_formats {
        // Datetime formats parse fine here; unused time fields are dropped.
        if let Ok(date) = NaiveDate::parse_from_str(trimmed, format) {
            return date;
        }
    }

    min_date()
}

/// Reformat a date string from the `YYYYMMDD` format to `MM/DD/YYYY`
///
/// A purely textual rearrangement: only strings of exactly 8 characters are
/// touched, and the extracted pieces are not checked against the calendar.
/// Everything else is returned unchanged.
pub fn reformat_year_based_date(input: &str) -> String {
    let chars: Vec<char> = input.chars().collect();
    if chars.len() != 8 {
        return input.to_string();
    }

    let year: String = chars[0..4].iter().collect();
    let month: String = chars[4..6].iter().collect();
    let day: String = chars[6..8].iter().collect();

    format!("{}/{}/{}", month, day, year)
}
