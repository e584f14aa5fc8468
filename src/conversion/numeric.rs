//! Lenient numeric parsing with longest-valid-prefix recovery
//!
//! Numeric field values arrive with formatting noise: grouping separators,
//! currency symbols, trailing units or footnote markers, accounting-style
//! parentheses around negatives. Each parse here runs in two phases:
//!
//! 1. Strip formatting characters and attempt a strict parse of the result.
//! 2. If the strict parse fails, recover the longest prefix made of
//!    characters from the configured valid set and strict-parse just that.
//!
//! Both phases absorbing failure means every function is total: malformed
//! input converts to zero, never to an error.

use crate::conversion::config::ConversionConfig;

/// Strip formatting characters ahead of the strict parse
///
/// The grouping separator and currency symbol are always removed. The
/// decimal point is removed only for whole-number parsing, so a fractional
/// part collapses into the digit stream (`"12.5"` becomes `"125"`), a
/// documented quirk of the whole-number path, not a defect.
fn strip_formatting(input: &str, config: &ConversionConfig, strip_decimal: bool) -> String {
    input
        .chars()
        .filter(|&ch| {
            ch != config.grouping_separator
                && ch != config.currency_symbol
                && !(strip_decimal && ch == '.')
        })
        .collect()
}

/// Recover the longest valid prefix of a stripped string
///
/// Scans from the start, keeping characters that belong to the configured
/// valid set and stopping at the first outsider. With `skip_currency` set,
/// an in-set currency symbol is passed over rather than appended, so it
/// neither terminates the scan nor corrupts the recovered number.
fn recover_prefix(stripped: &str, config: &ConversionConfig, skip_currency: bool) -> String {
    let mut prefix = String::new();

    for ch in stripped.chars() {
        if !config.numeric_chars.contains(ch) {
            break;
        }
        if skip_currency && ch == config.currency_symbol {
            continue;
        }
        prefix.push(ch);
    }

    prefix
}

/// Convert the given string to a whole number
///
/// Returns the parsed value, or zero for blank input or input with no
/// recoverable numeric prefix. Parenthesised negatives survive prefix
/// recovery as characters but are not recognised by the strict parse, so
/// `"(123)"` converts to zero.
pub fn string_to_int(input: &str, config: &ConversionConfig) -> i64 {
    if input.trim().is_empty() {
        return 0;
    }

    let stripped = strip_formatting(input, config, true);

    if let Ok(value) = stripped.trim().parse::<i64>() {
        return value;
    }

    let prefix = recover_prefix(&stripped, config, false);
    if prefix.is_empty() {
        return 0;
    }

    prefix.parse::<i64>().unwrap_or(0)
}

/// Convert the given string to a floating-point number
///
/// Same two-phase structure as [`string_to_int`], with the decimal point
/// preserved during stripping and the currency symbol skipped during
/// recovery, so `"$99.5abc"` recovers `99.5`.
pub fn string_to_double(input: &str, config: &ConversionConfig) -> f64 {
    if input.trim().is_empty() {
        return 0.0;
    }

    let stripped = strip_formatting(input, config, false);

    if let Ok(value) = stripped.trim().parse::<f64>() {
        return value;
    }

    let prefix = recover_prefix(&stripped, config, true);
    if prefix.is_empty() {
        return 0.0;
    }

    prefix.parse::<f64>().unwrap_or(0.0)
}

/// Convert the given string to a decimal percentage
///
/// Accepts values in the `NN.NN%` or `NN.NN` form. The `%` characters are
/// removed before delegating to [`string_to_double`]; an unstripped `%` is
/// outside the valid set and would truncate prefix recovery ahead of the
/// decimal portion. The parsed value is divided by 100.
pub fn string_to_percent(input: &str, config: &ConversionConfig) -> f64 {
    if input.trim().is_empty() {
        return 0.0;
    }

    let without_percent = input.replace('%', "");
    string_to_double(&without_percent, config) / 100.0
}
