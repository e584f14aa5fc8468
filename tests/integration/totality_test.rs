//! Integration tests for the totality guarantee
//!
//! Every conversion must return a value of its target type for any input,
//! including null, empty, whitespace-only, and adversarial garbage, without
//! raising.
//! These tests drive the whole public surface through one converter plus
//! the crate-root convenience functions.

use assert_matches::assert_matches;
use fieldconv::error::ConfigError;
use fieldconv::{ConversionConfig, Converter, DbValue};

/// Inputs chosen to stress every parser: control characters, multi-byte
/// text, lone formatting characters, near-numbers, and oversized digits.
const ADVERSARIAL_INPUTS: &[&str] = &[
    "",
    " ",
    "\t\r\n",
    "null",
    "NaNabc",
    "--5",
    "++",
    "(",
    ")",
    "(.)",
    "$",
    "$$,,..",
    "%",
    "%%50",
    "12..34",
    "1-2",
    ".",
    "-.",
    "0x1F",
    "1e999",
    "999999999999999999999999999999",
    "１２３",
    "٣٤٥",
    "12\u{0}34",
    "🙂42",
    "42🙂",
    "28/02/2021 25:61:61",
];

#[test]
fn test_numeric_conversions_are_total() {
    let converter = Converter::with_defaults();

    for input in ADVERSARIAL_INPUTS {
        // Any returned value is acceptable; the guarantee under test is
        // that a value of the right type comes back at all.
        let _ = converter.string_to_int(input);
        let double = converter.string_to_double(input);
        let percent = converter.string_to_percent(input);
        assert!(!double.is_nan(), "NaN from {:?}", input);
        assert!(!percent.is_nan(), "NaN from {:?}", input);
    }
}

#[test]
fn test_date_conversions_are_total() {
    let converter = Converter::with_defaults();

    for input in ADVERSARIAL_INPUTS {
        let date = converter.string_to_date(input);
        assert!(date >= fieldconv::min_date());

        // The reformat either rearranges an 8-character string or leaves
        // the input untouched.
        let reformatted = converter.reformat_year_based_date(input);
        if input.chars().count() != 8 {
            assert_eq!(&reformatted, input);
        }
    }
}

#[test]
fn test_value_extractions_are_total() {
    let converter = Converter::with_defaults();

    for input in ADVERSARIAL_INPUTS {
        let value = DbValue::from(*input);
        let extracted = converter.db_value_to_string(Some(&value));
        assert_eq!(extracted, input.trim());

        let projected = converter.byte_array_to_string(Some(input.as_bytes()));
        assert_eq!(projected.chars().count(), input.len());
    }

    assert_eq!(converter.db_value_to_string(None), "");
    assert_eq!(converter.db_value_to_string(Some(&DbValue::Null)), "");
    assert_eq!(converter.byte_array_to_string(None), "");
}

#[test]
fn test_known_garbage_defaults() {
    assert_eq!(fieldconv::string_to_int("garbage"), 0);
    assert_eq!(fieldconv::string_to_double("garbage"), 0.0);
    assert_eq!(fieldconv::string_to_percent("garbage"), 0.0);
    assert_eq!(fieldconv::string_to_date("garbage"), fieldconv::min_date());
}

#[test]
fn test_converter_agrees_with_convenience_functions() {
    let converter = Converter::with_defaults();
    let samples = ["12,345", "$99.5xyz", "99.98%", "12/09/1962", "(123)"];

    for sample in samples {
        assert_eq!(converter.string_to_int(sample), fieldconv::string_to_int(sample));
        assert_eq!(
            converter.string_to_double(sample),
            fieldconv::string_to_double(sample)
        );
        assert_eq!(
            converter.string_to_percent(sample),
            fieldconv::string_to_percent(sample)
        );
        assert_eq!(
            converter.string_to_date(sample),
            fieldconv::string_to_date(sample)
        );
    }
}

#[test]
fn test_config_loading_is_the_only_fallible_path() {
    // A valid document loads and validates.
    let config = ConversionConfig::default();
    let json = serde_json::to_string(&config).unwrap();
    assert!(ConversionConfig::from_json_str(&json).is_ok());

    // A digit-less character set is rejected at load time, before any
    // conversion can run against it.
    let digitless = json.replace("0123456789+-().$", "+-().$");
    let error = ConversionConfig::from_json_str(&digitless).unwrap_err();
    assert_matches!(
        error,
        fieldconv::ConversionError::Config(ConfigError::MissingDigits)
    );
}
