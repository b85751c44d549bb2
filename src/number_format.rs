use regex::Regex;
use serde::{Deserialize, Serialize};

/// Locale the validators resolve the decimal separator for when the caller
/// does not name one.
const DEFAULT_LOCALE: &str = "en-US";

/// Language subtags whose numeric convention uses a decimal comma.
const COMMA_DECIMAL_LANGUAGES: [&str; 30] = [
    "bg", "ca", "cs", "da", "de", "el", "es", "et", "fi", "fr", "hr", "hu", "id", "it", "lt", "lv",
    "nb", "nl", "no", "pl", "pt", "ro", "ru", "sk", "sl", "sr", "sv", "tr", "uk", "vi",
];

/// Whether the integer part of a numeric literal carries grouping separators.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ThousandsGrouping {
    /// Every three-digit group beyond the first is preceded by the grouping
    /// separator.
    Required,
    /// Digit groups run together with no separator.
    Forbidden,
    /// Both shapes are accepted.
    #[default]
    EitherAllowed,
}

impl From<Option<bool>> for ThousandsGrouping {
    fn from(flag: Option<bool>) -> Self {
        match flag {
            Some(true) => ThousandsGrouping::Required,
            Some(false) => ThousandsGrouping::Forbidden,
            None => ThousandsGrouping::EitherAllowed,
        }
    }
}

/// Source of the decimal separator character for a locale. The built-in
/// [`ConventionTable`] covers the common cases; environments with richer
/// locale data can plug in their own.
pub trait SeparatorResolver {
    fn decimal_separator(&self, locale_id: &str) -> char;
}

/// Resolver backed by a table of decimal-comma languages: formats the sample
/// value 1.1 under the locale's convention and reads the glyph following the
/// leading digit.
pub struct ConventionTable;

impl SeparatorResolver for ConventionTable {
    fn decimal_separator(&self, locale_id: &str) -> char {
        format_decimal_sample(locale_id).chars().nth(1).unwrap_or('.')
    }
}

fn format_decimal_sample(locale_id: &str) -> String {
    let language = locale_id
        .split(['-', '_'])
        .next()
        .unwrap_or_default()
        .to_ascii_lowercase();

    if COMMA_DECIMAL_LANGUAGES.contains(&language.as_str()) {
        "1,1".to_string()
    } else {
        "1.1".to_string()
    }
}

/// Decimal separator under the built-in convention table.
pub fn decimal_separator(locale_id: &str) -> char {
    ConventionTable.decimal_separator(locale_id)
}

/// Builds the regular expression recognizing one numeric-literal shape. The
/// decimal separator `.` pairs with the grouping separator `,` and any other
/// decimal separator pairs with `.`. Only the first integer group is bounded
/// to 1-3 digits, so leading zeros are accepted.
pub fn build_number_regex(
    decimal: bool,
    grouping: ThousandsGrouping,
    decimal_separator: char,
) -> Regex {
    let (decimal_sep, group_sep) = if decimal_separator == '.' {
        (r"\.", ",")
    } else {
        (",", r"\.")
    };

    let fractional_part = if decimal {
        format!("({decimal_sep}(\\d)+)?")
    } else {
        String::new()
    };

    let integer_part = match grouping {
        ThousandsGrouping::Required => format!("({group_sep}\\d{{3}})*"),
        ThousandsGrouping::Forbidden => r"(\d{3})*".to_string(),
        ThousandsGrouping::EitherAllowed => format!("(({group_sep}\\d{{3}})*|(\\d{{3}})*)"),
    };

    // The pattern space is finite and every member is valid.
    Regex::new(&format!("^-?\\d{{1,3}}{integer_part}{fractional_part}$")).unwrap()
}

/// Full-match test of `value` against the numeric shape for the default
/// locale. Empty input is rejected before any pattern work.
pub fn is_number(value: &str, decimal: bool, grouping: ThousandsGrouping) -> bool {
    is_number_in_locale(value, decimal, grouping, DEFAULT_LOCALE)
}

pub fn is_number_in_locale(
    value: &str,
    decimal: bool,
    grouping: ThousandsGrouping,
    locale_id: &str,
) -> bool {
    if value.is_empty() {
        return false;
    }
    build_number_regex(decimal, grouping, decimal_separator(locale_id)).is_match(value)
}
