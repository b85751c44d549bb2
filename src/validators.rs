//! Form-field validators under one uniform boolean contract: every function is
//! total, and invalid or missing input folds to `false` instead of an error.

use serde::{Deserialize, Serialize};
use strum::EnumIter;

use crate::dates;
use crate::field_validation::{
    is_valid_card_number, BicSyntax, CccChecksum, CifChecksum, DniChecksum, EmailSyntax,
    IbanChecker, NieChecksum, PassportSyntax, Validator,
};
use crate::number_format::{self, ThousandsGrouping};
use crate::{Inclusivity, TimePrecision};

/// Validator selector for configuration-driven forms; every variant validates
/// the field value alone.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq, EnumIter)]
#[serde(tag = "type")]
pub enum FieldValidator {
    Email,
    Ccc,
    CreditCardNumber,
    Iban,
    Bic,
    Dni,
    Nie,
    Cif,
    Passport,
    Date,
    Number,
}

pub fn email(value: &str) -> bool {
    EmailSyntax.is_valid(value)
}

pub fn ccc(value: &str) -> bool {
    CccChecksum.is_valid(value)
}

pub fn credit_card_number(value: &str, brand: Option<&str>) -> bool {
    is_valid_card_number(value, brand)
}

pub fn iban(value: &str) -> bool {
    IbanChecker.is_valid(value)
}

pub fn bic(value: &str) -> bool {
    BicSyntax.is_valid(value)
}

pub fn dni(value: &str) -> bool {
    DniChecksum.is_valid(value)
}

pub fn nie(value: &str) -> bool {
    NieChecksum.is_valid(value)
}

pub fn cif(value: &str) -> bool {
    CifChecksum.is_valid(value)
}

pub fn passport(value: &str) -> bool {
    PassportSyntax.is_valid(value)
}

pub fn date(value: &str) -> bool {
    dates::is_valid_date(value)
}

pub fn date_with_format(value: &str, format: &str) -> bool {
    dates::is_valid_date_format(value, format)
}

pub fn is_after_date(value: &str, compare: &str, precision: Option<TimePrecision>) -> bool {
    dates::is_after_date(value, compare, precision)
}

pub fn is_before_date(value: &str, compare: &str, precision: Option<TimePrecision>) -> bool {
    dates::is_before_date(value, compare, precision)
}

pub fn is_same_date(value: &str, compare: &str, precision: Option<TimePrecision>) -> bool {
    dates::is_same_date(value, compare, precision)
}

pub fn is_same_or_after_date(
    value: &str,
    compare: &str,
    precision: Option<TimePrecision>,
) -> bool {
    dates::is_same_or_after_date(value, compare, precision)
}

pub fn is_same_or_before_date(
    value: &str,
    compare: &str,
    precision: Option<TimePrecision>,
) -> bool {
    dates::is_same_or_before_date(value, compare, precision)
}

pub fn is_between_dates(
    value: &str,
    start: &str,
    end: &str,
    precision: Option<TimePrecision>,
    inclusivity: Option<Inclusivity>,
) -> bool {
    dates::is_between_dates(value, start, end, precision, inclusivity.unwrap_or_default())
}

pub fn is_number(value: &str, decimal: bool, grouping: ThousandsGrouping) -> bool {
    number_format::is_number(value, decimal, grouping)
}

/// NaN on either side passes: an unparseable number is not this validator's
/// failure to report.
pub fn max(value: f64, max_value: f64) -> bool {
    value.is_nan() || max_value.is_nan() || value <= max_value
}

pub fn min(value: f64, min_value: f64) -> bool {
    value.is_nan() || min_value.is_nan() || value >= min_value
}

pub fn is_empty(value: Option<&str>) -> bool {
    match value {
        None => true,
        Some(value) => value.is_empty(),
    }
}
