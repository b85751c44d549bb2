// This blocks accidental use of `println`. If one is actually needed, you can
// override with `#[allow(clippy::print_stdout)]`.
#![deny(clippy::print_stdout)]

mod dates;
mod field_validation;
mod number_format;
pub mod validators;

// This is the public API of the field validation library
pub use dates::{
    compare_dates, is_valid_date, is_valid_date_format, parse_date, DateParseError, Inclusivity,
    TimePrecision,
};
pub use field_validation::{
    is_valid_card_number, BicSyntax, CccChecksum, CifChecksum, CreditCardNumber, DniChecksum,
    EmailSyntax, IbanChecker, LuhnChecksum, NieChecksum, PassportSyntax, Validator,
};
pub use number_format::{
    build_number_regex, decimal_separator, is_number, is_number_in_locale, ConventionTable,
    SeparatorResolver, ThousandsGrouping,
};
pub use validators::FieldValidator;
