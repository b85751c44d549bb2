mod bic;
mod ccc;
mod cif;
mod credit_card;
mod dni;
mod email;
mod iban_checker;
mod luhn_checksum;
mod nie;
mod passport;

pub use crate::field_validation::bic::BicSyntax;
pub use crate::field_validation::ccc::CccChecksum;
pub use crate::field_validation::cif::CifChecksum;
pub use crate::field_validation::credit_card::{is_valid_card_number, CreditCardNumber};
pub use crate::field_validation::dni::DniChecksum;
pub use crate::field_validation::email::EmailSyntax;
pub use crate::field_validation::iban_checker::IbanChecker;
pub use crate::field_validation::luhn_checksum::LuhnChecksum;
pub use crate::field_validation::nie::NieChecksum;
pub use crate::field_validation::passport::PassportSyntax;

use crate::dates;
use crate::number_format::{self, ThousandsGrouping};
use crate::validators::FieldValidator;

pub trait Validator: Send + Sync {
    fn is_valid(&self, value: &str) -> bool;
}

impl Validator for FieldValidator {
    fn is_valid(&self, value: &str) -> bool {
        match self {
            FieldValidator::Email => EmailSyntax.is_valid(value),
            FieldValidator::Ccc => CccChecksum.is_valid(value),
            FieldValidator::CreditCardNumber => CreditCardNumber.is_valid(value),
            FieldValidator::Iban => IbanChecker.is_valid(value),
            FieldValidator::Bic => BicSyntax.is_valid(value),
            FieldValidator::Dni => DniChecksum.is_valid(value),
            FieldValidator::Nie => NieChecksum.is_valid(value),
            FieldValidator::Cif => CifChecksum.is_valid(value),
            FieldValidator::Passport => PassportSyntax.is_valid(value),
            FieldValidator::Date => dates::is_valid_date(value),
            FieldValidator::Number => {
                number_format::is_number(value, true, ThousandsGrouping::EitherAllowed)
            }
        }
    }
}
