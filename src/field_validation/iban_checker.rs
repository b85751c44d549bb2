use crate::field_validation::Validator;
use iban::Iban;

pub struct IbanChecker;

impl Validator for IbanChecker {
    fn is_valid(&self, value: &str) -> bool {
        // Grouping separators are tolerated on input; structure and check
        // digits are validated by the iban crate.
        let candidate: String = value.chars().filter(|c| c.is_alphanumeric()).collect();
        candidate.parse::<Iban>().is_ok()
    }
}
