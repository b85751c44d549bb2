use crate::field_validation::Validator;
use lazy_static::lazy_static;
use regex::Regex;

pub struct PassportSyntax;

lazy_static! {
    static ref PASSPORT_REGEX: Regex = Regex::new(r"^([A-Z0-9]{6,15})$").unwrap();
}

impl Validator for PassportSyntax {
    fn is_valid(&self, value: &str) -> bool {
        PASSPORT_REGEX.is_match(value)
    }
}
