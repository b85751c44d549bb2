use crate::field_validation::Validator;
use lazy_static::lazy_static;
use regex::Regex;

pub struct EmailSyntax;

lazy_static! {
    static ref EMAIL_REGEX: Regex = Regex::new(
        r#"^(([^<>()\[\]\\.,;:\s@"]+(\.[^<>()\[\]\\.,;:\s@"]+)*)|(".+"))@((\[[0-9]{1,3}\.[0-9]{1,3}\.[0-9]{1,3}\.[0-9]{1,3}\])|(([a-zA-Z0-9-]+\.)+[a-zA-Z]{2,}))$"#
    )
    .unwrap();
}

impl Validator for EmailSyntax {
    fn is_valid(&self, value: &str) -> bool {
        EMAIL_REGEX.is_match(value)
    }
}
