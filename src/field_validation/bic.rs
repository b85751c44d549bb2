use crate::field_validation::Validator;
use lazy_static::lazy_static;
use regex::Regex;

pub struct BicSyntax;

lazy_static! {
    // Bank code (4 letters), country (2 letters), location (2 alphanumeric),
    // optional branch (3 alphanumeric).
    static ref BIC_REGEX: Regex =
        Regex::new(r"^([a-zA-Z]){4}([a-zA-Z]){2}([0-9a-zA-Z]){2}([0-9a-zA-Z]{3})?$").unwrap();
}

impl Validator for BicSyntax {
    fn is_valid(&self, value: &str) -> bool {
        BIC_REGEX.is_match(value)
    }
}

#[cfg(test)]
mod test {
    use crate::field_validation::*;

    #[test]
    fn test_valid_bics() {
        let valid_bics = vec!["BAOFESM1XXX", "ABCDDEFF", "abcddeff123"];
        for bic in valid_bics {
            println!("testing for input {}", bic);
            assert!(BicSyntax.is_valid(bic));
        }
    }

    #[test]
    fn test_invalid_bics() {
        let invalid_bics = vec![
            // Too long
            "BAOFESM1XXXX",
            // Digit inside the bank code
            "B1OFESM1XXX",
            // Branch of the wrong width
            "BOFESM1123",
            "",
        ];
        for bic in invalid_bics {
            println!("testing for input {}", bic);
            assert!(!BicSyntax.is_valid(bic));
        }
    }
}
