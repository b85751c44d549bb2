use crate::field_validation::Validator;
use lazy_static::lazy_static;
use regex::Regex;

pub struct DniChecksum;

/// Check letters indexed by the numeric part modulo 23.
const DNI_CHECK_LETTERS: &[u8; 23] = b"TRWAGMYFPDXBNJZSQVHLCKE";

lazy_static! {
    static ref DNI_REGEX: Regex =
        Regex::new(r"^(([0-9]{8}[A-Z])|([KL][0-9]{7}[A-Z]))$").unwrap();
}

pub(crate) fn check_letter(number: u32) -> char {
    DNI_CHECK_LETTERS[(number % 23) as usize] as char
}

impl Validator for DniChecksum {
    fn is_valid(&self, value: &str) -> bool {
        /*
         * Spanish DNI format:
         * 8 digits followed by a check letter, or K/L followed by 7 digits and
         * a check letter. The letter is the numeric part modulo 23, used as an
         * index into DNI_CHECK_LETTERS.
         */
        let value = value.to_uppercase();
        if !DNI_REGEX.is_match(&value) {
            return false;
        }

        let (head, _) = value.split_at(value.len() - 1);
        let digits = head.trim_start_matches(|c| c == 'K' || c == 'L');

        // The format check guarantees 7 or 8 digits here, which fit in a u32.
        let number: u32 = digits.parse().unwrap();

        value.ends_with(check_letter(number))
    }
}
