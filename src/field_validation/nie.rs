use crate::field_validation::{DniChecksum, Validator};
use lazy_static::lazy_static;
use regex::Regex;

pub struct NieChecksum;

lazy_static! {
    static ref NIE_REGEX: Regex = Regex::new(r"^[XYZ][0-9]{7,8}[A-Z]$").unwrap();
}

impl Validator for NieChecksum {
    fn is_valid(&self, value: &str) -> bool {
        /*
         * Spanish NIE format:
         * X, Y or Z followed by 7 digits and a check letter. The prefix letter
         * stands in for the first digit of a DNI (X=0, Y=1, Z=2); after the
         * remapping the DNI rule applies unchanged.
         */
        let value = value.to_uppercase();
        if !NIE_REGEX.is_match(&value) {
            return false;
        }

        let mapped_prefix = match value.as_bytes()[0] {
            b'X' => '0',
            b'Y' => '1',
            b'Z' => '2',
            _ => return false,
        };

        let mut candidate = String::with_capacity(value.len());
        candidate.push(mapped_prefix);
        candidate.push_str(&value[1..]);

        // An 8-digit NIE remaps to a 10-character candidate, which the DNI
        // format rejects.
        DniChecksum.is_valid(&candidate)
    }
}
