use crate::field_validation::Validator;

pub struct LuhnChecksum;

impl Validator for LuhnChecksum {
    fn is_valid(&self, value: &str) -> bool {
        // Non-digit characters (spaces, dashes) are skipped rather than
        // rejected; the trailing digit is the checksum.
        let mut digits = value.chars().rev().filter_map(|c| c.to_digit(10));

        let checksum = match digits.next() {
            Some(digit) => digit,
            None => return false,
        };

        let sum: u32 = digits
            .enumerate()
            .map(|(i, digit)| {
                if i % 2 != 0 {
                    digit
                } else if digit > 4 {
                    digit * 2 - 9
                } else {
                    digit * 2
                }
            })
            .sum();

        (10 - (sum % 10)) % 10 == checksum
    }
}
