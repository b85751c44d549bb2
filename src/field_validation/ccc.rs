use crate::field_validation::Validator;

pub struct CccChecksum;

/// Cyclic weights applied per position when computing a sub-field check digit.
const CCC_WEIGHTS: [u32; 10] = [1, 2, 4, 8, 5, 10, 9, 7, 3, 6];

const CCC_LENGTH: usize = 20;

/// Check digit over a ten-digit sub-field: weighted sum modulo 11 subtracted
/// from 11, with 10 and 11 folded back to a single digit.
pub(crate) fn check_digit(field: &str) -> char {
    let mut sum = 0;
    for (digit, weight) in field.chars().filter_map(|c| c.to_digit(10)).zip(CCC_WEIGHTS) {
        sum += digit * weight;
    }

    let mut check = 11 - (sum % 11);
    if check >= 10 {
        check = 11 - check;
    }

    char::from_digit(check, 10).unwrap()
}

impl Validator for CccChecksum {
    fn is_valid(&self, value: &str) -> bool {
        /*
         * Spanish CCC format, after separator removal:
         * EEEE OOOO CC AAAAAAAAAA
         * EEEE = entity, OOOO = office, CC = check digits, A... = account.
         * Entity+office (zero-padded to ten digits) and the account each get a
         * weighted check digit; CC must equal their concatenation.
         */
        let stripped: String = value
            .chars()
            .filter(|c| !c.is_whitespace() && *c != '-')
            .collect();

        if stripped.len() != CCC_LENGTH || !stripped.chars().all(|c| c.is_ascii_digit()) {
            return false;
        }

        let entity_and_office = format!("00{}", &stripped[..8]);
        let check_digits = &stripped[8..10];
        let account = &stripped[10..20];

        let expected = format!("{}{}", check_digit(&entity_and_office), check_digit(account));

        check_digits == expected
    }
}
