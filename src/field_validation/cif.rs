use crate::field_validation::Validator;
use lazy_static::lazy_static;
use regex::Regex;

pub struct CifChecksum;

/// Entity-type letters whose control symbol is always a letter.
const LETTER_CONTROL_PREFIXES: [char; 6] = ['N', 'P', 'Q', 'R', 'S', 'W'];

/// Control letters indexed by the computed control value.
const CONTROL_LETTERS: [char; 10] = ['J', 'A', 'B', 'C', 'D', 'E', 'F', 'G', 'H', 'I'];

/// Digit runs starting with this prefix also take a letter control symbol.
const SPECIAL_DIGIT_PREFIX: &str = "00";

lazy_static! {
    static ref CIF_REGEX: Regex =
        Regex::new(r"^(([ABCDEFGHJUV][0-9]{7}[0-9])|([NPQRSW][0-9]{7}[A-J])|([0-9]{8}[A-Z]))$")
            .unwrap();
}

/// Control symbol over the middle digit run. Digits at 1st, 3rd, 5th... place
/// count doubled with the result folded back to a single digit (tens + units);
/// digits at 2nd, 4th, 6th... place count as-is.
pub(crate) fn control_character(digits: &str, must_be_letter: bool) -> char {
    let sum = sum_odd_digits(digits) + sum_even_digits(digits);
    let units = sum % 10;
    let control = if units == 0 { 0 } else { 10 - units };

    if must_be_letter {
        CONTROL_LETTERS[control as usize]
    } else {
        char::from_digit(control, 10).unwrap()
    }
}

fn sum_odd_digits(digits: &str) -> u32 {
    digits
        .chars()
        .step_by(2)
        .filter_map(|c| c.to_digit(10))
        .map(|d| {
            let doubled = 2 * d;
            if doubled >= 10 {
                doubled / 10 + doubled % 10
            } else {
                doubled
            }
        })
        .sum()
}

fn sum_even_digits(digits: &str) -> u32 {
    digits
        .chars()
        .skip(1)
        .step_by(2)
        .filter_map(|c| c.to_digit(10))
        .sum()
}

impl Validator for CifChecksum {
    fn is_valid(&self, value: &str) -> bool {
        /*
         * Spanish CIF format:
         * An entity-type character, 7 digits and a control symbol. The control
         * symbol is a digit for A-H/J/U/V entities and a letter for N/P/Q/R/S/W
         * entities or when the digit run starts with "00". All-digit
         * identifiers carry no control rule and are accepted on shape alone.
         */
        if !CIF_REGEX.is_match(value) {
            return false;
        }

        let first = value.as_bytes()[0] as char;
        if first.is_ascii_digit() {
            return true;
        }

        let digits = &value[1..value.len() - 1];
        let must_be_letter =
            digits.starts_with(SPECIAL_DIGIT_PREFIX) || LETTER_CONTROL_PREFIXES.contains(&first);

        value.ends_with(control_character(digits, must_be_letter))
    }
}
