use crate::field_validation::{LuhnChecksum, Validator};
use lazy_static::lazy_static;
use regex::Regex;

pub struct CreditCardNumber;

struct CardBrand {
    name: &'static str,
    pattern: Regex,
    // UnionPay numbers are not Luhn checked.
    luhn: bool,
}

lazy_static! {
    static ref CARD_BRANDS: Vec<CardBrand> = vec![
        CardBrand {
            name: "Visa",
            pattern: Regex::new(r"^4[0-9]{12}([0-9]{3}){0,2}$").unwrap(),
            luhn: true,
        },
        CardBrand {
            name: "Mastercard",
            pattern: Regex::new(r"^(5[1-5][0-9]{2}|222[1-9]|22[3-9][0-9]|2[3-6][0-9]{2}|27[01][0-9]|2720)[0-9]{12}$")
                .unwrap(),
            luhn: true,
        },
        CardBrand {
            name: "American Express",
            pattern: Regex::new(r"^3[47][0-9]{13}$").unwrap(),
            luhn: true,
        },
        CardBrand {
            name: "Diners Club",
            pattern: Regex::new(r"^3(0[0-5]|[68][0-9])[0-9]{11}$").unwrap(),
            luhn: true,
        },
        CardBrand {
            name: "Discover",
            pattern: Regex::new(r"^6(011|5[0-9]{2})[0-9]{12}$").unwrap(),
            luhn: true,
        },
        CardBrand {
            name: "JCB",
            pattern: Regex::new(r"^(2131|1800)[0-9]{11}$|^35[0-9]{14}$").unwrap(),
            luhn: true,
        },
        CardBrand {
            name: "UnionPay",
            pattern: Regex::new(r"^62[0-9]{14,17}$").unwrap(),
            luhn: false,
        },
        CardBrand {
            name: "Maestro",
            pattern: Regex::new(r"^(5018|5020|5038|5612|5893|6304|6759|6761|6762|6763|0604|6390)[0-9]{8,15}$")
                .unwrap(),
            luhn: true,
        },
    ];
}

/// Brand-aware card number validation. With a brand name the number must match
/// that brand's shape; without one any known brand may accept it. Brand names
/// compare case-insensitively.
pub fn is_valid_card_number(value: &str, brand: Option<&str>) -> bool {
    let digits: String = value
        .chars()
        .filter(|c| !c.is_whitespace() && *c != '-')
        .collect();

    if digits.is_empty() || !digits.chars().all(|c| c.is_ascii_digit()) {
        return false;
    }

    match brand {
        Some(name) => CARD_BRANDS
            .iter()
            .filter(|brand| brand.name.eq_ignore_ascii_case(name))
            .any(|brand| matches_brand(brand, &digits)),
        None => CARD_BRANDS.iter().any(|brand| matches_brand(brand, &digits)),
    }
}

fn matches_brand(brand: &CardBrand, digits: &str) -> bool {
    brand.pattern.is_match(digits) && (!brand.luhn || LuhnChecksum.is_valid(digits))
}

impl Validator for CreditCardNumber {
    fn is_valid(&self, value: &str) -> bool {
        is_valid_card_number(value, None)
    }
}
