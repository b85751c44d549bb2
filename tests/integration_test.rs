use field_validations::validators;
use field_validations::{FieldValidator, Inclusivity, ThousandsGrouping, TimePrecision, Validator};

#[test]
fn validates_identity_documents() {
    assert!(validators::dni("12345678Z"));
    assert!(!validators::dni("12345678A"));

    assert!(validators::nie("Y2927212Q"));
    assert!(!validators::nie("Y2927212T"));

    assert!(validators::cif("A76983709"));
    assert!(validators::cif("S0794867B"));
    assert!(!validators::cif("S0794867C"));

    assert!(validators::passport("AB1234567"));
    assert!(!validators::passport("ab1234567"));
}

#[test]
fn validates_banking_fields() {
    assert!(validators::ccc("6921 9454 01 4589691820"));
    assert!(!validators::ccc("invalid_ccc"));

    assert!(validators::iban("ES9121000418450200051332"));
    assert!(!validators::iban("ES9121000418450200051333"));

    assert!(validators::bic("ABCDDEFF"));
    assert!(!validators::bic("B1OFESM1XXX"));

    assert!(validators::credit_card_number("4258509204308507", None));
    assert!(validators::credit_card_number(
        "5130296216007597",
        Some("Mastercard")
    ));
    assert!(!validators::credit_card_number(
        "4532184347179435",
        Some("Mastercard")
    ));
}

#[test]
fn validates_contact_fields() {
    assert!(validators::email("test@example.com"));
    assert!(!validators::email("invalid_email"));
}

#[test]
fn validates_dates() {
    assert!(validators::date("2022-01-01"));
    assert!(!validators::date("not a date"));
    assert!(validators::date_with_format("2022-01-01", "%Y-%m-%d"));
    assert!(!validators::date_with_format("2022-02-30", "%Y-%m-%d"));

    assert!(validators::is_after_date("2022-01-01", "2021-12-31", None));
    assert!(validators::is_before_date("2021-01-01", "2022-01-01", None));
    assert!(validators::is_same_date("2022-01-01", "2022-01-01", None));
    assert!(validators::is_same_or_after_date(
        "2022-01-01",
        "2021-12-31",
        None
    ));
    assert!(validators::is_same_or_before_date(
        "2022-01-01",
        "2022-01-01",
        None
    ));
    assert!(validators::is_same_date(
        "2022-01-01",
        "2022-01-20",
        Some(TimePrecision::Month)
    ));

    assert!(validators::is_between_dates(
        "2022-01-15",
        "2022-01-01",
        "2022-01-31",
        None,
        None
    ));
    // The default range is exclusive at both endpoints.
    assert!(!validators::is_between_dates(
        "2022-01-31",
        "2022-01-01",
        "2022-01-31",
        None,
        None
    ));
    assert!(validators::is_between_dates(
        "2022-01-31",
        "2022-01-01",
        "2022-01-31",
        None,
        Some(Inclusivity::IncludeEnd)
    ));
}

#[test]
fn validates_numbers() {
    assert!(validators::is_number(
        "1234",
        true,
        ThousandsGrouping::EitherAllowed
    ));
    assert!(validators::is_number(
        "1,234,567.89",
        true,
        ThousandsGrouping::Required
    ));
    assert!(!validators::is_number(
        "12,34",
        true,
        ThousandsGrouping::EitherAllowed
    ));

    assert!(validators::max(5.0, 10.0));
    assert!(validators::min(10.0, 5.0));
    assert!(validators::is_empty(None));
    assert!(validators::is_empty(Some("")));
    assert!(!validators::is_empty(Some("value")));
}

#[test]
fn selectors_drive_the_same_validators() {
    let config = r#"[{"type":"Email"},{"type":"Iban"},{"type":"Number"}]"#;
    let selectors: Vec<FieldValidator> = serde_json::from_str(config).unwrap();

    let values = ["test@example.com", "ES9121000418450200051332", "1,234.5"];
    for (selector, value) in selectors.iter().zip(values) {
        assert!(selector.is_valid(value));
        assert!(!selector.is_valid("mismatched input"));
    }
}
