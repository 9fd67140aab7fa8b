//! End-to-end behaviour of rule chains.

use chrono::{TimeZone, Utc};
use fieldcheck_core::{Catalog, ErrorBag, FailureKind, Language, Rule, Session, ValidationError, Value};
use fieldcheck_rules::Validator;
use pretty_assertions::assert_eq;
use std::collections::BTreeMap;

fn session() -> Session {
    Session::new()
        .with("name", "mehrab")
        .with("password", "S3cret!")
        .with("password_confirmation", "S3cret!")
        .with("code", "1")
        .with("role", "admin")
}

fn rules(bag: &ErrorBag, attribute: &str) -> Vec<Rule> {
    bag.get(attribute)
        .unwrap_or_default()
        .iter()
        .map(|e| e.rule)
        .collect()
}

#[test]
fn test_required_semantics() {
    let catalog = Catalog::builtin();
    let session = Session::new();
    let validator = Validator::new(&catalog, &session);

    for value in [Value::Int(0), Value::Bool(false), Value::from(" ")] {
        let bag = validator.attribute("x").is(value).required().errors().unwrap();
        assert!(bag.passed());
    }
    for value in [Value::Null, Value::from(""), Value::List(vec![])] {
        let bag = validator.attribute("x").is(value).required().errors().unwrap();
        assert_eq!(bag.messages("x"), vec!["The x field is required."]);
    }
}

#[test]
fn test_every_violation_is_reported_in_order() {
    let catalog = Catalog::builtin();
    let session = Session::new();
    let validator = Validator::new(&catalog, &session);

    let bag = validator
        .attribute("age")
        .is("")
        .required()
        .numeric()
        .errors()
        .unwrap();

    assert_eq!(
        bag.messages("age"),
        vec![
            "The age field is required.",
            "The age field must be a number.",
        ]
    );
}

#[test]
fn test_empty_chain_lists_attribute() {
    let catalog = Catalog::builtin();
    let session = Session::new();
    let validator = Validator::new(&catalog, &session);

    let bag = validator.attribute("nickname").is("anything").errors().unwrap();
    let messages: BTreeMap<String, Vec<String>> = bag.into();
    assert_eq!(messages.get("nickname"), Some(&Vec::new()));
}

#[test]
fn test_required_if_follows_session() {
    let catalog = Catalog::builtin();
    let session = session();
    let validator = Validator::new(&catalog, &session);

    let bag = validator
        .attribute("pan")
        .is("")
        .required_if("name", "mehrab")
        .errors()
        .unwrap();
    assert_eq!(
        bag.messages("pan"),
        vec!["The pan field is required when name is mehrab."]
    );

    let bag = validator
        .attribute("pan")
        .is("")
        .required_if("name", "other")
        .errors()
        .unwrap();
    assert!(bag.passed());
}

#[test]
fn test_cross_field_loose_equality() {
    let catalog = Catalog::builtin();
    let session = session();
    let validator = Validator::new(&catalog, &session);

    let bag = validator
        .attribute("code_again")
        .is(1)
        .same("code")
        .different("code")
        .errors()
        .unwrap();
    assert_eq!(rules(&bag, "code_again"), vec![Rule::Different]);
    assert_eq!(
        bag.first("code_again"),
        Some("The code_again field and code must be different.")
    );
}

#[test]
fn test_confirmed_uses_display_names() {
    let catalog = Catalog::builtin();
    let session = session();
    let validator = Validator::new(&catalog, &session);

    let bag = validator.field("password").confirmed("").errors().unwrap();
    assert!(bag.passed());

    let bag = validator
        .attribute("password")
        .is("other")
        .confirmed("")
        .same("password_confirmation")
        .errors()
        .unwrap();
    assert_eq!(
        bag.messages("password"),
        vec![
            "The password field confirmation does not match.",
            "The password field must match password confirmation.",
        ]
    );
}

#[test]
fn test_missing_reference_is_distinct() {
    let catalog = Catalog::builtin();
    let session = session();
    let validator = Validator::new(&catalog, &session);

    let bag = validator
        .attribute("pan")
        .is("4111")
        .required_if("ghost", "x")
        .errors()
        .unwrap();
    let errors = bag.get("pan").unwrap();
    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].rule, Rule::RequiredIf);
    assert_eq!(errors[0].kind, FailureKind::MissingReference);
    assert_eq!(
        errors[0].message,
        "The pan field depends on ghost, which was not provided."
    );
}

#[test]
fn test_required_unless() {
    let catalog = Catalog::builtin();
    let session = session();
    let validator = Validator::new(&catalog, &session);

    let bag = validator
        .attribute("reason")
        .required_unless("role", ["guest", "bot"])
        .errors()
        .unwrap();
    assert_eq!(
        bag.first("reason"),
        Some("The reason field is required unless role is in guest, bot.")
    );
}

#[test]
fn test_type_mismatch_is_recorded() {
    let catalog = Catalog::builtin();
    let session = Session::new();
    let validator = Validator::new(&catalog, &session);

    let bag = validator
        .attribute("age")
        .is("abc")
        .max_numeric(120)
        .errors()
        .unwrap();
    let errors = bag.get("age").unwrap();
    assert_eq!(errors[0].kind, FailureKind::TypeMismatch);
    assert_eq!(
        errors[0].message,
        "The age field must be a numeric value for the max_numeric rule."
    );
}

#[test]
fn test_messages_in_persian() {
    let catalog = Catalog::builtin();
    let session = Session::new();
    let validator = Validator::new(&catalog, &session).with_language(Language::Fa);

    let bag = validator
        .attribute("age")
        .is("")
        .required()
        .numeric()
        .errors()
        .unwrap();
    assert_eq!(
        bag.messages("age"),
        vec!["فیلد age الزامی است.", "فیلد age باید عدد باشد."]
    );

    let english = validator
        .attribute("age")
        .lang(Language::En)
        .required()
        .errors()
        .unwrap();
    assert_eq!(english.first("age"), Some("The age field is required."));
}

#[test]
fn test_overlay_attribute_name() {
    let mut catalog = Catalog::builtin();
    catalog.insert(
        Language::En,
        fieldcheck_core::Section::Messages,
        "attributes.pan",
        "card number",
    );
    let session = Session::new();
    let validator = Validator::new(&catalog, &session);

    let bag = validator.attribute("pan").required().errors().unwrap();
    assert_eq!(bag.first("pan"), Some("The card number field is required."));
}

#[test]
fn test_configuration_errors() {
    let catalog = Catalog::builtin();
    let session = Session::new();
    let validator = Validator::new(&catalog, &session);

    let cases = vec![
        validator.attribute("a").regex("(unclosed").errors(),
        validator.attribute("a").digits_between(5, 2).errors(),
        validator.attribute("a").dimensions(0, 10, 10, 10).errors(),
        validator.attribute("a").mimes(Vec::<String>::new()).errors(),
        validator.attribute("a").in_list(Vec::<Value>::new()).errors(),
        validator.attribute("a").not_in(Vec::<Value>::new()).errors(),
        validator.attribute("a").date_format("%Q").errors(),
        validator.attribute("a").same("").errors(),
        validator.attribute("").required().errors(),
    ];
    for result in cases {
        assert!(result.is_err(), "{:?}", result);
    }

    let result = validator.attribute("a").is("x").regex("(").errors();
    assert!(matches!(
        result.unwrap_err(),
        ValidationError::InvalidRegex { ref rule, .. } if rule == "regex"
    ));
}

#[test]
fn test_date_format_rejects_impossible_dates() {
    let catalog = Catalog::builtin();
    let session = Session::new();
    let validator = Validator::new(&catalog, &session);

    let bag = validator
        .attribute("d")
        .is("2024-02-31")
        .date_format("%Y-%m-%d")
        .errors()
        .unwrap();
    assert_eq!(bag.get("d").unwrap()[0].rule, Rule::DateFormat);

    let bag = validator
        .attribute("d")
        .is("2024-02-29")
        .date_format("%Y-%m-%d")
        .errors()
        .unwrap();
    assert!(bag.passed());
}

#[test]
fn test_attribute_name_with_placeholder_is_not_rewritten() {
    let catalog = Catalog::builtin();
    let session = Session::new().with("role", "admin");
    let validator = Validator::new(&catalog, &session);

    let bag = validator
        .attribute("{values}")
        .required_unless("role", ["guest"])
        .errors()
        .unwrap();
    let message = bag.first("{values}").unwrap();
    assert!(message.contains("{values}"), "{}", message);
    assert!(message.contains("guest"), "{}", message);
}

#[test]
fn test_mixed_rule_families() {
    let catalog = Catalog::builtin();
    let session = Session::new();
    let validator = Validator::new(&catalog, &session);
    let deadline = Utc.with_ymd_and_hms(2030, 1, 1, 0, 0, 0).unwrap();

    let bag = validator
        .attribute("starts_at")
        .is("2031-05-01")
        .required()
        .date()
        .date_format("%Y-%m-%d")
        .before(deadline)
        .after(deadline)
        .errors()
        .unwrap();
    assert_eq!(rules(&bag, "starts_at"), vec![Rule::Before]);
    assert_eq!(
        bag.first("starts_at"),
        Some("The starts_at field must be a date before 2030-01-01 00:00:00.")
    );

    let bag = validator
        .attribute("password")
        .is("lowercase")
        .password_letters()
        .password_mixed()
        .password_numbers()
        .password_symbols()
        .password_uncompromised(["lowercase"])
        .errors()
        .unwrap();
    assert_eq!(
        rules(&bag, "password"),
        vec![
            Rule::PasswordMixed,
            Rule::PasswordNumbers,
            Rule::PasswordSymbols,
            Rule::PasswordUncompromised,
        ]
    );
}

#[test]
fn test_merging_chains() {
    let catalog = Catalog::builtin();
    let session = session();
    let validator = Validator::new(&catalog, &session);

    let bag: ErrorBag = [
        validator.field("name").required().alpha().errors(),
        validator.attribute("email").is("nope").email().errors(),
        validator.field("role").in_list(["user", "guest"]).errors(),
    ]
    .into_iter()
    .collect::<Result<_, _>>()
    .unwrap();

    assert_eq!(bag.error_count(), 2);
    assert_eq!(
        bag.attributes().collect::<Vec<_>>(),
        vec!["email", "name", "role"]
    );
    assert_eq!(
        bag.first("email"),
        Some("The email address field must be a valid email address.")
    );
}

#[test]
fn test_files() {
    let catalog = Catalog::builtin();
    let session = Session::new();
    let validator = Validator::new(&catalog, &session);

    let upload = Value::from(serde_json::json!({
        "name": "avatar.PNG",
        "width": 640,
        "height": 480
    }));
    let bag = validator
        .attribute("avatar")
        .is(upload)
        .image()
        .mimes([".png", "jpg"])
        .dimensions(100, 100, 600, 600)
        .errors()
        .unwrap();
    assert_eq!(
        bag.messages("avatar"),
        vec!["The avatar field must be between 100x100 and 600x600 pixels."]
    );
}
