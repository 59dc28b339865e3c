//! Pre-composed pipelines for the transaction, budget and PIN forms.
//!
//! Every pipeline takes its limits explicitly; callers that do not load their
//! own use `ValidationLimits::global_default()`.

use crate::config::ValidationLimits;
use crate::validators::value::number_text;
use crate::validators::{
    Validator, compose, max_length, max_value, min_length, min_value, numeric, pattern, required,
};
use once_cell::sync::Lazy;
use regex::Regex;

// ASCII only: `\d` would also accept other scripts' digits.
static DIGITS_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[0-9]+$").expect("digits pattern is a valid regex"));

pub fn transaction_amount(limits: &ValidationLimits) -> Box<dyn Validator> {
    let t = limits.transaction();
    compose(vec![
        required(Some("Amount is required")),
        numeric(Some("Amount must be a number")),
        min_value(
            t.min_amount(),
            Some(&format!("Amount must be at least {}", number_text(t.min_amount()))),
        ),
        max_value(t.max_amount(), Some("Amount is too large")),
    ])
}

pub fn transaction_title(limits: &ValidationLimits) -> Box<dyn Validator> {
    let t = limits.transaction();
    compose(vec![
        required(Some("Title is required")),
        min_length(t.min_title_length(), Some("Title is too short")),
        max_length(t.max_title_length(), Some("Title is too long")),
    ])
}

/// A single rule rather than a chain: notes are optional.
pub fn transaction_note(limits: &ValidationLimits) -> Box<dyn Validator> {
    max_length(limits.transaction().max_note_length(), Some("Note is too long"))
}

pub fn budget_amount(limits: &ValidationLimits) -> Box<dyn Validator> {
    let b = limits.budget();
    compose(vec![
        required(Some("Budget limit is required")),
        numeric(Some("Budget must be a number")),
        min_value(b.min_amount(), Some("Budget must be positive")),
        max_value(b.max_amount(), Some("Budget is too large")),
    ])
}

pub fn budget_name(limits: &ValidationLimits) -> Box<dyn Validator> {
    let b = limits.budget();
    compose(vec![
        required(Some("Name is required")),
        min_length(b.min_name_length(), Some("Name is too short")),
        max_length(b.max_name_length(), Some("Name is too long")),
    ])
}

pub fn pin(limits: &ValidationLimits) -> Box<dyn Validator> {
    let length = limits.pin().length();
    let wrong_length = format!("PIN must be {} digits", length);
    compose(vec![
        required(Some("PIN is required")),
        min_length(length, Some(&wrong_length)),
        max_length(length, Some(&wrong_length)),
        pattern(DIGITS_REGEX.clone(), "PIN must contain only numbers"),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::FromProps;
    use crate::validators::FieldValue;
    use std::collections::HashMap;

    fn error_of(v: &dyn Validator, value: impl Into<FieldValue>) -> Option<String> {
        v.validate(&value.into()).into_error()
    }

    macro_rules! test_pipeline {
        ($test_name:ident, $pipeline:ident, $ok_values:expr, $bad_values:expr) => {
            #[test]
            fn $test_name() {
                let v = $pipeline(ValidationLimits::global_default());
                for value in $ok_values {
                    assert_eq!(error_of(v.as_ref(), value), None, "expected {:?} to pass", value);
                }
                for (value, expected) in $bad_values {
                    assert_eq!(
                        error_of(v.as_ref(), value).as_deref(),
                        Some(expected),
                        "unexpected outcome for {:?}",
                        value
                    );
                }
            }
        };
    }

    test_pipeline!(
        test_transaction_amount,
        transaction_amount,
        ["0.01", "12.50", "999999999"],
        [
            ("", "Amount is required"),
            ("  ", "Amount is required"),
            ("twelve", "Amount must be a number"),
            ("0", "Amount must be at least 0.01"),
            ("-4", "Amount must be at least 0.01"),
            ("1000000000", "Amount is too large"),
        ]
    );

    test_pipeline!(
        test_transaction_title,
        transaction_title,
        ["Groceries", "x"],
        [
            ("", "Title is required"),
            ("a".repeat(101).as_str(), "Title is too long"),
        ]
    );

    test_pipeline!(
        test_budget_amount,
        budget_amount,
        ["0", "250", "999999999"],
        [
            ("", "Budget limit is required"),
            ("lots", "Budget must be a number"),
            ("-1", "Budget must be positive"),
            ("1e10", "Budget is too large"),
        ]
    );

    test_pipeline!(
        test_budget_name,
        budget_name,
        ["Food", "n".repeat(50).as_str()],
        [
            ("   ", "Name is required"),
            ("n".repeat(51).as_str(), "Name is too long"),
        ]
    );

    test_pipeline!(
        test_pin,
        pin,
        ["1234", "0000"],
        [
            ("", "PIN is required"),
            ("123", "PIN must be 4 digits"),
            ("12345", "PIN must be 4 digits"),
            ("12a4", "PIN must contain only numbers"),
            ("١٢٣٤", "PIN must contain only numbers"),
            ("۱۲۳۴", "PIN must contain only numbers"),
            ("１２３４", "PIN must contain only numbers"),
        ]
    );

    #[test]
    fn test_transaction_note_is_optional() {
        let v = transaction_note(ValidationLimits::global_default());
        assert_eq!(error_of(v.as_ref(), FieldValue::Absent), None);
        assert_eq!(error_of(v.as_ref(), ""), None);
        assert_eq!(
            error_of(v.as_ref(), "n".repeat(501)).as_deref(),
            Some("Note is too long")
        );
    }

    #[test]
    fn test_pipelines_follow_configured_limits() {
        let props = HashMap::from([
            ("pin.length".to_string(), "6".to_string()),
            ("transaction.min.amount".to_string(), "5".to_string()),
            ("transaction.min.title.length".to_string(), "3".to_string()),
        ]);
        let limits = ValidationLimits::from_props(&props).unwrap();

        let pin = pin(&limits);
        assert_eq!(error_of(pin.as_ref(), "1234").as_deref(), Some("PIN must be 6 digits"));
        assert_eq!(error_of(pin.as_ref(), "123456"), None);

        let amount = transaction_amount(&limits);
        assert_eq!(
            error_of(amount.as_ref(), 4.99).as_deref(),
            Some("Amount must be at least 5")
        );

        let title = transaction_title(&limits);
        assert_eq!(error_of(title.as_ref(), "ab").as_deref(), Some("Title is too short"));
    }
}
