use crate::validators::value::trim_blank;
use crate::validators::{FieldValue, ValidationResult, Validator};
use std::fmt::{self, Display};

pub(crate) const REQUIRED_MESSAGE: &str = "This field is required";

/// A validator that rejects missing and blank values.
///
/// Numbers and booleans are always present, including `0` and `false`.
#[derive(Clone, Debug)]
pub struct Required {
    message: String,
}

impl Required {
    fn new(message: String) -> Self {
        Self { message }
    }

    /// Factory for a presence check. Returns a trait object.
    pub fn present(message: Option<&str>) -> Box<dyn Validator> {
        Box::new(Self::new(message.unwrap_or(REQUIRED_MESSAGE).to_string()))
    }
}

impl Validator for Required {
    fn validate(&self, value: &FieldValue) -> ValidationResult {
        let is_present = match value {
            FieldValue::Absent | FieldValue::Null => false,
            FieldValue::Text(s) => !trim_blank(s).is_empty(),
            FieldValue::Number(_) | FieldValue::Bool(_) => true,
        };
        ValidationResult::check(is_present, self.message.as_str())
    }

    fn box_clone(&self) -> Box<dyn Validator> {
        Box::new(self.clone())
    }
}

impl Display for Required {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[required]")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_required_rejects_missing_and_blank() {
        let v = Required::present(None);
        for value in [
            FieldValue::Absent,
            FieldValue::Null,
            FieldValue::from(""),
            FieldValue::from("   "),
            FieldValue::from("\t\n"),
            FieldValue::from("\u{feff}"),
            FieldValue::from(" \u{feff}\u{a0} "),
        ] {
            let result = v.validate(&value);
            assert!(!result.is_valid(), "expected failure for {:?}", value);
            assert_eq!(result.error(), Some(REQUIRED_MESSAGE));
        }
    }

    #[test]
    fn test_required_accepts_present_values() {
        let v = Required::present(None);
        for value in [
            FieldValue::from("x"),
            FieldValue::from(" x "),
            FieldValue::from(0),
            FieldValue::Number(f64::NAN),
            FieldValue::from(false),
        ] {
            assert_eq!(v.validate(&value), ValidationResult::valid(), "{:?}", value);
        }
    }

    #[test]
    fn test_required_custom_message() {
        let v = Required::present(Some("Title is required"));
        assert_eq!(v.validate(&FieldValue::Absent).error(), Some("Title is required"));
    }
}
