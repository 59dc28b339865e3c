use crate::validators::{FieldValue, ValidationResult, Validator};
use std::fmt::{self, Display};

const NUMERIC_MESSAGE: &str = "Must be a number";
const POSITIVE_MESSAGE: &str = "Must be a positive number";

/// Accepts missing or empty values and anything that converts to a number.
#[derive(Clone, Debug)]
pub struct Numeric {
    message: String,
}

impl Numeric {
    fn new(message: String) -> Self {
        Self { message }
    }

    /// Factory for a numeric check. Returns a trait object.
    pub fn number(message: Option<&str>) -> Box<dyn Validator> {
        Box::new(Self::new(message.unwrap_or(NUMERIC_MESSAGE).to_string()))
    }
}

impl Validator for Numeric {
    fn validate(&self, value: &FieldValue) -> ValidationResult {
        let is_valid = match value {
            FieldValue::Absent | FieldValue::Null => true,
            FieldValue::Text(s) if s.is_empty() => true,
            other => !other.to_number().is_nan(),
        };
        ValidationResult::check(is_valid, self.message.as_str())
    }

    fn box_clone(&self) -> Box<dyn Validator> {
        Box::new(self.clone())
    }
}

impl Display for Numeric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[numeric]")
    }
}

/// Accepts missing values and anything that converts to a number above zero.
///
/// Empty text converts to zero and therefore fails.
#[derive(Clone, Debug)]
pub struct Positive {
    message: String,
}

impl Positive {
    fn new(message: String) -> Self {
        Self { message }
    }

    /// Factory for a strictly-positive check. Returns a trait object.
    pub fn greater_than_zero(message: Option<&str>) -> Box<dyn Validator> {
        Box::new(Self::new(message.unwrap_or(POSITIVE_MESSAGE).to_string()))
    }
}

impl Validator for Positive {
    fn validate(&self, value: &FieldValue) -> ValidationResult {
        let is_valid = value.is_missing() || value.to_number() > 0.0;
        ValidationResult::check(is_valid, self.message.as_str())
    }

    fn box_clone(&self) -> Box<dyn Validator> {
        Box::new(self.clone())
    }
}

impl Display for Positive {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[positive]")
    }
}
