use crate::validators::{FieldValue, ValidationResult, Validator};
use std::fmt::{self, Display};

/// A stateful validator for text length, counted in characters.
///
/// Falsy values always pass: a length rule on its own accepts an empty field,
/// so pair it with `required` when the field is mandatory. A truthy value
/// without a length, such as a number, fails.
#[derive(Clone, Debug)]
pub struct Length {
    min: Option<usize>,
    max: Option<usize>,
    message: Option<String>,
}

impl Length {
    fn new(min: Option<usize>, max: Option<usize>, message: Option<&str>) -> Self {
        Self {
            min,
            max,
            message: message.map(str::to_string),
        }
    }

    /// Factory for a minimum length. Returns a trait object.
    pub fn at_least(min: usize, message: Option<&str>) -> Box<dyn Validator> {
        Box::new(Self::new(Some(min), None, message))
    }

    /// Factory for a maximum length. Returns a trait object.
    pub fn at_most(max: usize, message: Option<&str>) -> Box<dyn Validator> {
        Box::new(Self::new(None, Some(max), message))
    }

    /// Factory for a length window. Returns a trait object.
    pub fn between(min: usize, max: usize, message: Option<&str>) -> Box<dyn Validator> {
        Box::new(Self::new(Some(min), Some(max), message))
    }

    fn fail(&self, default: String) -> ValidationResult {
        ValidationResult::invalid(self.message.clone().unwrap_or(default))
    }
}

impl Validator for Length {
    fn validate(&self, value: &FieldValue) -> ValidationResult {
        if value.is_falsy() {
            return ValidationResult::valid();
        }
        let len = value.length();

        if let Some(min) = self.min
            && !len.is_some_and(|len| len >= min)
        {
            return self.fail(format!("Must be at least {} characters", min));
        }

        if let Some(max) = self.max
            && !len.is_some_and(|len| len <= max)
        {
            return self.fail(format!("Must be at most {} characters", max));
        }

        ValidationResult::valid()
    }

    fn box_clone(&self) -> Box<dyn Validator> {
        Box::new(self.clone())
    }
}

impl Display for Length {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (self.min, self.max) {
            (None, None) => write!(f, "length [...]"),
            (None, Some(max)) => write!(f, "length [..., {}]", max),
            (Some(min), None) => write!(f, "length [{}, ...]", min),
            (Some(min), Some(max)) => write!(f, "length [{}, ..., {}]", min, max),
        }
    }
}
