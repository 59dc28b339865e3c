use crate::errors::ConfigError;
use regex::Regex;
use std::fmt::{self, Display};

pub(crate) mod compose;
pub(crate) mod domain;
pub(crate) mod length;
pub(crate) mod numeric;
pub(crate) mod pattern;
pub(crate) mod presence;
pub(crate) mod range;
pub(crate) mod value;

pub use compose::Compose;
pub use domain::{
    budget_amount, budget_name, pin, transaction_amount, transaction_note, transaction_title,
};
pub use length::Length;
pub use numeric::{Numeric, Positive};
pub use pattern::Pattern;
pub use presence::Required;
pub use range::Range;
pub use value::FieldValue;

/// Outcome of running one validator against one value.
///
/// The fields are private so that `error` can only be present on a failure.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ValidationResult {
    is_valid: bool,
    error: Option<String>,
}

impl ValidationResult {
    pub fn valid() -> Self {
        Self {
            is_valid: true,
            error: None,
        }
    }

    pub fn invalid(message: impl Into<String>) -> Self {
        Self {
            is_valid: false,
            error: Some(message.into()),
        }
    }

    /// Valid when `condition` holds, otherwise invalid with `message`.
    pub fn check(condition: bool, message: impl Into<String>) -> Self {
        if condition {
            Self::valid()
        } else {
            Self::invalid(message)
        }
    }

    pub fn is_valid(&self) -> bool {
        self.is_valid
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn into_error(self) -> Option<String> {
        self.error
    }
}

/// A rule that classifies a single field value.
///
/// Validators never fail at the system level: every outcome, including bad
/// input, is a `ValidationResult`. They hold no state beyond their
/// construction parameters, so they are `Send + Sync` and can live in statics.
pub trait Validator: Display + Send + Sync {
    fn validate(&self, value: &FieldValue) -> ValidationResult;

    fn box_clone(&self) -> Box<dyn Validator>;
}

impl Clone for Box<dyn Validator> {
    fn clone(&self) -> Self {
        self.box_clone()
    }
}

impl fmt::Debug for dyn Validator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Validator({})", self)
    }
}

/// Fails for absent, null, empty and whitespace-only values.
pub fn required(message: Option<&str>) -> Box<dyn Validator> {
    Required::present(message)
}

/// Fails when a value is shorter than `min` characters. Falsy values pass,
/// so an empty field is accepted unless `required` runs first.
pub fn min_length(min: usize, message: Option<&str>) -> Box<dyn Validator> {
    Length::at_least(min, message)
}

/// Fails when a value is longer than `max` characters. Falsy values pass.
pub fn max_length(max: usize, message: Option<&str>) -> Box<dyn Validator> {
    Length::at_most(max, message)
}

/// Fails when the numeric conversion of a present value is below `min`.
pub fn min_value(min: impl Into<f64>, message: Option<&str>) -> Box<dyn Validator> {
    Range::at_least(min, message)
}

/// Fails when the numeric conversion of a present value is above `max`.
pub fn max_value(max: impl Into<f64>, message: Option<&str>) -> Box<dyn Validator> {
    Range::at_most(max, message)
}

pub fn numeric(message: Option<&str>) -> Box<dyn Validator> {
    Numeric::number(message)
}

pub fn positive(message: Option<&str>) -> Box<dyn Validator> {
    Positive::greater_than_zero(message)
}

pub fn pattern(regex: Regex, message: &str) -> Box<dyn Validator> {
    Pattern::matching(regex, message)
}

/// Like [`pattern`], compiling the expression first.
pub fn pattern_str(expression: &str, message: &str) -> Result<Box<dyn Validator>, ConfigError> {
    Pattern::compile(expression, message)
}

pub fn email(message: Option<&str>) -> Box<dyn Validator> {
    Pattern::email(message)
}

/// Runs `validators` in order and returns the first failure.
pub fn compose(validators: Vec<Box<dyn Validator>>) -> Box<dyn Validator> {
    Box::new(Compose::new(validators))
}

/// Builds a fail-fast pipeline from a list of validators.
///
/// ```
/// use bajetto_core::prelude::*;
///
/// let title = compose![required(None), min_length(3, None)];
/// assert_eq!(
///     title.validate(&"ab".into()).error(),
///     Some("Must be at least 3 characters")
/// );
/// ```
#[macro_export]
macro_rules! compose {
    ($($validator:expr),* $(,)?) => {
        $crate::validators::compose(vec![$($validator),*])
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_result_invariant() {
        let ok = ValidationResult::valid();
        assert!(ok.is_valid());
        assert_eq!(ok.error(), None);

        let bad = ValidationResult::invalid("nope");
        assert!(!bad.is_valid());
        assert_eq!(bad.error(), Some("nope"));

        assert_eq!(ValidationResult::check(true, "unused"), ValidationResult::valid());
        assert_eq!(
            ValidationResult::check(false, "used").into_error(),
            Some("used".to_string())
        );
    }

    #[test]
    fn test_boxed_validator_clone_and_debug() {
        let v = min_length(3, None);
        let cloned = v.clone();
        assert_eq!(v.to_string(), cloned.to_string());
        assert_eq!(format!("{:?}", v), format!("Validator({})", v));
        assert_eq!(
            cloned.validate(&"ab".into()).error(),
            Some("Must be at least 3 characters")
        );
    }
}
