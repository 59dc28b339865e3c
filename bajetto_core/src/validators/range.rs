use crate::validators::value::number_text;
use crate::validators::{FieldValue, ValidationResult, Validator};
use std::fmt::{self, Display};

/// A stateful validator for numeric ranges.
///
/// Absent and null values pass. Anything else goes through the loose numeric
/// conversion before comparing, and NaN never satisfies a bound, so text that
/// is not a number fails the range check.
#[derive(Clone, Debug)]
pub struct Range {
    min: Option<f64>,
    max: Option<f64>,
    message: Option<String>,
}

impl Range {
    fn new(min: Option<f64>, max: Option<f64>, message: Option<&str>) -> Self {
        Self {
            min,
            max,
            message: message.map(str::to_string),
        }
    }

    /// Factory for a range with a lower bound. Returns a trait object.
    pub fn at_least(min: impl Into<f64>, message: Option<&str>) -> Box<dyn Validator> {
        Box::new(Self::new(Some(min.into()), None, message))
    }

    /// Factory for a range with an upper bound. Returns a trait object.
    pub fn at_most(max: impl Into<f64>, message: Option<&str>) -> Box<dyn Validator> {
        Box::new(Self::new(None, Some(max.into()), message))
    }

    /// Factory for a range with an upper and lower bound. Returns a trait object.
    pub fn between(
        min: impl Into<f64>,
        max: impl Into<f64>,
        message: Option<&str>,
    ) -> Box<dyn Validator> {
        Box::new(Self::new(Some(min.into()), Some(max.into()), message))
    }

    fn fail(&self, default: String) -> ValidationResult {
        ValidationResult::invalid(self.message.clone().unwrap_or(default))
    }
}

impl Validator for Range {
    fn validate(&self, value: &FieldValue) -> ValidationResult {
        if value.is_missing() {
            return ValidationResult::valid();
        }
        let n = value.to_number();

        if let Some(min) = self.min
            && !(n >= min)
        {
            return self.fail(format!("Must be at least {}", number_text(min)));
        }

        if let Some(max) = self.max
            && !(n <= max)
        {
            return self.fail(format!("Must be at most {}", number_text(max)));
        }

        ValidationResult::valid()
    }

    fn box_clone(&self) -> Box<dyn Validator> {
        Box::new(self.clone())
    }
}

impl Display for Range {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (self.min, self.max) {
            (None, None) => write!(f, "[...]"),
            (None, Some(max)) => write!(f, "[..., {}]", max),
            (Some(min), None) => write!(f, "[{}, ...]", min),
            (Some(min), Some(max)) => write!(f, "[{}, ..., {}]", min, max),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    macro_rules! test_range {
        ($test_name:ident, $validator:expr, $ok_values:expr, $bad_values:expr) => {
            #[test]
            fn $test_name() {
                let v = $validator;
                for value in $ok_values {
                    let value = FieldValue::from(value);
                    assert!(v.validate(&value).is_valid(), "expected {:?} to pass {}", value, v);
                }
                for value in $bad_values {
                    let value = FieldValue::from(value);
                    assert!(!v.validate(&value).is_valid(), "expected {:?} to fail {}", value, v);
                }
            }
        };
    }

    test_range!(
        test_min_value_numbers,
        Range::at_least(0.01, None),
        [0.01, 1.0, 1e9],
        [0.0, -5.0, 0.009, f64::NAN]
    );

    test_range!(
        test_min_value_text,
        Range::at_least(10, None),
        ["10", " 25 ", "1e2", "0x10"],
        ["9", "abc", "", "10 apples"]
    );

    test_range!(
        test_max_value_text,
        Range::at_most(100, None),
        ["100", "-1", ""],
        ["101", "abc", "Infinity"]
    );

    #[test]
    fn test_missing_values_pass() {
        let v = Range::between(1, 2, None);
        assert!(v.validate(&FieldValue::Absent).is_valid());
        assert!(v.validate(&FieldValue::Null).is_valid());
    }

    #[test]
    fn test_default_messages() {
        let v = Range::between(0.01, 999999999, None);
        assert_eq!(
            v.validate(&FieldValue::from(0)).error(),
            Some("Must be at least 0.01")
        );
        assert_eq!(
            v.validate(&FieldValue::from(1e10)).error(),
            Some("Must be at most 999999999")
        );
    }

    #[test]
    fn test_custom_message() {
        let v = Range::at_most(5, Some("Amount is too large"));
        assert_eq!(
            v.validate(&FieldValue::from(6)).error(),
            Some("Amount is too large")
        );
    }

    #[test]
    fn test_display() {
        assert_eq!(Range::at_least(0, None).to_string(), "[0, ...]");
        assert_eq!(Range::at_most(5, None).to_string(), "[..., 5]");
    }
}
