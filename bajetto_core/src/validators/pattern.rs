use crate::errors::ConfigError;
use crate::validators::{FieldValue, ValidationResult, Validator};
use once_cell::sync::Lazy;
use regex::Regex;
use std::fmt::{self, Display};

const EMAIL_MESSAGE: &str = "Invalid email address";

static EMAIL_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern is a valid regex")
});

/// A validator that requires a value's text to match a regular expression.
///
/// Falsy values pass. Matching uses search semantics, so the expression has
/// to anchor itself with `^...$` to constrain the whole value.
#[derive(Clone, Debug)]
pub struct Pattern {
    regex: Regex,
    message: String,
}

impl Pattern {
    fn new(regex: Regex, message: String) -> Self {
        Self { regex, message }
    }

    /// Factory for a pattern rule from a compiled expression. Returns a trait object.
    pub fn matching(regex: Regex, message: &str) -> Box<dyn Validator> {
        Box::new(Self::new(regex, message.to_string()))
    }

    /// Compiles `pattern` and builds the rule, rejecting invalid expressions.
    pub fn compile(pattern: &str, message: &str) -> Result<Box<dyn Validator>, ConfigError> {
        let regex = Regex::new(pattern).map_err(|e| ConfigError::InvalidPattern {
            pattern: pattern.to_string(),
            message: e.to_string(),
        })?;
        Ok(Self::matching(regex, message))
    }

    /// Factory for the email shape check: one `@`, a dot in the domain, no whitespace.
    pub fn email(message: Option<&str>) -> Box<dyn Validator> {
        Box::new(Self::new(
            EMAIL_REGEX.clone(),
            message.unwrap_or(EMAIL_MESSAGE).to_string(),
        ))
    }
}

impl Validator for Pattern {
    fn validate(&self, value: &FieldValue) -> ValidationResult {
        if value.is_falsy() {
            return ValidationResult::valid();
        }
        let is_match = match value {
            FieldValue::Text(s) => self.regex.is_match(s),
            other => self.regex.is_match(&other.to_string()),
        };
        ValidationResult::check(is_match, self.message.as_str())
    }

    fn box_clone(&self) -> Box<dyn Validator> {
        Box::new(self.clone())
    }
}

impl Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "/{}/", self.regex.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_email() {
        let v = Pattern::email(None);
        for ok in ["a@b.co", "first.last@mail.example.org", ""] {
            assert!(v.validate(&ok.into()).is_valid(), "{:?}", ok);
        }
        for bad in ["plain", "a@b", "a b@c.de", "@b.co", "a@@b.co", "a@b.", "a@.b"] {
            assert_eq!(v.validate(&bad.into()).error(), Some(EMAIL_MESSAGE), "{:?}", bad);
        }
    }

    #[test]
    fn test_pattern_search_semantics() {
        let unanchored = Pattern::compile(r"\d", "needs a digit").unwrap();
        assert!(unanchored.validate(&"abc1".into()).is_valid());
        assert_eq!(
            unanchored.validate(&"abc".into()).error(),
            Some("needs a digit")
        );

        let anchored = Pattern::compile(r"^\d+$", "digits only").unwrap();
        assert!(!anchored.validate(&"abc1".into()).is_valid());
    }

    #[test]
    fn test_pattern_matches_number_text() {
        let v = Pattern::compile(r"^\d+$", "digits only").unwrap();
        assert!(v.validate(&FieldValue::from(1234)).is_valid());
        assert!(!v.validate(&FieldValue::from(12.5)).is_valid());
    }

    #[test]
    fn test_invalid_pattern() {
        let err = Pattern::compile("(", "unused").unwrap_err();
        assert!(matches!(err, ConfigError::InvalidPattern { ref pattern, .. } if pattern == "("));
    }

    #[test]
    fn test_display() {
        assert_eq!(
            Pattern::compile(r"^\d+$", "x").unwrap().to_string(),
            r"/^\d+$/"
        );
    }
}
