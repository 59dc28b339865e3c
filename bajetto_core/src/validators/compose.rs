use crate::validators::{FieldValue, ValidationResult, Validator};
use std::fmt::{self, Display};

/// An ordered, fail-fast chain of validators.
///
/// Stages run left to right and evaluation stops at the first failure, so a
/// field reports at most one error per evaluation. An empty chain accepts
/// everything.
#[derive(Clone, Debug, Default)]
pub struct Compose {
    validators: Vec<Box<dyn Validator>>,
}

impl Compose {
    pub fn new(validators: Vec<Box<dyn Validator>>) -> Self {
        Self { validators }
    }

    /// Appends a stage that runs after the existing ones.
    pub fn then(mut self, validator: Box<dyn Validator>) -> Self {
        self.validators.push(validator);
        self
    }

    pub fn len(&self) -> usize {
        self.validators.len()
    }

    pub fn is_empty(&self) -> bool {
        self.validators.is_empty()
    }

    pub fn boxed(self) -> Box<dyn Validator> {
        Box::new(self)
    }
}

impl Validator for Compose {
    fn validate(&self, value: &FieldValue) -> ValidationResult {
        self.validators
            .iter()
            .map(|validator| validator.validate(value))
            .find(|result| !result.is_valid())
            .unwrap_or_else(ValidationResult::valid)
    }

    fn box_clone(&self) -> Box<dyn Validator> {
        Box::new(self.clone())
    }
}

impl Display for Compose {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let stages: Vec<String> = self.validators.iter().map(|v| v.to_string()).collect();
        write!(f, "{}", stages.join(" -> "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validators::{max_length, min_length, required};
    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering};

    /// Always fails with a fixed message and counts its invocations.
    #[derive(Clone)]
    struct AlwaysFail {
        message: &'static str,
        calls: Arc<AtomicUsize>,
    }

    impl AlwaysFail {
        fn boxed(message: &'static str, calls: &Arc<AtomicUsize>) -> Box<dyn Validator> {
            Box::new(Self {
                message,
                calls: Arc::clone(calls),
            })
        }
    }

    impl Validator for AlwaysFail {
        fn validate(&self, _value: &FieldValue) -> ValidationResult {
            self.calls.fetch_add(1, Ordering::SeqCst);
            ValidationResult::invalid(self.message)
        }

        fn box_clone(&self) -> Box<dyn Validator> {
            Box::new(self.clone())
        }
    }

    impl Display for AlwaysFail {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            write!(f, "[fail {}]", self.message)
        }
    }

    #[test]
    fn test_first_failure_wins_and_short_circuits() {
        let first = Arc::new(AtomicUsize::new(0));
        let second = Arc::new(AtomicUsize::new(0));
        let chain = Compose::new(vec![
            AlwaysFail::boxed("A", &first),
            AlwaysFail::boxed("B", &second),
        ]);

        let result = chain.validate(&FieldValue::from("anything"));

        assert_eq!(result.error(), Some("A"));
        assert_eq!(first.load(Ordering::SeqCst), 1);
        assert_eq!(second.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn test_all_passing_is_valid_without_error() {
        let chain = Compose::new(vec![required(None), min_length(2, None), max_length(5, None)]);
        assert_eq!(chain.validate(&"abc".into()), ValidationResult::valid());
    }

    #[test]
    fn test_order_decides_the_reported_error() {
        let required_first = Compose::new(vec![required(None), min_length(3, None)]);
        assert_eq!(
            required_first.validate(&"".into()).error(),
            Some("This field is required")
        );

        // Without `required` in front the empty value slips through.
        let length_only = Compose::new(vec![min_length(3, None)]);
        assert!(length_only.validate(&"".into()).is_valid());
    }

    #[test]
    fn test_empty_chain_accepts_everything() {
        let chain = Compose::default();
        assert!(chain.is_empty());
        assert!(chain.validate(&FieldValue::Absent).is_valid());
    }

    #[test]
    fn test_then_appends_stages() {
        let chain = Compose::default().then(required(None)).then(max_length(2, None));
        assert_eq!(chain.len(), 2);
        assert_eq!(chain.to_string(), "[required] -> length [..., 2]");
        assert_eq!(
            chain.validate(&"abc".into()).error(),
            Some("Must be at most 2 characters")
        );
    }

    #[test]
    fn test_compose_macro() {
        let v = crate::compose![required(Some("Name is required")), max_length(3, None)];
        assert_eq!(v.validate(&"  ".into()).error(), Some("Name is required"));
        assert!(v.validate(&"abc".into()).is_valid());
    }
}
