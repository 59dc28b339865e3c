//! Whole-form evaluation.

use crate::validators::{FieldValue, Validator};
use indexmap::IndexMap;

/// Field name to submitted value, in declaration order.
pub type FormValues = IndexMap<String, FieldValue>;

/// Field name to the validator that guards it, in declaration order.
pub type FormValidators = IndexMap<String, Box<dyn Validator>>;

/// Sparse map from field name to its error message.
///
/// Only failing fields are present after [`validate_form`]. Entries may still
/// hold `None` when a caller clears a field's error by hand, which is why
/// [`FormErrors::has_errors`] looks at the messages rather than the length.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FormErrors {
    errors: IndexMap<String, Option<String>>,
}

impl FormErrors {
    pub fn new() -> Self {
        Self::default()
    }

    /// The message recorded for `field`, if any.
    pub fn get(&self, field: &str) -> Option<&str> {
        self.errors.get(field).and_then(|e| e.as_deref())
    }

    pub fn contains(&self, field: &str) -> bool {
        self.errors.contains_key(field)
    }

    pub fn insert(&mut self, field: impl Into<String>, error: Option<String>) {
        self.errors.insert(field.into(), error);
    }

    /// Clears the error for `field`, keeping the entry with no message.
    pub fn clear(&mut self, field: &str) {
        if let Some(error) = self.errors.get_mut(field) {
            *error = None;
        }
    }

    pub fn has_errors(&self) -> bool {
        self.errors.values().any(Option::is_some)
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, Option<&str>)> {
        self.errors
            .iter()
            .map(|(field, error)| (field.as_str(), error.as_deref()))
    }
}

impl<K: Into<String>> FromIterator<(K, Option<String>)> for FormErrors {
    fn from_iter<I: IntoIterator<Item = (K, Option<String>)>>(iter: I) -> Self {
        Self {
            errors: iter.into_iter().map(|(k, v)| (k.into(), v)).collect(),
        }
    }
}

/// Runs each declared validator against its field's value.
///
/// Iteration follows `validators`, not `values`: a value with no validator is
/// never checked, and a validator whose field is missing from `values` sees
/// [`FieldValue::Absent`]. A field appears in the result only when its
/// validator fails with a non-empty message.
pub fn validate_form(values: &FormValues, validators: &FormValidators) -> FormErrors {
    let mut errors = FormErrors::new();

    for (field, validator) in validators {
        let value = values.get(field).unwrap_or(&FieldValue::Absent);
        let result = validator.validate(value);
        if !result.is_valid()
            && let Some(error) = result.into_error()
            && !error.is_empty()
        {
            tracing::debug!(field = %field, error = %error, "field failed validation");
            errors.insert(field.as_str(), Some(error));
        }
    }

    tracing::trace!(
        checked = validators.len(),
        failed = errors.len(),
        "form validated"
    );
    errors
}

/// `true` when any field in `errors` carries a message.
pub fn has_errors(errors: &FormErrors) -> bool {
    errors.has_errors()
}

/// A typed form whose fields can be evaluated as a whole.
///
/// Usually derived with `#[derive(Form)]`.
pub trait Form {
    fn values(&self) -> FormValues;

    fn validators() -> FormValidators;

    fn validate(&self) -> FormErrors {
        validate_form(&self.values(), &Self::validators())
    }
}
