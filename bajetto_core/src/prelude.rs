//! The `bajetto_core` prelude.

pub use crate::compose;
pub use crate::config::{
    BudgetLimits, ConfigValue, FormatSettings, FromProps, PinLimits, TransactionLimits,
    ValidationLimits,
};
pub use crate::errors::ConfigError;
pub use crate::form::{
    Form, FormErrors, FormValidators, FormValues, has_errors, validate_form,
};
pub use crate::format::{
    CurrencyOptions, DateFormat, capitalize, format_compact, format_currency, format_date,
    format_date_on, format_number, format_percentage, format_time, format_transaction_amount,
    to_title_case, truncate,
};
pub use crate::validators::{
    Compose, FieldValue, ValidationResult, Validator, budget_amount, budget_name, compose,
    email, max_length, max_value, min_length, min_value, numeric, pattern, pattern_str, pin,
    positive, required, transaction_amount, transaction_note, transaction_title,
};
pub use bajetto_macros::Form;
