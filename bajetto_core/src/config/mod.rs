//! Typed configuration for validation limits and display defaults.
//!
//! Configuration arrives as a flat map of string properties (`"pin.length" =>
//! "6"`). Each key is parsed through [`ConfigValue`]; keys that are absent keep
//! their documented default.

use crate::errors::ConfigError;
use std::collections::HashMap;

mod limits;
mod macros;
mod settings;

pub use limits::{BudgetLimits, PinLimits, TransactionLimits, ValidationLimits};
pub use settings::FormatSettings;

/// The bridge between a raw property string and a typed field.
///
/// `parse` receives the key so that errors can name the offending property.
/// `to_config_string` is the reverse direction, used when echoing effective
/// configuration back to a caller.
pub trait ConfigValue: Sized {
    fn parse(key: &str, value_str: &str) -> Result<Self, ConfigError>;

    fn to_config_string(&self) -> String;
}

/// Implemented by configuration structs that can be built from properties.
pub trait FromProps: Sized {
    fn from_props(props: &HashMap<String, String>) -> Result<Self, ConfigError>;
}

crate::impl_config_value_for_fromstr!(
    bool, u8, u16, u32, u64, usize, i8, i16, i32, i64, isize, f32, f64
);

impl ConfigValue for String {
    fn parse(_key: &str, s: &str) -> Result<Self, ConfigError> {
        Ok(s.trim().to_string())
    }
    fn to_config_string(&self) -> String {
        self.clone()
    }
}

/// Reads `key` from `props`, falling back to `default` when it is missing.
pub(crate) fn prop_or<T: ConfigValue>(
    props: &HashMap<String, String>,
    key: &str,
    default: T,
) -> Result<T, ConfigError> {
    match props.get(key) {
        Some(raw) => T::parse(key, raw),
        None => {
            tracing::debug!(key, default = %default.to_config_string(), "using default");
            Ok(default)
        }
    }
}

/// Rejects `NaN` and infinite amounts, which `f64` parsing accepts.
pub(crate) fn ensure_finite(key: &str, value: f64) -> Result<(), ConfigError> {
    if !value.is_finite() {
        return Err(ConfigError::ValidationFailed {
            name: key.to_string(),
            message: format!("{} must be a finite number, got {}", key, value),
        });
    }
    Ok(())
}

/// Rejects a `min`/`max` pair where the lower bound exceeds the upper one.
pub(crate) fn ensure_ordered<T: PartialOrd + std::fmt::Display>(
    min_key: &str,
    min: T,
    max_key: &str,
    max: T,
) -> Result<(), ConfigError> {
    if min > max {
        return Err(ConfigError::ValidationFailed {
            name: min_key.to_string(),
            message: format!("{} must not exceed {} ({} > {})", min_key, max_key, min, max),
        });
    }
    Ok(())
}
