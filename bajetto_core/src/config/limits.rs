use crate::config::{FromProps, ensure_finite, ensure_ordered, prop_or};
use crate::errors::ConfigError;
use getset::{CopyGetters, Setters};
use once_cell::sync::Lazy;
use std::collections::HashMap;

static DEFAULT_LIMITS: Lazy<ValidationLimits> = Lazy::new(ValidationLimits::default);

/// Bounds for the budget form.
#[derive(Clone, Copy, Debug, PartialEq, CopyGetters, Setters)]
#[getset(get_copy = "pub", set = "pub")]
pub struct BudgetLimits {
    min_amount: f64,
    max_amount: f64,
    min_name_length: usize,
    max_name_length: usize,
}

impl Default for BudgetLimits {
    fn default() -> Self {
        Self {
            min_amount: 0.0,
            max_amount: 999_999_999.0,
            min_name_length: 1,
            max_name_length: 50,
        }
    }
}

impl FromProps for BudgetLimits {
    fn from_props(props: &HashMap<String, String>) -> Result<Self, ConfigError> {
        let d = Self::default();
        let limits = Self {
            min_amount: prop_or(props, "budget.min.amount", d.min_amount)?,
            max_amount: prop_or(props, "budget.max.amount", d.max_amount)?,
            min_name_length: prop_or(props, "budget.min.name.length", d.min_name_length)?,
            max_name_length: prop_or(props, "budget.max.name.length", d.max_name_length)?,
        };
        ensure_finite("budget.min.amount", limits.min_amount)?;
        ensure_finite("budget.max.amount", limits.max_amount)?;
        ensure_ordered(
            "budget.min.amount",
            limits.min_amount,
            "budget.max.amount",
            limits.max_amount,
        )?;
        ensure_ordered(
            "budget.min.name.length",
            limits.min_name_length,
            "budget.max.name.length",
            limits.max_name_length,
        )?;
        Ok(limits)
    }
}

/// Bounds for the transaction form.
#[derive(Clone, Copy, Debug, PartialEq, CopyGetters, Setters)]
#[getset(get_copy = "pub", set = "pub")]
pub struct TransactionLimits {
    min_amount: f64,
    max_amount: f64,
    min_title_length: usize,
    max_title_length: usize,
    max_note_length: usize,
}

impl Default for TransactionLimits {
    fn default() -> Self {
        Self {
            min_amount: 0.01,
            max_amount: 999_999_999.0,
            min_title_length: 1,
            max_title_length: 100,
            max_note_length: 500,
        }
    }
}

impl FromProps for TransactionLimits {
    fn from_props(props: &HashMap<String, String>) -> Result<Self, ConfigError> {
        let d = Self::default();
        let limits = Self {
            min_amount: prop_or(props, "transaction.min.amount", d.min_amount)?,
            max_amount: prop_or(props, "transaction.max.amount", d.max_amount)?,
            min_title_length: prop_or(props, "transaction.min.title.length", d.min_title_length)?,
            max_title_length: prop_or(props, "transaction.max.title.length", d.max_title_length)?,
            max_note_length: prop_or(props, "transaction.max.note.length", d.max_note_length)?,
        };
        ensure_finite("transaction.min.amount", limits.min_amount)?;
        ensure_finite("transaction.max.amount", limits.max_amount)?;
        ensure_ordered(
            "transaction.min.amount",
            limits.min_amount,
            "transaction.max.amount",
            limits.max_amount,
        )?;
        ensure_ordered(
            "transaction.min.title.length",
            limits.min_title_length,
            "transaction.max.title.length",
            limits.max_title_length,
        )?;
        Ok(limits)
    }
}

/// PIN shape and lockout policy.
#[derive(Clone, Copy, Debug, PartialEq, CopyGetters, Setters)]
#[getset(get_copy = "pub", set = "pub")]
pub struct PinLimits {
    length: usize,
    max_attempts: u32,
}

impl Default for PinLimits {
    fn default() -> Self {
        Self {
            length: 4,
            max_attempts: 5,
        }
    }
}

impl FromProps for PinLimits {
    fn from_props(props: &HashMap<String, String>) -> Result<Self, ConfigError> {
        let d = Self::default();
        let limits = Self {
            length: prop_or(props, "pin.length", d.length)?,
            max_attempts: prop_or(props, "pin.max.attempts", d.max_attempts)?,
        };
        if limits.length == 0 {
            return Err(ConfigError::ValidationFailed {
                name: "pin.length".to_string(),
                message: "PIN length must be at least 1".to_string(),
            });
        }
        Ok(limits)
    }
}

/// Every limit the domain validators consult.
#[derive(Clone, Copy, Debug, Default, PartialEq, CopyGetters, Setters)]
#[getset(get_copy = "pub", set = "pub")]
pub struct ValidationLimits {
    budget: BudgetLimits,
    transaction: TransactionLimits,
    pin: PinLimits,
}

impl ValidationLimits {
    /// The shipped defaults, shared by every caller that does not load its own.
    pub fn global_default() -> &'static ValidationLimits {
        &DEFAULT_LIMITS
    }
}

impl FromProps for ValidationLimits {
    fn from_props(props: &HashMap<String, String>) -> Result<Self, ConfigError> {
        Ok(Self {
            budget: BudgetLimits::from_props(props)?,
            transaction: TransactionLimits::from_props(props)?,
            pin: PinLimits::from_props(props)?,
        })
    }
}
