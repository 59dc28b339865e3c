//! Display formatting for amounts, dates, numbers and labels.
//!
//! All functions are pure. Fixed-point output rounds half away from zero on
//! the exact value of the input, see [`to_fixed`].

mod currency;
mod date;
mod locale;
mod number;
mod text;

pub use currency::{CurrencyOptions, format_currency, format_transaction_amount};
pub use date::{DateFormat, INVALID_DATE, format_date, format_date_on, format_time, parse_date};
pub use locale::NumberSymbols;
pub use number::{
    MAX_DECIMALS, format_compact, format_grouped, format_number, format_percentage, to_fixed,
};
pub use text::{capitalize, to_title_case, truncate};
