use crate::format::locale::NumberSymbols;
use crate::format::number::{compact_parts, format_grouped, to_fixed};

/// How [`format_currency`] renders an amount.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CurrencyOptions {
    /// Printed before the number. Defaults to `$`.
    pub symbol: String,
    /// Selects grouping and decimal symbols. Defaults to `en-US`.
    pub locale: String,
    /// Prefix positive amounts with `+`.
    pub show_sign: bool,
    /// Abbreviate thousands and millions with `K`/`M`.
    pub compact: bool,
}

impl Default for CurrencyOptions {
    fn default() -> Self {
        Self {
            symbol: "$".to_string(),
            locale: "en-US".to_string(),
            show_sign: false,
            compact: false,
        }
    }
}

/// Formats `amount` as money.
///
/// The full form always shows two decimals, grouped for the locale. A negative
/// amount is prefixed with `-` whatever `show_sign` says. The compact form
/// keeps the sign of the scaled amount after the symbol, so `-1500` compacts to
/// `$-1.5K`.
pub fn format_currency(amount: f64, options: &CurrencyOptions) -> String {
    let sign = if options.show_sign && amount > 0.0 {
        "+"
    } else {
        ""
    };

    if options.compact
        && let Some((scaled, suffix)) = compact_parts(amount)
    {
        return format!("{}{}{}{}", sign, options.symbol, scaled, suffix);
    }

    let symbols = NumberSymbols::for_locale(&options.locale);
    let formatted = format_grouped(amount.abs(), 2, symbols);
    let prefix = if amount < 0.0 { "-" } else { sign };
    format!("{}{}{}", prefix, options.symbol, formatted)
}

/// Formats a transaction line amount. The expense flag alone picks the sign.
pub fn format_transaction_amount(amount: f64, is_expense: bool) -> String {
    let sign = if is_expense { '-' } else { '+' };
    format!("{}${}", sign, to_fixed(amount.abs(), 2))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn opts() -> CurrencyOptions {
        CurrencyOptions::default()
    }

    #[test]
    fn test_plain_amounts() {
        assert_eq!(format_currency(0.0, &opts()), "$0.00");
        assert_eq!(format_currency(50.0, &opts()), "$50.00");
        assert_eq!(format_currency(1234.5, &opts()), "$1,234.50");
        assert_eq!(format_currency(1234567.891, &opts()), "$1,234,567.89");
        assert_eq!(format_currency(-50.0, &opts()), "-$50.00");
    }

    #[test]
    fn test_show_sign() {
        let o = CurrencyOptions {
            show_sign: true,
            ..opts()
        };
        assert_eq!(format_currency(50.0, &o), "+$50.00");
        assert_eq!(format_currency(-50.0, &o), "-$50.00");
        assert_eq!(format_currency(0.0, &o), "$0.00");
    }

    #[test]
    fn test_compact() {
        let o = CurrencyOptions {
            compact: true,
            ..opts()
        };
        assert_eq!(format_currency(1234567.0, &o), "$1.2M");
        assert_eq!(format_currency(1_000_000.0, &o), "$1.0M");
        assert_eq!(format_currency(2500.0, &o), "$2.5K");
        assert_eq!(format_currency(999.0, &o), "$999.00");
        assert_eq!(format_currency(-1500.0, &o), "$-1.5K");
        assert_eq!(format_currency(-50.0, &o), "-$50.00");

        let signed = CurrencyOptions {
            show_sign: true,
            ..o
        };
        assert_eq!(format_currency(2500.0, &signed), "+$2.5K");
    }

    #[test]
    fn test_symbol_and_locale() {
        let o = CurrencyOptions {
            symbol: "€".to_string(),
            locale: "de-DE".to_string(),
            ..opts()
        };
        assert_eq!(format_currency(-1234567.5, &o), "-€1.234.567,50");

        let unknown = CurrencyOptions {
            locale: "tlh".to_string(),
            ..opts()
        };
        assert_eq!(format_currency(1000.0, &unknown), "$1,000.00");
    }

    #[test]
    fn test_transaction_amount_uses_flag_not_sign() {
        assert_eq!(format_transaction_amount(25.0, true), "-$25.00");
        assert_eq!(format_transaction_amount(25.0, false), "+$25.00");
        assert_eq!(format_transaction_amount(-25.0, false), "+$25.00");
        assert_eq!(format_transaction_amount(-25.0, true), "-$25.00");
        assert_eq!(format_transaction_amount(1234.5, true), "-$1234.50");
    }
}
