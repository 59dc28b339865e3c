/// Grouping and decimal symbols for one locale.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NumberSymbols {
    pub group: &'static str,
    pub decimal: &'static str,
}

impl NumberSymbols {
    pub const EN_US: NumberSymbols = NumberSymbols {
        group: ",",
        decimal: ".",
    };

    const DOT_COMMA: NumberSymbols = NumberSymbols {
        group: ".",
        decimal: ",",
    };

    const FRENCH: NumberSymbols = NumberSymbols {
        group: "\u{202f}",
        decimal: ",",
    };

    const SWISS: NumberSymbols = NumberSymbols {
        group: "\u{2019}",
        decimal: ".",
    };

    /// Looks up the symbols for a BCP 47 tag such as `en-US` or `de_DE`.
    ///
    /// Unknown tags fall back to en-US.
    pub fn for_locale(tag: &str) -> NumberSymbols {
        let tag = tag.trim().replace('_', "-").to_ascii_lowercase();
        let language = tag.split('-').next().unwrap_or_default();

        match (language, tag.as_str()) {
            (_, "de-ch") => Self::SWISS,
            ("en" | "ja" | "zh" | "ko", _) => Self::EN_US,
            ("de" | "it" | "nl" | "id", _) | (_, "pt-br") => Self::DOT_COMMA,
            ("fr", _) => Self::FRENCH,
            _ => {
                tracing::warn!(locale = %tag, "unknown locale, using en-US number symbols");
                Self::EN_US
            }
        }
    }
}
