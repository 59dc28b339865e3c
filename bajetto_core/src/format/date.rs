use chrono::{DateTime, Local, NaiveDate, NaiveDateTime, NaiveTime};
use std::fmt::{self, Display};
use std::str::FromStr;

/// Rendered by every date and time formatter for input that does not parse.
pub const INVALID_DATE: &str = "Invalid Date";

const NAIVE_DATE_TIME_FORMATS: [&str; 4] = [
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%d %H:%M",
];

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum DateFormat {
    /// "Today", "Yesterday", otherwise the short form.
    Relative,
    /// "Jan 5"
    #[default]
    Short,
    /// "January 5, 2024"
    Long,
    /// "Friday, January 5, 2024"
    Full,
}

impl FromStr for DateFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "relative" => Ok(DateFormat::Relative),
            "short" => Ok(DateFormat::Short),
            "long" => Ok(DateFormat::Long),
            "full" => Ok(DateFormat::Full),
            other => Err(format!(
                "unknown date format '{}', expected one of: relative, short, long, full",
                other
            )),
        }
    }
}

impl Display for DateFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            DateFormat::Relative => "relative",
            DateFormat::Short => "short",
            DateFormat::Long => "long",
            DateFormat::Full => "full",
        };
        write!(f, "{}", name)
    }
}

/// Parses a date string into local wall-clock time.
///
/// RFC 3339 timestamps are converted to the local zone. Timestamps without an
/// offset and plain `YYYY-MM-DD` dates are taken as local already; a plain
/// date means midnight of that calendar day. Every other shape, including
/// slash-separated dates such as `01/05/2024`, is rejected.
pub fn parse_date(date_str: &str) -> Option<NaiveDateTime> {
    let s = date_str.trim();

    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.with_timezone(&Local).naive_local());
    }

    NAIVE_DATE_TIME_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(s, fmt).ok())
        .or_else(|| {
            NaiveDate::parse_from_str(s, "%Y-%m-%d")
                .ok()
                .map(|d| d.and_time(NaiveTime::MIN))
        })
}

/// Formats `date_str` relative to the local current day.
pub fn format_date(date_str: &str, format: DateFormat) -> String {
    format_date_on(date_str, format, Local::now().date_naive())
}

/// Formats `date_str` with `today` as the reference day for relative output.
pub fn format_date_on(date_str: &str, format: DateFormat, today: NaiveDate) -> String {
    let Some(date) = parse_date(date_str).map(|dt| dt.date()) else {
        tracing::debug!(input = date_str, "unparsable date");
        return INVALID_DATE.to_string();
    };

    match format {
        DateFormat::Relative if date == today => "Today".to_string(),
        DateFormat::Relative if today.pred_opt() == Some(date) => "Yesterday".to_string(),
        DateFormat::Relative | DateFormat::Short => date.format("%b %-d").to_string(),
        DateFormat::Long => date.format("%B %-d, %Y").to_string(),
        DateFormat::Full => date.format("%A, %B %-d, %Y").to_string(),
    }
}

/// 12-hour clock time such as `"3:07 PM"`.
pub fn format_time(date_str: &str) -> String {
    match parse_date(date_str) {
        Some(dt) => dt.format("%-I:%M %p").to_string(),
        None => {
            tracing::debug!(input = date_str, "unparsable time");
            INVALID_DATE.to_string()
        }
    }
}
