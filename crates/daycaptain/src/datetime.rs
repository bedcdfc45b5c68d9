use std::sync::LazyLock;

use regex::Regex;
use time::Date;
use time::format_description::FormatItem;
use time::macros::format_description;

use crate::error::DcError;

const ISO8601_DATE: &[FormatItem<'static>] = format_description!("[year]-[month]-[day]");

static ISO_WEEK_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(\d{4})-W(\d{1,2})$").unwrap());

/// Renders the calendar date as `YYYY-MM-DD`.
pub fn format_date(date: Date) -> String {
    format!(
        "{:04}-{:02}-{:02}",
        date.year(),
        u8::from(date.month()),
        date.day()
    )
}

/// Renders the ISO-8601 week designator, e.g. `2021-W7` or `2021-W33`.
///
/// The week number is deliberately not zero-padded; the service expects
/// `2021-W1` rather than `2021-W01` in the request path.
pub fn format_week(date: Date) -> String {
    let (year, week, _) = date.to_iso_week_date();
    format!("{}-W{}", year, week)
}

/// Parses a strict `YYYY-MM-DD` date and returns it in canonical form.
pub fn parse_date(text: &str) -> Result<String, DcError> {
    let parsed = Date::parse(text, ISO8601_DATE)
        .map_err(|err| DcError::invalid_date(err.to_string()))?;
    Ok(format_date(parsed))
}

/// Validates a `YYYY-Www` week designator and returns it unchanged.
///
/// Accepts one- and two-digit week numbers, years from 2020 onwards,
/// weeks 1 through 53.
pub fn parse_week(text: &str) -> Result<String, DcError> {
    let captures = ISO_WEEK_RE
        .captures(text)
        .ok_or_else(|| DcError::invalid_week(format!("invalid ISO week format: {}", text)))?;

    let year: i32 = captures[1]
        .parse()
        .map_err(|err| DcError::invalid_week(format!("unexpected error: {}", err)))?;
    let week: u8 = captures[2]
        .parse()
        .map_err(|err| DcError::invalid_week(format!("unexpected error: {}", err)))?;

    if year < 2020 {
        return Err(DcError::invalid_week("year must be >= 2020"));
    }

    if !(1..=53).contains(&week) {
        return Err(DcError::invalid_week("week must be between 1 and 53"));
    }

    Ok(text.to_string())
}
