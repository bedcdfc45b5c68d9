use time::Date;

use crate::datetime::{format_date, format_week, parse_date, parse_week};
use crate::error::DcError;

/// The scheduling intents accepted on the command line. At most one of the
/// five may be set; `inbox` is a no-op alias for the default and never
/// conflicts with anything.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SchedulingOptions {
    pub today: bool,
    pub tomorrow: bool,
    pub date: Option<String>,
    pub this_week: bool,
    pub week: Option<String>,
    pub inbox: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResolvedTarget {
    Backlog,
    OnDate(String),
    OnWeek(String),
}

#[derive(Debug, Clone, Copy)]
enum Intent<'a> {
    Today,
    Tomorrow,
    Date(&'a str),
    ThisWeek,
    Week(&'a str),
}

impl Intent<'_> {
    fn flag_name(&self) -> &'static str {
        match self {
            Self::Today => "today",
            Self::Tomorrow => "tomorrow",
            Self::Date(_) => "date",
            Self::ThisWeek => "this-week",
            Self::Week(_) => "week",
        }
    }
}

/// Resolves the requested scheduling options into a single target.
///
/// `today` is the caller's local calendar date; passing it in keeps the
/// resolver deterministic under test.
pub fn resolve(options: &SchedulingOptions, today: Date) -> Result<ResolvedTarget, DcError> {
    let mut active = Vec::new();

    if options.today {
        active.push(Intent::Today);
    }
    if options.tomorrow {
        active.push(Intent::Tomorrow);
    }
    if let Some(date) = options.date.as_deref().filter(|value| !value.is_empty()) {
        active.push(Intent::Date(date));
    }
    if options.this_week {
        active.push(Intent::ThisWeek);
    }
    if let Some(week) = options.week.as_deref().filter(|value| !value.is_empty()) {
        active.push(Intent::Week(week));
    }

    match active.as_slice() {
        [] => Ok(ResolvedTarget::Backlog),
        [only] => resolve_single(*only, today),
        conflicting => {
            let mut flags: Vec<String> = conflicting
                .iter()
                .map(|intent| intent.flag_name().to_string())
                .collect();
            flags.sort();
            Err(DcError::ambiguous_options(flags))
        }
    }
}

fn resolve_single(intent: Intent<'_>, today: Date) -> Result<ResolvedTarget, DcError> {
    match intent {
        Intent::Today => Ok(ResolvedTarget::OnDate(format_date(today))),
        Intent::Tomorrow => {
            let tomorrow = today
                .next_day()
                .ok_or_else(|| DcError::invalid_date("date out of range"))?;
            Ok(ResolvedTarget::OnDate(format_date(tomorrow)))
        }
        Intent::Date(text) => Ok(ResolvedTarget::OnDate(parse_date(text)?)),
        Intent::ThisWeek => Ok(ResolvedTarget::OnWeek(format_week(today))),
        Intent::Week(text) => Ok(ResolvedTarget::OnWeek(parse_week(text)?)),
    }
}
