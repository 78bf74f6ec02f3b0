use chrono::{DateTime, Datelike, NaiveDate};
use common_types::{GrowingTime, Photo};

pub const UNKNOWN_AGE: &str = "unknown age";

/// What the prompt gets to know about a photo.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PromptContext {
    pub name: String,
    pub location: String,
    /// Human readable age, e.g. `1 years 3 months`.
    pub age: String,
    pub detail: String,
}

#[must_use]
pub fn build_prompt_context(photo: &Photo, birth_date: NaiveDate) -> PromptContext {
    let age = age_in_months(photo.growing_time.as_ref(), birth_date)
        .map_or_else(|| UNKNOWN_AGE.to_string(), format_age);

    PromptContext {
        name: photo.name.clone(),
        location: photo.location.clone(),
        age,
        detail: photo.instructions.clone(),
    }
}

/// Age of the child in whole months.
///
/// Month counts are taken as-is. Dates are measured from `birth_date`.
/// Returns `None` for a missing growing time, text that is neither a number nor a
/// date, and dates before the birth date.
#[must_use]
pub fn age_in_months(growing_time: Option<&GrowingTime>, birth_date: NaiveDate) -> Option<u32> {
    let growing_time = growing_time?;
    if let Some(months) = growing_time.month_count() {
        return Some(months);
    }
    let GrowingTime::Text(text) = growing_time else {
        return None;
    };
    let date = parse_growing_date(text)?;
    months_between(birth_date, date)
}

/// Calendar months from `from` to `to`, counting a month only once its day is reached.
#[must_use]
pub fn months_between(from: NaiveDate, to: NaiveDate) -> Option<u32> {
    if to < from {
        return None;
    }
    let mut years = to.year() - from.year();
    let mut months = to.month() as i32 - from.month() as i32;
    if to.day() < from.day() {
        months -= 1;
    }
    if months < 0 {
        years -= 1;
        months += 12;
    }
    u32::try_from(years * 12 + months).ok()
}

#[must_use]
pub fn format_age(total_months: u32) -> String {
    let years = total_months / 12;
    let months = total_months % 12;
    format!("{years} years {months} months")
}

fn parse_growing_date(text: &str) -> Option<NaiveDate> {
    let text = text.trim();
    NaiveDate::parse_from_str(text, "%Y-%m-%d")
        .ok()
        .or_else(|| DateTime::parse_from_rfc3339(text).ok().map(|dt| dt.date_naive()))
}
