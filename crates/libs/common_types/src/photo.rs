use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// A diary entry: one photo or video of the child.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Photo {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub location: String,
    /// Free-text description written by the uploader.
    #[serde(default)]
    pub instructions: String,
    /// Hosted image or video url.
    #[serde(default)]
    pub url: String,
    #[serde(default)]
    pub growing_time: Option<GrowingTime>,
    pub owner: String,
    /// Ids of the users that liked this photo.
    #[serde(default)]
    pub likes: Vec<String>,
    pub created_at: DateTime<Utc>,
}

/// The child's age when the photo was taken.
///
/// Older entries store a month count, newer ones the date the photo was taken.
/// Both shapes come in through the same json field. Numbers that are not a whole
/// month count (`6.5`, `-1`) are kept as [`GrowingTime::Fraction`] so one odd entry
/// does not break the whole diary.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, ToSchema)]
#[serde(untagged)]
pub enum GrowingTime {
    Months(u32),
    Fraction(f64),
    Text(String),
}

impl GrowingTime {
    /// The month count, if this growing time is one. Text holding only digits counts as well.
    ///
    /// Fractional counts are floored. Negative or non-finite numbers have no month count.
    #[must_use]
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn month_count(&self) -> Option<u32> {
        match self {
            Self::Months(months) => Some(*months),
            Self::Fraction(months) => (months.is_finite()
                && *months >= 0.0
                && *months < f64::from(u32::MAX))
            .then(|| months.floor() as u32),
            Self::Text(text) => text.trim().parse::<u32>().ok(),
        }
    }
}
