//! Domain models, persist parameters, form candidates, and view models.
//!
//! Each entity module follows the same split:
//! - The domain record (`Author`, `Genre`, `Book`) carries a persisted id and is converted
//!   from SeaORM entity models at the repository boundary.
//! - `*Param` holds validated fields for a save or full-record replace.
//! - `*Input` is the raw submitted form; `validate()` turns it into a `Submission` of a
//!   `*Form` candidate that can always re-populate the form.
//! - `*View` is the serializable shape handed to templates.

use chrono::NaiveDate;

pub mod author;
pub mod book;
pub mod genre;

/// Formats an optional date for display, e.g. `Dec 16, 1775`.
pub fn format_date(date: Option<NaiveDate>) -> String {
    date.map(|date| date.format("%b %-d, %Y").to_string())
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_present_and_absent_dates() {
        assert_eq!(
            format_date(NaiveDate::from_ymd_opt(1775, 12, 16)),
            "Dec 16, 1775"
        );
        assert_eq!(format_date(None), "");
    }
}
