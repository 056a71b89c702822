//! The contact wizard and what it hands to the mail relay.

pub mod validation;
pub mod wizard;

pub use validation::{ContactField, FieldError};
pub use wizard::{
    ContactFields, ContactWizard, FieldErrors, Step, Submission, SubmitRefused, SubmitStatus,
};

use serde::{Deserialize, Serialize};
use time::{OffsetDateTime, macros::format_description};

/// Template parameters of one contact message.
#[derive(Clone, Eq, PartialEq, Debug, Hash, Serialize, Deserialize)]
pub struct ContactPayload {
    pub name: String,
    pub email: String,
    pub message: String,
    /// When the visitor sent it, already formatted for reading.
    pub date: String,
    /// Fixed label of the recipient.
    pub to_name: String,
}

/// Formats a submission time like `October 19, 2026 at 03:45 PM (UTC+02:00)`.
#[must_use]
pub fn format_submission_date(now: OffsetDateTime) -> String {
    let format = format_description!(
        "[month repr:long] [day padding:none], [year] at [hour repr:12]:[minute] [period]"
    );
    let date = now
        .format(&format)
        .unwrap_or_else(|_| now.date().to_string());

    let offset = now.offset();
    let zone = if offset.is_utc() {
        "UTC".to_owned()
    } else {
        let sign = if offset.is_negative() { '-' } else { '+' };
        format!(
            "UTC{sign}{:02}:{:02}",
            offset.whole_hours().unsigned_abs(),
            offset.minutes_past_hour().unsigned_abs()
        )
    };

    format!("{date} ({zone})")
}

#[cfg(test)]
mod tests {
    use crate::contact::format_submission_date;
    use time::macros::datetime;

    #[test]
    fn submission_date_formats() {
        assert_eq!(
            format_submission_date(datetime!(2026-10-19 15:45 UTC)),
            "October 19, 2026 at 03:45 PM (UTC)"
        );
        assert_eq!(
            format_submission_date(datetime!(2026-03-05 09:05 +02:00)),
            "March 5, 2026 at 09:05 AM (UTC+02:00)"
        );
        assert_eq!(
            format_submission_date(datetime!(2026-03-05 23:30 -05:30)),
            "March 5, 2026 at 11:30 PM (UTC-05:30)"
        );
    }
}
