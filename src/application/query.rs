//! Field predicates used by the list queries.
//!
//! Every comparison is strict; a record sitting exactly on the boundary
//! does not match.

use chrono::{DateTime, NaiveDate, Utc};

use crate::domain::{ActivityType, DomainError, DomainResult, Training, User};

/// Date format of date-only path parameters
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Parse a `yyyy-MM-dd` date.
pub fn parse_date(raw: &str) -> DomainResult<NaiveDate> {
    NaiveDate::parse_from_str(raw, DATE_FORMAT).map_err(|_| {
        DomainError::Validation(format!("invalid date '{}', expected yyyy-MM-dd", raw))
    })
}

/// Born strictly before `date`.
pub fn is_older_than(user: &User, date: NaiveDate) -> bool {
    date > user.birthdate
}

/// Owned by `user_id`. Owner-less trainings never match.
pub fn is_owned_by(training: &Training, user_id: i64) -> bool {
    training.user_id == Some(user_id)
}

pub fn has_activity(training: &Training, activity_type: ActivityType) -> bool {
    training.activity_type == activity_type
}

/// Ended strictly after `instant`.
pub fn ended_after(training: &Training, instant: DateTime<Utc>) -> bool {
    training.end_time > instant
}

/// Start of `date` in UTC, the instant a date-only query compares against.
pub fn start_of_day(date: NaiveDate) -> DateTime<Utc> {
    date.and_time(chrono::NaiveTime::MIN).and_utc()
}
