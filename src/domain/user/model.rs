//! User domain entity

use chrono::NaiveDate;

/// A person whose trainings are tracked.
///
/// The id is assigned by the store on first save and never changes
/// afterwards, so it is only readable from outside the crate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    id: Option<i64>,
    pub first_name: String,
    pub last_name: String,
    pub birthdate: NaiveDate,
    pub email: String,
}

impl User {
    pub fn new(
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        birthdate: NaiveDate,
        email: impl Into<String>,
    ) -> Self {
        Self {
            id: None,
            first_name: first_name.into(),
            last_name: last_name.into(),
            birthdate,
            email: email.into(),
        }
    }

    /// Rebuild a user that already has a row in the store.
    pub(crate) fn persisted(
        id: i64,
        first_name: String,
        last_name: String,
        birthdate: NaiveDate,
        email: String,
    ) -> Self {
        Self {
            id: Some(id),
            first_name,
            last_name,
            birthdate,
            email,
        }
    }

    pub fn id(&self) -> Option<i64> {
        self.id
    }

    pub(crate) fn assign_id(&mut self, id: i64) {
        self.id = Some(id);
    }
}
