//! Training domain entity

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::shared::errors::DomainError;

/// Kind of activity performed during a training
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ActivityType {
    #[serde(alias = "Running")]
    Running,
    #[serde(alias = "Cycling")]
    Cycling,
    #[serde(alias = "Walking")]
    Walking,
    #[serde(alias = "Swimming")]
    Swimming,
    #[serde(alias = "Tennis")]
    Tennis,
}

impl ActivityType {
    pub const ALL: [ActivityType; 5] = [
        Self::Running,
        Self::Cycling,
        Self::Walking,
        Self::Swimming,
        Self::Tennis,
    ];

    /// Human readable name
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Running => "Running",
            Self::Cycling => "Cycling",
            Self::Walking => "Walking",
            Self::Swimming => "Swimming",
            Self::Tennis => "Tennis",
        }
    }

    /// Wire name, as used in JSON and query strings
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Running => "RUNNING",
            Self::Cycling => "CYCLING",
            Self::Walking => "WALKING",
            Self::Swimming => "SWIMMING",
            Self::Tennis => "TENNIS",
        }
    }
}

impl std::fmt::Display for ActivityType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for ActivityType {
    type Err = DomainError;

    /// Accepts both the wire name and the display name, ignoring case.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|a| a.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| {
                let known: Vec<&str> = Self::ALL.iter().map(|a| a.display_name()).collect();
                DomainError::Validation(format!(
                    "unknown activity type '{}', expected one of {}",
                    s,
                    known.join(", ")
                ))
            })
    }
}

/// A single training session.
///
/// `user_id` is `None` once the owning user has been deleted.
#[derive(Debug, Clone, PartialEq)]
pub struct Training {
    id: Option<i64>,
    pub user_id: Option<i64>,
    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,
    pub activity_type: ActivityType,
    /// Kilometers
    pub distance: f64,
    /// Kilometers per hour
    pub average_speed: f64,
}

impl Training {
    pub fn new(
        user_id: Option<i64>,
        start_time: DateTime<Utc>,
        end_time: DateTime<Utc>,
        activity_type: ActivityType,
        distance: f64,
        average_speed: f64,
    ) -> Self {
        Self {
            id: None,
            user_id,
            start_time,
            end_time,
            activity_type,
            distance,
            average_speed,
        }
    }

    pub fn id(&self) -> Option<i64> {
        self.id
    }

    pub(crate) fn assign_id(&mut self, id: i64) {
        self.id = Some(id);
    }

    pub(crate) fn with_id(mut self, id: i64) -> Self {
        self.id = Some(id);
        self
    }
}
