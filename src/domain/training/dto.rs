//! Training transfer objects

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::{Validate, ValidationError};

use super::ActivityType;
use crate::domain::user::UserDto;

/// Training as returned to API callers, with the owner resolved.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct TrainingDto {
    pub id: Option<i64>,
    pub user: Option<UserDto>,
    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,
    pub activity_type: ActivityType,
    pub distance: f64,
    pub average_speed: f64,
}

/// Payload for creating or replacing a training.
///
/// `id` must be absent on create requests.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
#[validate(schema(function = "validate_time_range", skip_on_field_errors = false))]
pub struct CreateTrainingDto {
    #[serde(default)]
    pub id: Option<i64>,
    pub user_id: i64,
    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,
    pub activity_type: ActivityType,
    #[validate(range(min = 0.0, message = "distance must not be negative"))]
    pub distance: f64,
    #[validate(range(min = 0.0, message = "average speed must not be negative"))]
    pub average_speed: f64,
}

fn validate_time_range(dto: &CreateTrainingDto) -> Result<(), ValidationError> {
    if dto.end_time < dto.start_time {
        let mut err = ValidationError::new("time_range");
        err.message = Some("end time must not be before start time".into());
        return Err(err);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn dto(distance: f64, end_hour: u32) -> CreateTrainingDto {
        CreateTrainingDto {
            id: None,
            user_id: 1,
            start_time: Utc.with_ymd_and_hms(2024, 1, 1, 8, 0, 0).unwrap(),
            end_time: Utc.with_ymd_and_hms(2024, 1, 1, end_hour, 0, 0).unwrap(),
            activity_type: ActivityType::Running,
            distance,
            average_speed: 10.0,
        }
    }

    #[test]
    fn accepts_well_formed_training() {
        assert!(dto(10.0, 9).validate().is_ok());
    }

    #[test]
    fn rejects_negative_distance() {
        let errors = dto(-1.0, 9).validate().unwrap_err();
        assert!(errors.field_errors().contains_key("distance"));
    }

    #[test]
    fn rejects_end_before_start() {
        assert!(dto(10.0, 7).validate().is_err());
    }

    #[test]
    fn deserializes_camel_case_payload() {
        let json = serde_json::json!({
            "userId": 1,
            "startTime": "2024-01-01T08:00:00Z",
            "endTime": "2024-01-01T09:00:00Z",
            "activityType": "RUNNING",
            "distance": 10.0,
            "averageSpeed": 10.0
        });
        let parsed: CreateTrainingDto = serde_json::from_value(json).unwrap();
        assert_eq!(parsed, dto(10.0, 9));
    }
}
