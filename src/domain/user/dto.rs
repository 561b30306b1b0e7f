//! User transfer objects

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

/// User as exchanged with API callers.
///
/// `id` must be absent on create requests.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UserDto {
    #[serde(default)]
    pub id: Option<i64>,
    #[validate(length(min = 1, message = "first name must not be empty"))]
    pub first_name: String,
    #[validate(length(min = 1, message = "last name must not be empty"))]
    pub last_name: String,
    /// Calendar date, `yyyy-MM-dd`
    #[schema(value_type = String, format = Date, example = "1990-01-01")]
    pub birthdate: NaiveDate,
    #[validate(email(message = "email must be a valid address"))]
    pub email: String,
}

/// Compact listing entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UserSimpleDto {
    pub id: Option<i64>,
    pub first_name: String,
    pub last_name: String,
}
