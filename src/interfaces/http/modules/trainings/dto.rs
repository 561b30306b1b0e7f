//! Query parameters for training endpoints

use serde::Deserialize;
use utoipa::IntoParams;

#[derive(Debug, Deserialize, IntoParams)]
#[serde(rename_all = "camelCase")]
pub struct ActivityTypeQuery {
    /// `RUNNING`, `CYCLING`, `WALKING`, `SWIMMING` or `TENNIS`; case-insensitive
    pub activity_type: String,
}
