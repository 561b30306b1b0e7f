//! Query parameters for user endpoints

use serde::Deserialize;
use utoipa::IntoParams;

#[derive(Debug, Deserialize, IntoParams)]
pub struct EmailQuery {
    /// Exact email to look up
    pub email: String,
}
