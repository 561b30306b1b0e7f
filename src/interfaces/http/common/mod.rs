//! Shared HTTP building blocks

pub mod extract;
pub mod response;
pub mod validated_json;

pub use extract::{ApiPath, ApiQuery};
pub use response::*;
pub use validated_json::ValidatedJson;
