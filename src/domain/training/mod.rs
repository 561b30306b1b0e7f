//! Training aggregate
//!
//! Contains the Training entity, activity types, transfer objects,
//! and the repository interface.

pub mod dto;
pub mod model;
pub mod repository;

pub use dto::{CreateTrainingDto, TrainingDto};
pub use model::{ActivityType, Training};
pub use repository::TrainingRepository;
