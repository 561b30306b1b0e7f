pub mod repositories;
pub mod training;
pub mod user;

// Re-export commonly used types
pub use repositories::{DomainResult, Repository, RepositoryProvider};
pub use training::{ActivityType, CreateTrainingDto, Training, TrainingDto, TrainingRepository};
pub use user::{User, UserDto, UserRepository, UserSimpleDto};

// Re-export DomainError from shared for convenience
pub use crate::shared::errors::DomainError;
