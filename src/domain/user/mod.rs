//! User aggregate
//!
//! Contains the User entity, its transfer objects, and the repository interface.

pub mod dto;
pub mod model;
pub mod repository;

pub use dto::{UserDto, UserSimpleDto};
pub use model::User;
pub use repository::UserRepository;
