//! # Fitness Tracker
//!
//! REST service for users and the trainings they log.
//!
//! ## Architecture
//!
//! The project follows Clean Architecture principles:
//!
//! - **domain**: Entities, transfer objects and repository traits
//! - **application**: User and training services, mappers, query predicates
//! - **infrastructure**: SeaORM persistence (SQLite) and the in-memory store
//! - **interfaces**: REST API with Swagger documentation
//! - **shared**: Error types and shutdown coordination

pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;
pub mod interfaces;
pub mod server;
pub mod shared;

pub use config::{default_config_path, AppConfig};

// Re-export database types for easy access
pub use infrastructure::{init_database, DatabaseConfig, SeaOrmRepositoryProvider};

// Re-export API router
pub use interfaces::http::{create_api_router, ApiState};
