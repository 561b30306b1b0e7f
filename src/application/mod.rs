pub mod query;
pub mod training;
pub mod user;

// Re-export key types for convenience
pub use training::TrainingService;
pub use user::UserService;
