//! Database entities module

pub mod training;
pub mod user;

pub use training::Entity as Training;
pub use user::Entity as User;
