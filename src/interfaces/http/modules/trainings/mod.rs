//! Trainings module: training CRUD and filtered listings

pub mod dto;
pub mod handlers;

pub use dto::*;
pub use handlers::*;
