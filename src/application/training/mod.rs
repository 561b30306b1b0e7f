//! Training use-cases: lifecycle and filtered listings.

pub mod mapper;
pub mod service;

pub use service::TrainingService;
