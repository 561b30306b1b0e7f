//! User use-cases: lifecycle, lookups, and age queries.

pub mod mapper;
pub mod service;

pub use service::UserService;
