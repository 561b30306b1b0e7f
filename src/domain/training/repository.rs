use super::Training;
use crate::domain::repositories::Repository;

/// Training persistence; querying is done over `find_all` by the service.
pub trait TrainingRepository: Repository<Training, i64> {}
