//! Database repository implementations
//!
//! Per-aggregate SeaORM repositories + unified RepositoryProvider.

pub mod repository_provider;
pub mod training_repository;
pub mod user_repository;

pub use repository_provider::SeaOrmRepositoryProvider;
pub use training_repository::SeaOrmTrainingRepository;
pub use user_repository::SeaOrmUserRepository;

use sea_orm::DbErr;

use crate::domain::DomainError;

fn db_err(e: DbErr) -> DomainError {
    DomainError::Storage(format!("Database error: {}", e))
}

/// Map a failed insert/update. An update that touched no row means the
/// id was never stored.
fn write_err(e: DbErr, entity: &'static str, id: Option<i64>) -> DomainError {
    match (e, id) {
        (DbErr::RecordNotUpdated, Some(id)) => DomainError::not_found(entity, "id", id),
        (e, _) => db_err(e),
    }
}
