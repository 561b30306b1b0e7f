//! Repository traits for the domain layer
//!
//! Contains:
//! - `Repository`: generic key-addressed store, implemented once per entity kind
//! - `RepositoryProvider`: unified access to all per-aggregate repositories
//! - `DomainResult`: standard result type for domain operations

use async_trait::async_trait;

use super::training::TrainingRepository;
use super::user::UserRepository;
use crate::shared::errors::DomainError;

/// Result type for domain operations
pub type DomainResult<T> = Result<T, DomainError>;

/// Generic persistence operations over one record kind.
#[async_trait]
pub trait Repository<T, Id>: Send + Sync
where
    T: Send + 'static,
    Id: Send + 'static,
{
    /// Insert when the record has no id yet, otherwise overwrite the
    /// existing row. Returns the record as stored, id included.
    async fn save(&self, record: T) -> DomainResult<T>;

    async fn find_by_id(&self, id: Id) -> DomainResult<Option<T>>;

    /// All records, ordered by ascending id.
    async fn find_all(&self) -> DomainResult<Vec<T>>;

    async fn exists_by_id(&self, id: Id) -> DomainResult<bool>;

    /// Deleting a missing id is not an error.
    async fn delete_by_id(&self, id: Id) -> DomainResult<()>;
}

// ── RepositoryProvider ──────────────────────────────────────────

/// Provides access to all domain repositories.
///
/// ```ignore
/// async fn handle(repos: &dyn RepositoryProvider) {
///     let user = repos.users().find_by_id(1).await?;
///     let all = repos.trainings().find_all().await?;
/// }
/// ```
#[async_trait]
pub trait RepositoryProvider: Send + Sync {
    fn users(&self) -> &dyn UserRepository;
    fn trainings(&self) -> &dyn TrainingRepository;

    /// Cheap round trip to the backing store, used by the health check.
    async fn ping(&self) -> DomainResult<()>;
}
