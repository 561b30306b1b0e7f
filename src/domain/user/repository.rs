use async_trait::async_trait;

use super::User;
use crate::domain::repositories::Repository;
use crate::domain::DomainResult;

#[async_trait]
pub trait UserRepository: Repository<User, i64> {
    /// Exact match; case sensitivity follows the backing store.
    async fn find_by_email(&self, email: &str) -> DomainResult<Option<User>>;
}
