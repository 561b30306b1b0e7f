//! User management service: application-layer orchestration
//!
//! All user-related business logic lives here.
//! HTTP handlers should be thin wrappers that delegate to this service.

use std::sync::Arc;

use chrono::NaiveDate;
use tracing::{debug, info};

use super::mapper;
use crate::application::query;
use crate::domain::{
    DomainError, DomainResult, Repository, RepositoryProvider, UserDto, UserSimpleDto,
};

/// User service: owns the user lifecycle and user queries.
pub struct UserService {
    repos: Arc<dyn RepositoryProvider>,
}

impl UserService {
    pub fn new(repos: Arc<dyn RepositoryProvider>) -> Self {
        Self { repos }
    }

    // ── Commands (mutations) ────────────────────────────────────

    /// Persist a new user. Fails if the DTO already carries an id.
    pub async fn create_user(&self, dto: UserDto) -> DomainResult<UserDto> {
        info!(email = %dto.email, "Creating user");

        if let Some(id) = dto.id {
            return Err(DomainError::InvalidOperation(format!(
                "User already has DB id {}, update is not permitted through create",
                id
            )));
        }

        let created = self.repos.users().save(mapper::to_entity(&dto)).await?;
        info!(user_id = ?created.id(), "User created");
        Ok(mapper::to_dto(&created))
    }

    /// Replace every field of an existing user. `None` if the id is unknown.
    pub async fn update_user(&self, id: i64, dto: UserDto) -> DomainResult<Option<UserDto>> {
        let Some(mut user) = self.repos.users().find_by_id(id).await? else {
            debug!(user_id = id, "Update skipped, user not found");
            return Ok(None);
        };

        user.first_name = dto.first_name;
        user.last_name = dto.last_name;
        user.birthdate = dto.birthdate;
        user.email = dto.email;

        let saved = self.repos.users().save(user).await?;
        info!(user_id = id, "User updated");
        Ok(Some(mapper::to_dto(&saved)))
    }

    /// `true` if a user was removed, `false` if there was none.
    pub async fn delete_user(&self, id: i64) -> DomainResult<bool> {
        if !self.repos.users().exists_by_id(id).await? {
            return Ok(false);
        }
        self.repos.users().delete_by_id(id).await?;
        info!(user_id = id, "User deleted");
        Ok(true)
    }

    // ── Queries ─────────────────────────────────────────────────

    pub async fn get_user(&self, id: i64) -> DomainResult<Option<UserDto>> {
        let user = self.repos.users().find_by_id(id).await?;
        debug!(user_id = id, found = user.is_some(), "User lookup");
        Ok(user.as_ref().map(mapper::to_dto))
    }

    pub async fn get_user_by_email(&self, email: &str) -> DomainResult<Option<UserDto>> {
        let user = self.repos.users().find_by_email(email).await?;
        Ok(user.as_ref().map(mapper::to_dto))
    }

    pub async fn find_all_users(&self) -> DomainResult<Vec<UserDto>> {
        let users = self.repos.users().find_all().await?;
        Ok(users.iter().map(mapper::to_dto).collect())
    }

    pub async fn find_all_users_simple(&self) -> DomainResult<Vec<UserSimpleDto>> {
        let users = self.repos.users().find_all().await?;
        Ok(users.iter().map(mapper::to_simple_dto).collect())
    }

    /// Users born strictly before `date`.
    pub async fn find_users_older_than(&self, date: NaiveDate) -> DomainResult<Vec<UserDto>> {
        let users = self.repos.users().find_all().await?;
        Ok(users
            .iter()
            .filter(|u| query::is_older_than(u, date))
            .map(mapper::to_dto)
            .collect())
    }
}
