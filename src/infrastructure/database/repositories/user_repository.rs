use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, ActiveValue::NotSet, ColumnTrait, DatabaseConnection, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder, Set, SqlErr,
};
use tracing::debug;

use super::{db_err, write_err};
use crate::domain::{DomainError, DomainResult, Repository, User, UserRepository};
use crate::infrastructure::database::entities::user;

pub struct SeaOrmUserRepository {
    db: DatabaseConnection,
}

impl SeaOrmUserRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

// ── Conversion helpers ──────────────────────────────────────────

fn model_to_domain(model: user::Model) -> User {
    User::persisted(
        model.id,
        model.first_name,
        model.last_name,
        model.birthdate,
        model.email,
    )
}

// ── Repository implementation ───────────────────────────────────

#[async_trait]
impl Repository<User, i64> for SeaOrmUserRepository {
    async fn save(&self, u: User) -> DomainResult<User> {
        let id = u.id();
        let email = u.email.clone();

        let mut active = user::ActiveModel {
            id: NotSet,
            first_name: Set(u.first_name),
            last_name: Set(u.last_name),
            birthdate: Set(u.birthdate),
            email: Set(u.email),
        };

        let result = match id {
            None => active.insert(&self.db).await,
            Some(id) => {
                active.id = Set(id);
                active.update(&self.db).await
            }
        };

        let model = result.map_err(|e| match e.sql_err() {
            Some(SqlErr::UniqueConstraintViolation(_)) => {
                DomainError::Conflict(format!("email '{}' is already registered", email))
            }
            _ => write_err(e, "User", id),
        })?;

        debug!(user_id = model.id, "User saved");
        Ok(model_to_domain(model))
    }

    async fn find_by_id(&self, id: i64) -> DomainResult<Option<User>> {
        let model = user::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(db_err)?;
        Ok(model.map(model_to_domain))
    }

    async fn find_all(&self) -> DomainResult<Vec<User>> {
        let models = user::Entity::find()
            .order_by_asc(user::Column::Id)
            .all(&self.db)
            .await
            .map_err(db_err)?;
        Ok(models.into_iter().map(model_to_domain).collect())
    }

    async fn exists_by_id(&self, id: i64) -> DomainResult<bool> {
        let count = user::Entity::find_by_id(id)
            .count(&self.db)
            .await
            .map_err(db_err)?;
        Ok(count > 0)
    }

    async fn delete_by_id(&self, id: i64) -> DomainResult<()> {
        // trainings.user_id is cleared by ON DELETE SET NULL
        let result = user::Entity::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(db_err)?;
        debug!(user_id = id, rows = result.rows_affected, "User delete executed");
        Ok(())
    }
}

#[async_trait]
impl UserRepository for SeaOrmUserRepository {
    async fn find_by_email(&self, email: &str) -> DomainResult<Option<User>> {
        let model = user::Entity::find()
            .filter(user::Column::Email.eq(email))
            .one(&self.db)
            .await
            .map_err(db_err)?;
        Ok(model.map(model_to_domain))
    }
}
