use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, ActiveValue::NotSet, DatabaseConnection, EntityTrait, PaginatorTrait,
    QueryOrder, Set,
};
use tracing::debug;

use super::{db_err, write_err};
use crate::domain::{
    ActivityType, DomainError, DomainResult, Repository, Training, TrainingRepository,
};
use crate::infrastructure::database::entities::{training, user};

pub struct SeaOrmTrainingRepository {
    db: DatabaseConnection,
}

impl SeaOrmTrainingRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

// ── Conversion helpers ──────────────────────────────────────────

fn activity_to_domain(a: training::ActivityType) -> ActivityType {
    match a {
        training::ActivityType::Running => ActivityType::Running,
        training::ActivityType::Cycling => ActivityType::Cycling,
        training::ActivityType::Walking => ActivityType::Walking,
        training::ActivityType::Swimming => ActivityType::Swimming,
        training::ActivityType::Tennis => ActivityType::Tennis,
    }
}

fn activity_to_entity(a: ActivityType) -> training::ActivityType {
    match a {
        ActivityType::Running => training::ActivityType::Running,
        ActivityType::Cycling => training::ActivityType::Cycling,
        ActivityType::Walking => training::ActivityType::Walking,
        ActivityType::Swimming => training::ActivityType::Swimming,
        ActivityType::Tennis => training::ActivityType::Tennis,
    }
}

fn model_to_domain(m: training::Model) -> Training {
    Training::new(
        m.user_id,
        m.start_time,
        m.end_time,
        activity_to_domain(m.activity_type),
        m.distance,
        m.average_speed,
    )
    .with_id(m.id)
}

#[async_trait]
impl Repository<Training, i64> for SeaOrmTrainingRepository {
    async fn save(&self, t: Training) -> DomainResult<Training> {
        if let Some(user_id) = t.user_id {
            let owners = user::Entity::find_by_id(user_id)
                .count(&self.db)
                .await
                .map_err(db_err)?;
            if owners == 0 {
                return Err(DomainError::not_found("User", "id", user_id));
            }
        }

        let id = t.id();
        let mut active = training::ActiveModel {
            id: NotSet,
            user_id: Set(t.user_id),
            start_time: Set(t.start_time),
            end_time: Set(t.end_time),
            activity_type: Set(activity_to_entity(t.activity_type)),
            distance: Set(t.distance),
            average_speed: Set(t.average_speed),
        };

        let result = match id {
            None => active.insert(&self.db).await,
            Some(id) => {
                active.id = Set(id);
                active.update(&self.db).await
            }
        };
        let model = result.map_err(|e| write_err(e, "Training", id))?;

        debug!(training_id = model.id, user_id = ?model.user_id, "Training saved");
        Ok(model_to_domain(model))
    }

    async fn find_by_id(&self, id: i64) -> DomainResult<Option<Training>> {
        let model = training::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(db_err)?;
        Ok(model.map(model_to_domain))
    }

    async fn find_all(&self) -> DomainResult<Vec<Training>> {
        let models = training::Entity::find()
            .order_by_asc(training::Column::Id)
            .all(&self.db)
            .await
            .map_err(db_err)?;
        Ok(models.into_iter().map(model_to_domain).collect())
    }

    async fn exists_by_id(&self, id: i64) -> DomainResult<bool> {
        let count = training::Entity::find_by_id(id)
            .count(&self.db)
            .await
            .map_err(db_err)?;
        Ok(count > 0)
    }

    async fn delete_by_id(&self, id: i64) -> DomainResult<()> {
        training::Entity::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(db_err)?;
        Ok(())
    }
}

impl TrainingRepository for SeaOrmTrainingRepository {}
