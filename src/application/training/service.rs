//! Training service: lifecycle and list queries over trainings.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use tracing::{debug, info};

use super::mapper;
use crate::application::query;
use crate::application::user::mapper as user_mapper;
use crate::domain::{
    ActivityType, CreateTrainingDto, DomainError, DomainResult, Repository, RepositoryProvider,
    Training, TrainingDto,
};

pub struct TrainingService {
    repos: Arc<dyn RepositoryProvider>,
}

impl TrainingService {
    pub fn new(repos: Arc<dyn RepositoryProvider>) -> Self {
        Self { repos }
    }

    async fn single_dto(&self, training: &Training) -> DomainResult<TrainingDto> {
        let owner = match training.user_id {
            Some(user_id) => self.repos.users().find_by_id(user_id).await?,
            None => None,
        };
        Ok(mapper::to_dto(training, owner.as_ref().map(user_mapper::to_dto)))
    }

    async fn filtered<P>(&self, predicate: P) -> DomainResult<Vec<TrainingDto>>
    where
        P: Fn(&Training) -> bool,
    {
        let matching: Vec<Training> = self
            .repos
            .trainings()
            .find_all()
            .await?
            .into_iter()
            .filter(|t| predicate(t))
            .collect();
        mapper::to_dtos(&matching, self.repos.users()).await
    }

    // ── Commands (mutations) ────────────────────────────────────

    /// Persist a new training for an existing user.
    ///
    /// Fails with `InvalidOperation` if the DTO carries an id and with
    /// `NotFound` if the user does not exist.
    pub async fn create_training(&self, dto: CreateTrainingDto) -> DomainResult<TrainingDto> {
        info!(user_id = dto.user_id, activity = %dto.activity_type, "Creating training");

        if let Some(id) = dto.id {
            return Err(DomainError::InvalidOperation(format!(
                "Training already has DB id {}, update is not permitted through create",
                id
            )));
        }

        let training = mapper::to_entity(&dto, self.repos.users()).await?;
        let created = self.repos.trainings().save(training).await?;
        info!(training_id = ?created.id(), "Training created");
        self.single_dto(&created).await
    }

    /// Replace every field of an existing training. `None` if the id is unknown.
    pub async fn update_training(
        &self,
        id: i64,
        dto: CreateTrainingDto,
    ) -> DomainResult<Option<TrainingDto>> {
        let Some(mut training) = self.repos.trainings().find_by_id(id).await? else {
            debug!(training_id = id, "Update skipped, training not found");
            return Ok(None);
        };

        let replacement = mapper::to_entity(&dto, self.repos.users()).await?;
        training.user_id = replacement.user_id;
        training.start_time = replacement.start_time;
        training.end_time = replacement.end_time;
        training.activity_type = replacement.activity_type;
        training.distance = replacement.distance;
        training.average_speed = replacement.average_speed;

        let saved = self.repos.trainings().save(training).await?;
        info!(training_id = id, "Training updated");
        self.single_dto(&saved).await.map(Some)
    }

    /// `true` if a training was removed, `false` if there was none.
    pub async fn delete_training(&self, id: i64) -> DomainResult<bool> {
        if !self.repos.trainings().exists_by_id(id).await? {
            return Ok(false);
        }
        self.repos.trainings().delete_by_id(id).await?;
        info!(training_id = id, "Training deleted");
        Ok(true)
    }

    // ── Queries ─────────────────────────────────────────────────

    pub async fn get_training(&self, id: i64) -> DomainResult<Option<TrainingDto>> {
        match self.repos.trainings().find_by_id(id).await? {
            Some(training) => self.single_dto(&training).await.map(Some),
            None => Ok(None),
        }
    }

    pub async fn find_all_trainings(&self) -> DomainResult<Vec<TrainingDto>> {
        self.filtered(|_| true).await
    }

    pub async fn find_trainings_by_user_id(&self, user_id: i64) -> DomainResult<Vec<TrainingDto>> {
        self.filtered(|t| query::is_owned_by(t, user_id)).await
    }

    pub async fn find_trainings_by_activity(
        &self,
        activity_type: ActivityType,
    ) -> DomainResult<Vec<TrainingDto>> {
        self.filtered(|t| query::has_activity(t, activity_type)).await
    }

    /// Trainings whose end time is strictly after `instant`.
    pub async fn find_completed_trainings_after(
        &self,
        instant: DateTime<Utc>,
    ) -> DomainResult<Vec<TrainingDto>> {
        self.filtered(|t| query::ended_after(t, instant)).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::user::UserService;
    use crate::domain::UserDto;
    use crate::infrastructure::storage::InMemoryRepositoryProvider;
    use chrono::{NaiveDate, TimeZone};

    struct Fixture {
        users: UserService,
        trainings: TrainingService,
    }

    fn fixture() -> Fixture {
        let repos: Arc<dyn RepositoryProvider> = Arc::new(InMemoryRepositoryProvider::new());
        Fixture {
            users: UserService::new(repos.clone()),
            trainings: TrainingService::new(repos),
        }
    }

    fn at(hour: u32, minute: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 1, 1, hour, minute, 0).unwrap()
    }

    fn user(email: &str) -> UserDto {
        UserDto {
            id: None,
            first_name: "Anna".into(),
            last_name: "Nowak".into(),
            birthdate: NaiveDate::from_ymd_opt(1990, 1, 1).unwrap(),
            email: email.into(),
        }
    }

    fn run(user_id: i64) -> CreateTrainingDto {
        CreateTrainingDto {
            id: None,
            user_id,
            start_time: at(8, 0),
            end_time: at(9, 0),
            activity_type: ActivityType::Running,
            distance: 10.0,
            average_speed: 10.0,
        }
    }

    #[tokio::test]
    async fn create_returns_training_with_owner() {
        let f = fixture();
        let owner = f.users.create_user(user("a@x.com")).await.unwrap();

        let created = f.trainings.create_training(run(1)).await.unwrap();

        assert_eq!(created.id, Some(1));
        assert_eq!(created.user, Some(owner));
        assert_eq!(created.activity_type, ActivityType::Running);
        assert_eq!(created.distance, 10.0);
        assert_eq!(f.trainings.get_training(1).await.unwrap(), Some(created));
    }

    #[tokio::test]
    async fn create_with_id_is_rejected() {
        let f = fixture();
        f.users.create_user(user("a@x.com")).await.unwrap();

        let err = f
            .trainings
            .create_training(CreateTrainingDto { id: Some(9), ..run(1) })
            .await
            .unwrap_err();

        assert!(matches!(err, DomainError::InvalidOperation(_)));
        assert!(f.trainings.find_all_trainings().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn create_for_unknown_user_is_not_found() {
        let f = fixture();
        let err = f.trainings.create_training(run(5)).await.unwrap_err();
        assert!(matches!(err, DomainError::NotFound { entity: "User", .. }));
        assert!(f.trainings.find_all_trainings().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn filters_by_activity() {
        let f = fixture();
        f.users.create_user(user("a@x.com")).await.unwrap();
        let created = f.trainings.create_training(run(1)).await.unwrap();

        let running = f
            .trainings
            .find_trainings_by_activity(ActivityType::Running)
            .await
            .unwrap();
        assert_eq!(running, vec![created]);

        let cycling = f
            .trainings
            .find_trainings_by_activity(ActivityType::Cycling)
            .await
            .unwrap();
        assert!(cycling.is_empty());
    }

    #[tokio::test]
    async fn completed_after_is_strict() {
        let f = fixture();
        f.users.create_user(user("a@x.com")).await.unwrap();
        f.trainings.create_training(run(1)).await.unwrap();

        let after_half_past = f
            .trainings
            .find_completed_trainings_after(at(8, 30))
            .await
            .unwrap();
        assert_eq!(after_half_past.len(), 1);

        let at_end = f
            .trainings
            .find_completed_trainings_after(at(9, 0))
            .await
            .unwrap();
        assert!(at_end.is_empty());
    }

    #[tokio::test]
    async fn filters_by_owner_and_skips_orphans() {
        let f = fixture();
        f.users.create_user(user("a@x.com")).await.unwrap();
        f.users.create_user(user("b@x.com")).await.unwrap();
        f.trainings.create_training(run(1)).await.unwrap();
        f.trainings.create_training(run(2)).await.unwrap();

        let first = f.trainings.find_trainings_by_user_id(1).await.unwrap();
        assert_eq!(first.len(), 1);
        assert_eq!(first[0].id, Some(1));

        f.users.delete_user(1).await.unwrap();
        assert!(f.trainings.find_trainings_by_user_id(1).await.unwrap().is_empty());

        let all = f.trainings.find_all_trainings().await.unwrap();
        assert_eq!(all.len(), 2);
        assert_eq!(all[0].user, None);
    }

    #[tokio::test]
    async fn update_replaces_fields_and_owner() {
        let f = fixture();
        f.users.create_user(user("a@x.com")).await.unwrap();
        let second = f.users.create_user(user("b@x.com")).await.unwrap();
        f.trainings.create_training(run(1)).await.unwrap();

        let replacement = CreateTrainingDto {
            activity_type: ActivityType::Tennis,
            distance: 2.0,
            average_speed: 4.0,
            ..run(2)
        };
        let updated = f
            .trainings
            .update_training(1, replacement)
            .await
            .unwrap()
            .unwrap();

        assert_eq!(updated.id, Some(1));
        assert_eq!(updated.user, Some(second));
        assert_eq!(updated.activity_type, ActivityType::Tennis);
        assert_eq!(updated.distance, 2.0);
        assert_eq!(updated.average_speed, 4.0);
    }

    #[tokio::test]
    async fn update_missing_training_is_a_no_op() {
        let f = fixture();
        f.users.create_user(user("a@x.com")).await.unwrap();
        let created = f.trainings.create_training(run(1)).await.unwrap();

        assert_eq!(f.trainings.update_training(99, run(1)).await.unwrap(), None);
        assert_eq!(f.trainings.find_all_trainings().await.unwrap(), vec![created]);
    }

    #[tokio::test]
    async fn update_to_unknown_owner_is_not_found() {
        let f = fixture();
        f.users.create_user(user("a@x.com")).await.unwrap();
        let created = f.trainings.create_training(run(1)).await.unwrap();

        let err = f
            .trainings
            .update_training(1, CreateTrainingDto { distance: 3.0, ..run(77) })
            .await
            .unwrap_err();

        assert!(matches!(err, DomainError::NotFound { entity: "User", .. }));
        assert_eq!(f.trainings.get_training(1).await.unwrap(), Some(created));
    }

    #[tokio::test]
    async fn delete_reports_presence_once() {
        let f = fixture();
        f.users.create_user(user("a@x.com")).await.unwrap();
        f.trainings.create_training(run(1)).await.unwrap();

        assert!(f.trainings.delete_training(1).await.unwrap());
        assert!(!f.trainings.delete_training(1).await.unwrap());
    }
}
