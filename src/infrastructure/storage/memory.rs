//! In-memory repositories
//!
//! Backed by `DashMap`, used for development and tests. Mirrors the
//! relational store: unique emails, and deleting a user clears the owner
//! of its trainings. Writes that check another record before inserting
//! hold the store's write lock so the check and the insert cannot interleave.

use std::sync::atomic::{AtomicI64, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use dashmap::DashMap;
use tokio::sync::Mutex;
use tracing::debug;

use crate::domain::{
    DomainError, DomainResult, Repository, RepositoryProvider, Training, TrainingRepository,
    User, UserRepository,
};

#[derive(Default)]
struct InMemoryStore {
    users: DashMap<i64, User>,
    trainings: DashMap<i64, Training>,
    user_counter: AtomicI64,
    training_counter: AtomicI64,
    writes: Mutex<()>,
}

impl InMemoryStore {
    fn next_user_id(&self) -> i64 {
        self.user_counter.fetch_add(1, Ordering::SeqCst) + 1
    }

    fn next_training_id(&self) -> i64 {
        self.training_counter.fetch_add(1, Ordering::SeqCst) + 1
    }
}

fn sorted_by_id<T: Clone>(map: &DashMap<i64, T>) -> Vec<T> {
    let mut entries: Vec<(i64, T)> = map
        .iter()
        .map(|e| (*e.key(), e.value().clone()))
        .collect();
    entries.sort_by_key(|(id, _)| *id);
    entries.into_iter().map(|(_, v)| v).collect()
}

// ── Users ───────────────────────────────────────────────────────

pub struct InMemoryUserRepository {
    store: Arc<InMemoryStore>,
}

#[async_trait]
impl Repository<User, i64> for InMemoryUserRepository {
    async fn save(&self, mut user: User) -> DomainResult<User> {
        let _guard = self.store.writes.lock().await;

        let email_taken = self
            .store
            .users
            .iter()
            .any(|e| e.value().email == user.email && Some(*e.key()) != user.id());
        if email_taken {
            return Err(DomainError::Conflict(format!(
                "email '{}' is already registered",
                user.email
            )));
        }

        let id = match user.id() {
            Some(id) if !self.store.users.contains_key(&id) => {
                return Err(DomainError::not_found("User", "id", id));
            }
            Some(id) => id,
            None => {
                let id = self.store.next_user_id();
                user.assign_id(id);
                id
            }
        };

        self.store.users.insert(id, user.clone());
        debug!(user_id = id, "User stored in memory");
        Ok(user)
    }

    async fn find_by_id(&self, id: i64) -> DomainResult<Option<User>> {
        Ok(self.store.users.get(&id).map(|u| u.value().clone()))
    }

    async fn find_all(&self) -> DomainResult<Vec<User>> {
        Ok(sorted_by_id(&self.store.users))
    }

    async fn exists_by_id(&self, id: i64) -> DomainResult<bool> {
        Ok(self.store.users.contains_key(&id))
    }

    async fn delete_by_id(&self, id: i64) -> DomainResult<()> {
        let _guard = self.store.writes.lock().await;

        if self.store.users.remove(&id).is_some() {
            for mut training in self.store.trainings.iter_mut() {
                if training.user_id == Some(id) {
                    training.user_id = None;
                }
            }
        }
        Ok(())
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn find_by_email(&self, email: &str) -> DomainResult<Option<User>> {
        Ok(self
            .store
            .users
            .iter()
            .find(|e| e.value().email == email)
            .map(|e| e.value().clone()))
    }
}

// ── Trainings ───────────────────────────────────────────────────

pub struct InMemoryTrainingRepository {
    store: Arc<InMemoryStore>,
}

#[async_trait]
impl Repository<Training, i64> for InMemoryTrainingRepository {
    async fn save(&self, mut training: Training) -> DomainResult<Training> {
        let _guard = self.store.writes.lock().await;

        if let Some(user_id) = training.user_id {
            if !self.store.users.contains_key(&user_id) {
                return Err(DomainError::not_found("User", "id", user_id));
            }
        }

        let id = match training.id() {
            Some(id) if !self.store.trainings.contains_key(&id) => {
                return Err(DomainError::not_found("Training", "id", id));
            }
            Some(id) => id,
            None => {
                let id = self.store.next_training_id();
                training.assign_id(id);
                id
            }
        };

        self.store.trainings.insert(id, training.clone());
        debug!(training_id = id, "Training stored in memory");
        Ok(training)
    }

    async fn find_by_id(&self, id: i64) -> DomainResult<Option<Training>> {
        Ok(self.store.trainings.get(&id).map(|t| t.value().clone()))
    }

    async fn find_all(&self) -> DomainResult<Vec<Training>> {
        Ok(sorted_by_id(&self.store.trainings))
    }

    async fn exists_by_id(&self, id: i64) -> DomainResult<bool> {
        Ok(self.store.trainings.contains_key(&id))
    }

    async fn delete_by_id(&self, id: i64) -> DomainResult<()> {
        self.store.trainings.remove(&id);
        Ok(())
    }
}

impl TrainingRepository for InMemoryTrainingRepository {}

// ── Provider ────────────────────────────────────────────────────

/// Repository provider over a single shared in-memory store.
pub struct InMemoryRepositoryProvider {
    users: InMemoryUserRepository,
    trainings: InMemoryTrainingRepository,
}

impl InMemoryRepositoryProvider {
    pub fn new() -> Self {
        let store = Arc::new(InMemoryStore::default());
        Self {
            users: InMemoryUserRepository {
                store: store.clone(),
            },
            trainings: InMemoryTrainingRepository { store },
        }
    }
}

impl Default for InMemoryRepositoryProvider {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl RepositoryProvider for InMemoryRepositoryProvider {
    fn users(&self) -> &dyn UserRepository {
        &self.users
    }

    fn trainings(&self) -> &dyn TrainingRepository {
        &self.trainings
    }

    async fn ping(&self) -> DomainResult<()> {
        Ok(())
    }
}
