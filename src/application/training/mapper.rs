//! Training <-> transfer object conversion
//!
//! The owner is stored as an id; both directions resolve it against the
//! user store.

use std::collections::HashMap;

use crate::application::user::mapper as user_mapper;
use crate::domain::{
    CreateTrainingDto, DomainError, DomainResult, Repository, Training, TrainingDto, UserDto,
    UserRepository,
};

/// Build an unsaved training from a request. The referenced user must exist.
pub async fn to_entity(
    dto: &CreateTrainingDto,
    users: &dyn UserRepository,
) -> DomainResult<Training> {
    if !users.exists_by_id(dto.user_id).await? {
        return Err(DomainError::not_found("User", "id", dto.user_id));
    }

    Ok(Training::new(
        Some(dto.user_id),
        dto.start_time,
        dto.end_time,
        dto.activity_type,
        dto.distance,
        dto.average_speed,
    ))
}

pub fn to_dto(training: &Training, owner: Option<UserDto>) -> TrainingDto {
    TrainingDto {
        id: training.id(),
        user: owner,
        start_time: training.start_time,
        end_time: training.end_time,
        activity_type: training.activity_type,
        distance: training.distance,
        average_speed: training.average_speed,
    }
}

/// Map a batch of trainings, looking up each distinct owner once.
pub async fn to_dtos(
    trainings: &[Training],
    users: &dyn UserRepository,
) -> DomainResult<Vec<TrainingDto>> {
    let mut owners: HashMap<i64, Option<UserDto>> = HashMap::new();

    for user_id in trainings.iter().filter_map(|t| t.user_id) {
        if !owners.contains_key(&user_id) {
            let owner = users.find_by_id(user_id).await?;
            owners.insert(user_id, owner.as_ref().map(user_mapper::to_dto));
        }
    }

    Ok(trainings
        .iter()
        .map(|t| {
            let owner = t.user_id.and_then(|id| owners.get(&id).cloned().flatten());
            to_dto(t, owner)
        })
        .collect())
}
