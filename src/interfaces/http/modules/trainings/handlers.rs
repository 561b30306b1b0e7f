//! Training API handlers

use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    Json,
};

use super::dto::ActivityTypeQuery;
use crate::application::query::{parse_date, start_of_day};
use crate::application::TrainingService;
use crate::domain::{ActivityType, CreateTrainingDto, TrainingDto};
use crate::interfaces::http::common::{
    domain_error, not_found, ok, ApiError, ApiPath, ApiQuery, ApiResponse, ApiResult,
    ValidatedJson,
};

#[derive(Clone)]
pub struct TrainingHandlerState {
    pub training_service: Arc<TrainingService>,
}

#[utoipa::path(
    get,
    path = "/v1/trainings",
    tag = "Trainings",
    responses((status = 200, description = "All trainings, ascending id", body = ApiResponse<Vec<TrainingDto>>))
)]
pub async fn list_trainings(
    State(state): State<TrainingHandlerState>,
) -> ApiResult<Vec<TrainingDto>> {
    ok(state
        .training_service
        .find_all_trainings()
        .await
        .map_err(domain_error)?)
}

/// `GET /v1/trainings/{id}` lists by *owner* id; the same path segment
/// addresses a single training on PUT and DELETE.
#[utoipa::path(
    get,
    path = "/v1/trainings/{id}",
    tag = "Trainings",
    params(("id" = i64, Path, description = "Owner (user) ID")),
    responses((status = 200, description = "Trainings of the user", body = ApiResponse<Vec<TrainingDto>>))
)]
pub async fn list_by_user(
    State(state): State<TrainingHandlerState>,
    ApiPath(user_id): ApiPath<i64>,
) -> ApiResult<Vec<TrainingDto>> {
    ok(state
        .training_service
        .find_trainings_by_user_id(user_id)
        .await
        .map_err(domain_error)?)
}

#[utoipa::path(
    get,
    path = "/v1/trainings/activityType",
    tag = "Trainings",
    params(ActivityTypeQuery),
    responses(
        (status = 200, description = "Trainings of that activity", body = ApiResponse<Vec<TrainingDto>>),
        (status = 400, description = "Unknown activity type")
    )
)]
pub async fn list_by_activity(
    State(state): State<TrainingHandlerState>,
    ApiQuery(query): ApiQuery<ActivityTypeQuery>,
) -> ApiResult<Vec<TrainingDto>> {
    let activity: ActivityType = query.activity_type.parse().map_err(domain_error)?;

    ok(state
        .training_service
        .find_trainings_by_activity(activity)
        .await
        .map_err(domain_error)?)
}

#[utoipa::path(
    get,
    path = "/v1/trainings/finished/{date}",
    tag = "Trainings",
    params(("date" = String, Path, description = "yyyy-MM-dd, compared at 00:00 UTC")),
    responses(
        (status = 200, description = "Trainings that ended after the date", body = ApiResponse<Vec<TrainingDto>>),
        (status = 400, description = "Unparsable date")
    )
)]
pub async fn list_finished_after(
    State(state): State<TrainingHandlerState>,
    ApiPath(date): ApiPath<String>,
) -> ApiResult<Vec<TrainingDto>> {
    let date = parse_date(&date).map_err(domain_error)?;

    ok(state
        .training_service
        .find_completed_trainings_after(start_of_day(date))
        .await
        .map_err(domain_error)?)
}

#[utoipa::path(
    post,
    path = "/v1/trainings",
    tag = "Trainings",
    request_body = CreateTrainingDto,
    responses(
        (status = 201, description = "Training created", body = ApiResponse<TrainingDto>),
        (status = 400, description = "Request carries an id"),
        (status = 404, description = "Owner does not exist"),
        (status = 422, description = "Validation error")
    )
)]
pub async fn create_training(
    State(state): State<TrainingHandlerState>,
    ValidatedJson(dto): ValidatedJson<CreateTrainingDto>,
) -> Result<(StatusCode, Json<ApiResponse<TrainingDto>>), ApiError> {
    let created = state
        .training_service
        .create_training(dto)
        .await
        .map_err(domain_error)?;
    Ok((StatusCode::CREATED, Json(ApiResponse::success(created))))
}

#[utoipa::path(
    put,
    path = "/v1/trainings/{id}",
    tag = "Trainings",
    params(("id" = i64, Path, description = "Training ID")),
    request_body = CreateTrainingDto,
    responses(
        (status = 200, description = "Training updated", body = ApiResponse<TrainingDto>),
        (status = 404, description = "Training or owner not found")
    )
)]
pub async fn update_training(
    State(state): State<TrainingHandlerState>,
    ApiPath(id): ApiPath<i64>,
    ValidatedJson(dto): ValidatedJson<CreateTrainingDto>,
) -> ApiResult<TrainingDto> {
    match state
        .training_service
        .update_training(id, dto)
        .await
        .map_err(domain_error)?
    {
        Some(training) => ok(training),
        None => Err(not_found("Training", id)),
    }
}

#[utoipa::path(
    delete,
    path = "/v1/trainings/{id}",
    tag = "Trainings",
    params(("id" = i64, Path, description = "Training ID")),
    responses(
        (status = 204, description = "Training deleted"),
        (status = 404, description = "Not found")
    )
)]
pub async fn delete_training(
    State(state): State<TrainingHandlerState>,
    ApiPath(id): ApiPath<i64>,
) -> Result<StatusCode, ApiError> {
    if state
        .training_service
        .delete_training(id)
        .await
        .map_err(domain_error)?
    {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(not_found("Training", id))
    }
}
