//! User API handlers
//!
//! Thin wrappers that parse the request, delegate to `UserService` and
//! wrap the result in `ApiResponse`.

use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    Json,
};

use super::dto::EmailQuery;
use crate::application::query::parse_date;
use crate::application::UserService;
use crate::domain::{UserDto, UserSimpleDto};
use crate::interfaces::http::common::{
    domain_error, not_found, ok, ApiError, ApiPath, ApiQuery, ApiResponse, ApiResult,
    ValidatedJson,
};

#[derive(Clone)]
pub struct UserHandlerState {
    pub user_service: Arc<UserService>,
}

#[utoipa::path(
    get,
    path = "/v1/users",
    tag = "Users",
    responses((status = 200, description = "All users, ascending id", body = ApiResponse<Vec<UserDto>>))
)]
pub async fn list_users(State(state): State<UserHandlerState>) -> ApiResult<Vec<UserDto>> {
    ok(state.user_service.find_all_users().await.map_err(domain_error)?)
}

#[utoipa::path(
    get,
    path = "/v1/users/simple",
    tag = "Users",
    responses((status = 200, description = "Id and names of all users", body = ApiResponse<Vec<UserSimpleDto>>))
)]
pub async fn list_users_simple(
    State(state): State<UserHandlerState>,
) -> ApiResult<Vec<UserSimpleDto>> {
    ok(state
        .user_service
        .find_all_users_simple()
        .await
        .map_err(domain_error)?)
}

#[utoipa::path(
    get,
    path = "/v1/users/{id}",
    tag = "Users",
    params(("id" = i64, Path, description = "User ID")),
    responses(
        (status = 200, description = "User details", body = ApiResponse<UserDto>),
        (status = 404, description = "Not found")
    )
)]
pub async fn get_user(
    State(state): State<UserHandlerState>,
    ApiPath(id): ApiPath<i64>,
) -> ApiResult<UserDto> {
    match state.user_service.get_user(id).await.map_err(domain_error)? {
        Some(user) => ok(user),
        None => Err(not_found("User", id)),
    }
}

#[utoipa::path(
    get,
    path = "/v1/users/email",
    tag = "Users",
    params(EmailQuery),
    responses((status = 200, description = "Zero or one matching user", body = ApiResponse<Vec<UserDto>>))
)]
pub async fn find_by_email(
    State(state): State<UserHandlerState>,
    ApiQuery(query): ApiQuery<EmailQuery>,
) -> ApiResult<Vec<UserDto>> {
    let found = state
        .user_service
        .get_user_by_email(&query.email)
        .await
        .map_err(domain_error)?;
    ok(found.into_iter().collect())
}

#[utoipa::path(
    get,
    path = "/v1/users/older/{date}",
    tag = "Users",
    params(("date" = String, Path, description = "Cut-off date, yyyy-MM-dd")),
    responses(
        (status = 200, description = "Users born before the date", body = ApiResponse<Vec<UserDto>>),
        (status = 400, description = "Unparsable date")
    )
)]
pub async fn find_older_than(
    State(state): State<UserHandlerState>,
    ApiPath(date): ApiPath<String>,
) -> ApiResult<Vec<UserDto>> {
    let date = parse_date(&date).map_err(domain_error)?;
    ok(state
        .user_service
        .find_users_older_than(date)
        .await
        .map_err(domain_error)?)
}

#[utoipa::path(
    post,
    path = "/v1/users",
    tag = "Users",
    request_body = UserDto,
    responses(
        (status = 201, description = "User created", body = ApiResponse<UserDto>),
        (status = 400, description = "Request carries an id"),
        (status = 409, description = "Email already registered"),
        (status = 422, description = "Validation error")
    )
)]
pub async fn create_user(
    State(state): State<UserHandlerState>,
    ValidatedJson(dto): ValidatedJson<UserDto>,
) -> Result<(StatusCode, Json<ApiResponse<UserDto>>), ApiError> {
    let created = state
        .user_service
        .create_user(dto)
        .await
        .map_err(domain_error)?;
    Ok((StatusCode::CREATED, Json(ApiResponse::success(created))))
}

#[utoipa::path(
    put,
    path = "/v1/users/{id}",
    tag = "Users",
    params(("id" = i64, Path, description = "User ID")),
    request_body = UserDto,
    responses(
        (status = 200, description = "User updated", body = ApiResponse<UserDto>),
        (status = 404, description = "Not found"),
        (status = 409, description = "Email already registered")
    )
)]
pub async fn update_user(
    State(state): State<UserHandlerState>,
    ApiPath(id): ApiPath<i64>,
    ValidatedJson(dto): ValidatedJson<UserDto>,
) -> ApiResult<UserDto> {
    match state
        .user_service
        .update_user(id, dto)
        .await
        .map_err(domain_error)?
    {
        Some(user) => ok(user),
        None => Err(not_found("User", id)),
    }
}

#[utoipa::path(
    delete,
    path = "/v1/users/{id}",
    tag = "Users",
    params(("id" = i64, Path, description = "User ID")),
    responses(
        (status = 204, description = "User deleted"),
        (status = 404, description = "Not found")
    )
)]
pub async fn delete_user(
    State(state): State<UserHandlerState>,
    ApiPath(id): ApiPath<i64>,
) -> Result<StatusCode, ApiError> {
    if state.user_service.delete_user(id).await.map_err(domain_error)? {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(not_found("User", id))
    }
}
