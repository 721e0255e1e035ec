use axum::{
    extract::{Path, State},
    Json,
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::error::{AppError, AppResult};
use crate::handlers::ValidatedJson;
use crate::models::{User, UserCreate, UserUpdate, UserView};
use crate::repositories::{Repository, UserRepository};
use crate::state::AppState;

// ============ Request/Response DTOs ============

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct DeleteResponse {
    pub status: String,
    pub message: String,
}

/// Ids beyond the column range can never match a row
fn user_id(id: i64) -> AppResult<i32> {
    i32::try_from(id).map_err(|_| AppError::NotFound("User".to_string()))
}

// ============ Handlers ============

/// Register a new user
///
/// Bound to both `/users/register` and `/users/add`.
#[utoipa::path(
    post,
    path = "/users/register",
    request_body = UserCreate,
    responses(
        (status = 200, description = "User created", body = UserView),
        (status = 400, description = "Email already registered or validation error")
    ),
    tag = "Users"
)]
pub async fn register_user(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<UserCreate>,
) -> AppResult<Json<UserView>> {
    let user = UserRepository::create_user(&state.db, &payload).await?;
    Ok(Json(user.into()))
}

/// List all users
#[utoipa::path(
    get,
    path = "/users/",
    responses(
        (status = 200, description = "All users", body = Vec<UserView>)
    ),
    tag = "Users"
)]
pub async fn list_users(State(state): State<AppState>) -> AppResult<Json<Vec<UserView>>> {
    let users = <UserRepository as Repository<User>>::list(&state.db).await?;
    Ok(Json(users.into_iter().map(|u| u.into()).collect()))
}

/// Update a user
#[utoipa::path(
    put,
    path = "/users/{id}",
    params(
        ("id" = i64, Path, description = "User ID")
    ),
    request_body = UserUpdate,
    responses(
        (status = 200, description = "User updated", body = UserView),
        (status = 400, description = "Email already registered or validation error"),
        (status = 404, description = "User not found")
    ),
    tag = "Users"
)]
pub async fn update_user(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    ValidatedJson(payload): ValidatedJson<UserUpdate>,
) -> AppResult<Json<UserView>> {
    let id = user_id(id)?;
    let user = UserRepository::update_user(&state.db, id, &payload).await?;
    Ok(Json(user.into()))
}

/// Delete a user
#[utoipa::path(
    delete,
    path = "/users/{id}",
    params(
        ("id" = i64, Path, description = "User ID")
    ),
    responses(
        (status = 200, description = "User deleted", body = DeleteResponse),
        (status = 404, description = "User not found")
    ),
    tag = "Users"
)]
pub async fn delete_user(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> AppResult<Json<DeleteResponse>> {
    let id = user_id(id)?;
    UserRepository::delete_user(&state.db, id).await?;

    Ok(Json(DeleteResponse {
        status: "success".to_string(),
        message: "User deleted".to_string(),
    }))
}
