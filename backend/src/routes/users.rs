//! User CRUD endpoints (`/users/*`).

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{get, patch},
    Json, Router,
};
use user_api_common::{User, UserStats};

use crate::error::{ApiError, Result};
use crate::extract::{SearchTerm, UserIdPath, ValidUser};
use crate::AppState;

/// GET /users
async fn get_all_users(State(state): State<Arc<AppState>>) -> Json<Vec<User>> {
    Json(state.users.get_all_users().await)
}

/// GET /users/active
async fn get_active_users(State(state): State<Arc<AppState>>) -> Json<Vec<User>> {
    Json(state.users.get_active_users().await)
}

/// GET /users/:id
async fn get_user_by_id(
    State(state): State<Arc<AppState>>,
    UserIdPath(id): UserIdPath,
) -> Result<Json<User>> {
    state
        .users
        .get_user_by_id(id)
        .await
        .map(Json)
        .ok_or(ApiError::NotFound)
}

/// GET /users/username/:username
async fn get_user_by_username(
    State(state): State<Arc<AppState>>,
    Path(username): Path<String>,
) -> Result<Json<User>> {
    state
        .users
        .get_user_by_username(&username)
        .await
        .map(Json)
        .ok_or(ApiError::NotFound)
}

/// POST /users
async fn create_user(
    State(state): State<Arc<AppState>>,
    ValidUser(draft): ValidUser,
) -> (StatusCode, Json<User>) {
    let user = state.users.create_user(draft).await;
    (StatusCode::CREATED, Json(user))
}

/// PUT /users/:id
async fn update_user(
    State(state): State<Arc<AppState>>,
    UserIdPath(id): UserIdPath,
    ValidUser(draft): ValidUser,
) -> Result<Json<User>> {
    state
        .users
        .update_user(id, draft)
        .await
        .map(Json)
        .ok_or(ApiError::NotFound)
}

/// DELETE /users/:id
async fn delete_user(
    State(state): State<Arc<AppState>>,
    UserIdPath(id): UserIdPath,
) -> Result<StatusCode> {
    if state.users.delete_user(id).await {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(ApiError::NotFound)
    }
}

/// PATCH /users/:id/deactivate - soft delete
async fn deactivate_user(
    State(state): State<Arc<AppState>>,
    UserIdPath(id): UserIdPath,
) -> Result<Json<User>> {
    state
        .users
        .deactivate_user(id)
        .await
        .map(Json)
        .ok_or(ApiError::NotFound)
}

/// GET /users/search?name=
async fn search_users(
    State(state): State<Arc<AppState>>,
    SearchTerm(name): SearchTerm,
) -> Json<Vec<User>> {
    Json(state.users.search_users_by_name(&name).await)
}

/// GET /users/stats
async fn get_user_stats(State(state): State<Arc<AppState>>) -> Json<UserStats> {
    Json(state.users.get_user_stats().await)
}

pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/users", get(get_all_users).post(create_user))
        .route("/users/active", get(get_active_users))
        .route("/users/search", get(search_users))
        .route("/users/stats", get(get_user_stats))
        .route("/users/username/:username", get(get_user_by_username))
        .route(
            "/users/:id",
            get(get_user_by_id).put(update_user).delete(delete_user),
        )
        .route("/users/:id/deactivate", patch(deactivate_user))
        .with_state(state)
}
