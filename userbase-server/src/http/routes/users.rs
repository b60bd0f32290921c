//! User endpoints
//!
//! ```text
//! GET    /api/users        -> 200 [User, ...] (newest first)
//! POST   /api/users        -> 201 User
//! PUT    /api/users/{id}   -> 200 User (echo of the request body)
//! DELETE /api/users/{id}   -> 204
//! ```

use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{get, put},
    Json, Router,
};

use crate::http::error::ApiError;
use crate::http::extractors::JsonBody;
use crate::http::server::AppState;
use crate::models::{User, UserPayload};

/// GET /api/users - list all users, highest id first
async fn list_users(State(state): State<AppState>) -> Result<Json<Vec<User>>, ApiError> {
    let users = state.store().list().await?;
    Ok(Json(users))
}

/// POST /api/users - insert a user and return it with its new id
async fn create_user(
    State(state): State<AppState>,
    JsonBody(payload): JsonBody<UserPayload>,
) -> Result<(StatusCode, Json<User>), ApiError> {
    let user = state.store().create(payload.to_new_user()).await?;
    tracing::debug!(id = user.id, "user created");

    Ok((StatusCode::CREATED, Json(user)))
}

/// PUT /api/users/{id} - overwrite name and email
///
/// Responds with the submitted body, not the stored row. An id that
/// matches nothing still gets a 200.
async fn update_user(
    State(state): State<AppState>,
    Path(id): Path<String>,
    JsonBody(payload): JsonBody<UserPayload>,
) -> Result<Json<User>, ApiError> {
    let rows = state.store().update(&id, &payload.to_new_user()).await?;
    if rows == 0 {
        tracing::debug!(%id, "update matched no rows");
    }

    Ok(Json(payload.into_echo()))
}

/// DELETE /api/users/{id} - remove a user (idempotent)
async fn delete_user(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<StatusCode, ApiError> {
    let rows = state.store().delete(&id).await?;
    if rows == 0 {
        tracing::debug!(%id, "delete matched no rows");
    }

    Ok(StatusCode::NO_CONTENT)
}

/// User routes
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/api/users", get(list_users).post(create_user))
        .route("/api/users/{id}", put(update_user).delete(delete_user))
}
