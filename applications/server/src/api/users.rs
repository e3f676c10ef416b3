/// User record API routes
use crate::{error::Result, state::AppState, validation::JsonPayload};
use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use roster_core::{IdentificationNumber, User};
use serde::Serialize;
use serde_json::Value;

/// Path segment of the schema-validated create route
pub const SCHEMA_SEGMENT: &str = "schema";

#[derive(Debug, Serialize)]
pub struct DeleteUserResponse {
    pub deleted: bool,
}

/// POST /users
/// Create a user, validated by the annotated DTOs
pub async fn create_user(
    State(app_state): State<AppState>,
    JsonPayload(body): JsonPayload,
) -> Result<(StatusCode, Json<User>)> {
    let new_user = app_state.validator.validate_create(&body)?;
    let user = app_state.store.create(new_user).await?;
    Ok((StatusCode::CREATED, Json(user)))
}

/// POST /users/schema
/// Create a user, validated by the declarative schema
pub async fn create_user_with_schema(
    State(app_state): State<AppState>,
    JsonPayload(body): JsonPayload,
) -> Result<(StatusCode, Json<User>)> {
    let new_user = app_state.schema_validator.validate_create(&body)?;
    let user = app_state.store.create(new_user).await?;
    Ok((StatusCode::CREATED, Json(user)))
}

/// GET /users
/// List all active users
pub async fn list_users(State(app_state): State<AppState>) -> Result<Json<Vec<User>>> {
    let users = app_state.store.list_active().await?;
    Ok(Json(users))
}

/// GET /users/:identification_number
/// Get a single active user
pub async fn get_user(
    Path(identification_number): Path<String>,
    State(app_state): State<AppState>,
) -> Result<Json<User>> {
    fetch_user(&app_state, &IdentificationNumber::new(identification_number)).await
}

/// PATCH /users/:identification_number
/// Update names or history of an active user
pub async fn update_user(
    Path(identification_number): Path<String>,
    State(app_state): State<AppState>,
    JsonPayload(body): JsonPayload,
) -> Result<Json<User>> {
    let id = IdentificationNumber::new(identification_number);
    apply_update(&app_state, &id, &body).await
}

/// DELETE /users/:identification_number
/// Soft-delete an active user
pub async fn delete_user(
    Path(identification_number): Path<String>,
    State(app_state): State<AppState>,
) -> Result<Json<DeleteUserResponse>> {
    remove_user(&app_state, &IdentificationNumber::new(identification_number)).await
}

// `/users/schema` is claimed by the static create route, so the record whose
// id is literally `schema` is served by these three.

/// GET /users/schema
pub async fn get_schema_user(State(app_state): State<AppState>) -> Result<Json<User>> {
    fetch_user(&app_state, &IdentificationNumber::new(SCHEMA_SEGMENT)).await
}

/// PATCH /users/schema
pub async fn update_schema_user(
    State(app_state): State<AppState>,
    JsonPayload(body): JsonPayload,
) -> Result<Json<User>> {
    apply_update(&app_state, &IdentificationNumber::new(SCHEMA_SEGMENT), &body).await
}

/// DELETE /users/schema
pub async fn delete_schema_user(
    State(app_state): State<AppState>,
) -> Result<Json<DeleteUserResponse>> {
    remove_user(&app_state, &IdentificationNumber::new(SCHEMA_SEGMENT)).await
}

async fn fetch_user(app_state: &AppState, id: &IdentificationNumber) -> Result<Json<User>> {
    let user = app_state.store.get_active(id).await?;
    Ok(Json(user))
}

async fn apply_update(
    app_state: &AppState,
    id: &IdentificationNumber,
    body: &Value,
) -> Result<Json<User>> {
    let changes = app_state.validator.validate_update(body)?;
    let user = app_state.store.update(id, changes).await?;
    Ok(Json(user))
}

async fn remove_user(
    app_state: &AppState,
    id: &IdentificationNumber,
) -> Result<Json<DeleteUserResponse>> {
    app_state.store.soft_delete(id).await?;
    Ok(Json(DeleteUserResponse { deleted: true }))
}

/// POST /users/restore/:identification_number
/// Restore a soft-deleted user
pub async fn restore_user(
    Path(identification_number): Path<String>,
    State(app_state): State<AppState>,
) -> Result<Json<User>> {
    let id = IdentificationNumber::new(identification_number);
    let user = app_state.store.restore(&id).await?;
    Ok(Json(user))
}
