//! User record controller.

use crate::{
    extractors::{UserIdPath, ValidatedJson},
    responses::{not_found, ok, ApiResult, AppError},
    state::AppState,
};
use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use roster_core::User;
use roster_service::CreateUserRequest;
use tracing::debug;

/// Creates the user router.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_users).post(create_user))
        .route("/:id", get(get_user).delete(delete_user))
}

/// Get a user by ID.
#[utoipa::path(
    get,
    path = "/api/users/{id}",
    tag = "users",
    params(("id" = i64, Path, description = "User ID")),
    responses(
        (status = 200, description = "User found", body = User),
        (status = 400, description = "Malformed ID", body = roster_core::ErrorResponse),
        (status = 404, description = "No such user")
    )
)]
pub async fn get_user(
    State(state): State<AppState>,
    UserIdPath(id): UserIdPath,
) -> Result<Response, AppError> {
    debug!("Get user request: {}", id);

    match state.user_service.get_user(id).await? {
        Some(user) => Ok(Json(user).into_response()),
        None => Ok(not_found()),
    }
}

/// List all users.
#[utoipa::path(
    get,
    path = "/api/users",
    tag = "users",
    responses(
        (status = 200, description = "All users ordered by ID", body = [User])
    )
)]
pub async fn list_users(State(state): State<AppState>) -> ApiResult<Vec<User>> {
    debug!("List users request");

    ok(state.user_service.list_users().await?)
}

/// Create a new user.
#[utoipa::path(
    post,
    path = "/api/users",
    tag = "users",
    request_body = CreateUserRequest,
    responses(
        (status = 200, description = "User created", body = User),
        (status = 400, description = "Malformed JSON", body = roster_core::ErrorResponse),
        (status = 422, description = "Validation failed", body = roster_core::ErrorResponse)
    )
)]
pub async fn create_user(
    State(state): State<AppState>,
    ValidatedJson(request): ValidatedJson<CreateUserRequest>,
) -> ApiResult<User> {
    debug!("Create user request: {}", request.name);

    ok(state.user_service.create_user(request.into_user()).await?)
}

/// Delete a user.
#[utoipa::path(
    delete,
    path = "/api/users/{id}",
    tag = "users",
    params(("id" = i64, Path, description = "User ID")),
    responses(
        (status = 200, description = "User deleted or already absent"),
        (status = 400, description = "Malformed ID", body = roster_core::ErrorResponse)
    )
)]
pub async fn delete_user(
    State(state): State<AppState>,
    UserIdPath(id): UserIdPath,
) -> Result<StatusCode, AppError> {
    debug!("Delete user request: {}", id);

    state.user_service.delete_user(id).await?;
    Ok(StatusCode::OK)
}
