//! User handlers.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::Json,
    routing::get,
    Router,
};
use chrono::NaiveDate;
use serde::Deserialize;
use utoipa::ToSchema;
use validator::Validate;

use crate::api::extractors::ValidatedJson;
use crate::api::AppState;
use crate::domain::{User, UserDraft};
use crate::errors::AppResult;

/// User payload with validation, accepted by create and update.
///
/// A client-sent id is ignored: the id is assigned by the store on
/// create and taken from the request path on update.
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct UserPayload {
    /// Given name
    #[validate(length(min = 1, message = "Firstname cannot be empty"))]
    #[schema(example = "Max")]
    pub firstname: String,
    /// Family name
    #[validate(length(min = 1, message = "Lastname cannot be empty"))]
    #[schema(example = "Mustermann")]
    pub lastname: String,
    /// Email address
    #[validate(email(message = "Email must be a valid email address"))]
    #[schema(example = "max.mustermann@example.com")]
    pub email: String,
    /// Date of birth
    #[schema(example = "2000-01-01")]
    pub birthday: NaiveDate,
    /// Password (plain text)
    #[schema(example = "password123")]
    pub password: String,
}

impl From<UserPayload> for UserDraft {
    fn from(payload: UserPayload) -> Self {
        UserDraft {
            firstname: payload.firstname,
            lastname: payload.lastname,
            email: payload.email,
            birthday: payload.birthday,
            password: payload.password,
        }
    }
}

/// Create user routes
pub fn user_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_users).post(create_user))
        .route("/:id", get(get_user).put(update_user).delete(delete_user))
}

/// List all users
#[utoipa::path(
    get,
    path = "/api/users",
    tag = "Users",
    responses(
        (status = 200, description = "List of all users", body = Vec<User>)
    )
)]
pub async fn list_users(State(state): State<AppState>) -> AppResult<Json<Vec<User>>> {
    tracing::info!("Listing all users");
    let users = state.user_service.find_all().await?;
    Ok(Json(users))
}

/// Get user by ID
#[utoipa::path(
    get,
    path = "/api/users/{id}",
    tag = "Users",
    params(
        ("id" = i64, Path, description = "User ID")
    ),
    responses(
        (status = 200, description = "User record", body = User),
        (status = 404, description = "User not found")
    )
)]
pub async fn get_user(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> AppResult<Json<User>> {
    tracing::info!(id, "Fetching user");
    let user = state.user_service.find(id).await?;
    Ok(Json(user))
}

/// Create a new user
#[utoipa::path(
    post,
    path = "/api/users",
    tag = "Users",
    request_body = UserPayload,
    responses(
        (status = 201, description = "User created successfully", body = User),
        (status = 400, description = "Validation error")
    )
)]
pub async fn create_user(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<UserPayload>,
) -> AppResult<(StatusCode, Json<User>)> {
    tracing::info!(email = %payload.email, "Creating user");
    let user = state.user_service.create(payload.into()).await?;
    Ok((StatusCode::CREATED, Json(user)))
}

/// Update an existing user
#[utoipa::path(
    put,
    path = "/api/users/{id}",
    tag = "Users",
    params(
        ("id" = i64, Path, description = "User ID")
    ),
    request_body = UserPayload,
    responses(
        (status = 200, description = "User updated successfully", body = User),
        (status = 400, description = "Validation error"),
        (status = 404, description = "User not found")
    )
)]
pub async fn update_user(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    ValidatedJson(payload): ValidatedJson<UserPayload>,
) -> AppResult<Json<User>> {
    tracing::info!(id, "Updating user");
    let user = state.user_service.update(id, payload.into()).await?;
    Ok(Json(user))
}

/// Delete user by ID
#[utoipa::path(
    delete,
    path = "/api/users/{id}",
    tag = "Users",
    params(
        ("id" = i64, Path, description = "User ID")
    ),
    responses(
        (status = 204, description = "User deleted successfully"),
        (status = 404, description = "User not found")
    )
)]
pub async fn delete_user(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> AppResult<StatusCode> {
    tracing::info!(id, "Deleting user");
    state.user_service.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
