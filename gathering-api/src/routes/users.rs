/// User endpoints
///
/// # Endpoints
///
/// - `POST /api/users` - Create a user
/// - `GET /api/users/:id` - Fetch a user by id
/// - `GET /api/users/by-username/:username` - Fetch a user by username
///
/// Responses never include the password.

use crate::{
    app::AppState,
    error::{ApiError, ApiResult},
};
use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection},
        Path, State,
    },
    http::StatusCode,
    Json,
};
use gathering_shared::{
    models::user::User,
    validation::{validate_user, UserCandidate},
};
use serde::{Deserialize, Serialize};

/// Public view of a user
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserResponse {
    /// User ID
    pub id: u32,

    /// Username
    pub username: String,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            username: user.username,
        }
    }
}

/// Create a user
///
/// # Endpoint
///
/// ```text
/// POST /api/users
/// Content-Type: application/json
///
/// {
///   "username": "maria",
///   "password": "open-sesame"
/// }
/// ```
///
/// # Response
///
/// `201 Created` with `{ "id": 1, "username": "maria" }`.
///
/// # Errors
///
/// - `400 Bad Request`: Body is not JSON
/// - `409 Conflict`: Username already exists
/// - `422 Unprocessable Entity`: Username or password missing
pub async fn create_user(
    State(state): State<AppState>,
    payload: Result<Json<UserCandidate>, JsonRejection>,
) -> ApiResult<(StatusCode, Json<UserResponse>)> {
    let Json(candidate) = payload?;
    let new_user = validate_user(candidate)?;

    // The store accepts duplicate usernames; check under the same write
    // guard so two requests cannot both pass the lookup.
    let mut store = state.store.write().await;
    if store.get_user_by_username(&new_user.username).is_some() {
        return Err(ApiError::Conflict("Username already exists".to_string()));
    }

    let user = store.create_user(new_user);
    drop(store);

    tracing::info!(user_id = user.id, "User created");

    Ok((StatusCode::CREATED, Json(user.into())))
}

/// Fetch a user by id
///
/// # Errors
///
/// - `400 Bad Request`: Id is not a number
/// - `404 Not Found`: No user with that id
pub async fn get_user(
    State(state): State<AppState>,
    path: Result<Path<u32>, PathRejection>,
) -> ApiResult<Json<UserResponse>> {
    let Path(id) = path?;

    let user = state
        .store
        .read()
        .await
        .get_user(id)
        .ok_or_else(|| ApiError::NotFound(format!("User {} not found", id)))?;

    Ok(Json(user.into()))
}

/// Fetch a user by username
///
/// # Errors
///
/// - `404 Not Found`: No user with that username
pub async fn get_user_by_username(
    State(state): State<AppState>,
    path: Result<Path<String>, PathRejection>,
) -> ApiResult<Json<UserResponse>> {
    let Path(username) = path?;

    let user = state
        .store
        .read()
        .await
        .get_user_by_username(&username)
        .ok_or_else(|| ApiError::NotFound("User not found".to_string()))?;

    Ok(Json(user.into()))
}
