//! User CRUD endpoints

use axum::{extract::State, http::StatusCode};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::debug;

use crate::api::state::AppState;
use crate::api::types::{ApiError, Json, Path, RequestId};
use crate::domain::user::{validate_email, validate_name, User, UserId};

/// Request to create a new user
///
/// Fields stay untyped so that a wrong JSON type is reported by the field
/// validators rather than by the deserializer.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CreateUserApiRequest {
    #[serde(default)]
    pub name: Option<Value>,
    #[serde(default)]
    pub email: Option<Value>,
}

/// Request to replace a user's email
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateEmailApiRequest {
    #[serde(default)]
    pub email: Option<Value>,
}

/// User response body
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserResponse {
    pub id: u64,
    pub name: String,
    pub email: String,
}

impl From<&User> for UserResponse {
    fn from(user: &User) -> Self {
        Self {
            id: user.id().value(),
            name: user.name().to_string(),
            email: user.email().to_string(),
        }
    }
}

fn text(value: &Option<Value>) -> Option<&str> {
    value.as_ref().and_then(Value::as_str)
}

/// Parse the `{user_id}` path segment
///
/// Integers that can never be assigned (negative, or past `u64::MAX`) name
/// no user, so they are reported as not found rather than malformed.
fn parse_user_id(raw: &str) -> Result<UserId, ApiError> {
    if let Ok(id) = raw.parse::<u64>() {
        return Ok(UserId::new(id));
    }

    match raw.parse::<i128>() {
        Ok(id) => Err(ApiError::unknown_user_id(id)),
        Err(_) => Err(ApiError::bad_request(format!(
            "Invalid path parameter: user_id must be an integer, got '{}'",
            raw
        ))),
    }
}

/// POST /users
pub async fn create_user(
    State(state): State<AppState>,
    request_id: RequestId,
    Json(request): Json<CreateUserApiRequest>,
) -> Result<(StatusCode, Json<UserResponse>), ApiError> {
    let name = validate_name(text(&request.name)).map_err(|e| request_id.attach(e))?;
    let email = validate_email(text(&request.email)).map_err(|e| request_id.attach(e))?;

    debug!(name = %name, "Creating user");

    let user = state
        .user_service
        .create_user(&name, &email)
        .await
        .map_err(|e| request_id.attach(e))?;

    Ok((StatusCode::CREATED, Json(UserResponse::from(&user))))
}

/// GET /users/:user_id
pub async fn get_user(
    State(state): State<AppState>,
    request_id: RequestId,
    Path(raw_id): Path<String>,
) -> Result<Json<UserResponse>, ApiError> {
    let user_id = parse_user_id(&raw_id).map_err(|e| request_id.attach(e))?;

    debug!(user_id = %user_id, "Getting user");

    let user = state
        .user_service
        .get_user(user_id)
        .await
        .map_err(|e| request_id.attach(e))?;

    Ok(Json(UserResponse::from(&user)))
}

/// PUT /users/:user_id/email
pub async fn update_user_email(
    State(state): State<AppState>,
    request_id: RequestId,
    Path(raw_id): Path<String>,
    Json(request): Json<UpdateEmailApiRequest>,
) -> Result<Json<UserResponse>, ApiError> {
    let user_id = parse_user_id(&raw_id);
    let email = validate_email(text(&request.email)).map_err(|e| request_id.attach(e))?;
    let user_id = user_id.map_err(|e| request_id.attach(e))?;

    debug!(user_id = %user_id, "Updating user email");

    let user = state
        .user_service
        .update_user_email(user_id, &email)
        .await
        .map_err(|e| request_id.attach(e))?;

    Ok(Json(UserResponse::from(&user)))
}

/// DELETE /users/:user_id
pub async fn delete_user(
    State(state): State<AppState>,
    request_id: RequestId,
    Path(raw_id): Path<String>,
) -> Result<StatusCode, ApiError> {
    let user_id = parse_user_id(&raw_id).map_err(|e| request_id.attach(e))?;

    debug!(user_id = %user_id, "Deleting user");

    state
        .user_service
        .delete_user(user_id)
        .await
        .map_err(|e| request_id.attach(e))?;

    Ok(StatusCode::NO_CONTENT)
}
