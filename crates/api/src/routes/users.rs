//! User registration and listing routes.

use axum::{extract::State, Json};
use domain::models::{RegisterUserRequest, UserResponse};

use crate::app::AppState;
use crate::error::ApiError;
use crate::extractors::{PageForm, ValidatedForm};
use crate::middleware::metrics::record_registration;

/// Register a user account.
///
/// POST /register/
pub async fn register_user(
    State(state): State<AppState>,
    ValidatedForm(request): ValidatedForm<RegisterUserRequest>,
) -> Result<Json<UserResponse>, ApiError> {
    let user = state.users.register(request).await?;
    record_registration("user");
    Ok(Json(user.into()))
}

/// List users in insertion order.
///
/// POST /users/ with optional `skip` and `limit` form fields.
pub async fn list_users(
    State(state): State<AppState>,
    PageForm(page): PageForm,
) -> Result<Json<Vec<UserResponse>>, ApiError> {
    let page = page.clamped(state.config.limits.max_page_size);
    let users = state.users.list(page).await?;
    Ok(Json(users.into_iter().map(UserResponse::from).collect()))
}
