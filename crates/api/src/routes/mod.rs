//! HTTP route handlers.

pub mod health;
pub mod mentors;
pub mod service_providers;
pub mod users;

use axum::extract::{rejection::QueryRejection, Query};
use shared::pagination::PageRequest;

use crate::app::AppState;
use crate::error::ApiError;

/// Resolves the pagination window of a GET listing, capped at `limits.max_page_size`.
pub(crate) fn page_from_query(
    state: &AppState,
    query: Result<Query<PageRequest>, QueryRejection>,
) -> Result<PageRequest, ApiError> {
    let Query(page) = query.map_err(|rejection| ApiError::Validation(rejection.body_text()))?;
    Ok(page.clamped(state.config.limits.max_page_size))
}
