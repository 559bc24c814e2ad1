//! Mentor registration, listing and search routes.

use axum::{
    extract::{rejection::QueryRejection, Query, State},
    Json,
};
use domain::models::{Mentor, RegisterMentorRequest, SearchMentorsRequest};
use shared::pagination::PageRequest;

use crate::app::AppState;
use crate::error::ApiError;
use crate::extractors::ValidatedForm;
use crate::middleware::metrics::record_registration;
use crate::routes::page_from_query;

/// Register a mentor.
///
/// POST /mentors/
pub async fn register_mentor(
    State(state): State<AppState>,
    ValidatedForm(request): ValidatedForm<RegisterMentorRequest>,
) -> Result<Json<Mentor>, ApiError> {
    let mentor = state.mentors.register(request).await?;
    record_registration("mentor");
    Ok(Json(mentor))
}

/// List mentors in insertion order.
///
/// GET /mentors/?skip=<n>&limit=<n>
pub async fn list_mentors(
    State(state): State<AppState>,
    query: Result<Query<PageRequest>, QueryRejection>,
) -> Result<Json<Vec<Mentor>>, ApiError> {
    let page = page_from_query(&state, query)?;
    Ok(Json(state.mentors.list(page).await?))
}

/// Case-insensitive substring search on expertise.
///
/// POST /mentors/search/
pub async fn search_mentors(
    State(state): State<AppState>,
    ValidatedForm(request): ValidatedForm<SearchMentorsRequest>,
) -> Result<Json<Vec<Mentor>>, ApiError> {
    let mentors = state.mentors.search_by_expertise(&request.expertise).await?;
    Ok(Json(mentors))
}
