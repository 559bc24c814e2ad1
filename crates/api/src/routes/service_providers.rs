//! Service provider routes.

use axum::{
    extract::{
        rejection::{PathRejection, QueryRejection},
        Path, Query, State,
    },
    Json,
};
use domain::models::{
    RegisterServiceProviderRequest, SearchServiceProvidersRequest, ServiceProvider,
};
use shared::pagination::PageRequest;

use crate::app::AppState;
use crate::error::ApiError;
use crate::extractors::ValidatedForm;
use crate::middleware::metrics::record_registration;
use crate::routes::page_from_query;

/// Register a service provider.
///
/// POST /service-providers/
pub async fn register_service_provider(
    State(state): State<AppState>,
    ValidatedForm(request): ValidatedForm<RegisterServiceProviderRequest>,
) -> Result<Json<ServiceProvider>, ApiError> {
    let provider = state.service_providers.register(request).await?;
    record_registration("service_provider");
    Ok(Json(provider))
}

/// List service providers in insertion order.
///
/// GET /service-providers/?skip=<n>&limit=<n>
pub async fn list_service_providers(
    State(state): State<AppState>,
    query: Result<Query<PageRequest>, QueryRejection>,
) -> Result<Json<Vec<ServiceProvider>>, ApiError> {
    let page = page_from_query(&state, query)?;
    Ok(Json(state.service_providers.list(page).await?))
}

/// Fetch one service provider.
///
/// GET /service-providers/:provider_id
pub async fn get_service_provider(
    State(state): State<AppState>,
    provider_id: Result<Path<i64>, PathRejection>,
) -> Result<Json<ServiceProvider>, ApiError> {
    let Path(provider_id) =
        provider_id.map_err(|rejection| ApiError::Validation(rejection.body_text()))?;
    Ok(Json(state.service_providers.get(provider_id).await?))
}

/// Case-insensitive substring search on service type.
///
/// POST /service-providers/search/
pub async fn search_service_providers(
    State(state): State<AppState>,
    ValidatedForm(request): ValidatedForm<SearchServiceProvidersRequest>,
) -> Result<Json<Vec<ServiceProvider>>, ApiError> {
    let providers = state
        .service_providers
        .search_by_service_type(&request.service_type)
        .await?;
    Ok(Json(providers))
}
