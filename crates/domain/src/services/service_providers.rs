//! Service provider registration, lookup and service-type search.

use std::sync::Arc;

use shared::pagination::PageRequest;
use tracing::{debug, info};

use crate::errors::DomainError;
use crate::models::{RegisterServiceProviderRequest, ServiceProvider};
use crate::services::store::ServiceProviderStore;

pub const SERVICE_PROVIDER_NOT_FOUND: &str = "Service provider not found";
pub const NO_SERVICE_PROVIDERS_FOUND: &str = "No service providers found with the given service type";

/// Record service for service providers.
#[derive(Clone)]
pub struct ServiceProviderService {
    store: Arc<dyn ServiceProviderStore>,
}

impl ServiceProviderService {
    pub fn new(store: Arc<dyn ServiceProviderStore>) -> Self {
        Self { store }
    }

    pub async fn register(
        &self,
        request: RegisterServiceProviderRequest,
    ) -> Result<ServiceProvider, DomainError> {
        let provider = self.store.insert(request).await?;
        info!(
            provider_id = provider.id,
            service_type = %provider.service_type,
            "Service provider registered"
        );
        Ok(provider)
    }

    pub async fn list(&self, page: PageRequest) -> Result<Vec<ServiceProvider>, DomainError> {
        Ok(self.store.list(page).await?)
    }

    pub async fn get(&self, id: i64) -> Result<ServiceProvider, DomainError> {
        self.store
            .find_by_id(id)
            .await?
            .ok_or_else(|| DomainError::NotFound(SERVICE_PROVIDER_NOT_FOUND.to_string()))
    }

    /// Case-insensitive substring search on service type. An empty result is an error.
    pub async fn search_by_service_type(
        &self,
        service_type: &str,
    ) -> Result<Vec<ServiceProvider>, DomainError> {
        let providers = self.store.search_by_service_type(service_type).await?;
        if providers.is_empty() {
            debug!(service_type = %service_type, "No service providers matched");
            return Err(DomainError::NotFound(NO_SERVICE_PROVIDERS_FOUND.to_string()));
        }
        Ok(providers)
    }
}
