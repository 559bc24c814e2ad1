//! Service provider domain models.

use serde::{Deserialize, Serialize};
use validator::Validate;

/// A registered service provider.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServiceProvider {
    pub id: i64,
    pub name: String,
    pub service_type: String,
    pub experience: i32,
    pub pricing_model: String,
    pub availability: String,
}

/// Request payload for service provider registration.
#[derive(Debug, Clone, PartialEq, Deserialize, Validate)]
pub struct RegisterServiceProviderRequest {
    #[validate(length(min = 1, max = 100, message = "Name must be between 1 and 100 characters"))]
    pub name: String,

    #[validate(length(
        min = 1,
        max = 255,
        message = "Service type must be between 1 and 255 characters"
    ))]
    pub service_type: String,

    pub experience: i32,

    #[validate(length(
        min = 1,
        max = 100,
        message = "Pricing model must be between 1 and 100 characters"
    ))]
    pub pricing_model: String,

    #[validate(length(
        min = 1,
        max = 50,
        message = "Availability must be between 1 and 50 characters"
    ))]
    pub availability: String,
}

/// Request payload for service provider search.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct SearchServiceProvidersRequest {
    #[validate(length(
        min = 1,
        max = 255,
        message = "Service type must be between 1 and 255 characters"
    ))]
    pub service_type: String,
}

impl ServiceProvider {
    pub fn from_request(id: i64, request: RegisterServiceProviderRequest) -> Self {
        Self {
            id,
            name: request.name,
            service_type: request.service_type,
            experience: request.experience,
            pricing_model: request.pricing_model,
            availability: request.availability,
        }
    }
}
