//! Service provider entity (database row mapping).

use sqlx::FromRow;

/// Database row mapping for the service_providers table.
#[derive(Debug, Clone, FromRow)]
pub struct ServiceProviderEntity {
    pub id: i64,
    pub name: String,
    pub service_type: String,
    pub experience: i32,
    pub pricing_model: String,
    pub availability: String,
}

impl From<ServiceProviderEntity> for domain::models::ServiceProvider {
    fn from(entity: ServiceProviderEntity) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            service_type: entity.service_type,
            experience: entity.experience,
            pricing_model: entity.pricing_model,
            availability: entity.availability,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_service_provider_entity_to_domain() {
        let entity = ServiceProviderEntity {
            id: 2,
            name: "Acme".to_string(),
            service_type: "Plumbing".to_string(),
            experience: 8,
            pricing_model: "hourly".to_string(),
            availability: "weekdays".to_string(),
        };
        let provider: domain::models::ServiceProvider = entity.into();

        assert_eq!(provider.id, 2);
        assert_eq!(provider.service_type, "Plumbing");
        assert_eq!(provider.pricing_model, "hourly");
        assert_eq!(provider.availability, "weekdays");
    }
}
