//! Service provider repository for database operations.

use domain::models::{RegisterServiceProviderRequest, ServiceProvider};
use domain::services::ServiceProviderStore;
use domain::StoreError;
use shared::pagination::PageRequest;
use sqlx::PgPool;

use crate::entities::ServiceProviderEntity;
use crate::metrics::QueryTimer;
use crate::repositories::{contains_pattern, store_error};

/// Repository for service-provider-related database operations.
#[derive(Clone)]
pub struct ServiceProviderRepository {
    pool: PgPool,
}

impl ServiceProviderRepository {
    /// Creates a new ServiceProviderRepository with the given connection pool.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Insert a service provider and return the stored row.
    pub async fn create_service_provider(
        &self,
        provider: &RegisterServiceProviderRequest,
    ) -> Result<ServiceProviderEntity, sqlx::Error> {
        let timer = QueryTimer::new("create_service_provider");
        let result = sqlx::query_as::<_, ServiceProviderEntity>(
            r#"
            INSERT INTO service_providers (name, service_type, experience, pricing_model, availability)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING id, name, service_type, experience, pricing_model, availability
            "#,
        )
        .bind(&provider.name)
        .bind(&provider.service_type)
        .bind(provider.experience)
        .bind(&provider.pricing_model)
        .bind(&provider.availability)
        .fetch_one(&self.pool)
        .await;
        timer.finish(result)
    }

    /// List service providers in insertion order.
    pub async fn list_service_providers(
        &self,
        page: PageRequest,
    ) -> Result<Vec<ServiceProviderEntity>, sqlx::Error> {
        let timer = QueryTimer::new("list_service_providers");
        let result = sqlx::query_as::<_, ServiceProviderEntity>(
            r#"
            SELECT id, name, service_type, experience, pricing_model, availability
            FROM service_providers
            ORDER BY id ASC
            OFFSET $1
            LIMIT $2
            "#,
        )
        .bind(page.offset())
        .bind(page.fetch())
        .fetch_all(&self.pool)
        .await;
        timer.finish(result)
    }

    /// Find a service provider by ID.
    pub async fn find_by_id(&self, id: i64) -> Result<Option<ServiceProviderEntity>, sqlx::Error> {
        let timer = QueryTimer::new("find_service_provider_by_id");
        let result = sqlx::query_as::<_, ServiceProviderEntity>(
            r#"
            SELECT id, name, service_type, experience, pricing_model, availability
            FROM service_providers
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await;
        timer.finish(result)
    }

    /// Find service providers whose service type contains `service_type`, ignoring case.
    pub async fn search_by_service_type(
        &self,
        service_type: &str,
    ) -> Result<Vec<ServiceProviderEntity>, sqlx::Error> {
        let timer = QueryTimer::new("search_service_providers_by_type");
        let result = sqlx::query_as::<_, ServiceProviderEntity>(
            r#"
            SELECT id, name, service_type, experience, pricing_model, availability
            FROM service_providers
            WHERE service_type ILIKE $1 ESCAPE '\'
            ORDER BY id ASC
            "#,
        )
        .bind(contains_pattern(service_type))
        .fetch_all(&self.pool)
        .await;
        timer.finish(result)
    }
}

#[async_trait::async_trait]
impl ServiceProviderStore for ServiceProviderRepository {
    async fn insert(
        &self,
        provider: RegisterServiceProviderRequest,
    ) -> Result<ServiceProvider, StoreError> {
        self.create_service_provider(&provider)
            .await
            .map(Into::into)
            .map_err(store_error)
    }

    async fn list(&self, page: PageRequest) -> Result<Vec<ServiceProvider>, StoreError> {
        self.list_service_providers(page)
            .await
            .map(|rows| rows.into_iter().map(Into::into).collect())
            .map_err(store_error)
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<ServiceProvider>, StoreError> {
        ServiceProviderRepository::find_by_id(self, id)
            .await
            .map(|row| row.map(Into::into))
            .map_err(store_error)
    }

    async fn search_by_service_type(
        &self,
        service_type: &str,
    ) -> Result<Vec<ServiceProvider>, StoreError> {
        ServiceProviderRepository::search_by_service_type(self, service_type)
            .await
            .map(|rows| rows.into_iter().map(Into::into).collect())
            .map_err(store_error)
    }
}
