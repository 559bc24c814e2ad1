use axum::{
    middleware,
    routing::{get, post},
    Router,
};
use domain::services::{
    InMemoryMentorStore, InMemoryServiceProviderStore, InMemoryUserStore, MentorService,
    MentorStore, ServiceProviderService, ServiceProviderStore, UserService, UserStore,
};
use persistence::repositories::{MentorRepository, ServiceProviderRepository, UserRepository};
use shared::password::{PasswordError, PasswordHasher};
use sqlx::PgPool;
use std::sync::Arc;
use std::time::Duration;
use tower_http::{
    compression::CompressionLayer,
    cors::{AllowOrigin, Any, CorsLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};

use crate::config::Config;
use crate::middleware::{metrics_handler, metrics_middleware, security_headers_middleware, trace_id};
use crate::routes::{health, mentors, service_providers, users};

/// Where records are kept.
#[derive(Clone)]
pub enum Backend {
    Postgres(PgPool),
    InMemory,
}

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    /// Present only for the PostgreSQL backend
    pub pool: Option<PgPool>,
    pub users: Arc<UserService>,
    pub mentors: Arc<MentorService>,
    pub service_providers: Arc<ServiceProviderService>,
}

impl AppState {
    pub fn new(config: Config, backend: Backend) -> Result<Self, PasswordError> {
        let hasher = PasswordHasher::new(config.password)?;

        let user_store: Arc<dyn UserStore>;
        let mentor_store: Arc<dyn MentorStore>;
        let provider_store: Arc<dyn ServiceProviderStore>;

        let pool = match backend {
            Backend::Postgres(pool) => {
                user_store = Arc::new(UserRepository::new(pool.clone()));
                mentor_store = Arc::new(MentorRepository::new(pool.clone()));
                provider_store = Arc::new(ServiceProviderRepository::new(pool.clone()));
                Some(pool)
            }
            Backend::InMemory => {
                user_store = Arc::new(InMemoryUserStore::new());
                mentor_store = Arc::new(InMemoryMentorStore::new());
                provider_store = Arc::new(InMemoryServiceProviderStore::new());
                None
            }
        };

        Ok(Self {
            config: Arc::new(config),
            pool,
            users: Arc::new(UserService::new(user_store, hasher)),
            mentors: Arc::new(MentorService::new(mentor_store)),
            service_providers: Arc::new(ServiceProviderService::new(provider_store)),
        })
    }
}

pub fn create_app(config: Config, backend: Backend) -> Result<Router, PasswordError> {
    let state = AppState::new(config, backend)?;
    Ok(router(state))
}

/// Builds the router around an existing state.
pub fn router(state: AppState) -> Router {
    let config = state.config.clone();

    let cors = if config.security.cors_origins.is_empty() {
        // Default: allow any origin (for development)
        CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any)
    } else {
        let origins: Vec<_> = config
            .security
            .cors_origins
            .iter()
            .filter_map(|o| o.parse().ok())
            .collect();
        CorsLayer::new()
            .allow_origin(AllowOrigin::list(origins))
            .allow_methods(Any)
            .allow_headers(Any)
    };

    let record_routes = Router::new()
        .route("/register/", post(users::register_user))
        .route("/users/", post(users::list_users))
        .route(
            "/mentors/",
            get(mentors::list_mentors).post(mentors::register_mentor),
        )
        .route("/mentors/search/", post(mentors::search_mentors))
        .route(
            "/service-providers/",
            get(service_providers::list_service_providers)
                .post(service_providers::register_service_provider),
        )
        .route(
            "/service-providers/search/",
            post(service_providers::search_service_providers),
        )
        .route(
            "/service-providers/:provider_id",
            get(service_providers::get_service_provider),
        );

    let operational_routes = Router::new()
        .route("/api/health", get(health::health_check))
        .route("/api/health/live", get(health::live))
        .route("/api/health/ready", get(health::ready))
        .route("/metrics", get(metrics_handler));

    Router::new()
        .merge(record_routes)
        .merge(operational_routes)
        // Global middleware (order matters: bottom layers run first)
        .layer(middleware::from_fn_with_state(
            config.security.hsts_enabled,
            security_headers_middleware,
        ))
        .layer(CompressionLayer::new())
        .layer(TimeoutLayer::new(Duration::from_secs(
            config.server.request_timeout_secs,
        )))
        .layer(middleware::from_fn(metrics_middleware))
        .layer(TraceLayer::new_for_http())
        .layer(middleware::from_fn(trace_id))
        .layer(cors)
        .with_state(state)
}
