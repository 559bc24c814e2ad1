//! Common test utilities for integration tests.
//!
//! Router tests run against the in-memory backend. Helpers for the PostgreSQL
//! backend read `TEST_DATABASE_URL` and are only used by `#[ignore]`d tests.

// Not every test binary uses every helper.
#![allow(dead_code)]

use axum::{
    body::Body,
    http::{header, Method, Request},
    response::Response,
    Router,
};
use fake::faker::name::en::Name;
use fake::Fake;
use mentor_hub_api::app::{create_app, Backend};
use mentor_hub_api::config::{
    Config, DatabaseConfig, LimitsConfig, LoggingConfig, SecurityConfig, ServerConfig,
};
use shared::password::PasswordParams;
use sqlx::{postgres::PgPoolOptions, PgPool};
use std::time::Duration;

/// Test configuration with the cheapest valid Argon2 cost.
pub fn test_config() -> Config {
    Config {
        server: ServerConfig {
            host: "127.0.0.1".to_string(),
            port: 8080,
            request_timeout_secs: 30,
        },
        database: DatabaseConfig {
            url: std::env::var("TEST_DATABASE_URL").unwrap_or_default(),
            in_memory: true,
            max_connections: 5,
            min_connections: 1,
            connect_timeout_secs: 10,
            idle_timeout_secs: 600,
        },
        logging: LoggingConfig {
            level: "debug".to_string(),
            format: "pretty".to_string(),
        },
        security: SecurityConfig::default(),
        limits: LimitsConfig::default(),
        password: PasswordParams {
            memory_cost_kib: 64,
            time_cost: 1,
            parallelism: 1,
        },
    }
}

/// Router over fresh in-memory stores.
pub fn create_test_app() -> Router {
    create_test_app_with(test_config())
}

pub fn create_test_app_with(config: Config) -> Router {
    create_app(config, Backend::InMemory).expect("Failed to build test app")
}

/// Create a test database pool from `TEST_DATABASE_URL`.
pub async fn create_test_pool() -> PgPool {
    let database_url =
        std::env::var("TEST_DATABASE_URL").expect("TEST_DATABASE_URL must be set");

    PgPoolOptions::new()
        .max_connections(5)
        .acquire_timeout(Duration::from_secs(30))
        .connect(&database_url)
        .await
        .expect("Failed to connect to test database")
}

/// Router over PostgreSQL with the schema in place.
pub async fn create_postgres_test_app() -> Router {
    let pool = create_test_pool().await;
    persistence::db::ensure_schema(&pool)
        .await
        .expect("Failed to create schema");

    let mut config = test_config();
    config.database.in_memory = false;
    create_app(config, Backend::Postgres(pool)).expect("Failed to build test app")
}

/// Generate a unique email for testing.
pub fn unique_test_email() -> String {
    format!("test_{}@example.com", uuid::Uuid::new_v4().simple())
}

/// Encodes pairs as `application/x-www-form-urlencoded`.
pub fn form_body(fields: &[(&str, &str)]) -> String {
    fn encode(value: &str) -> String {
        value
            .replace('%', "%25")
            .replace('&', "%26")
            .replace('=', "%3D")
            .replace('+', "%2B")
            .replace(' ', "+")
    }

    fields
        .iter()
        .map(|(k, v)| format!("{}={}", encode(k), encode(v)))
        .collect::<Vec<_>>()
        .join("&")
}

/// Build a POST request with a form body.
pub fn form_request(uri: &str, fields: &[(&str, &str)]) -> Request<Body> {
    Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
        .body(Body::from(form_body(fields)))
        .unwrap()
}

const MULTIPART_BOUNDARY: &str = "mentorhubtestboundary";

/// Build a POST request with a `multipart/form-data` body.
pub fn multipart_request(uri: &str, fields: &[(&str, &str)]) -> Request<Body> {
    let mut body = String::new();
    for (name, value) in fields {
        body.push_str(&format!(
            "--{MULTIPART_BOUNDARY}\r\nContent-Disposition: form-data; name=\"{name}\"\r\n\r\n{value}\r\n"
        ));
    }
    body.push_str(&format!("--{MULTIPART_BOUNDARY}--\r\n"));

    Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header(
            header::CONTENT_TYPE,
            format!("multipart/form-data; boundary={MULTIPART_BOUNDARY}"),
        )
        .body(Body::from(body))
        .unwrap()
}

/// Build a POST request without a body.
pub fn empty_post_request(uri: &str) -> Request<Body> {
    Request::builder()
        .method(Method::POST)
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

/// Build a GET request.
pub fn get_request(uri: &str) -> Request<Body> {
    Request::builder()
        .method(Method::GET)
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

/// Parse response body as JSON.
pub async fn parse_response_body(response: Response) -> serde_json::Value {
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&body).unwrap_or(serde_json::Value::Null)
}

/// User registration form data.
pub struct TestUser {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub preferred_language: String,
    pub role: String,
    pub password: String,
}

impl TestUser {
    pub fn new() -> Self {
        Self {
            name: Name().fake(),
            email: unique_test_email(),
            phone: "1234567890".to_string(),
            preferred_language: "English".to_string(),
            role: "student".to_string(),
            password: "SecureP@ss123!".to_string(),
        }
    }

    pub fn with_email(mut self, email: &str) -> Self {
        self.email = email.to_string();
        self
    }

    pub fn request(&self) -> Request<Body> {
        form_request(
            "/register/",
            &[
                ("name", self.name.as_str()),
                ("email", self.email.as_str()),
                ("phone", self.phone.as_str()),
                ("preferred_language", self.preferred_language.as_str()),
                ("role", self.role.as_str()),
                ("password", self.password.as_str()),
            ],
        )
    }
}

impl Default for TestUser {
    fn default() -> Self {
        Self::new()
    }
}

/// Mentor registration form data.
pub struct TestMentor {
    pub name: String,
    pub age: String,
    pub location: String,
    pub expertise: String,
    pub experience: String,
}

impl TestMentor {
    pub fn new() -> Self {
        Self {
            name: Name().fake(),
            age: "40".to_string(),
            location: "Nairobi".to_string(),
            expertise: "Data Science".to_string(),
            experience: "10".to_string(),
        }
    }

    pub fn with_name(mut self, name: &str) -> Self {
        self.name = name.to_string();
        self
    }

    pub fn with_expertise(mut self, expertise: &str) -> Self {
        self.expertise = expertise.to_string();
        self
    }

    pub fn request(&self) -> Request<Body> {
        form_request(
            "/mentors/",
            &[
                ("name", self.name.as_str()),
                ("age", self.age.as_str()),
                ("location", self.location.as_str()),
                ("expertise", self.expertise.as_str()),
                ("experience", self.experience.as_str()),
            ],
        )
    }
}

impl Default for TestMentor {
    fn default() -> Self {
        Self::new()
    }
}

/// Service provider registration form data.
pub struct TestServiceProvider {
    pub name: String,
    pub service_type: String,
    pub experience: String,
    pub pricing_model: String,
    pub availability: String,
}

impl TestServiceProvider {
    pub fn new() -> Self {
        Self {
            name: Name().fake(),
            service_type: "Legal".to_string(),
            experience: "5".to_string(),
            pricing_model: "hourly".to_string(),
            availability: "weekdays".to_string(),
        }
    }

    pub fn with_service_type(mut self, service_type: &str) -> Self {
        self.service_type = service_type.to_string();
        self
    }

    pub fn request(&self) -> Request<Body> {
        form_request(
            "/service-providers/",
            &[
                ("name", self.name.as_str()),
                ("service_type", self.service_type.as_str()),
                ("experience", self.experience.as_str()),
                ("pricing_model", self.pricing_model.as_str()),
                ("availability", self.availability.as_str()),
            ],
        )
    }
}

impl Default for TestServiceProvider {
    fn default() -> Self {
        Self::new()
    }
}
