//! User registration and listing.

use std::sync::Arc;

use shared::pagination::PageRequest;
use shared::password::PasswordHasher;
use tracing::{debug, info};

use crate::errors::{DomainError, StoreError};
use crate::models::{NewUser, RegisterUserRequest, User};
use crate::services::store::UserStore;

pub const EMAIL_ALREADY_REGISTERED: &str = "Email already registered";

/// Record service for user accounts.
#[derive(Clone)]
pub struct UserService {
    store: Arc<dyn UserStore>,
    hasher: PasswordHasher,
}

impl UserService {
    pub fn new(store: Arc<dyn UserStore>, hasher: PasswordHasher) -> Self {
        Self { store, hasher }
    }

    /// Registers a user, storing only a salted hash of the password.
    ///
    /// The email pre-check is advisory; a concurrent registration that wins
    /// the race is caught by the store's unique constraint and reported the
    /// same way.
    pub async fn register(&self, request: RegisterUserRequest) -> Result<User, DomainError> {
        let RegisterUserRequest {
            name,
            email,
            phone,
            preferred_language,
            role,
            password,
        } = request;

        if self.store.find_by_email(&email).await?.is_some() {
            debug!(email = %email, "Registration rejected, email taken");
            return Err(DomainError::Conflict(EMAIL_ALREADY_REGISTERED.to_string()));
        }

        let hasher = self.hasher.clone();
        let password_hash = tokio::task::spawn_blocking(move || hasher.hash(&password))
            .await
            .map_err(|e| DomainError::Internal(format!("Password hashing task failed: {}", e)))??;

        let user = self
            .store
            .insert(NewUser {
                name,
                email,
                phone,
                preferred_language,
                role,
                password_hash,
            })
            .await
            .map_err(|err| match err {
                StoreError::Duplicate(_) => {
                    DomainError::Conflict(EMAIL_ALREADY_REGISTERED.to_string())
                }
                other => other.into(),
            })?;

        info!(user_id = user.id, role = %user.role, "User registered");
        Ok(user)
    }

    pub async fn list(&self, page: PageRequest) -> Result<Vec<User>, DomainError> {
        Ok(self.store.list(page).await?)
    }
}
