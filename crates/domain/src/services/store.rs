//! Store traits the record services are written against.
//!
//! Implementations must return rows in insertion order (ascending id) and
//! treat search terms as literal, case-insensitive substrings.

use shared::pagination::PageRequest;

use crate::errors::StoreError;
use crate::models::{
    Mentor, NewUser, RegisterMentorRequest, RegisterServiceProviderRequest, ServiceProvider, User,
};

/// Storage for user accounts.
#[async_trait::async_trait]
pub trait UserStore: Send + Sync {
    /// Exact, case-sensitive email lookup.
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, StoreError>;

    /// Inserts a user. Fails with [`StoreError::Duplicate`] if the email is taken.
    async fn insert(&self, user: NewUser) -> Result<User, StoreError>;

    async fn list(&self, page: PageRequest) -> Result<Vec<User>, StoreError>;
}

/// Storage for mentors.
#[async_trait::async_trait]
pub trait MentorStore: Send + Sync {
    async fn insert(&self, mentor: RegisterMentorRequest) -> Result<Mentor, StoreError>;

    async fn list(&self, page: PageRequest) -> Result<Vec<Mentor>, StoreError>;

    async fn search_by_expertise(&self, expertise: &str) -> Result<Vec<Mentor>, StoreError>;
}

/// Storage for service providers.
#[async_trait::async_trait]
pub trait ServiceProviderStore: Send + Sync {
    async fn insert(
        &self,
        provider: RegisterServiceProviderRequest,
    ) -> Result<ServiceProvider, StoreError>;

    async fn list(&self, page: PageRequest) -> Result<Vec<ServiceProvider>, StoreError>;

    async fn find_by_id(&self, id: i64) -> Result<Option<ServiceProvider>, StoreError>;

    async fn search_by_service_type(
        &self,
        service_type: &str,
    ) -> Result<Vec<ServiceProvider>, StoreError>;
}

/// Case-insensitive containment, shared by in-process stores.
pub fn contains_ignore_case(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(&needle.to_lowercase())
}
