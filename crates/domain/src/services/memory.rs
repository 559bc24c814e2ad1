//! In-memory store implementations.
//!
//! Used for tests and for running the API without a database. They follow
//! the same contract as the PostgreSQL repositories: ids start at 1 and
//! increase by one per insert, and user emails are unique.

use shared::pagination::PageRequest;
use tokio::sync::RwLock;

use crate::errors::StoreError;
use crate::models::{
    Mentor, NewUser, RegisterMentorRequest, RegisterServiceProviderRequest, ServiceProvider, User,
};
use crate::services::store::{contains_ignore_case, MentorStore, ServiceProviderStore, UserStore};

/// Constraint name reported for duplicate emails, matching the SQL schema.
pub const USERS_EMAIL_CONSTRAINT: &str = "users_email_key";

#[derive(Debug)]
struct Table<T> {
    rows: Vec<T>,
    next_id: i64,
}

impl<T> Default for Table<T> {
    fn default() -> Self {
        Self {
            rows: Vec::new(),
            next_id: 1,
        }
    }
}

impl<T: Clone> Table<T> {
    fn insert_with(&mut self, build: impl FnOnce(i64) -> T) -> T {
        let row = build(self.next_id);
        self.next_id += 1;
        self.rows.push(row.clone());
        row
    }

    fn page(&self, page: PageRequest) -> Vec<T> {
        page.apply(self.rows.iter().cloned()).collect()
    }
}

/// In-memory user store.
#[derive(Debug, Default)]
pub struct InMemoryUserStore {
    table: RwLock<Table<User>>,
}

impl InMemoryUserStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored users.
    pub async fn len(&self) -> usize {
        self.table.read().await.rows.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }
}

#[async_trait::async_trait]
impl UserStore for InMemoryUserStore {
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, StoreError> {
        let table = self.table.read().await;
        Ok(table.rows.iter().find(|u| u.email == email).cloned())
    }

    async fn insert(&self, user: NewUser) -> Result<User, StoreError> {
        let mut table = self.table.write().await;
        if table.rows.iter().any(|u| u.email == user.email) {
            return Err(StoreError::Duplicate(USERS_EMAIL_CONSTRAINT.to_string()));
        }

        Ok(table.insert_with(|id| User {
            id,
            name: user.name,
            email: user.email,
            phone: user.phone,
            preferred_language: user.preferred_language,
            role: user.role,
            password_hash: user.password_hash,
        }))
    }

    async fn list(&self, page: PageRequest) -> Result<Vec<User>, StoreError> {
        Ok(self.table.read().await.page(page))
    }
}

/// In-memory mentor store.
#[derive(Debug, Default)]
pub struct InMemoryMentorStore {
    table: RwLock<Table<Mentor>>,
}

impl InMemoryMentorStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait::async_trait]
impl MentorStore for InMemoryMentorStore {
    async fn insert(&self, mentor: RegisterMentorRequest) -> Result<Mentor, StoreError> {
        let mut table = self.table.write().await;
        Ok(table.insert_with(|id| Mentor::from_request(id, mentor)))
    }

    async fn list(&self, page: PageRequest) -> Result<Vec<Mentor>, StoreError> {
        Ok(self.table.read().await.page(page))
    }

    async fn search_by_expertise(&self, expertise: &str) -> Result<Vec<Mentor>, StoreError> {
        let table = self.table.read().await;
        Ok(table
            .rows
            .iter()
            .filter(|m| contains_ignore_case(&m.expertise, expertise))
            .cloned()
            .collect())
    }
}

/// In-memory service provider store.
#[derive(Debug, Default)]
pub struct InMemoryServiceProviderStore {
    table: RwLock<Table<ServiceProvider>>,
}

impl InMemoryServiceProviderStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait::async_trait]
impl ServiceProviderStore for InMemoryServiceProviderStore {
    async fn insert(
        &self,
        provider: RegisterServiceProviderRequest,
    ) -> Result<ServiceProvider, StoreError> {
        let mut table = self.table.write().await;
        Ok(table.insert_with(|id| ServiceProvider::from_request(id, provider)))
    }

    async fn list(&self, page: PageRequest) -> Result<Vec<ServiceProvider>, StoreError> {
        Ok(self.table.read().await.page(page))
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<ServiceProvider>, StoreError> {
        let table = self.table.read().await;
        Ok(table.rows.iter().find(|p| p.id == id).cloned())
    }

    async fn search_by_service_type(
        &self,
        service_type: &str,
    ) -> Result<Vec<ServiceProvider>, StoreError> {
        let table = self.table.read().await;
        Ok(table
            .rows
            .iter()
            .filter(|p| contains_ignore_case(&p.service_type, service_type))
            .cloned()
            .collect())
    }
}
