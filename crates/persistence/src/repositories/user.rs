//! User repository for database operations.

use domain::models::{NewUser, User};
use domain::services::UserStore;
use domain::StoreError;
use shared::pagination::PageRequest;
use sqlx::PgPool;

use crate::entities::UserEntity;
use crate::metrics::QueryTimer;
use crate::repositories::store_error;

/// Repository for user-related database operations.
#[derive(Clone)]
pub struct UserRepository {
    pool: PgPool,
}

impl UserRepository {
    /// Creates a new UserRepository with the given connection pool.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Find a user by exact email address.
    pub async fn find_by_email(&self, email: &str) -> Result<Option<UserEntity>, sqlx::Error> {
        let timer = QueryTimer::new("find_user_by_email");
        let result = sqlx::query_as::<_, UserEntity>(
            r#"
            SELECT id, name, email, phone, preferred_language, role, password_hash
            FROM users
            WHERE email = $1
            "#,
        )
        .bind(email)
        .fetch_optional(&self.pool)
        .await;
        timer.finish(result)
    }

    /// Create a new user. The users_email_key constraint rejects duplicate emails.
    pub async fn create_user(&self, user: &NewUser) -> Result<UserEntity, sqlx::Error> {
        let timer = QueryTimer::new("create_user");
        let result = sqlx::query_as::<_, UserEntity>(
            r#"
            INSERT INTO users (name, email, phone, preferred_language, role, password_hash)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING id, name, email, phone, preferred_language, role, password_hash
            "#,
        )
        .bind(&user.name)
        .bind(&user.email)
        .bind(&user.phone)
        .bind(&user.preferred_language)
        .bind(&user.role)
        .bind(&user.password_hash)
        .fetch_one(&self.pool)
        .await;
        timer.finish(result)
    }

    /// List users in insertion order.
    pub async fn list_users(&self, page: PageRequest) -> Result<Vec<UserEntity>, sqlx::Error> {
        let timer = QueryTimer::new("list_users");
        let result = sqlx::query_as::<_, UserEntity>(
            r#"
            SELECT id, name, email, phone, preferred_language, role, password_hash
            FROM users
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
}

#[async_trait::async_trait]
impl UserStore for UserRepository {
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, StoreError> {
        UserRepository::find_by_email(self, email)
            .await
            .map(|row| row.map(Into::into))
            .map_err(store_error)
    }

    async fn insert(&self, user: NewUser) -> Result<User, StoreError> {
        self.create_user(&user)
            .await
            .map(Into::into)
            .map_err(store_error)
    }

    async fn list(&self, page: PageRequest) -> Result<Vec<User>, StoreError> {
        self.list_users(page)
            .await
            .map(|rows| rows.into_iter().map(Into::into).collect())
            .map_err(store_error)
    }
}
