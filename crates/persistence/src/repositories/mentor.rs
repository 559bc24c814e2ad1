//! Mentor repository for database operations.

use domain::models::{Mentor, RegisterMentorRequest};
use domain::services::MentorStore;
use domain::StoreError;
use shared::pagination::PageRequest;
use sqlx::PgPool;

use crate::entities::MentorEntity;
use crate::metrics::QueryTimer;
use crate::repositories::{contains_pattern, store_error};

/// Repository for mentor-related database operations.
#[derive(Clone)]
pub struct MentorRepository {
    pool: PgPool,
}

impl MentorRepository {
    /// Creates a new MentorRepository with the given connection pool.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Insert a mentor and return the stored row.
    pub async fn create_mentor(
        &self,
        mentor: &RegisterMentorRequest,
    ) -> Result<MentorEntity, sqlx::Error> {
        let timer = QueryTimer::new("create_mentor");
        let result = sqlx::query_as::<_, MentorEntity>(
            r#"
            INSERT INTO mentors (name, age, location, expertise, experience)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING id, name, age, location, expertise, experience
            "#,
        )
        .bind(&mentor.name)
        .bind(mentor.age)
        .bind(&mentor.location)
        .bind(&mentor.expertise)
        .bind(mentor.experience)
        .fetch_one(&self.pool)
        .await;
        timer.finish(result)
    }

    /// List mentors in insertion order.
    pub async fn list_mentors(&self, page: PageRequest) -> Result<Vec<MentorEntity>, sqlx::Error> {
        let timer = QueryTimer::new("list_mentors");
        let result = sqlx::query_as::<_, MentorEntity>(
            r#"
            SELECT id, name, age, location, expertise, experience
            FROM mentors
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

    /// Find mentors whose expertise contains `expertise`, ignoring case.
    pub async fn search_by_expertise(
        &self,
        expertise: &str,
    ) -> Result<Vec<MentorEntity>, sqlx::Error> {
        let timer = QueryTimer::new("search_mentors_by_expertise");
        let result = sqlx::query_as::<_, MentorEntity>(
            r#"
            SELECT id, name, age, location, expertise, experience
            FROM mentors
            WHERE expertise ILIKE $1 ESCAPE '\'
            ORDER BY id ASC
            "#,
        )
        .bind(contains_pattern(expertise))
        .fetch_all(&self.pool)
        .await;
        timer.finish(result)
    }
}

#[async_trait::async_trait]
impl MentorStore for MentorRepository {
    async fn insert(&self, mentor: RegisterMentorRequest) -> Result<Mentor, StoreError> {
        self.create_mentor(&mentor)
            .await
            .map(Into::into)
            .map_err(store_error)
    }

    async fn list(&self, page: PageRequest) -> Result<Vec<Mentor>, StoreError> {
        self.list_mentors(page)
            .await
            .map(|rows| rows.into_iter().map(Into::into).collect())
            .map_err(store_error)
    }

    async fn search_by_expertise(&self, expertise: &str) -> Result<Vec<Mentor>, StoreError> {
        MentorRepository::search_by_expertise(self, expertise)
            .await
            .map(|rows| rows.into_iter().map(Into::into).collect())
            .map_err(store_error)
    }
}
