//! Mentor registration, listing and expertise search.

use std::sync::Arc;

use shared::pagination::PageRequest;
use tracing::{debug, info};

use crate::errors::DomainError;
use crate::models::{Mentor, RegisterMentorRequest};
use crate::services::store::MentorStore;

pub const NO_MENTORS_FOUND: &str = "No mentors found with the given expertise";

/// Record service for mentors.
#[derive(Clone)]
pub struct MentorService {
    store: Arc<dyn MentorStore>,
}

impl MentorService {
    pub fn new(store: Arc<dyn MentorStore>) -> Self {
        Self { store }
    }

    pub async fn register(&self, request: RegisterMentorRequest) -> Result<Mentor, DomainError> {
        let mentor = self.store.insert(request).await?;
        info!(mentor_id = mentor.id, "Mentor registered");
        Ok(mentor)
    }

    pub async fn list(&self, page: PageRequest) -> Result<Vec<Mentor>, DomainError> {
        Ok(self.store.list(page).await?)
    }

    /// Case-insensitive substring search on expertise. An empty result is an error.
    pub async fn search_by_expertise(&self, expertise: &str) -> Result<Vec<Mentor>, DomainError> {
        let mentors = self.store.search_by_expertise(expertise).await?;
        if mentors.is_empty() {
            debug!(expertise = %expertise, "No mentors matched");
            return Err(DomainError::NotFound(NO_MENTORS_FOUND.to_string()));
        }
        Ok(mentors)
    }
}
