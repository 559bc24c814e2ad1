//! Mentor entity (database row mapping).

use sqlx::FromRow;

/// Database row mapping for the mentors table.
#[derive(Debug, Clone, FromRow)]
pub struct MentorEntity {
    pub id: i64,
    pub name: String,
    pub age: i32,
    pub location: String,
    pub expertise: String,
    pub experience: i32,
}

impl From<MentorEntity> for domain::models::Mentor {
    fn from(entity: MentorEntity) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            age: entity.age,
            location: entity.location,
            expertise: entity.expertise,
            experience: entity.experience,
        }
    }
}
