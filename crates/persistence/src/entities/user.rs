//! User entity (database row mapping).

use sqlx::FromRow;

/// Database row mapping for the users table.
#[derive(Debug, Clone, FromRow)]
pub struct UserEntity {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub preferred_language: String,
    pub role: String,
    pub password_hash: String,
}

impl From<UserEntity> for domain::models::User {
    fn from(entity: UserEntity) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            email: entity.email,
            phone: entity.phone,
            preferred_language: entity.preferred_language,
            role: entity.role,
            password_hash: entity.password_hash,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_entity_to_domain() {
        let entity = UserEntity {
            id: 1,
            name: "Test User".to_string(),
            email: "test@example.com".to_string(),
            phone: "5550100".to_string(),
            preferred_language: "English".to_string(),
            role: "mentee".to_string(),
            password_hash: "$argon2id$v=19$...".to_string(),
        };
        let user: domain::models::User = entity.clone().into();

        assert_eq!(user.id, entity.id);
        assert_eq!(user.email, entity.email);
        assert_eq!(user.preferred_language, entity.preferred_language);
        assert_eq!(user.password_hash, entity.password_hash);
    }
}
