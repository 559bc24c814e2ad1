//! User domain models.

use serde::{Deserialize, Serialize};
use validator::Validate;

/// A registered user account.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct User {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub preferred_language: String,
    pub role: String,
    #[serde(skip_serializing)] // Never serialize password hash to API responses
    pub password_hash: String,
}

/// A user row ready for insertion, password already hashed.
#[derive(Debug, Clone, PartialEq)]
pub struct NewUser {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub preferred_language: String,
    pub role: String,
    pub password_hash: String,
}

/// Request payload for user registration.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct RegisterUserRequest {
    #[validate(length(min = 1, max = 100, message = "Name must be between 1 and 100 characters"))]
    pub name: String,

    #[validate(email(message = "Invalid email format"))]
    #[validate(length(max = 100, message = "Email must be at most 100 characters"))]
    pub email: String,

    #[validate(length(min = 1, max = 15, message = "Phone must be between 1 and 15 characters"))]
    pub phone: String,

    #[validate(length(
        min = 1,
        max = 50,
        message = "Preferred language must be between 1 and 50 characters"
    ))]
    pub preferred_language: String,

    #[validate(length(min = 1, max = 50, message = "Role must be between 1 and 50 characters"))]
    pub role: String,

    #[validate(length(min = 1, message = "Password is required"))]
    pub password: String,
}

/// Public view of a user; the password hash never leaves the service.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserResponse {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub preferred_language: String,
    pub role: String,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            name: user.name,
            email: user.email,
            phone: user.phone,
            preferred_language: user.preferred_language,
            role: user.role,
        }
    }
}
