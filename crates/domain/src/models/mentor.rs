//! Mentor domain models.

use serde::{Deserialize, Serialize};
use validator::Validate;

/// A registered mentor.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Mentor {
    pub id: i64,
    pub name: String,
    pub age: i32,
    pub location: String,
    pub expertise: String,
    /// Years of experience.
    pub experience: i32,
}

/// Request payload for mentor registration.
#[derive(Debug, Clone, PartialEq, Deserialize, Validate)]
pub struct RegisterMentorRequest {
    #[validate(length(min = 1, max = 100, message = "Name must be between 1 and 100 characters"))]
    pub name: String,

    pub age: i32,

    #[validate(length(
        min = 1,
        max = 100,
        message = "Location must be between 1 and 100 characters"
    ))]
    pub location: String,

    #[validate(length(
        min = 1,
        max = 255,
        message = "Expertise must be between 1 and 255 characters"
    ))]
    pub expertise: String,

    pub experience: i32,
}

/// Request payload for mentor search.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct SearchMentorsRequest {
    #[validate(length(
        min = 1,
        max = 255,
        message = "Expertise must be between 1 and 255 characters"
    ))]
    pub expertise: String,
}

impl Mentor {
    /// Builds the stored record for a request once the store has assigned an id.
    pub fn from_request(id: i64, request: RegisterMentorRequest) -> Self {
        Self {
            id,
            name: request.name,
            age: request.age,
            location: request.location,
            expertise: request.expertise,
            experience: request.experience,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_request() -> RegisterMentorRequest {
        RegisterMentorRequest {
            name: "Linus".to_string(),
            age: 42,
            location: "Helsinki".to_string(),
            expertise: "Data Science".to_string(),
            experience: 12,
        }
    }

    #[test]
    fn test_valid_request_passes() {
        assert!(valid_request().validate().is_ok());
    }

    #[test]
    fn test_numeric_fields_are_not_range_checked() {
        let mut request = valid_request();
        request.age = 200;
        request.experience = 120;
        assert!(request.validate().is_ok());
    }

    #[test]
    fn test_padded_name_accepted() {
        let mut request = valid_request();
        request.name = "  Linus  ".to_string();
        assert!(request.validate().is_ok());
    }

    #[test]
    fn test_overlong_expertise_rejected() {
        let mut request = valid_request();
        request.expertise = "x".repeat(256);
        let errors = request.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("expertise"));
    }

    #[test]
    fn test_empty_search_term_rejected() {
        let request = SearchMentorsRequest {
            expertise: String::new(),
        };
        assert!(request.validate().is_err());
    }

    #[test]
    fn test_from_request_copies_fields() {
        let mentor = Mentor::from_request(9, valid_request());
        assert_eq!(mentor.id, 9);
        assert_eq!(mentor.name, "Linus");
        assert_eq!(mentor.expertise, "Data Science");
        assert_eq!(mentor.experience, 12);
    }

    #[test]
    fn test_deserialize_form_shape() {
        let request: RegisterMentorRequest = serde_json::from_str(
            r#"{"name":"A","age":30,"location":"B","expertise":"Rust","experience":4}"#,
        )
        .unwrap();
        assert_eq!(request.age, 30);
        assert_eq!(request.experience, 4);
    }
}
