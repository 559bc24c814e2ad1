//! Database entity definitions.
//!
//! Entities are direct mappings to database rows.

pub mod mentor;
pub mod service_provider;
pub mod user;

pub use mentor::MentorEntity;
pub use service_provider::ServiceProviderEntity;
pub use user::UserEntity;
