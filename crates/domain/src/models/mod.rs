//! Domain models for Mentor Hub.

pub mod mentor;
pub mod service_provider;
pub mod user;

pub use mentor::{Mentor, RegisterMentorRequest, SearchMentorsRequest};
pub use service_provider::{
    RegisterServiceProviderRequest, SearchServiceProvidersRequest, ServiceProvider,
};
pub use user::{NewUser, RegisterUserRequest, User, UserResponse};
