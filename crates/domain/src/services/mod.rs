//! Domain services for Mentor Hub.
//!
//! Record services hold an injected store handle and contain the registration,
//! listing and search rules for their entity.

pub mod memory;
pub mod mentors;
pub mod service_providers;
pub mod store;
pub mod users;

pub use memory::{InMemoryMentorStore, InMemoryServiceProviderStore, InMemoryUserStore};
pub use mentors::MentorService;
pub use service_providers::ServiceProviderService;
pub use store::{MentorStore, ServiceProviderStore, UserStore};
pub use users::UserService;
