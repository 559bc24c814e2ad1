//! Repository implementations for database operations.
//!
//! Each repository also implements the matching domain store trait, so the
//! record services can run against PostgreSQL.

pub mod mentor;
pub mod service_provider;
pub mod user;

pub use mentor::MentorRepository;
pub use service_provider::ServiceProviderRepository;
pub use user::UserRepository;

use domain::StoreError;

/// PostgreSQL SQLSTATE for unique_violation.
const UNIQUE_VIOLATION: &str = "23505";

/// Maps a sqlx error onto the store error the domain understands.
pub(crate) fn store_error(err: sqlx::Error) -> StoreError {
    if let sqlx::Error::Database(db_err) = &err {
        if db_err.code().as_deref() == Some(UNIQUE_VIOLATION) {
            let constraint = db_err.constraint().unwrap_or("unique").to_string();
            return StoreError::Duplicate(constraint);
        }
    }
    tracing::error!(error = %err, "Database operation failed");
    StoreError::Backend(err.to_string())
}

/// Builds an `ILIKE` pattern that matches `term` literally anywhere in a value.
///
/// Backslash is the escape character, so `%`, `_` and `\` in the term are escaped.
pub(crate) fn contains_pattern(term: &str) -> String {
    let mut pattern = String::with_capacity(term.len() + 2);
    pattern.push('%');
    for c in term.chars() {
        if matches!(c, '%' | '_' | '\\') {
            pattern.push('\\');
        }
        pattern.push(c);
    }
    pattern.push('%');
    pattern
}
