//! Custom Axum extractors.
//!
//! Extractors for parsing and validating request data.

pub mod form;

pub use form::{PageForm, ValidatedForm};
