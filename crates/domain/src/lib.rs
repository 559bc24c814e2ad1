//! Domain layer for the Mentor Hub backend.
//!
//! This crate contains:
//! - Domain models (User, Mentor, ServiceProvider) and their request payloads
//! - Store traits and the record services built on them
//! - Domain error types

pub mod errors;
pub mod models;
pub mod services;

pub use errors::{DomainError, StoreError};
