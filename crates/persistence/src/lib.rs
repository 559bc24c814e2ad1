//! Persistence layer for the Mentor Hub backend.
//!
//! This crate contains:
//! - Database connection management and schema bootstrap
//! - Entity definitions (database row mappings)
//! - Repository implementations of the domain store traits

pub mod db;
pub mod entities;
pub mod metrics;
pub mod repositories;
