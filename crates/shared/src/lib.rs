//! Shared utilities and common types for the Mentor Hub backend.
//!
//! This crate provides common functionality used across all other crates:
//! - Password hashing with Argon2id
//! - Offset pagination windows

pub mod pagination;
pub mod password;
