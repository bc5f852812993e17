//! Shared utilities and common types for the App Store Platform backend.
//!
//! This crate provides common functionality used across all other crates:
//! - Password hashing with Argon2id
//! - JWT access-token generation and validation
//! - Token digests for session storage
//! - Common validation logic

pub mod crypto;
pub mod jwt;
pub mod password;
pub mod validation;
