//! Domain layer for the App Store Platform backend.
//!
//! This crate contains:
//! - Domain models (App, User, ContactMessage, SiteSettings, ActivityLog)
//! - The translation table and locale handling
//! - Business logic services (maintenance countdown, activity log builder)

pub mod i18n;
pub mod models;
pub mod services;
