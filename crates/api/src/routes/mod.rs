//! HTTP route handlers.

pub mod activity_logs;
pub mod apps;
pub mod auth;
pub mod content;
pub mod dashboard;
pub mod health;
pub mod i18n;
pub mod messages;
pub mod public_config;
pub mod site_settings;
pub mod users;
