//! Database entity definitions.
//!
//! Entities are direct mappings to database rows.

pub mod about_content;
pub mod activity_log;
pub mod app;
pub mod contact_message;
pub mod site_settings;
pub mod user;

pub use about_content::AboutContentEntity;
pub use activity_log::ActivityLogEntity;
pub use app::AppEntity;
pub use contact_message::ContactMessageEntity;
pub use site_settings::SiteSettingsEntity;
pub use user::{UserEntity, UserSessionEntity};
