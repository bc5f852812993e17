//! Repository implementations for database operations.

pub mod about_content;
pub mod activity_log;
pub mod app;
pub mod contact_message;
pub mod dashboard;
pub mod site_settings;
pub mod user;

pub use about_content::AboutContentRepository;
pub use activity_log::ActivityLogRepository;
pub use app::{AppChanges, AppRepository, NewApp};
pub use contact_message::ContactMessageRepository;
pub use dashboard::DashboardRepository;
pub use site_settings::SiteSettingsRepository;
pub use user::UserRepository;
