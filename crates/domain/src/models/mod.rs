//! Domain models for the App Store Platform.

pub mod about_content;
pub mod activity_log;
pub mod app;
pub mod contact_message;
pub mod dashboard;
pub mod site_settings;
pub mod user;

pub use about_content::AboutContent;
pub use activity_log::{ActivityLog, CreateActivityLogInput};
pub use app::App;
pub use contact_message::{ContactMessage, MessageReply};
pub use dashboard::{
    ActivityOverview, AppsOverview, ChartSeries, DashboardStats, MessageCounters, SettingsOverview,
};
pub use site_settings::{SeoMeta, SiteSettings, SocialLinks, Theme, SITE_SETTINGS_ID};
pub use user::{User, UserRole};
