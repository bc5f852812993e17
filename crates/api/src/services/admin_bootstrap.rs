//! Admin bootstrap service for initial setup.
//!
//! Creates the first admin account on startup if configured via environment
//! variables. Idempotent: once any admin exists it does nothing.

use sqlx::PgPool;
use tracing::{info, warn};

use crate::config::AdminBootstrapConfig;
use domain::models::UserRole;
use persistence::repositories::UserRepository;
use shared::password::{hash_password, PasswordError};

/// Error types for admin bootstrap.
#[derive(Debug, thiserror::Error)]
pub enum BootstrapError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Password hashing error: {0}")]
    PasswordHash(#[from] PasswordError),
}

/// Bootstrap the admin account if configured and not already done.
///
/// Called after migrations on startup.
pub async fn bootstrap_admin(
    pool: &PgPool,
    config: &AdminBootstrapConfig,
) -> Result<(), BootstrapError> {
    if config.bootstrap_email.is_empty() {
        return Ok(());
    }

    if config.bootstrap_password.is_empty() {
        warn!(
            "APPSTORE__ADMIN__BOOTSTRAP_EMAIL is set but APPSTORE__ADMIN__BOOTSTRAP_PASSWORD is empty - skipping bootstrap"
        );
        return Ok(());
    }

    let users = UserRepository::new(pool.clone());

    if users.admin_exists().await? {
        info!("Admin account already exists - skipping bootstrap");
        return Ok(());
    }

    let password_hash = hash_password(&config.bootstrap_password)?;

    let user = users
        .create_user(
            &config.bootstrap_email,
            Some(&password_hash),
            Some(&config.display_name),
            UserRole::Admin.as_str(),
        )
        .await?;

    info!(user_id = %user.id, email = %user.email, "Bootstrap admin account created");
    Ok(())
}
