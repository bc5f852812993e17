//! Authentication service.
//!
//! Owns the login and logout flows. Dashboard access requires the stored
//! role to be `admin`; the role is re-read after the credential check, and a
//! non-admin login mints no token and leaves no session behind.

use chrono::{Duration, Utc};
use sqlx::PgPool;
use thiserror::Error;
use tracing::{info, warn};
use validator::ValidateEmail;

use crate::config::JwtAuthConfig;
use domain::models::User;
use persistence::repositories::UserRepository;
use shared::crypto::sha256_hex;
use shared::jwt::{JwtConfig, JwtError};
use shared::password::{verify_password, PasswordError};

/// Errors surfaced by the authentication flows.
#[derive(Debug, Error)]
pub enum AuthError {
    #[error("No account with that email")]
    NotFound,

    #[error("Invalid credentials")]
    InvalidCredential,

    #[error("Invalid input: {0}")]
    InvalidInputFormat(String),

    #[error("Account is not authorized for dashboard access")]
    Unauthorized,

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Password error: {0}")]
    Password(#[from] PasswordError),

    #[error("Token error: {0}")]
    Token(#[from] JwtError),
}

/// Result of a successful admin login.
#[derive(Debug)]
pub struct LoginOutcome {
    pub user: User,
    pub access_token: String,
    pub expires_in: i64,
}

/// Service for credential checks and session management.
pub struct AuthService {
    users: UserRepository,
    jwt: JwtConfig,
    pool: PgPool,
}

impl AuthService {
    pub fn new(pool: PgPool, jwt_config: &JwtAuthConfig) -> Result<Self, JwtError> {
        let jwt = JwtConfig::with_leeway(
            &jwt_config.private_key,
            &jwt_config.public_key,
            jwt_config.token_expiry_secs,
            jwt_config.leeway_secs,
        )?;

        Ok(Self {
            users: UserRepository::new(pool.clone()),
            jwt,
            pool,
        })
    }

    /// Authenticate an admin with email and password.
    ///
    /// Order matters: credentials are checked first, then the role is
    /// re-read from storage. A valid login on a non-admin account fails with
    /// [`AuthError::Unauthorized`] without creating a session.
    pub async fn login(&self, email: &str, password: &str) -> Result<LoginOutcome, AuthError> {
        if email.is_empty() || password.is_empty() {
            return Err(AuthError::InvalidInputFormat(
                "Email and password are required".to_string(),
            ));
        }
        if !email.validate_email() {
            return Err(AuthError::InvalidInputFormat(
                "Invalid email format".to_string(),
            ));
        }

        let entity = self
            .users
            .find_by_email(email)
            .await?
            .ok_or(AuthError::NotFound)?;
        let user_id = entity.id;

        let password_hash = entity
            .password_hash
            .as_deref()
            .ok_or(AuthError::InvalidCredential)?;
        if !verify_password(password, password_hash)? {
            return Err(AuthError::InvalidCredential);
        }

        // Fresh read: the role decision must come from storage, not from
        // whatever the client last saw.
        let user: User = self
            .users
            .find_by_id(user_id)
            .await?
            .ok_or(AuthError::NotFound)?
            .into();

        if !user.is_admin() {
            warn!(email = %user.email, "Non-admin login attempt rejected");
            return Err(AuthError::Unauthorized);
        }

        let (access_token, _jti) = self.jwt.generate_token(user.id)?;
        let expires_at = Utc::now() + Duration::seconds(self.jwt.token_expiry_secs);
        self.users
            .create_session(user.id, &sha256_hex(&access_token), expires_at)
            .await?;

        // Best-effort: a failed last-login write must not fail the login.
        let pool = self.pool.clone();
        let logged_in_id = user.id;
        tokio::spawn(async move {
            let repo = UserRepository::new(pool);
            if let Err(e) = repo.update_last_login(logged_in_id, Utc::now()).await {
                warn!(user_id = %logged_in_id, error = %e, "Failed to update last login");
            }
        });

        info!(user_id = %user.id, "Admin logged in");

        Ok(LoginOutcome {
            expires_in: self.jwt.token_expiry_secs,
            access_token,
            user,
        })
    }

    /// Terminate the session carried by `token`. Idempotent: logging out a
    /// token whose session is already gone succeeds.
    pub async fn logout(&self, token: &str) -> Result<(), AuthError> {
        let removed = self.users.delete_session(&sha256_hex(token)).await?;
        info!(removed, "Session terminated");
        Ok(())
    }
}
