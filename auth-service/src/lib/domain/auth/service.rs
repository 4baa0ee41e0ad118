use std::sync::Arc;

use async_trait::async_trait;
use auth::PasswordHasher;
use auth::TokenIssuer;

use crate::domain::auth::errors::AuthError;
use crate::domain::auth::errors::StorageError;
use crate::domain::auth::models::LoginCommand;
use crate::domain::auth::models::PasswordHash;
use crate::domain::auth::models::RegisterCommand;
use crate::domain::auth::models::UserId;
use crate::domain::auth::ports::AppProvider;
use crate::domain::auth::ports::AuthServicePort;
use crate::domain::auth::ports::UserProvider;
use crate::domain::auth::ports::UserSaver;

/// Domain service implementation for authentication.
///
/// Holds no per-request state; concurrent calls only meet in the storage
/// adapters. Every storage failure is classified here, so callers only ever
/// see an `AuthError`.
pub struct AuthService<US, UP, AP>
where
    US: UserSaver,
    UP: UserProvider,
    AP: AppProvider,
{
    user_saver: Arc<US>,
    user_provider: Arc<UP>,
    app_provider: Arc<AP>,
    password_hasher: PasswordHasher,
    token_issuer: TokenIssuer,
}

impl<US, UP, AP> AuthService<US, UP, AP>
where
    US: UserSaver,
    UP: UserProvider,
    AP: AppProvider,
{
    /// Create a new auth service with injected dependencies.
    ///
    /// # Arguments
    /// * `user_saver` - Persists new users
    /// * `user_provider` - Looks up users and admin flags
    /// * `app_provider` - Looks up applications and their secrets
    /// * `password_hasher` - Hashes and verifies passwords
    /// * `token_issuer` - Signs session tokens with the configured TTL
    pub fn new(
        user_saver: Arc<US>,
        user_provider: Arc<UP>,
        app_provider: Arc<AP>,
        password_hasher: PasswordHasher,
        token_issuer: TokenIssuer,
    ) -> Self {
        Self {
            user_saver,
            user_provider,
            app_provider,
            password_hasher,
            token_issuer,
        }
    }
}

#[async_trait]
impl<US, UP, AP> AuthServicePort for AuthService<US, UP, AP>
where
    US: UserSaver,
    UP: UserProvider,
    AP: AppProvider,
{
    async fn register(&self, command: RegisterCommand) -> Result<UserId, AuthError> {
        tracing::info!(email = %command.email, "Registering user");

        let hasher = self.password_hasher.clone();
        let password = command.password.clone();
        let password_hash = tokio::task::spawn_blocking(move || hasher.hash(&password))
            .await
            .map_err(|e| {
                tracing::error!(email = %command.email, error = %e, "Hashing task failed");
                AuthError::Internal(format!("Password hashing task failed: {}", e))
            })?
            .map_err(|e| {
                tracing::error!(email = %command.email, error = %e, "Failed to hash password");
                AuthError::Internal(format!("Password hashing failed: {}", e))
            })?;

        match self
            .user_saver
            .save_user(&command.email, &PasswordHash::new(password_hash))
            .await
        {
            Ok(user_id) => {
                tracing::info!(email = %command.email, user_id = %user_id, "User registered");
                Ok(user_id)
            }
            Err(StorageError::UserExists) => {
                tracing::warn!(email = %command.email, "User already exists");
                Err(AuthError::EmailAlreadyExists)
            }
            Err(e) => {
                tracing::error!(email = %command.email, error = %e, "Failed to save user");
                Err(AuthError::Internal(e.to_string()))
            }
        }
    }

    async fn login(&self, command: LoginCommand) -> Result<String, AuthError> {
        tracing::info!(email = %command.email, app_id = %command.app_id, "Logging in user");

        let user = match self.user_provider.user(&command.email).await {
            Ok(user) => user,
            Err(StorageError::UserNotFound) => {
                tracing::warn!(email = %command.email, "User not found");
                return Err(AuthError::InvalidCredentials);
            }
            Err(e) => {
                tracing::error!(email = %command.email, error = %e, "Failed to get user");
                return Err(AuthError::Internal(e.to_string()));
            }
        };

        let hasher = self.password_hasher.clone();
        let password = command.password.clone();
        let stored_hash = user.password_hash.as_str().to_owned();
        let verified = tokio::task::spawn_blocking(move || hasher.verify(&password, &stored_hash))
            .await
            .map_err(|e| {
                tracing::error!(user_id = %user.id, error = %e, "Verification task failed");
                AuthError::Internal(format!("Password verification task failed: {}", e))
            })?;

        match verified {
            Ok(true) => {}
            Ok(false) => {
                tracing::warn!(email = %command.email, user_id = %user.id, "Invalid password");
                return Err(AuthError::InvalidCredentials);
            }
            Err(e) => {
                tracing::error!(user_id = %user.id, error = %e, "Failed to verify password");
                return Err(AuthError::Internal(format!(
                    "Password verification failed: {}",
                    e
                )));
            }
        }

        let app = match self.app_provider.app(command.app_id).await {
            Ok(app) => app,
            Err(StorageError::AppNotFound) => {
                tracing::warn!(app_id = %command.app_id, "App not found");
                return Err(AuthError::ApplicationNotFound);
            }
            Err(e) => {
                tracing::error!(app_id = %command.app_id, error = %e, "Failed to get app");
                return Err(AuthError::Internal(e.to_string()));
            }
        };

        let token = self
            .token_issuer
            .issue(user.id.0, &user.email, app.id.0, app.secret.as_bytes())
            .map_err(|e| {
                tracing::error!(user_id = %user.id, app_id = %app.id, error = %e, "Failed to issue token");
                AuthError::Internal(format!("Token generation failed: {}", e))
            })?;

        tracing::info!(user_id = %user.id, app_id = %app.id, "User logged in");

        Ok(token)
    }

    async fn is_admin(&self, user_id: UserId) -> Result<bool, AuthError> {
        tracing::info!(user_id = %user_id, "Checking if user is admin");

        match self.user_provider.is_admin(user_id).await {
            Ok(is_admin) => {
                tracing::info!(user_id = %user_id, is_admin, "Checked if user is admin");
                Ok(is_admin)
            }
            Err(StorageError::UserNotFound) => {
                tracing::warn!(user_id = %user_id, "User not found");
                Err(AuthError::UserNotFound)
            }
            Err(e) => {
                tracing::error!(user_id = %user_id, error = %e, "Failed to check admin flag");
                Err(AuthError::Internal(e.to_string()))
            }
        }
    }
}
