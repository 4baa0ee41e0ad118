use async_trait::async_trait;

use crate::domain::auth::errors::AuthError;
use crate::domain::auth::errors::StorageError;
use crate::domain::auth::models::App;
use crate::domain::auth::models::AppId;
use crate::domain::auth::models::LoginCommand;
use crate::domain::auth::models::PasswordHash;
use crate::domain::auth::models::RegisterCommand;
use crate::domain::auth::models::User;
use crate::domain::auth::models::UserId;

/// Port for authentication domain service operations.
#[async_trait]
pub trait AuthServicePort: Send + Sync + 'static {
    /// Register a new user.
    ///
    /// # Arguments
    /// * `command` - Email and plaintext password
    ///
    /// # Returns
    /// Identifier assigned to the new user
    ///
    /// # Errors
    /// * `EmailAlreadyExists` - Email is already registered
    /// * `Internal` - Hashing or storage failed
    async fn register(&self, command: RegisterCommand) -> Result<UserId, AuthError>;

    /// Authenticate a user and issue a session token for an application.
    ///
    /// # Arguments
    /// * `command` - Email, plaintext password and target application
    ///
    /// # Returns
    /// Signed session token
    ///
    /// # Errors
    /// * `InvalidCredentials` - Email unknown or password wrong
    /// * `ApplicationNotFound` - Application does not exist
    /// * `Internal` - Storage, verification or signing failed
    async fn login(&self, command: LoginCommand) -> Result<String, AuthError>;

    /// Check whether a user has admin privileges.
    ///
    /// # Arguments
    /// * `user_id` - User identifier
    ///
    /// # Errors
    /// * `UserNotFound` - User does not exist
    /// * `Internal` - Storage failed
    async fn is_admin(&self, user_id: UserId) -> Result<bool, AuthError>;
}

/// Persists new users.
#[async_trait]
pub trait UserSaver: Send + Sync + 'static {
    /// Persist a new user.
    ///
    /// # Arguments
    /// * `email` - Unique email
    /// * `password_hash` - Hash of the user's password
    ///
    /// # Returns
    /// Identifier assigned by storage
    ///
    /// # Errors
    /// * `UserExists` - Email is already taken
    /// * `Database` - Any other storage failure
    async fn save_user(
        &self,
        email: &str,
        password_hash: &PasswordHash,
    ) -> Result<UserId, StorageError>;
}

/// Looks up users.
#[async_trait]
pub trait UserProvider: Send + Sync + 'static {
    /// Retrieve user by email.
    ///
    /// # Errors
    /// * `UserNotFound` - No user with this email
    /// * `Database` - Any other storage failure
    async fn user(&self, email: &str) -> Result<User, StorageError>;

    /// Retrieve the admin flag of a user.
    ///
    /// # Errors
    /// * `UserNotFound` - No user with this identifier
    /// * `Database` - Any other storage failure
    async fn is_admin(&self, user_id: UserId) -> Result<bool, StorageError>;
}

/// Looks up registered applications.
#[async_trait]
pub trait AppProvider: Send + Sync + 'static {
    /// Retrieve application by identifier.
    ///
    /// # Errors
    /// * `AppNotFound` - No application with this identifier
    /// * `Database` - Any other storage failure
    async fn app(&self, app_id: AppId) -> Result<App, StorageError>;
}
