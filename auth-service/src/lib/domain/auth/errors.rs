use thiserror::Error;

/// Failure conditions reported by storage adapters.
///
/// The three named conditions are the only ones the domain distinguishes;
/// everything else is carried as an opaque `Database` message.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum StorageError {
    #[error("User already exists")]
    UserExists,

    #[error("User not found")]
    UserNotFound,

    #[error("App not found")]
    AppNotFound,

    #[error("Database error: {0}")]
    Database(String),
}

/// Top-level error for all authentication operations
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum AuthError {
    /// Unknown email or wrong password; deliberately not told apart.
    #[error("Invalid email or password")]
    InvalidCredentials,

    #[error("User already exists")]
    EmailAlreadyExists,

    #[error("User not found")]
    UserNotFound,

    #[error("App not found")]
    ApplicationNotFound,

    #[error("Internal error: {0}")]
    Internal(String),
}
