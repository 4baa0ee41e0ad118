use std::fmt;

/// Registered user, as loaded from storage for a single request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub id: UserId,
    pub email: String,
    pub password_hash: PasswordHash,
    pub is_admin: bool,
}

/// User identifier, assigned by storage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct UserId(pub i64);

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Calling application that tokens are issued for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct App {
    pub id: AppId,
    pub name: String,
    pub secret: AppSecret,
}

/// Application identifier, provisioned outside this service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct AppId(pub i32);

impl fmt::Display for AppId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Stored password hash (PHC string). Never the plaintext.
///
/// `Debug` is redacted so the hash cannot end up in logs.
#[derive(Clone, PartialEq, Eq)]
pub struct PasswordHash(String);

impl PasswordHash {
    pub fn new(hash: String) -> Self {
        Self(hash)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for PasswordHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("PasswordHash(<redacted>)")
    }
}

/// Token signing secret of an application.
#[derive(Clone, PartialEq, Eq)]
pub struct AppSecret(Vec<u8>);

impl AppSecret {
    pub fn new(secret: impl Into<Vec<u8>>) -> Self {
        Self(secret.into())
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }
}

impl fmt::Debug for AppSecret {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("AppSecret(<redacted>)")
    }
}

/// Command to register a new user.
///
/// Email and password are taken as supplied; format checks belong to the
/// inbound adapter.
pub struct RegisterCommand {
    pub email: String,
    pub password: String,
}

impl RegisterCommand {
    /// Construct a new register command.
    ///
    /// # Arguments
    /// * `email` - Email the account is looked up by
    /// * `password` - Plain text password (will be hashed by service)
    pub fn new(email: String, password: String) -> Self {
        Self { email, password }
    }
}

impl fmt::Debug for RegisterCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RegisterCommand")
            .field("email", &self.email)
            .finish_non_exhaustive()
    }
}

/// Command to log a user into an application.
pub struct LoginCommand {
    pub email: String,
    pub password: String,
    pub app_id: AppId,
}

impl LoginCommand {
    /// Construct a new login command.
    ///
    /// # Arguments
    /// * `email` - Account email
    /// * `password` - Plain text password to verify
    /// * `app_id` - Application the token will be issued for
    pub fn new(email: String, password: String, app_id: AppId) -> Self {
        Self {
            email,
            password,
            app_id,
        }
    }
}

impl fmt::Debug for LoginCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LoginCommand")
            .field("email", &self.email)
            .field("app_id", &self.app_id)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_secrets_are_redacted_in_debug() {
        let user = User {
            id: UserId(1),
            email: "alice@example.com".to_string(),
            password_hash: PasswordHash::new("$argon2id$v=19$secret".to_string()),
            is_admin: false,
        };
        let app = App {
            id: AppId(1),
            name: "test".to_string(),
            secret: AppSecret::new("app-secret"),
        };
        let command = LoginCommand::new(
            "alice@example.com".to_string(),
            "Secret123".to_string(),
            AppId(1),
        );

        let rendered = format!("{:?} {:?} {:?}", user, app, command);

        assert!(!rendered.contains("$argon2id"));
        assert!(!rendered.contains("app-secret"));
        assert!(!rendered.contains("Secret123"));
        assert!(rendered.contains("alice@example.com"));
    }
}
