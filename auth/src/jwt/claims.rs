use chrono::DateTime;
use chrono::Duration;
use chrono::Utc;
use serde::Deserialize;
use serde::Serialize;

/// Session token claims.
///
/// Binds a user to the application the token was issued for. Relying
/// applications verify the signature with their own secret and compare
/// `exp` against the current time.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Claims {
    /// User identifier
    pub uid: i64,

    /// User email
    pub email: String,

    /// Identifier of the application the token was issued for
    pub app_id: i32,

    /// Expiration time (Unix timestamp)
    pub exp: i64,
}

impl Claims {
    /// Create claims that expire `ttl` after `issued_at`.
    ///
    /// # Arguments
    /// * `uid` - User identifier
    /// * `email` - User email
    /// * `app_id` - Application identifier
    /// * `issued_at` - Issuance instant
    /// * `ttl` - Token lifetime
    pub fn new(
        uid: i64,
        email: impl Into<String>,
        app_id: i32,
        issued_at: DateTime<Utc>,
        ttl: Duration,
    ) -> Self {
        Self {
            uid,
            email: email.into(),
            app_id,
            exp: (issued_at + ttl).timestamp(),
        }
    }
}
