use chrono::Duration;
use chrono::Utc;

use crate::jwt::Claims;
use crate::jwt::JwtError;
use crate::jwt::JwtHandler;

/// Issues signed, time-bounded session tokens.
///
/// Holds no key material: every call is given the secret of the application
/// the token is issued for, so a token only verifies under that secret.
#[derive(Debug, Clone)]
pub struct TokenIssuer {
    ttl: Duration,
}

impl TokenIssuer {
    /// Create a new token issuer.
    ///
    /// # Arguments
    /// * `ttl` - Lifetime of every issued token
    pub fn new(ttl: Duration) -> Self {
        Self { ttl }
    }

    /// Build and sign claims for a user logging into an application.
    ///
    /// # Arguments
    /// * `uid` - User identifier
    /// * `email` - User email
    /// * `app_id` - Application identifier
    /// * `secret` - Signing secret of that application
    ///
    /// # Returns
    /// Encoded JWT string expiring `ttl` from now
    ///
    /// # Errors
    /// * `EncodingFailed` - Signing failed
    pub fn issue(
        &self,
        uid: i64,
        email: &str,
        app_id: i32,
        secret: &[u8],
    ) -> Result<String, JwtError> {
        let claims = Claims::new(uid, email, app_id, Utc::now(), self.ttl);
        JwtHandler::new(secret).encode(&claims)
    }

    /// Verify a token against an application's secret and decode its claims.
    ///
    /// # Arguments
    /// * `token` - JWT token string
    /// * `secret` - Signing secret of the relying application
    ///
    /// # Errors
    /// * `TokenExpired` - Token has expired
    /// * `DecodingFailed` - Token is malformed or was signed with another secret
    pub fn verify(&self, token: &str, secret: &[u8]) -> Result<Claims, JwtError> {
        JwtHandler::new(secret).decode(token)
    }
}
