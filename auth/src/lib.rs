//! Credential primitives for the authentication service
//!
//! - Password hashing (Argon2id, tunable work factor)
//! - Session claims and HS256 JWT encoding/decoding
//! - Token issuance bound to a per-application signing secret
//!
//! # Examples
//!
//! ## Password Hashing
//! ```
//! use auth::PasswordHasher;
//!
//! let hasher = PasswordHasher::new();
//! let hash = hasher.hash("my_password").unwrap();
//! let is_valid = hasher.verify("my_password", &hash).unwrap();
//! assert!(is_valid);
//! ```
//!
//! ## Session Tokens
//! ```
//! use auth::TokenIssuer;
//! use chrono::Duration;
//!
//! let issuer = TokenIssuer::new(Duration::hours(1));
//! let token = issuer
//!     .issue(1, "alice@example.com", 1, b"app_secret_at_least_32_bytes_long!")
//!     .unwrap();
//!
//! let claims = issuer
//!     .verify(&token, b"app_secret_at_least_32_bytes_long!")
//!     .unwrap();
//! assert_eq!(claims.uid, 1);
//! assert_eq!(claims.app_id, 1);
//! ```

pub mod issuer;
pub mod jwt;
pub mod password;

// Re-export commonly used items
pub use issuer::TokenIssuer;
pub use jwt::Claims;
pub use jwt::JwtError;
pub use jwt::JwtHandler;
pub use password::HashCost;
pub use password::PasswordError;
pub use password::PasswordHasher;
