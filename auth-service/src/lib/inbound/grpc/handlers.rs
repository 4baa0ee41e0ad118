use std::str::FromStr;

use thiserror::Error;
use tonic::Status;

use crate::domain::auth::errors::AuthError;

pub mod is_admin;
pub mod login;
pub mod register;

impl From<AuthError> for Status {
    fn from(err: AuthError) -> Self {
        match err {
            AuthError::InvalidCredentials => Status::invalid_argument(err.to_string()),
            AuthError::EmailAlreadyExists => Status::already_exists(err.to_string()),
            AuthError::UserNotFound | AuthError::ApplicationNotFound => {
                Status::not_found(err.to_string())
            }
            AuthError::Internal(_) => Status::internal("internal error"),
        }
    }
}

/// Malformed request fields, rejected before reaching the domain.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
enum ParseRequestError {
    #[error("email is required")]
    MissingEmail,

    #[error("Invalid email: {0}")]
    InvalidEmail(String),

    #[error("password is required")]
    MissingPassword,

    #[error("app_id is required")]
    MissingAppId,

    #[error("user_id is required")]
    MissingUserId,
}

impl From<ParseRequestError> for Status {
    fn from(err: ParseRequestError) -> Self {
        Status::invalid_argument(err.to_string())
    }
}

fn parse_email(email: String) -> Result<String, ParseRequestError> {
    if email.is_empty() {
        return Err(ParseRequestError::MissingEmail);
    }

    email_address::EmailAddress::from_str(&email)
        .map(|_| email)
        .map_err(|e| ParseRequestError::InvalidEmail(e.to_string()))
}

fn parse_password(password: String) -> Result<String, ParseRequestError> {
    if password.is_empty() {
        Err(ParseRequestError::MissingPassword)
    } else {
        Ok(password)
    }
}

#[cfg(test)]
mod tests {
    use tonic::Code;

    use super::*;

    #[test]
    fn test_auth_error_status_codes() {
        let cases = [
            (AuthError::InvalidCredentials, Code::InvalidArgument),
            (AuthError::EmailAlreadyExists, Code::AlreadyExists),
            (AuthError::UserNotFound, Code::NotFound),
            (AuthError::ApplicationNotFound, Code::NotFound),
            (AuthError::Internal("boom".to_string()), Code::Internal),
        ];

        for (err, code) in cases {
            assert_eq!(Status::from(err).code(), code);
        }
    }

    #[test]
    fn test_internal_error_details_are_hidden() {
        let status = Status::from(AuthError::Internal(
            "Database error: no such table: users".to_string(),
        ));

        assert_eq!(status.message(), "internal error");
    }

    #[test]
    fn test_parse_email() {
        assert_eq!(
            parse_email("alice@example.com".to_string()),
            Ok("alice@example.com".to_string())
        );
        assert_eq!(
            parse_email(String::new()),
            Err(ParseRequestError::MissingEmail)
        );
        assert!(matches!(
            parse_email("not-an-email".to_string()),
            Err(ParseRequestError::InvalidEmail(_))
        ));
    }

    #[test]
    fn test_parse_password() {
        assert_eq!(
            parse_password(String::new()),
            Err(ParseRequestError::MissingPassword)
        );
        assert_eq!(parse_password("x".to_string()), Ok("x".to_string()));
    }
}
