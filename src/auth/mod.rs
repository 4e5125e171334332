pub mod extractors;
pub mod middleware;
pub mod password;
pub mod token;

use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

// Re-export necessary items
pub use extractors::AuthenticatedUser;
pub use middleware::AuthMiddleware;
pub use password::{hash_password, verify_password};
pub use token::{Claims, TokenError, TokenService};

fn not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        let mut error = ValidationError::new("blank");
        error.message = Some("must not be blank".into());
        return Err(error);
    }
    Ok(())
}

/// Represents the payload for a new user registration request.
///
/// Username and password must be non-blank and the password at least
/// 4 characters. The email is stored as given; no format rule applies.
#[derive(Debug, Deserialize, Validate)]
pub struct RegisterRequest {
    #[validate(custom = "not_blank")]
    pub username: String,
    pub email: String,
    #[validate(
        custom = "not_blank",
        length(min = 4, message = "must be at least 4 characters")
    )]
    pub password: String,
}

/// Represents the payload for a user login request.
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

/// Response structure after successful authentication (login or
/// registration). Carries the signed access token.
#[derive(Debug, Serialize, Deserialize)]
pub struct AuthResponse {
    pub success: bool,
    pub message: String,
    pub token: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use validator::Validate;

    #[test]
    fn test_register_request_validation() {
        let valid = RegisterRequest {
            username: "alice".to_string(),
            email: "a@x.com".to_string(),
            password: "pass1".to_string(),
        };
        assert!(valid.validate().is_ok());

        let blank_username = RegisterRequest {
            username: "   ".to_string(),
            email: "a@x.com".to_string(),
            password: "pass1".to_string(),
        };
        assert!(blank_username.validate().is_err());

        let short_password = RegisterRequest {
            username: "alice".to_string(),
            email: "a@x.com".to_string(),
            password: "abc".to_string(),
        };
        assert!(short_password.validate().is_err());

        let blank_password = RegisterRequest {
            username: "alice".to_string(),
            email: "a@x.com".to_string(),
            password: "    ".to_string(),
        };
        assert!(blank_password.validate().is_err());
    }

    #[test]
    fn test_email_format_is_not_validated() {
        // The registration contract stores the email as an opaque string.
        let odd_email = RegisterRequest {
            username: "alice".to_string(),
            email: "not-an-email".to_string(),
            password: "pass1".to_string(),
        };
        assert!(odd_email.validate().is_ok());
    }
}
