use crate::config::{Config, TOKEN_ISSUER, TOKEN_VALIDITY_HOURS};
use crate::error::AppError;
use chrono::Duration;
use jsonwebtoken::{
    decode, encode, errors::ErrorKind, DecodingKey, EncodingKey, Header, Validation,
};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Represents the claims encoded within an issued token.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Claims {
    /// Subject of the token, the user's unique identifier.
    pub sub: i32,
    /// Username of the subject, carried so protected handlers can identify
    /// the caller without a registry lookup.
    pub username: String,
    /// Issuer identifier, checked on verification.
    pub iss: String,
    /// Expiration timestamp (seconds since epoch).
    pub exp: usize,
}

/// Why a token failed verification.
///
/// All variants map to a 401 at the HTTP boundary; the distinction exists
/// for diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenError {
    /// The token could not be decoded or its signature did not check out.
    Malformed,
    /// The token was well-formed but its validity window has passed.
    Expired,
    /// The token was signed for a different issuer.
    IssuerMismatch,
}

impl fmt::Display for TokenError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            TokenError::Malformed => write!(f, "Invalid token"),
            TokenError::Expired => write!(f, "Token expired"),
            TokenError::IssuerMismatch => write!(f, "Token issuer mismatch"),
        }
    }
}

impl From<TokenError> for AppError {
    fn from(error: TokenError) -> AppError {
        AppError::Unauthorized(error.to_string())
    }
}

/// Issues and verifies signed, expiring identity tokens.
///
/// The signing secret is injected once at construction; the service is
/// shared process-wide through `web::Data` rather than reading the
/// environment on every call.
pub struct TokenService {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    issuer: String,
    validity: Duration,
}

impl TokenService {
    pub fn new(secret: &str, issuer: &str, validity: Duration) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(secret.as_bytes()),
            issuer: issuer.to_string(),
            validity,
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(
            &config.jwt_secret,
            TOKEN_ISSUER,
            Duration::hours(TOKEN_VALIDITY_HOURS),
        )
    }

    /// Generates a signed token for the given user.
    ///
    /// The token embeds the user id, username and issuer, and expires after
    /// the service's validity window (24 hours by default).
    pub fn issue(&self, user_id: i32, username: &str) -> Result<String, AppError> {
        let expiration = chrono::Utc::now()
            .checked_add_signed(self.validity)
            .expect("valid timestamp")
            .timestamp() as usize;

        let claims = Claims {
            sub: user_id,
            username: username.to_string(),
            iss: self.issuer.clone(),
            exp: expiration,
        };

        encode(&Header::default(), &claims, &self.encoding_key)
            .map_err(|e| AppError::InternalServerError(format!("Failed to generate token: {}", e)))
    }

    /// Verifies a token string and decodes its claims.
    ///
    /// Checks the signature, the issuer and the expiry. Expiry is evaluated
    /// with zero leeway so a token is rejected the second its window closes.
    pub fn verify(&self, token: &str) -> Result<Claims, TokenError> {
        let mut validation = Validation::default();
        validation.set_issuer(&[&self.issuer]);
        validation.leeway = 0;

        decode::<Claims>(token, &self.decoding_key, &validation)
            .map(|data| data.claims)
            .map_err(|e| match e.kind() {
                ErrorKind::ExpiredSignature => TokenError::Expired,
                ErrorKind::InvalidIssuer => TokenError::IssuerMismatch,
                _ => TokenError::Malformed,
            })
    }
}
