use crate::error::AppError;
use bcrypt::{hash, verify, DEFAULT_COST};

/// Hashes a password with bcrypt at the default cost.
///
/// Every call salts freshly, so hashing the same password twice yields
/// different encoded strings that both verify.
pub fn hash_password(password: &str) -> Result<String, AppError> {
    Ok(hash(password, DEFAULT_COST)?)
}

/// Checks a password against a stored bcrypt hash.
///
/// A hash that cannot be decoded counts as a failed match rather than an
/// error, so callers always get a plain yes/no answer.
pub fn verify_password(password: &str, hashed_password: &str) -> bool {
    verify(password, hashed_password).unwrap_or(false)
}
