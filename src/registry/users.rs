use std::collections::HashMap;
use std::sync::atomic::{AtomicI32, Ordering};
use std::sync::RwLock;

use crate::auth::{hash_password, verify_password};
use crate::error::AppError;
use crate::models::User;

/// Both maps live under one lock so the uniqueness check and the inserts
/// stay atomic with respect to concurrent registrations.
#[derive(Default)]
struct UserTable {
    by_id: HashMap<i32, User>,
    id_by_username: HashMap<String, i32>,
}

/// Owns user identity records and enforces username uniqueness.
///
/// Usernames are matched case-sensitively. Ids come from a strictly
/// increasing counter starting at 1 and are never reused.
pub struct UserRegistry {
    table: RwLock<UserTable>,
    next_id: AtomicI32,
}

impl UserRegistry {
    pub fn new() -> Self {
        Self {
            table: RwLock::new(UserTable::default()),
            next_id: AtomicI32::new(1),
        }
    }

    /// Creates a new user, hashing the password and assigning the next id.
    ///
    /// Returns `Conflict` if the username is already taken. The hash is
    /// computed before the write lock is taken, so registrations of
    /// different usernames don't serialize on bcrypt. A rejected
    /// registration does not consume an id.
    pub fn register(&self, username: &str, email: &str, password: &str) -> Result<User, AppError> {
        let password_hash = hash_password(password)?;

        let mut table = self.table.write().unwrap();
        if table.id_by_username.contains_key(username) {
            return Err(AppError::Conflict("Username already taken".into()));
        }

        let id = self.next_id.fetch_add(1, Ordering::Relaxed);
        let user = User {
            id,
            username: username.to_string(),
            email: email.to_string(),
            password_hash,
        };

        table.id_by_username.insert(user.username.clone(), id);
        table.by_id.insert(id, user.clone());

        Ok(user)
    }

    pub fn find_by_username(&self, username: &str) -> Option<User> {
        let table = self.table.read().unwrap();
        table
            .id_by_username
            .get(username)
            .and_then(|id| table.by_id.get(id))
            .cloned()
    }

    pub fn find_by_id(&self, id: i32) -> Option<User> {
        self.table.read().unwrap().by_id.get(&id).cloned()
    }

    /// Checks a username/password pair.
    ///
    /// An unknown username and a wrong password produce the same error, so
    /// a caller can't probe which usernames exist.
    pub fn authenticate(&self, username: &str, password: &str) -> Result<User, AppError> {
        match self.find_by_username(username) {
            Some(user) if verify_password(password, &user.password_hash) => Ok(user),
            _ => Err(AppError::Unauthorized("Invalid username or password".into())),
        }
    }
}

impl Default for UserRegistry {
    fn default() -> Self {
        Self::new()
    }
}
