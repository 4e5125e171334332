/// A registered account as held by the user registry.
///
/// The record is immutable after registration and is never serialized into a
/// response body, so the bcrypt hash stays inside the process.
#[derive(Debug, Clone)]
pub struct User {
    pub id: i32,
    pub username: String,
    pub email: String,
    pub password_hash: String,
}
