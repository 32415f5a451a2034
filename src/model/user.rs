use crate::model::role::Role;

/// Dashboard operator. Only the argon2 hash of the password is kept.
#[derive(Debug, Clone)]
pub struct User {
    pub id: u64,
    pub username: String,
    pub password_hash: String,
    pub role: Role,
}
