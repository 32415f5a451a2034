use tracing::info;

use super::{Dashboard, next_id};
use crate::error::{AppError, AppResult};
use crate::model::{role::Role, user::User};

impl Dashboard {
    /// Registers an operator. Usernames are case-insensitive and unique.
    pub fn add_user(&mut self, username: &str, password_hash: String, role: Role) -> AppResult<User> {
        let key = username.trim().to_lowercase();
        if key.is_empty() {
            return Err(AppError::validation("Username must not be empty"));
        }
        if self.users.contains_key(&key) {
            return Err(AppError::validation("Username already taken"));
        }

        let user = User {
            id: next_id(&mut self.ids.user),
            username: key.clone(),
            password_hash,
            role,
        };
        info!(user_id = user.id, username = %user.username, ?role, "User registered");
        self.users.insert(key, user.clone());
        Ok(user)
    }

    pub fn find_user(&self, username: &str) -> Option<&User> {
        self.users.get(&username.trim().to_lowercase())
    }
}

#[cfg(test)]
mod tests {
    use super::super::fixtures::june;
    use super::*;

    #[test]
    fn usernames_are_case_insensitive() {
        let mut dashboard = Dashboard::new(june());
        dashboard.add_user("Admin", "hash".into(), Role::Admin).unwrap();

        assert!(dashboard.find_user("ADMIN").is_some());
        assert!(dashboard.add_user("admin ", "hash".into(), Role::Hr).is_err());
    }
}
