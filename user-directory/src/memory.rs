use crate::models::User;
use crate::service::{DirectoryError, UserDirectory};
use chrono::Utc;
use std::sync::Mutex;

/// Process-local user directory
#[derive(Debug, Default)]
pub struct InMemoryUserDirectory {
    users: Mutex<Vec<User>>,
}

impl InMemoryUserDirectory {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> Result<std::sync::MutexGuard<'_, Vec<User>>, DirectoryError> {
        self.users
            .lock()
            .map_err(|_| DirectoryError::ServerError {
                message: "User directory is unavailable".to_string(),
                code: None,
            })
    }
}

impl UserDirectory for InMemoryUserDirectory {
    async fn save_username(
        &self,
        user_id: &str,
        username: &str,
        name: Option<&str>,
    ) -> Result<(), DirectoryError> {
        let mut users = self.lock()?;
        let now = Utc::now();

        match users.iter_mut().find(|u| u.id == user_id) {
            Some(user) => {
                user.username = username.to_string();
                if let Some(name) = name {
                    user.name = Some(name.to_string());
                }
                user.updated_at = now;
            }
            None => users.push(User {
                id: user_id.to_string(),
                username: username.to_string(),
                name: name.map(str::to_string),
                created_at: now,
                updated_at: now,
            }),
        }

        Ok(())
    }

    async fn get_user(&self, user_id: &str) -> Result<Option<User>, DirectoryError> {
        Ok(self.lock()?.iter().find(|u| u.id == user_id).cloned())
    }

    async fn check_username_availability(&self, username: &str) -> Result<bool, DirectoryError> {
        Ok(!self.lock()?.iter().any(|u| u.username == username))
    }
}
