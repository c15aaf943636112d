use crate::error::AppError;
use user_directory::{User, UserDirectory};
use uuid::Uuid;

pub const MAX_USERNAME_LEN: usize = 30;

/// Trims the entered username and checks that it can be saved
pub fn validate_username(raw: &str) -> Result<String, AppError> {
    let username = raw.trim();

    if username.is_empty() {
        return Err(AppError::Validation(
            "Username must not be empty".to_string(),
        ));
    }

    if username.chars().count() > MAX_USERNAME_LEN {
        return Err(AppError::Validation(format!(
            "Username must not exceed {} characters",
            MAX_USERNAME_LEN
        )));
    }

    Ok(username.to_string())
}

/// Registers a new user with the chosen username and returns the stored record
pub async fn register_username<D: UserDirectory>(
    directory: &D,
    username: &str,
    name: Option<&str>,
) -> Result<User, AppError> {
    let username = validate_username(username)?;

    if !directory.check_username_availability(&username).await? {
        return Err(AppError::Validation(format!(
            "Username '{}' is already taken",
            username
        )));
    }

    let user_id = Uuid::new_v4().to_string();
    directory.save_username(&user_id, &username, name).await?;
    log::info!("Registered username {} for user {}", username, user_id);

    directory
        .get_user(&user_id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("User {}", user_id)))
}

/// Changes the username of an existing user
pub async fn rename_user<D: UserDirectory>(
    directory: &D,
    user_id: &str,
    username: &str,
    name: Option<&str>,
) -> Result<(), AppError> {
    let username = validate_username(username)?;

    if let Some(current) = directory.get_user(user_id).await? {
        if current.username == username {
            directory.save_username(user_id, &username, name).await?;
            return Ok(());
        }
    }

    if !directory.check_username_availability(&username).await? {
        return Err(AppError::Validation(format!(
            "Username '{}' is already taken",
            username
        )));
    }

    directory.save_username(user_id, &username, name).await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use user_directory::InMemoryUserDirectory;

    #[test]
    fn test_validate_trims() {
        assert_eq!(validate_username("  jacqfly ").unwrap(), "jacqfly");
    }

    #[test]
    fn test_validate_rejects_blank_and_long() {
        assert!(validate_username("   ").is_err());
        assert!(validate_username(&"x".repeat(31)).is_err());
        assert!(validate_username(&"x".repeat(30)).is_ok());
    }

    #[tokio::test]
    async fn test_register_username() {
        let directory = InMemoryUserDirectory::new();
        let user = register_username(&directory, " jacqfly ", Some("Jacqueline Flynn"))
            .await
            .unwrap();

        assert_eq!(user.username, "jacqfly");
        assert_eq!(user.name.as_deref(), Some("Jacqueline Flynn"));
        assert!(Uuid::parse_str(&user.id).is_ok());
    }

    #[tokio::test]
    async fn test_register_taken_username() {
        let directory = InMemoryUserDirectory::new();
        register_username(&directory, "jacqfly", None).await.unwrap();

        let err = register_username(&directory, "jacqfly", None)
            .await
            .unwrap_err();
        assert_eq!(err.user_message(), "Username 'jacqfly' is already taken");
    }

    #[tokio::test]
    async fn test_rename_user() {
        let directory = InMemoryUserDirectory::new();
        let first = register_username(&directory, "first", None).await.unwrap();
        register_username(&directory, "second", None).await.unwrap();

        assert!(rename_user(&directory, &first.id, "second", None).await.is_err());
        rename_user(&directory, &first.id, "first", Some("Name")).await.unwrap();
        rename_user(&directory, &first.id, "third", None).await.unwrap();

        let user = directory.get_user(&first.id).await.unwrap().unwrap();
        assert_eq!(user.username, "third");
    }
}
