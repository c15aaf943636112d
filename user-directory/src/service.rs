use crate::models::{IdRow, PostgrestError, User, UserInsert, UserUpdate};
use chrono::Utc;
use serde::de::DeserializeOwned;
use std::time::Duration;

/// PostgREST code for "no rows" on single-object requests
const NO_ROWS_CODE: &str = "PGRST116";

const USER_AGENT: &str = "UserDirectory/0.1.0";

/// Error type for user directory operations
#[derive(Debug, Clone, PartialEq)]
pub enum DirectoryError {
    NetworkError(String),
    JsonError(String),
    ServerError {
        message: String,
        code: Option<String>,
    },
}

impl std::fmt::Display for DirectoryError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DirectoryError::NetworkError(msg) => write!(f, "Network error: {}", msg),
            DirectoryError::JsonError(msg) => write!(f, "JSON error: {}", msg),
            DirectoryError::ServerError { message, .. } => write!(f, "{}", message),
        }
    }
}

impl std::error::Error for DirectoryError {}

/// The three-operation contract of the user-record store
#[allow(async_fn_in_trait)]
pub trait UserDirectory {
    /// Inserts the user, or updates username and name if the id already exists
    async fn save_username(
        &self,
        user_id: &str,
        username: &str,
        name: Option<&str>,
    ) -> Result<(), DirectoryError>;

    /// Loads a user by id, `None` if there is no such row
    async fn get_user(&self, user_id: &str) -> Result<Option<User>, DirectoryError>;

    /// Returns `true` if no user currently holds `username`
    async fn check_username_availability(&self, username: &str) -> Result<bool, DirectoryError>;
}

/// Connection settings for a PostgREST endpoint
#[derive(Debug, Clone, PartialEq)]
pub struct RestConfig {
    pub base_url: String,
    pub api_key: String,
}

/// User directory backed by a PostgREST `users` table
pub struct RestUserDirectory {
    config: RestConfig,
    client: reqwest::Client,
}

impl RestUserDirectory {
    pub fn new(config: RestConfig) -> Result<Self, DirectoryError> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(30))
            .connect_timeout(Duration::from_secs(10))
            .tcp_keepalive(Duration::from_secs(30))
            .user_agent(USER_AGENT)
            .build()
            .map_err(|e| DirectoryError::NetworkError(format!("Client build failed: {}", e)))?;

        Ok(Self { config, client })
    }

    /// Endpoint of the `users` table
    pub fn users_url(&self) -> String {
        format!("{}/rest/v1/users", self.config.base_url.trim_end_matches('/'))
    }

    fn authorized(&self, request: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        request
            .header("apikey", &self.config.api_key)
            .bearer_auth(&self.config.api_key)
            .header("Accept", "application/json")
    }

    async fn select_rows<T: DeserializeOwned>(
        &self,
        query: &[(&str, String)],
    ) -> Result<Vec<T>, DirectoryError> {
        let response = self
            .authorized(self.client.get(self.users_url()))
            .query(query)
            .send()
            .await
            .map_err(|e| DirectoryError::NetworkError(format!("Request failed: {}", e)))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| DirectoryError::NetworkError(format!("Failed to read response: {}", e)))?;

        if !status.is_success() {
            return Err(error_from_body(status.as_u16(), &body));
        }

        decode_rows(&body)
    }

    async fn send_write(&self, request: reqwest::RequestBuilder) -> Result<(), DirectoryError> {
        let response = self
            .authorized(request)
            .header("Prefer", "return=minimal")
            .send()
            .await
            .map_err(|e| DirectoryError::NetworkError(format!("Request failed: {}", e)))?;

        let status = response.status();
        if status.is_success() {
            return Ok(());
        }

        let body = response.text().await.unwrap_or_default();
        Err(error_from_body(status.as_u16(), &body))
    }
}

impl UserDirectory for RestUserDirectory {
    async fn save_username(
        &self,
        user_id: &str,
        username: &str,
        name: Option<&str>,
    ) -> Result<(), DirectoryError> {
        let existing: Vec<IdRow> = self
            .select_rows(&[("select", "id".to_string()), ("id", eq(user_id))])
            .await?;

        if existing.is_empty() {
            log::debug!("Inserting user {}", user_id);
            let body = UserInsert {
                id: user_id,
                username,
                name,
            };
            self.send_write(self.client.post(self.users_url()).json(&body))
                .await
        } else {
            log::debug!("Updating username of user {}", user_id);
            let body = UserUpdate {
                username,
                name,
                updated_at: Utc::now(),
            };
            self.send_write(
                self.client
                    .patch(self.users_url())
                    .query(&[("id", eq(user_id))])
                    .json(&body),
            )
            .await
        }
    }

    async fn get_user(&self, user_id: &str) -> Result<Option<User>, DirectoryError> {
        let mut rows: Vec<User> = self
            .select_rows(&[("select", "*".to_string()), ("id", eq(user_id))])
            .await?;

        Ok(if rows.is_empty() {
            None
        } else {
            Some(rows.swap_remove(0))
        })
    }

    async fn check_username_availability(&self, username: &str) -> Result<bool, DirectoryError> {
        let result: Result<Vec<IdRow>, DirectoryError> = self
            .select_rows(&[("select", "id".to_string()), ("username", eq(username))])
            .await;

        match result {
            Ok(rows) => Ok(rows.is_empty()),
            Err(DirectoryError::ServerError {
                code: Some(code), ..
            }) if code == NO_ROWS_CODE => Ok(true),
            Err(e) => Err(e),
        }
    }
}

/// PostgREST equality filter value
fn eq(value: &str) -> String {
    format!("eq.{}", value)
}

fn decode_rows<T: DeserializeOwned>(body: &str) -> Result<Vec<T>, DirectoryError> {
    serde_json::from_str(body)
        .map_err(|e| DirectoryError::JsonError(format!("Failed to parse response: {}", e)))
}

/// Turns a non-success response into a `ServerError`, keeping the server's
/// message when the body is a PostgREST error object
fn error_from_body(status: u16, body: &str) -> DirectoryError {
    match serde_json::from_str::<PostgrestError>(body) {
        Ok(err) => DirectoryError::ServerError {
            message: err.message,
            code: err.code,
        },
        Err(_) => DirectoryError::ServerError {
            message: format!("Server returned status: {}", status),
            code: None,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn directory(base_url: &str) -> RestUserDirectory {
        RestUserDirectory::new(RestConfig {
            base_url: base_url.to_string(),
            api_key: "key".to_string(),
        })
        .unwrap()
    }

    #[test]
    fn test_users_url_trims_trailing_slash() {
        assert_eq!(
            directory("https://db.example.com/").users_url(),
            "https://db.example.com/rest/v1/users"
        );
        assert_eq!(
            directory("https://db.example.com").users_url(),
            "https://db.example.com/rest/v1/users"
        );
    }

    #[test]
    fn test_eq_filter() {
        assert_eq!(eq("jacqfly"), "eq.jacqfly");
    }

    #[test]
    fn test_error_from_postgrest_body() {
        let body = r#"{"code":"23505","message":"duplicate key value","details":null,"hint":null}"#;
        let err = error_from_body(409, body);
        assert_eq!(
            err,
            DirectoryError::ServerError {
                message: "duplicate key value".to_string(),
                code: Some("23505".to_string()),
            }
        );
        assert_eq!(err.to_string(), "duplicate key value");
    }

    #[test]
    fn test_error_from_opaque_body() {
        let err = error_from_body(502, "<html>Bad Gateway</html>");
        assert_eq!(err.to_string(), "Server returned status: 502");
    }

    #[test]
    fn test_decode_rows() {
        let rows: Vec<IdRow> = decode_rows(r#"[{"id":"a"},{"id":"b"}]"#).unwrap();
        assert_eq!(rows.len(), 2);

        let empty: Vec<IdRow> = decode_rows("[]").unwrap();
        assert!(empty.is_empty());

        let bad: Result<Vec<IdRow>, _> = decode_rows("{");
        assert!(matches!(bad, Err(DirectoryError::JsonError(_))));
    }
}
