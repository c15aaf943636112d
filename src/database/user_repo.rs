use chrono::{DateTime, Utc};
use rusqlite::types::Type;
use rusqlite::{params, Connection, OptionalExtension, Row};
use user_directory::{DirectoryError, User, UserDirectory};

/// User directory stored in the local SQLite database
pub struct SqliteUserDirectory<'c> {
    conn: &'c Connection,
}

impl<'c> SqliteUserDirectory<'c> {
    /// Expects a connection with the schema already applied
    pub fn new(conn: &'c Connection) -> Self {
        Self { conn }
    }

}

fn db_error(e: rusqlite::Error) -> DirectoryError {
    DirectoryError::ServerError {
        message: format!("Database error: {}", e),
        code: None,
    }
}

fn user_from_row(row: &Row<'_>) -> rusqlite::Result<User> {
    let created_at: String = row.get(3)?;
    let updated_at: String = row.get(4)?;

    Ok(User {
        id: row.get(0)?,
        username: row.get(1)?,
        name: row.get(2)?,
        created_at: parse_timestamp(&created_at, 3)?,
        updated_at: parse_timestamp(&updated_at, 4)?,
    })
}

fn parse_timestamp(s: &str, idx: usize) -> rusqlite::Result<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(s)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|e| rusqlite::Error::FromSqlConversionFailure(idx, Type::Text, Box::new(e)))
}

impl UserDirectory for SqliteUserDirectory<'_> {
    async fn save_username(
        &self,
        user_id: &str,
        username: &str,
        name: Option<&str>,
    ) -> Result<(), DirectoryError> {
        let now = Utc::now().to_rfc3339();

        let updated = self
            .conn
            .execute(
                "UPDATE users SET username = ?1, name = COALESCE(?2, name), updated_at = ?3 WHERE id = ?4",
                params![username, name, &now, user_id],
            )
            .map_err(db_error)?;

        if updated == 0 {
            self.conn
                .execute(
                    "INSERT INTO users (id, username, name, created_at, updated_at)
                     VALUES (?1, ?2, ?3, ?4, ?4)",
                    params![user_id, username, name, &now],
                )
                .map_err(db_error)?;
        }

        Ok(())
    }

    async fn get_user(&self, user_id: &str) -> Result<Option<User>, DirectoryError> {
        self.conn
            .query_row(
                "SELECT id, username, name, created_at, updated_at FROM users WHERE id = ?1",
                params![user_id],
                user_from_row,
            )
            .optional()
            .map_err(db_error)
    }

    async fn check_username_availability(&self, username: &str) -> Result<bool, DirectoryError> {
        let taken: Option<String> = self
            .conn
            .query_row(
                "SELECT id FROM users WHERE username = ?1",
                params![username],
                |row| row.get(0),
            )
            .optional()
            .map_err(db_error)?;

        Ok(taken.is_none())
    }
}
