pub mod ootd_repo;
pub mod schema;
pub mod user_repo;

pub use user_repo::SqliteUserDirectory;

use crate::error::AppError;
use rusqlite::Connection;
use std::path::Path;

/// Opens the database at `path` and applies the schema
pub fn init_database(path: &Path) -> Result<Connection, AppError> {
    // Make sure the data directory exists
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }

    let conn = Connection::open(path)?;
    schema::init_schema(&conn)?;
    log::debug!("Database ready at {}", path.display());

    Ok(conn)
}

/// In-memory database with the full schema
pub fn open_in_memory() -> Result<Connection, AppError> {
    let conn = Connection::open_in_memory()?;
    schema::init_schema(&conn)?;
    Ok(conn)
}
