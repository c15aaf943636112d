use rusqlite::{Connection, OptionalExtension, Result};

/// Initialize complete database schema for the OOTD app
pub fn init_schema(conn: &Connection) -> Result<()> {
    // Schema version table for future migrations
    conn.execute(
        "CREATE TABLE IF NOT EXISTS schema_version (
            version INTEGER PRIMARY KEY,
            applied_at TEXT NOT NULL DEFAULT CURRENT_TIMESTAMP
        )",
        [],
    )?;

    let current_version: i32 = current_version(conn)?.unwrap_or(0);

    if current_version < 1 {
        create_schema(conn)?;
        conn.execute("INSERT INTO schema_version (version) VALUES (1)", [])?;
    }

    Ok(())
}

/// Latest applied schema version, `None` on a fresh database
pub fn current_version(conn: &Connection) -> Result<Option<i32>> {
    conn.query_row(
        "SELECT version FROM schema_version ORDER BY version DESC LIMIT 1",
        [],
        |row| row.get(0),
    )
    .optional()
}

/// Create the complete schema (version 1)
fn create_schema(conn: &Connection) -> Result<()> {
    // Table: users (local user directory)
    conn.execute(
        "CREATE TABLE IF NOT EXISTS users (
            id TEXT PRIMARY KEY,
            username TEXT NOT NULL UNIQUE,
            name TEXT,
            created_at TEXT NOT NULL,
            updated_at TEXT NOT NULL
        )",
        [],
    )?;

    // Table: ootds (snapshot of a session's two collections)
    conn.execute(
        "CREATE TABLE IF NOT EXISTS ootds (
            collection TEXT CHECK(collection IN ('user', 'friends')) NOT NULL,
            position INTEGER NOT NULL,
            id TEXT NOT NULL,
            user_id TEXT NOT NULL,
            image_uri TEXT NOT NULL,
            cutout_image_uri TEXT,
            date TEXT NOT NULL,
            created_at TEXT NOT NULL,
            occasion TEXT,
            weather TEXT,
            tags TEXT,
            is_private INTEGER NOT NULL DEFAULT 0,
            likes INTEGER NOT NULL DEFAULT 0 CHECK(likes >= 0),
            is_liked INTEGER NOT NULL DEFAULT 0,
            PRIMARY KEY (collection, id)
        )",
        [],
    )?;

    conn.execute(
        "CREATE INDEX IF NOT EXISTS idx_ootds_date ON ootds(user_id, date)",
        [],
    )?;

    Ok(())
}
