use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A row of the `users` table
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct User {
    pub id: String,
    pub username: String,
    #[serde(default)]
    pub name: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Body of an insert request
#[derive(Debug, Clone, Serialize)]
pub struct UserInsert<'a> {
    pub id: &'a str,
    pub username: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<&'a str>,
}

/// Body of an update request
#[derive(Debug, Clone, Serialize)]
pub struct UserUpdate<'a> {
    pub username: &'a str,
    /// Left out of the body when `None`, so the stored name is kept
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<&'a str>,
    pub updated_at: DateTime<Utc>,
}

/// Projection used when only the id column is selected
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct IdRow {
    #[allow(dead_code)]
    pub id: String,
}

/// Error payload returned by PostgREST
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct PostgrestError {
    pub message: String,
    #[serde(default)]
    pub code: Option<String>,
}
