use crate::error::AppError;
use crate::models::Ootd;
use crate::services::OotdStore;
use rusqlite::{params, Connection};

/// Which of the store's two collections a row belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Collection {
    User,
    Friends,
}

impl Collection {
    pub fn as_str(&self) -> &str {
        match self {
            Collection::User => "user",
            Collection::Friends => "friends",
        }
    }
}

/// Replaces the stored rows of `collection` with `ootds`, keeping their order
pub fn save_collection(
    conn: &Connection,
    collection: Collection,
    ootds: &[Ootd],
) -> Result<(), AppError> {
    let tx = conn.unchecked_transaction()?;

    tx.execute(
        "DELETE FROM ootds WHERE collection = ?1",
        params![collection.as_str()],
    )?;

    {
        let mut stmt = tx.prepare(
            "INSERT INTO ootds (collection, position, id, user_id, image_uri, cutout_image_uri,
                date, created_at, occasion, weather, tags, is_private, likes, is_liked)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?12, ?13, ?14)",
        )?;

        for (position, ootd) in ootds.iter().enumerate() {
            let tags = ootd.tags.as_ref().map(serde_json::to_string).transpose()?;
            stmt.execute(params![
                collection.as_str(),
                position as i64,
                &ootd.id,
                &ootd.user_id,
                &ootd.image_uri,
                &ootd.cutout_image_uri,
                ootd.date.format("%Y-%m-%d").to_string(),
                ootd.created_at.to_rfc3339(),
                &ootd.occasion,
                &ootd.weather,
                tags,
                ootd.is_private,
                ootd.likes,
                ootd.is_liked,
            ])?;
        }
    }

    tx.commit()?;
    Ok(())
}

/// Loads a collection in its stored order
pub fn load_collection(conn: &Connection, collection: Collection) -> Result<Vec<Ootd>, AppError> {
    let mut stmt = conn.prepare(
        "SELECT id, user_id, image_uri, cutout_image_uri, date, created_at,
                occasion, weather, tags, is_private, likes, is_liked
         FROM ootds
         WHERE collection = ?1
         ORDER BY position ASC",
    )?;

    let rows = stmt.query_map(params![collection.as_str()], |row| Ootd::try_from(row))?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

/// Writes both collections of `store`
pub fn save_store(conn: &Connection, store: &OotdStore) -> Result<(), AppError> {
    save_collection(conn, Collection::User, store.user_ootds())?;
    save_collection(conn, Collection::Friends, store.friends_ootds())?;
    log::info!(
        "Stored {} own and {} friends' OOTDs",
        store.user_ootds().len(),
        store.friends_ootds().len()
    );
    Ok(())
}

/// Restores a store; `None` if nothing has been saved yet
pub fn load_store(conn: &Connection, user_id: &str) -> Result<Option<OotdStore>, AppError> {
    let user = load_collection(conn, Collection::User)?;
    let friends = load_collection(conn, Collection::Friends)?;

    if user.is_empty() && friends.is_empty() {
        return Ok(None);
    }

    Ok(Some(OotdStore::with_collections(user_id, user, friends)))
}
