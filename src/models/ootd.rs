use chrono::{DateTime, NaiveDate, Utc};
use rusqlite::types::Type;
use rusqlite::Row;
use serde::{Deserialize, Serialize};

/// Outfit of the day: one dated outfit photo of a user
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Ootd {
    pub id: String,
    pub user_id: String,
    pub image_uri: String,
    /// Segmented version of the photo; currently always the original image
    pub cutout_image_uri: Option<String>,
    /// Day the outfit was worn
    pub date: NaiveDate,
    pub created_at: DateTime<Utc>,
    pub occasion: Option<String>,
    pub weather: Option<String>,
    pub tags: Option<Vec<String>>,
    pub is_private: bool,
    pub likes: u32,
    #[serde(default)]
    pub is_liked: bool,
}

impl Ootd {
    /// Flips the like state of the viewing user and adjusts the counter by one
    pub fn toggle_like(&mut self) {
        if self.is_liked {
            self.likes = self.likes.saturating_sub(1);
        } else {
            self.likes += 1;
        }
        self.is_liked = !self.is_liked;
    }

    pub fn tags(&self) -> &[String] {
        self.tags.as_deref().unwrap_or(&[])
    }
}

/// Optional fields when saving a new OOTD
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SaveOptions {
    pub occasion: Option<String>,
    pub weather: Option<String>,
    pub tags: Option<Vec<String>>,
    pub is_private: bool,
    /// Defaults to today (local time)
    pub date: Option<NaiveDate>,
}

/// Column order: id, user_id, image_uri, cutout_image_uri, date, created_at,
/// occasion, weather, tags, is_private, likes, is_liked
impl<'r> TryFrom<&Row<'r>> for Ootd {
    type Error = rusqlite::Error;

    fn try_from(row: &Row<'r>) -> Result<Self, Self::Error> {
        let date_str: String = row.get(4)?;
        let created_at_str: String = row.get(5)?;
        let tags_json: Option<String> = row.get(8)?;

        let date = NaiveDate::parse_from_str(&date_str, "%Y-%m-%d")
            .map_err(|e| rusqlite::Error::FromSqlConversionFailure(4, Type::Text, Box::new(e)))?;
        let created_at = DateTime::parse_from_rfc3339(&created_at_str)
            .map_err(|e| rusqlite::Error::FromSqlConversionFailure(5, Type::Text, Box::new(e)))?
            .with_timezone(&Utc);
        let tags = tags_json
            .map(|json| serde_json::from_str::<Vec<String>>(&json))
            .transpose()
            .map_err(|e| rusqlite::Error::FromSqlConversionFailure(8, Type::Text, Box::new(e)))?;

        Ok(Ootd {
            id: row.get(0)?,
            user_id: row.get(1)?,
            image_uri: row.get(2)?,
            cutout_image_uri: row.get(3)?,
            date,
            created_at,
            occasion: row.get(6)?,
            weather: row.get(7)?,
            tags,
            is_private: row.get(9)?,
            likes: row.get(10)?,
            is_liked: row.get(11)?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Ootd {
        Ootd {
            id: "ootd-1".to_string(),
            user_id: "current-user".to_string(),
            image_uri: "file:///pics/1.png".to_string(),
            cutout_image_uri: None,
            date: NaiveDate::from_ymd_opt(2025, 1, 10).unwrap(),
            created_at: Utc::now(),
            occasion: None,
            weather: None,
            tags: None,
            is_private: false,
            likes: 0,
            is_liked: false,
        }
    }

    #[test]
    fn test_toggle_like_twice_restores_state() {
        let mut ootd = sample();
        ootd.likes = 12;
        ootd.toggle_like();
        assert!(ootd.is_liked);
        assert_eq!(ootd.likes, 13);
        ootd.toggle_like();
        assert!(!ootd.is_liked);
        assert_eq!(ootd.likes, 12);
    }

    #[test]
    fn test_unlike_never_underflows() {
        let mut ootd = sample();
        ootd.is_liked = true;
        ootd.toggle_like();
        assert_eq!(ootd.likes, 0);
        assert!(!ootd.is_liked);
    }

    #[test]
    fn test_serializes_camel_case_date() {
        let json = serde_json::to_value(sample()).unwrap();
        assert_eq!(json["date"], "2025-01-10");
        assert_eq!(json["userId"], "current-user");
        assert_eq!(json["isPrivate"], false);
    }
}
