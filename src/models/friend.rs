use serde::{Deserialize, Serialize};

/// A user whose OOTDs show up in the social feed
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Friend {
    pub id: String,
    pub name: String,
    pub username: String,
    pub avatar: String,
    #[serde(default)]
    pub is_online: bool,
}
