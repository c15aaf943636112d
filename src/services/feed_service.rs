use crate::models::{Friend, Ootd};
use chrono::{DateTime, Utc};

/// One user's block in the social feed
#[derive(Debug, Clone, PartialEq)]
pub struct UserFeed {
    pub user: Friend,
    /// Newest first
    pub ootds: Vec<Ootd>,
}

impl UserFeed {
    pub fn latest(&self) -> Option<&Ootd> {
        self.ootds.first()
    }
}

/// Groups feed entries by author; users without entries are dropped and the
/// rest are ordered by their most recent entry
pub fn group_by_user(ootds: &[Ootd], users: &[Friend]) -> Vec<UserFeed> {
    let mut feeds: Vec<UserFeed> = users
        .iter()
        .filter_map(|user| {
            let mut own: Vec<Ootd> = ootds
                .iter()
                .filter(|o| o.user_id == user.id)
                .cloned()
                .collect();
            if own.is_empty() {
                return None;
            }
            own.sort_by(|a, b| b.created_at.cmp(&a.created_at));
            Some(UserFeed {
                user: user.clone(),
                ootds: own,
            })
        })
        .collect();

    feeds.sort_by(|a, b| {
        let a_latest = a.latest().map(|o| o.created_at);
        let b_latest = b.latest().map(|o| o.created_at);
        b_latest.cmp(&a_latest)
    });
    feeds
}

/// Relative age of a post: "just now", "N hours" or "N days"
pub fn format_time_ago(created_at: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let hours = (now - created_at).num_hours();

    if hours < 1 {
        "just now".to_string()
    } else if hours < 24 {
        format!("{} hours", hours)
    } else {
        format!("{} days", hours / 24)
    }
}

pub fn online_count(users: &[Friend]) -> usize {
    users.iter().filter(|u| u.is_online).count()
}
