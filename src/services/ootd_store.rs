use crate::models::{Ootd, SaveOptions};
use crate::services::analytics_service;
use chrono::{DateTime, Local, NaiveDate, Utc};
use std::collections::HashSet;
use uuid::Uuid;

/// Session-owned collection of the current user's OOTDs and the OOTDs
/// visible from friends.
///
/// A public OOTD of the current user lives in both collections; every
/// mutation keeps the copies identical.
#[derive(Debug, Clone, Default)]
pub struct OotdStore {
    user_id: String,
    user_ootds: Vec<Ootd>,
    friends_ootds: Vec<Ootd>,
}

impl OotdStore {
    pub fn new(user_id: impl Into<String>) -> Self {
        Self {
            user_id: user_id.into(),
            user_ootds: Vec::new(),
            friends_ootds: Vec::new(),
        }
    }

    /// Restores a store from previously loaded collections (collection order is kept)
    pub fn with_collections(
        user_id: impl Into<String>,
        user_ootds: Vec<Ootd>,
        friends_ootds: Vec<Ootd>,
    ) -> Self {
        Self {
            user_id: user_id.into(),
            user_ootds,
            friends_ootds,
        }
    }

    pub fn user_id(&self) -> &str {
        &self.user_id
    }

    pub fn user_ootds(&self) -> &[Ootd] {
        &self.user_ootds
    }

    pub fn friends_ootds(&self) -> &[Ootd] {
        &self.friends_ootds
    }

    /// Saves a new OOTD for the current user
    pub fn create(&mut self, image_uri: impl Into<String>, options: SaveOptions) -> Ootd {
        self.create_at(image_uri, options, Utc::now())
    }

    /// Like [`create`](Self::create) with an explicit creation time; the
    /// default `date` is the local calendar day of `now`
    pub fn create_at(
        &mut self,
        image_uri: impl Into<String>,
        options: SaveOptions,
        now: DateTime<Utc>,
    ) -> Ootd {
        let image_uri = image_uri.into();
        let date = options
            .date
            .unwrap_or_else(|| now.with_timezone(&Local).date_naive());

        let ootd = Ootd {
            id: format!("ootd-{}", Uuid::new_v4()),
            user_id: self.user_id.clone(),
            cutout_image_uri: Some(image_uri.clone()),
            image_uri,
            date,
            created_at: now,
            occasion: options.occasion,
            weather: options.weather,
            tags: options.tags,
            is_private: options.is_private,
            likes: 0,
            is_liked: false,
        };

        self.user_ootds.insert(0, ootd.clone());
        if !ootd.is_private {
            self.friends_ootds.insert(0, ootd.clone());
        }

        log::debug!(
            "Saved OOTD {} for {} (private: {})",
            ootd.id,
            ootd.date,
            ootd.is_private
        );
        ootd
    }

    /// Flips the like state of every copy of `id`; unknown ids are ignored
    pub fn toggle_like(&mut self, id: &str) {
        self.user_ootds
            .iter_mut()
            .chain(self.friends_ootds.iter_mut())
            .filter(|o| o.id == id)
            .for_each(Ootd::toggle_like);
    }

    /// Removes `id` from both collections; unknown ids are ignored
    pub fn delete(&mut self, id: &str) {
        self.user_ootds.retain(|o| o.id != id);
        self.friends_ootds.retain(|o| o.id != id);
    }

    /// First of the user's OOTDs worn on `date`
    pub fn get_for_date(&self, date: NaiveDate) -> Option<&Ootd> {
        self.user_ootds.iter().find(|o| o.date == date)
    }

    /// Up to `limit` of the user's OOTDs, newest first
    pub fn get_recent(&self, limit: usize) -> Vec<Ootd> {
        let mut recent = self.user_ootds.clone();
        sort_newest_first(&mut recent);
        recent.truncate(limit);
        recent
    }

    /// Friends' OOTDs plus the user's public ones, newest first, each id once
    pub fn get_all_friends_visible(&self) -> Vec<Ootd> {
        let mut seen = HashSet::new();
        let mut all: Vec<Ootd> = self
            .friends_ootds
            .iter()
            .chain(self.user_ootds.iter().filter(|o| !o.is_private))
            .filter(|o| seen.insert(o.id.as_str()))
            .cloned()
            .collect();
        sort_newest_first(&mut all);
        all
    }

    /// The `limit` most used tags of the user's OOTDs; ties keep first-seen order
    pub fn get_top_styles(&self, limit: usize) -> Vec<String> {
        let mut counts: Vec<(&str, usize)> = Vec::new();

        for tag in self.user_ootds.iter().flat_map(|o| o.tags()) {
            match counts.iter_mut().find(|(t, _)| *t == tag.as_str()) {
                Some(entry) => entry.1 += 1,
                None => counts.push((tag.as_str(), 1)),
            }
        }

        counts.sort_by(|a, b| b.1.cmp(&a.1));
        counts
            .into_iter()
            .take(limit)
            .map(|(tag, _)| tag.to_string())
            .collect()
    }

    /// Current OOTD streak counted from today (local time)
    pub fn compute_streak(&self) -> u32 {
        self.compute_streak_on(Local::now().date_naive())
    }

    pub fn compute_streak_on(&self, today: NaiveDate) -> u32 {
        analytics_service::compute_streak(&self.user_ootds, today)
    }
}

/// Stable sort by `created_at` descending
fn sort_newest_first(ootds: &mut [Ootd]) {
    ootds.sort_by(|a, b| b.created_at.cmp(&a.created_at));
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn at(hour: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 1, 10, hour, 0, 0).unwrap()
    }

    fn tagged(tags: &[&str]) -> SaveOptions {
        SaveOptions {
            tags: Some(tags.iter().map(|t| t.to_string()).collect()),
            ..Default::default()
        }
    }

    #[test]
    fn test_create_sets_defaults() {
        let mut store = OotdStore::new("current-user");
        let ootd = store.create("file:///a.png", SaveOptions::default());

        assert_eq!(ootd.user_id, "current-user");
        assert_eq!(ootd.cutout_image_uri.as_deref(), Some("file:///a.png"));
        assert_eq!(ootd.likes, 0);
        assert!(!ootd.is_liked);
        assert!(!ootd.is_private);
        assert_eq!(ootd.date, Local::now().date_naive());
        assert_eq!(store.user_ootds()[0], ootd);
        assert_eq!(store.friends_ootds()[0], ootd);
    }

    #[test]
    fn test_create_prepends() {
        let mut store = OotdStore::new("me");
        let first = store.create_at("a", SaveOptions::default(), at(8));
        let second = store.create_at("b", SaveOptions::default(), at(9));
        assert_eq!(store.user_ootds()[0].id, second.id);
        assert_eq!(store.user_ootds()[1].id, first.id);
        assert_ne!(first.id, second.id);
    }

    #[test]
    fn test_private_ootd_stays_out_of_friends_feed() {
        let mut store = OotdStore::new("me");
        let private = store.create(
            "a",
            SaveOptions {
                is_private: true,
                ..Default::default()
            },
        );
        let public = store.create("b", SaveOptions::default());

        let visible = store.get_all_friends_visible();
        assert!(visible.iter().all(|o| o.id != private.id));
        assert!(visible.iter().any(|o| o.id == public.id));
    }

    #[test]
    fn test_friends_visible_has_no_duplicates_and_is_sorted() {
        let mut store = OotdStore::new("me");
        store.create_at("a", SaveOptions::default(), at(8));
        store.create_at("b", SaveOptions::default(), at(12));
        store.create_at("c", SaveOptions::default(), at(10));

        let visible = store.get_all_friends_visible();
        assert_eq!(visible.len(), 3);
        assert!(visible
            .windows(2)
            .all(|w| w[0].created_at >= w[1].created_at));
        assert_eq!(visible[0].image_uri, "b");
    }

    #[test]
    fn test_toggle_like_updates_both_copies() {
        let mut store = OotdStore::new("me");
        let ootd = store.create("a", SaveOptions::default());

        store.toggle_like(&ootd.id);
        assert_eq!(store.user_ootds()[0].likes, 1);
        assert!(store.user_ootds()[0].is_liked);
        assert_eq!(store.friends_ootds()[0], store.user_ootds()[0]);

        store.toggle_like(&ootd.id);
        assert_eq!(store.user_ootds()[0].likes, 0);
        assert!(!store.friends_ootds()[0].is_liked);
    }

    #[test]
    fn test_toggle_like_unknown_id_is_noop() {
        let mut store = OotdStore::new("me");
        let ootd = store.create("a", SaveOptions::default());
        store.toggle_like("missing");
        assert_eq!(store.user_ootds()[0], ootd);
    }

    #[test]
    fn test_delete_removes_from_both() {
        let mut store = OotdStore::new("me");
        let keep = store.create("a", SaveOptions::default());
        let gone = store.create("b", SaveOptions::default());

        store.delete(&gone.id);
        store.delete("missing");
        assert_eq!(store.user_ootds().len(), 1);
        assert_eq!(store.friends_ootds().len(), 1);
        assert_eq!(store.user_ootds()[0].id, keep.id);
    }

    #[test]
    fn test_get_for_date() {
        let mut store = OotdStore::new("me");
        let ootd = store.create(
            "a",
            SaveOptions {
                date: Some(date(2025, 1, 10)),
                ..Default::default()
            },
        );

        assert_eq!(store.get_for_date(date(2025, 1, 10)), Some(&ootd));
        assert_eq!(store.get_for_date(date(2025, 1, 11)), None);
    }

    #[test]
    fn test_get_recent_limits_and_sorts() {
        let mut store = OotdStore::new("me");
        for hour in [9, 7, 11, 8] {
            store.create_at(format!("img-{}", hour), SaveOptions::default(), at(hour));
        }

        let recent = store.get_recent(3);
        assert_eq!(recent.len(), 3);
        let uris: Vec<&str> = recent.iter().map(|o| o.image_uri.as_str()).collect();
        assert_eq!(uris, vec!["img-11", "img-9", "img-8"]);

        assert_eq!(store.get_recent(10).len(), 4);
        assert!(store.get_recent(0).is_empty());
    }

    #[test]
    fn test_get_recent_ties_keep_collection_order() {
        let mut store = OotdStore::new("me");
        store.create_at("older-insert", SaveOptions::default(), at(9));
        store.create_at("newer-insert", SaveOptions::default(), at(9));

        let recent = store.get_recent(2);
        assert_eq!(recent[0].image_uri, "newer-insert");
        assert_eq!(recent[1].image_uri, "older-insert");
    }

    #[test]
    fn test_top_styles() {
        let mut store = OotdStore::new("me");
        store.create("a", tagged(&["experimental", "simple", "casual"]));
        store.create("b", tagged(&["minimal", "simple", "elegant"]));
        store.create("c", tagged(&["experimental", "minimal", "chic"]));
        store.create("d", SaveOptions::default());

        // Collection order is c, b, a: minimal and experimental are seen first
        let top = store.get_top_styles(3);
        assert_eq!(top, vec!["experimental", "minimal", "simple"]);
        assert_eq!(store.get_top_styles(1).len(), 1);
        assert_eq!(store.get_top_styles(100).len(), 6);
    }

    #[test]
    fn test_top_styles_without_tags() {
        let mut store = OotdStore::new("me");
        store.create("a", SaveOptions::default());
        assert!(store.get_top_styles(3).is_empty());
    }

    #[test]
    fn test_streak_today_and_yesterday() {
        let today = date(2025, 3, 15);
        let mut store = OotdStore::new("me");
        for offset in [0, 1] {
            store.create(
                "a",
                SaveOptions {
                    date: Some(today - Duration::days(offset)),
                    is_private: offset == 1,
                    ..Default::default()
                },
            );
        }
        assert_eq!(store.compute_streak_on(today), 2);
    }
}
