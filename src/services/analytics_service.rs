use crate::config::AppConfig;
use crate::models::Ootd;
use crate::services::OotdStore;
use chrono::{Datelike, Days, NaiveDate};
use std::collections::HashSet;

/// Maximum number of days the streak walk looks back
pub const MAX_STREAK_DAYS: u32 = 365;

/// Days shown in the home screen's outfit strip
pub const OUTFIT_STRIP_DAYS: u32 = 5;

/// One day in the outfit strip
#[derive(Debug, Clone, PartialEq)]
pub struct OutfitDay {
    pub date: NaiveDate,
    pub is_today: bool,
    pub ootd: Option<Ootd>,
}

impl OutfitDay {
    pub fn has_outfit(&self) -> bool {
        self.ootd.is_some()
    }
}

/// The last `days` days up to and including `today`, oldest first.
///
/// Each day carries what `get_for_date` finds for it.
pub fn outfit_days(store: &OotdStore, today: NaiveDate, days: u32) -> Vec<OutfitDay> {
    (0..days)
        .rev()
        .filter_map(|offset| today.checked_sub_days(Days::new(offset.into())))
        .map(|date| OutfitDay {
            date,
            is_today: date == today,
            ootd: store.get_for_date(date).cloned(),
        })
        .collect()
}

/// Statistics shown on the home dashboard
#[derive(Debug, Clone, PartialEq)]
pub struct DashboardSummary {
    pub streak: u32,
    pub top_styles: Vec<String>,
    pub items_worn_this_month: usize,
    pub closet_worn_percent: u32,
    pub recent: Vec<Ootd>,
    pub outfit_days: Vec<OutfitDay>,
}

impl DashboardSummary {
    pub fn build(store: &OotdStore, today: NaiveDate, config: &AppConfig) -> Self {
        let items_worn_this_month = items_worn_this_month(store.user_ootds(), today);

        Self {
            streak: store.compute_streak_on(today),
            top_styles: store.get_top_styles(config.top_styles_limit),
            items_worn_this_month,
            closet_worn_percent: closet_worn_percent(
                items_worn_this_month,
                config.closet_size_estimate,
            ),
            recent: store.get_recent(config.recent_limit),
            outfit_days: outfit_days(store, today, OUTFIT_STRIP_DAYS),
        }
    }
}

/// Counts consecutive days with at least one OOTD, walking back from `today`.
///
/// A missing entry for today is skipped once; after that the first day
/// without an entry ends the streak.
pub fn compute_streak(records: &[Ootd], today: NaiveDate) -> u32 {
    if records.is_empty() {
        return 0;
    }

    let dates: HashSet<NaiveDate> = records.iter().map(|o| o.date).collect();
    let mut streak = 0;
    let mut day = today;

    for i in 0..MAX_STREAK_DAYS {
        if dates.contains(&day) {
            streak += 1;
        } else if i > 0 {
            break;
        }

        match day.pred_opt() {
            Some(prev) => day = prev,
            None => break,
        }
    }

    streak
}

/// Number of OOTDs dated in the same month as `today`
pub fn items_worn_this_month(records: &[Ootd], today: NaiveDate) -> usize {
    records
        .iter()
        .filter(|o| o.date.year() == today.year() && o.date.month() == today.month())
        .count()
}

/// Share of the closet worn, rounded and capped at 100
pub fn closet_worn_percent(worn: usize, closet_size: u32) -> u32 {
    if closet_size == 0 {
        return 0;
    }
    let percent = (worn as f64 / closet_size as f64 * 100.0).round();
    percent.min(100.0) as u32
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::SaveOptions;
    use chrono::Duration;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 3, 15).unwrap()
    }

    fn store_with_offsets(offsets: &[i64]) -> OotdStore {
        let mut store = OotdStore::new("me");
        for offset in offsets {
            store.create(
                "img",
                SaveOptions {
                    date: Some(today() - Duration::days(*offset)),
                    ..Default::default()
                },
            );
        }
        store
    }

    #[test]
    fn test_streak_empty_is_zero() {
        assert_eq!(compute_streak(&[], today()), 0);
    }

    #[test]
    fn test_streak_ending_today() {
        let store = store_with_offsets(&[0, 1, 2, 4]);
        assert_eq!(store.compute_streak_on(today()), 3);
    }

    #[test]
    fn test_streak_ending_yesterday() {
        let store = store_with_offsets(&[1, 2, 3, 5]);
        assert_eq!(store.compute_streak_on(today()), 3);
    }

    #[test]
    fn test_streak_broken_two_days_ago() {
        let store = store_with_offsets(&[2, 3, 4]);
        assert_eq!(store.compute_streak_on(today()), 0);
    }

    #[test]
    fn test_streak_counts_duplicate_days_once() {
        let store = store_with_offsets(&[0, 0, 1]);
        assert_eq!(store.compute_streak_on(today()), 2);
    }

    #[test]
    fn test_streak_is_capped() {
        let offsets: Vec<i64> = (0..400).collect();
        let store = store_with_offsets(&offsets);
        assert_eq!(store.compute_streak_on(today()), MAX_STREAK_DAYS);
    }

    #[test]
    fn test_cap_includes_skipped_today() {
        let offsets: Vec<i64> = (1..400).collect();
        let store = store_with_offsets(&offsets);
        assert_eq!(store.compute_streak_on(today()), MAX_STREAK_DAYS - 1);
    }

    #[test]
    fn test_items_worn_this_month() {
        // 2025-03-15 minus 20 days falls into February
        let store = store_with_offsets(&[0, 3, 14, 20]);
        assert_eq!(items_worn_this_month(store.user_ootds(), today()), 3);
    }

    #[test]
    fn test_items_worn_ignores_same_month_of_other_year() {
        let store = store_with_offsets(&[365]);
        assert_eq!(items_worn_this_month(store.user_ootds(), today()), 0);
    }

    #[test]
    fn test_closet_worn_percent() {
        assert_eq!(closet_worn_percent(3, 30), 10);
        assert_eq!(closet_worn_percent(1, 3), 33);
        assert_eq!(closet_worn_percent(2, 3), 67);
        assert_eq!(closet_worn_percent(45, 30), 100);
        assert_eq!(closet_worn_percent(5, 0), 0);
    }

    #[test]
    fn test_dashboard_summary() {
        let mut store = store_with_offsets(&[0, 1]);
        store.create(
            "tagged",
            SaveOptions {
                date: Some(today()),
                tags: Some(vec!["minimal".to_string()]),
                ..Default::default()
            },
        );

        let summary = DashboardSummary::build(&store, today(), &AppConfig::default());
        assert_eq!(summary.streak, 2);
        assert_eq!(summary.top_styles, vec!["minimal"]);
        assert_eq!(summary.items_worn_this_month, 3);
        assert_eq!(summary.closet_worn_percent, 10);
        assert_eq!(summary.recent.len(), 3);
        assert_eq!(summary.outfit_days.len(), OUTFIT_STRIP_DAYS as usize);
    }

    #[test]
    fn test_outfit_days_oldest_first() {
        let store = store_with_offsets(&[0, 1, 3, 4]);
        let days = outfit_days(&store, today(), 5);

        let dates: Vec<NaiveDate> = days.iter().map(|d| d.date).collect();
        let expected: Vec<NaiveDate> = (0..5).rev().map(|o| today() - Duration::days(o)).collect();
        assert_eq!(dates, expected);

        let today_flags: Vec<bool> = days.iter().map(|d| d.is_today).collect();
        assert_eq!(today_flags, vec![false, false, false, false, true]);
    }

    #[test]
    fn test_outfit_days_missing_day() {
        let store = store_with_offsets(&[0, 1, 3, 4]);
        let days = outfit_days(&store, today(), 5);

        let filled: Vec<bool> = days.iter().map(|d| d.has_outfit()).collect();
        assert_eq!(filled, vec![true, true, false, true, true]);
        assert_eq!(days[2].ootd, None);
    }

    #[test]
    fn test_outfit_days_duplicate_date_uses_get_for_date() {
        let mut store = OotdStore::new("me");
        for image in ["first", "second"] {
            store.create(
                image,
                SaveOptions {
                    date: Some(today()),
                    ..Default::default()
                },
            );
        }

        let days = outfit_days(&store, today(), 2);
        let shown = days[1].ootd.as_ref().unwrap();
        assert_eq!(shown.image_uri, "second");
        assert_eq!(Some(shown), store.get_for_date(today()));
        assert!(!days[0].has_outfit());
    }

    #[test]
    fn test_outfit_days_zero() {
        let store = store_with_offsets(&[0]);
        assert!(outfit_days(&store, today(), 0).is_empty());
    }
}
