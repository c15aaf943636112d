use crate::config::AppConfig;
use crate::models::Friend;
use crate::seed;
use crate::services::feed_service::{self, UserFeed};
use crate::services::{DashboardSummary, OotdStore, RecommendationFilter};
use chrono::NaiveDate;
use user_directory::User;

/// State of one app session; screens borrow what they need from here
#[derive(Debug, Clone)]
pub struct Session {
    pub config: AppConfig,
    pub current_user: Friend,
    pub friends: Vec<Friend>,
    pub ootds: OotdStore,
    pub recommendations: RecommendationFilter,
    /// Id of the registered account in the user directory
    pub account_id: Option<String>,
}

impl Session {
    pub fn new(config: AppConfig, current_user: Friend, friends: Vec<Friend>, ootds: OotdStore) -> Self {
        Self {
            config,
            current_user,
            friends,
            ootds,
            recommendations: RecommendationFilter::new(seed::outfit_recommendations()),
            account_id: None,
        }
    }

    /// Shows the registered username from now on. The local user id that
    /// owns the OOTDs stays unchanged.
    pub fn adopt_account(&mut self, user: &User) {
        self.current_user.username = user.username.clone();
        if let Some(name) = &user.name {
            self.current_user.name = name.clone();
        }
        self.account_id = Some(user.id.clone());
    }

    /// Session populated with the bundled sample data
    pub fn with_seed_data(config: AppConfig) -> Self {
        let ootds = OotdStore::with_collections(
            seed::CURRENT_USER_ID,
            seed::user_ootds(),
            seed::friends_ootds(),
        );
        Self::new(config, seed::current_user(), seed::friends(), ootds)
    }

    pub fn dashboard(&self, today: NaiveDate) -> DashboardSummary {
        DashboardSummary::build(&self.ootds, today, &self.config)
    }

    /// Social tab: visible OOTDs grouped by author, the current user included
    pub fn social_feed(&self) -> Vec<UserFeed> {
        let mut users = Vec::with_capacity(self.friends.len() + 1);
        users.push(self.current_user.clone());
        users.extend(self.friends.iter().cloned());
        feed_service::group_by_user(&self.ootds.get_all_friends_visible(), &users)
    }

    pub fn online_count(&self) -> usize {
        feed_service::online_count(std::slice::from_ref(&self.current_user))
            + feed_service::online_count(&self.friends)
    }
}
