//! Bundled sample data: the demo user's and friends' OOTDs, the occasion
//! picker entries, the onboarding choices and the outfit recommendation
//! catalog.

mod occasions;
mod onboarding;
mod ootds;

pub use occasions::{occasion_types, outfit_recommendations};
pub use onboarding::{BodyType, BODY_TYPES, PAST_OCCASIONS, STYLE_OPTIONS};
pub use ootds::{current_user, friends, friends_ootds, user_ootds, CURRENT_USER_ID};
