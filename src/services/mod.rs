pub mod analytics_service;
pub mod feed_service;
pub mod onboarding_service;
pub mod ootd_store;
pub mod profile_service;
pub mod recommendation_service;

pub use analytics_service::{outfit_days, DashboardSummary, OutfitDay};
pub use ootd_store::OotdStore;
pub use profile_service::OnboardingProfile;
pub use recommendation_service::{apply_filters, get_for_occasion, RecommendationFilter};
