pub mod filter;
pub mod friend;
pub mod ootd;
pub mod recommendation;

pub use filter::{
    filter_sheet, Duration, FilterOption, FilterSection, FilterSelection, FilterUpdate, Formality,
    Temperature, TimeOfDay,
};
pub use friend::Friend;
pub use ootd::{Ootd, SaveOptions};
pub use recommendation::{Occasion, OccasionCategory, OccasionType, Recommendation};
