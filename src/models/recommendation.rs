use serde::{Deserialize, Serialize};

/// Coarse occasion bucket used by the formality filter
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum OccasionCategory {
    Casual,
    Formal,
    Active,
    Social,
    Work,
}

/// Occasion a recommendation is suitable for
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Occasion {
    Work,
    School,
    Date,
    Party,
    Casual,
    Workout,
    Travel,
    Formal,
    Outdoor,
    Shopping,
}

impl Occasion {
    pub fn as_str(&self) -> &str {
        match self {
            Occasion::Work => "work",
            Occasion::School => "school",
            Occasion::Date => "date",
            Occasion::Party => "party",
            Occasion::Casual => "casual",
            Occasion::Workout => "workout",
            Occasion::Travel => "travel",
            Occasion::Formal => "formal",
            Occasion::Outdoor => "outdoor",
            Occasion::Shopping => "shopping",
        }
    }

    /// Parses an occasion id; unknown ids yield `None`
    pub fn from_id(id: &str) -> Option<Self> {
        Self::all().iter().copied().find(|o| o.as_str() == id)
    }

    pub fn category(&self) -> OccasionCategory {
        match self {
            Occasion::Work => OccasionCategory::Work,
            Occasion::School => OccasionCategory::Casual,
            Occasion::Date => OccasionCategory::Formal,
            Occasion::Party => OccasionCategory::Social,
            Occasion::Casual => OccasionCategory::Casual,
            Occasion::Workout => OccasionCategory::Active,
            Occasion::Travel => OccasionCategory::Casual,
            Occasion::Formal => OccasionCategory::Formal,
            Occasion::Outdoor => OccasionCategory::Active,
            Occasion::Shopping => OccasionCategory::Casual,
        }
    }

    pub fn all() -> &'static [Occasion] {
        static ALL: [Occasion; 10] = [
            Occasion::Work,
            Occasion::School,
            Occasion::Date,
            Occasion::Party,
            Occasion::Casual,
            Occasion::Workout,
            Occasion::Travel,
            Occasion::Formal,
            Occasion::Outdoor,
            Occasion::Shopping,
        ];
        &ALL
    }
}

/// Entry of the occasion picker
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct OccasionType {
    pub occasion: Occasion,
    pub name: String,
    pub icon: String,
    pub description: String,
}

impl OccasionType {
    pub fn category(&self) -> OccasionCategory {
        self.occasion.category()
    }
}

/// Catalog entry of a suggested outfit. Immutable once loaded.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Recommendation {
    pub id: String,
    pub title: String,
    pub description: String,
    pub items: Vec<String>,
    pub colors: Vec<String>,
    pub style: String,
    pub weather_suitability: Vec<String>,
    pub occasion_types: Vec<Occasion>,
    #[serde(default)]
    pub image: Option<String>,
}

impl Recommendation {
    pub fn suits_weather(&self, label: &str) -> bool {
        self.weather_suitability.iter().any(|w| w == label)
    }

    pub fn suits_occasion(&self, occasion: Occasion) -> bool {
        self.occasion_types.contains(&occasion)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_occasion_ids_round_trip() {
        for occasion in Occasion::all() {
            assert_eq!(Occasion::from_id(occasion.as_str()), Some(*occasion));
        }
        assert_eq!(Occasion::from_id("brunch"), None);
    }

    #[test]
    fn test_occasion_categories() {
        assert_eq!(Occasion::School.category(), OccasionCategory::Casual);
        assert_eq!(Occasion::Date.category(), OccasionCategory::Formal);
        assert_eq!(Occasion::Party.category(), OccasionCategory::Social);
        assert_eq!(Occasion::Outdoor.category(), OccasionCategory::Active);
    }

    #[test]
    fn test_recommendation_json_uses_occasion_ids() {
        let json = r#"{
            "id": "rec-1",
            "title": "Weekend Stroll",
            "description": "Easy layers",
            "items": ["Jeans", "Sweater"],
            "colors": ["Blue"],
            "style": "casual",
            "weatherSuitability": ["sunny", "cloudy"],
            "occasionTypes": ["casual", "shopping"]
        }"#;
        let rec: Recommendation = serde_json::from_str(json).unwrap();
        assert!(rec.suits_occasion(Occasion::Shopping));
        assert!(rec.suits_weather("cloudy"));
        assert!(!rec.suits_weather("snowy"));
        assert_eq!(rec.image, None);
    }
}
