use super::recommendation::OccasionCategory;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum Temperature {
    Cold,
    Mild,
    Warm,
    Hot,
}

impl Temperature {
    pub fn all() -> &'static [Temperature] {
        &[Temperature::Cold, Temperature::Mild, Temperature::Warm, Temperature::Hot]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Temperature::Cold => "cold",
            Temperature::Mild => "mild",
            Temperature::Warm => "warm",
            Temperature::Hot => "hot",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "cold" => Some(Temperature::Cold),
            "mild" => Some(Temperature::Mild),
            "warm" => Some(Temperature::Warm),
            "hot" => Some(Temperature::Hot),
            _ => None,
        }
    }

    /// Weather labels that count as this temperature band
    pub fn weather_labels(&self) -> &'static [&'static str] {
        match self {
            Temperature::Cold => &["snowy", "windy"],
            Temperature::Mild => &["cloudy", "rainy"],
            Temperature::Warm => &["sunny"],
            Temperature::Hot => &["hot"],
        }
    }

    pub fn range(&self) -> &'static str {
        match self {
            Temperature::Cold => "< 50°F",
            Temperature::Mild => "50-70°F",
            Temperature::Warm => "70-80°F",
            Temperature::Hot => "> 80°F",
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum Formality {
    Casual,
    SemiFormal,
    Formal,
}

impl Formality {
    pub fn all() -> &'static [Formality] {
        &[Formality::Casual, Formality::SemiFormal, Formality::Formal]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Formality::Casual => "casual",
            Formality::SemiFormal => "semi-formal",
            Formality::Formal => "formal",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "casual" => Some(Formality::Casual),
            "semi-formal" => Some(Formality::SemiFormal),
            "formal" => Some(Formality::Formal),
            _ => None,
        }
    }

    /// Occasion categories accepted at this formality level
    pub fn categories(&self) -> &'static [OccasionCategory] {
        match self {
            Formality::Casual => &[OccasionCategory::Casual, OccasionCategory::Active],
            Formality::SemiFormal => &[OccasionCategory::Work, OccasionCategory::Social],
            Formality::Formal => &[OccasionCategory::Formal],
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Formality::Casual => "Relaxed, everyday wear",
            Formality::SemiFormal => "Business casual, smart casual",
            Formality::Formal => "Dressy, elegant occasions",
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum Duration {
    Short,
    Medium,
    Long,
}

impl Duration {
    pub fn all() -> &'static [Duration] {
        &[Duration::Short, Duration::Medium, Duration::Long]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Duration::Short => "short",
            Duration::Medium => "medium",
            Duration::Long => "long",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Duration::Short => "1-3 hours",
            Duration::Medium => "3-6 hours",
            Duration::Long => "6+ hours",
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum TimeOfDay {
    Morning,
    Afternoon,
    Evening,
    Night,
}

impl TimeOfDay {
    pub fn all() -> &'static [TimeOfDay] {
        &[TimeOfDay::Morning, TimeOfDay::Afternoon, TimeOfDay::Evening, TimeOfDay::Night]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            TimeOfDay::Morning => "morning",
            TimeOfDay::Afternoon => "afternoon",
            TimeOfDay::Evening => "evening",
            TimeOfDay::Night => "night",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            TimeOfDay::Morning => "6AM - 12PM",
            TimeOfDay::Afternoon => "12PM - 6PM",
            TimeOfDay::Evening => "6PM - 10PM",
            TimeOfDay::Night => "10PM+",
        }
    }
}

/// One choice in the filter sheet
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FilterOption {
    pub id: &'static str,
    pub detail: &'static str,
}

/// A group of choices in the filter sheet
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterSection {
    pub title: &'static str,
    pub options: Vec<FilterOption>,
}

/// Choices offered by the filter sheet, section by section
pub fn filter_sheet() -> Vec<FilterSection> {
    fn section<T>(
        title: &'static str,
        values: &[T],
        id: fn(&T) -> &'static str,
        detail: fn(&T) -> &'static str,
    ) -> FilterSection {
        FilterSection {
            title,
            options: values
                .iter()
                .map(|v| FilterOption {
                    id: id(v),
                    detail: detail(v),
                })
                .collect(),
        }
    }

    vec![
        section("Temperature", Temperature::all(), Temperature::as_str, Temperature::range),
        section("Formality", Formality::all(), Formality::as_str, Formality::description),
        section("Duration", Duration::all(), Duration::as_str, Duration::description),
        section("Time of day", TimeOfDay::all(), TimeOfDay::as_str, TimeOfDay::description),
    ]
}

/// Criteria picked in the filter sheet. `None` means "no constraint".
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct FilterSelection {
    pub weather: Option<String>,
    pub temperature: Option<Temperature>,
    pub formality: Option<Formality>,
    pub duration: Option<Duration>,
    pub time_of_day: Option<TimeOfDay>,
}

impl FilterSelection {
    pub fn is_empty(&self) -> bool {
        self.weather.is_none()
            && self.temperature.is_none()
            && self.formality.is_none()
            && self.duration.is_none()
            && self.time_of_day.is_none()
    }

    /// Ids of the criteria that are set, in sheet order
    pub fn active_labels(&self) -> Vec<String> {
        let mut labels = Vec::new();
        if let Some(weather) = &self.weather {
            labels.push(weather.clone());
        }
        labels.extend(self.temperature.map(|t| t.as_str().to_string()));
        labels.extend(self.formality.map(|f| f.as_str().to_string()));
        labels.extend(self.duration.map(|d| d.as_str().to_string()));
        labels.extend(self.time_of_day.map(|t| t.as_str().to_string()));
        labels
    }

    /// Sets or unsets a single criterion
    pub fn apply(&mut self, update: FilterUpdate) {
        match update {
            FilterUpdate::Weather(v) => self.weather = v,
            FilterUpdate::Temperature(v) => self.temperature = v,
            FilterUpdate::Formality(v) => self.formality = v,
            FilterUpdate::Duration(v) => self.duration = v,
            FilterUpdate::TimeOfDay(v) => self.time_of_day = v,
        }
    }
}

/// Change of one criterion of a `FilterSelection`
#[derive(Debug, Clone, PartialEq)]
pub enum FilterUpdate {
    Weather(Option<String>),
    Temperature(Option<Temperature>),
    Formality(Option<Formality>),
    Duration(Option<Duration>),
    TimeOfDay(Option<TimeOfDay>),
}
