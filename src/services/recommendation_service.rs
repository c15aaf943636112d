use crate::models::{FilterSelection, FilterUpdate, Occasion, Recommendation};

/// Narrows `catalog` to the recommendations matching every set criterion,
/// keeping catalog order.
///
/// `duration` and `time_of_day` are accepted but do not constrain the result.
pub fn apply_filters(catalog: &[Recommendation], selection: &FilterSelection) -> Vec<Recommendation> {
    catalog
        .iter()
        .filter(|rec| matches_selection(rec, selection))
        .cloned()
        .collect()
}

/// Every recommendation suitable for `occasion`, in catalog order
pub fn get_for_occasion(catalog: &[Recommendation], occasion: Occasion) -> Vec<Recommendation> {
    catalog
        .iter()
        .filter(|rec| rec.suits_occasion(occasion))
        .cloned()
        .collect()
}

fn matches_selection(rec: &Recommendation, selection: &FilterSelection) -> bool {
    if let Some(weather) = &selection.weather {
        if !rec.suits_weather(weather) {
            return false;
        }
    }

    if let Some(temperature) = selection.temperature {
        let labels = temperature.weather_labels();
        if !rec
            .weather_suitability
            .iter()
            .any(|w| labels.contains(&w.as_str()))
        {
            return false;
        }
    }

    if let Some(formality) = selection.formality {
        let accepted = formality.categories();
        if !rec
            .occasion_types
            .iter()
            .any(|o| accepted.contains(&o.category()))
        {
            return false;
        }
    }

    true
}

/// Filter state of the occasion / explore screen
#[derive(Debug, Clone)]
pub struct RecommendationFilter {
    catalog: Vec<Recommendation>,
    selection: FilterSelection,
}

impl RecommendationFilter {
    pub fn new(catalog: Vec<Recommendation>) -> Self {
        Self {
            catalog,
            selection: FilterSelection::default(),
        }
    }

    pub fn catalog(&self) -> &[Recommendation] {
        &self.catalog
    }

    pub fn selection(&self) -> &FilterSelection {
        &self.selection
    }

    pub fn update_filter(&mut self, update: FilterUpdate) {
        log::debug!("Filter update: {:?}", update);
        self.selection.apply(update);
    }

    /// Resets every criterion to "no constraint"
    pub fn clear(&mut self) {
        self.selection = FilterSelection::default();
    }

    pub fn has_active_filters(&self) -> bool {
        !self.selection.is_empty()
    }

    pub fn filtered(&self) -> Vec<Recommendation> {
        apply_filters(&self.catalog, &self.selection)
    }

    pub fn for_occasion(&self, occasion: Occasion) -> Vec<Recommendation> {
        get_for_occasion(&self.catalog, occasion)
    }
}
