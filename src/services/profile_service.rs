use crate::seed::{BODY_TYPES, STYLE_OPTIONS};

/// Choices collected by the onboarding screens
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OnboardingProfile {
    pub body_type: Option<String>,
    pub selected_styles: Vec<String>,
    pub custom_styles: Vec<String>,
    pub selected_occasions: Vec<String>,
    /// Occasion last tapped, selected or not
    pub current_occasion: Option<String>,
}

impl OnboardingProfile {
    pub fn new() -> Self {
        Self::default()
    }

    /// Picks a single body type. Unknown ids leave the current choice.
    pub fn select_body_type(&mut self, id: &str) -> bool {
        if !BODY_TYPES.iter().any(|b| b.id == id) {
            log::warn!("Unknown body type {}", id);
            return false;
        }
        self.body_type = Some(id.to_string());
        true
    }

    pub fn toggle_style(&mut self, style: &str) {
        toggle(&mut self.selected_styles, style);
    }

    /// Adds a typed style to the list and selects it.
    ///
    /// Returns false for blank input or a style that is already listed.
    pub fn add_custom_style(&mut self, raw: &str) -> bool {
        let style = raw.trim();
        if style.is_empty()
            || STYLE_OPTIONS.contains(&style)
            || self.custom_styles.iter().any(|s| s == style)
        {
            return false;
        }

        self.custom_styles.push(style.to_string());
        self.selected_styles.push(style.to_string());
        true
    }

    /// Built-in styles followed by the custom ones
    pub fn all_styles(&self) -> Vec<&str> {
        STYLE_OPTIONS
            .iter()
            .copied()
            .chain(self.custom_styles.iter().map(String::as_str))
            .collect()
    }

    pub fn is_style_selected(&self, style: &str) -> bool {
        self.selected_styles.iter().any(|s| s == style)
    }

    pub fn toggle_occasion(&mut self, occasion: &str) {
        toggle(&mut self.selected_occasions, occasion);
        self.current_occasion = Some(occasion.to_string());
    }
}

fn toggle(values: &mut Vec<String>, value: &str) {
    match values.iter().position(|v| v == value) {
        Some(index) => {
            values.remove(index);
        }
        None => values.push(value.to_string()),
    }
}
