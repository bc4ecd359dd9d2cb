//! Form configuration model
//!
//! Everything the compiler needs beyond the field list itself. The whole
//! tree is serde-serializable: it is the payload persisted by the saved-forms
//! table, so a stored configuration can be reloaded into the designer and
//! recompiled later.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

pub const DEFAULT_PRIMARY_COLOR: &str = "#3b82f6";
pub const DEFAULT_BUTTON_TEXT_COLOR: &str = "#ffffff";
pub const DEFAULT_FORM_BACKGROUND_COLOR: &str = "#ffffff";
pub const DEFAULT_TEXT_COLOR: &str = "#1e293b";
pub const DEFAULT_LABEL_COLOR: &str = "#475569";
pub const DEFAULT_SUBMIT_LABEL: &str = "Invia Richiesta";
pub const DEFAULT_FORM_TITLE: &str = "Lascia i tuoi dati";

/// Remote store the generated document talks to directly: project URL plus
/// the public (anon) API key compiled into the script.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoreEndpoint {
    pub url: String,
    pub anon_key: String,
}

/// Color tokens and submit-button label. Values are emitted verbatim into
/// the scoped stylesheet; the dashboard operator is trusted, so no CSS
/// validation happens here. Empty strings fall back to the defaults above.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StyleConfig {
    pub primary_color: String,
    pub button_text_color: String,
    pub form_background_color: String,
    pub text_color: String,
    pub label_color: String,
    pub submit_button_text: String,
}

impl Default for StyleConfig {
    fn default() -> Self {
        Self {
            primary_color: DEFAULT_PRIMARY_COLOR.into(),
            button_text_color: DEFAULT_BUTTON_TEXT_COLOR.into(),
            form_background_color: DEFAULT_FORM_BACKGROUND_COLOR.into(),
            text_color: DEFAULT_TEXT_COLOR.into(),
            label_color: DEFAULT_LABEL_COLOR.into(),
            submit_button_text: DEFAULT_SUBMIT_LABEL.into(),
        }
    }
}

impl StyleConfig {
    fn pick<'a>(value: &'a str, fallback: &'a str) -> &'a str {
        if value.trim().is_empty() {
            fallback
        } else {
            value
        }
    }

    pub fn primary(&self) -> &str {
        Self::pick(&self.primary_color, DEFAULT_PRIMARY_COLOR)
    }

    pub fn button_text(&self) -> &str {
        Self::pick(&self.button_text_color, DEFAULT_BUTTON_TEXT_COLOR)
    }

    pub fn form_background(&self) -> &str {
        Self::pick(&self.form_background_color, DEFAULT_FORM_BACKGROUND_COLOR)
    }

    pub fn text(&self) -> &str {
        Self::pick(&self.text_color, DEFAULT_TEXT_COLOR)
    }

    pub fn label(&self) -> &str {
        Self::pick(&self.label_color, DEFAULT_LABEL_COLOR)
    }

    pub fn submit_label(&self) -> &str {
        Self::pick(&self.submit_button_text, DEFAULT_SUBMIT_LABEL)
    }
}

/// One consent toggle (privacy policy or terms). When enabled it renders as
/// a required checkbox on the final step, linking to `url` when present.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConsentConfig {
    pub enabled: bool,
    pub url: String,
    pub checked_by_default: bool,
}

/// The mutable editing state the compiler reads as one snapshot.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FormConfig {
    pub store: StoreEndpoint,
    /// Redirect target after a successful submission; empty means replace
    /// the form with an inline success message instead.
    pub thank_you_url: String,
    /// Secondary best-effort POST target; empty means no webhook code is
    /// emitted at all.
    pub webhook_url: String,
    pub multi_step: bool,
    /// Step assignment keyed by field name. Names, not positions: two
    /// services may reuse a field name independently, and positions would
    /// collide across edits.
    pub field_steps: HashMap<String, u32>,
    pub show_title: bool,
    pub title: String,
    pub privacy_policy: ConsentConfig,
    pub terms: ConsentConfig,
    pub style: StyleConfig,
}

impl Default for FormConfig {
    fn default() -> Self {
        Self {
            store: StoreEndpoint::default(),
            thank_you_url: String::new(),
            webhook_url: String::new(),
            multi_step: false,
            field_steps: HashMap::new(),
            show_title: true,
            title: DEFAULT_FORM_TITLE.into(),
            privacy_policy: ConsentConfig::default(),
            terms: ConsentConfig::default(),
            style: StyleConfig::default(),
        }
    }
}

impl FormConfig {
    /// Assigned step for a field, defaulting to 1. Stored values below 1
    /// never exist (`set_step` clamps), but the floor is applied on read too
    /// so deserialized configs behave the same.
    pub fn step_of(&self, field_name: &str) -> u32 {
        self.field_steps.get(field_name).copied().unwrap_or(1).max(1)
    }

    /// Assign a field to a step, clamped to a minimum of 1.
    pub fn set_step(&mut self, field_name: impl Into<String>, step: u32) {
        self.field_steps.insert(field_name.into(), step.max(1));
    }

    pub fn any_consent_enabled(&self) -> bool {
        self.privacy_policy.enabled || self.terms.enabled
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_dashboard_presets() {
        let config = FormConfig::default();
        assert_eq!(config.style.primary(), "#3b82f6");
        assert_eq!(config.style.submit_label(), "Invia Richiesta");
        assert_eq!(config.title, "Lascia i tuoi dati");
        assert!(config.show_title);
        assert!(!config.multi_step);
    }

    #[test]
    fn test_empty_style_tokens_fall_back() {
        let mut style = StyleConfig::default();
        style.primary_color = String::new();
        style.submit_button_text = "  ".into();
        assert_eq!(style.primary(), DEFAULT_PRIMARY_COLOR);
        assert_eq!(style.submit_label(), DEFAULT_SUBMIT_LABEL);
    }

    #[test]
    fn test_step_assignment_clamps_to_one() {
        let mut config = FormConfig::default();
        config.set_step("nome", 0);
        assert_eq!(config.step_of("nome"), 1);
        config.set_step("nome", 3);
        assert_eq!(config.step_of("nome"), 3);
        assert_eq!(config.step_of("sconosciuto"), 1);
    }

    #[test]
    fn test_config_round_trips_through_json() {
        let mut config = FormConfig::default();
        config.webhook_url = "https://hooks.example.com/lead".into();
        config.privacy_policy.enabled = true;
        config.set_step("telefono", 2);

        let json = serde_json::to_string(&config).unwrap();
        assert!(json.contains("\"webhookUrl\""));
        let back: FormConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(back.webhook_url, config.webhook_url);
        assert!(back.privacy_policy.enabled);
        assert_eq!(back.step_of("telefono"), 2);
    }
}
