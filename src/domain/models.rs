//! Domain models for app configurations and their export history.
//!
//! Field order of the serialized structs is part of the storage format:
//! re-saving loaded data must reproduce the stored text exactly.

use serde::{Deserialize, Serialize};

/// Default application name when none is given.
pub const DEFAULT_APP_NAME: &str = "My App";
/// Default primary theme color.
pub const DEFAULT_COLOR: &str = "#4f46e5";
/// Default accent theme color.
pub const DEFAULT_ACCENT: &str = "#14b8a6";
/// Default theme glyph.
pub const DEFAULT_EMOJI: &str = "∞";
/// Goal preselected when a template does not name one.
pub const DEFAULT_GOAL: &str = "quote-engine";

/// Visual theme of a scaffolded app.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Theme {
    pub color: String,
    pub accent: String,
    pub emoji: String,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            color: DEFAULT_COLOR.to_string(),
            accent: DEFAULT_ACCENT.to_string(),
            emoji: DEFAULT_EMOJI.to_string(),
        }
    }
}

/// Third-party links wired into a scaffolded app.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Integrations {
    #[serde(default)]
    pub stripe_link: String,
    #[serde(default)]
    pub calendly_link: String,
    #[serde(default)]
    pub webhook: String,
}

/// A fully-populated app configuration (the draft or an exported payload).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Configuration {
    /// Display name of the app.
    #[serde(default)]
    pub app_name: String,
    /// Archetype identifier, e.g. `quote-engine`. Serialized as `null` when absent.
    #[serde(default)]
    pub goal: Option<String>,
    /// One-line pitch.
    #[serde(default)]
    pub tagline: String,
    #[serde(default)]
    pub theme: Theme,
    #[serde(default)]
    pub integrations: Integrations,
    /// Feature tags in input order. Duplicates are kept.
    #[serde(default)]
    pub features: Vec<String>,
}

impl Configuration {
    /// Whether this configuration carries a name and can be exported.
    #[must_use]
    pub fn is_exportable(&self) -> bool {
        !self.app_name.is_empty()
    }
}

/// An immutable, identified snapshot of a configuration in the export history.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExportRecord {
    /// Unique identifier, the only lookup key for downloads.
    pub id: String,
    #[serde(flatten)]
    pub config: Configuration,
    /// Export time in epoch milliseconds.
    pub created_at: i64,
    /// Schema version tag.
    pub version: String,
    /// Name of the producing tool.
    pub generator: String,
}

/// Everything the persistence store keeps.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PersistedState {
    /// Current draft; `None` is stored as an empty record.
    pub config: Option<Configuration>,
    /// Export history in append order.
    pub exports: Vec<ExportRecord>,
}

/// A named preset used to prefill the wizard.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TemplateDefaults {
    pub app_name: &'static str,
    pub goal: &'static str,
    pub tagline: &'static str,
    pub color: &'static str,
    pub accent: &'static str,
    pub emoji: &'static str,
    pub features: &'static [&'static str],
}

/// Raw wizard input. Every field may be missing.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RawInput {
    pub app_name: Option<String>,
    pub goal: Option<String>,
    pub tagline: Option<String>,
    pub color: Option<String>,
    pub accent: Option<String>,
    pub emoji: Option<String>,
    pub stripe_link: Option<String>,
    pub calendly_link: Option<String>,
    pub webhook: Option<String>,
    /// All values submitted under `features`, in submission order.
    pub features: Vec<String>,
}

impl RawInput {
    /// Prefilled wizard input for a template.
    ///
    /// Integration links are left unset; templates never carry them.
    #[must_use]
    pub fn from_template(template: &TemplateDefaults) -> Self {
        let goal = if template.goal.is_empty() {
            DEFAULT_GOAL
        } else {
            template.goal
        };

        Self {
            app_name: Some(template.app_name.to_string()),
            goal: Some(goal.to_string()),
            tagline: Some(template.tagline.to_string()),
            color: Some(or_default(template.color, DEFAULT_COLOR)),
            accent: Some(or_default(template.accent, DEFAULT_ACCENT)),
            emoji: Some(or_default(template.emoji, DEFAULT_EMOJI)),
            stripe_link: None,
            calendly_link: None,
            webhook: None,
            features: template.features.iter().map(ToString::to_string).collect(),
        }
    }

    /// Layer explicitly entered values over this input.
    ///
    /// Set fields in `other` win. A non-empty feature list in `other`
    /// replaces ours.
    #[must_use]
    pub fn overlay(self, other: Self) -> Self {
        Self {
            app_name: other.app_name.or(self.app_name),
            goal: other.goal.or(self.goal),
            tagline: other.tagline.or(self.tagline),
            color: other.color.or(self.color),
            accent: other.accent.or(self.accent),
            emoji: other.emoji.or(self.emoji),
            stripe_link: other.stripe_link.or(self.stripe_link),
            calendly_link: other.calendly_link.or(self.calendly_link),
            webhook: other.webhook.or(self.webhook),
            features: if other.features.is_empty() {
                self.features
            } else {
                other.features
            },
        }
    }
}

fn or_default(value: &str, default: &str) -> String {
    let chosen = if value.is_empty() { default } else { value };
    chosen.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_config() -> Configuration {
        Configuration {
            app_name: "Acme".into(),
            goal: Some("crm-lite".into()),
            tagline: String::new(),
            theme: Theme::default(),
            integrations: Integrations::default(),
            features: vec!["forms".into(), "forms".into()],
        }
    }

    #[test]
    fn test_configuration_field_order() {
        let json = serde_json::to_string(&sample_config()).unwrap();
        assert_eq!(
            json,
            r##"{"appName":"Acme","goal":"crm-lite","tagline":"","theme":{"color":"#4f46e5","accent":"#14b8a6","emoji":"∞"},"integrations":{"stripeLink":"","calendlyLink":"","webhook":""},"features":["forms","forms"]}"##
        );
    }

    #[test]
    fn test_missing_goal_serializes_as_null() {
        let mut config = sample_config();
        config.goal = None;
        let value = serde_json::to_value(&config).unwrap();
        assert!(value["goal"].is_null());
    }

    #[test]
    fn test_export_record_flattens_config() {
        let record = ExportRecord {
            id: "id-1".into(),
            config: sample_config(),
            created_at: 1_700_000_000_000,
            version: "1.0.0".into(),
            generator: "Infinite App Composer".into(),
        };

        let json = serde_json::to_string(&record).unwrap();
        assert!(json.starts_with(r#"{"id":"id-1","appName":"Acme""#));
        assert!(json.ends_with(
            r#""createdAt":1700000000000,"version":"1.0.0","generator":"Infinite App Composer"}"#
        ));

        let parsed: ExportRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, record);
    }

    #[test]
    fn test_is_exportable() {
        let mut config = sample_config();
        assert!(config.is_exportable());
        config.app_name.clear();
        assert!(!config.is_exportable());
    }

    #[test]
    fn test_overlay_prefers_explicit_values() {
        let base = RawInput {
            app_name: Some("QuoteForge".into()),
            tagline: Some("Quotes".into()),
            features: vec!["forms".into()],
            ..RawInput::default()
        };
        let explicit = RawInput {
            app_name: Some("Mine".into()),
            ..RawInput::default()
        };

        let merged = base.overlay(explicit);
        assert_eq!(merged.app_name.as_deref(), Some("Mine"));
        assert_eq!(merged.tagline.as_deref(), Some("Quotes"));
        assert_eq!(merged.features, vec!["forms".to_string()]);
    }

    #[test]
    fn test_overlay_replaces_features_when_given() {
        let base = RawInput {
            features: vec!["forms".into(), "webhooks".into()],
            ..RawInput::default()
        };
        let explicit = RawInput {
            features: vec!["calendly".into()],
            ..RawInput::default()
        };

        assert_eq!(base.overlay(explicit).features, vec!["calendly".to_string()]);
    }

    #[test]
    fn test_from_template_falls_back_to_default_goal() {
        let template = TemplateDefaults {
            app_name: "X",
            goal: "",
            tagline: "",
            color: "",
            accent: "#000000",
            emoji: "",
            features: &["forms"],
        };

        let input = RawInput::from_template(&template);
        assert_eq!(input.goal.as_deref(), Some(DEFAULT_GOAL));
        assert_eq!(input.color.as_deref(), Some(DEFAULT_COLOR));
        assert_eq!(input.accent.as_deref(), Some("#000000"));
        assert_eq!(input.emoji.as_deref(), Some(DEFAULT_EMOJI));
        assert!(input.stripe_link.is_none());
    }
}
