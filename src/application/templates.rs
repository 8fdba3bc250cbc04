//! Built-in templates for prefilling the wizard.

use crate::domain::TemplateDefaults;

static CATALOG: &[(&str, TemplateDefaults)] = &[
    (
        "quote-engine",
        TemplateDefaults {
            app_name: "QuoteForge",
            goal: "quote-engine",
            tagline: "Generate clean, itemized quotes in minutes.",
            color: "#4f46e5",
            accent: "#14b8a6",
            emoji: "⚙️",
            features: &[
                "client-side-router",
                "forms",
                "pricing-engine",
                "pdf-export",
                "webhooks",
            ],
        },
    ),
    (
        "lead-capture",
        TemplateDefaults {
            app_name: "LeadBeam",
            goal: "lead-capture",
            tagline: "Capture, qualify, and book calls on autopilot.",
            color: "#1e40af",
            accent: "#22d3ee",
            emoji: "🚀",
            features: &["client-side-router", "forms", "calendly", "webhooks"],
        },
    ),
    (
        "crm-lite",
        TemplateDefaults {
            app_name: "Trackr",
            goal: "crm-lite",
            tagline: "Contacts. Notes. Follow-ups. Simple pipeline.",
            color: "#0ea5e9",
            accent: "#f59e0b",
            emoji: "📇",
            features: &["client-side-router", "forms", "webhooks"],
        },
    ),
];

/// Look up a template by key. Unknown keys have no defaults.
#[must_use]
pub fn template_defaults(key: &str) -> Option<&'static TemplateDefaults> {
    CATALOG
        .iter()
        .find(|(k, _)| *k == key)
        .map(|(_, defaults)| defaults)
}

/// All template keys in catalog order.
pub fn template_keys() -> impl Iterator<Item = &'static str> {
    CATALOG.iter().map(|(k, _)| *k)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::build_config;
    use crate::domain::RawInput;

    #[test]
    fn test_quote_engine_defaults() {
        let defaults = template_defaults("quote-engine").unwrap();
        assert_eq!(defaults.app_name, "QuoteForge");
        assert!(defaults.features.contains(&"pricing-engine"));
    }

    #[test]
    fn test_unknown_key_has_no_defaults() {
        assert!(template_defaults("unknown-key").is_none());
        assert!(template_defaults("").is_none());
    }

    #[test]
    fn test_catalog_has_three_keys() {
        let keys: Vec<_> = template_keys().collect();
        assert_eq!(keys, vec!["quote-engine", "lead-capture", "crm-lite"]);

        for key in keys {
            assert_eq!(template_defaults(key).unwrap().goal, key);
        }
    }

    #[test]
    fn test_template_prefill_builds_config() {
        let defaults = template_defaults("lead-capture").unwrap();
        let config = build_config(&RawInput::from_template(defaults));

        assert_eq!(config.app_name, "LeadBeam");
        assert_eq!(config.goal.as_deref(), Some("lead-capture"));
        assert_eq!(config.theme.color, "#1e40af");
        assert_eq!(config.theme.emoji, "🚀");
        assert_eq!(
            config.features,
            vec!["client-side-router", "forms", "calendly", "webhooks"]
        );
        assert_eq!(config.integrations.calendly_link, "");
    }
}
