//! Configuration builder.
//!
//! Maps raw wizard input onto a fully-defaulted configuration.

use crate::domain::models::{DEFAULT_ACCENT, DEFAULT_APP_NAME, DEFAULT_COLOR, DEFAULT_EMOJI};
use crate::domain::{Configuration, Integrations, RawInput, Theme};

/// Builds a configuration from raw input. Never fails.
///
/// Empty strings fall back to the default for the name, tagline and theme
/// fields only. Goal and integration links pass through as given.
#[must_use]
pub fn build_config(raw: &RawInput) -> Configuration {
    Configuration {
        app_name: non_empty_or(raw.app_name.as_deref(), DEFAULT_APP_NAME),
        goal: raw.goal.clone(),
        tagline: non_empty_or(raw.tagline.as_deref(), ""),
        theme: Theme {
            color: non_empty_or(raw.color.as_deref(), DEFAULT_COLOR),
            accent: non_empty_or(raw.accent.as_deref(), DEFAULT_ACCENT),
            emoji: non_empty_or(raw.emoji.as_deref(), DEFAULT_EMOJI),
        },
        integrations: Integrations {
            stripe_link: raw.stripe_link.clone().unwrap_or_default(),
            calendly_link: raw.calendly_link.clone().unwrap_or_default(),
            webhook: raw.webhook.clone().unwrap_or_default(),
        },
        features: raw.features.clone(),
    }
}

fn non_empty_or(value: Option<&str>, default: &str) -> String {
    match value {
        Some(v) if !v.is_empty() => v.to_string(),
        _ => default.to_string(),
    }
}
