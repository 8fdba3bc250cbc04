//! Output formatting for configurations and export history.
//!
//! Supports a table view for people and JSON for programmatic use.

use chrono::DateTime;
use colored::Colorize;
use comfy_table::{presets::UTF8_FULL, Table};

use crate::domain::{Configuration, ExportRecord};

use super::naming::humanize;
use super::templates::{template_defaults, template_keys};

/// Output format options.
#[derive(Debug, Clone, Copy, Default)]
pub enum OutputFormat {
    /// Compact table listing.
    #[default]
    Table,
    /// JSON format for programmatic use.
    Json,
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "table" => Ok(Self::Table),
            "json" => Ok(Self::Json),
            _ => Err(format!("Unknown format: {s}. Use: table, json")),
        }
    }
}

/// Formats a configuration as pretty JSON.
///
/// # Errors
/// Returns error if serialization fails.
pub fn format_config_json(config: &Configuration) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(config)
}

/// Formats a list of export records as JSON.
///
/// # Errors
/// Returns error if serialization fails.
pub fn format_exports_json(records: &[&ExportRecord]) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(records)
}

/// Formats a table listing of export records in the given order.
pub fn format_exports_table(records: &[&ExportRecord]) -> String {
    if records.is_empty() {
        return "Nothing exported yet.".dimmed().to_string();
    }

    let mut table = Table::new();
    table.load_preset(UTF8_FULL);
    table.set_header(vec!["ID", "Created", "App", "Goal", "Features"]);

    for record in records {
        let goal = record
            .config
            .goal
            .as_deref()
            .filter(|g| !g.is_empty())
            .unwrap_or("-");

        table.add_row(vec![
            short_id(&record.id),
            &format_timestamp(record.created_at),
            &truncate(&record.config.app_name, 30),
            goal,
            &record.config.features.len().to_string(),
        ]);
    }

    table.to_string()
}

/// Formats the built-in templates as a table.
pub fn format_templates_table() -> String {
    let mut table = Table::new();
    table.load_preset(UTF8_FULL);
    table.set_header(vec!["Key", "Template", "App", "Tagline"]);

    for key in template_keys() {
        if let Some(defaults) = template_defaults(key) {
            table.add_row(vec![
                key,
                &humanize(key),
                defaults.app_name,
                &truncate(defaults.tagline, 40),
            ]);
        }
    }

    table.to_string()
}

/// Formats a one-line summary of the stored draft.
pub fn format_draft_summary(config: &Configuration) -> String {
    format!(
        "{} {} {} ({} features)",
        config.theme.emoji,
        config.app_name.bold(),
        config.goal.as_deref().unwrap_or("-").cyan(),
        config.features.len()
    )
}

/// Epoch milliseconds as a UTC date and time.
fn format_timestamp(millis: i64) -> String {
    DateTime::from_timestamp_millis(millis).map_or_else(
        || "-".to_string(),
        |dt| dt.format("%Y-%m-%d %H:%M").to_string(),
    )
}

fn short_id(id: &str) -> &str {
    id.get(..8).unwrap_or(id)
}

/// Truncates a string to max length with ellipsis.
fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else {
        let cut: String = s.chars().take(max_len - 3).collect();
        format!("{cut}...")
    }
}
