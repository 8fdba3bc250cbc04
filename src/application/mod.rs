//! Application layer - use cases and orchestration.
//!
//! Builds configurations from wizard input, prefills from templates,
//! and manages the export history.

pub mod builder;
pub mod exporter;
pub mod formatter;
pub mod identity;
pub mod naming;
pub mod templates;

pub use builder::build_config;
pub use exporter::{
    download_export, find_export, history, recent_exports, render_export, ExportManager,
    ExportOutcome,
};
pub use formatter::{
    format_config_json, format_draft_summary, format_exports_json, format_exports_table,
    format_templates_table, OutputFormat,
};
pub use naming::humanize;
pub use templates::template_defaults;
