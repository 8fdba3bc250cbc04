//! CLI interface using clap.
//!
//! Provides command-line arguments and subcommands for the tool.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use crate::application::OutputFormat;
use crate::domain::RawInput;

/// App Composer - compose, save and export app scaffold configurations.
#[derive(Parser, Debug)]
#[command(name = "app-composer")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose logging (use multiple times for more verbosity).
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Output format: table or json.
    #[arg(short, long, default_value = "table")]
    pub format: String,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Build a configuration and print it without storing anything.
    Preview(WizardArgs),

    /// Build a configuration and store it as the draft.
    Save(WizardArgs),

    /// Build a configuration, store it as the draft and export it.
    Generate(WizardArgs),

    /// Show the stored draft.
    Draft,

    /// Export the stored draft.
    Export,

    /// List exports, most recent first.
    List {
        /// Only show the most recent exports.
        #[arg(short, long)]
        recent: bool,
    },

    /// Show one export as JSON.
    Show {
        /// Export ID.
        id: String,
    },

    /// Write an export to `<app-name>-config.json`.
    Download {
        /// Export ID.
        id: String,

        /// Target directory (defaults to the configured download directory).
        #[arg(short, long)]
        dir: Option<PathBuf>,
    },

    /// List built-in templates.
    Templates,

    /// Show the configuration a template prefills.
    Template {
        /// Template key, e.g. quote-engine.
        key: String,
    },

    /// Delete the draft and all exports.
    Clear {
        /// Confirm deletion. This cannot be undone.
        #[arg(long)]
        yes: bool,
    },

    /// Create a default settings file if none exists.
    Init,

    /// Show the data paths being used.
    Paths,
}

/// Wizard fields. Anything left out falls back to the template, then to defaults.
#[derive(Args, Debug, Default)]
pub struct WizardArgs {
    /// Prefill from a built-in template.
    #[arg(short, long)]
    pub template: Option<String>,

    /// App name.
    #[arg(long)]
    pub app_name: Option<String>,

    /// App archetype, e.g. quote-engine.
    #[arg(long)]
    pub goal: Option<String>,

    /// One-line pitch.
    #[arg(long)]
    pub tagline: Option<String>,

    /// Primary color as hex.
    #[arg(long)]
    pub color: Option<String>,

    /// Accent color as hex.
    #[arg(long)]
    pub accent: Option<String>,

    /// Theme glyph.
    #[arg(long)]
    pub emoji: Option<String>,

    /// Stripe payment link.
    #[arg(long)]
    pub stripe_link: Option<String>,

    /// Calendly booking link.
    #[arg(long)]
    pub calendly_link: Option<String>,

    /// Webhook URL.
    #[arg(long)]
    pub webhook: Option<String>,

    /// Feature tag (repeatable).
    #[arg(long = "feature")]
    pub features: Vec<String>,
}

impl WizardArgs {
    /// The explicitly entered fields, without any template prefill.
    #[must_use]
    pub fn entered(&self) -> RawInput {
        RawInput {
            app_name: self.app_name.clone(),
            goal: self.goal.clone(),
            tagline: self.tagline.clone(),
            color: self.color.clone(),
            accent: self.accent.clone(),
            emoji: self.emoji.clone(),
            stripe_link: self.stripe_link.clone(),
            calendly_link: self.calendly_link.clone(),
            webhook: self.webhook.clone(),
            features: self.features.clone(),
        }
    }
}

impl Cli {
    /// Parse the output format argument.
    pub fn output_format(&self) -> Result<OutputFormat, String> {
        self.format.parse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_wizard_args() {
        let cli = Cli::try_parse_from([
            "app-composer",
            "save",
            "--template",
            "crm-lite",
            "--app-name",
            "Acme",
            "--feature",
            "forms",
            "--feature",
            "webhooks",
        ])
        .unwrap();

        let Commands::Save(args) = cli.command else {
            panic!("expected save");
        };
        assert_eq!(args.template.as_deref(), Some("crm-lite"));

        let entered = args.entered();
        assert_eq!(entered.app_name.as_deref(), Some("Acme"));
        assert_eq!(entered.features, vec!["forms", "webhooks"]);
        assert!(entered.goal.is_none());
    }

    #[test]
    fn test_parse_global_flags() {
        let cli = Cli::try_parse_from(["app-composer", "-vv", "-f", "json", "list", "--recent"])
            .unwrap();

        assert_eq!(cli.verbose, 2);
        assert!(matches!(cli.output_format(), Ok(OutputFormat::Json)));
        assert!(matches!(cli.command, Commands::List { recent: true }));
    }

    #[test]
    fn test_clear_requires_flag_value() {
        let cli = Cli::try_parse_from(["app-composer", "clear"]).unwrap();
        assert!(matches!(cli.command, Commands::Clear { yes: false }));
    }
}
