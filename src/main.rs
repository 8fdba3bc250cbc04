//! App Composer - compose, save and export app scaffold configurations.
//!
//! Wizard fields (optionally prefilled from a template) are normalized into a
//! configuration that can be kept as a draft or exported into a local,
//! append-only history. Exports can be downloaded as JSON files.
//!
//!   app-composer templates                         # Browse presets
//!   app-composer preview -t quote-engine           # See what a preset builds
//!   app-composer save --app-name Acme --goal crm-lite
//!   app-composer export                            # Snapshot the draft
//!   app-composer list --recent                     # Latest exports
//!   app-composer download <id>                     # Write acme-config.json

mod application;
mod cli;
mod domain;
mod infrastructure;

use std::path::PathBuf;

use clap::Parser;
use colored::Colorize;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use application::{
    build_config, download_export, find_export, format_config_json, format_draft_summary,
    format_exports_json, format_exports_table, format_templates_table, history, humanize,
    recent_exports, render_export, template_defaults, ExportManager, ExportOutcome, OutputFormat,
};
use cli::{Cli, Commands, WizardArgs};
use domain::{AppError, AppSettings, RawInput};
use infrastructure::{config_file_path, ensure_config_exists, load_config, LocalStorage, PersistenceStore};

fn main() {
    let cli = Cli::parse();

    // Setup logging based on verbosity
    setup_logging(cli.verbose);

    if let Err(e) = run(cli) {
        eprintln!("{} {}", "Error:".red().bold(), e);
        std::process::exit(1);
    }
}

/// Main application logic.
fn run(cli: Cli) -> domain::Result<()> {
    let format = cli
        .output_format()
        .map_err(|e| AppError::Config { message: e })?;

    let settings = load_config()?;

    match cli.command {
        Commands::Preview(args) => cmd_preview(&args)?,
        Commands::Save(args) => cmd_save(&settings, &args)?,
        Commands::Generate(args) => cmd_generate(&settings, &args)?,
        Commands::Draft => cmd_draft(&settings, format)?,
        Commands::Export => cmd_export(&settings)?,
        Commands::List { recent } => cmd_list(&settings, recent, format)?,
        Commands::Show { id } => cmd_show(&settings, &id)?,
        Commands::Download { id, dir } => cmd_download(&settings, &id, dir)?,
        Commands::Templates => cmd_templates(),
        Commands::Template { key } => cmd_template(&key)?,
        Commands::Clear { yes } => cmd_clear(&settings, yes)?,
        Commands::Init => cmd_init()?,
        Commands::Paths => cmd_paths(&settings),
    }

    Ok(())
}

/// Open the persistence store at the configured location.
fn open_store(settings: &AppSettings) -> domain::Result<PersistenceStore> {
    let storage = LocalStorage::open(&settings.storage_db_path())?;
    PersistenceStore::open(storage)
}

/// Template prefill overlaid with the explicitly entered fields.
fn wizard_input(args: &WizardArgs) -> RawInput {
    let prefill = match args.template.as_deref() {
        Some(key) => template_defaults(key).map_or_else(
            || {
                eprintln!("{} No template named '{key}', using defaults", "!".yellow());
                RawInput::default()
            },
            RawInput::from_template,
        ),
        None => RawInput::default(),
    };

    prefill.overlay(args.entered())
}

/// Print the configuration the wizard would produce.
fn cmd_preview(args: &WizardArgs) -> domain::Result<()> {
    let config = build_config(&wizard_input(args));
    let json = format_config_json(&config).map_err(AppError::json_parse)?;
    println!("{json}");
    Ok(())
}

/// Store the wizard's configuration as the draft.
fn cmd_save(settings: &AppSettings, args: &WizardArgs) -> domain::Result<()> {
    let config = build_config(&wizard_input(args));
    let mut store = open_store(settings)?;
    store.save_draft(config)?;

    if let Some(draft) = &store.state().config {
        println!("{} Saved! {}", "✓".green(), format_draft_summary(draft));
    }
    Ok(())
}

/// Store the wizard's configuration and export it.
fn cmd_generate(settings: &AppSettings, args: &WizardArgs) -> domain::Result<()> {
    let config = build_config(&wizard_input(args));
    let mut store = open_store(settings)?;

    match ExportManager::new().generate(&mut store, config)? {
        ExportOutcome::Exported(record) => {
            println!(
                "{} Scaffold generated. Download it with: app-composer download {}",
                "✓".green(),
                record.id.cyan()
            );
        }
        ExportOutcome::NothingToExport => {
            println!("{} Draft saved, but it has no app name to export.", "!".yellow());
        }
    }
    Ok(())
}

/// Show the stored draft.
fn cmd_draft(settings: &AppSettings, format: OutputFormat) -> domain::Result<()> {
    let store = open_store(settings)?;

    let Some(config) = &store.state().config else {
        println!("{}", "No draft saved.".dimmed());
        return Ok(());
    };

    match format {
        OutputFormat::Table => println!("{}", format_draft_summary(config)),
        OutputFormat::Json => {
            println!("{}", format_config_json(config).map_err(AppError::json_parse)?);
        }
    }
    Ok(())
}

/// Export the stored draft.
fn cmd_export(settings: &AppSettings) -> domain::Result<()> {
    let mut store = open_store(settings)?;

    match ExportManager::new().export_draft(&mut store)? {
        ExportOutcome::Exported(record) => {
            println!(
                "{} Exported! {} → {}",
                "✓".green(),
                record.config.app_name.bold(),
                record.id.cyan()
            );
        }
        ExportOutcome::NothingToExport => {
            println!(
                "{} Nothing to export. Run `app-composer save` and fill it in.",
                "!".yellow()
            );
        }
    }
    Ok(())
}

/// List exports, most recent first.
fn cmd_list(settings: &AppSettings, recent: bool, format: OutputFormat) -> domain::Result<()> {
    let store = open_store(settings)?;
    let state = store.state();

    let records = if recent {
        recent_exports(state, settings.exports.recent_limit)
    } else {
        history(state)
    };

    let output = match format {
        OutputFormat::Table => format_exports_table(&records),
        OutputFormat::Json => format_exports_json(&records).map_err(AppError::json_parse)?,
    };

    println!("{output}");
    Ok(())
}

/// Print one export as JSON.
fn cmd_show(settings: &AppSettings, id: &str) -> domain::Result<()> {
    let store = open_store(settings)?;
    let record = find_export(store.state(), id)
        .ok_or_else(|| AppError::ExportNotFound { id: id.to_string() })?;

    println!("{}", render_export(record)?);
    Ok(())
}

/// Write an export file.
fn cmd_download(settings: &AppSettings, id: &str, dir: Option<PathBuf>) -> domain::Result<()> {
    let store = open_store(settings)?;
    let dir = dir.unwrap_or_else(|| settings.download_dir());

    let path = download_export(store.state(), id, &dir)?;
    println!("{} {}", "✓".green(), path.display());
    Ok(())
}

/// List built-in templates.
fn cmd_templates() {
    println!("{}", format_templates_table());
}

/// Show the configuration a template prefills.
fn cmd_template(key: &str) -> domain::Result<()> {
    let Some(defaults) = template_defaults(key) else {
        println!("{} No template named '{key}'.", "!".yellow());
        return Ok(());
    };

    let config = build_config(&RawInput::from_template(defaults));
    println!("{} Template loaded: {}", "✓".green(), humanize(key).bold());
    println!("{}", format_config_json(&config).map_err(AppError::json_parse)?);
    Ok(())
}

/// Delete the draft and all exports.
fn cmd_clear(settings: &AppSettings, yes: bool) -> domain::Result<()> {
    if !yes {
        println!(
            "{} This deletes the draft and every export. Re-run with --yes to confirm.",
            "!".yellow()
        );
        return Ok(());
    }

    let mut store = open_store(settings)?;
    store.clear()?;
    println!("{} Local data cleared.", "✓".green());
    Ok(())
}

/// Create the default settings file.
fn cmd_init() -> domain::Result<()> {
    let path = config_file_path();

    if ensure_config_exists(&path)? {
        println!("{} Created {}", "✓".green(), path.display());
    } else {
        println!("Settings already exist at {}", path.display());
    }
    Ok(())
}

/// Show data paths.
fn cmd_paths(settings: &AppSettings) {
    println!("{}", "📂 App Composer Paths".bold());
    println!();
    println!("  Data dir:  {}", settings.data_dir().display());
    println!("  Storage:   {}", settings.storage_db_path().display());
    println!("  Settings:  {}", config_file_path().display());
    println!("  Downloads: {}", settings.download_dir().display());
}

/// Setup tracing/logging based on verbosity level.
fn setup_logging(verbosity: u8) {
    let filter = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter));

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false).without_time())
        .with(filter)
        .init();
}
