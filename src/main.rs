//! About Section - Main Entry Point
//!
//! Loads a section config and previews it in a window or exports it.

use std::fs;
use std::path::PathBuf;

use about_section::app::application::run_app;
use about_section::components::AboutSection;
use about_section::domain::SectionConfig;
use about_section::i18n::{Locale, t};
use about_section::render::{html, json};
use about_section::utils::config_store::{default_config_path, load_config};
use anyhow::{Context, Result, anyhow};
use clap::{Parser, ValueEnum};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    /// Native preview window
    Window,
    /// HTML fragment
    Html,
    /// Standalone HTML page
    Document,
    /// Visual tree as JSON
    Json,
    /// JSON Schema of the config
    Schema,
}

#[derive(Debug, Parser)]
#[command(name = "about-section", version, about = "Render an About Me section")]
struct Cli {
    /// Section config (.toml or .json); defaults to about.toml in the config directory
    config: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Window)]
    format: OutputFormat,

    /// Locale tag such as pt-BR or en-US; detected from the OS when omitted
    #[arg(short, long, long_help = locale_help())]
    locale: Option<String>,

    /// Write output to this file instead of stdout
    #[arg(short, long)]
    output: Option<PathBuf>,
}

fn locale_help() -> String {
    let supported = [Locale::PtBR, Locale::EnUS]
        .map(|locale| format!("{} ({})", locale.tag(), locale.display_name()))
        .join(", ");
    format!("Locale tag; detected from the OS when omitted. Supported: {supported}")
}

fn resolve_locale(tag: Option<&str>) -> Result<Locale> {
    match tag {
        Some(tag) => Locale::from_tag(tag).ok_or_else(|| anyhow!("unsupported locale: {tag}")),
        None => Ok(Locale::detect()),
    }
}

/// Resolve the locale and load the section config named on the command line
fn load_section(cli: &Cli) -> Result<(SectionConfig, Locale)> {
    let locale = resolve_locale(cli.locale.as_deref())?;
    let path = match &cli.config {
        Some(path) => path.clone(),
        None => default_config_path()?,
    };
    let config =
        load_config(&path).with_context(|| format!("loading config {}", path.display()))?;
    tracing::info!(locale = locale.tag(), "section loaded");
    Ok((config, locale))
}

fn emit(output: Option<&PathBuf>, content: &str) -> Result<()> {
    match output {
        Some(path) => {
            fs::write(path, content).with_context(|| format!("writing {}", path.display()))?;
            tracing::info!(path = %path.display(), bytes = content.len(), "output written");
        }
        None => println!("{content}"),
    }
    Ok(())
}

fn main() -> Result<()> {
    // Initialize tracing for logging; stdout carries the rendered output
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    let cli = Cli::parse();

    tracing::info!(format = ?cli.format, "starting about section");

    match cli.format {
        OutputFormat::Schema => emit(cli.output.as_ref(), &json::config_schema()?),
        OutputFormat::Window => {
            let (config, locale) = load_section(&cli)?;
            run_app(config, locale);
            Ok(())
        }
        OutputFormat::Html => {
            let (config, locale) = load_section(&cli)?;
            let tree = AboutSection::new(config).locale(locale).tree();
            emit(cli.output.as_ref(), &html::to_html(&tree))
        }
        OutputFormat::Document => {
            let (config, locale) = load_section(&cli)?;
            let title = format!("{} - {}", t(locale, "window-title"), config.identity.name);
            let tree = AboutSection::new(config).locale(locale).tree();
            emit(cli.output.as_ref(), &html::to_document(&tree, &title, locale))
        }
        OutputFormat::Json => {
            let (config, locale) = load_section(&cli)?;
            let tree = AboutSection::new(config).locale(locale).tree();
            emit(cli.output.as_ref(), &json::to_json(&tree)?)
        }
    }
}
