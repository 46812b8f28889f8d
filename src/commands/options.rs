use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

use super::utils::format_duration;
use crate::catalog::{validate_catalog, OptionCatalog};
use crate::cli::{Args, Commands, OutputFormat};
use crate::config;
use crate::option::PrivacyLockOption;

/// Run a CLI command
pub fn run_command(args: Args) -> Result<()> {
    let config_path = args.config.as_deref();

    match args.command {
        Commands::List { format } => list_options(config_path, format),
        Commands::Show { hours, format } => show_option(config_path, hours, format),
        Commands::Validate => validate(config_path),
        Commands::Init { force } => init(config_path, force),
        Commands::Example => {
            print!("{}", config::EXAMPLE_CATALOG);
            Ok(())
        }
    }
}

fn list_options(config_path: Option<&Path>, format: OutputFormat) -> Result<()> {
    let catalog = config::load_catalog_or_builtin(config_path)?;
    print!("{}", render_catalog(&catalog, format)?);
    Ok(())
}

fn show_option(config_path: Option<&Path>, hours: i32, format: OutputFormat) -> Result<()> {
    let catalog = config::load_catalog_or_builtin(config_path)?;

    let option = catalog
        .find_by_hours(hours)
        .with_context(|| format!("No option with {} hours in catalog", hours))?;

    print!("{}", render_option(option, format)?);
    Ok(())
}

fn validate(config_path: Option<&Path>) -> Result<()> {
    let catalog = config::load_catalog_or_builtin(config_path)?;
    report_catalog(&catalog)
}

fn report_catalog(catalog: &OptionCatalog) -> Result<()> {
    validate_catalog(catalog)?;

    println!("✓ Catalog is valid ({} options)", catalog.len());
    if let Some(option) = catalog.default_option() {
        println!("  Default: {}", option.title());
    }

    Ok(())
}

fn init(config_path: Option<&Path>, force: bool) -> Result<()> {
    let path: PathBuf = match config_path {
        Some(path) => path.to_path_buf(),
        None => config::get_catalog_path()?,
    };

    if path.exists() && !force {
        anyhow::bail!(
            "Catalog file already exists: {} (use --force to overwrite)",
            path.display()
        );
    }

    let catalog = config::parse_catalog(config::EXAMPLE_CATALOG, config::CatalogFormat::Yaml)
        .context("Bundled example catalog is invalid")?;
    config::save_catalog(&path, &catalog)?;

    tracing::info!(path = %path.display(), "Catalog initialized");
    println!("✓ Catalog written to: {}", path.display());

    Ok(())
}

/// Render a whole catalog in the requested format
pub fn render_catalog(catalog: &OptionCatalog, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Text => {
            let default_hours = catalog.default_option().map(|o| o.hours());
            let width = catalog
                .iter()
                .map(|o| o.title().chars().count())
                .max()
                .unwrap_or(0);

            let mut out = String::new();
            out.push_str(&format!("Privacy Lock Options ({})\n", catalog.len()));
            out.push_str("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━\n");
            for option in catalog {
                let marker = if Some(option.hours()) == default_hours { '*' } else { ' ' };
                out.push_str(&format!(
                    "{} {:<width$}  {:>5}  {}\n",
                    marker,
                    option.title(),
                    format_duration(option.lock_duration()),
                    option.detail(),
                    width = width
                ));
            }
            Ok(out)
        }
        OutputFormat::Yaml => serde_yaml::to_string(catalog).context("Failed to serialize catalog"),
        OutputFormat::Json => {
            let mut json =
                serde_json::to_string_pretty(catalog).context("Failed to serialize catalog")?;
            json.push('\n');
            Ok(json)
        }
    }
}

/// Render a single option in the requested format
pub fn render_option(option: &PrivacyLockOption, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Text => Ok(format!(
            "Title:  {}\nDetail: {}\nHours:  {} ({})\n",
            option.title(),
            option.detail(),
            option.hours(),
            format_duration(option.lock_duration())
        )),
        OutputFormat::Yaml => serde_yaml::to_string(option).context("Failed to serialize option"),
        OutputFormat::Json => {
            let mut json =
                serde_json::to_string_pretty(option).context("Failed to serialize option")?;
            json.push('\n');
            Ok(json)
        }
    }
}
