use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

use crate::catalog::{validate_catalog, OptionCatalog};

/// File name of the per-user catalog
const CATALOG_FILE_NAME: &str = "options.yaml";

/// On-disk format of a catalog file
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CatalogFormat {
    Yaml,
    Toml,
}

impl CatalogFormat {
    /// Pick the format from the file extension (`.toml`, otherwise YAML)
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|e| e.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("toml") => Self::Toml,
            _ => Self::Yaml,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Yaml => "YAML",
            Self::Toml => "TOML",
        }
    }
}

/// Get the per-user catalog file path
pub fn get_catalog_path() -> Result<PathBuf> {
    let dirs = directories::ProjectDirs::from("", "", "privacy-lock")
        .context("Could not determine configuration directory")?;

    Ok(dirs.config_dir().join(CATALOG_FILE_NAME))
}

/// Parse catalog text in the given format and validate it
pub fn parse_catalog(content: &str, format: CatalogFormat) -> Result<OptionCatalog> {
    let catalog: OptionCatalog = match format {
        CatalogFormat::Yaml => serde_yaml::from_str(content)?,
        CatalogFormat::Toml => toml::from_str(content)?,
    };

    validate_catalog(&catalog)?;

    Ok(catalog)
}

/// Load a catalog file
pub fn load_catalog(path: &Path) -> Result<OptionCatalog> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read catalog file: {}", path.display()))?;

    let format = CatalogFormat::from_path(path);
    let catalog = parse_catalog(&content, format).with_context(|| {
        format!(
            "Failed to load {} catalog file: {}",
            format.name(),
            path.display()
        )
    })?;

    tracing::debug!(path = %path.display(), options = catalog.len(), "Catalog loaded");

    Ok(catalog)
}

/// Save a catalog file in the format implied by its extension
pub fn save_catalog(path: &Path, catalog: &OptionCatalog) -> Result<()> {
    validate_catalog(catalog).context("Refusing to save invalid catalog")?;

    let content = match CatalogFormat::from_path(path) {
        CatalogFormat::Yaml => {
            serde_yaml::to_string(catalog).context("Failed to serialize catalog to YAML")?
        }
        CatalogFormat::Toml => {
            toml::to_string_pretty(catalog).context("Failed to serialize catalog to TOML")?
        }
    };

    crate::storage::atomic_write(path, content.as_bytes())
        .with_context(|| format!("Failed to write catalog file: {}", path.display()))?;

    Ok(())
}

/// Load the catalog to use
///
/// An explicit path must load. Without one, the per-user catalog is used
/// when it exists, otherwise the built-in catalog.
pub fn load_catalog_or_builtin(path: Option<&Path>) -> Result<OptionCatalog> {
    if let Some(path) = path {
        return load_catalog(path);
    }

    load_default_catalog(&get_catalog_path()?)
}

/// Load the catalog at the default path, or the built-in one if it is missing
pub fn load_default_catalog(default_path: &Path) -> Result<OptionCatalog> {
    if default_path.exists() {
        return load_catalog(default_path);
    }

    tracing::debug!(
        path = %default_path.display(),
        "No catalog file found, using built-in catalog"
    );
    Ok(OptionCatalog::builtin())
}

/// Example catalog file content
pub const EXAMPLE_CATALOG: &str = include_str!("../example-privacy-lock-options.yaml");
