use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use crate::option::PrivacyLockOption;

/// Ordered set of privacy lock options offered together
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct OptionCatalog {
    /// Hour count of the option preselected when nothing has been chosen
    #[serde(default, skip_serializing_if = "Option::is_none")]
    default_hours: Option<i32>,

    /// Options in display order
    options: Vec<PrivacyLockOption>,
}

impl OptionCatalog {
    /// Create a catalog with no default
    pub fn new(options: Vec<PrivacyLockOption>) -> Self {
        Self {
            default_hours: None,
            options,
        }
    }

    /// Set the hour count of the default option
    pub fn with_default_hours(mut self, hours: i32) -> Self {
        self.default_hours = Some(hours);
        self
    }

    /// The catalog shipped with the crate
    pub fn builtin() -> Self {
        Self::new(vec![
            PrivacyLockOption::new("1 Hour", "Lock the wallet after 1 hour of inactivity", 1),
            PrivacyLockOption::new("2 Hours", "Lock the wallet after 2 hours of inactivity", 2),
            PrivacyLockOption::new("6 Hours", "Lock the wallet after 6 hours of inactivity", 6),
            PrivacyLockOption::new("12 Hours", "Lock the wallet after 12 hours of inactivity", 12),
            PrivacyLockOption::new("24 Hours", "Lock the wallet after 24 hours of inactivity", 24),
            PrivacyLockOption::new("Never", "Do not lock the wallet automatically", 0),
        ])
        .with_default_hours(1)
    }

    pub fn options(&self) -> &[PrivacyLockOption] {
        &self.options
    }

    pub fn default_hours(&self) -> Option<i32> {
        self.default_hours
    }

    pub fn len(&self) -> usize {
        self.options.len()
    }

    pub fn is_empty(&self) -> bool {
        self.options.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, PrivacyLockOption> {
        self.options.iter()
    }

    /// First option with the given hour count
    pub fn find_by_hours(&self, hours: i32) -> Option<&PrivacyLockOption> {
        self.options.iter().find(|o| o.hours() == hours)
    }

    /// Index of the first option with the given hour count
    pub fn position_of(&self, hours: i32) -> Option<usize> {
        self.options.iter().position(|o| o.hours() == hours)
    }

    /// The default option, falling back to the first one
    pub fn default_option(&self) -> Option<&PrivacyLockOption> {
        self.default_hours
            .and_then(|hours| self.find_by_hours(hours))
            .or_else(|| self.options.first())
    }
}

impl Default for OptionCatalog {
    fn default() -> Self {
        Self::builtin()
    }
}

impl<'a> IntoIterator for &'a OptionCatalog {
    type Item = &'a PrivacyLockOption;
    type IntoIter = std::slice::Iter<'a, PrivacyLockOption>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Validate a catalog
///
/// Individual options are never rejected for their values; only the
/// catalog as a whole has to be usable for lookup by hours.
pub fn validate_catalog(catalog: &OptionCatalog) -> Result<()> {
    if catalog.is_empty() {
        anyhow::bail!("Catalog must contain at least one option");
    }

    let mut seen = HashSet::new();
    for option in catalog {
        if !seen.insert(option.hours()) {
            anyhow::bail!(
                "Duplicate hours value {} (option '{}')",
                option.hours(),
                option.title()
            );
        }

        if option.hours() < 0 {
            tracing::warn!(
                title = option.title(),
                hours = option.hours(),
                "Option has a negative hour count"
            );
        }
        if option.title().is_empty() {
            tracing::warn!(hours = option.hours(), "Option has an empty title");
        }
    }

    if let Some(hours) = catalog.default_hours() {
        if catalog.find_by_hours(hours).is_none() {
            anyhow::bail!("default_hours {} does not match any option", hours);
        }
    }

    Ok(())
}
