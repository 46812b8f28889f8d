//! Privacy lock timeout options
//!
//! [`PrivacyLockOption`] is the value type: a title, a detail line and a
//! timeout in whole hours. Around it sit option catalogs, catalog files and
//! the `privacy-lock` command line tool.

pub mod catalog;
pub mod cli;
pub mod commands;
pub mod config;
pub mod option;
pub mod storage;

pub use catalog::{validate_catalog, OptionCatalog};
pub use config::{load_catalog, save_catalog, CatalogFormat};
pub use option::PrivacyLockOption;
