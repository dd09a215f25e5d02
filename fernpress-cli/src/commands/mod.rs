//! Command implementations.

mod build;
mod entries;
mod init;

pub use build::{build_site, clean_output};
pub use entries::print_entries;
pub use init::init_project;

use anyhow::{Context, Result};
use fernpress_core::{ContentStore, Scanner, SiteConfig, TemplateVars};
use std::path::Path;

/// Load the config and wire up a content store around it
fn open_store(config_path: &Path, dev_mode: bool) -> Result<(SiteConfig, ContentStore)> {
    tracing::info!("Loading config from {:?}", config_path);
    let config = SiteConfig::from_file(config_path).context("Failed to load configuration")?;

    let vars = TemplateVars::from_config(&config);
    let scanner = Scanner::new(config.content_dir(), vars);
    let store = ContentStore::new(scanner, dev_mode);

    Ok((config, store))
}
