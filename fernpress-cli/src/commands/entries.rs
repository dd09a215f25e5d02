//! Content model export for external template layers.

use anyhow::{Context, Result};
use std::path::Path;

/// Print the scanned content model as pretty JSON
pub fn print_entries(config_path: &Path, directory: Option<&str>) -> Result<()> {
    let (_, store) = super::open_store(config_path, false)?;
    let set = store.get().context("Failed to scan content")?;

    let json = match directory {
        Some(dir) => serde_json::to_string_pretty(&set.in_directory(dir))?,
        None => serde_json::to_string_pretty(&set.entries)?,
    };

    println!("{json}");

    Ok(())
}
