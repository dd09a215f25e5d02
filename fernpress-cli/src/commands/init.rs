//! Project scaffolding.

use anyhow::{bail, Context, Result};
use std::fs;
use std::path::Path;

const CONFIG_TEMPLATE: &str = r#"site:
  name: My Site
  description: A site built with fernpress
  url: https://example.com
  author: Your Name

paths:
  content: content
  output: dist
"#;

const STARTER_PAGE: &str = r#"---
title: Welcome
order: 1
---

# Welcome

This site is built with fernpress. Edit `content/index.md` to get
started, then run `fernpress build`.

Today is {{date.now}}.
"#;

/// Create a fernpress.yml and a starter content directory
pub fn init_project(path: Option<&Path>) -> Result<()> {
    let root = path.unwrap_or(Path::new("."));
    let config_path = root.join("fernpress.yml");

    if config_path.exists() {
        bail!("{} already exists", config_path.display());
    }

    fs::create_dir_all(root)
        .with_context(|| format!("Failed to create {}", root.display()))?;
    fs::write(&config_path, CONFIG_TEMPLATE)
        .with_context(|| format!("Failed to write {}", config_path.display()))?;

    let content_dir = root.join("content");
    fs::create_dir_all(&content_dir)
        .with_context(|| format!("Failed to create {}", content_dir.display()))?;
    fs::write(content_dir.join("index.md"), STARTER_PAGE)
        .context("Failed to write starter page")?;

    tracing::info!("Initialized fernpress project in {}", root.display());

    Ok(())
}
