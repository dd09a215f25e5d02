//! Build command implementation.

use anyhow::{Context, Result};
use fernpress_core::generator::{robots_txt, sitemap_xml};
use fernpress_core::{ContentEntry, SiteConfig};
use std::fs;
use std::path::Path;

/// Build the static site: one HTML file per entry plus sitemap and robots
pub fn build_site(config_path: &Path, dev_mode: bool) -> Result<()> {
    let (config, store) = super::open_store(config_path, dev_mode)?;

    tracing::info!("Building site: {}", config.site.name);

    let set = store.get().context("Failed to scan content")?;

    let output_dir = config.output_dir();
    fs::create_dir_all(&output_dir).context("Failed to create output directory")?;

    for entry in &set.entries {
        let target = output_dir.join(format!("{}.html", entry.url.trim_start_matches('/')));
        if let Some(parent) = target.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create {}", parent.display()))?;
        }
        fs::write(&target, page_html(&config, entry))
            .with_context(|| format!("Failed to write {}", target.display()))?;
    }

    fs::write(
        output_dir.join("sitemap.xml"),
        sitemap_xml(&config.site.url, &set),
    )
    .context("Failed to write sitemap.xml")?;
    fs::write(output_dir.join("robots.txt"), robots_txt(&config.site.url))
        .context("Failed to write robots.txt")?;

    tracing::info!(
        "Wrote {} pages to {}",
        set.len(),
        output_dir.display()
    );

    Ok(())
}

/// Remove the output directory
pub fn clean_output(config_path: &Path) -> Result<()> {
    let config = SiteConfig::from_file(config_path).context("Failed to load configuration")?;
    let output_dir = config.output_dir();

    if output_dir.exists() {
        fs::remove_dir_all(&output_dir)
            .with_context(|| format!("Failed to remove {}", output_dir.display()))?;
        tracing::info!("Removed {}", output_dir.display());
    } else {
        tracing::info!("Nothing to clean at {}", output_dir.display());
    }

    Ok(())
}

/// Minimal page shell around an entry
///
/// Real deployments replace this with their own template layer; the
/// pipeline's contract is the content model, not this markup.
fn page_html(config: &SiteConfig, entry: &ContentEntry) -> String {
    let title = if config.site.name.is_empty() {
        html_escape(&entry.metadata.title)
    } else {
        format!(
            "{} — {}",
            html_escape(&entry.metadata.title),
            html_escape(&config.site.name)
        )
    };

    let description = if entry.metadata.description.is_empty() {
        String::new()
    } else {
        format!(
            "    <meta name=\"description\" content=\"{}\">\n",
            html_escape(&entry.metadata.description)
        )
    };

    format!(
        "<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n    <meta charset=\"utf-8\">\n    <meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n    <title>{title}</title>\n{description}</head>\n<body>\n<main>\n    <h1>{heading}</h1>\n{content}</main>\n</body>\n</html>\n",
        title = title,
        description = description,
        heading = html_escape(&entry.metadata.title),
        content = entry.content,
    )
}

fn html_escape(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}
