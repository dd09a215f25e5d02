//! Content tree scanning - turns a directory of markdown files into entries.

use crate::{
    frontmatter::{parse_front_matter, FrontMatterError, FrontMatterMap},
    markdown::MarkdownRenderer,
    models::{ContentEntry, Metadata, ROOT_DIRECTORY},
    templating::TemplateVars,
    titles::format_title,
};
use std::ffi::OsStr;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;
use walkdir::WalkDir;

#[derive(Error, Debug)]
pub enum ScanError {
    #[error("Failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid front matter in {path}: {source}")]
    FrontMatter {
        path: PathBuf,
        #[source]
        source: FrontMatterError,
    },
}

/// Walks a content root and builds entries for every markdown file
///
/// The walk is pre-order depth-first, sorted by file name, so the entry
/// order is deterministic for a given tree. A missing content root is a
/// valid fresh-project state and yields an empty scan; any unreadable
/// file or malformed front matter block aborts the whole scan.
pub struct Scanner {
    content_dir: PathBuf,
    vars: TemplateVars,
    renderer: MarkdownRenderer,
}

impl Scanner {
    pub fn new(content_dir: impl Into<PathBuf>, vars: TemplateVars) -> Self {
        Self {
            content_dir: content_dir.into(),
            vars,
            renderer: MarkdownRenderer::new(),
        }
    }

    pub fn content_dir(&self) -> &Path {
        &self.content_dir
    }

    /// Scan the content tree
    pub fn scan(&self) -> Result<Vec<ContentEntry>, ScanError> {
        if !self.content_dir.exists() {
            tracing::warn!(
                "Content directory {} does not exist, scanning nothing",
                self.content_dir.display()
            );
            return Ok(Vec::new());
        }

        let mut entries = Vec::new();

        for dir_entry in WalkDir::new(&self.content_dir).sort_by_file_name() {
            let dir_entry = dir_entry.map_err(|e| {
                let path = e
                    .path()
                    .unwrap_or(&self.content_dir)
                    .to_path_buf();
                ScanError::Io {
                    path,
                    source: e.into(),
                }
            })?;

            if !dir_entry.file_type().is_file() {
                continue;
            }
            if dir_entry.path().extension() != Some(OsStr::new("md")) {
                tracing::debug!("Skipping non-markdown file {}", dir_entry.path().display());
                continue;
            }

            entries.push(self.process_file(dir_entry.path())?);
        }

        tracing::info!("Scanned {} content files", entries.len());

        Ok(entries)
    }

    fn process_file(&self, path: &Path) -> Result<ContentEntry, ScanError> {
        let raw = fs::read_to_string(path).map_err(|source| ScanError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        let (fields, body) = parse_front_matter(&raw).map_err(|source| {
            ScanError::FrontMatter {
                path: path.to_path_buf(),
                source,
            }
        })?;

        let slug = path
            .file_stem()
            .and_then(|s| s.to_str())
            .unwrap_or_default()
            .to_string();

        let rel = path.strip_prefix(&self.content_dir).unwrap_or(path);
        let rel_path = path_to_slashes(rel);
        let rel_dir = rel
            .parent()
            .map(path_to_slashes)
            .unwrap_or_default();

        let (directory, url, main_directory, depth) = if rel_dir.is_empty() {
            (
                ROOT_DIRECTORY.to_string(),
                format!("/{slug}"),
                ROOT_DIRECTORY.to_string(),
                0,
            )
        } else {
            let main = rel_dir
                .split('/')
                .next()
                .unwrap_or(ROOT_DIRECTORY)
                .to_string();
            let depth = rel_dir.split('/').count();
            (rel_dir.clone(), format!("/{rel_dir}/{slug}"), main, depth)
        };

        let body = self.vars.substitute(&body);
        let content = self.renderer.render(&body, &directory);
        let metadata = self.build_metadata(&slug, fields);

        Ok(ContentEntry {
            slug,
            path: rel_path,
            url,
            directory,
            main_directory,
            depth,
            content,
            metadata,
        })
    }

    /// Apply substitution to string-valued fields and fill the defaults
    fn build_metadata(&self, slug: &str, fields: FrontMatterMap) -> Metadata {
        let mut extra: FrontMatterMap = fields
            .into_iter()
            .map(|(key, value)| match value {
                serde_yaml::Value::String(s) => {
                    (key, serde_yaml::Value::String(self.vars.substitute(&s)))
                }
                other => (key, other),
            })
            .collect();

        let title = extra
            .remove("title")
            .and_then(string_value)
            .filter(|t| !t.is_empty())
            .unwrap_or_else(|| format_title(slug));

        let description = extra
            .remove("description")
            .and_then(string_value)
            .unwrap_or_default();

        let date = extra.remove("date").and_then(string_value);
        let author = extra.remove("author").and_then(string_value);

        Metadata {
            title,
            description,
            date,
            author,
            extra,
        }
    }
}

fn string_value(value: serde_yaml::Value) -> Option<String> {
    match value {
        serde_yaml::Value::String(s) => Some(s),
        _ => None,
    }
}

fn path_to_slashes(path: &Path) -> String {
    path.components()
        .map(|c| c.as_os_str().to_string_lossy())
        .collect::<Vec<_>>()
        .join("/")
}
