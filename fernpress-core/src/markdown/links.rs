//! Link rewriting: relative markdown links become site-absolute routes.

use crate::models::ROOT_DIRECTORY;
use pulldown_cmark::{CowStr, Event, Tag};
use regex::Regex;
use std::sync::OnceLock;

static SCHEME_REGEX: OnceLock<Regex> = OnceLock::new();

fn scheme_regex() -> &'static Regex {
    SCHEME_REGEX.get_or_init(|| Regex::new(r"^[A-Za-z][A-Za-z0-9+.\-]*:").unwrap())
}

/// Rewrites link destinations relative to a bound content directory
///
/// Link titles and text are left untouched; anchor tag output stays with
/// pulldown-cmark's HTML renderer.
pub struct LinkRewriter {
    directory: String,
}

impl LinkRewriter {
    /// Bind a rewriter to the directory of the file being rendered
    ///
    /// Accepts either the relative directory path or the `root` sentinel.
    pub fn new(directory: &str) -> Self {
        let directory = if directory == ROOT_DIRECTORY {
            String::new()
        } else {
            directory.trim_matches('/').to_string()
        };
        Self { directory }
    }

    /// Transform events, rewriting every link destination
    pub fn transform<'a>(&self, events: Vec<Event<'a>>) -> Vec<Event<'a>> {
        events
            .into_iter()
            .map(|event| match event {
                Event::Start(Tag::Link {
                    link_type,
                    dest_url,
                    title,
                    id,
                }) => {
                    let rewritten = self.rewrite_href(&dest_url);
                    Event::Start(Tag::Link {
                        link_type,
                        dest_url: CowStr::Boxed(rewritten.into_boxed_str()),
                        title,
                        id,
                    })
                }
                other => other,
            })
            .collect()
    }

    /// Resolve a single href to a site-absolute route
    ///
    /// External, fragment-only, and empty hrefs pass through unchanged. A
    /// trailing `.md` extension is dropped, then relative paths resolve
    /// against the bound directory.
    pub fn rewrite_href(&self, href: &str) -> String {
        if href.is_empty() || href.starts_with('#') || scheme_regex().is_match(href) {
            return href.to_string();
        }

        let href = href.strip_suffix(".md").unwrap_or(href);

        if href.starts_with('/') {
            return href.to_string();
        }

        // `./`, `../`, and bare names all resolve against the current
        // directory; normalization clamps `..` at the site root.
        self.resolve(href)
    }

    fn resolve(&self, href: &str) -> String {
        let href = href.replace('\\', "/");
        let mut segments: Vec<&str> = self
            .directory
            .split('/')
            .filter(|s| !s.is_empty())
            .collect();

        for segment in href.split('/') {
            match segment {
                "" | "." => {}
                ".." => {
                    segments.pop();
                }
                s => segments.push(s),
            }
        }

        format!("/{}", segments.join("/"))
    }
}
