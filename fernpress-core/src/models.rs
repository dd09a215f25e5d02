//! Content model structs for entries, directories, and sidebar trees.

use crate::titles::format_title;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Sentinel directory label for entries placed directly in the content root.
pub const ROOT_DIRECTORY: &str = "root";

/// Sidebar position for entries without an explicit `order` field.
pub const DEFAULT_ORDER: i64 = 999;

/// Metadata attached to a content entry
///
/// `title` is always non-empty (falls back to the formatted slug).
/// Front matter keys beyond the named ones are preserved verbatim in
/// `extra`, with template substitution already applied to string values.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct Metadata {
    pub title: String,

    #[serde(default)]
    pub description: String,

    #[serde(default)]
    pub date: Option<String>,

    #[serde(default)]
    pub author: Option<String>,

    #[serde(flatten)]
    pub extra: BTreeMap<String, serde_yaml::Value>,
}

impl Metadata {
    /// Sidebar ordering weight from the `order` front matter field
    pub fn order(&self) -> i64 {
        self.extra
            .get("order")
            .and_then(|v| v.as_i64())
            .unwrap_or(DEFAULT_ORDER)
    }
}

/// A single rendered markdown file
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContentEntry {
    /// Filename stem, unique within its directory
    pub slug: String,

    /// Original content-root-relative file path
    pub path: String,

    /// Site-absolute route, e.g. `/blog/my-post`
    pub url: String,

    /// Relative directory with forward slashes; `"root"` at the content root
    pub directory: String,

    /// First segment of `directory`, or `"root"`
    pub main_directory: String,

    /// Number of path segments in `directory` (0 at root)
    pub depth: usize,

    /// Rendered HTML body, first top-level heading dropped
    pub content: String,

    pub metadata: Metadata,
}

/// One immediate child directory of a content directory
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DirectoryDescriptor {
    pub name: String,
    pub path: String,
    pub title: String,
    pub url: String,
}

impl DirectoryDescriptor {
    fn new(name: &str, path: String) -> Self {
        Self {
            name: name.to_string(),
            title: format_title(name),
            url: format!("/{path}"),
            path,
        }
    }
}

/// A node in a sidebar navigation tree
///
/// Groups hold one level of children; the builder never nests them deeper.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SidebarNode {
    Group {
        title: String,
        children: Vec<SidebarNode>,
    },
    Leaf {
        title: String,
        url: String,
        order: i64,
    },
}

/// The materialized result of one content scan, in walk order
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct ContentSet {
    pub entries: Vec<ContentEntry>,
}

impl ContentSet {
    pub fn new(entries: Vec<ContentEntry>) -> Self {
        Self { entries }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Find an entry by site-absolute URL
    ///
    /// One trailing slash is trimmed from both the query and each entry's
    /// URL before comparison, so `/blog/post/` matches `/blog/post`.
    pub fn find_by_url(&self, url: &str) -> Option<&ContentEntry> {
        let needle = trim_trailing_slash(url);
        self.entries
            .iter()
            .find(|e| trim_trailing_slash(&e.url) == needle)
    }

    /// All entries in a directory, including its subdirectories
    ///
    /// `"root"` selects exactly the entries placed directly in the content
    /// root. Any other argument matches by equality or by directory-aware
    /// prefix, so `blog` covers `blog/news` but not `blog2`.
    pub fn in_directory(&self, directory: &str) -> Vec<&ContentEntry> {
        self.entries
            .iter()
            .filter(|e| directory_matches(&e.directory, directory))
            .collect()
    }

    /// Immediate child directories of the content root, in first-encounter order
    pub fn directories(&self) -> Vec<DirectoryDescriptor> {
        let mut seen: Vec<&str> = Vec::new();
        let mut result = Vec::new();
        for entry in &self.entries {
            let name = entry.main_directory.as_str();
            if name == ROOT_DIRECTORY || seen.contains(&name) {
                continue;
            }
            seen.push(name);
            result.push(DirectoryDescriptor::new(name, name.to_string()));
        }
        result
    }

    /// Distinct first-level subdirectories beneath `directory`
    ///
    /// Iteration order is first-encounter order within the scan, which is
    /// deterministic for a single run but not sorted.
    pub fn subdirectories(&self, directory: &str) -> Vec<DirectoryDescriptor> {
        let prefix = format!("{directory}/");
        let mut seen: Vec<&str> = Vec::new();
        let mut result = Vec::new();
        for entry in &self.entries {
            if entry.directory == ROOT_DIRECTORY {
                continue;
            }
            let Some(rest) = entry.directory.strip_prefix(&prefix) else {
                continue;
            };
            let Some(name) = rest.split('/').next().filter(|s| !s.is_empty()) else {
                continue;
            };
            if seen.contains(&name) {
                continue;
            }
            seen.push(name);
            result.push(DirectoryDescriptor::new(name, format!("{directory}/{name}")));
        }
        result
    }
}

fn trim_trailing_slash(url: &str) -> &str {
    url.strip_suffix('/').unwrap_or(url)
}

/// Directory-boundary-aware prefix match against an entry's directory field
pub(crate) fn directory_matches(entry_directory: &str, query: &str) -> bool {
    if query == ROOT_DIRECTORY {
        return entry_directory == ROOT_DIRECTORY;
    }
    entry_directory == query
        || (entry_directory.len() > query.len()
            && entry_directory.starts_with(query)
            && entry_directory.as_bytes()[query.len()] == b'/')
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(slug: &str, directory: &str) -> ContentEntry {
        let (url, main, depth) = if directory == ROOT_DIRECTORY {
            (format!("/{slug}"), ROOT_DIRECTORY.to_string(), 0)
        } else {
            let main = directory.split('/').next().unwrap().to_string();
            (
                format!("/{directory}/{slug}"),
                main,
                directory.split('/').count(),
            )
        };
        ContentEntry {
            slug: slug.to_string(),
            path: format!("{directory}/{slug}.md"),
            url,
            directory: directory.to_string(),
            main_directory: main,
            depth,
            content: String::new(),
            metadata: Metadata {
                title: format_title(slug),
                ..Metadata::default()
            },
        }
    }

    fn sample_set() -> ContentSet {
        ContentSet::new(vec![
            entry("index", ROOT_DIRECTORY),
            entry("first-post", "blog"),
            entry("breaking", "blog/news"),
            entry("other", "blog2"),
            entry("setup", "docs"),
        ])
    }

    #[test]
    fn test_find_by_url() {
        let set = sample_set();
        assert_eq!(set.find_by_url("/blog/first-post").unwrap().slug, "first-post");
        assert_eq!(set.find_by_url("/blog/first-post/").unwrap().slug, "first-post");
        assert!(set.find_by_url("/blog/missing").is_none());
    }

    #[test]
    fn test_in_directory_prefix_rule() {
        let set = sample_set();
        let slugs: Vec<_> = set.in_directory("blog").iter().map(|e| &e.slug).collect();
        assert_eq!(slugs, vec!["first-post", "breaking"]);
    }

    #[test]
    fn test_in_directory_does_not_match_sibling_prefix() {
        let set = sample_set();
        assert!(set
            .in_directory("blog")
            .iter()
            .all(|e| e.directory != "blog2"));
    }

    #[test]
    fn test_in_directory_root_sentinel() {
        let set = sample_set();
        let slugs: Vec<_> = set
            .in_directory(ROOT_DIRECTORY)
            .iter()
            .map(|e| &e.slug)
            .collect();
        assert_eq!(slugs, vec!["index"]);
    }

    #[test]
    fn test_directories_first_encounter_order() {
        let set = sample_set();
        let names: Vec<_> = set.directories().into_iter().map(|d| d.name).collect();
        assert_eq!(names, vec!["blog", "blog2", "docs"]);
    }

    #[test]
    fn test_directory_descriptor_shape() {
        let set = sample_set();
        let blog = &set.directories()[0];
        assert_eq!(blog.name, "blog");
        assert_eq!(blog.path, "blog");
        assert_eq!(blog.title, "Blog");
        assert_eq!(blog.url, "/blog");
    }

    #[test]
    fn test_subdirectories() {
        let set = sample_set();
        let subs = set.subdirectories("blog");
        assert_eq!(subs.len(), 1);
        assert_eq!(subs[0].name, "news");
        assert_eq!(subs[0].path, "blog/news");
        assert_eq!(subs[0].url, "/blog/news");
        assert_eq!(subs[0].title, "News");
    }

    #[test]
    fn test_subdirectories_none() {
        let set = sample_set();
        assert!(set.subdirectories("docs").is_empty());
    }

    #[test]
    fn test_metadata_order_default() {
        let mut metadata = Metadata::default();
        assert_eq!(metadata.order(), DEFAULT_ORDER);

        metadata
            .extra
            .insert("order".to_string(), serde_yaml::Value::from(2));
        assert_eq!(metadata.order(), 2);
    }
}
