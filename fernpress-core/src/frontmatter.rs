//! Front matter parsing from markdown files.

use regex::Regex;
use std::collections::BTreeMap;
use std::sync::OnceLock;
use thiserror::Error;

/// Raw front matter fields in file order-independent form. Values keep
/// their YAML types; the scanner decides how to interpret them.
pub type FrontMatterMap = BTreeMap<String, serde_yaml::Value>;

#[derive(Error, Debug)]
pub enum FrontMatterError {
    #[error("Invalid YAML: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

static FRONT_MATTER_REGEX: OnceLock<Regex> = OnceLock::new();

fn front_matter_regex() -> &'static Regex {
    FRONT_MATTER_REGEX.get_or_init(|| Regex::new(r"(?s)^---\s*\n(.*?)\n---\s*\n?(.*)$").unwrap())
}

/// Split a markdown file into its front matter block and body
///
/// Returns a tuple of (fields, markdown_body). A file without a leading
/// `---` fence yields an empty field map and the whole content as body.
/// A fenced block that is not valid YAML is an error; the scan treats
/// that as fatal.
///
/// # Example
///
/// ```
/// use fernpress_core::frontmatter::parse_front_matter;
///
/// let content = "---\ntitle: My Post\norder: 2\n---\n# Hello\n";
///
/// let (fields, body) = parse_front_matter(content).unwrap();
/// assert_eq!(fields["title"].as_str(), Some("My Post"));
/// assert_eq!(fields["order"].as_i64(), Some(2));
/// assert!(body.trim().starts_with("# Hello"));
/// ```
pub fn parse_front_matter(content: &str) -> Result<(FrontMatterMap, String), FrontMatterError> {
    let re = front_matter_regex();

    if let Some(captures) = re.captures(content) {
        let yaml = captures.get(1).map(|m| m.as_str()).unwrap_or("");
        let body = captures.get(2).map(|m| m.as_str()).unwrap_or("");

        let fields: FrontMatterMap = if yaml.trim().is_empty() {
            FrontMatterMap::new()
        } else {
            serde_yaml::from_str(yaml)?
        };

        Ok((fields, body.to_string()))
    } else {
        Ok((FrontMatterMap::new(), content.to_string()))
    }
}
