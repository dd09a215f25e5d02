//! Site configuration parsing and the flattened template-variable view.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Read(#[from] std::io::Error),

    #[error("Failed to parse YAML: {0}")]
    Parse(#[from] serde_yaml::Error),
}

/// Main configuration struct matching the fernpress.yml schema
///
/// Every field is defaulted so a minimal config file (or none at all in
/// tests) still produces a usable value.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct SiteConfig {
    pub site: SiteSection,
    pub contact: ContactSection,
    pub social: SocialSection,
    pub legal: LegalSection,
    pub paths: PathsSection,

    // Internal: path to config file (for relative path resolution)
    #[serde(skip)]
    config_path: Option<PathBuf>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct SiteSection {
    pub name: String,
    pub description: String,
    pub url: String,
    pub author: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default, rename_all = "camelCase")]
pub struct ContactSection {
    pub email: String,
    pub privacy_email: String,
    pub support_email: String,
    pub phone: String,
    pub address: AddressSection,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default, rename_all = "camelCase")]
pub struct AddressSection {
    pub street: String,
    pub city: String,
    pub state: String,
    pub zip_code: String,
    pub country: String,
}

impl AddressSection {
    /// Single-line postal form, skipping parts the config leaves empty
    fn full(&self) -> String {
        let state_zip = [self.state.as_str(), self.zip_code.as_str()]
            .iter()
            .filter(|s| !s.is_empty())
            .copied()
            .collect::<Vec<_>>()
            .join(" ");

        [
            self.street.as_str(),
            self.city.as_str(),
            state_zip.as_str(),
            self.country.as_str(),
        ]
        .iter()
        .filter(|s| !s.is_empty())
        .copied()
        .collect::<Vec<_>>()
        .join(", ")
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct SocialSection {
    pub twitter: String,
    pub github: String,
    pub linkedin: String,
    pub facebook: String,
    pub instagram: String,
    pub youtube: String,
    pub discord: String,
    pub reddit: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default, rename_all = "camelCase")]
pub struct LegalSection {
    pub privacy_policy_last_updated: String,
    pub terms_last_updated: String,
    pub do_not_sell: DoNotSellSection,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default, rename_all = "camelCase")]
pub struct DoNotSellSection {
    pub processing_time: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PathsSection {
    pub content: PathBuf,
    pub output: PathBuf,
}

impl Default for PathsSection {
    fn default() -> Self {
        Self {
            content: PathBuf::from("content"),
            output: PathBuf::from("dist"),
        }
    }
}

impl SiteConfig {
    /// Load configuration from a YAML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path)?;
        let mut config: SiteConfig = serde_yaml::from_str(&contents)?;

        // Store config file path for relative path resolution
        config.config_path = Some(path.to_path_buf());

        Ok(config)
    }

    /// Get the content directory, resolved relative to the config file
    pub fn content_dir(&self) -> PathBuf {
        self.resolve_path(&self.paths.content)
    }

    /// Get the output directory, resolved relative to the config file
    pub fn output_dir(&self) -> PathBuf {
        self.resolve_path(&self.paths.output)
    }

    fn resolve_path(&self, path: &Path) -> PathBuf {
        if path.is_absolute() {
            path.to_path_buf()
        } else if let Some(parent) = self.config_path.as_ref().and_then(|p| p.parent()) {
            parent.join(path)
        } else {
            path.to_path_buf()
        }
    }

    /// Flatten the configuration into a dotted key → string value map
    ///
    /// Nested sections become `site.name`, `contact.address.city`, and so
    /// on, using the serialized (camelCase) field names so keys match the
    /// YAML schema. Adds the composed `contact.address.full`.
    pub fn flatten(&self) -> HashMap<String, String> {
        let mut vars = HashMap::new();
        if let Ok(value) = serde_yaml::to_value(self) {
            flatten_value(&value, String::new(), &mut vars);
        }
        vars.insert("contact.address.full".to_string(), self.contact.address.full());
        vars
    }
}

fn flatten_value(value: &serde_yaml::Value, prefix: String, out: &mut HashMap<String, String>) {
    match value {
        serde_yaml::Value::Mapping(map) => {
            for (key, child) in map {
                let Some(key) = key.as_str() else { continue };
                let path = if prefix.is_empty() {
                    key.to_string()
                } else {
                    format!("{prefix}.{key}")
                };
                flatten_value(child, path, out);
            }
        }
        serde_yaml::Value::String(s) => {
            out.insert(prefix, s.clone());
        }
        serde_yaml::Value::Number(n) => {
            out.insert(prefix, n.to_string());
        }
        serde_yaml::Value::Bool(b) => {
            out.insert(prefix, b.to_string());
        }
        // Nulls and sequences have no single string form; lookups miss
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_config() -> SiteConfig {
        let yaml = r#"
site:
  name: Acme
  description: Example site
  url: https://example.com
  author: Jordan
contact:
  email: hello@example.com
  privacyEmail: privacy@example.com
  address:
    street: 1 Main St
    city: Springfield
    state: IL
    zipCode: "62701"
    country: USA
social:
  github: https://github.com/acme
legal:
  privacyPolicyLastUpdated: 2025-06-01
  doNotSell:
    processingTime: 30 days
"#;
        serde_yaml::from_str(yaml).unwrap()
    }

    #[test]
    fn test_defaults() {
        let config = SiteConfig::default();
        assert_eq!(config.paths.content, PathBuf::from("content"));
        assert_eq!(config.paths.output, PathBuf::from("dist"));
        assert_eq!(config.site.name, "");
    }

    #[test]
    fn test_camel_case_schema() {
        let config = sample_config();
        assert_eq!(config.contact.privacy_email, "privacy@example.com");
        assert_eq!(config.contact.address.zip_code, "62701");
        assert_eq!(config.legal.do_not_sell.processing_time, "30 days");
    }

    #[test]
    fn test_flatten_nested_keys() {
        let vars = sample_config().flatten();
        assert_eq!(vars["site.name"], "Acme");
        assert_eq!(vars["contact.address.city"], "Springfield");
        assert_eq!(vars["social.github"], "https://github.com/acme");
        assert_eq!(vars["legal.doNotSell.processingTime"], "30 days");
    }

    #[test]
    fn test_flatten_composed_address() {
        let vars = sample_config().flatten();
        assert_eq!(
            vars["contact.address.full"],
            "1 Main St, Springfield, IL 62701, USA"
        );
    }

    #[test]
    fn test_flatten_partial_address() {
        let config = SiteConfig::default();
        let vars = config.flatten();
        assert_eq!(vars["contact.address.full"], "");
    }

    #[test]
    fn test_paths_resolve_relative_to_config() {
        let mut config = SiteConfig::default();
        config.config_path = Some(PathBuf::from("/srv/site/fernpress.yml"));
        assert_eq!(config.content_dir(), PathBuf::from("/srv/site/content"));
        assert_eq!(config.output_dir(), PathBuf::from("/srv/site/dist"));
    }
}
