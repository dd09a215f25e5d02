//! Template-variable substitution for `{{dotted.name}}` placeholders.

use crate::config::SiteConfig;
use chrono::{Datelike, Local, NaiveDate};
use regex::{Captures, Regex};
use std::collections::HashMap;
use std::sync::OnceLock;

static PLACEHOLDER_REGEX: OnceLock<Regex> = OnceLock::new();

fn placeholder_regex() -> &'static Regex {
    PLACEHOLDER_REGEX.get_or_init(|| Regex::new(r"\{\{([^{}]+)\}\}").unwrap())
}

/// Flattened variable map driving placeholder substitution
///
/// Keys come from [`SiteConfig::flatten`]; the `date.*` keys are computed
/// at substitution time. Unknown placeholders are left verbatim in the
/// output and logged, so a typo in a content file is visible rather than
/// silently erased.
#[derive(Debug, Clone, Default)]
pub struct TemplateVars {
    vars: HashMap<String, String>,
}

impl TemplateVars {
    pub fn new(vars: HashMap<String, String>) -> Self {
        Self { vars }
    }

    pub fn from_config(config: &SiteConfig) -> Self {
        Self::new(config.flatten())
    }

    /// Replace every `{{dotted.name}}` placeholder in `text`
    ///
    /// Single pass: produced values are not re-expanded.
    pub fn substitute(&self, text: &str) -> String {
        self.substitute_on(text, Local::now().date_naive())
    }

    fn substitute_on(&self, text: &str, today: NaiveDate) -> String {
        placeholder_regex()
            .replace_all(text, |caps: &Captures| {
                let key = caps[1].trim();
                if let Some(value) = self.vars.get(key) {
                    value.clone()
                } else if let Some(value) = date_var(key, today) {
                    value
                } else {
                    tracing::warn!("Unresolved template variable: {}", &caps[0]);
                    caps[0].to_string()
                }
            })
            .into_owned()
    }
}

fn date_var(key: &str, today: NaiveDate) -> Option<String> {
    match key {
        "date.now" => Some(today.format("%Y-%m-%d").to_string()),
        "date.year" => Some(today.year().to_string()),
        "date.month" => Some(format!("{:02}", today.month())),
        "date.day" => Some(format!("{:02}", today.day())),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn vars() -> TemplateVars {
        TemplateVars::new(HashMap::from([
            ("site.name".to_string(), "Acme".to_string()),
            ("contact.email".to_string(), "hi@acme.io".to_string()),
            ("nested.value".to_string(), "{{site.name}}".to_string()),
        ]))
    }

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 3, 7).unwrap()
    }

    #[test]
    fn test_known_variable() {
        let out = vars().substitute_on("Welcome to {{site.name}}!", today());
        assert_eq!(out, "Welcome to Acme!");
    }

    #[test]
    fn test_whitespace_trimmed() {
        let out = vars().substitute_on("{{ site.name }}", today());
        assert_eq!(out, "Acme");
    }

    #[test]
    fn test_unknown_variable_left_verbatim() {
        let out = vars().substitute_on("Hello {{unknown.key}}.", today());
        assert_eq!(out, "Hello {{unknown.key}}.");
    }

    #[test]
    fn test_multiple_occurrences() {
        let out = vars().substitute_on("{{site.name}} / {{contact.email}} / {{site.name}}", today());
        assert_eq!(out, "Acme / hi@acme.io / Acme");
    }

    #[test]
    fn test_date_variables() {
        let v = vars();
        assert_eq!(v.substitute_on("{{date.now}}", today()), "2025-03-07");
        assert_eq!(v.substitute_on("{{date.year}}", today()), "2025");
        assert_eq!(v.substitute_on("{{date.month}}", today()), "03");
        assert_eq!(v.substitute_on("{{date.day}}", today()), "07");
    }

    #[test]
    fn test_single_pass_no_reexpansion() {
        let out = vars().substitute_on("{{nested.value}}", today());
        assert_eq!(out, "{{site.name}}");
    }

    #[test]
    fn test_plain_text_untouched() {
        let text = "No placeholders, just { braces } and {{";
        assert_eq!(vars().substitute_on(text, today()), text);
    }
}
