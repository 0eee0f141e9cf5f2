//! Site configuration for adminkit.
//!
//! Parses `adminkit.toml` files with serde. The configuration covers the
//! static side of the chrome — site title, asset lists, meta tags, footer
//! text, and the unsupported-browser matcher. Per-request providers (menus,
//! breadcrumbs, sidebar sections) live on the `Namespace` in the views crate
//! because they hold code, not data.

use std::path::{Path, PathBuf};

use regex::Regex;
use serde::Deserialize;

/// Configuration error.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// File not found.
    #[error("Configuration file not found: {}", .0.display())]
    NotFound(PathBuf),
    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// TOML parsing error.
    #[error("TOML parse error: {0}")]
    Parse(#[from] toml::de::Error),
    /// Validation error.
    #[error("Configuration error: {0}")]
    Validation(String),
}

/// Application configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Site identity.
    pub site: SiteConfig,
    /// Stylesheet and script lists.
    pub assets: AssetsConfig,
    /// Meta tags emitted in the document head.
    #[serde(rename = "meta")]
    pub meta_tags: Vec<MetaTag>,
    /// Browser support configuration.
    browser: BrowserConfigRaw,

    /// Compiled browser matcher (set after loading).
    #[serde(skip)]
    pub browser_resolved: BrowserConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            site: SiteConfig::default(),
            assets: AssetsConfig::default(),
            meta_tags: Vec::new(),
            browser: BrowserConfigRaw::default(),
            browser_resolved: BrowserConfig::default(),
        }
    }
}

/// Site identity configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    /// Site title shown in the document title and header.
    pub title: String,
    /// Favicon href, if any.
    pub favicon: Option<String>,
    /// Footer text, if any.
    pub footer: Option<String>,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            title: "Administration".to_owned(),
            favicon: None,
            footer: None,
        }
    }
}

/// Stylesheet and script configuration.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct AssetsConfig {
    /// Stylesheets emitted as `<link rel="stylesheet">` tags, in order.
    pub stylesheets: Vec<Stylesheet>,
    /// Script srcs emitted as trailing `<script>` tags, in order.
    pub javascripts: Vec<String>,
}

/// A stylesheet link.
#[derive(Debug, Deserialize, PartialEq, Eq)]
pub struct Stylesheet {
    /// Stylesheet href.
    pub href: String,
    /// Optional media query (e.g., "print").
    #[serde(default)]
    pub media: Option<String>,
}

/// A document meta tag.
#[derive(Debug, Deserialize, PartialEq, Eq)]
pub struct MetaTag {
    /// Meta name.
    pub name: String,
    /// Meta content.
    pub content: String,
}

/// Raw browser configuration as parsed from TOML.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct BrowserConfigRaw {
    unsupported_matcher: Option<String>,
}

/// Resolved browser configuration with a compiled matcher.
#[derive(Debug, Default)]
pub struct BrowserConfig {
    /// Regex matched against the request user agent; a match triggers the
    /// unsupported-browser notice.
    pub unsupported_matcher: Option<Regex>,
}

impl BrowserConfig {
    /// True when the user agent matches the unsupported-browser pattern.
    #[must_use]
    pub fn is_unsupported(&self, user_agent: &str) -> bool {
        self.unsupported_matcher
            .as_ref()
            .is_some_and(|re| re.is_match(user_agent))
    }
}

/// Require a string field to be non-empty.
fn require_non_empty(value: &str, field: &str) -> Result<(), ConfigError> {
    if value.is_empty() {
        return Err(ConfigError::Validation(format!("{field} cannot be empty")));
    }
    Ok(())
}

impl Config {
    /// Load configuration from a file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file doesn't exist, can't be read or parsed,
    /// or fails validation.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Err(ConfigError::NotFound(path.to_path_buf()));
        }
        let content = std::fs::read_to_string(path)?;
        Self::parse(&content)
    }

    /// Parse configuration from a TOML string.
    ///
    /// # Errors
    ///
    /// Returns an error on parse or validation failure.
    pub fn parse(content: &str) -> Result<Self, ConfigError> {
        let mut config: Self = toml::from_str(content)?;
        config.compile_browser_matcher()?;
        config.validate()?;
        Ok(config)
    }

    /// Validate configuration values.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Validation` if any validation fails.
    pub fn validate(&self) -> Result<(), ConfigError> {
        require_non_empty(&self.site.title, "site.title")?;
        for stylesheet in &self.assets.stylesheets {
            require_non_empty(&stylesheet.href, "assets.stylesheets.href")?;
        }
        for script in &self.assets.javascripts {
            require_non_empty(script, "assets.javascripts")?;
        }
        for meta in &self.meta_tags {
            require_non_empty(&meta.name, "meta.name")?;
        }
        Ok(())
    }

    /// Compile the unsupported-browser pattern.
    fn compile_browser_matcher(&mut self) -> Result<(), ConfigError> {
        self.browser_resolved = match &self.browser.unsupported_matcher {
            Some(pattern) => {
                let re = Regex::new(pattern).map_err(|e| {
                    ConfigError::Validation(format!("browser.unsupported_matcher: {e}"))
                })?;
                BrowserConfig {
                    unsupported_matcher: Some(re),
                }
            }
            None => BrowserConfig::default(),
        };
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.site.title, "Administration");
        assert!(config.site.favicon.is_none());
        assert!(config.assets.stylesheets.is_empty());
        assert!(config.meta_tags.is_empty());
        assert!(config.browser_resolved.unsupported_matcher.is_none());
    }

    #[test]
    fn test_parse_minimal_config() {
        let config = Config::parse("").unwrap();
        assert_eq!(config.site.title, "Administration");
    }

    #[test]
    fn test_parse_site_section() {
        let toml = r#"
[site]
title = "Acme Backoffice"
favicon = "/assets/favicon.ico"
footer = "Acme Corp."
"#;
        let config = Config::parse(toml).unwrap();
        assert_eq!(config.site.title, "Acme Backoffice");
        assert_eq!(config.site.favicon.as_deref(), Some("/assets/favicon.ico"));
        assert_eq!(config.site.footer.as_deref(), Some("Acme Corp."));
    }

    #[test]
    fn test_parse_assets_section() {
        let toml = r#"
[assets]
javascripts = ["/assets/admin.js"]

[[assets.stylesheets]]
href = "/assets/admin.css"

[[assets.stylesheets]]
href = "/assets/print.css"
media = "print"
"#;
        let config = Config::parse(toml).unwrap();
        assert_eq!(config.assets.stylesheets.len(), 2);
        assert_eq!(config.assets.stylesheets[0].href, "/assets/admin.css");
        assert_eq!(config.assets.stylesheets[0].media, None);
        assert_eq!(config.assets.stylesheets[1].media.as_deref(), Some("print"));
        assert_eq!(config.assets.javascripts, vec!["/assets/admin.js".to_owned()]);
    }

    #[test]
    fn test_parse_meta_tags() {
        let toml = r#"
[[meta]]
name = "viewport"
content = "width=device-width, initial-scale=1"

[[meta]]
name = "robots"
content = "noindex"
"#;
        let config = Config::parse(toml).unwrap();
        assert_eq!(config.meta_tags.len(), 2);
        assert_eq!(config.meta_tags[0].name, "viewport");
        assert_eq!(config.meta_tags[1].content, "noindex");
    }

    #[test]
    fn test_browser_matcher_compiled() {
        let toml = r#"
[browser]
unsupported_matcher = "MSIE|Trident"
"#;
        let config = Config::parse(toml).unwrap();
        assert!(
            config
                .browser_resolved
                .is_unsupported("Mozilla/4.0 (compatible; MSIE 8.0)")
        );
        assert!(!config.browser_resolved.is_unsupported("Mozilla/5.0 Firefox/120.0"));
    }

    #[test]
    fn test_browser_matcher_invalid_pattern_fails() {
        let toml = r#"
[browser]
unsupported_matcher = "MSIE|("
"#;
        let err = Config::parse(toml).unwrap_err();
        assert!(matches!(err, ConfigError::Validation(_)));
        assert!(err.to_string().contains("unsupported_matcher"));
    }

    #[test]
    fn test_no_matcher_never_matches() {
        let config = Config::default();
        assert!(!config.browser_resolved.is_unsupported("anything"));
    }

    #[test]
    fn test_validate_empty_title_fails() {
        let toml = r#"
[site]
title = ""
"#;
        let err = Config::parse(toml).unwrap_err();
        assert!(matches!(err, ConfigError::Validation(_)));
        assert!(err.to_string().contains("site.title"));
    }

    #[test]
    fn test_validate_empty_stylesheet_href_fails() {
        let toml = r#"
[[assets.stylesheets]]
href = ""
"#;
        let err = Config::parse(toml).unwrap_err();
        assert!(err.to_string().contains("stylesheets"));
    }

    #[test]
    fn test_load_missing_file_returns_not_found() {
        let err = Config::load(Path::new("/nonexistent/adminkit.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::NotFound(_)));
    }

    #[test]
    fn test_load_reads_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("adminkit.toml");
        std::fs::write(&path, "[site]\ntitle = \"From File\"\n").unwrap();

        let config = Config::load(&path).unwrap();
        assert_eq!(config.site.title, "From File");
    }

    #[test]
    fn test_load_invalid_toml_returns_parse_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("adminkit.toml");
        std::fs::write(&path, "[site\n").unwrap();

        let err = Config::load(&path).unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }
}
