//! Configuration management for docpane.
//!
//! Parses `docpane.toml` configuration files with serde and provides
//! auto-discovery of config files in parent directories. Every section and
//! field is optional; missing values fall back to the defaults below.
//!
//! ```toml
//! [layout]
//! breakpoint = 1240
//! sidebar_width = 340
//! narrow_sidebar_width = 278
//! collapsed_sidebar_width = 50
//! page_tools_width = 320
//!
//! [navigation]
//! style_guide_patterns = ["/docs/style-guide", "/docs/agile-handbook"]
//!
//! [search]
//! placeholder_key = "home.search.placeholder"
//!
//! [page]
//! page_type = "Template/DocPage"
//! issue_labels = ["feedback", "feedback-issue"]
//! related_resources_limit = 3
//! ```

use std::path::{Path, PathBuf};

use regex::Regex;
use serde::Deserialize;

/// Configuration filename to search for.
const CONFIG_FILENAME: &str = "docpane.toml";

/// Application configuration.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Responsive layout configuration.
    pub layout: LayoutConfig,
    /// Sidebar navigation configuration.
    pub navigation: NavigationConfig,
    /// Sidebar search box configuration.
    pub search: SearchConfig,
    /// Page composition configuration.
    pub page: PageConfig,

    /// Path to the config file (set after loading).
    #[serde(skip)]
    pub config_path: Option<PathBuf>,
}

/// Breakpoint and panel widths, in CSS pixels.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct LayoutConfig {
    /// Viewport width at or below which the layout is narrow.
    pub breakpoint: u32,
    /// Expanded sidebar width on wide viewports.
    pub sidebar_width: u32,
    /// Expanded sidebar width on narrow viewports.
    pub narrow_sidebar_width: u32,
    /// Collapsed sidebar width.
    pub collapsed_sidebar_width: u32,
    /// Page tools rail width on wide viewports.
    pub page_tools_width: u32,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            breakpoint: 1240,
            sidebar_width: 340,
            narrow_sidebar_width: 278,
            collapsed_sidebar_width: 50,
            page_tools_width: 320,
        }
    }
}

/// Sidebar navigation configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct NavigationConfig {
    /// Path patterns (regular expressions) that switch the sidebar to the
    /// style guide navigation tree.
    pub style_guide_patterns: Vec<String>,
}

impl Default for NavigationConfig {
    fn default() -> Self {
        Self {
            style_guide_patterns: vec![
                "/docs/style-guide".to_owned(),
                "/docs/agile-handbook".to_owned(),
            ],
        }
    }
}

impl NavigationConfig {
    /// Compile the style guide patterns.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Pattern` for the first invalid pattern.
    pub fn compile_patterns(&self) -> Result<Vec<Regex>, ConfigError> {
        self.style_guide_patterns
            .iter()
            .map(|pattern| {
                Regex::new(pattern).map_err(|source| ConfigError::Pattern {
                    pattern: pattern.clone(),
                    source,
                })
            })
            .collect()
    }
}

/// Sidebar search box configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    /// Localization key for the search box placeholder.
    pub placeholder_key: String,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            placeholder_key: "home.search.placeholder".to_owned(),
        }
    }
}

/// Page composition configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct PageConfig {
    /// Page type reported to telemetry on render.
    pub page_type: String,
    /// Labels attached to issues opened from the contributing links.
    pub issue_labels: Vec<String>,
    /// Maximum number of related resources shown.
    pub related_resources_limit: usize,
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            page_type: "Template/DocPage".to_owned(),
            issue_labels: vec!["feedback".to_owned(), "feedback-issue".to_owned()],
            related_resources_limit: 3,
        }
    }
}

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
    /// Invalid navigation pattern.
    #[error("Invalid navigation pattern {pattern:?}: {source}")]
    Pattern {
        /// Pattern as written in the config file.
        pattern: String,
        /// Regex compilation error.
        #[source]
        source: regex::Error,
    },
}

/// Require a width to be positive.
fn require_positive(value: u32, field: &str) -> Result<(), ConfigError> {
    if value == 0 {
        return Err(ConfigError::Validation(format!(
            "{field} must be greater than 0"
        )));
    }
    Ok(())
}

/// Require a string field to be non-empty.
fn require_non_empty(value: &str, field: &str) -> Result<(), ConfigError> {
    if value.is_empty() {
        return Err(ConfigError::Validation(format!("{field} cannot be empty")));
    }
    Ok(())
}

impl Config {
    /// Load configuration.
    ///
    /// If `config_path` is provided, loads from that file. Otherwise, searches
    /// for `docpane.toml` in the current directory and its parents, and falls
    /// back to defaults when none is found.
    ///
    /// # Errors
    ///
    /// Returns error if explicit `config_path` doesn't exist, or if parsing
    /// or validation fails.
    pub fn load(config_path: Option<&Path>) -> Result<Self, ConfigError> {
        if let Some(path) = config_path {
            if !path.exists() {
                return Err(ConfigError::NotFound(path.to_path_buf()));
            }
            return Self::load_from_file(path);
        }

        match Self::discover_config() {
            Some(discovered) => Self::load_from_file(&discovered),
            None => {
                tracing::debug!("No {CONFIG_FILENAME} found, using defaults");
                Ok(Self::default())
            }
        }
    }

    /// Search for config file in current directory and parents.
    fn discover_config() -> Option<PathBuf> {
        let mut current = std::env::current_dir().ok()?;
        loop {
            let candidate = current.join(CONFIG_FILENAME);
            if candidate.exists() {
                return Some(candidate);
            }
            if !current.pop() {
                return None;
            }
        }
    }

    /// Load configuration from a specific file.
    fn load_from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let mut config: Self = toml::from_str(&content)?;
        config.config_path = Some(path.to_path_buf());

        config.validate()?;

        tracing::debug!(path = %path.display(), "Loaded configuration");
        Ok(config)
    }

    /// Validate configuration values.
    ///
    /// Called automatically after loading from file.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Validation` or `ConfigError::Pattern` if any
    /// check fails.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.validate_layout()?;
        self.navigation.compile_patterns()?;
        self.validate_page()?;
        Ok(())
    }

    /// Validate layout widths.
    fn validate_layout(&self) -> Result<(), ConfigError> {
        let layout = &self.layout;
        require_positive(layout.breakpoint, "layout.breakpoint")?;
        require_positive(layout.sidebar_width, "layout.sidebar_width")?;
        require_positive(layout.narrow_sidebar_width, "layout.narrow_sidebar_width")?;
        require_positive(
            layout.collapsed_sidebar_width,
            "layout.collapsed_sidebar_width",
        )?;
        require_positive(layout.page_tools_width, "layout.page_tools_width")?;

        // A collapsed sidebar must actually be narrower than an expanded one
        if layout.collapsed_sidebar_width >= layout.narrow_sidebar_width {
            return Err(ConfigError::Validation(
                "layout.collapsed_sidebar_width must be less than layout.narrow_sidebar_width"
                    .to_owned(),
            ));
        }

        Ok(())
    }

    /// Validate page composition settings.
    fn validate_page(&self) -> Result<(), ConfigError> {
        require_non_empty(&self.page.page_type, "page.page_type")?;
        for label in &self.page.issue_labels {
            require_non_empty(label, "page.issue_labels")?;
        }
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
        assert_eq!(config.layout.breakpoint, 1240);
        assert_eq!(config.layout.sidebar_width, 340);
        assert_eq!(config.layout.narrow_sidebar_width, 278);
        assert_eq!(config.layout.collapsed_sidebar_width, 50);
        assert_eq!(config.layout.page_tools_width, 320);
        assert_eq!(config.search.placeholder_key, "home.search.placeholder");
        assert_eq!(config.page.page_type, "Template/DocPage");
        assert_eq!(config.page.issue_labels, vec!["feedback", "feedback-issue"]);
        assert_eq!(config.page.related_resources_limit, 3);
        assert!(config.config_path.is_none());
    }

    #[test]
    fn test_parse_minimal_config() {
        let config: Config = toml::from_str("").unwrap();
        assert_eq!(config.layout.breakpoint, 1240);
        assert_eq!(config.navigation.style_guide_patterns.len(), 2);
    }

    #[test]
    fn test_parse_layout_config() {
        let toml = r"
[layout]
breakpoint = 1024
collapsed_sidebar_width = 40
";
        let config: Config = toml::from_str(toml).unwrap();
        assert_eq!(config.layout.breakpoint, 1024);
        assert_eq!(config.layout.collapsed_sidebar_width, 40);
        assert_eq!(config.layout.sidebar_width, 340);
    }

    #[test]
    fn test_parse_page_config() {
        let toml = r#"
[page]
page_type = "Template/Tutorial"
issue_labels = ["docs"]
related_resources_limit = 5
"#;
        let config: Config = toml::from_str(toml).unwrap();
        assert_eq!(config.page.page_type, "Template/Tutorial");
        assert_eq!(config.page.issue_labels, vec!["docs"]);
        assert_eq!(config.page.related_resources_limit, 5);
    }

    #[test]
    fn test_compile_patterns() {
        let config = Config::default();
        let patterns = config.navigation.compile_patterns().unwrap();
        assert!(patterns[0].is_match("/docs/style-guide/voice"));
        assert!(!patterns[0].is_match("/docs/apm"));
    }

    fn assert_validation_error(config: &Config, expected: &str) {
        let err = config.validate().unwrap_err();
        let message = err.to_string();
        assert!(
            message.contains(expected),
            "expected {expected:?} in {message:?}"
        );
    }

    #[test]
    fn test_validate_default_config_passes() {
        assert!(Config::default().validate().is_ok());
    }

    #[test]
    fn test_validate_zero_breakpoint() {
        let mut config = Config::default();
        config.layout.breakpoint = 0;
        assert_validation_error(&config, "layout.breakpoint must be greater than 0");
    }

    #[test]
    fn test_validate_collapsed_wider_than_expanded() {
        let mut config = Config::default();
        config.layout.collapsed_sidebar_width = 300;
        assert_validation_error(&config, "layout.collapsed_sidebar_width must be less than");
    }

    #[test]
    fn test_validate_invalid_pattern() {
        let mut config = Config::default();
        config.navigation.style_guide_patterns = vec!["/docs/(unclosed".to_owned()];
        let err = config.validate().unwrap_err();
        assert!(matches!(err, ConfigError::Pattern { ref pattern, .. } if pattern == "/docs/(unclosed"));
    }

    #[test]
    fn test_validate_empty_page_type() {
        let mut config = Config::default();
        config.page.page_type = String::new();
        assert_validation_error(&config, "page.page_type cannot be empty");
    }

    #[test]
    fn test_load_from_explicit_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILENAME);
        std::fs::write(&path, "[layout]\nbreakpoint = 900\n").unwrap();

        let config = Config::load(Some(&path)).unwrap();
        assert_eq!(config.layout.breakpoint, 900);
        assert_eq!(config.config_path, Some(path));
    }

    #[test]
    fn test_load_missing_explicit_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing.toml");
        assert!(matches!(
            Config::load(Some(&path)),
            Err(ConfigError::NotFound(_))
        ));
    }

    #[test]
    fn test_load_invalid_toml() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILENAME);
        std::fs::write(&path, "[layout\nbreakpoint = ").unwrap();
        assert!(matches!(
            Config::load(Some(&path)),
            Err(ConfigError::Parse(_))
        ));
    }

    #[test]
    fn test_load_validates() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILENAME);
        std::fs::write(&path, "[layout]\nsidebar_width = 0\n").unwrap();
        assert!(matches!(
            Config::load(Some(&path)),
            Err(ConfigError::Validation(_))
        ));
    }
}
