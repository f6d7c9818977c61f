//! Report configuration loader.
//!
//! Controls how a response is rendered: output format, how many entities
//! to show and which scores are too low to bother with.

use crate::entity::Entity;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::Path;

/// Error type for configuration loading
#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Yaml(serde_yaml::Error),
    Invalid(String),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "Failed to read config file: {}", e),
            ConfigError::Yaml(e) => write!(f, "Failed to parse YAML: {}", e),
            ConfigError::Invalid(msg) => write!(f, "Invalid configuration: {}", msg),
        }
    }
}

impl std::error::Error for ConfigError {}

impl From<std::io::Error> for ConfigError {
    fn from(err: std::io::Error) -> Self {
        ConfigError::Io(err)
    }
}

impl From<serde_yaml::Error> for ConfigError {
    fn from(err: serde_yaml::Error) -> Self {
        ConfigError::Yaml(err)
    }
}

/// Output format for a rendered response.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
    Ndjson,
}

impl std::str::FromStr for OutputFormat {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            "ndjson" => Ok(OutputFormat::Ndjson),
            other => Err(ConfigError::Invalid(format!("unknown output format '{}'", other))),
        }
    }
}

fn default_true() -> bool {
    true
}

/// Rendering settings, usually loaded from a small YAML file.
///
/// ```yaml
/// report:
///   format: ndjson
///   limit: 10
///   min_score: 0.5
///   include_header: false
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportConfig {
    #[serde(default)]
    pub format: OutputFormat,

    /// Maximum number of entities rendered, after sorting
    #[serde(default)]
    pub limit: Option<usize>,

    /// Scored entities below this are skipped; unscored ones always pass
    #[serde(default)]
    pub min_score: Option<f64>,

    #[serde(default = "default_true")]
    pub include_header: bool,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            format: OutputFormat::default(),
            limit: None,
            min_score: None,
            include_header: true,
        }
    }
}

impl ReportConfig {
    /// Load report configuration from a YAML file.
    ///
    /// # Errors
    /// Returns error if the file cannot be read, is not valid YAML, or
    /// holds out-of-range settings
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path)?;
        let config = Self::from_yaml_str(&contents)?;
        tracing::debug!(path = %path.display(), ?config, "loaded report config");
        Ok(config)
    }

    /// Parse configuration from YAML text. Settings may sit at top level or
    /// under a `report` key.
    pub fn from_yaml_str(contents: &str) -> Result<Self, ConfigError> {
        let yaml: serde_yaml::Value = serde_yaml::from_str(contents)?;
        let section = match yaml.get("report") {
            Some(section) => section.clone(),
            None if yaml.is_null() => serde_yaml::Value::Mapping(Default::default()),
            None => yaml,
        };
        let config: ReportConfig = serde_yaml::from_value(section)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.limit == Some(0) {
            return Err(ConfigError::Invalid("limit must be at least 1".to_string()));
        }
        if let Some(min) = self.min_score {
            if !min.is_finite() {
                return Err(ConfigError::Invalid(format!("min_score must be finite, got {}", min)));
            }
        }
        Ok(())
    }

    /// Whether an entity passes the score threshold.
    pub fn accepts<T: Entity>(&self, entity: &T) -> bool {
        match (self.min_score, entity.score()) {
            (Some(min), Some(score)) => score >= min,
            _ => true,
        }
    }

    /// Apply threshold and limit to already-sorted entities.
    pub fn select<'a, T: Entity>(&self, entities: impl Iterator<Item = &'a T>) -> Vec<&'a T> {
        entities
            .filter(|e| self.accepts(*e))
            .take(self.limit.unwrap_or(usize::MAX))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::{AuthorEntity, CategoryEntity};

    #[test]
    fn test_defaults() {
        let config = ReportConfig::from_yaml_str("").unwrap();
        assert_eq!(config, ReportConfig::default());
        assert!(config.include_header);
    }

    #[test]
    fn test_nested_report_section() {
        let yaml = r#"
report:
  format: ndjson
  limit: 5
  min_score: 0.25
  include_header: false
"#;
        let config = ReportConfig::from_yaml_str(yaml).unwrap();
        assert_eq!(config.format, OutputFormat::Ndjson);
        assert_eq!(config.limit, Some(5));
        assert_eq!(config.min_score, Some(0.25));
        assert!(!config.include_header);
    }

    #[test]
    fn test_top_level_settings() {
        let config = ReportConfig::from_yaml_str("format: json\n").unwrap();
        assert_eq!(config.format, OutputFormat::Json);
    }

    #[test]
    fn test_rejects_zero_limit() {
        let result = ReportConfig::from_yaml_str("limit: 0\n");
        assert!(matches!(result, Err(ConfigError::Invalid(_))));
    }

    #[test]
    fn test_rejects_unknown_format() {
        let result = ReportConfig::from_yaml_str("format: xml\n");
        assert!(matches!(result, Err(ConfigError::Yaml(_))));
        assert!("XML".parse::<OutputFormat>().is_err());
        assert_eq!("NDJSON".parse::<OutputFormat>().unwrap(), OutputFormat::Ndjson);
    }

    #[test]
    fn test_select_applies_threshold_and_limit() {
        let config = ReportConfig {
            limit: Some(2),
            min_score: Some(0.5),
            ..ReportConfig::default()
        };
        let categories = vec![
            CategoryEntity::with("a", 0.9),
            CategoryEntity::with("b", 0.4),
            CategoryEntity::with("c", 0.6),
            CategoryEntity::with("d", 0.55),
        ];
        let selected: Vec<_> = config
            .select(categories.iter())
            .into_iter()
            .map(|c| c.category())
            .collect();
        assert_eq!(selected, vec![Some("a"), Some("c")]);

        let authors = vec![AuthorEntity::with("x")];
        assert_eq!(config.select(authors.iter()).len(), 1);
    }
}
