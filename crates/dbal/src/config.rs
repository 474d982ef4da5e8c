//! DBAL configuration
//!
//! Settings can come from a YAML file, from `DBAL_*` environment variables,
//! or from `Default`.

use std::env;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::naming::{QuotingResolver, DEFAULT_MAX_IDENTIFIER_LENGTH};
use crate::platform::{Platform, SqlDialect};
use crate::schema::Table;

/// Naming and rendering configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DbalConfig {
    /// Target platform for rendered names
    pub platform: SqlDialect,
    /// Namespace treated as implicit by `shortest_name`
    pub default_namespace: Option<String>,
    /// Maximum length of generated identifier names
    pub identifier_max_length: usize,
    /// Log a warning for names whose rendering will change under strict parsing
    pub report_name_divergence: bool,
}

impl Default for DbalConfig {
    fn default() -> Self {
        Self {
            platform: SqlDialect::PostgreSQL,
            default_namespace: Some("public".to_string()),
            identifier_max_length: DEFAULT_MAX_IDENTIFIER_LENGTH,
            report_name_divergence: false,
        }
    }
}

impl DbalConfig {
    /// Load configuration from a YAML file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let config: DbalConfig = serde_yaml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from environment variables, starting from defaults
    pub fn from_env() -> Result<Self, ConfigError> {
        let mut config = Self::default();

        if let Ok(platform) = env::var("DBAL_PLATFORM") {
            config.platform = platform.parse().map_err(|_| ConfigError::InvalidValue {
                field: "platform".to_string(),
                value: platform.clone(),
                expected: "postgresql, mysql, sqlite, sqlserver, oracle, or generic".to_string(),
            })?;
        }

        if let Ok(namespace) = env::var("DBAL_DEFAULT_NAMESPACE") {
            config.default_namespace = if namespace.is_empty() {
                None
            } else {
                Some(namespace)
            };
        }

        if let Ok(length) = env::var("DBAL_IDENTIFIER_MAX_LENGTH") {
            config.identifier_max_length =
                length.parse().map_err(|_| ConfigError::InvalidValue {
                    field: "identifier_max_length".to_string(),
                    value: length.clone(),
                    expected: "positive integer".to_string(),
                })?;
        }

        if let Ok(report) = env::var("DBAL_REPORT_NAME_DIVERGENCE") {
            config.report_name_divergence =
                report.parse().map_err(|_| ConfigError::InvalidValue {
                    field: "report_name_divergence".to_string(),
                    value: report.clone(),
                    expected: "true or false".to_string(),
                })?;
        }

        config.validate()?;
        Ok(config)
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        let limit = self.platform.max_identifier_length();
        if self.identifier_max_length == 0 || self.identifier_max_length > limit {
            return Err(ConfigError::InvalidValue {
                field: "identifier_max_length".to_string(),
                value: self.identifier_max_length.to_string(),
                expected: format!("between 1 and {} for {}", limit, self.platform),
            });
        }
        Ok(())
    }

    pub fn dialect(&self) -> SqlDialect {
        self.platform
    }

    /// Default namespace, or the empty string when none is configured
    pub fn namespace(&self) -> &str {
        self.default_namespace.as_deref().unwrap_or_default()
    }

    pub fn quoting_resolver(&self) -> QuotingResolver {
        QuotingResolver::new().report_divergences(self.report_name_divergence)
    }

    /// Empty table bound to this configuration
    pub fn table(&self, name: &str) -> Table {
        Table::with_config(name, self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::Column;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_default_config() {
        let config = DbalConfig::default();
        assert_eq!(config.platform, SqlDialect::PostgreSQL);
        assert_eq!(config.namespace(), "public");
        assert_eq!(config.identifier_max_length, 30);
        assert!(!config.report_name_divergence);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_table_uses_configured_limits() {
        let config = DbalConfig {
            identifier_max_length: 10,
            ..DbalConfig::default()
        };
        let mut table = config.table("public.users");
        table.add_column(Column::new("email", "TEXT")).unwrap();
        assert_eq!(table.shortest_name(), "users");

        let index = table.add_index(&["email"], None).unwrap();
        assert_eq!(index.name().name().chars().count(), 10);
    }

    #[test]
    fn test_load_from_yaml() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(
            file,
            "platform: mysql\ndefault_namespace: shop\nidentifier_max_length: 64\nreport_name_divergence: true"
        )
        .unwrap();

        let config = DbalConfig::load(file.path()).unwrap();
        assert_eq!(config.dialect(), SqlDialect::MySQL);
        assert_eq!(config.namespace(), "shop");
        assert_eq!(config.identifier_max_length, 64);
        assert!(config.report_name_divergence);
    }

    #[test]
    fn test_partial_yaml_uses_defaults() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "platform: postgres").unwrap();

        let config = DbalConfig::load(file.path()).unwrap();
        assert_eq!(config.dialect(), SqlDialect::PostgreSQL);
        assert_eq!(config.identifier_max_length, 30);
    }

    #[test]
    fn test_load_rejects_length_beyond_platform_limit() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "platform: oracle\nidentifier_max_length: 31").unwrap();

        let err = DbalConfig::load(file.path()).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue { .. }));
    }

    #[test]
    fn test_load_missing_file() {
        let err = DbalConfig::load(Path::new("/nonexistent/dbal.yaml")).unwrap_err();
        assert!(matches!(err, ConfigError::Io(_)));
    }

    #[test]
    fn test_load_malformed_yaml() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "platform: [unclosed").unwrap();

        let err = DbalConfig::load(file.path()).unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_validate_rejects_zero_length() {
        let config = DbalConfig {
            identifier_max_length: 0,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    // The only test touching DBAL_* variables
    #[test]
    fn test_from_env() {
        env::set_var("DBAL_PLATFORM", "mssql");
        env::set_var("DBAL_DEFAULT_NAMESPACE", "");
        env::set_var("DBAL_IDENTIFIER_MAX_LENGTH", "100");
        env::set_var("DBAL_REPORT_NAME_DIVERGENCE", "true");

        let config = DbalConfig::from_env().unwrap();
        assert_eq!(config.dialect(), SqlDialect::SqlServer);
        assert_eq!(config.default_namespace, None);
        assert_eq!(config.identifier_max_length, 100);
        assert!(config.report_name_divergence);

        env::set_var("DBAL_IDENTIFIER_MAX_LENGTH", "many");
        assert!(matches!(
            DbalConfig::from_env(),
            Err(ConfigError::InvalidValue { .. })
        ));

        for key in [
            "DBAL_PLATFORM",
            "DBAL_DEFAULT_NAMESPACE",
            "DBAL_IDENTIFIER_MAX_LENGTH",
            "DBAL_REPORT_NAME_DIVERGENCE",
        ] {
            env::remove_var(key);
        }
    }
}
