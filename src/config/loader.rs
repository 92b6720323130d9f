//! Configuration loading from disk.

use std::fs;
use std::path::Path;

use crate::config::schema::CatalogConfig;
use crate::config::validation::{validate_config, ValidationError};

/// Error type for configuration loading.
#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Parse(toml::de::Error),
    Validation(Vec<ValidationError>),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "IO error: {}", e),
            ConfigError::Parse(e) => write!(f, "Parse error: {}", e),
            ConfigError::Validation(errors) => {
                write!(f, "Validation failed: ")?;
                for (i, err) in errors.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}", err)?;
                }
                Ok(())
            }
        }
    }
}

impl std::error::Error for ConfigError {}

/// Parse and validate configuration text.
pub fn parse_config(content: &str) -> Result<CatalogConfig, ConfigError> {
    let config: CatalogConfig = toml::from_str(content).map_err(ConfigError::Parse)?;
    validate_config(&config).map_err(ConfigError::Validation)?;
    Ok(config)
}

/// Load and validate configuration from a TOML file.
pub fn load_config(path: &Path) -> Result<CatalogConfig, ConfigError> {
    let content = fs::read_to_string(path).map_err(ConfigError::Io)?;
    parse_config(&content)
}

/// Load from `path` when given, otherwise fall back to validated defaults.
pub fn load_or_default(path: Option<&Path>) -> Result<CatalogConfig, ConfigError> {
    match path {
        Some(path) => load_config(path),
        None => {
            let config = CatalogConfig::default();
            validate_config(&config).map_err(ConfigError::Validation)?;
            Ok(config)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[api]\nbase_url = \"http://catalog.internal:8000/\"").unwrap();

        let config = load_config(file.path()).unwrap();
        assert_eq!(config.api.base_url, "http://catalog.internal:8000/");
    }

    #[test]
    fn test_error_kinds() {
        let missing = load_config(Path::new("/definitely/not/here.toml")).unwrap_err();
        assert!(matches!(missing, ConfigError::Io(_)));

        let garbage = parse_config("[server\nbind_address =").unwrap_err();
        assert!(matches!(garbage, ConfigError::Parse(_)));

        let invalid = parse_config("[server]\nrequest_timeout_secs = 0").unwrap_err();
        assert!(matches!(invalid, ConfigError::Validation(ref e) if e.len() == 1));
        assert!(invalid.to_string().starts_with("Validation failed: "));
    }

    #[test]
    fn test_no_path_means_defaults() {
        let config = load_or_default(None).unwrap();
        assert_eq!(config.server.bind_address, "127.0.0.1:5000");
    }
}
