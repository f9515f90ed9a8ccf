use serde::Deserialize;
use std::path::{Path, PathBuf};

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    /// Port the HTTP server listens on
    #[serde(default = "default_port")]
    pub port: u16,
    /// Where the article snapshot is written and read
    #[serde(default = "default_data_file")]
    pub data_file: PathBuf,
    /// How long the in-process article cache stays fresh
    #[serde(default = "default_cache_ttl_secs")]
    pub cache_ttl_secs: u64,
    /// Hours between scheduled pipeline runs
    #[serde(default = "default_refresh_interval_hours")]
    pub refresh_interval_hours: u64,
}

fn default_port() -> u16 {
    5000
}

fn default_data_file() -> PathBuf {
    PathBuf::from("data/articles.json")
}

fn default_cache_ttl_secs() -> u64 {
    60
}

fn default_refresh_interval_hours() -> u64 {
    6
}

impl Default for Config {
    fn default() -> Self {
        Self {
            port: default_port(),
            data_file: default_data_file(),
            cache_ttl_secs: default_cache_ttl_secs(),
            refresh_interval_hours: default_refresh_interval_hours(),
        }
    }
}

impl Config {
    /// Loads the config file, falling back to defaults when it does not
    /// exist so the server runs with zero configuration.
    pub fn load<P: AsRef<Path>>(path: P) -> anyhow::Result<Self> {
        if !path.as_ref().exists() {
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }

    /// Parse config from a TOML string (useful for testing)
    pub fn from_str(content: &str) -> anyhow::Result<Self> {
        let config: Config = toml::from_str(content)?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.port, 5000);
        assert_eq!(config.data_file, PathBuf::from("data/articles.json"));
        assert_eq!(config.cache_ttl_secs, 60);
        assert_eq!(config.refresh_interval_hours, 6);
    }

    #[test]
    fn test_load_valid_config() {
        let content = r#"
            port = 8080
            data_file = "tmp/articles.json"
            cache_ttl_secs = 30
            refresh_interval_hours = 12
        "#;

        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file.write_all(content.as_bytes()).unwrap();

        let config = Config::load(temp_file.path()).unwrap();

        assert_eq!(config.port, 8080);
        assert_eq!(config.data_file, PathBuf::from("tmp/articles.json"));
        assert_eq!(config.cache_ttl_secs, 30);
        assert_eq!(config.refresh_interval_hours, 12);
    }

    #[test]
    fn test_missing_file_yields_defaults() {
        let config = Config::load("/nonexistent/path/config.toml").unwrap();
        assert_eq!(config.port, 5000);
    }

    #[test]
    fn test_partial_config_uses_defaults_for_rest() {
        let config = Config::from_str("port = 3000").unwrap();
        assert_eq!(config.port, 3000);
        assert_eq!(config.cache_ttl_secs, 60);
        assert_eq!(config.refresh_interval_hours, 6);
    }

    #[test]
    fn test_empty_config_is_valid() {
        let config = Config::from_str("").unwrap();
        assert_eq!(config.port, 5000);
    }

    #[test]
    fn test_invalid_toml_errors() {
        let content = "this is not valid toml {{{";

        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file.write_all(content.as_bytes()).unwrap();

        let result = Config::load(temp_file.path());
        assert!(result.is_err());
    }

    #[test]
    fn test_invalid_port_type_errors() {
        let result = Config::from_str("port = \"not a number\"");
        assert!(result.is_err());
    }
}
