use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// Server settings. Values come from an optional YAML file and are then
/// overridden by command-line flags.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub port: u16,
    pub database: String,
    pub cors_origin: Option<String>,
    pub log_level: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: 3000,
            database: "branchrep.db".to_string(),
            cors_origin: None,
            log_level: "info".to_string(),
        }
    }
}

/// Flag values that take precedence over the file.
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    pub port: Option<u16>,
    pub database: Option<String>,
    pub cors_origin: Option<String>,
    pub log_level: Option<String>,
}

impl ServerConfig {
    pub fn from_yaml_str(content: &str) -> Result<Self> {
        serde_yaml::from_str(content).context("Invalid server configuration")
    }

    /// Reads `path` when given, otherwise starts from the defaults.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => {
                let content = std::fs::read_to_string(path)
                    .with_context(|| format!("Failed to read config file {}", path.display()))?;
                Self::from_yaml_str(&content)
            }
            None => Ok(Self::default()),
        }
    }

    pub fn with_overrides(mut self, overrides: ConfigOverrides) -> Self {
        if let Some(port) = overrides.port {
            self.port = port;
        }
        if let Some(database) = overrides.database {
            self.database = database;
        }
        if overrides.cors_origin.is_some() {
            self.cors_origin = overrides.cors_origin;
        }
        if let Some(log_level) = overrides.log_level {
            self.log_level = log_level;
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn partial_yaml_keeps_defaults() {
        let config = ServerConfig::from_yaml_str("port: 8080\ncors_origin: http://localhost:5173\n")
            .expect("valid yaml");

        assert_eq!(config.port, 8080);
        assert_eq!(config.cors_origin.as_deref(), Some("http://localhost:5173"));
        assert_eq!(config.database, "branchrep.db");
        assert_eq!(config.log_level, "info");
    }

    #[test]
    fn overrides_win_over_file_values() {
        let config = ServerConfig::from_yaml_str("port: 8080\ndatabase: file.db\n")
            .expect("valid yaml")
            .with_overrides(ConfigOverrides {
                database: Some("cli.db".to_string()),
                ..Default::default()
            });

        assert_eq!(config.port, 8080);
        assert_eq!(config.database, "cli.db");
    }

    #[test]
    fn load_reads_file() {
        let mut file = tempfile::NamedTempFile::new().expect("temp file");
        writeln!(file, "log_level: debug").expect("write");

        let config = ServerConfig::load(Some(file.path())).expect("load");
        assert_eq!(config.log_level, "debug");
        assert_eq!(ServerConfig::load(None).expect("defaults"), ServerConfig::default());
    }

    #[test]
    fn invalid_yaml_is_an_error() {
        assert!(ServerConfig::from_yaml_str("port: not-a-number").is_err());
    }
}
