use serde::Deserialize;
use std::path::Path;
use thiserror::Error;

pub const DEFAULT_CONFIG_PATH: &str = "config.yaml";
pub const DEFAULT_POSTCODE: &str = "LE10 1SH";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("could not read config file `{path}`: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("could not parse config file: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct Config {
    pub logging: Logging,
    pub catalog: Catalog,
    pub query: Query,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct Logging {
    /// `EnvFilter` directives, falls back to `<module>=debug,catalog=debug`
    pub filter: Option<String>,
    pub file: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct Catalog {
    /// JSON dataset used instead of the bundled one
    pub data_path: Option<String>,
    pub postcode: String,
}

impl Default for Catalog {
    fn default() -> Self {
        Self {
            data_path: None,
            postcode: DEFAULT_POSTCODE.to_string(),
        }
    }
}

/// Initial browse query. Kept untyped here, the `catalog` crate owns the
/// vocabulary of sort keys and filter criteria.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct Query {
    pub search: String,
    pub sort_key: String,
    pub sort_order: String,
    pub filters: Option<serde_yaml::Value>,
}

impl Default for Query {
    fn default() -> Self {
        Self {
            search: String::new(),
            sort_key: "size".to_string(),
            sort_order: "asc".to_string(),
            filters: None,
        }
    }
}

impl Config {
    /// Reads the file named by `CONFIG_PATH`, or `config.yaml` when unset.
    /// A missing `config.yaml` is not an error and gives the defaults, an
    /// explicit `CONFIG_PATH` must exist.
    pub fn load() -> Result<Self, ConfigError> {
        match std::env::var("CONFIG_PATH") {
            Ok(path) => Self::from_path(path),
            Err(_) if !Path::new(DEFAULT_CONFIG_PATH).exists() => Ok(Self::default()),
            Err(_) => Self::from_path(DEFAULT_CONFIG_PATH),
        }
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let config_file = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_yaml_str(&config_file)
    }

    pub fn from_yaml_str(yaml: &str) -> Result<Self, ConfigError> {
        if yaml.trim().is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_yaml::from_str(yaml)?)
    }
}
