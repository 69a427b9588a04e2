//! Configuration schema
//!
//! Deserialized from `caravan.toml`. The mode selects which reader/writer
//! pairing the factory builds; the store sections describe the relational
//! destinations; everything carries defaults where the original had them.

use crate::domain::{CaravanError, Result};
use serde::Deserialize;
use std::fmt;
use std::str::FromStr;

/// Import mode: which reader/writer pairing is active
///
/// Closed set, resolved once at startup. `oracle` is accepted as an alias
/// for `primary` when parsing, for compatibility with configurations written
/// against the original service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    /// Local CSV file into the local store
    Local,
    /// Local CSV file into the primary store
    #[serde(alias = "oracle")]
    Primary,
    /// S3 object into the primary store plus audit rows in the local store
    S3,
}

impl Mode {
    /// Mode label used for pairing names and logs
    pub fn as_str(&self) -> &'static str {
        match self {
            Mode::Local => "local",
            Mode::Primary => "primary",
            Mode::S3 => "s3",
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Mode {
    type Err = CaravanError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "local" => Ok(Mode::Local),
            "primary" | "oracle" => Ok(Mode::Primary),
            "s3" => Ok(Mode::S3),
            other => Err(CaravanError::Configuration(format!(
                "Unknown mode '{other}' (expected local, primary, or s3)"
            ))),
        }
    }
}

/// Top-level configuration
#[derive(Debug, Clone, Deserialize)]
pub struct CaravanConfig {
    /// Active import mode
    pub mode: Mode,

    /// Chunking settings
    #[serde(default)]
    pub batch: BatchSettings,

    /// Source settings
    #[serde(default)]
    pub source: SourceConfig,

    /// Destination store settings
    #[serde(default)]
    pub stores: StoresConfig,

    /// Logging settings
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Chunking settings
#[derive(Debug, Clone, Deserialize)]
pub struct BatchSettings {
    /// Records per chunk; must be >= 1
    #[serde(default = "default_chunk_size")]
    pub chunk_size: usize,
}

fn default_chunk_size() -> usize {
    crate::core::import::DEFAULT_CHUNK_SIZE
}

impl Default for BatchSettings {
    fn default() -> Self {
        Self {
            chunk_size: default_chunk_size(),
        }
    }
}

/// Source settings
#[derive(Debug, Clone, Deserialize)]
pub struct SourceConfig {
    /// Path of the local CSV file (local and primary modes)
    #[serde(default = "default_local_path")]
    pub local_path: String,

    /// S3 object settings (s3 mode)
    pub s3: Option<S3SourceConfig>,
}

fn default_local_path() -> String {
    "data/customers.csv".to_string()
}

impl Default for SourceConfig {
    fn default() -> Self {
        Self {
            local_path: default_local_path(),
            s3: None,
        }
    }
}

/// S3 source settings
#[derive(Debug, Clone, Deserialize)]
pub struct S3SourceConfig {
    /// Bucket name
    pub bucket: String,

    /// Object key
    pub key: String,

    /// AWS region
    pub region: String,

    /// Optional endpoint override (S3-compatible object stores)
    pub endpoint: Option<String>,

    /// Use path-style addressing; some S3-compatible stores require it
    #[serde(default = "default_path_style")]
    pub path_style: bool,
}

fn default_path_style() -> bool {
    true
}

/// Destination store sections
#[derive(Debug, Clone, Default, Deserialize)]
pub struct StoresConfig {
    /// The local store: sole destination in local mode, audit destination
    /// in s3 mode
    pub local: Option<StoreConfig>,

    /// The primary store: sole destination in primary mode, first
    /// destination in s3 mode
    pub primary: Option<StoreConfig>,
}

/// One relational store
#[derive(Debug, Clone, Deserialize)]
pub struct StoreConfig {
    /// PostgreSQL connection string
    pub connection_string: String,

    /// Connection pool size
    #[serde(default = "default_max_connections")]
    pub max_connections: usize,

    /// Pool acquire/connect timeout in seconds
    #[serde(default = "default_connect_timeout")]
    pub connect_timeout_seconds: u64,
}

fn default_max_connections() -> usize {
    4
}

fn default_connect_timeout() -> u64 {
    30
}

/// Logging settings
#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error)
    #[serde(default = "default_log_level")]
    pub level: String,

    /// Enable JSON file logging with daily rotation
    #[serde(default)]
    pub file_enabled: bool,

    /// Directory for log files
    #[serde(default = "default_log_path")]
    pub file_path: String,
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_path() -> String {
    "logs".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            file_enabled: false,
            file_path: default_log_path(),
        }
    }
}

impl CaravanConfig {
    /// Validate the configuration against the active mode
    ///
    /// Each mode requires the stores (and, for s3, the object settings) it
    /// wires together; unrelated sections may be absent.
    pub fn validate(&self) -> Result<()> {
        if self.batch.chunk_size < 1 {
            return Err(CaravanError::Configuration(
                "batch.chunk_size must be >= 1".to_string(),
            ));
        }

        match self.mode {
            Mode::Local => {
                self.require_store(&self.stores.local, "stores.local")?;
            }
            Mode::Primary => {
                self.require_store(&self.stores.primary, "stores.primary")?;
            }
            Mode::S3 => {
                self.require_store(&self.stores.primary, "stores.primary")?;
                self.require_store(&self.stores.local, "stores.local")?;

                let s3 = self.source.s3.as_ref().ok_or_else(|| {
                    CaravanError::Configuration(
                        "source.s3 is required in s3 mode".to_string(),
                    )
                })?;
                if s3.bucket.is_empty() || s3.key.is_empty() {
                    return Err(CaravanError::Configuration(
                        "source.s3.bucket and source.s3.key must not be empty".to_string(),
                    ));
                }
                if s3.region.is_empty() {
                    return Err(CaravanError::Configuration(
                        "source.s3.region must not be empty".to_string(),
                    ));
                }
            }
        }

        Ok(())
    }

    fn require_store(&self, store: &Option<StoreConfig>, section: &str) -> Result<()> {
        let store = store.as_ref().ok_or_else(|| {
            CaravanError::Configuration(format!(
                "{section} is required in {} mode",
                self.mode
            ))
        })?;

        if store.connection_string.is_empty() {
            return Err(CaravanError::Configuration(format!(
                "{section}.connection_string must not be empty"
            )));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    fn store() -> StoreConfig {
        StoreConfig {
            connection_string: "postgres://caravan@localhost/caravan".to_string(),
            max_connections: 4,
            connect_timeout_seconds: 30,
        }
    }

    fn base_config(mode: Mode) -> CaravanConfig {
        CaravanConfig {
            mode,
            batch: BatchSettings::default(),
            source: SourceConfig::default(),
            stores: StoresConfig::default(),
            logging: LoggingConfig::default(),
        }
    }

    #[test_case("local", Mode::Local)]
    #[test_case("primary", Mode::Primary)]
    #[test_case("oracle", Mode::Primary ; "oracle alias")]
    #[test_case("s3", Mode::S3)]
    #[test_case("S3", Mode::S3 ; "case insensitive")]
    fn test_mode_from_str(input: &str, expected: Mode) {
        assert_eq!(input.parse::<Mode>().unwrap(), expected);
    }

    #[test]
    fn test_mode_from_str_rejects_unknown() {
        assert!("h2".parse::<Mode>().is_err());
    }

    #[test]
    fn test_default_chunk_size() {
        assert_eq!(BatchSettings::default().chunk_size, 100);
    }

    #[test]
    fn test_local_mode_requires_local_store() {
        let mut config = base_config(Mode::Local);
        assert!(config.validate().is_err());

        config.stores.local = Some(store());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_s3_mode_requires_both_stores_and_object() {
        let mut config = base_config(Mode::S3);
        config.stores.local = Some(store());
        config.stores.primary = Some(store());
        assert!(config.validate().is_err());

        config.source.s3 = Some(S3SourceConfig {
            bucket: "imports".to_string(),
            key: "customers.csv".to_string(),
            region: "us-east-1".to_string(),
            endpoint: None,
            path_style: true,
        });
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_zero_chunk_size_rejected() {
        let mut config = base_config(Mode::Local);
        config.stores.local = Some(store());
        config.batch.chunk_size = 0;

        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("chunk_size"));
    }

    #[test]
    fn test_toml_deserialization_with_oracle_alias() {
        let toml_str = r#"
            mode = "oracle"

            [stores.primary]
            connection_string = "postgres://caravan@db/caravan"
        "#;

        let config: CaravanConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.mode, Mode::Primary);
        assert_eq!(config.batch.chunk_size, 100);
        assert_eq!(config.source.local_path, "data/customers.csv");
        assert!(config.validate().is_ok());
    }
}
