use serde::{Deserialize, Serialize};
use std::path::PathBuf;

pub use bilharzia_server::{DEFAULT_HOST, DEFAULT_PORT};

/// Default model artifact location, relative to the working directory
pub const DEFAULT_MODEL_PATH: &str = "schisto_model.json";
/// Default reference dataset location, relative to the working directory
pub const DEFAULT_DATASET_PATH: &str = "schist.csv";

/// Configuration as stored in TOML files (with optional fields for merging)
#[derive(Debug, Clone, Deserialize, Default)]
pub struct RawDashboardConfig {
    #[serde(default)]
    pub server: RawServerConfig,

    #[serde(default)]
    pub data: RawDataConfig,
}

/// Server config as stored in TOML
#[derive(Debug, Clone, Deserialize, Default)]
pub struct RawServerConfig {
    /// Host to bind to
    pub host: Option<String>,

    /// Port for the dashboard
    pub port: Option<u16>,
}

/// Data file locations as stored in TOML
#[derive(Debug, Clone, Deserialize, Default)]
pub struct RawDataConfig {
    /// Path to the classifier artifact
    pub model_path: Option<PathBuf>,

    /// Path to the reference dataset
    pub dataset_path: Option<PathBuf>,
}

/// Final configuration with defaults applied
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct DashboardConfig {
    #[serde(default)]
    pub server: ServerConfig,

    #[serde(default)]
    pub data: DataConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Host to bind to
    pub host: String,

    /// Port for the dashboard
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DataConfig {
    /// Path to the classifier artifact
    pub model_path: PathBuf,

    /// Path to the reference dataset
    pub dataset_path: PathBuf,
}

impl Default for DataConfig {
    fn default() -> Self {
        Self {
            model_path: PathBuf::from(DEFAULT_MODEL_PATH),
            dataset_path: PathBuf::from(DEFAULT_DATASET_PATH),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_values() {
        let config = DashboardConfig::default();
        assert_eq!(config.server.host, "127.0.0.1");
        assert_eq!(config.server.port, DEFAULT_PORT);
        assert_eq!(config.data.model_path, PathBuf::from("schisto_model.json"));
        assert_eq!(config.data.dataset_path, PathBuf::from("schist.csv"));
    }

    #[test]
    fn test_toml_round_trip() {
        let config = DashboardConfig {
            server: ServerConfig {
                host: "0.0.0.0".to_string(),
                port: 8080,
            },
            data: DataConfig {
                model_path: PathBuf::from("/srv/models/schisto.json"),
                dataset_path: PathBuf::from("/srv/data/schist.csv"),
            },
        };

        let toml_str = toml::to_string(&config).unwrap();
        let parsed: DashboardConfig = toml::from_str(&toml_str).unwrap();

        assert_eq!(parsed.server.port, 8080);
        assert_eq!(parsed.server.host, "0.0.0.0");
        assert_eq!(
            parsed.data.model_path,
            PathBuf::from("/srv/models/schisto.json")
        );
    }

    #[test]
    fn test_raw_config_partial_parsing() {
        let toml_str = r#"
[data]
dataset_path = "surveys/schist.csv"
"#;
        let raw: RawDashboardConfig = toml::from_str(toml_str).unwrap();

        assert_eq!(
            raw.data.dataset_path,
            Some(PathBuf::from("surveys/schist.csv"))
        );
        assert!(raw.data.model_path.is_none());
        assert!(raw.server.port.is_none());
    }

    #[test]
    fn test_raw_config_empty_uses_none() {
        let raw: RawDashboardConfig = toml::from_str("").unwrap();

        assert!(raw.server.host.is_none());
        assert!(raw.server.port.is_none());
        assert!(raw.data.model_path.is_none());
    }
}
