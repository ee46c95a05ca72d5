use super::types::{
    DEFAULT_HOST, DEFAULT_PORT, DashboardConfig, DataConfig, RawDashboardConfig, RawDataConfig,
    RawServerConfig, ServerConfig,
};
use anyhow::{Context, Result};
use directories::ProjectDirs;
use std::path::{Path, PathBuf};

pub struct ConfigLoader;

impl ConfigLoader {
    /// Load merged configuration (user + project)
    pub fn load() -> Result<DashboardConfig> {
        let mut raw = RawDashboardConfig::default();

        // Layer 1: User config
        if let Some(user_path) = Self::user_config_path()
            && user_path.exists()
        {
            raw = Self::merge_raw(raw, Self::read_raw(&user_path)?);
        }

        // Layer 2: Project config
        let project_path = Self::project_config_path();
        if project_path.exists() {
            raw = Self::merge_raw(raw, Self::read_raw(&project_path)?);
        }

        // Convert to final config with defaults applied
        Ok(Self::finalize(raw))
    }

    /// Get user config path (platform-specific)
    pub fn user_config_path() -> Option<PathBuf> {
        ProjectDirs::from("", "", "bilharzia").map(|dirs| dirs.config_dir().join("config.toml"))
    }

    /// Get project config path
    /// Can be overridden with BILHARZIA_PROJECT_CONFIG_DIR env var
    pub fn project_config_path() -> PathBuf {
        if let Ok(dir) = std::env::var("BILHARZIA_PROJECT_CONFIG_DIR") {
            PathBuf::from(dir).join("config.toml")
        } else {
            PathBuf::from(".bilharzia/config.toml")
        }
    }

    fn read_raw(path: &Path) -> Result<RawDashboardConfig> {
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        toml::from_str(&contents)
            .with_context(|| format!("Invalid config file {}", path.display()))
    }

    /// Merge two raw configs (overlay values override base only if explicitly set)
    fn merge_raw(base: RawDashboardConfig, overlay: RawDashboardConfig) -> RawDashboardConfig {
        RawDashboardConfig {
            server: RawServerConfig {
                host: overlay.server.host.or(base.server.host),
                port: overlay.server.port.or(base.server.port),
            },
            data: RawDataConfig {
                model_path: overlay.data.model_path.or(base.data.model_path),
                dataset_path: overlay.data.dataset_path.or(base.data.dataset_path),
            },
        }
    }

    /// Convert raw config to final config with defaults applied
    fn finalize(raw: RawDashboardConfig) -> DashboardConfig {
        let data_defaults = DataConfig::default();
        DashboardConfig {
            server: ServerConfig {
                host: raw.server.host.unwrap_or_else(|| DEFAULT_HOST.to_string()),
                port: raw.server.port.unwrap_or(DEFAULT_PORT),
            },
            data: DataConfig {
                model_path: raw.data.model_path.unwrap_or(data_defaults.model_path),
                dataset_path: raw.data.dataset_path.unwrap_or(data_defaults.dataset_path),
            },
        }
    }

    /// Load a single config file with defaults applied (for testing)
    #[cfg(test)]
    pub fn load_from_path(path: &Path) -> Result<DashboardConfig> {
        if path.exists() {
            Ok(Self::finalize(Self::read_raw(path)?))
        } else {
            Ok(DashboardConfig::default())
        }
    }
}
