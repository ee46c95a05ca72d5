//! Serve command for running the dashboard
//!
//! Loads the classifier artifact and the reference dataset once, then serves
//! the dashboard pages and the JSON API until the process is stopped.

use std::path::PathBuf;

use anyhow::{Context, Result};
use bilharzia_server::{AppState, DashboardServer, ServerConfig};
use clap::Args;
use tracing::info;

use crate::config::{ConfigLoader, DashboardConfig};

/// Arguments for the serve command
#[derive(Debug, Args)]
pub struct ServeArgs {
    /// Port to listen on (overrides config)
    #[arg(short, long)]
    pub port: Option<u16>,

    /// Host to bind to (overrides config)
    #[arg(long)]
    pub host: Option<String>,

    /// Path to the classifier artifact (overrides config)
    #[arg(short, long)]
    pub model: Option<PathBuf>,

    /// Path to the reference dataset CSV (overrides config)
    #[arg(short, long)]
    pub dataset: Option<PathBuf>,
}

impl ServeArgs {
    /// Apply command-line overrides on top of the loaded configuration
    fn apply(self, mut config: DashboardConfig) -> DashboardConfig {
        if let Some(host) = self.host {
            config.server.host = host;
        }
        if let Some(port) = self.port {
            config.server.port = port;
        }
        if let Some(model) = self.model {
            config.data.model_path = model;
        }
        if let Some(dataset) = self.dataset {
            config.data.dataset_path = dataset;
        }
        config
    }
}

/// Run the serve command
pub async fn run(args: ServeArgs) -> Result<()> {
    let config = args.apply(ConfigLoader::load()?);

    let state = AppState::load(&config.data.model_path, &config.data.dataset_path)
        .context("Failed to load dashboard data")?;

    info!(
        "Starting bilharzia dashboard on {}:{}",
        config.server.host, config.server.port
    );

    let server = DashboardServer::new(
        ServerConfig::new(config.server.host, config.server.port),
        state,
    );
    server.run().await.map_err(Into::into)
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[derive(Parser)]
    struct TestCli {
        #[command(flatten)]
        serve: ServeArgs,
    }

    #[test]
    fn test_serve_args_defaults() {
        let cli = TestCli::parse_from(["test"]);
        assert!(cli.serve.port.is_none());
        assert!(cli.serve.host.is_none());
        assert!(cli.serve.model.is_none());
        assert!(cli.serve.dataset.is_none());
    }

    #[test]
    fn test_serve_args_custom_port() {
        let cli = TestCli::parse_from(["test", "--port", "8080"]);
        assert_eq!(cli.serve.port, Some(8080));
    }

    #[test]
    fn test_serve_args_data_paths() {
        let cli = TestCli::parse_from([
            "test",
            "--model",
            "models/schisto.json",
            "-d",
            "data/schist.csv",
        ]);
        assert_eq!(cli.serve.model, Some(PathBuf::from("models/schisto.json")));
        assert_eq!(cli.serve.dataset, Some(PathBuf::from("data/schist.csv")));
    }

    #[test]
    fn test_apply_overrides_only_given_values() {
        let cli = TestCli::parse_from(["test", "--host", "0.0.0.0", "--model", "m.json"]);
        let config = cli.serve.apply(DashboardConfig::default());

        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.server.port, bilharzia_server::DEFAULT_PORT);
        assert_eq!(config.data.model_path, PathBuf::from("m.json"));
        assert_eq!(config.data.dataset_path, PathBuf::from("schist.csv"));
    }
}
