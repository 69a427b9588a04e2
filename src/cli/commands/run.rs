//! `run` command - trigger one import run

use crate::adapters::build_pairing;
use crate::config::{load_config, CaravanConfig};
use crate::core::import::RunCoordinator;
use clap::Args;

/// Arguments for the run command
#[derive(Args, Debug)]
pub struct RunArgs {
    /// Override the configured mode (local, primary, s3)
    #[arg(short, long)]
    pub mode: Option<String>,

    /// Provision the customer/audit schema on every target store first
    #[arg(long)]
    pub ensure_schema: bool,

    /// Print the run descriptor as JSON instead of plain text
    #[arg(long)]
    pub json: bool,
}

impl RunArgs {
    /// Execute the run command, returning the process exit code
    ///
    /// An invalid configuration (including an invalid `--mode` override)
    /// returns exit code 2, matching `validate-config`.
    pub async fn execute(&self, config_path: &str) -> anyhow::Result<i32> {
        let config = match self.resolve_config(config_path) {
            Ok(config) => config,
            Err(e) => {
                eprintln!("Configuration is invalid: {e}");
                return Ok(2);
            }
        };

        let resolved = build_pairing(&config).await?;

        for store in &resolved.stores {
            store.test_connection().await?;
        }

        if self.ensure_schema {
            for store in &resolved.stores {
                store.ensure_schema().await?;
            }
        }

        let coordinator = RunCoordinator::new(config.batch.chunk_size);
        let report = coordinator.execute(resolved.pairing).await;

        if self.json {
            println!("{}", serde_json::to_string_pretty(&report)?);
        } else {
            println!(
                "Run {} ({}) finished: {} - read {}, written {}, skipped {}",
                report.id,
                report.pairing,
                report.status,
                report.counts.read,
                report.counts.written,
                report.counts.skipped
            );
            if let Some(error) = &report.error {
                eprintln!("Error: {error}");
            }
        }

        Ok(if report.is_successful() { 0 } else { 1 })
    }

    /// Load the configuration and apply the `--mode` override
    fn resolve_config(&self, config_path: &str) -> crate::domain::Result<CaravanConfig> {
        let mut config = load_config(config_path)?;

        if let Some(mode) = &self.mode {
            config.mode = mode.parse()?;
            config.validate()?;
        }

        Ok(config)
    }
}
