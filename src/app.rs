// src/app.rs
use anyhow::{Context, Result};
use std::fs;
use tracing::info;

use crate::application::services::generate_chain_tags;
use crate::config::{Config, OutputCfg};
use crate::report::TagReport;

#[derive(Debug, Clone)]
pub struct AppCfg {
    pub chain_id: String,
    pub api_key: String,
    pub endpoint: String,
    /// Output file; stdout when absent.
    pub output_path: Option<String>,
    /// Wrap the tag array in a run report.
    pub report: bool,
}

impl AppCfg {
    pub fn from_config(cfg: Config, api_key: String) -> Result<Self> {
        let output = cfg.output.unwrap_or(OutputCfg {
            path: None,
            report: None,
        });

        Ok(Self {
            chain_id: cfg.chain.id,
            api_key,
            endpoint: cfg.subgraph.endpoint,
            output_path: output.path,
            report: output.report.unwrap_or(false),
        })
    }

    pub fn from_cli_args(
        chain_id: String,
        api_key: String,
        endpoint: String,
        output_path: Option<String>,
        report: bool,
    ) -> Result<Self> {
        Ok(Self {
            chain_id,
            api_key,
            endpoint,
            output_path,
            report,
        })
    }
}

pub async fn run(app_cfg: AppCfg) -> Result<()> {
    info!("Starting Velodrome pool tag generator");
    info!("Chain: {}", app_cfg.chain_id);

    let tags = generate_chain_tags(&app_cfg.chain_id, &app_cfg.api_key, &app_cfg.endpoint)
        .await
        .context("tag generation failed")?;

    info!("Generated {} pool tags", tags.len());

    let json = if app_cfg.report {
        serde_json::to_string_pretty(&TagReport::new(&app_cfg.chain_id, tags))?
    } else {
        serde_json::to_string_pretty(&tags)?
    };

    match &app_cfg.output_path {
        Some(path) => {
            fs::write(path, &json).with_context(|| format!("write tags to {}", path))?;
            info!("Wrote tags to {}", path);
        }
        None => println!("{}", json),
    }

    Ok(())
}
