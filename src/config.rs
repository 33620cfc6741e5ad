use anyhow::{Context, Result};
use serde::Deserialize;
use std::{fs, path::Path};

/// Default gateway endpoint template; `{api_key}` is substituted at
/// client construction time.
pub const DEFAULT_ENDPOINT: &str =
    "https://gateway.thegraph.com/api/{api_key}/subgraphs/id/3dXmKyXy4qyWh1wMiDfV14JtkFfvLkpEsZBMCLzvUa5r";

#[derive(Debug, Clone, Deserialize)]
pub struct SubgraphCfg {
    pub endpoint: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ChainCfg {
    pub id: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct OutputCfg {
    pub path: Option<String>,
    pub report: Option<bool>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub subgraph: SubgraphCfg,
    pub chain: ChainCfg,
    pub output: Option<OutputCfg>,
}

impl Config {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let s = fs::read_to_string(path.as_ref())?;
        let cfg: Self = toml::from_str(&s).context("parse Config.toml")?;
        Ok(cfg)
    }
}
