use anyhow::Result;
use clap::Parser;

use pooltags::app;
use pooltags::config::{self, DEFAULT_ENDPOINT};

#[derive(Parser, Debug)]
#[command(version, about = "Velodrome pool tag generator for address registries")]
struct Args {
    /// Chain id to generate tags for
    #[arg(long, default_value = "10")]
    chain_id: String,

    /// The Graph gateway API key (falls back to the GRAPH_API_KEY env var)
    #[arg(long)]
    api_key: Option<String>,

    /// Subgraph endpoint template; {api_key} is substituted
    #[arg(long)]
    endpoint: Option<String>,

    /// Write tags to this file instead of stdout
    #[arg(long)]
    output: Option<String>,

    /// Wrap the tag array in a run report with metadata
    #[arg(long)]
    report: bool,

    /// Path to config file (optional)
    #[arg(long)]
    config: Option<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt().with_env_filter("info").init();
    let args = Args::parse();

    let api_key = args
        .api_key
        .or_else(|| std::env::var("GRAPH_API_KEY").ok())
        .unwrap_or_default();

    // CLI args > config file > defaults
    let app_cfg = if let Some(config_path) = &args.config {
        let cfg = config::Config::from_file(config_path)?;
        let mut app_cfg = app::AppCfg::from_config(cfg, api_key)?;

        if args.chain_id != "10" {
            app_cfg.chain_id = args.chain_id;
        }
        if let Some(endpoint) = args.endpoint {
            app_cfg.endpoint = endpoint;
        }
        if let Some(output) = args.output {
            app_cfg.output_path = Some(output);
        }
        if args.report {
            app_cfg.report = true;
        }

        app_cfg
    } else {
        let endpoint = args.endpoint.unwrap_or_else(|| DEFAULT_ENDPOINT.to_string());
        app::AppCfg::from_cli_args(args.chain_id, api_key, endpoint, args.output, args.report)?
    };

    app::run(app_cfg).await
}
