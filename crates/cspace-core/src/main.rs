use anyhow::Context;
use clap::Parser;
use cspace_core::{run_threshold, Args, Config};
use tracing_subscriber::EnvFilter;

fn init_tracing(log_level: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));
    // stdout carries the JSON report
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let (config, load_err) = match &args.config {
        Some(path) => (Config::from_file(path)?, None),
        None => match Config::load_default() {
            Ok(cfg) => (cfg, None),
            Err(e) => (Config::default(), Some(e)),
        },
    };

    init_tracing(&config.system.log_level);
    if let Some(e) = load_err {
        tracing::warn!(error = %e, "Using default configuration");
    }

    let report = run_threshold(&args, &config)?;
    let json = serde_json::to_string_pretty(&report).context("failed to serialize report")?;
    println!("{json}");

    Ok(())
}
