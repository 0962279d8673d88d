use anyhow::Context;
use clap::Parser;
use movie_info::config::{Config, CredentialStatus, API_KEY_ENV};
use movie_info::logging::init_tracing;
use movie_info::omdb::OmdbClient;
use std::path::PathBuf;
use std::sync::Arc;

/// Pick a movie from a list and look up its details on OMDb.
#[derive(Debug, Parser)]
#[command(name = "movie-info", version, about)]
struct Cli {
    /// Path to the config file (default: <config dir>/movie-info/config.toml).
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// OMDb API key. Overrides the environment and the config file.
    #[arg(long, value_name = "KEY")]
    api_key: Option<String>,

    /// Write logs to this file prefix. Overrides `logging.file`.
    #[arg(long, value_name = "PATH")]
    log_file: Option<PathBuf>,

    /// Log filter, e.g. "debug" or "movie_info=trace". Overrides `logging.level`.
    #[arg(long, value_name = "FILTER")]
    log_level: Option<String>,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config_path = cli.config.clone().unwrap_or_else(Config::config_path);
    let config = Config::load_from(&config_path)
        .with_context(|| format!("loading {}", config_path.display()))?;

    let log_file = cli.log_file.clone().or_else(|| config.logging.file.clone());
    let log_level = cli
        .log_level
        .clone()
        .unwrap_or_else(|| config.logging.level.clone());
    init_tracing(log_file.as_deref(), &log_level)
        .with_context(|| format!("invalid log level '{}'", log_level))?;

    let env_key = std::env::var(API_KEY_ENV).ok();
    let api_key = match config
        .api
        .resolve_credential(cli.api_key.as_deref(), env_key.as_deref())
    {
        CredentialStatus::Configured(key) => key,
        CredentialStatus::Unconfigured { reason } => anyhow::bail!(reason),
    };

    let client = OmdbClient::new(&config.api, api_key)?;
    tracing::info!(
        config = %config_path.display(),
        base_url = %client.base_url(),
        "Starting movie-info"
    );

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .context("starting async runtime")?;

    let result = movie_info::ui::runtime::run(&config, Arc::new(client), runtime.handle());
    runtime.shutdown_background();
    result
}
