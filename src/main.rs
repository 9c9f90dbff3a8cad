use std::path::PathBuf;

use clap::Parser;

use sum_service::config::{self, ConfigError};
use sum_service::lifecycle::{signals, startup, Shutdown};
use sum_service::observability::logging;

#[derive(Parser)]
#[command(name = "sum-service")]
#[command(about = "HTTP service that sums JSON arrays of numbers", version)]
struct Args {
    /// Path to a TOML config file. Defaults apply when omitted.
    #[arg(short, long, env = "SUM_SERVICE_CONFIG")]
    config: Option<PathBuf>,

    /// Override listener.bind_address (e.g. "127.0.0.1:5000").
    #[arg(short, long, env = "SUM_SERVICE_BIND")]
    bind: Option<String>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let mut config = config::load_or_default(args.config.as_deref())?;
    if let Some(bind) = args.bind {
        config.listener.bind_address = bind;
        config::validate_config(&config).map_err(ConfigError::Validation)?;
    }

    logging::init_logging(&config.observability);

    tracing::info!(
        version = env!("CARGO_PKG_VERSION"),
        bind_address = %config.listener.bind_address,
        max_body_size = config.security.max_body_size,
        request_timeout_secs = config.timeouts.request_secs,
        metrics_enabled = config.observability.metrics_enabled,
        "sum-service starting"
    );

    let shutdown = Shutdown::new();
    signals::spawn_signal_handler(shutdown.clone());

    startup::run(config, shutdown).await?;
    Ok(())
}
