use clap::Parser;
use std::path::PathBuf;
use url_shortener::{config, server, telemetry};

/// URL shortener HTTP service.
#[derive(Parser)]
#[command(name = "url-shortener")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Path to the YAML config file
    #[arg(short, long, env = "CONFIG_PATH", default_value = config::DEFAULT_CONFIG_PATH)]
    config: PathBuf,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let config = config::load(&cli.config)?;

    telemetry::init(&config.log_level, &config.log_format)?;
    config.print_summary();

    if let Err(e) = server::run(config).await {
        tracing::error!("{:#}", e);
        return Err(e);
    }

    Ok(())
}
