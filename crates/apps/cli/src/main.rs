use app_state::load_app_settings_from;
use clap::Parser;
use color_eyre::Result;
use immich_cli::cli::Cli;
use immich_cli::commands::{apply_overrides, run};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;
    let cli = Cli::parse();
    let settings = apply_overrides(load_app_settings_from(&cli.config)?, &cli);

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| settings.logging.level.as_str().into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    run(cli, settings).await
}
