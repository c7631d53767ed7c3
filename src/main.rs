use std::sync::Arc;

use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use tribune::app::AppContext;
use tribune::cli::{commands, Cli, Commands};
use tribune::config::Config;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();
    let config = Config::load()?;
    let ctx = AppContext::new(config);

    match cli.command {
        Some(Commands::List { feed }) => {
            commands::list_feed(&ctx, &feed).await?;
        }
        Some(Commands::Tui) | None => {
            tribune::tui::run(Arc::new(ctx)).await?;
        }
    }

    Ok(())
}
