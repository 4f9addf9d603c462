use anyhow::{Context, Result};
use clap::Parser;
use premium_core::tracing_setup::init_tracing;
use premium_core::PremiumConfig;
use tracing::info;

use premium_cli::{Cli, Commands, InteractiveCommand};

fn main() -> Result<()> {
    init_tracing();

    let cli = Cli::parse();
    let config = PremiumConfig::load(&cli.global.config_root, Some(&cli.global.overrides()))
        .context("failed to load configuration")?;
    info!(endpoint = %config.client.endpoint(), "premium starting");

    let ok = match cli.command {
        Some(Commands::Predict(cmd)) => cmd.run(&config)?,
        Some(Commands::Interactive(cmd)) => cmd.run(&config)?,
        None => InteractiveCommand::default().run(&config)?,
    };

    if !ok {
        std::process::exit(1);
    }
    Ok(())
}
