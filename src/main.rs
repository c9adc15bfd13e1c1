//! HangDev - unified CLI
//!
//! Interactive terminal play plus one-shot commands on the saved game.

#![warn(missing_docs)]

mod cli;

use anyhow::Result;
use clap::Parser;
use cli::{Cli, Command};
use hangdev::{HangDevConfig, commands};
use tracing::{info, instrument};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    // The UI installs its own file logger; everything else logs to stderr.
    if !matches!(cli.command, Command::Play) {
        initialize_tracing();
    }

    let mut config = HangDevConfig::load_or_default(&cli.config)?;
    if let Some(store) = cli.store {
        config = config.with_store_path(store);
    }

    match cli.command {
        Command::Play => run_play(&config),
        Command::Guess { letter } => {
            let mut session = commands::open_session(&config)?;
            println!("{}", commands::guess(&mut session, &letter)?);
            Ok(())
        }
        Command::New => {
            let mut session = commands::open_session(&config)?;
            println!("{}", commands::new_game(&mut session));
            Ok(())
        }
        Command::Status => {
            let session = commands::open_session(&config)?;
            println!("{}", commands::status(&session));
            Ok(())
        }
    }
}

/// Run the interactive UI
#[instrument(skip_all)]
fn run_play(config: &HangDevConfig) -> Result<()> {
    hangdev::tui::init_file_logging(config)?;
    let session = commands::open_session(config)?;
    hangdev::tui::run_tui(session)
}

fn initialize_tracing() {
    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warn,hangdev=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    info!("Tracing initialized");
}
