//! Terminal UI for HangDev.

mod app;
mod ui;

pub use app::{Action, App};

use crate::config::HangDevConfig;
use crate::store::FileStore;
use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use hangdev_core::GameSession;
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;
use tracing::{error, info, instrument};

/// Sends logs to the configured file so tracing never draws over the UI.
pub fn init_file_logging(config: &HangDevConfig) -> Result<()> {
    let log_file = std::fs::File::create(config.log_path())?;
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info,hangdev=debug")),
        )
        .with_writer(std::sync::Arc::new(log_file))
        .with_ansi(false)
        .try_init(); // Don't panic if already initialized
    Ok(())
}

/// Runs the interactive game until the user quits.
pub fn run_tui(session: GameSession<FileStore, rand::rngs::StdRng>) -> Result<()> {
    info!("Starting HangDev TUI");

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new(session);
    let res = app
        .activate()
        .map_err(anyhow::Error::from)
        .and_then(|()| run_loop(&mut terminal, &mut app));
    app.deactivate();

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        error!(error = ?err, "Game loop error");
        return Err(err);
    }

    Ok(())
}

/// Draw, wait for a key, apply it.
#[instrument(skip_all)]
fn run_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App<FileStore>,
) -> Result<()> {
    while !app.should_quit() {
        terminal.draw(|f| ui::draw(f, app))?;

        if let Event::Key(key) = event::read()?
            && key.kind == KeyEventKind::Press
        {
            app.apply(Action::from_key(key));
        }
    }
    Ok(())
}
