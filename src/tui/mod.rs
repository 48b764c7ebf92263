//! Terminal UI for the fact guessing game.

mod app;
mod input;
mod ui;

pub use app::{App, AppAction};
pub use input::{Command, Focus, command_for};

use crate::provider::FactProvider;
use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io::{self, Stdout};
use tokio::time::{Duration, sleep};
use tracing::{error, info, instrument};

type Term = Terminal<CrosstermBackend<Stdout>>;

/// Runs the game in the terminal until the player quits.
///
/// `provider` supplies round facts; `trivia` fills the random trivia panel.
/// The terminal is restored even when the game loop fails.
pub async fn run_tui(provider: FactProvider, trivia: FactProvider) -> Result<()> {
    info!(sources = provider.len(), trivia_sources = trivia.len(), "Starting terminal UI");

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let mut terminal = Terminal::new(CrosstermBackend::new(stdout))?;

    let mut app = App::new();
    let res = run_game_loop(&mut terminal, &mut app, &provider, &trivia).await;

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = &res {
        error!(error = ?err, "Game loop error");
    }
    info!(rounds = app.engine().history().len(), "Terminal UI closed");
    res
}

#[instrument(skip_all)]
async fn run_game_loop(
    terminal: &mut Term,
    app: &mut App,
    provider: &FactProvider,
    trivia: &FactProvider,
) -> Result<()> {
    refresh_trivia(terminal, app, trivia).await?;

    loop {
        terminal.draw(|f| ui::draw(f, app))?;

        // Poll with a short timeout to keep the loop responsive.
        if event::poll(Duration::from_millis(100))?
            && let Event::Key(key) = event::read()?
        {
            // Skip key release events (crossterm fires both press and release).
            if key.kind == KeyEventKind::Release {
                continue;
            }

            match app.handle_key(key) {
                AppAction::Continue => {}
                AppAction::NewRound => {
                    app.set_status("Fetching a fact...");
                    terminal.draw(|f| ui::draw(f, app))?;
                    let fact = provider.get_fact().await;
                    app.start_round(fact);
                }
                AppAction::RefreshTrivia => refresh_trivia(terminal, app, trivia).await?,
                AppAction::Quit => {
                    info!("Player quit");
                    return Ok(());
                }
            }
        }

        sleep(Duration::from_millis(10)).await;
    }
}

async fn refresh_trivia(terminal: &mut Term, app: &mut App, trivia: &FactProvider) -> Result<()> {
    app.set_status("Fetching trivia...");
    terminal.draw(|f| ui::draw(f, app))?;
    let fact = trivia.get_fact().await;
    app.set_trivia(fact);
    Ok(())
}
