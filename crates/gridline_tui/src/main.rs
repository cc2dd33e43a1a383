//! Gridline terminal UI.
//!
//! Presentation layer over the game engine: translates key and mouse
//! events into cell coordinates, feeds them to the engine, and renders
//! the board and outcome back to the terminal.

#![warn(missing_docs)]

mod app;
mod cli;
mod input;
mod ui;

use anyhow::Result;
use app::App;
use clap::Parser;
use cli::Cli;
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, MouseButton, MouseEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use gridline_core::{GameConfig, GameEngine, GameMode, OpponentStrategy};
use ratatui::{backend::CrosstermBackend, layout::Rect, Terminal};
use std::io;
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();
    let config = resolve_config(&cli)?;
    let engine = match cli.seed {
        Some(seed) => GameEngine::with_strategy(OpponentStrategy::seeded(seed)),
        None => GameEngine::new(),
    };

    info!("Starting gridline TUI");

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let app = App::new(config, engine);
    let res = run_app(&mut terminal, app);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen, DisableMouseCapture)?;
    terminal.show_cursor()?;

    res
}

/// Builds the game configuration from an optional file plus CLI flags.
fn resolve_config(cli: &Cli) -> Result<GameConfig> {
    let base = match &cli.config {
        Some(path) => GameConfig::from_file(path)?,
        None => GameConfig::default(),
    };
    let mode = cli.mode.map(GameMode::from).unwrap_or(*base.mode());
    let config = GameConfig::new(
        mode,
        cli.width.unwrap_or(*base.width()),
        cli.height.unwrap_or(*base.height()),
        cli.win_length.unwrap_or(*base.win_length()),
    )?;
    Ok(config)
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, mut app: App) -> Result<()>
where
    <B as ratatui::backend::Backend>::Error: Send + Sync + 'static,
{
    loop {
        terminal.draw(|f| ui::draw(f, &app))?;

        if !event::poll(std::time::Duration::from_millis(100))? {
            continue;
        }
        match event::read()? {
            Event::Key(key) => match key.code {
                KeyCode::Char('q') | KeyCode::Esc => return Ok(()),
                KeyCode::Char('r') => app.restart(),
                KeyCode::Enter | KeyCode::Char(' ') => app.place_at_cursor(),
                code => app.handle_cursor_key(code),
            },
            Event::Mouse(mouse) => {
                if let MouseEventKind::Down(MouseButton::Left) = mouse.kind {
                    let Some((width, height)) =
                        app.engine().board().map(|b| (b.width(), b.height()))
                    else {
                        continue;
                    };
                    let size = terminal.size()?;
                    let (board_area, _) = ui::split(Rect::new(0, 0, size.width, size.height));
                    if let Some((x, y)) =
                        ui::cell_at(board_area, width, height, mouse.column, mouse.row)
                    {
                        app.place(x, y);
                    }
                }
            }
            _ => {}
        }
    }
}
