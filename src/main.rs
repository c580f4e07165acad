// Drop board editor in the terminal.
// Drag tiles with the left mouse button; every drag is recorded and can be undone or replayed.
// Usage: drop_board [config.json]

use drop_board::app::App;
use drop_board::config::BoardConfig;
use drop_board::console_interface::ConsoleInput::*;
use drop_board::console_interface::{POLL_INTERVAL, cleanup_terminal, handle_input, render_app, setup_terminal};
use drop_board::core::ReplayTick;
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;
use std::io;
use std::path::PathBuf;
use std::sync::Mutex;
use std::time::Instant;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config_path = std::env::args().nth(1).map(PathBuf::from);
    let config = BoardConfig::load(config_path.as_deref())?;

    let log_out = std::fs::OpenOptions::new()
        .write(true)
        .truncate(true)
        .create(true)
        .open(&config.log_file)?;
    tracing_subscriber::fmt()
        .with_writer(Mutex::new(log_out))
        .with_ansi(false)
        .with_max_level(config.tracing_level()?)
        .init();
    tracing::info!(?config_path, width = config.width, height = config.height, "starting drop board");

    let mut app = App::new(config.clone(), rand::rng())?;
    let mut terminal = setup_terminal()?;
    let result = run_interactive(&mut app, &config, &mut terminal);
    cleanup_terminal()?;
    result
}

fn run_interactive<R: rand::Rng>(
    app: &mut App<R>,
    config: &BoardConfig,
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut board_origin = render_app(terminal, app, config.cell_size, config.gap)?;

    loop {
        // Wake up in time for the next replay step
        let timeout = match app.session.next_due() {
            Some(due) => due.saturating_duration_since(Instant::now()).min(POLL_INTERVAL),
            None => POLL_INTERVAL,
        };

        let redraw = match handle_input(timeout, board_origin)? {
            Quit => break,
            Command(command) => {
                app.apply(command, Instant::now());
                true
            }
            Pointer(event) => {
                app.pointer(event);
                true
            }
            Timeout | Unknown => false,
        };

        let ticked = app.tick(Instant::now()) != ReplayTick::Waiting;
        if redraw || ticked {
            board_origin = render_app(terminal, app, config.cell_size, config.gap)?;
        }
    }

    tracing::info!("quitting");
    Ok(())
}
