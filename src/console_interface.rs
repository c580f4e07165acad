use crate::app::{App, BoardCommand, PointerEvent, PointerKind, SIZE_PRESETS};
use crate::core::{BoardMode, Grid, InteractionState, TileTag};
use crossterm::event::{
    self, DisableFocusChange, DisableMouseCapture, EnableFocusChange, EnableMouseCapture, Event, KeyCode, KeyEvent,
    KeyEventKind, MouseButton, MouseEvent, MouseEventKind,
};
use rand::Rng;
use ratatui::{
    Terminal,
    backend::CrosstermBackend,
    layout::{Constraint, Direction as LayoutDirection, Layout, Position, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};
use std::io;
use std::time::Duration;

/// Terminal columns per layout unit; one row is one unit.
pub const COLUMNS_PER_UNIT: u16 = 2;
pub const POLL_INTERVAL: Duration = Duration::from_millis(50);

pub fn parse_board(s: &str) -> Grid {
    let rows: Vec<Vec<TileTag>> = s
        .lines()
        .map(|line| line.trim())
        .filter(|line| !line.is_empty())
        .map(|line| {
            line.chars()
                .map(|ch| TileTag::from_symbol(ch).unwrap_or(TileTag::Empty))
                .collect()
        })
        .collect();
    let width = rows.iter().map(|row| row.len()).max().unwrap_or(0);

    // Short rows are padded with empty cells
    let mut grid = Grid::new_with_size(width as i32, rows.len() as i32, TileTag::Empty);
    for (y, row) in rows.iter().enumerate() {
        for (x, &tag) in row.iter().enumerate() {
            grid.set(y * width + x, tag);
        }
    }
    grid
}

pub fn render_board_to_string(grid: &Grid) -> String {
    let mut result = String::new();
    for row in grid.cells().chunks(grid.width().max(1) as usize) {
        for tag in row {
            result.push(tag.symbol());
        }
        result.push('\n');
    }
    result
}

pub fn setup_terminal() -> Result<Terminal<CrosstermBackend<io::Stdout>>, Box<dyn std::error::Error>> {
    crossterm::terminal::enable_raw_mode()?;
    crossterm::execute!(
        io::stdout(),
        crossterm::terminal::EnterAlternateScreen,
        EnableMouseCapture,
        EnableFocusChange
    )?;
    let backend = CrosstermBackend::new(io::stdout());
    let terminal = Terminal::new(backend)?;
    Ok(terminal)
}

pub fn cleanup_terminal() -> Result<(), Box<dyn std::error::Error>> {
    crossterm::terminal::disable_raw_mode()?;
    crossterm::execute!(
        io::stdout(),
        DisableFocusChange,
        DisableMouseCapture,
        crossterm::terminal::LeaveAlternateScreen
    )?;
    Ok(())
}

fn tag_color(tag: TileTag) -> Color {
    let rgb = tag.rgb();
    Color::Rgb((rgb >> 16) as u8, (rgb >> 8) as u8, rgb as u8)
}

/// Styled lines for the board. Each cell is `cell_size` rows by
/// `cell_size * COLUMNS_PER_UNIT` columns, with the gap blank.
pub fn board_lines(grid: &Grid, cell_size: u16, gap: u16, selected: Option<usize>) -> Vec<Line<'static>> {
    let cell_cols = (cell_size * COLUMNS_PER_UNIT) as usize;
    let gap_cols = (gap * COLUMNS_PER_UNIT) as usize;
    let width = grid.width().max(0) as usize;
    let mut lines = Vec::new();

    for y in 0..grid.height().max(0) as usize {
        for cell_row in 0..cell_size {
            let mut spans = Vec::new();
            for x in 0..width {
                let index = y * width + x;
                let tag = grid.cells()[index];
                let mut text = String::with_capacity(cell_cols);
                if cell_row == 0 {
                    text.push(tag.symbol());
                    text.push_str(&" ".repeat(cell_cols.saturating_sub(1)));
                } else {
                    text.push_str(&" ".repeat(cell_cols));
                }
                let style = if selected == Some(index) {
                    Style::default()
                        .bg(Color::White)
                        .fg(tag_color(tag))
                        .add_modifier(Modifier::BOLD)
                } else {
                    Style::default().bg(tag_color(tag)).fg(Color::Black)
                };
                spans.push(Span::styled(text, style));
                if x + 1 < width {
                    spans.push(Span::raw(" ".repeat(gap_cols)));
                }
            }
            lines.push(Line::from(spans));
        }
        if y + 1 < grid.height() as usize {
            for _ in 0..gap {
                lines.push(Line::raw(""));
            }
        }
    }
    lines
}

/// Draws the whole screen and returns the top-left corner of the board cells.
pub fn render_app<R: Rng>(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &App<R>,
    cell_size: u16,
    gap: u16,
) -> Result<Position, Box<dyn std::error::Error>> {
    let mut board_origin = Position::new(0, 0);
    terminal.draw(|f| {
        let chunks = Layout::default()
            .direction(LayoutDirection::Vertical)
            .constraints([
                Constraint::Min(0),
                Constraint::Length(3),
                Constraint::Length(3),
                Constraint::Length(3),
            ])
            .split(f.area());

        // Board area
        let session = &app.session;
        let replaying = session.interaction_state() == InteractionState::Replaying;
        let (title, border_style) = if replaying {
            ("Board (replaying)", Style::default().fg(Color::Yellow))
        } else {
            ("Board", Style::default().fg(Color::White))
        };
        let block = Block::default()
            .borders(Borders::ALL)
            .title(title)
            .border_style(border_style);
        let inner: Rect = block.inner(chunks[0]);
        board_origin = Position::new(inner.x, inner.y);
        let board = Paragraph::new(board_lines(session.grid(), cell_size, gap, session.selected_index())).block(block);
        f.render_widget(board, chunks[0]);

        // Stats and recorded move
        let status = format!("{}   |   {}", app.stats(), app.move_info());
        let status_paragraph = Paragraph::new(status)
            .block(Block::default().borders(Borders::ALL).title("Stats"))
            .style(Style::default().fg(Color::White));
        f.render_widget(status_paragraph, chunks[1]);

        // Mode, pen and palette
        let mode = match session.mode() {
            BoardMode::Random => "random",
            BoardMode::Free => "free",
        };
        let mut spans = vec![
            Span::raw(format!("Mode: {}  Pen: ", mode)),
            Span::styled(session.pen().label(), Style::default().fg(tag_color(session.pen()))),
            Span::raw("  Palette:"),
        ];
        for (i, tag) in TileTag::COLORS.iter().enumerate() {
            let mark = if app.palette.contains(tag) { 'x' } else { ' ' };
            spans.push(Span::raw(format!(" F{}[{}]", i + 1, mark)));
            spans.push(Span::styled(tag.label(), Style::default().fg(tag_color(*tag))));
        }
        let controls = Paragraph::new(Line::from(spans)).block(Block::default().borders(Borders::ALL).title("Settings"));
        f.render_widget(controls, chunks[2]);

        // Instructions
        let instructions = "Drag: move | 1/2/3: 7x6 6x5 5x4 | r/e: random/free | c: clear | u: undo | p: replay | x: forget move | Tab: pen | q: quit";
        let instructions = if let Some(note) = &app.notification {
            format!("{} | {}", note, instructions)
        } else {
            instructions.to_string()
        };
        let instruction_paragraph = Paragraph::new(instructions)
            .block(Block::default().borders(Borders::ALL).title("Instructions"))
            .style(Style::default().fg(Color::Cyan));
        f.render_widget(instruction_paragraph, chunks[3]);
    })?;
    Ok(board_origin)
}

pub enum ConsoleInput {
    Command(BoardCommand),
    Pointer(PointerEvent),
    Quit,
    Timeout,
    Unknown,
}

/// Converts a terminal cell to board-local layout units, sampling the centre
/// of the character.
pub fn terminal_to_board_point(origin: Position, column: u16, row: u16) -> (f64, f64) {
    let dx = column as f64 - origin.x as f64;
    let dy = row as f64 - origin.y as f64;
    ((dx + 0.5) / COLUMNS_PER_UNIT as f64, dy + 0.5)
}

pub fn handle_input(timeout: Duration, board_origin: Position) -> Result<ConsoleInput, Box<dyn std::error::Error>> {
    if !event::poll(timeout)? {
        return Ok(ConsoleInput::Timeout);
    }
    Ok(match event::read()? {
        Event::Key(KeyEvent {
            code,
            kind: KeyEventKind::Press,
            ..
        }) => key_to_input(code),
        Event::Mouse(MouseEvent { kind, column, row, .. }) => {
            let kind = match kind {
                MouseEventKind::Down(MouseButton::Left) => PointerKind::Down,
                MouseEventKind::Drag(MouseButton::Left) => PointerKind::Move,
                MouseEventKind::Up(MouseButton::Left) => PointerKind::Up,
                _ => return Ok(ConsoleInput::Unknown),
            };
            let (x, y) = terminal_to_board_point(board_origin, column, row);
            ConsoleInput::Pointer(PointerEvent { kind, x, y })
        }
        Event::FocusLost => ConsoleInput::Pointer(PointerEvent {
            kind: PointerKind::Cancel,
            x: 0.0,
            y: 0.0,
        }),
        _ => ConsoleInput::Unknown,
    })
}

pub fn key_to_input(code: KeyCode) -> ConsoleInput {
    let command = match code {
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => return ConsoleInput::Quit,
        KeyCode::Char(ch @ '1'..='3') => {
            let (width, height) = SIZE_PRESETS[(ch as u8 - b'1') as usize];
            BoardCommand::Resize { width, height }
        }
        KeyCode::Char('r') | KeyCode::Char('R') => BoardCommand::SelectMode(BoardMode::Random),
        KeyCode::Char('e') | KeyCode::Char('E') => BoardCommand::SelectMode(BoardMode::Free),
        KeyCode::Char('c') | KeyCode::Char('C') => BoardCommand::Clear,
        KeyCode::Char('u') | KeyCode::Char('U') => BoardCommand::Undo,
        KeyCode::Char('p') | KeyCode::Char('P') => BoardCommand::Replay,
        KeyCode::Char('x') | KeyCode::Char('X') => BoardCommand::ClearRecordedMove,
        KeyCode::Tab => BoardCommand::NextPen,
        KeyCode::BackTab => BoardCommand::PreviousPen,
        KeyCode::F(n @ 1..=6) => BoardCommand::TogglePalette(TileTag::COLORS[(n - 1) as usize]),
        _ => return ConsoleInput::Unknown,
    };
    ConsoleInput::Command(command)
}
