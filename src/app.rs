use std::collections::BTreeSet;
use std::time::Instant;

use rand::Rng;

use crate::config::BoardConfig;
use crate::core::{BoardError, BoardLayout, BoardMode, BoardSession, DragOutcome, ReplayTick, TileTag};

pub const SIZE_PRESETS: [(i32, i32); 3] = [(7, 6), (6, 5), (5, 4)];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BoardCommand {
    Resize { width: i32, height: i32 },
    SelectMode(BoardMode),
    Clear,
    Undo,
    Replay,
    ClearRecordedMove,
    TogglePalette(TileTag),
    NextPen,
    PreviousPen,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PointerKind {
    Down,
    Move,
    Up,
    Cancel,
}

/// A pointer event already converted to board-local layout units.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PointerEvent {
    pub kind: PointerKind,
    pub x: f64,
    pub y: f64,
}

/// Everything the front end owns around a board session: palette
/// checkboxes, notifications and the random source.
pub struct App<R: Rng> {
    pub session: BoardSession,
    pub palette: BTreeSet<TileTag>,
    pub notification: Option<String>,
    config: BoardConfig,
    rng: R,
}

impl<R: Rng> App<R> {
    pub fn new(config: BoardConfig, rng: R) -> Result<Self, BoardError> {
        let mut session = BoardSession::new(config.width, config.height, config.session_settings())?;
        session.set_mode(config.mode);
        session.set_pen(config.pen);

        let mut app = App {
            session,
            palette: config.palette.clone(),
            notification: None,
            config,
            rng,
        };
        if app.session.mode() == BoardMode::Random {
            app.fill_random();
        }
        Ok(app)
    }

    pub fn layout(&self) -> BoardLayout {
        let grid = self.session.grid();
        self.config.layout(grid.width(), grid.height())
    }

    pub fn apply(&mut self, command: BoardCommand, now: Instant) {
        let result = match command {
            BoardCommand::Resize { width, height } => self.session.configure(width, height).map(|()| {
                if self.session.mode() == BoardMode::Random {
                    self.fill_random();
                }
            }),
            BoardCommand::SelectMode(mode) => {
                self.session.set_mode(mode);
                if mode == BoardMode::Random {
                    self.fill_random();
                }
                Ok(())
            }
            BoardCommand::Clear => self.session.clear(),
            BoardCommand::Undo => self.session.undo(),
            BoardCommand::Replay => self.session.replay(now),
            BoardCommand::ClearRecordedMove => self.session.clear_recorded_move().map(|()| {
                self.notification = Some("Recorded move cleared.".to_string());
            }),
            BoardCommand::TogglePalette(tag) => {
                if tag != TileTag::Empty && !self.palette.remove(&tag) {
                    self.palette.insert(tag);
                }
                Ok(())
            }
            BoardCommand::NextPen => {
                self.session.set_pen(self.session.pen().next());
                Ok(())
            }
            BoardCommand::PreviousPen => {
                self.session.set_pen(self.session.pen().previous());
                Ok(())
            }
        };
        if let Err(err) = result {
            self.notify(err);
        }
    }

    /// Pointer input during a replay is dropped silently.
    pub fn pointer(&mut self, event: PointerEvent) {
        let layout = self.layout();
        let result = match event.kind {
            PointerKind::Down => self.session.pointer_down(event.x, event.y, &layout).map(|_| ()),
            PointerKind::Move => self.session.pointer_move(event.x, event.y, &layout).map(|_| ()),
            PointerKind::Up | PointerKind::Cancel => {
                let outcome = if event.kind == PointerKind::Up {
                    self.session.pointer_up()
                } else {
                    self.session.pointer_cancel()
                };
                if let DragOutcome::Committed { .. } | DragOutcome::Painted { .. } = outcome {
                    self.notification = None;
                }
                Ok(())
            }
        };
        match result {
            Ok(()) => {}
            Err(BoardError::Busy) => tracing::debug!(?event, "pointer ignored during replay"),
            Err(err) => self.notify(err),
        }
    }

    pub fn tick(&mut self, now: Instant) -> ReplayTick {
        self.session.tick(now)
    }

    pub fn move_info(&self) -> String {
        match self.session.last_move_summary() {
            Some(summary) => format!("Move: {} step", summary.steps),
            None => "Move: none (drag to record)".to_string(),
        }
    }

    /// Counts of the six colours, e.g. `火:5  水:4`.
    pub fn stats(&self) -> String {
        self.session
            .tag_counts()
            .into_iter()
            .filter(|(tag, _)| *tag != TileTag::Empty)
            .map(|(tag, count)| format!("{}:{}", tag.label(), count))
            .collect::<Vec<_>>()
            .join("  ")
    }

    fn fill_random(&mut self) {
        if let Err(err) = self.session.fill_random(&self.palette, &mut self.rng) {
            self.notify(err);
        }
    }

    fn notify(&mut self, err: BoardError) {
        tracing::info!(error = %err, "operation rejected");
        self.notification = Some(err.to_string());
    }
}
