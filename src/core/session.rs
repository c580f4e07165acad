use std::collections::BTreeSet;
use std::time::{Duration, Instant};

use rand::distr::Distribution;
use rand::Rng;

use crate::core::error::BoardError;
use crate::core::grid::Grid;
use crate::core::layout::BoardLayout;
use crate::core::models::{
    BoardMode, DragOutcome, DragSession, InteractionState, LastMove, LastMoveSummary, ReplayTick, TileTag,
};
use crate::core::palette::Palette;
use crate::core::path::step_toward;
use crate::core::replay::ReplayTask;

pub const DEFAULT_MAX_DRAG_STEPS: usize = 80;
pub const DEFAULT_REPLAY_DELAY: Duration = Duration::from_millis(120);
pub const MAX_BOARD_CELLS: i32 = 1 << 16;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SessionSettings {
    /// Upper bound on swaps performed by a single `drag_to`.
    pub max_drag_steps: usize,
    pub replay_delay: Duration,
}

impl Default for SessionSettings {
    fn default() -> Self {
        SessionSettings {
            max_drag_steps: DEFAULT_MAX_DRAG_STEPS,
            replay_delay: DEFAULT_REPLAY_DELAY,
        }
    }
}

#[derive(Clone, Debug)]
enum SessionState {
    Idle,
    Dragging(DragSession),
    Replaying(ReplayTask),
}

/// One board plus everything needed to drag, record, undo and replay on it.
#[derive(Clone, Debug)]
pub struct BoardSession {
    grid: Grid,
    mode: BoardMode,
    pen: TileTag,
    last_move: Option<LastMove>,
    state: SessionState,
    settings: SessionSettings,
}

impl BoardSession {
    pub fn new(width: i32, height: i32, settings: SessionSettings) -> Result<Self, BoardError> {
        check_size(width, height)?;
        Ok(BoardSession {
            grid: Grid::new_with_size(width, height, TileTag::Empty),
            mode: BoardMode::default(),
            pen: TileTag::Fire,
            last_move: None,
            state: SessionState::Idle,
            settings,
        })
    }

    /// Builds a session around an existing grid, mostly for tests and tools.
    pub fn from_grid(grid: Grid, settings: SessionSettings) -> Self {
        BoardSession {
            grid,
            mode: BoardMode::default(),
            pen: TileTag::Fire,
            last_move: None,
            state: SessionState::Idle,
            settings,
        }
    }

    // ----- board setup -----

    pub fn configure(&mut self, width: i32, height: i32) -> Result<(), BoardError> {
        self.ensure_not_replaying()?;
        check_size(width, height)?;
        self.abandon_drag();
        self.grid = Grid::new_with_size(width, height, TileTag::Empty);
        self.clear_last_move();
        tracing::info!(width, height, "board configured");
        Ok(())
    }

    pub fn fill_random<R: Rng + ?Sized>(&mut self, palette: &BTreeSet<TileTag>, rng: &mut R) -> Result<(), BoardError> {
        self.ensure_not_replaying()?;
        let palette = Palette::new(palette)?;
        self.abandon_drag();
        for index in 0..self.grid.len() {
            self.grid.set(index, palette.sample(rng));
        }
        self.clear_last_move();
        tracing::info!(colors = palette.tags().len(), cells = self.grid.len(), "board filled randomly");
        Ok(())
    }

    pub fn clear(&mut self) -> Result<(), BoardError> {
        self.ensure_not_replaying()?;
        self.abandon_drag();
        self.grid.fill(TileTag::Empty);
        self.clear_last_move();
        tracing::info!("board cleared");
        Ok(())
    }

    pub fn set_mode(&mut self, mode: BoardMode) {
        self.mode = mode;
    }

    pub fn set_pen(&mut self, tag: TileTag) {
        self.pen = tag;
    }

    // ----- dragging -----

    pub fn start_drag(&mut self, index: usize) -> Result<(), BoardError> {
        match self.state {
            SessionState::Idle => {}
            SessionState::Dragging(_) => return Err(BoardError::AlreadyDragging),
            SessionState::Replaying(_) => return Err(BoardError::Busy),
        }
        if !self.grid.size().contains_index(index) {
            return Err(BoardError::InvalidCell(index));
        }

        self.state = SessionState::Dragging(DragSession {
            current: index,
            path: vec![index],
            snapshot: self.grid.snapshot(),
        });
        tracing::debug!(index, "drag started");
        Ok(())
    }

    /// Swaps the held tile toward `target` one neighbour at a time. Returns the
    /// number of swaps made.
    pub fn drag_to(&mut self, target: usize) -> Result<usize, BoardError> {
        let bounds = self.grid.size();
        let drag = match &mut self.state {
            SessionState::Dragging(drag) => drag,
            SessionState::Replaying(_) => return Err(BoardError::Busy),
            SessionState::Idle => return Ok(0),
        };
        if target == drag.current || !bounds.contains_index(target) {
            return Ok(0);
        }

        let mut swaps = 0;
        while drag.current != target && swaps < self.settings.max_drag_steps {
            let next = if bounds.is_neighbor(drag.current, target) {
                target
            } else {
                step_toward(&bounds, drag.current, target)
            };
            if !bounds.is_neighbor(drag.current, next) {
                break;
            }

            self.grid.swap(drag.current, next);
            drag.path.push(next);
            drag.current = next;
            swaps += 1;
        }

        if drag.current != target {
            tracing::warn!(current = drag.current, target, swaps, "drag stopped before reaching target");
        } else {
            tracing::debug!(target, swaps, path_len = drag.path.len(), "drag moved");
        }
        Ok(swaps)
    }

    pub fn end_drag(&mut self) -> DragOutcome {
        let drag = match std::mem::replace(&mut self.state, SessionState::Idle) {
            SessionState::Dragging(drag) => drag,
            other => {
                self.state = other;
                return DragOutcome::NotDragging;
            }
        };

        if drag.path.len() >= 2 {
            let steps = drag.path.len() - 1;
            self.last_move = Some(LastMove {
                path: drag.path,
                snapshot: drag.snapshot,
            });
            tracing::info!(steps, "move recorded");
            return DragOutcome::Committed { steps };
        }

        match self.mode {
            BoardMode::Free => {
                let index = drag.origin();
                self.grid.set(index, self.pen);
                self.clear_last_move();
                tracing::debug!(index, tag = ?self.pen, "painted cell");
                DragOutcome::Painted { index, tag: self.pen }
            }
            BoardMode::Random => DragOutcome::Tap,
        }
    }

    // ----- pointer entry points -----

    /// Returns whether a drag started. Points over a gap or off the board are
    /// ignored.
    pub fn pointer_down(&mut self, px: f64, py: f64, layout: &BoardLayout) -> Result<bool, BoardError> {
        self.ensure_not_replaying()?;
        let Some(index) = layout.map_point_to_index(px, py) else {
            return Ok(false);
        };
        if let SessionState::Dragging(_) = self.state {
            // the release of the previous gesture was lost
            self.end_drag();
        }
        self.start_drag(index)?;
        Ok(true)
    }

    pub fn pointer_move(&mut self, px: f64, py: f64, layout: &BoardLayout) -> Result<usize, BoardError> {
        self.ensure_not_replaying()?;
        match layout.map_point_to_index(px, py) {
            Some(index) => self.drag_to(index),
            None => Ok(0),
        }
    }

    pub fn pointer_up(&mut self) -> DragOutcome {
        self.end_drag()
    }

    pub fn pointer_cancel(&mut self) -> DragOutcome {
        self.end_drag()
    }

    // ----- undo and replay -----

    pub fn undo(&mut self) -> Result<(), BoardError> {
        match self.state {
            SessionState::Idle => {}
            SessionState::Dragging(_) => return Err(BoardError::AlreadyDragging),
            SessionState::Replaying(_) => return Err(BoardError::Busy),
        }
        let Some(last_move) = &self.last_move else {
            return Err(BoardError::NothingToUndo);
        };
        self.grid.restore(&last_move.snapshot);
        tracing::info!(steps = last_move.path.len() - 1, "move undone");
        Ok(())
    }

    /// Restores the pre-move board and starts re-enacting the recorded path.
    /// Call `tick` to drive it.
    pub fn replay(&mut self, now: Instant) -> Result<(), BoardError> {
        match self.state {
            SessionState::Idle => {}
            SessionState::Dragging(_) => return Err(BoardError::AlreadyDragging),
            SessionState::Replaying(_) => return Err(BoardError::Busy),
        }
        let Some(last_move) = &self.last_move else {
            return Err(BoardError::NothingToReplay);
        };
        if last_move.path.len() < 2 {
            return Err(BoardError::NothingToReplay);
        }

        self.grid.restore(&last_move.snapshot);
        let task = ReplayTask::new(last_move.path.clone(), self.settings.replay_delay, now);
        tracing::info!(steps = last_move.path.len() - 1, "replay started");
        self.state = SessionState::Replaying(task);
        Ok(())
    }

    pub fn tick(&mut self, now: Instant) -> ReplayTick {
        let bounds = self.grid.size();
        let SessionState::Replaying(task) = &mut self.state else {
            return ReplayTick::Waiting;
        };
        let tick = task.advance(&mut self.grid, &bounds, now);
        if tick == ReplayTick::Finished {
            self.state = SessionState::Idle;
            tracing::info!("replay finished");
        }
        tick
    }

    /// When the running replay next wants a tick.
    pub fn next_due(&self) -> Option<Instant> {
        match &self.state {
            SessionState::Replaying(task) => Some(task.due()),
            _ => None,
        }
    }

    pub fn clear_recorded_move(&mut self) -> Result<(), BoardError> {
        self.ensure_not_replaying()?;
        self.clear_last_move();
        Ok(())
    }

    // ----- queries -----

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn cells(&self) -> &[TileTag] {
        self.grid.cells()
    }

    pub fn mode(&self) -> BoardMode {
        self.mode
    }

    pub fn pen(&self) -> TileTag {
        self.pen
    }

    pub fn settings(&self) -> &SessionSettings {
        &self.settings
    }

    pub fn tag_counts(&self) -> Vec<(TileTag, usize)> {
        TileTag::ALL.iter().map(|&tag| (tag, self.grid.count(tag))).collect()
    }

    pub fn last_move(&self) -> Option<&LastMove> {
        self.last_move.as_ref()
    }

    pub fn last_move_summary(&self) -> Option<LastMoveSummary> {
        self.last_move
            .as_ref()
            .filter(|m| m.path.len() >= 2)
            .map(|m| LastMoveSummary {
                steps: m.path.len() - 1,
            })
    }

    pub fn interaction_state(&self) -> InteractionState {
        match self.state {
            SessionState::Idle => InteractionState::Idle,
            SessionState::Dragging(_) => InteractionState::Dragging,
            SessionState::Replaying(_) => InteractionState::Replaying,
        }
    }

    pub fn is_replaying(&self) -> bool {
        matches!(self.state, SessionState::Replaying(_))
    }

    /// The held cell while dragging, or the last replayed cell.
    pub fn selected_index(&self) -> Option<usize> {
        match &self.state {
            SessionState::Idle => None,
            SessionState::Dragging(drag) => Some(drag.current),
            SessionState::Replaying(task) => Some(task.selected()),
        }
    }

    fn ensure_not_replaying(&self) -> Result<(), BoardError> {
        if self.is_replaying() {
            return Err(BoardError::Busy);
        }
        Ok(())
    }

    fn abandon_drag(&mut self) {
        if let SessionState::Dragging(_) = self.state {
            tracing::debug!("drag abandoned by board change");
            self.state = SessionState::Idle;
        }
    }

    fn clear_last_move(&mut self) {
        if self.last_move.take().is_some() {
            tracing::debug!("recorded move cleared");
        }
    }
}

pub fn check_size(width: i32, height: i32) -> Result<(), BoardError> {
    match width.checked_mul(height) {
        Some(cells) if width > 0 && height > 0 && cells <= MAX_BOARD_CELLS => Ok(()),
        _ => Err(BoardError::InvalidSize { width, height }),
    }
}
