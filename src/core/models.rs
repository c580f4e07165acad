use serde::Deserialize;

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TileTag {
    Fire,
    Water,
    Wood,
    Dark,
    Light,
    Heal,
    Empty,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Vec2 {
    pub x: i32,
    pub y: i32,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BoardMode {
    /// Taps do nothing; the board is regenerated from the palette.
    #[default]
    Random,
    /// Taps paint the pen tag onto the tapped cell.
    Free,
}

/// Coarse state exposed to renderers.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InteractionState {
    Idle,
    Dragging,
    Replaying,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DragSession {
    pub current: usize,
    pub path: Vec<usize>,
    pub snapshot: Vec<TileTag>,
}

impl DragSession {
    pub fn origin(&self) -> usize {
        self.path[0]
    }
}

/// The single retained drag: visited cells plus the board right before it began.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LastMove {
    pub path: Vec<usize>,
    pub snapshot: Vec<TileTag>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LastMoveSummary {
    pub steps: usize,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DragOutcome {
    /// At least one swap happened and the move was recorded.
    Committed { steps: usize },
    /// Free mode tap: the pen tag was written at `index`.
    Painted { index: usize, tag: TileTag },
    /// Random mode tap, nothing changed.
    Tap,
    NotDragging,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ReplayTick {
    /// Nothing due yet, or no replay running.
    Waiting,
    Stepped { index: usize },
    Finished,
}
