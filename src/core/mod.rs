mod bounds;
mod error;
mod grid;
mod layout;
mod models;
mod palette;
mod path;
mod replay;
mod session;

pub use bounds::BoundsOriginRoot;
pub use error::BoardError;
pub use grid::Grid;
pub use layout::BoardLayout;
pub use models::{
    BoardMode, DragOutcome, DragSession, InteractionState, LastMove, LastMoveSummary, ReplayTick, TileTag, Vec2,
};
pub use palette::Palette;
pub use path::{is_connected_path, manhattan_distance, step_toward};
pub use replay::ReplayTask;
pub use session::{
    BoardSession, DEFAULT_MAX_DRAG_STEPS, DEFAULT_REPLAY_DELAY, MAX_BOARD_CELLS, SessionSettings, check_size,
};
