use crate::core::session::MAX_BOARD_CELLS;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BoardError {
    #[error("no colours selected for random fill; check at least one")]
    EmptyPalette,
    #[error("nothing to undo; drag a tile first")]
    NothingToUndo,
    #[error("nothing to replay; drag a tile first")]
    NothingToReplay,
    #[error("a replay is running")]
    Busy,
    #[error("a drag is already in progress")]
    AlreadyDragging,
    #[error("board size must be positive and at most {max} cells, got {width}x{height}", max = MAX_BOARD_CELLS)]
    InvalidSize { width: i32, height: i32 },
    #[error("no cell at index {0}")]
    InvalidCell(usize),
}
