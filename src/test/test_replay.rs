
#[cfg(test)]
mod test {
    use std::time::{Duration, Instant};

    use crate::core::*;
    use crate::test::test_util::{fast_settings, normalize, BoardTestState};

    const BOARD: &str = r#"
RRRRRR
GBDLHR
......
......
......
"#;

    const AFTER_DRAG: &str = r#"
RRRRRR
GDLBHR
......
......
......
"#;

    #[test]
    fn undo_restores_board_before_drag() {
        let mut board = BoardTestState::new(BOARD);
        board.drag(&[7, 9]);

        board.session.undo().unwrap();

        board.assert_matches(BOARD);
        assert!(board.session.last_move().is_some());
    }

    #[test]
    fn undo_twice_is_idempotent() {
        let mut board = BoardTestState::new(BOARD);
        board.drag(&[7, 9, 21]);

        board.session.undo().unwrap();
        let first = board.board_to_string();
        board.session.undo().unwrap();

        assert_eq!(first, board.board_to_string());
        board.assert_matches(BOARD);
    }

    #[test]
    fn undo_and_replay_need_a_recorded_move() {
        let mut board = BoardTestState::new(BOARD);
        assert_eq!(board.session.undo(), Err(BoardError::NothingToUndo));
        assert_eq!(board.session.replay(Instant::now()), Err(BoardError::NothingToReplay));
        assert_eq!(board.session.interaction_state(), InteractionState::Idle);
        board.assert_matches(BOARD);
    }

    #[test]
    fn undo_and_replay_are_rejected_mid_drag() {
        let mut board = BoardTestState::new(BOARD);
        board.drag(&[7, 9]);
        board.session.start_drag(0).unwrap();

        assert_eq!(board.session.undo(), Err(BoardError::AlreadyDragging));
        assert_eq!(board.session.replay(Instant::now()), Err(BoardError::AlreadyDragging));
    }

    #[test]
    fn replay_steps_one_swap_per_delay() {
        let mut board = BoardTestState::with_settings(BOARD, fast_settings());
        board.drag(&[7, 9]);
        let delay = board.session.settings().replay_delay;
        let start = Instant::now();

        board.session.replay(start).unwrap();
        assert_eq!(board.session.interaction_state(), InteractionState::Replaying);
        assert_eq!(board.session.selected_index(), Some(7));
        board.assert_matches(BOARD);

        assert_eq!(board.session.tick(start), ReplayTick::Waiting);
        assert_eq!(board.session.tick(start + delay / 2), ReplayTick::Waiting);
        board.assert_matches(BOARD);

        assert_eq!(board.session.tick(start + delay), ReplayTick::Stepped { index: 8 });
        board.assert_matches(r#"
RRRRRR
GDBLHR
......
......
......
"#);
        // one swap per due instant, even if ticked late
        let late = start + delay * 5;
        assert_eq!(board.session.tick(late), ReplayTick::Stepped { index: 9 });
        assert_eq!(board.session.tick(late), ReplayTick::Waiting);
        board.assert_matches(AFTER_DRAG);

        assert_eq!(board.session.tick(late + delay), ReplayTick::Finished);
        assert_eq!(board.session.interaction_state(), InteractionState::Idle);
        assert_eq!(board.session.selected_index(), None);
        assert_eq!(board.session.last_move().unwrap().path, vec![7, 8, 9]);
    }

    #[test]
    fn replay_reproduces_live_drag_swap_for_swap() {
        let mut board = BoardTestState::with_settings(BOARD, fast_settings());
        let path_targets = [3, 27, 12, 17, 0];

        // record the board after every swap of the live drag
        board.session.start_drag(path_targets[0]).unwrap();
        let mut live_frames = vec![];
        for &target in &path_targets[1..] {
            while board.session.selected_index() != Some(target) {
                let current = board.session.selected_index().unwrap();
                let next = step_toward(&board.session.grid().size(), current, target);
                board.session.drag_to(next).unwrap();
                live_frames.push(board.board_to_string());
            }
        }
        board.session.end_drag();
        let live_result = board.board_to_string();

        board.session.replay(Instant::now()).unwrap();
        let frames = board.run_replay(Instant::now());

        let replayed: Vec<String> = frames
            .iter()
            .filter(|(tick, _)| matches!(tick, ReplayTick::Stepped { .. }))
            .map(|(_, frame)| frame.clone())
            .collect();
        assert_eq!(replayed, live_frames);
        assert_eq!(frames.last().unwrap().0, ReplayTick::Finished);
        assert_eq!(board.board_to_string(), live_result);
    }

    #[test]
    fn undo_then_replay_returns_to_post_drag_board() {
        let mut board = BoardTestState::with_settings(BOARD, fast_settings());
        board.drag(&[7, 9]);

        board.session.undo().unwrap();
        board.assert_matches(BOARD);

        let start = Instant::now();
        board.session.replay(start).unwrap();
        board.run_replay(start);
        board.assert_matches(AFTER_DRAG);
    }

    #[test]
    fn replay_can_run_again() {
        let mut board = BoardTestState::with_settings(BOARD, fast_settings());
        board.drag(&[7, 9]);

        for _ in 0..2 {
            let start = Instant::now();
            board.session.replay(start).unwrap();
            let frames = board.run_replay(start);
            assert_eq!(frames.len(), 3);
            board.assert_matches(AFTER_DRAG);
        }
    }

    #[test]
    fn replay_blocks_pointer_input_and_board_changes() {
        let mut board = BoardTestState::with_settings(BOARD, fast_settings());
        board.drag(&[7, 9]);
        let layout = BoardLayout { cell_size: 50.0, gap: 8.0, width: 6, height: 5 };
        let start = Instant::now();
        board.session.replay(start).unwrap();

        assert_eq!(board.session.pointer_down(10.0, 10.0, &layout), Err(BoardError::Busy));
        assert_eq!(board.session.pointer_move(70.0, 10.0, &layout), Err(BoardError::Busy));
        assert_eq!(board.session.pointer_up(), DragOutcome::NotDragging);
        assert_eq!(board.session.start_drag(0), Err(BoardError::Busy));
        assert_eq!(board.session.drag_to(1), Err(BoardError::Busy));
        assert_eq!(board.session.undo(), Err(BoardError::Busy));
        assert_eq!(board.session.replay(start), Err(BoardError::Busy));
        assert_eq!(board.session.clear_recorded_move(), Err(BoardError::Busy));
        assert_eq!(board.session.clear(), Err(BoardError::Busy));
        assert_eq!(board.session.configure(7, 6), Err(BoardError::Busy));
        assert_eq!(board.session.interaction_state(), InteractionState::Replaying);

        board.run_replay(start);
        board.assert_matches(AFTER_DRAG);
    }

    #[test]
    fn replay_task_stops_at_non_adjacent_step() {
        let mut grid = crate::console_interface::parse_board("RBGDLH");
        let bounds = grid.size();
        let delay = Duration::from_millis(5);
        let start = Instant::now();
        let mut task = ReplayTask::new(vec![0, 1, 3, 4], delay, start);

        assert_eq!(task.advance(&mut grid, &bounds, start + delay), ReplayTick::Stepped { index: 1 });
        assert_eq!(task.advance(&mut grid, &bounds, start + delay * 2), ReplayTick::Finished);
        assert_eq!(task.remaining_steps(), 0);
        assert_eq!(crate::console_interface::render_board_to_string(&grid).trim(), "BRGDLH");
    }

    #[test]
    fn clearing_recorded_move_disables_undo_and_replay() {
        let mut board = BoardTestState::new(BOARD);
        board.drag(&[7, 9]);

        board.session.clear_recorded_move().unwrap();

        assert_eq!(board.session.last_move_summary(), None);
        assert_eq!(board.session.undo(), Err(BoardError::NothingToUndo));
        assert_eq!(board.session.replay(Instant::now()), Err(BoardError::NothingToReplay));
        assert_eq!(board.board_to_string(), normalize(AFTER_DRAG));
    }
}
