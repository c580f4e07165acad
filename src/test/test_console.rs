
#[cfg(test)]
mod test {
    use crossterm::event::KeyCode;
    use ratatui::layout::Position;

    use crate::app::BoardCommand;
    use crate::config::BoardConfig;
    use crate::console_interface::*;
    use crate::core::*;

    #[test]
    fn parse_pads_short_rows_with_empty() {
        let grid = parse_board(r#"
            RBG
            D
        "#);
        assert_eq!(grid.width(), 3);
        assert_eq!(grid.height(), 2);
        assert_eq!(render_board_to_string(&grid), "RBG\nD..\n");
    }

    #[test]
    fn terminal_cells_map_to_board_cells_and_gaps() {
        let layout = BoardConfig::default().layout(6, 5);
        let origin = Position::new(1, 1);
        let cell_at = |column: u16, row: u16| {
            let (x, y) = terminal_to_board_point(origin, column, row);
            layout.map_point_to_index(x, y)
        };

        // each cell is four columns by two rows, gaps are two columns by one row
        assert_eq!(cell_at(1, 1), Some(0));
        assert_eq!(cell_at(4, 2), Some(0));
        assert_eq!(cell_at(5, 1), None);
        assert_eq!(cell_at(6, 1), None);
        assert_eq!(cell_at(7, 1), Some(1));
        assert_eq!(cell_at(1, 3), None);
        assert_eq!(cell_at(1, 4), Some(6));
        assert_eq!(cell_at(0, 1), None);
        assert_eq!(cell_at(7, 4), Some(7));
    }

    #[test]
    fn board_lines_match_layout() {
        let grid = parse_board(r#"
            RBGDLH
            RBGDLH
            RBGDLH
            RBGDLH
            RBGDLH
        "#);
        let lines = board_lines(&grid, 2, 1, Some(7));

        // five rows of two lines plus four gap lines
        assert_eq!(lines.len(), 14);
        // six cells of four columns plus five gaps of two
        assert_eq!(lines[0].width(), 34);
        assert_eq!(lines[2].width(), 0);
    }

    #[test]
    fn keys_map_to_commands() {
        assert!(matches!(key_to_input(KeyCode::Char('q')), ConsoleInput::Quit));
        assert!(matches!(key_to_input(KeyCode::Esc), ConsoleInput::Quit));
        assert!(matches!(
            key_to_input(KeyCode::Char('1')),
            ConsoleInput::Command(BoardCommand::Resize { width: 7, height: 6 })
        ));
        assert!(matches!(
            key_to_input(KeyCode::Char('3')),
            ConsoleInput::Command(BoardCommand::Resize { width: 5, height: 4 })
        ));
        assert!(matches!(
            key_to_input(KeyCode::Char('e')),
            ConsoleInput::Command(BoardCommand::SelectMode(BoardMode::Free))
        ));
        assert!(matches!(
            key_to_input(KeyCode::F(6)),
            ConsoleInput::Command(BoardCommand::TogglePalette(TileTag::Heal))
        ));
        assert!(matches!(key_to_input(KeyCode::Char('p')), ConsoleInput::Command(BoardCommand::Replay)));
        assert!(matches!(key_to_input(KeyCode::F(7)), ConsoleInput::Unknown));
        assert!(matches!(key_to_input(KeyCode::Char('z')), ConsoleInput::Unknown));
    }
}
