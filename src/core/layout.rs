/// Pixel geometry of a rendered board. Cells are `cell_size` square and
/// separated by `gap` on both axes.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BoardLayout {
    pub cell_size: f64,
    pub gap: f64,
    pub width: i32,
    pub height: i32,
}

impl BoardLayout {
    pub fn step(&self) -> f64 {
        self.cell_size + self.gap
    }

    /// Maps a board-local point to a cell index. Points over a gap map to
    /// nothing so a drag never jumps across a gap ambiguously.
    pub fn map_point_to_index(&self, px: f64, py: f64) -> Option<usize> {
        let step = self.step();
        if step <= 0.0 || !px.is_finite() || !py.is_finite() {
            return None;
        }

        let x = (px / step).floor();
        let y = (py / step).floor();
        if x < 0.0 || y < 0.0 || x >= self.width as f64 || y >= self.height as f64 {
            return None;
        }

        let inner_x = px - x * step;
        let inner_y = py - y * step;
        if inner_x < 0.0 || inner_y < 0.0 || inner_x > self.cell_size || inner_y > self.cell_size {
            return None;
        }

        Some(y as usize * self.width as usize + x as usize)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn layout() -> BoardLayout {
        BoardLayout { cell_size: 50.0, gap: 8.0, width: 6, height: 5 }
    }

    #[test]
    fn test_point_inside_cell_maps_to_index() {
        let layout = layout();
        assert_eq!(layout.map_point_to_index(0.0, 0.0), Some(0));
        assert_eq!(layout.map_point_to_index(25.0, 25.0), Some(0));
        assert_eq!(layout.map_point_to_index(58.0 + 10.0, 58.0 + 10.0), Some(7));
        assert_eq!(layout.map_point_to_index(5.0 * 58.0 + 49.0, 4.0 * 58.0 + 49.0), Some(29));
    }

    #[test]
    fn test_cell_edge_is_inclusive() {
        assert_eq!(layout().map_point_to_index(50.0, 50.0), Some(0));
    }

    #[test]
    fn test_point_over_gap_maps_to_nothing() {
        let layout = layout();
        assert_eq!(layout.map_point_to_index(54.0, 10.0), None);
        assert_eq!(layout.map_point_to_index(10.0, 54.0), None);
        assert_eq!(layout.map_point_to_index(54.0, 54.0), None);
    }

    #[test]
    fn test_point_outside_board_maps_to_nothing() {
        let layout = layout();
        assert_eq!(layout.map_point_to_index(-1.0, 10.0), None);
        assert_eq!(layout.map_point_to_index(10.0, -0.5), None);
        assert_eq!(layout.map_point_to_index(6.0 * 58.0 + 1.0, 10.0), None);
        assert_eq!(layout.map_point_to_index(10.0, 5.0 * 58.0 + 1.0), None);
        assert_eq!(layout.map_point_to_index(f64::NAN, 10.0), None);
    }
}
