use crate::core::bounds::BoundsOriginRoot;
use crate::core::models::TileTag;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Grid {
    bounds: BoundsOriginRoot,
    cells: Vec<TileTag>,
}

impl Grid {
    pub fn new_with_size(width: i32, height: i32, default: TileTag) -> Self {
        let bounds = BoundsOriginRoot::new(width, height);
        Grid::new(bounds, default)
    }

    pub fn new(bounds: BoundsOriginRoot, default: TileTag) -> Self {
        let cells = vec![default; bounds.area()];
        Grid { bounds, cells }
    }

    pub fn size(&self) -> BoundsOriginRoot {
        self.bounds
    }

    pub fn width(&self) -> i32 {
        self.bounds.width()
    }

    pub fn height(&self) -> i32 {
        self.bounds.height()
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn cells(&self) -> &[TileTag] {
        &self.cells
    }

    pub fn get(&self, index: usize) -> Option<TileTag> {
        self.cells.get(index).copied()
    }

    pub fn set(&mut self, index: usize, tag: TileTag) {
        self.cells[index] = tag;
    }

    pub fn swap(&mut self, a: usize, b: usize) {
        self.cells.swap(a, b);
    }

    pub fn fill(&mut self, tag: TileTag) {
        self.cells.fill(tag);
    }

    pub fn snapshot(&self) -> Vec<TileTag> {
        self.cells.clone()
    }

    /// Overwrites every cell from a snapshot taken on a grid of the same size.
    pub fn restore(&mut self, snapshot: &[TileTag]) {
        self.cells.copy_from_slice(snapshot);
    }

    pub fn count(&self, tag: TileTag) -> usize {
        self.cells.iter().filter(|&&c| c == tag).count()
    }
}
