use crate::core::models::Vec2;

/// A bounding box with one corner fixed at 0,0 and assumed to have positive extent
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BoundsOriginRoot {
    pub extent: Vec2,
}

impl BoundsOriginRoot {
    pub fn new(x: i32, y: i32) -> BoundsOriginRoot {
        BoundsOriginRoot {
            extent: Vec2 { x, y },
        }
    }

    pub fn width(&self) -> i32 {
        self.extent.x
    }

    pub fn height(&self) -> i32 {
        self.extent.y
    }

    pub fn contains_index(&self, index: usize) -> bool {
        index < self.area()
    }

    pub fn area(&self) -> usize {
        self.extent.x as usize * self.extent.y as usize
    }

    pub fn index_of(&self, pos: &Vec2) -> usize {
        (pos.y * self.extent.x + pos.x) as usize
    }

    pub fn pos_of(&self, index: usize) -> Vec2 {
        let index = index as i32;
        Vec2 {
            x: index % self.extent.x,
            y: index / self.extent.x,
        }
    }

    /// True when the two cells share an edge.
    pub fn is_neighbor(&self, a: usize, b: usize) -> bool {
        let a = self.pos_of(a);
        let b = self.pos_of(b);
        (a.x - b.x).abs() + (a.y - b.y).abs() == 1
    }
}
