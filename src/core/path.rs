use crate::core::bounds::BoundsOriginRoot;
use crate::core::models::Vec2;

/// Moves one cell from `from` toward `to`, closing the horizontal distance
/// before the vertical one. Returns `from` when the two are equal.
pub fn step_toward(bounds: &BoundsOriginRoot, from: usize, to: usize) -> usize {
    let a = bounds.pos_of(from);
    let b = bounds.pos_of(to);
    let mut next = a;

    if b.x > a.x {
        next.x += 1;
    } else if b.x < a.x {
        next.x -= 1;
    } else if b.y > a.y {
        next.y += 1;
    } else if b.y < a.y {
        next.y -= 1;
    }

    bounds.index_of(&next)
}

pub fn manhattan_distance(bounds: &BoundsOriginRoot, a: usize, b: usize) -> usize {
    let Vec2 { x: ax, y: ay } = bounds.pos_of(a);
    let Vec2 { x: bx, y: by } = bounds.pos_of(b);
    ((ax - bx).abs() + (ay - by).abs()) as usize
}

/// True when every consecutive pair of the path shares an edge.
pub fn is_connected_path(bounds: &BoundsOriginRoot, path: &[usize]) -> bool {
    path.windows(2).all(|pair| bounds.is_neighbor(pair[0], pair[1]))
}
