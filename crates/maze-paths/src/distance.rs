use maze_core::Point;

/// Manhattan (L1) distance between two points.
///
/// Exact graph distance on an obstacle-free 4-connected grid, so it never
/// overestimates the remaining cost of a search.
#[inline]
pub fn manhattan(a: Point, b: Point) -> i32 {
    (a.x - b.x).abs() + (a.y - b.y).abs()
}
