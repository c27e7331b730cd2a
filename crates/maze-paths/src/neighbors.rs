use maze_core::Point;

/// Cached neighbor computation helper.
///
/// Enumerates the cardinal neighbors of a grid point in the fixed
/// expansion order top, left, bottom, right, filtered by a predicate.
/// The order determines exploration order and therefore every trace.
pub struct Neighbors {
    buf: Vec<Point>,
}

impl Default for Neighbors {
    fn default() -> Self {
        Self::new()
    }
}

impl Neighbors {
    /// Create a new `Neighbors` helper.
    pub fn new() -> Self {
        Self {
            buf: Vec::with_capacity(4),
        }
    }

    /// Return the 4-directional neighbors of `p`, keeping only those for
    /// which `keep` returns `true`.
    pub fn cardinal(&mut self, p: Point, keep: impl Fn(Point) -> bool) -> &[Point] {
        self.buf.clear();
        for n in p.neighbors_4() {
            if keep(n) {
                self.buf.push(n);
            }
        }
        &self.buf
    }
}
