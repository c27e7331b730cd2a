//! The visited-set: coordinates the driver has already expanded.

use std::collections::HashSet;

use maze_core::Point;

/// Set of expanded coordinates. Membership is by coordinate alone.
#[derive(Debug, Clone, Default)]
pub struct VisitedSet {
    points: HashSet<Point>,
}

impl VisitedSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert `p`. Returns `false` if it was already present.
    #[inline]
    pub fn add(&mut self, p: Point) -> bool {
        self.points.insert(p)
    }

    /// Remove `p`. Returns `false` if it was not present.
    #[inline]
    pub fn remove(&mut self, p: Point) -> bool {
        self.points.remove(&p)
    }

    #[inline]
    pub fn contains(&self, p: Point) -> bool {
        self.points.contains(&p)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn clear(&mut self) {
        self.points.clear();
    }

    /// Iterate over the members in unspecified order.
    pub fn iter(&self) -> impl Iterator<Item = Point> + '_ {
        self.points.iter().copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn add_contains_remove() {
        let mut v = VisitedSet::new();
        assert!(v.add(Point::new(1, 2)));
        assert!(!v.add(Point::new(1, 2)));
        assert!(v.contains(Point::new(1, 2)));
        assert!(!v.contains(Point::new(2, 1)));
        assert_eq!(v.len(), 1);
        assert!(v.remove(Point::new(1, 2)));
        assert!(!v.remove(Point::new(1, 2)));
        assert!(v.is_empty());
    }

    #[test]
    fn clear_empties() {
        let mut v = VisitedSet::new();
        for x in 0..10 {
            v.add(Point::new(x, 0));
        }
        assert_eq!(v.iter().count(), 10);
        v.clear();
        assert!(v.is_empty());
        assert!(!v.contains(Point::new(3, 0)));
    }
}
