//! The [`Grid`] type — a rectangular maze of [`Cell`]s with a start and an
//! end.
//!
//! Cells are stored row-major in one flat `Vec`, so any coordinate is
//! addressable in O(1). Start and end are always in bounds and never
//! obstacles.

use std::fmt;
use std::ops::{Index, IndexMut};

use crate::cell::Cell;
use crate::geom::{Point, Range};

/// Glyphs used by [`Grid`]'s `Display` and by [`Grid::parse`].
pub mod glyph {
    pub const FREE: char = '.';
    pub const OBSTACLE: char = '#';
    pub const START: char = 'S';
    pub const END: char = 'E';
    /// Start and end on the same cell.
    pub const START_END: char = '@';
}

/// A maze grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    cells: Vec<Cell>,
    bounds: Range,
    start: Point,
    end: Point,
}

impl Grid {
    /// Create an obstacle-free `width × height` grid with all scores unset.
    ///
    /// # Panics
    ///
    /// If the grid is empty or `start`/`end` lie outside it.
    pub fn new(width: i32, height: i32, start: Point, end: Point) -> Self {
        let bounds = Range::new(0, 0, width.max(0), height.max(0));
        assert!(!bounds.is_empty(), "grid must have at least one cell");
        assert!(bounds.contains(start), "start {start} outside {bounds}");
        assert!(bounds.contains(end), "end {end} outside {bounds}");
        let cells = bounds.iter().map(Cell::new).collect();
        Self {
            cells,
            bounds,
            start,
            end,
        }
    }

    /// The bounding range of the grid, always anchored at (0, 0).
    #[inline]
    pub fn bounds(&self) -> Range {
        self.bounds
    }

    /// Number of columns.
    #[inline]
    pub fn width(&self) -> i32 {
        self.bounds.width()
    }

    /// Number of rows.
    #[inline]
    pub fn height(&self) -> i32 {
        self.bounds.height()
    }

    #[inline]
    pub fn start(&self) -> Point {
        self.start
    }

    #[inline]
    pub fn end(&self) -> Point {
        self.end
    }

    /// Whether `p` is a coordinate of this grid.
    #[inline]
    pub fn contains(&self, p: Point) -> bool {
        self.bounds.contains(p)
    }

    #[inline]
    fn idx(&self, p: Point) -> Option<usize> {
        if !self.bounds.contains(p) {
            return None;
        }
        Some(p.y as usize * self.width() as usize + p.x as usize)
    }

    /// The cell at `p`, or `None` if out of bounds.
    #[inline]
    pub fn at(&self, p: Point) -> Option<&Cell> {
        let i = self.idx(p)?;
        Some(&self.cells[i])
    }

    /// Mutable access to the cell at `p`, or `None` if out of bounds.
    #[inline]
    pub fn at_mut(&mut self, p: Point) -> Option<&mut Cell> {
        let i = self.idx(p)?;
        Some(&mut self.cells[i])
    }

    /// Whether `p` is in bounds and marked as an obstacle.
    #[inline]
    pub fn is_obstacle(&self, p: Point) -> bool {
        self.at(p).is_some_and(|c| c.obstacle)
    }

    /// Whether `p` is in bounds and free.
    #[inline]
    pub fn is_passable(&self, p: Point) -> bool {
        self.at(p).is_some_and(|c| !c.obstacle)
    }

    /// Mark or clear an obstacle at `p`.
    ///
    /// Returns `false` (and changes nothing) when `p` is out of bounds or is
    /// the start or end.
    pub fn set_obstacle(&mut self, p: Point, obstacle: bool) -> bool {
        if p == self.start || p == self.end {
            return false;
        }
        match self.at_mut(p) {
            Some(c) => {
                c.obstacle = obstacle;
                true
            }
            None => false,
        }
    }

    /// Row-major slice of all cells.
    #[inline]
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Row-major iterator over obstacle coordinates.
    pub fn obstacles(&self) -> impl Iterator<Item = Point> + '_ {
        self.cells.iter().filter(|c| c.obstacle).map(|c| c.pos)
    }

    /// Count obstacle cells.
    pub fn obstacle_count(&self) -> usize {
        self.cells.iter().filter(|c| c.obstacle).count()
    }

    /// Reset `g`, `h` and `heap_index` on every cell.
    pub fn reset_scores(&mut self) {
        for c in self.cells.iter_mut() {
            c.reset_scores();
        }
    }

    /// Build a grid from rows of [`glyph`] characters.
    ///
    /// Leading and trailing whitespace of the whole string and of each line
    /// is ignored. Exactly one start and one end (or a single
    /// [`glyph::START_END`]) are required.
    pub fn parse(s: &str) -> Result<Self, GridParseError> {
        let rows: Vec<&str> = s
            .trim()
            .lines()
            .map(str::trim)
            .filter(|l| !l.is_empty())
            .collect();
        let Some(first) = rows.first() else {
            return Err(GridParseError::Empty);
        };
        let width = first.chars().count();

        let mut start = None;
        let mut end = None;
        let mut obstacles = Vec::new();
        for (y, row) in rows.iter().enumerate() {
            if row.chars().count() != width {
                return Err(GridParseError::InconsistentWidth { row: y });
            }
            for (x, ch) in row.chars().enumerate() {
                let p = Point::new(x as i32, y as i32);
                match ch {
                    glyph::FREE => {}
                    glyph::OBSTACLE => obstacles.push(p),
                    glyph::START => place(&mut start, p, GridParseError::DuplicateStart)?,
                    glyph::END => place(&mut end, p, GridParseError::DuplicateEnd)?,
                    glyph::START_END => {
                        place(&mut start, p, GridParseError::DuplicateStart)?;
                        place(&mut end, p, GridParseError::DuplicateEnd)?;
                    }
                    _ => return Err(GridParseError::InvalidChar { ch, pos: p }),
                }
            }
        }

        let start = start.ok_or(GridParseError::MissingStart)?;
        let end = end.ok_or(GridParseError::MissingEnd)?;
        let mut grid = Grid::new(width as i32, rows.len() as i32, start, end);
        for p in obstacles {
            grid.set_obstacle(p, true);
        }
        Ok(grid)
    }
}

fn place(slot: &mut Option<Point>, p: Point, dup: GridParseError) -> Result<(), GridParseError> {
    if slot.is_some() {
        return Err(dup);
    }
    *slot = Some(p);
    Ok(())
}

impl Index<Point> for Grid {
    type Output = Cell;

    /// # Panics
    ///
    /// If `p` is out of bounds.
    #[inline]
    fn index(&self, p: Point) -> &Cell {
        match self.idx(p) {
            Some(i) => &self.cells[i],
            None => panic!("point {p} outside grid {}", self.bounds),
        }
    }
}

impl IndexMut<Point> for Grid {
    #[inline]
    fn index_mut(&mut self, p: Point) -> &mut Cell {
        match self.idx(p) {
            Some(i) => &mut self.cells[i],
            None => panic!("point {p} outside grid {}", self.bounds),
        }
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.cells.chunks(self.width() as usize) {
            for c in row {
                let ch = match (c.pos == self.start, c.pos == self.end) {
                    (true, true) => glyph::START_END,
                    (true, false) => glyph::START,
                    (false, true) => glyph::END,
                    _ if c.obstacle => glyph::OBSTACLE,
                    _ => glyph::FREE,
                };
                write!(f, "{ch}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

/// Errors that can occur when parsing a grid with [`Grid::parse`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GridParseError {
    /// No non-blank lines.
    Empty,
    /// Row `row` does not have the width of the first row.
    InconsistentWidth { row: usize },
    /// A character that is not one of the [`glyph`]s.
    InvalidChar { ch: char, pos: Point },
    MissingStart,
    MissingEnd,
    DuplicateStart,
    DuplicateEnd,
}

impl fmt::Display for GridParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "grid: no rows"),
            Self::InconsistentWidth { row } => write!(f, "grid: row {row} has inconsistent width"),
            Self::InvalidChar { ch, pos } => {
                write!(f, "grid: invalid character \u{201c}{ch}\u{201d} at {pos}")
            }
            Self::MissingStart => write!(f, "grid: no start cell"),
            Self::MissingEnd => write!(f, "grid: no end cell"),
            Self::DuplicateStart => write!(f, "grid: more than one start cell"),
            Self::DuplicateEnd => write!(f, "grid: more than one end cell"),
        }
    }
}

impl std::error::Error for GridParseError {}
