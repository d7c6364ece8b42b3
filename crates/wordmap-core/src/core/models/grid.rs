use super::node::{NodeId, WordNode};
use super::position::{Direction, Position};
use serde::Serialize;
use std::collections::HashMap;

/// Inclusive axis-aligned box covering every committed cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct BoundingBox {
    pub top_left: Position,
    pub bottom_right: Position,
}

impl BoundingBox {
    fn from_run(start: Position, end: Position) -> Self {
        Self {
            top_left: Position::new(start.x.min(end.x), start.y.min(end.y)),
            bottom_right: Position::new(start.x.max(end.x), start.y.max(end.y)),
        }
    }

    fn widen(&mut self, start: Position, end: Position) {
        self.top_left.x = self.top_left.x.min(start.x);
        self.top_left.y = self.top_left.y.min(start.y);
        self.bottom_right.x = self.bottom_right.x.max(end.x);
        self.bottom_right.y = self.bottom_right.y.max(end.y);
    }

    pub fn width(&self) -> u64 {
        (self.bottom_right.x - self.top_left.x + 1) as u64
    }

    pub fn height(&self) -> u64 {
        (self.bottom_right.y - self.top_left.y + 1) as u64
    }

    /// Endpoints are inclusive, hence the `+ 1` on each axis.
    pub fn area(&self) -> u64 {
        self.width() * self.height()
    }
}

/// Sparse character plane shared by the words of one block.
#[derive(Debug, Clone, Default)]
pub struct Grid {
    cells: HashMap<Position, char>,
    starts: HashMap<NodeId, Position>,
    bounds: Option<BoundingBox>,
}

impl Grid {
    pub fn new() -> Self {
        Self::default()
    }

    /// Computes where `target` would start so that its letter at `target_index`
    /// lands on `origin`'s letter at `origin_index`, and checks that every cell
    /// of that run is either empty or already holds the same letter.
    ///
    /// Returns the candidate start position, or `None` if any cell conflicts or
    /// `origin` has not been committed to this grid. Nothing is written.
    pub fn fits(
        &self,
        origin: &WordNode,
        origin_index: usize,
        target: &[char],
        target_index: usize,
        target_direction: Direction,
    ) -> Option<Position> {
        let origin_start = self.starts.get(&origin.id)?;
        let start = origin_start
            .move_by(origin_index as i64, origin.direction)
            .move_by(-(target_index as i64), target_direction);

        if target.len() == 1 && self.cells.get(&start) == Some(&target[0]) {
            return Some(start);
        }

        let mut pos = start;
        for &letter in target {
            if let Some(&existing) = self.cells.get(&pos) {
                if existing != letter {
                    return None;
                }
            }
            pos = pos.next(target_direction);
        }
        Some(start)
    }

    /// Writes `node`'s letters from `start` along its direction.
    ///
    /// Overlaps are not re-validated here; `start` must come from a successful
    /// [`Grid::fits`] with no other commit in between, or be the first
    /// placement in an empty grid.
    pub fn commit(&mut self, node: &WordNode, start: Position) {
        self.starts.insert(node.id, start);
        let letters = node.letters();
        if letters.is_empty() {
            return;
        }

        let mut pos = start;
        for (i, &letter) in letters.iter().enumerate() {
            self.cells.insert(pos, letter);
            if i + 1 < letters.len() {
                pos = pos.next(node.direction);
            }
        }
        let end = pos;

        match &mut self.bounds {
            Some(bounds) => bounds.widen(start, end),
            None => self.bounds = Some(BoundingBox::from_run(start, end)),
        }
    }

    pub fn bounding_area(&self) -> u64 {
        self.bounds.map_or(0, |b| b.area())
    }

    pub fn bounds(&self) -> Option<BoundingBox> {
        self.bounds
    }

    pub fn width(&self) -> u64 {
        self.bounds.map_or(0, |b| b.width())
    }

    pub fn height(&self) -> u64 {
        self.bounds.map_or(0, |b| b.height())
    }

    pub fn char_at(&self, position: Position) -> Option<char> {
        self.cells.get(&position).copied()
    }

    pub fn start_of(&self, id: NodeId) -> Option<Position> {
        self.starts.get(&id).copied()
    }

    pub fn occupied_cells(&self) -> usize {
        self.cells.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn committed(grid: &mut Grid, id: usize, text: &str, dir: Direction, start: Position) -> WordNode {
        let mut node = WordNode::new(NodeId(id), text);
        node.direction = dir;
        grid.commit(&node, start);
        node
    }

    fn letters(text: &str) -> Vec<char> {
        text.chars().collect()
    }

    #[test]
    fn empty_grid_has_no_bounds_and_zero_area() {
        let grid = Grid::new();
        assert!(grid.bounds().is_none());
        assert_eq!(grid.bounding_area(), 0);
        assert_eq!(grid.width(), 0);
        assert_eq!(grid.height(), 0);
    }

    #[test]
    fn single_word_area_equals_length_in_either_direction() {
        let mut horizontal = Grid::new();
        committed(&mut horizontal, 0, "hello", Direction::Horizontal, Position::ORIGIN);
        assert_eq!(horizontal.bounding_area(), 5);
        assert_eq!((horizontal.width(), horizontal.height()), (5, 1));

        let mut vertical = Grid::new();
        committed(&mut vertical, 0, "hello", Direction::Vertical, Position::ORIGIN);
        assert_eq!(vertical.bounding_area(), 5);
        assert_eq!((vertical.width(), vertical.height()), (1, 5));
    }

    #[test]
    fn commit_writes_letters_and_records_start() {
        let mut grid = Grid::new();
        committed(&mut grid, 0, "cat", Direction::Horizontal, Position::new(2, 3));
        assert_eq!(grid.char_at(Position::new(2, 3)), Some('c'));
        assert_eq!(grid.char_at(Position::new(3, 3)), Some('a'));
        assert_eq!(grid.char_at(Position::new(4, 3)), Some('t'));
        assert_eq!(grid.char_at(Position::new(5, 3)), None);
        assert_eq!(grid.start_of(NodeId(0)), Some(Position::new(2, 3)));
        assert_eq!(grid.occupied_cells(), 3);
    }

    #[test]
    fn fits_aligns_target_letter_on_origin_letter() {
        let mut grid = Grid::new();
        let cat = committed(&mut grid, 0, "cat", Direction::Horizontal, Position::ORIGIN);

        let start = grid.fits(&cat, 1, &letters("bar"), 1, Direction::Vertical);
        assert_eq!(start, Some(Position::new(1, -1)));
        assert_eq!(grid.occupied_cells(), 3);
    }

    #[test]
    fn fits_rejects_conflicting_cells() {
        let mut grid = Grid::new();
        let cat = committed(&mut grid, 0, "cat", Direction::Horizontal, Position::ORIGIN);
        committed(&mut grid, 1, "tab", Direction::Vertical, Position::new(2, 0));

        // Overlapping matching letters is fine; overlapping a different one is not.
        assert!(grid
            .fits(&cat, 2, &letters("at"), 1, Direction::Horizontal)
            .is_some());
        assert!(grid
            .fits(&cat, 0, &letters("cz"), 0, Direction::Horizontal)
            .is_none());
    }

    #[test]
    fn fits_requires_origin_in_grid() {
        let grid = Grid::new();
        let stranger = WordNode::new(NodeId(9), "abc");
        assert!(grid
            .fits(&stranger, 0, &letters("a"), 0, Direction::Vertical)
            .is_none());
    }

    #[test]
    fn single_letter_target_fits_on_matching_cell() {
        let mut grid = Grid::new();
        let cat = committed(&mut grid, 0, "cat", Direction::Horizontal, Position::ORIGIN);
        assert_eq!(
            grid.fits(&cat, 2, &letters("t"), 0, Direction::Vertical),
            Some(Position::new(2, 0))
        );
    }

    #[test]
    fn bounds_widen_monotonically() {
        let mut grid = Grid::new();
        committed(&mut grid, 0, "cat", Direction::Horizontal, Position::ORIGIN);
        committed(&mut grid, 1, "bar", Direction::Vertical, Position::new(1, -1));
        let bounds = grid.bounds().unwrap();
        assert_eq!(bounds.top_left, Position::new(0, -1));
        assert_eq!(bounds.bottom_right, Position::new(2, 1));
        assert_eq!(grid.bounding_area(), 9);

        committed(&mut grid, 2, "a", Direction::Horizontal, Position::new(1, 0));
        assert_eq!(grid.bounds().unwrap(), bounds);
    }

    #[test]
    fn empty_word_records_start_without_touching_bounds() {
        let mut grid = Grid::new();
        committed(&mut grid, 0, "", Direction::Horizontal, Position::ORIGIN);
        assert_eq!(grid.start_of(NodeId(0)), Some(Position::ORIGIN));
        assert!(grid.bounds().is_none());
        assert_eq!(grid.bounding_area(), 0);
    }
}
