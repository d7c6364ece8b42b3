use serde::Serialize;
use std::fmt;

/// Orientation of a word's run of cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Direction {
    #[default]
    Horizontal,
    Vertical,
}

impl Direction {
    pub fn opposite(self) -> Self {
        match self {
            Direction::Horizontal => Direction::Vertical,
            Direction::Vertical => Direction::Horizontal,
        }
    }

    pub fn is_horizontal(self) -> bool {
        self == Direction::Horizontal
    }
}

/// A cell coordinate on the unbounded layout plane.
///
/// `x` grows to the right and `y` grows downwards. Positions are plain values:
/// two positions are the same cell iff both coordinates match, which is what
/// every grid lookup relies on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
pub struct Position {
    pub x: i64,
    pub y: i64,
}

impl Position {
    pub const ORIGIN: Position = Position { x: 0, y: 0 };

    pub const fn new(x: i64, y: i64) -> Self {
        Self { x, y }
    }

    /// One step forward along `direction`.
    pub fn next(self, direction: Direction) -> Self {
        match direction {
            Direction::Horizontal => self.right(),
            Direction::Vertical => self.down(),
        }
    }

    /// One step backward along `direction`.
    pub fn prev(self, direction: Direction) -> Self {
        match direction {
            Direction::Horizontal => self.left(),
            Direction::Vertical => self.up(),
        }
    }

    /// Offsets by `steps` cells along `direction`. Negative steps move backward.
    pub fn move_by(self, steps: i64, direction: Direction) -> Self {
        match direction {
            Direction::Horizontal => Self::new(self.x + steps, self.y),
            Direction::Vertical => Self::new(self.x, self.y + steps),
        }
    }

    pub fn left(self) -> Self {
        Self::new(self.x - 1, self.y)
    }

    pub fn right(self) -> Self {
        Self::new(self.x + 1, self.y)
    }

    pub fn up(self) -> Self {
        Self::new(self.x, self.y - 1)
    }

    pub fn down(self) -> Self {
        Self::new(self.x, self.y + 1)
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn next_and_prev_follow_direction() {
        let p = Position::new(3, -2);
        assert_eq!(p.next(Direction::Horizontal), Position::new(4, -2));
        assert_eq!(p.next(Direction::Vertical), Position::new(3, -1));
        assert_eq!(p.prev(Direction::Horizontal), Position::new(2, -2));
        assert_eq!(p.prev(Direction::Vertical), Position::new(3, -3));
    }

    #[test]
    fn move_by_accepts_negative_steps() {
        let p = Position::ORIGIN;
        assert_eq!(p.move_by(4, Direction::Horizontal), Position::new(4, 0));
        assert_eq!(p.move_by(-2, Direction::Vertical), Position::new(0, -2));
        assert_eq!(
            p.move_by(2, Direction::Horizontal)
                .move_by(-2, Direction::Horizontal),
            p
        );
    }

    #[test]
    fn equal_coordinates_hash_to_the_same_map_entry() {
        let mut cells = HashMap::new();
        cells.insert(Position::new(1, 1), 'a');
        let computed = Position::ORIGIN.right().down();
        assert_eq!(cells.get(&computed), Some(&'a'));
    }

    #[test]
    fn opposite_direction_flips() {
        assert_eq!(Direction::Horizontal.opposite(), Direction::Vertical);
        assert_eq!(Direction::Vertical.opposite(), Direction::Horizontal);
        assert!(Direction::default().is_horizontal());
    }
}
