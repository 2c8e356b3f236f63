use std::fmt;

/// A maze coordinate as `(x, y)`, with `x` the column and `y` the row.
pub type Coord = (u16, u16);

/// One of the four cardinal directions a cell can have a wall in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    North,
    South,
    West,
    East,
}

impl Direction {
    /// All directions, in the order the carver starts from before shuffling.
    pub const ALL: [Direction; 4] = [
        Direction::North,
        Direction::South,
        Direction::West,
        Direction::East,
    ];

    /// Unit step `(dx, dy)` of this direction. North is towards `y = 0`.
    pub fn delta(self) -> (i32, i32) {
        match self {
            Direction::North => (0, -1),
            Direction::South => (0, 1),
            Direction::West => (-1, 0),
            Direction::East => (1, 0),
        }
    }

    pub fn opposite(self) -> Direction {
        match self {
            Direction::North => Direction::South,
            Direction::South => Direction::North,
            Direction::West => Direction::East,
            Direction::East => Direction::West,
        }
    }

    /// Bit of this direction inside [`Cell`]'s wall mask.
    fn bit(self) -> u8 {
        match self {
            Direction::North => 0b0001,
            Direction::South => 0b0010,
            Direction::West => 0b0100,
            Direction::East => 0b1000,
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Direction::North => write!(f, "N"),
            Direction::South => write!(f, "S"),
            Direction::West => write!(f, "W"),
            Direction::East => write!(f, "E"),
        }
    }
}

/// Wall and visit state of a single maze cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cell {
    walls: u8,
    visited: bool,
}

impl Cell {
    const ALL_WALLS: u8 = 0b1111;

    /// A fresh cell: walled on every side and not yet visited.
    pub const CLOSED: Cell = Cell {
        walls: Cell::ALL_WALLS,
        visited: false,
    };

    pub fn has_wall(&self, direction: Direction) -> bool {
        self.walls & direction.bit() != 0
    }

    /// Clears the wall in `direction`.
    /// Returns `true` if a wall was removed, `false` if it was already open.
    pub fn remove_wall(&mut self, direction: Direction) -> bool {
        let had_wall = self.has_wall(direction);
        self.walls &= !direction.bit();
        had_wall
    }

    pub fn is_visited(&self) -> bool {
        self.visited
    }

    pub fn mark_visited(&mut self) {
        self.visited = true;
    }

    /// Number of walls still standing around this cell.
    pub fn wall_count(&self) -> u32 {
        self.walls.count_ones()
    }
}

impl Default for Cell {
    fn default() -> Self {
        Cell::CLOSED
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_opposite_is_an_involution() {
        for direction in Direction::ALL {
            assert_ne!(direction.opposite(), direction);
            assert_eq!(direction.opposite().opposite(), direction);
        }
    }

    #[test]
    fn test_opposite_deltas_cancel() {
        for direction in Direction::ALL {
            let (dx, dy) = direction.delta();
            let (ox, oy) = direction.opposite().delta();
            assert_eq!((dx + ox, dy + oy), (0, 0));
        }
    }

    #[test]
    fn test_direction_display() {
        let names = Direction::ALL.map(|d| d.to_string());
        assert_eq!(names, ["N", "S", "W", "E"]);
    }

    #[test]
    fn test_remove_wall() {
        let mut cell = Cell::CLOSED;
        assert_eq!(cell.wall_count(), 4);
        assert!(cell.remove_wall(Direction::East));
        // Removing the same wall again is a no-op
        assert!(!cell.remove_wall(Direction::East));
        assert!(!cell.has_wall(Direction::East));
        assert!(cell.has_wall(Direction::West));
        assert_eq!(cell.wall_count(), 3);
    }

    #[test]
    fn test_mark_visited() {
        let mut cell = Cell::default();
        assert!(!cell.is_visited());
        cell.mark_visited();
        assert!(cell.is_visited());
        // Visiting leaves the walls alone
        assert_eq!(cell.wall_count(), 4);
    }
}
