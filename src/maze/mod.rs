pub mod cell;
pub mod grid;

pub use cell::{Cell, Coord, Direction};
pub use grid::Grid;

/// A finished maze: the carved grid plus the cell the player should reach.
///
/// A `Maze` is only produced once generation is done and offers no way to mutate its walls.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Maze {
    grid: Grid,
    finish: Coord,
}

impl Maze {
    pub(crate) fn new(grid: Grid, finish: Coord) -> Self {
        Maze { grid, finish }
    }

    /// Returns the height of the maze in cells.
    pub fn height(&self) -> u16 {
        self.grid.height()
    }

    /// Returns the width of the maze in cells.
    pub fn width(&self) -> u16 {
        self.grid.width()
    }

    pub fn finish(&self) -> Coord {
        self.finish
    }

    /// Read-only view of the underlying grid.
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Checks if the given coordinate is within the bounds of the maze.
    pub fn is_in_bounds(&self, coord: Coord) -> bool {
        self.grid.is_in_bounds(coord)
    }

    /// Checks if there is a wall on the `direction` side of `coord`.
    ///
    /// # Panics
    /// If `coord` is out of bounds.
    pub fn has_wall(&self, coord: Coord, direction: Direction) -> bool {
        self.grid.has_wall(coord, direction)
    }

    /// Whether the generator reached this cell. After a successful generation every cell is
    /// visited.
    pub fn is_visited(&self, coord: Coord) -> bool {
        self.grid.is_visited(coord)
    }

    /// Number of open passages between adjacent cells.
    pub fn passage_count(&self) -> usize {
        self.grid.passage_count()
    }

    /// Get the cells directly reachable from `coord`, i.e. the in-bounds neighbors with no
    /// wall in between.
    pub fn open_neighbors(&self, coord: Coord) -> impl Iterator<Item = Coord> + '_ {
        self.grid.open_neighbors(coord)
    }
}
