use super::cell::{Cell, Coord, Direction};

/// Mutable wall/visit state of a rectangular maze, owned by a single generation run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    data: Box<[Cell]>,
    width: u16,
    height: u16,
}

impl Grid {
    /// Creates a grid with every wall standing and every cell unvisited.
    pub fn new(width: u16, height: u16) -> Self {
        let data = vec![Cell::CLOSED; width as usize * height as usize].into_boxed_slice();
        Grid {
            data,
            width,
            height,
        }
    }

    pub fn height(&self) -> u16 {
        self.height
    }

    pub fn width(&self) -> u16 {
        self.width
    }

    /// Total number of cells.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Checks if the given coordinate is within the bounds of the grid.
    pub fn is_in_bounds(&self, coord: Coord) -> bool {
        coord.0 < self.width && coord.1 < self.height
    }

    fn ravel_index(&self, coord: Coord) -> usize {
        if !self.is_in_bounds(coord) {
            panic!(
                "Coordinate {:?} is out of bounds for a {}x{} grid",
                coord, self.width, self.height
            );
        }
        // Overflow-safe since width and height are u16 (assuming usize is at least 32 bits)
        coord.1 as usize * self.width as usize + coord.0 as usize
    }

    /// Returns the in-bounds cell one step from `coord` in `direction`, if any.
    pub fn neighbor(&self, coord: Coord, direction: Direction) -> Option<Coord> {
        let (x, y) = coord;
        // NOTE: wrapping_sub on 0 yields u16::MAX and saturating_add on u16::MAX stays there,
        // both of which fail the bounds check below since dimensions are at most u16::MAX.
        let next = match direction {
            Direction::North => (x, y.wrapping_sub(1)),
            Direction::South => (x, y.saturating_add(1)),
            Direction::West => (x.wrapping_sub(1), y),
            Direction::East => (x.saturating_add(1), y),
        };
        (self.is_in_bounds(coord) && self.is_in_bounds(next)).then_some(next)
    }

    pub fn is_visited(&self, coord: Coord) -> bool {
        self[coord].is_visited()
    }

    pub fn mark_visited(&mut self, coord: Coord) {
        let idx = self.ravel_index(coord);
        self.data[idx].mark_visited();
    }

    pub fn has_wall(&self, coord: Coord, direction: Direction) -> bool {
        self[coord].has_wall(direction)
    }

    /// Clears the wall of a single cell in the given direction. The wall on the other side is
    /// left untouched; callers carving a passage clear both.
    ///
    /// Returns `true` if a wall was removed, `false` if there was no wall.
    ///
    /// # Panics
    /// If `coord` is out of bounds.
    pub fn remove_wall(&mut self, coord: Coord, direction: Direction) -> bool {
        let idx = self.ravel_index(coord);
        self.data[idx].remove_wall(direction)
    }

    /// Iterates over all coordinates in row-major order.
    pub fn coords(&self) -> impl Iterator<Item = Coord> + use<> {
        let (width, height) = (self.width, self.height);
        (0..height).flat_map(move |y| (0..width).map(move |x| (x, y)))
    }

    /// Returns the neighbor in `direction` if the wall between the two cells is cleared on
    /// both sides.
    pub fn passage(&self, coord: Coord, direction: Direction) -> Option<Coord> {
        self.neighbor(coord, direction).filter(|&next| {
            !self.has_wall(coord, direction) && !self.has_wall(next, direction.opposite())
        })
    }

    /// Get the cells directly reachable from `coord` through open passages.
    pub fn open_neighbors(&self, coord: Coord) -> impl Iterator<Item = Coord> + '_ {
        Direction::ALL
            .into_iter()
            .filter_map(move |direction| self.passage(coord, direction))
    }

    /// Counts passages between adjacent cells. Each passage is counted once, from the cell on
    /// its west or north side.
    pub fn passage_count(&self) -> usize {
        self.coords()
            .map(|coord| {
                [Direction::East, Direction::South]
                    .into_iter()
                    .filter(|&d| self.passage(coord, d).is_some())
                    .count()
            })
            .sum()
    }
}

impl std::ops::Index<Coord> for Grid {
    type Output = Cell;

    fn index(&self, index: Coord) -> &Self::Output {
        &self.data[self.ravel_index(index)]
    }
}
