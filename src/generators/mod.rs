use rand::{Rng, SeedableRng, rngs::StdRng};

pub mod loops;
pub mod recur_backtrack;

pub use loops::{MAX_LOOP_DENSITY, add_loops, loop_sample_count};
pub use recur_backtrack::recursive_backtrack;

use crate::{
    error::MazeError,
    maze::{Coord, Direction, Grid, Maze},
};

/// Get a random number generator, optionally seeded for reproducibility.
pub fn get_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(s) => StdRng::seed_from_u64(s),
        None => StdRng::from_os_rng(),
    }
}

/// Opens the passage between `from` and its neighbor `to` lying in `direction`, clearing the
/// wall on both sides. Returns `true` if either wall was still standing.
pub(crate) fn open_passage(grid: &mut Grid, from: Coord, direction: Direction, to: Coord) -> bool {
    let removed_from = grid.remove_wall(from, direction);
    let removed_to = grid.remove_wall(to, direction.opposite());
    removed_from || removed_to
}

#[derive(Debug, Clone, PartialEq)]
pub struct GeneratorConfig {
    /// Cell the carver starts from.
    pub start: Coord,
    /// Fraction of the cell count sampled for extra openings once the maze is carved.
    /// Must lie within `[0, MAX_LOOP_DENSITY]`.
    pub loop_density: f64,
    /// Reject finish coordinates outside the maze. When disabled, any finish is stored as is.
    pub validate_finish: bool,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            start: (0, 0),
            loop_density: 0.4,
            validate_finish: true,
        }
    }
}

/// Something that can build a [`Maze`] of a given size.
pub trait MazeGenerator {
    fn generate<R: Rng + ?Sized>(
        &self,
        width: u16,
        height: u16,
        finish: Coord,
        rng: &mut R,
    ) -> Result<Maze, MazeError>;
}

/// Randomized depth-first backtracking followed by a loop injection pass.
#[derive(Debug, Clone, Default)]
pub struct RecursiveBacktracking {
    config: GeneratorConfig,
}

impl RecursiveBacktracking {
    pub fn new(config: GeneratorConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }
}

impl std::fmt::Display for RecursiveBacktracking {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Recursive Backtracking with loops")
    }
}

impl MazeGenerator for RecursiveBacktracking {
    fn generate<R: Rng + ?Sized>(
        &self,
        width: u16,
        height: u16,
        finish: Coord,
        rng: &mut R,
    ) -> Result<Maze, MazeError> {
        MazeError::check_dimensions(width, height)?;
        if self.config.validate_finish {
            MazeError::check_coord(finish, width, height)?;
        } else if finish.0 >= width || finish.1 >= height {
            tracing::warn!(
                "[generate] finish {:?} lies outside the {}x{} maze",
                finish,
                width,
                height
            );
        }
        MazeError::check_coord(self.config.start, width, height)?;
        MazeError::check_loop_density(self.config.loop_density, MAX_LOOP_DENSITY)?;

        tracing::debug!(
            "[generate] {}x{} maze from {:?} to {:?}",
            width,
            height,
            self.config.start,
            finish
        );

        let mut grid = Grid::new(width, height);
        recursive_backtrack(&mut grid, self.config.start, rng)?;
        add_loops(&mut grid, self.config.loop_density, rng);

        Ok(Maze::new(grid, finish))
    }
}

/// Generates a maze with the default configuration, optionally seeded for reproducibility.
pub fn generate_maze(
    width: u16,
    height: u16,
    finish: Coord,
    seed: Option<u64>,
) -> Result<Maze, MazeError> {
    RecursiveBacktracking::default().generate(width, height, finish, &mut get_rng(seed))
}

/// Counts the cells reachable from `start` through open passages.
#[cfg(test)]
pub(crate) fn reachable_from(grid: &Grid, start: Coord) -> usize {
    let mut seen = vec![false; grid.len()];
    let index = |(x, y): Coord| y as usize * grid.width() as usize + x as usize;
    let mut queue = std::collections::VecDeque::from([start]);
    seen[index(start)] = true;
    let mut count = 0;
    while let Some(coord) = queue.pop_front() {
        count += 1;
        for next in grid.open_neighbors(coord) {
            if !seen[index(next)] {
                seen[index(next)] = true;
                queue.push_back(next);
            }
        }
    }
    count
}
