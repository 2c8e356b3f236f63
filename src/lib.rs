//! Maze generation by randomized depth-first backtracking, followed by a pass that knocks out
//! extra walls so the maze has more than one route between some cells.

pub mod error;
pub mod generators;
pub mod maze;

pub use error::MazeError;
pub use generators::{GeneratorConfig, MazeGenerator, RecursiveBacktracking, generate_maze};
pub use maze::{Coord, Direction, Maze};
