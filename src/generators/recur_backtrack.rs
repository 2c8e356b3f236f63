use rand::{Rng, seq::SliceRandom};

use crate::{
    error::MazeError,
    generators::open_passage,
    maze::{Coord, Direction, Grid},
};

/// Carves a perfect maze into `grid` with a randomized depth-first traversal from `start`.
///
/// The traversal keeps an explicit stack of the cells leading to the current one instead of
/// recursing, so its depth is bounded by the number of cells rather than the call stack.
/// Every cell reachable from `start` ends up visited and joined by exactly one path.
///
/// Returns the number of passages carved.
pub fn recursive_backtrack<R: Rng + ?Sized>(
    grid: &mut Grid,
    start: Coord,
    rng: &mut R,
) -> Result<usize, MazeError> {
    MazeError::check_coord(start, grid.width(), grid.height())?;

    let mut directions = Direction::ALL;
    let mut stack = Vec::with_capacity(grid.len());
    let mut current = start;
    let mut carved = 0;
    grid.mark_visited(current);

    loop {
        // Reshuffle on every step so the passage layout does not follow a fixed preference
        directions.shuffle(rng);
        let next = directions.iter().find_map(|&direction| {
            grid.neighbor(current, direction)
                .filter(|&neighbor| !grid.is_visited(neighbor))
                .map(|neighbor| (direction, neighbor))
        });

        match next {
            Some((direction, neighbor)) => {
                tracing::trace!("[carve] {:?} -{}-> {:?}", current, direction, neighbor);
                open_passage(grid, current, direction, neighbor);
                stack.push(current);
                grid.mark_visited(neighbor);
                current = neighbor;
                carved += 1;
            }
            // Dead end, backtrack. An empty stack means we are back at the start with nothing
            // left to visit.
            None => match stack.pop() {
                Some(previous) => current = previous,
                None => break,
            },
        }
    }

    tracing::debug!("[carve] carved {} passages starting from {:?}", carved, start);
    Ok(carved)
}
