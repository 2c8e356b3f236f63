use rand::Rng;

use crate::{
    generators::open_passage,
    maze::{Direction, Grid},
};

/// Highest accepted loop density. At this point every cell is sampled four times on average.
pub const MAX_LOOP_DENSITY: f64 = 4.0;

/// Number of cells [`add_loops`] samples for a maze of the given size. The density is clamped
/// to `[0, MAX_LOOP_DENSITY]` so the pass stays linear in the cell count.
pub fn loop_sample_count(width: u16, height: u16, density: f64) -> usize {
    // NaN survives the clamp and then saturates to zero in the cast
    let density = density.clamp(0.0, MAX_LOOP_DENSITY);
    (density * width as f64 * height as f64).floor() as usize
}

/// Knocks down extra walls to turn a perfect maze into one with cycles.
///
/// Samples `floor(density * width * height)` random cells, each paired with a random
/// direction, and opens the passage between the cell and its neighbor on that side. Visit
/// state is ignored and the same cell may be drawn more than once. Samples pointing out of
/// the grid are skipped, so the outer boundary stays closed.
///
/// Returns the number of passages that were actually opened, which excludes skipped samples
/// and samples that hit an already open passage.
pub fn add_loops<R: Rng + ?Sized>(grid: &mut Grid, density: f64, rng: &mut R) -> usize {
    if grid.is_empty() {
        return 0;
    }

    let samples = loop_sample_count(grid.width(), grid.height(), density);
    let mut opened = 0;
    for _ in 0..samples {
        let coord = (
            rng.random_range(0..grid.width()),
            rng.random_range(0..grid.height()),
        );
        let direction = Direction::ALL[rng.random_range(0..Direction::ALL.len())];
        let Some(neighbor) = grid.neighbor(coord, direction) else {
            continue;
        };
        if open_passage(grid, coord, direction, neighbor) {
            opened += 1;
        }
    }

    tracing::debug!(
        "[loops] opened {} new passages out of {} samples",
        opened,
        samples
    );
    opened
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generators::{get_rng, recur_backtrack::recursive_backtrack};

    fn boundary_closed(grid: &Grid) -> bool {
        let (w, h) = (grid.width(), grid.height());
        (0..w).all(|x| grid.has_wall((x, 0), Direction::North))
            && (0..w).all(|x| grid.has_wall((x, h - 1), Direction::South))
            && (0..h).all(|y| grid.has_wall((0, y), Direction::West))
            && (0..h).all(|y| grid.has_wall((w - 1, y), Direction::East))
    }

    #[test]
    fn test_loop_sample_count() {
        assert_eq!(loop_sample_count(1, 1, 0.4), 0);
        assert_eq!(loop_sample_count(2, 1, 0.4), 0);
        assert_eq!(loop_sample_count(5, 1, 0.4), 2);
        assert_eq!(loop_sample_count(10, 10, 0.4), 40);
        assert_eq!(loop_sample_count(10, 10, 0.0), 0);
        assert_eq!(loop_sample_count(10, 10, -1.0), 0);
        assert_eq!(loop_sample_count(10, 10, f64::NAN), 0);
    }

    #[test]
    fn test_loop_sample_count_is_capped() {
        assert_eq!(loop_sample_count(10, 10, f64::INFINITY), 400);
        assert_eq!(loop_sample_count(10, 10, 1e12), 400);
        assert_eq!(loop_sample_count(10, 10, MAX_LOOP_DENSITY), 400);
    }

    #[test]
    fn test_add_loops_bound() {
        let mut grid = Grid::new(15, 15);
        let mut rng = get_rng(Some(5));
        recursive_backtrack(&mut grid, (0, 0), &mut rng).unwrap();
        let tree_passages = grid.passage_count();

        let opened = add_loops(&mut grid, 0.4, &mut rng);
        assert!(opened <= loop_sample_count(15, 15, 0.4));
        assert_eq!(grid.passage_count(), tree_passages + opened);
        assert!(boundary_closed(&grid));
    }

    #[test]
    fn test_add_loops_on_closed_grid() {
        // Loops do not care about visit state, so they open walls on a fresh grid too
        let mut grid = Grid::new(20, 20);
        let opened = add_loops(&mut grid, 0.4, &mut get_rng(Some(9)));
        assert!(opened > 0);
        assert_eq!(grid.passage_count(), opened);
        assert!(boundary_closed(&grid));
        assert!(grid.coords().all(|c| !grid.is_visited(c)));
    }

    #[test]
    fn test_add_loops_single_cell() {
        let mut grid = Grid::new(1, 1);
        // Every direction leaves the grid, even with a high density
        assert_eq!(add_loops(&mut grid, 8.0, &mut get_rng(Some(1))), 0);
        assert_eq!(grid, Grid::new(1, 1));
    }

    #[test]
    fn test_zero_density() {
        let mut grid = Grid::new(6, 6);
        assert_eq!(add_loops(&mut grid, 0.0, &mut get_rng(Some(1))), 0);
        assert_eq!(grid.passage_count(), 0);
    }
}
