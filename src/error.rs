use thiserror::Error;

use crate::maze::Coord;

/// Errors raised while validating a generation request.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum MazeError {
    #[error("Invalid maze dimensions {width}x{height}: both must be at least 1")]
    InvalidDimension { width: u16, height: u16 },
    #[error("Coordinate {coord:?} is outside the {width}x{height} maze")]
    OutOfBoundsCoordinate {
        coord: Coord,
        width: u16,
        height: u16,
    },
    #[error("Invalid loop density {density}: must be a number between 0 and {max}")]
    InvalidLoopDensity { density: f64, max: f64 },
}

impl MazeError {
    /// Checks that a maze can be built with the given dimensions.
    pub fn check_dimensions(width: u16, height: u16) -> Result<(), MazeError> {
        if width == 0 || height == 0 {
            return Err(MazeError::InvalidDimension { width, height });
        }
        Ok(())
    }

    /// Checks that `coord` lies inside a `width` x `height` maze.
    pub fn check_coord(coord: Coord, width: u16, height: u16) -> Result<(), MazeError> {
        if coord.0 >= width || coord.1 >= height {
            return Err(MazeError::OutOfBoundsCoordinate {
                coord,
                width,
                height,
            });
        }
        Ok(())
    }

    /// Checks that `density` is finite and within `[0, max]`.
    pub fn check_loop_density(density: f64, max: f64) -> Result<(), MazeError> {
        if !(0.0..=max).contains(&density) {
            return Err(MazeError::InvalidLoopDensity { density, max });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_check_dimensions() {
        assert!(MazeError::check_dimensions(1, 1).is_ok());
        assert_eq!(
            MazeError::check_dimensions(0, 3),
            Err(MazeError::InvalidDimension {
                width: 0,
                height: 3
            })
        );
        assert!(MazeError::check_dimensions(3, 0).is_err());
    }

    #[test]
    fn test_check_coord() {
        assert!(MazeError::check_coord((2, 1), 3, 2).is_ok());
        assert!(MazeError::check_coord((3, 1), 3, 2).is_err());
        assert!(MazeError::check_coord((0, 2), 3, 2).is_err());
    }

    #[test]
    fn test_check_loop_density() {
        assert!(MazeError::check_loop_density(0.0, 4.0).is_ok());
        assert!(MazeError::check_loop_density(4.0, 4.0).is_ok());
        assert!(MazeError::check_loop_density(-0.1, 4.0).is_err());
        assert!(MazeError::check_loop_density(4.5, 4.0).is_err());
        assert!(MazeError::check_loop_density(f64::NAN, 4.0).is_err());
        assert!(MazeError::check_loop_density(f64::INFINITY, 4.0).is_err());
    }

    #[test]
    fn test_error_message() {
        let err = MazeError::OutOfBoundsCoordinate {
            coord: (7, 0),
            width: 5,
            height: 5,
        };
        assert_eq!(err.to_string(), "Coordinate (7, 0) is outside the 5x5 maze");
    }
}
