use super::direction::Direction;
use super::error::ConfigError;

/// Map any integer coordinate into `[0, extent)`
///
/// `extent` must be positive; negative coordinates wrap from the far edge.
pub fn wrap(coord: i32, extent: i32) -> i32 {
    coord.rem_euclid(extent)
}

/// A position on the game grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Move position by delta
    pub fn moved_by(&self, dx: i32, dy: i32) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }

    /// Move position in a direction
    pub fn moved_in_direction(&self, direction: Direction) -> Self {
        let (dx, dy) = direction.delta();
        self.moved_by(dx, dy)
    }
}

/// Toroidal playfield
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Grid {
    width: i32,
    height: i32,
}

impl Grid {
    pub fn new(width: usize, height: usize) -> Result<Self, ConfigError> {
        if width == 0 {
            return Err(ConfigError::ZeroWidth);
        }
        if height == 0 {
            return Err(ConfigError::ZeroHeight);
        }
        let width = i32::try_from(width).map_err(|_| ConfigError::DimensionTooLarge(width))?;
        let height = i32::try_from(height).map_err(|_| ConfigError::DimensionTooLarge(height))?;
        Ok(Self { width, height })
    }

    pub fn width(&self) -> i32 {
        self.width
    }

    pub fn height(&self) -> i32 {
        self.height
    }

    /// Number of cells on the board
    pub fn area(&self) -> usize {
        self.width as usize * self.height as usize
    }

    pub fn center(&self) -> Position {
        Position::new(self.width / 2, self.height / 2)
    }

    /// Bring a position back onto the board on both axes
    pub fn wrap(&self, pos: Position) -> Position {
        Position::new(wrap(pos.x, self.width), wrap(pos.y, self.height))
    }

    /// One step in `direction`, reappearing on the opposite edge
    pub fn step(&self, pos: Position, direction: Direction) -> Position {
        self.wrap(pos.moved_in_direction(direction))
    }

    #[cfg(test)]
    pub(crate) fn contains(&self, pos: Position) -> bool {
        (0..self.width).contains(&pos.x) && (0..self.height).contains(&pos.y)
    }

    /// Every cell in row-major order
    pub fn cells(&self) -> impl Iterator<Item = Position> + '_ {
        (0..self.height).flat_map(move |y| (0..self.width).map(move |x| Position::new(x, y)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_position_movement() {
        let pos = Position::new(5, 5);
        assert_eq!(pos.moved_by(1, 0), Position::new(6, 5));
        assert_eq!(pos.moved_by(-1, 0), Position::new(4, 5));
        assert_eq!(pos.moved_in_direction(Direction::Down), Position::new(5, 6));
        assert_eq!(pos.moved_in_direction(Direction::Up), Position::new(5, 4));
    }

    #[test]
    fn test_wrap_handles_negative_and_overflow() {
        assert_eq!(wrap(-1, 50), 49);
        assert_eq!(wrap(50, 50), 0);
        assert_eq!(wrap(-51, 50), 49);
        assert_eq!(wrap(123, 50), 23);
        assert_eq!(wrap(7, 50), 7);
    }

    #[test]
    fn test_step_reappears_on_opposite_edge() {
        let grid = Grid::new(50, 20).unwrap();
        assert_eq!(
            grid.step(Position::new(0, 3), Direction::Left),
            Position::new(49, 3)
        );
        assert_eq!(
            grid.step(Position::new(49, 3), Direction::Right),
            Position::new(0, 3)
        );
        assert_eq!(
            grid.step(Position::new(4, 0), Direction::Up),
            Position::new(4, 19)
        );
        assert_eq!(
            grid.step(Position::new(4, 19), Direction::Down),
            Position::new(4, 0)
        );
    }

    #[test]
    fn test_grid_rejects_zero_extent() {
        assert!(matches!(Grid::new(0, 5), Err(ConfigError::ZeroWidth)));
        assert!(matches!(Grid::new(5, 0), Err(ConfigError::ZeroHeight)));
    }

    #[test]
    fn test_bounds_and_cells() {
        let grid = Grid::new(3, 2).unwrap();
        assert_eq!(grid.area(), 6);
        assert_eq!(grid.center(), Position::new(1, 1));
        assert!(grid.contains(Position::new(2, 1)));
        assert!(!grid.contains(Position::new(3, 0)));
        assert!(!grid.contains(Position::new(0, -1)));

        let cells: Vec<_> = grid.cells().collect();
        assert_eq!(cells.len(), 6);
        assert_eq!(cells[0], Position::new(0, 0));
        assert_eq!(cells[3], Position::new(0, 1));
        assert!(cells.iter().all(|&cell| grid.contains(cell)));
    }
}
