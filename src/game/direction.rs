use serde::{Deserialize, Serialize};

/// Direction the snake can move
///
/// Encoded as an integer mod 4 where consecutive values are 90 degree
/// clockwise turns: Right = 0, Down = 1, Left = 2, Up = 3.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    Right,
    Down,
    Left,
    Up,
}

impl Direction {
    /// All directions in encoding order
    pub const ALL: [Direction; 4] = [
        Direction::Right,
        Direction::Down,
        Direction::Left,
        Direction::Up,
    ];

    /// Integer encoding of this direction
    pub fn index(self) -> u8 {
        match self {
            Direction::Right => 0,
            Direction::Down => 1,
            Direction::Left => 2,
            Direction::Up => 3,
        }
    }

    /// Decode any integer, reduced mod 4
    pub fn from_index(index: i64) -> Self {
        Self::ALL[index.rem_euclid(4) as usize]
    }

    /// The exact reverse, `(index + 2) mod 4`
    pub fn opposite(self) -> Self {
        Self::from_index(i64::from(self.index()) + 2)
    }

    /// Returns true if turning from self to other would be a 180-degree turn
    pub fn is_opposite(&self, other: Direction) -> bool {
        self.opposite() == other
    }

    /// Returns the delta (dx, dy) for moving in this direction
    pub fn delta(&self) -> (i32, i32) {
        match self {
            Direction::Right => (1, 0),
            Direction::Down => (0, 1),
            Direction::Left => (-1, 0),
            Direction::Up => (0, -1),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_opposite_directions() {
        assert!(Direction::Up.is_opposite(Direction::Down));
        assert!(Direction::Down.is_opposite(Direction::Up));
        assert!(Direction::Left.is_opposite(Direction::Right));
        assert!(Direction::Right.is_opposite(Direction::Left));

        assert!(!Direction::Up.is_opposite(Direction::Left));
        assert!(!Direction::Up.is_opposite(Direction::Right));
        assert!(!Direction::Up.is_opposite(Direction::Up));
    }

    #[test]
    fn test_direction_delta() {
        assert_eq!(Direction::Up.delta(), (0, -1));
        assert_eq!(Direction::Down.delta(), (0, 1));
        assert_eq!(Direction::Left.delta(), (-1, 0));
        assert_eq!(Direction::Right.delta(), (1, 0));
    }

    #[test]
    fn test_index_encoding_wraps() {
        for direction in Direction::ALL {
            assert_eq!(Direction::from_index(i64::from(direction.index())), direction);
        }
        assert_eq!(Direction::from_index(4), Direction::Right);
        assert_eq!(Direction::from_index(-1), Direction::Up);
        assert_eq!(Direction::from_index(7), Direction::Up);
    }

    #[test]
    fn test_consecutive_indices_are_quarter_turns() {
        // A quarter turn never lands on the reverse
        for direction in Direction::ALL {
            let turned = Direction::from_index(i64::from(direction.index()) + 1);
            assert!(!direction.is_opposite(turned));
            assert_ne!(direction, turned);
        }
    }
}
