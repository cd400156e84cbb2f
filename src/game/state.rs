use std::collections::VecDeque;

use super::direction::Direction;
use super::grid::{Grid, Position};

/// The snake's occupied cells, head at index 0
#[derive(Debug, Clone, PartialEq)]
pub struct BodyChain {
    cells: VecDeque<Position>,
    pending_growth: u32,
}

impl BodyChain {
    /// Lay out `length` cells backward from `head`, opposite `facing`
    ///
    /// `length` of zero is bumped to one; the chain is never empty.
    pub fn new(grid: &Grid, head: Position, facing: Direction, length: usize) -> Self {
        let head = grid.wrap(head);
        let back = facing.opposite();
        let mut cells = VecDeque::with_capacity(length.max(1));
        cells.push_back(head);

        for _ in 1..length {
            let prev = cells[cells.len() - 1];
            cells.push_back(grid.step(prev, back));
        }

        Self {
            cells,
            pending_growth: 0,
        }
    }

    /// Get the head position
    pub fn head(&self) -> Position {
        self.cells[0]
    }

    /// Get the tail position (last segment)
    #[cfg(test)]
    pub(crate) fn tail(&self) -> Position {
        self.cells[self.cells.len() - 1]
    }

    /// Cells head first
    pub fn cells(&self) -> Vec<Position> {
        self.cells.iter().copied().collect()
    }

    /// Get the length of the snake
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Always false; kept alongside `len`
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn pending_growth(&self) -> u32 {
        self.pending_growth
    }

    /// Owe `segments` more cells, appended one per move
    pub fn grow(&mut self, segments: u32) {
        self.pending_growth = self.pending_growth.saturating_add(segments);
    }

    /// Shift the chain one step and return the new head
    ///
    /// Every segment takes its predecessor's pre-move position: pushing the new
    /// head in front and popping the old tail is that shift. With growth owed,
    /// the old tail cell stays as the newly appended segment.
    pub fn move_in(&mut self, grid: &Grid, direction: Direction) -> Position {
        let new_head = grid.step(self.head(), direction);
        self.cells.push_front(new_head);

        if self.pending_growth > 0 {
            self.pending_growth -= 1;
        } else {
            self.cells.pop_back();
        }

        new_head
    }

    /// Check if position collides with snake body (excluding head)
    pub fn collides_at(&self, pos: Position) -> bool {
        self.cells.iter().skip(1).any(|&cell| cell == pos)
    }

    /// Whether any cell, head included, sits at `pos`
    pub fn occupies(&self, pos: Position) -> bool {
        self.cells.contains(&pos)
    }

    /// True when the head shares a cell with the rest of the body
    pub fn is_self_colliding(&self) -> bool {
        self.collides_at(self.head())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grid() -> Grid {
        Grid::new(10, 10).unwrap()
    }

    #[test]
    fn test_snake_creation() {
        let snake = BodyChain::new(&grid(), Position::new(5, 5), Direction::Right, 3);
        assert_eq!(snake.len(), 3);
        assert_eq!(snake.head(), Position::new(5, 5));
        assert_eq!(
            snake.cells(),
            vec![
                Position::new(5, 5),
                Position::new(4, 5),
                Position::new(3, 5)
            ]
        );
        assert_eq!(snake.pending_growth(), 0);
    }

    #[test]
    fn test_creation_wraps_behind_head() {
        let snake = BodyChain::new(&grid(), Position::new(1, 4), Direction::Right, 3);
        assert_eq!(snake.tail(), Position::new(9, 4));

        let snake = BodyChain::new(&grid(), Position::new(2, 0), Direction::Down, 2);
        assert_eq!(snake.tail(), Position::new(2, 9));
    }

    #[test]
    fn test_move_shifts_from_prior_positions() {
        let grid = grid();
        let mut snake = BodyChain::new(&grid, Position::new(5, 5), Direction::Right, 4);
        let before = snake.cells();

        let head = snake.move_in(&grid, Direction::Down);

        assert_eq!(head, Position::new(5, 6));
        let after = snake.cells();
        assert_eq!(after.len(), before.len());
        for i in 1..after.len() {
            assert_eq!(after[i], before[i - 1]);
        }
    }

    #[test]
    fn test_growth_appends_at_old_tail() {
        let grid = grid();
        let mut snake = BodyChain::new(&grid, Position::new(5, 5), Direction::Right, 3);
        snake.grow(2);

        let old_tail = snake.tail();
        snake.move_in(&grid, Direction::Right);
        assert_eq!(snake.len(), 4);
        assert_eq!(snake.tail(), old_tail);
        assert_eq!(snake.pending_growth(), 1);

        snake.move_in(&grid, Direction::Right);
        assert_eq!(snake.len(), 5);
        assert_eq!(snake.pending_growth(), 0);

        snake.move_in(&grid, Direction::Right);
        assert_eq!(snake.len(), 5);
    }

    #[test]
    fn test_move_wraps_head() {
        let grid = Grid::new(50, 50).unwrap();
        let mut snake = BodyChain::new(&grid, Position::new(0, 7), Direction::Left, 1);
        assert_eq!(snake.move_in(&grid, Direction::Left), Position::new(49, 7));
    }

    #[test]
    fn test_collision_detection() {
        let snake = BodyChain::new(&grid(), Position::new(5, 5), Direction::Right, 3);
        assert!(!snake.collides_at(Position::new(5, 5))); // head
        assert!(snake.collides_at(Position::new(4, 5))); // body
        assert!(!snake.collides_at(Position::new(9, 9))); // empty

        assert!(snake.occupies(Position::new(5, 5)));
        assert!(snake.occupies(Position::new(3, 5)));
        assert!(!snake.occupies(Position::new(6, 5)));
        assert!(!snake.is_self_colliding());
    }

    #[test]
    fn test_loop_back_into_body() {
        let grid = grid();
        let mut snake = BodyChain::new(&grid, Position::new(5, 5), Direction::Right, 5);
        snake.move_in(&grid, Direction::Down);
        snake.move_in(&grid, Direction::Left);
        snake.move_in(&grid, Direction::Up);
        assert!(snake.is_self_colliding());
    }

    #[test]
    fn test_chasing_tail_is_safe_without_growth() {
        // A 4-cell square loop: the head enters the cell the tail just left
        let grid = grid();
        let mut snake = BodyChain::new(&grid, Position::new(5, 5), Direction::Right, 4);
        snake.move_in(&grid, Direction::Down);
        snake.move_in(&grid, Direction::Left);
        snake.move_in(&grid, Direction::Up);
        assert!(!snake.is_self_colliding());
    }
}
