use rand::Rng;
use tracing::warn;

use super::error::SpawnError;
use super::grid::{Grid, Position};
use super::state::BodyChain;

/// Places food on free cells
///
/// Random candidates are drawn up to `max_attempts` times; after that the grid
/// is scanned in row-major order so a free cell is always found if one exists.
#[derive(Debug, Clone)]
pub struct FoodSpawner<R> {
    rng: R,
    max_attempts: u32,
}

impl<R: Rng> FoodSpawner<R> {
    pub fn new(rng: R, max_attempts: u32) -> Self {
        Self { rng, max_attempts }
    }

    /// Pick a cell the body does not occupy
    pub fn respawn(&mut self, grid: &Grid, body: &BodyChain) -> Result<Position, SpawnError> {
        if body.len() >= grid.area() {
            return Err(SpawnError::BoardFull { cells: grid.area() });
        }

        for _ in 0..self.max_attempts {
            let x = self.rng.gen_range(0..grid.width());
            let y = self.rng.gen_range(0..grid.height());
            let pos = Position::new(x, y);

            if !body.occupies(pos) {
                return Ok(pos);
            }
        }

        warn!(
            attempts = self.max_attempts,
            occupied = body.len(),
            "random food placement exhausted, scanning grid"
        );
        grid.cells()
            .find(|&pos| !body.occupies(pos))
            .ok_or(SpawnError::BoardFull { cells: grid.area() })
    }
}
