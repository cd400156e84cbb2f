use rand::SeedableRng;
use rand::rngs::SmallRng;
use tracing::{debug, info};

use super::{
    config::GameConfig,
    direction::Direction,
    error::{ConfigError, SpawnError},
    food::FoodSpawner,
    grid::{Grid, Position},
    rules::{MoveOutcome, Rules},
    state::BodyChain,
};

/// Lifecycle of a session; every state but `Running` is terminal
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SessionStatus {
    Running,
    /// The snake ran into itself
    Lost,
    /// The player quit
    Ended,
    /// No free cell was left for food
    Won,
}

impl SessionStatus {
    pub fn is_terminal(self) -> bool {
        self != SessionStatus::Running
    }
}

/// Information about a step
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct StepInfo {
    /// Whether the gating interval elapsed and the snake moved
    pub moved: bool,
    /// Whether the snake ate food this step
    pub ate_food: bool,
    /// Score gained this step
    pub points: u64,
    /// Segments newly owed this step
    pub growth: u32,
}

/// Result of a game step
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StepResult {
    /// Status after the step
    pub status: SessionStatus,
    /// Whether this step moved the session into a terminal status
    pub terminated: bool,
    pub info: StepInfo,
}

/// Owned view of a session for rendering
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Snapshot {
    pub grid: Grid,
    /// Body cells, head first
    pub cells: Vec<Position>,
    pub food: Option<Position>,
    pub score: u64,
    pub status: SessionStatus,
    pub tick: u64,
    pub pending_growth: u32,
    /// Ticks between moves at the current score
    pub interval: u32,
}

/// One game: body, food, score and direction advanced tick by tick
pub struct Session {
    grid: Grid,
    rules: Rules,
    body: BodyChain,
    heading: Direction,
    pending_direction: Option<Direction>,
    food: Option<Position>,
    score: u64,
    tick: u64,
    ticks_since_move: u32,
    status: SessionStatus,
    spawner: FoodSpawner<SmallRng>,
}

impl Session {
    /// Start a session with the snake centered and facing right
    pub fn new(config: &GameConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let grid = Grid::new(config.grid_width, config.grid_height)?;
        let rng = match config.rng_seed {
            Some(seed) => SmallRng::seed_from_u64(seed),
            None => SmallRng::from_entropy(),
        };
        let attempts = config
            .spawn_attempts
            .unwrap_or_else(|| u32::try_from(grid.area()).unwrap_or(u32::MAX));

        let heading = Direction::Right;
        let mut body = BodyChain::new(&grid, grid.center(), heading, config.initial_snake_length);
        body.grow(config.initial_pending_growth);

        let mut session = Self {
            grid,
            rules: Rules::new(config.rules.clone(), config.base_interval),
            body,
            heading,
            pending_direction: None,
            food: None,
            score: 0,
            tick: 0,
            ticks_since_move: 0,
            status: SessionStatus::Running,
            spawner: FoodSpawner::new(rng, attempts),
        };
        session.place_food();

        debug!(
            width = config.grid_width,
            height = config.grid_height,
            length = config.initial_snake_length,
            food = ?session.food,
            "session started"
        );
        Ok(session)
    }

    pub fn status(&self) -> SessionStatus {
        self.status
    }

    pub fn score(&self) -> u64 {
        self.score
    }

    pub fn tick_count(&self) -> u64 {
        self.tick
    }

    pub fn food(&self) -> Option<Position> {
        self.food
    }

    /// Direction of the last completed move
    pub fn heading(&self) -> Direction {
        self.heading
    }

    /// Direction the next move will take
    pub fn next_direction(&self) -> Direction {
        self.pending_direction.unwrap_or(self.heading)
    }

    /// Ticks between moves at the current score
    pub fn interval(&self) -> u32 {
        self.rules.interval(self.score)
    }

    /// Buffer a turn for the next move
    ///
    /// Reversing the heading is refused while the snake is longer than one
    /// cell. Returns whether the request was accepted.
    pub fn request_direction(&mut self, direction: Direction) -> bool {
        if self.status.is_terminal() {
            return false;
        }
        if self.body.len() > 1 && self.heading.is_opposite(direction) {
            return false;
        }
        self.pending_direction = Some(direction);
        true
    }

    /// Quit; has no effect once the session is over
    pub fn request_end(&mut self) {
        if self.status == SessionStatus::Running {
            self.finish(SessionStatus::Ended);
        }
    }

    /// Advance one simulation step
    pub fn tick(&mut self) -> StepResult {
        self.tick += 1;
        if self.status.is_terminal() {
            return self.result(false, StepInfo::default());
        }

        self.ticks_since_move += 1;
        if self.ticks_since_move < self.interval() {
            return self.result(false, StepInfo::default());
        }
        self.ticks_since_move = 0;

        let direction = self.pending_direction.take().unwrap_or(self.heading);
        self.heading = direction;
        self.body.move_in(&self.grid, direction);

        let mut info = StepInfo {
            moved: true,
            ..StepInfo::default()
        };

        match self.rules.judge(&self.body, self.food) {
            MoveOutcome::SelfCollision => {
                self.finish(SessionStatus::Lost);
                return self.result(true, info);
            }
            MoveOutcome::AteFood => {
                info.ate_food = true;
                info.points = self.rules.move_points() + self.rules.food_bonus();
                self.score = self.score.saturating_add(info.points);
                info.growth = self.rules.growth_for(self.score);
                self.body.grow(info.growth);
                debug!(
                    score = self.score,
                    growth = info.growth,
                    length = self.body.len(),
                    "food eaten"
                );
                self.food = None;
                self.place_food();
            }
            MoveOutcome::Clear => {
                info.points = self.rules.move_points();
                self.score = self.score.saturating_add(info.points);
            }
        }

        let terminated = self.status.is_terminal();
        self.result(terminated, info)
    }

    /// Owned copy of everything a renderer needs
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            grid: self.grid,
            cells: self.body.cells(),
            food: self.food,
            score: self.score,
            status: self.status,
            tick: self.tick,
            pending_growth: self.body.pending_growth(),
            interval: self.interval(),
        }
    }

    fn place_food(&mut self) {
        match self.spawner.respawn(&self.grid, &self.body) {
            Ok(pos) => self.food = Some(pos),
            Err(SpawnError::BoardFull { cells }) => {
                debug!(cells, "board full");
                self.food = None;
                self.finish(SessionStatus::Won);
            }
        }
    }

    fn finish(&mut self, status: SessionStatus) {
        self.status = status;
        self.pending_direction = None;
        info!(
            ?status,
            score = self.score,
            length = self.body.len(),
            ticks = self.tick,
            "session over"
        );
    }

    fn result(&self, terminated: bool, info: StepInfo) -> StepResult {
        StepResult {
            status: self.status,
            terminated,
            info,
        }
    }
}
