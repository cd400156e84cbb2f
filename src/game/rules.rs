use super::config::RulesConfig;
use super::grid::Position;
use super::state::BodyChain;

/// What a completed move ran into
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveOutcome {
    /// The new head landed on the rest of the body
    SelfCollision,
    /// The new head landed on the food
    AteFood,
    Clear,
}

/// Scoring, growth and speed policy
#[derive(Debug, Clone)]
pub struct Rules {
    config: RulesConfig,
    base_interval: u32,
}

impl Rules {
    pub fn new(config: RulesConfig, base_interval: u32) -> Self {
        Self {
            config,
            base_interval: base_interval.max(1),
        }
    }

    pub fn move_points(&self) -> u64 {
        self.config.move_points
    }

    pub fn food_bonus(&self) -> u64 {
        self.config.food_bonus
    }

    /// Ticks that must elapse between moves at `score`
    ///
    /// `max(1, base - score / speedup_points)`, non-increasing in score.
    pub fn interval(&self, score: u64) -> u32 {
        let reduction = score
            .checked_div(self.config.speedup_points)
            .unwrap_or(0);
        let interval = u64::from(self.base_interval).saturating_sub(reduction).max(1);
        interval as u32
    }

    /// Segments owed after eating, from the post-bonus score
    pub fn growth_for(&self, score: u64) -> u32 {
        let magnitude = score.checked_ilog10().unwrap_or(0);
        magnitude.saturating_mul(self.config.growth_scale)
    }

    /// Classify the chain right after a move
    pub fn judge(&self, body: &BodyChain, food: Option<Position>) -> MoveOutcome {
        let head = body.head();
        if body.collides_at(head) {
            MoveOutcome::SelfCollision
        } else if food == Some(head) {
            MoveOutcome::AteFood
        } else {
            MoveOutcome::Clear
        }
    }
}
