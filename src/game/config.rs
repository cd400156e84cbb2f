use std::path::Path;

use serde::{Deserialize, Serialize};

use super::error::ConfigError;

/// Scoring, growth and speed policy
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RulesConfig {
    /// Points for every completed move
    pub move_points: u64,
    /// Points for eating food
    pub food_bonus: u64,
    /// Score needed to shave one tick off the move interval (0 disables speedup)
    pub speedup_points: u64,
    /// Segments owed per order of magnitude of the score after eating
    pub growth_scale: u32,
}

impl Default for RulesConfig {
    fn default() -> Self {
        Self {
            move_points: 10,
            food_bonus: 1000,
            speedup_points: 10_000,
            growth_scale: 1,
        }
    }
}

/// Configuration for the game
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Width of the game grid
    pub grid_width: usize,
    /// Height of the game grid
    pub grid_height: usize,
    /// Initial length of the snake
    pub initial_snake_length: usize,
    /// Ticks between moves at score zero
    pub base_interval: u32,
    /// Segments owed before the first move
    pub initial_pending_growth: u32,
    /// Random food candidates tried before scanning the grid (defaults to the grid area)
    pub spawn_attempts: Option<u32>,
    /// Seed for food placement; entropy when absent
    pub rng_seed: Option<u64>,
    pub rules: RulesConfig,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            grid_width: 50,
            grid_height: 50,
            initial_snake_length: 3,
            base_interval: 12,
            initial_pending_growth: 0,
            spawn_attempts: None,
            rng_seed: None,
            rules: RulesConfig::default(),
        }
    }
}

impl GameConfig {
    /// Create a new configuration with custom grid size
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            grid_width: width,
            grid_height: height,
            ..Default::default()
        }
    }

    /// Create a small grid for testing
    pub fn small() -> Self {
        Self::new(10, 10)
    }

    /// Create a large grid
    pub fn large() -> Self {
        Self::new(80, 80)
    }

    /// Same configuration with a fixed food seed
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.rng_seed = Some(seed);
        self
    }

    /// Check the invariants a session relies on
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.grid_width == 0 {
            return Err(ConfigError::ZeroWidth);
        }
        if self.grid_height == 0 {
            return Err(ConfigError::ZeroHeight);
        }
        for extent in [self.grid_width, self.grid_height] {
            if i32::try_from(extent).is_err() {
                return Err(ConfigError::DimensionTooLarge(extent));
            }
        }
        if self.initial_snake_length == 0 {
            return Err(ConfigError::ZeroInitialLength);
        }
        // The starting body is laid out along one row
        if self.initial_snake_length > self.grid_width {
            return Err(ConfigError::InitialLengthTooLong {
                length: self.initial_snake_length,
                width: self.grid_width,
            });
        }
        if self.base_interval == 0 {
            return Err(ConfigError::ZeroBaseInterval);
        }
        Ok(())
    }

    /// Parse a JSON configuration; missing fields take their defaults
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Load and validate a JSON configuration file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let json = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&json)
    }
}
