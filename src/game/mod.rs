//! Core game logic module for Snake
//!
//! This module contains all the game logic without any I/O or rendering dependencies.
//! A [`Session`] is driven one [`Session::tick`] at a time and read back through
//! [`Session::snapshot`].

pub mod config;
pub mod direction;
pub mod engine;
pub mod error;
pub mod food;
pub mod grid;
pub mod rules;
pub mod state;

// Re-export commonly used types
pub use config::{GameConfig, RulesConfig};
pub use direction::Direction;
pub use engine::{Session, SessionStatus, Snapshot, StepInfo, StepResult};
pub use error::{ConfigError, SpawnError};
pub use food::FoodSpawner;
pub use grid::{Grid, Position, wrap};
pub use rules::{MoveOutcome, Rules};
pub use state::BodyChain;
