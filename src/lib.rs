//! Wrap Snake - a tick-driven Snake game on a wrap-around grid
//!
//! This library provides:
//! - Core simulation (game module): grid, body chain, food, rules and the session state machine
//! - Terminal frontend pieces: key mapping (input), ratatui drawing (render),
//!   in-memory play statistics (metrics) and the interactive loop (modes)

pub mod game;
pub mod input;
pub mod metrics;
pub mod modes;
pub mod render;
