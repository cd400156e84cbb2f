use std::path::PathBuf;

use thiserror::Error;

/// Rejected session configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("grid width must be positive")]
    ZeroWidth,
    #[error("grid height must be positive")]
    ZeroHeight,
    #[error("grid dimension {0} does not fit in i32 coordinates")]
    DimensionTooLarge(usize),
    #[error("initial snake length must be positive")]
    ZeroInitialLength,
    #[error("initial snake length {length} exceeds grid width {width}")]
    InitialLengthTooLong { length: usize, width: usize },
    #[error("base interval must be at least one tick")]
    ZeroBaseInterval,
    #[error("failed to read config file {path}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse config")]
    Parse(#[from] serde_json::Error),
}

/// Food could not be placed
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SpawnError {
    #[error("no free cell left on a {cells}-cell board")]
    BoardFull { cells: usize },
}

