
use crate::grid::Axial;

use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    /// A layout was requested for a level without tiles.
    #[error("the level contains no tiles to lay out")]
    EmptyLevel,
    /// Two tiles claimed the same coordinates.
    #[error("the coordinates {0} are already occupied by another tile")]
    DuplicateCoordinate(Axial),
    /// The configuration file cannot be used.
    #[error("invalid configuration in {}", .path.display())]
    Config {
        path: PathBuf,
        #[source]
        source: ConfigError,
    },
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("the file cannot be read")]
    Read(#[from] std::io::Error),
    #[error("the file is malformed")]
    Parse(#[from] ron::error::SpannedError),
    #[error("the hex radius {0} is outside of 1..={max}", max = crate::config::MAX_HEX_RADIUS)]
    HexRadius(u32),
}
