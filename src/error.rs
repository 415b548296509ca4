//! Error types for the simulation core.

use std::collections::TryReserveError;
use std::io;
use thiserror::Error;

/// Errors surfaced by the grid and buffer layer.
#[derive(Debug, Error)]
pub enum LifeError {
    /// A cell access outside the grid extent. The generation loop validates
    /// its coordinates up front, so this only fires on misuse of the
    /// checked accessors.
    #[error("cell ({row}, {col}) is outside the {width}x{height} grid")]
    OutOfBounds {
        row: usize,
        col: usize,
        width: usize,
        height: usize,
    },

    /// A frame buffer could not be allocated. There is no degraded mode
    /// without both buffers; callers are expected to bail out.
    #[error("failed to allocate {bytes} bytes for a frame buffer")]
    Allocation {
        bytes: usize,
        #[source]
        source: TryReserveError,
    },
}

impl From<LifeError> for io::Error {
    fn from(err: LifeError) -> Self {
        io::Error::new(io::ErrorKind::Other, err)
    }
}
