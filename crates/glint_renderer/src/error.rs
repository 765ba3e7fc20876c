//! Render errors.
//!
//! Numeric degeneracies (parallel rays, rejected samples, missing sky) are
//! not errors; they resolve locally. Everything here is either a bad
//! configuration caught before workers start, or a fault that aborts the
//! whole render.

use thiserror::Error;

/// Errors that can occur while setting up or running a render.
#[derive(Error, Debug)]
pub enum RenderError {
    #[error("Image dimensions must be non-zero, got {width}x{height}")]
    InvalidDimensions { width: u32, height: u32 },

    #[error("Tile size must be non-zero, got {width}x{height}")]
    InvalidTileSize { width: u32, height: u32 },

    #[error("Samples per pixel must be at least 1")]
    InvalidSampleCount,

    #[error("Bounce count must be at least 1")]
    InvalidBounceCount,

    #[error("Field of view must be within (0, 180) degrees, got {0}")]
    InvalidFieldOfView(f32),

    #[error("No tiles to render")]
    EmptyTileList,

    #[error("Failed to build worker pool: {0}")]
    ThreadPool(#[from] rayon::ThreadPoolBuildError),

    #[error("Tile {index} produced {actual} values, expected {expected}")]
    TileBufferMismatch {
        index: usize,
        expected: usize,
        actual: usize,
    },

    #[error("Render cancelled")]
    Cancelled,
}

/// Result type for render operations.
pub type RenderResult<T> = Result<T, RenderError>;
