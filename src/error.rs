use std::io;

use thiserror::Error;

/// Reasons a grid cannot be derived from a canvas.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Error)]
pub enum GridError {
    #[error("cell size must be non-zero")]
    ZeroCellSize,
    #[error("canvas {canvas_width}x{canvas_height} cannot fit a single {cell_size}px cell")]
    CanvasTooSmall {
        canvas_width: u32,
        canvas_height: u32,
        cell_size: u32,
    },
    #[error("grid {width}x{height} exceeds the supported cell range")]
    TooManyCells { width: u32, height: u32 },
}

/// Top-level failures surfaced by the binary.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("terminal I/O failed: {0}")]
    Io(#[from] io::Error),
    #[error("invalid grid: {0}")]
    Grid(#[from] GridError),
    #[error("logger setup failed: {0}")]
    Logger(#[from] log::SetLoggerError),
}
