use std::time::Duration;

use crate::error::GridError;
use crate::snake::Position;

/// Logical grid dimensions passed through the game as a named type.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct GridSize {
    pub width: u16,
    pub height: u16,
}

impl GridSize {
    /// Derives the grid from a canvas size in pixels and a square cell size.
    ///
    /// Partial cells at the right and bottom edges are dropped. Fails when the
    /// cell size is zero or the canvas cannot fit a single cell, so every
    /// `GridSize` built here has non-zero width and height.
    pub fn from_canvas(
        canvas_width: u32,
        canvas_height: u32,
        cell_size: u32,
    ) -> Result<Self, GridError> {
        if cell_size == 0 {
            return Err(GridError::ZeroCellSize);
        }

        let width = canvas_width / cell_size;
        let height = canvas_height / cell_size;
        if width == 0 || height == 0 {
            return Err(GridError::CanvasTooSmall {
                canvas_width,
                canvas_height,
                cell_size,
            });
        }

        let too_large = || GridError::TooManyCells { width, height };
        Ok(Self {
            width: u16::try_from(width).map_err(|_| too_large())?,
            height: u16::try_from(height).map_err(|_| too_large())?,
        })
    }

    /// Returns the total number of cells in the grid.
    #[must_use]
    pub fn total_cells(self) -> usize {
        usize::from(self.width) * usize::from(self.height)
    }
}

/// Canvas width in pixels.
pub const CANVAS_WIDTH_PX: u32 = 400;

/// Canvas height in pixels.
pub const CANVAS_HEIGHT_PX: u32 = 400;

/// Edge length of one grid cell in pixels.
pub const CELL_SIZE_PX: u32 = 20;

/// Terminal columns used to draw one grid cell (rows are taller than columns).
pub const TERMINAL_COLUMNS_PER_CELL: u16 = 2;

/// Fixed tick period while the game is running.
pub const TICK_INTERVAL: Duration = Duration::from_millis(100);

/// Head cell of the snake at startup.
pub const INITIAL_SNAKE_HEAD: Position = Position { x: 5, y: 5 };

/// Food cell at startup.
pub const INITIAL_FOOD: Position = Position { x: 10, y: 10 };

/// Per-channel step of the head-to-tail color gradient.
pub const GRADIENT_STEP: u8 = 5;

/// Grid used by the game, derived from the fixed canvas and cell size.
pub fn default_grid() -> Result<GridSize, GridError> {
    GridSize::from_canvas(CANVAS_WIDTH_PX, CANVAS_HEIGHT_PX, CELL_SIZE_PX)
}
