use crate::config::{CANVAS_HEIGHT_PX, CANVAS_WIDTH_PX, CELL_SIZE_PX, GRADIENT_STEP};
use crate::game::GameState;
use crate::input::Direction;
use crate::snake::Position;

/// Flat fill color.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const RED: Self = Self::new(255, 0, 0);
    pub const GREEN: Self = Self::new(0, 255, 0);

    #[must_use]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

/// Raster surface addressed in pixels.
pub trait Canvas {
    /// Erases `width` x `height` pixels starting at (`x`, `y`).
    fn clear_region(&mut self, x: u32, y: u32, width: u32, height: u32);

    /// Paints `width` x `height` pixels starting at (`x`, `y`) with `color`.
    fn fill_region(&mut self, x: u32, y: u32, width: u32, height: u32, color: Rgb);
}

/// Head-to-tail snake colors: starts green and fades toward grey.
///
/// After each segment, while green still exceeds red, red and blue rise and
/// green falls by one step, saturating at the channel limits. The sequence is
/// infinite and settles on a constant color.
#[derive(Debug, Clone)]
pub struct SegmentGradient {
    next: Rgb,
}

impl SegmentGradient {
    #[must_use]
    pub fn new() -> Self {
        Self { next: Rgb::GREEN }
    }
}

impl Default for SegmentGradient {
    fn default() -> Self {
        Self::new()
    }
}

impl Iterator for SegmentGradient {
    type Item = Rgb;

    fn next(&mut self) -> Option<Rgb> {
        let current = self.next;
        if current.g > current.r {
            self.next = Rgb::new(
                current.r.saturating_add(GRADIENT_STEP),
                current.g.saturating_sub(GRADIENT_STEP),
                current.b.saturating_add(GRADIENT_STEP),
            );
        }
        Some(current)
    }
}

/// Paints the whole scene: clear, snake head to tail, then food on top.
pub fn render_scene<C: Canvas + ?Sized>(canvas: &mut C, state: &GameState) {
    canvas.clear_region(0, 0, CANVAS_WIDTH_PX, CANVAS_HEIGHT_PX);

    for (segment, color) in state.snake.segments().zip(SegmentGradient::new()) {
        fill_cell(canvas, *segment, color);
    }

    fill_cell(canvas, state.food.position, Rgb::RED);
}

fn fill_cell<C: Canvas + ?Sized>(canvas: &mut C, cell: Position, color: Rgb) {
    let (Ok(x), Ok(y)) = (u32::try_from(cell.x), u32::try_from(cell.y)) else {
        return;
    };

    canvas.fill_region(
        x * CELL_SIZE_PX,
        y * CELL_SIZE_PX,
        CELL_SIZE_PX,
        CELL_SIZE_PX,
        color,
    );
}

/// Scoreboard text: the score, plus a game-over line once the game ended.
#[must_use]
pub fn scoreboard_text(state: &GameState) -> String {
    let mut text = format!("Score: {}", state.score);
    if state.is_over() {
        text.push_str("\nGame Over");
    }
    text
}

/// Text for the direction label.
#[must_use]
pub fn direction_label(direction: Direction) -> &'static str {
    direction.name()
}
