use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::Color;

use crate::config::{CELL_SIZE_PX, TERMINAL_COLUMNS_PER_CELL};
use crate::renderer::{Canvas, Rgb};

/// Background of empty play-area cells.
pub const PLAY_BACKGROUND: Color = Color::Black;

/// Pixel canvas projected onto a rectangle of terminal cells.
///
/// One grid cell of `CELL_SIZE_PX` pixels maps to one terminal row and
/// `TERMINAL_COLUMNS_PER_CELL` columns. Anything outside `area` is clipped.
pub struct BufferCanvas<'a> {
    buffer: &'a mut Buffer,
    area: Rect,
}

impl<'a> BufferCanvas<'a> {
    pub fn new(buffer: &'a mut Buffer, area: Rect) -> Self {
        Self { buffer, area }
    }

    fn paint(&mut self, x: u32, y: u32, width: u32, height: u32, bg: Color) {
        let columns = pixel_span(x, width, u32::from(TERMINAL_COLUMNS_PER_CELL));
        let rows = pixel_span(y, height, 1);

        for row in rows {
            for column in columns.clone() {
                let Some((tx, ty)) = self.terminal_position(column, row) else {
                    continue;
                };
                if let Some(cell) = self.buffer.cell_mut((tx, ty)) {
                    cell.set_symbol(" ").set_bg(bg);
                }
            }
        }
    }

    fn terminal_position(&self, column: u32, row: u32) -> Option<(u16, u16)> {
        let column = u16::try_from(column).ok()?;
        let row = u16::try_from(row).ok()?;
        if column >= self.area.width || row >= self.area.height {
            return None;
        }

        Some((self.area.x + column, self.area.y + row))
    }
}

impl Canvas for BufferCanvas<'_> {
    fn clear_region(&mut self, x: u32, y: u32, width: u32, height: u32) {
        self.paint(x, y, width, height, PLAY_BACKGROUND);
    }

    fn fill_region(&mut self, x: u32, y: u32, width: u32, height: u32, color: Rgb) {
        self.paint(x, y, width, height, Color::Rgb(color.r, color.g, color.b));
    }
}

/// Terminal cells covered by the pixel range `start..start + length`.
fn pixel_span(start: u32, length: u32, cells_per_grid_cell: u32) -> std::ops::Range<u32> {
    let first = start * cells_per_grid_cell / CELL_SIZE_PX;
    let end = (start + length) * cells_per_grid_cell;
    first..end.div_ceil(CELL_SIZE_PX)
}

/// Terminal size needed to show the whole canvas.
#[must_use]
pub fn terminal_extent(canvas_width: u32, canvas_height: u32) -> (u16, u16) {
    let columns = pixel_span(0, canvas_width, u32::from(TERMINAL_COLUMNS_PER_CELL)).end;
    let rows = pixel_span(0, canvas_height, 1).end;

    (
        u16::try_from(columns).unwrap_or(u16::MAX),
        u16::try_from(rows).unwrap_or(u16::MAX),
    )
}

#[cfg(test)]
mod tests {
    use ratatui::buffer::Buffer;
    use ratatui::layout::Rect;
    use ratatui::style::Color;

    use crate::renderer::{Canvas, Rgb};

    use super::{BufferCanvas, PLAY_BACKGROUND, terminal_extent};

    #[test]
    fn one_grid_cell_covers_two_columns_one_row() {
        let area = Rect::new(1, 1, 10, 5);
        let mut buffer = Buffer::empty(Rect::new(0, 0, 12, 7));

        BufferCanvas::new(&mut buffer, area).fill_region(20, 40, 20, 20, Rgb::RED);

        assert_eq!(buffer[(3, 3)].bg, Color::Rgb(255, 0, 0));
        assert_eq!(buffer[(4, 3)].bg, Color::Rgb(255, 0, 0));
        assert_eq!(buffer[(5, 3)].bg, Color::Reset);
        assert_eq!(buffer[(3, 2)].bg, Color::Reset);
    }

    #[test]
    fn fills_outside_the_area_are_clipped() {
        let area = Rect::new(0, 0, 4, 2);
        let mut buffer = Buffer::empty(Rect::new(0, 0, 8, 4));

        let mut canvas = BufferCanvas::new(&mut buffer, area);
        canvas.clear_region(0, 0, 400, 400);
        canvas.fill_region(60, 60, 20, 20, Rgb::GREEN);

        assert_eq!(buffer[(3, 1)].bg, PLAY_BACKGROUND);
        assert_eq!(buffer[(4, 1)].bg, Color::Reset);
        assert_eq!(buffer[(6, 3)].bg, Color::Reset);
    }

    #[test]
    fn default_canvas_needs_forty_by_twenty_cells() {
        assert_eq!(terminal_extent(400, 400), (40, 20));
    }
}
