pub mod canvas;
pub mod hud;

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout};
use ratatui::widgets::Block;

use crate::config::{CANVAS_HEIGHT_PX, CANVAS_WIDTH_PX};
use crate::game::GameState;
use crate::renderer::render_scene;

use self::canvas::{BufferCanvas, terminal_extent};
use self::hud::{InfoPanel, render_panel};

const PANEL_WIDTH: u16 = 30;

/// Renders the full frame: bordered play area on the left, panel on the right.
pub fn draw(frame: &mut Frame<'_>, state: &GameState, panel: &InfoPanel) {
    let (play_width, play_height) = terminal_extent(CANVAS_WIDTH_PX, CANVAS_HEIGHT_PX);

    let [play_column, panel_area, _] = Layout::horizontal([
        Constraint::Length(play_width + 2),
        Constraint::Length(PANEL_WIDTH),
        Constraint::Min(0),
    ])
    .areas(frame.area());
    let [play_area, _] =
        Layout::vertical([Constraint::Length(play_height + 2), Constraint::Min(0)])
            .areas(play_column);

    let block = Block::bordered();
    let inner = block.inner(play_area);
    frame.render_widget(block, play_area);

    render_scene(&mut BufferCanvas::new(frame.buffer_mut(), inner), state);
    render_panel(frame, panel_area, panel, state.status);
}
