use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Paragraph};

use crate::game::GameStatus;

const HUD_INNER_MARGIN_X: u16 = 1;

/// Destination for a piece of display text.
pub trait TextSink {
    fn set_text(&mut self, text: &str);
}

/// Text element that keeps the last value written to it.
#[derive(Debug, Clone, Default, Eq, PartialEq)]
pub struct Label {
    text: String,
}

impl Label {
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }
}

impl TextSink for Label {
    fn set_text(&mut self, text: &str) {
        text.clone_into(&mut self.text);
    }
}

/// The three text elements shown beside the play area.
#[derive(Debug, Clone, Default)]
pub struct InfoPanel {
    pub scoreboard: Label,
    pub direction: Label,
    pub key_press: Label,
}

/// Draws the side panel: scoreboard, direction, last key, status and help.
pub fn render_panel(frame: &mut Frame<'_>, area: Rect, panel: &InfoPanel, status: GameStatus) {
    let block = Block::bordered().title(" snake ");
    let inner = inset_horizontal(block.inner(area), HUD_INNER_MARGIN_X);
    frame.render_widget(block, area);

    let [score_area, details_area, help_area] = Layout::vertical([
        Constraint::Length(3),
        Constraint::Min(4),
        Constraint::Length(2),
    ])
    .areas(inner);

    let score_lines: Vec<Line<'_>> = panel
        .scoreboard
        .text()
        .lines()
        .map(|line| {
            Line::from(Span::styled(
                line.to_owned(),
                Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
            ))
        })
        .collect();
    frame.render_widget(Paragraph::new(score_lines), score_area);

    let details = vec![
        labelled("Direction", panel.direction.text()),
        labelled("Key", &display_key(panel.key_press.text())),
        Line::from(""),
        labelled("Status", status_name(status)),
    ];
    frame.render_widget(Paragraph::new(details), details_area);

    frame.render_widget(
        Paragraph::new(vec![
            Line::from("[Space] start/pause"),
            Line::from("[Arrows] steer  [Esc] quit"),
        ])
        .style(Style::default().fg(Color::DarkGray)),
        help_area,
    );
}

fn labelled<'a>(label: &'a str, value: &str) -> Line<'a> {
    Line::from(vec![
        Span::styled(format!("{label}: "), Style::default().fg(Color::DarkGray)),
        Span::styled(value.to_owned(), Style::default().fg(Color::Green)),
    ])
}

// A bare space would be invisible on the panel.
fn display_key(key: &str) -> String {
    if key == " " {
        "space".to_owned()
    } else {
        key.to_owned()
    }
}

fn status_name(status: GameStatus) -> &'static str {
    match status {
        GameStatus::Idle => "press space",
        GameStatus::Running => "running",
        GameStatus::Paused => "paused",
        GameStatus::Over => "over",
    }
}

fn inset_horizontal(area: Rect, margin: u16) -> Rect {
    let width = area.width.saturating_sub(margin.saturating_mul(2));
    Rect {
        x: area.x.saturating_add(margin),
        width,
        ..area
    }
}
