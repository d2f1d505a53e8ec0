use std::io;
use std::time::{Duration, Instant};

use crate::game::GameState;
use crate::input::{TerminalEvent, poll_event};
use crate::renderer::{direction_label, scoreboard_text};
use crate::session::{Changes, Session};
use crate::terminal_runtime::AppTerminal;
use crate::ticker::{IntervalTicker, Scheduler};
use crate::ui;
use crate::ui::hud::{InfoPanel, TextSink};

/// Longest wait for input while no tick is scheduled.
const IDLE_POLL_INTERVAL: Duration = Duration::from_millis(250);

/// Writes every output `changes` invalidated to its text sink.
///
/// Returns whether the frame needs repainting.
pub fn apply_changes<S: Scheduler>(
    changes: &Changes,
    session: &Session<S>,
    panel: &mut InfoPanel,
) -> bool {
    let state = session.state();

    if changes.scoreboard {
        panel.scoreboard.set_text(&scoreboard_text(state));
    }
    if changes.direction {
        panel.direction.set_text(direction_label(state.direction()));
    }
    if let Some(key) = &changes.key_label {
        panel.key_press.set_text(key);
    }

    !changes.is_empty()
}

/// Runs the single-threaded event loop until the player quits.
pub fn run(terminal: &mut AppTerminal, state: GameState) -> io::Result<()> {
    let mut panel = InfoPanel::default();
    let (mut session, startup) = Session::start(state, IntervalTicker::new());
    apply_changes(&startup, &session, &mut panel);
    terminal.draw(|frame| ui::draw(frame, session.state(), &panel))?;

    log::info!("waiting for the first toggle");

    loop {
        let timeout = session
            .scheduler()
            .time_until_due(Instant::now())
            .unwrap_or(IDLE_POLL_INTERVAL);

        let mut changes = Changes::default();
        let mut resized = false;
        match poll_event(timeout)? {
            Some(TerminalEvent::Key(press)) if press.interrupt => break,
            Some(TerminalEvent::Key(press)) => changes.merge(session.handle_key(&press.key)),
            Some(TerminalEvent::Resize) => resized = true,
            None => {}
        }

        if changes.quit {
            break;
        }

        if session.scheduler_mut().fire_if_due(Instant::now()) {
            changes.merge(session.on_timer());
        }

        if apply_changes(&changes, &session, &mut panel) || resized {
            terminal.draw(|frame| ui::draw(frame, session.state(), &panel))?;
        }
    }

    log::info!("leaving with score {}", session.state().score);
    Ok(())
}

#[cfg(test)]
mod tests {
    use crate::config::GridSize;
    use crate::game::GameState;
    use crate::session::{Changes, Session};
    use crate::snake::{Position, Snake};
    use crate::ticker::ManualScheduler;
    use crate::ui::hud::InfoPanel;

    use super::apply_changes;

    fn session() -> (Session<ManualScheduler>, Changes) {
        let state = GameState::new_with_seed(
            GridSize {
                width: 20,
                height: 20,
            },
            9,
        );
        Session::start(state, ManualScheduler::new())
    }

    #[test]
    fn startup_fills_score_and_direction_labels() {
        let (session, startup) = session();
        let mut panel = InfoPanel::default();

        assert!(apply_changes(&startup, &session, &mut panel));

        assert_eq!(panel.scoreboard.text(), "Score: 0");
        assert_eq!(panel.direction.text(), "right");
        assert_eq!(panel.key_press.text(), "");
    }

    #[test]
    fn every_key_is_echoed() {
        let (mut session, _) = session();
        let mut panel = InfoPanel::default();

        let changes = session.handle_key("Z");

        assert!(apply_changes(&changes, &session, &mut panel));
        assert_eq!(panel.key_press.text(), "z");
    }

    #[test]
    fn collision_publishes_game_over() {
        let (mut session, _) = session();
        let mut panel = InfoPanel::default();
        session.toggle();
        session.state_mut().snake =
            Snake::from_segments(vec![Position { x: 5, y: 5 }, Position { x: 6, y: 5 }]);

        let changes = session.on_timer();
        apply_changes(&changes, &session, &mut panel);

        assert_eq!(panel.scoreboard.text(), "Score: 0\nGame Over");
    }

    #[test]
    fn empty_changes_need_no_repaint() {
        let (session, _) = session();
        let mut panel = InfoPanel::default();

        assert!(!apply_changes(&Changes::default(), &session, &mut panel));
    }
}
