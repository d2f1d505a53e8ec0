use crate::config::TICK_INTERVAL;
use crate::game::{GameState, GameStatus, TickOutcome};
use crate::input::{Direction, GameInput};
use crate::ticker::Scheduler;

/// Which outputs an event invalidated.
///
/// The session never writes to a sink itself; the terminal adapter reads
/// these flags and refreshes the matching outputs.
#[derive(Debug, Clone, Default, Eq, PartialEq)]
pub struct Changes {
    /// The play area must be repainted.
    pub redraw: bool,
    /// Score or game-over text changed.
    pub scoreboard: bool,
    /// The run status changed.
    pub status: bool,
    /// The locked direction changed.
    pub direction: bool,
    /// Raw key identifier to echo on the key-press label.
    pub key_label: Option<String>,
    /// The player asked to leave.
    pub quit: bool,
}

impl Changes {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// Folds `other` into `self`; the latest key label wins.
    pub fn merge(&mut self, other: Self) {
        self.redraw |= other.redraw;
        self.scoreboard |= other.scoreboard;
        self.status |= other.status;
        self.direction |= other.direction;
        self.quit |= other.quit;
        if other.key_label.is_some() {
            self.key_label = other.key_label;
        }
    }
}

/// Owns the game state and the tick scheduler, and runs the
/// Idle/Running/Paused/Over state machine.
#[derive(Debug)]
pub struct Session<S: Scheduler> {
    state: GameState,
    scheduler: S,
}

impl<S: Scheduler> Session<S> {
    /// Wraps a fresh state and performs the startup sequence: paint the idle
    /// scene, lock the initial direction to right, publish the score.
    pub fn start(state: GameState, scheduler: S) -> (Self, Changes) {
        let mut session = Self { state, scheduler };

        let mut changes = Changes {
            redraw: true,
            ..Changes::default()
        };
        changes.merge(session.steer(Direction::Right));
        changes.scoreboard = true;

        (session, changes)
    }

    /// Starts or pauses the game. Has no effect once the game is over.
    pub fn toggle(&mut self) -> Changes {
        if self.scheduler.is_active() {
            self.scheduler.stop();
            self.state.status = GameStatus::Paused;
            log::info!("paused at score {}", self.state.score);
        } else if !self.state.is_over() {
            self.scheduler.start(TICK_INTERVAL);
            self.state.status = GameStatus::Running;
            log::info!("running");
        } else {
            return Changes::default();
        }

        Changes {
            status: true,
            ..Changes::default()
        }
    }

    /// Runs one tick in response to the scheduler firing.
    pub fn on_timer(&mut self) -> Changes {
        match self.state.tick() {
            TickOutcome::Skipped => Changes::default(),
            TickOutcome::Moved { grew } => Changes {
                redraw: true,
                scoreboard: grew,
                ..Changes::default()
            },
            TickOutcome::Collided => {
                self.scheduler.stop();
                Changes {
                    scoreboard: true,
                    status: true,
                    ..Changes::default()
                }
            }
        }
    }

    /// Handles one key-down event identified by its key name.
    ///
    /// Every key is echoed back lowercased, whether or not the game acts on it.
    pub fn handle_key(&mut self, key: &str) -> Changes {
        let key = key.to_lowercase();

        let mut changes = match GameInput::from_key(&key) {
            Some(GameInput::Direction(direction)) => self.steer(direction),
            Some(GameInput::Toggle) => self.toggle(),
            Some(GameInput::Quit) => Changes {
                quit: true,
                ..Changes::default()
            },
            None => {
                log::trace!("ignored key {key:?}");
                Changes::default()
            }
        };

        changes.key_label = Some(key);
        changes
    }

    fn steer(&mut self, direction: Direction) -> Changes {
        Changes {
            direction: self.state.steer(direction),
            ..Changes::default()
        }
    }

    #[must_use]
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Mutable state access for scripted setups.
    pub fn state_mut(&mut self) -> &mut GameState {
        &mut self.state
    }

    #[must_use]
    pub fn scheduler(&self) -> &S {
        &self.scheduler
    }

    pub fn scheduler_mut(&mut self) -> &mut S {
        &mut self.scheduler
    }
}

#[cfg(test)]
mod tests {
    use crate::config::{GridSize, TICK_INTERVAL};
    use crate::game::{GameState, GameStatus};
    use crate::input::{Direction, Velocity};
    use crate::snake::{Position, Snake};
    use crate::ticker::{ManualScheduler, Scheduler};

    use super::{Changes, Session};

    fn session() -> Session<ManualScheduler> {
        let state = GameState::new_with_seed(
            GridSize {
                width: 20,
                height: 20,
            },
            1,
        );
        Session::start(state, ManualScheduler::new()).0
    }

    #[test]
    fn startup_locks_right_and_publishes_everything() {
        let state = GameState::new_with_seed(
            GridSize {
                width: 20,
                height: 20,
            },
            1,
        );

        let (session, changes) = Session::start(state, ManualScheduler::new());

        assert!(changes.redraw && changes.direction && changes.scoreboard);
        assert_eq!(session.state().velocity, Velocity { dx: 1, dy: 0 });
        assert_eq!(session.state().direction(), Direction::Right);
        assert_eq!(session.state().status, GameStatus::Idle);
        assert!(!session.scheduler().is_active());
    }

    #[test]
    fn toggle_twice_from_idle_runs_then_pauses() {
        let mut session = session();

        session.toggle();
        assert_eq!(session.state().status, GameStatus::Running);
        assert_eq!(session.scheduler().period(), Some(TICK_INTERVAL));

        session.toggle();
        assert_eq!(session.state().status, GameStatus::Paused);
        assert!(!session.scheduler().is_active());

        assert_eq!(session.state().score, 0);
        assert_eq!(session.state().snake.head(), Position { x: 5, y: 5 });
    }

    #[test]
    fn toggle_is_a_no_op_once_over() {
        let mut session = session();
        session.toggle();
        session.state_mut().snake = Snake::from_segments(vec![
            Position { x: 5, y: 5 },
            Position { x: 5, y: 6 },
            Position { x: 6, y: 6 },
            Position { x: 6, y: 5 },
        ]);

        let changes = session.on_timer();
        assert!(changes.scoreboard && changes.status);
        assert!(!changes.redraw);
        assert_eq!(session.state().status, GameStatus::Over);
        assert!(!session.scheduler().is_active());

        assert!(session.toggle().is_empty());

        assert_eq!(session.state().status, GameStatus::Over);
        assert!(!session.scheduler().is_active());
        assert_eq!(session.scheduler().starts(), 1);
    }

    #[test]
    fn space_key_toggles() {
        let mut session = session();

        let changes = session.handle_key(" ");

        assert!(changes.status);
        assert_eq!(changes.key_label.as_deref(), Some(" "));
        assert_eq!(session.state().status, GameStatus::Running);
    }

    #[test]
    fn arrow_keys_are_case_insensitive() {
        let mut session = session();

        let changes = session.handle_key("ArrowUp");

        assert!(changes.direction);
        assert_eq!(changes.key_label.as_deref(), Some("arrowup"));
        assert_eq!(session.state().direction(), Direction::Up);
    }

    #[test]
    fn reversal_key_is_echoed_but_ignored() {
        let mut session = session();

        let changes = session.handle_key("arrowleft");

        assert!(!changes.direction);
        assert_eq!(changes.key_label.as_deref(), Some("arrowleft"));
        assert_eq!(session.state().direction(), Direction::Right);
        assert_eq!(session.state().velocity, Velocity { dx: 1, dy: 0 });
    }

    #[test]
    fn unknown_keys_only_echo() {
        let mut session = session();

        for _ in 0..2 {
            let changes = session.handle_key("W");
            assert_eq!(
                changes,
                Changes {
                    key_label: Some("w".to_owned()),
                    ..Changes::default()
                }
            );
            assert_eq!(session.state().status, GameStatus::Idle);
            assert_eq!(session.state().direction(), Direction::Right);
        }
    }

    #[test]
    fn escape_requests_quit() {
        let mut session = session();

        assert!(session.handle_key("Escape").quit);
    }

    #[test]
    fn timer_while_paused_changes_nothing() {
        let mut session = session();
        session.toggle();
        session.toggle();

        assert!(session.on_timer().is_empty());
        assert_eq!(session.state().snake.head(), Position { x: 5, y: 5 });
    }

    #[test]
    fn merge_keeps_latest_key_label() {
        let mut changes = Changes {
            redraw: true,
            key_label: Some("a".to_owned()),
            ..Changes::default()
        };

        changes.merge(Changes {
            scoreboard: true,
            key_label: Some("b".to_owned()),
            ..Changes::default()
        });
        changes.merge(Changes::default());

        assert!(changes.redraw && changes.scoreboard);
        assert_eq!(changes.key_label.as_deref(), Some("b"));
    }
}
