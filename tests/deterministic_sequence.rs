use grid_snake::config::GridSize;
use grid_snake::food::Food;
use grid_snake::game::{GameState, GameStatus};
use grid_snake::input::Direction;
use grid_snake::session::Session;
use grid_snake::snake::{Position, Snake};
use grid_snake::ticker::{ManualScheduler, Scheduler};

fn start(seed: u64) -> Session<ManualScheduler> {
    let state = GameState::new_with_seed(
        GridSize {
            width: 20,
            height: 20,
        },
        seed,
    );
    Session::start(state, ManualScheduler::new()).0
}

#[test]
fn first_tick_moves_the_single_cell_right() {
    let mut session = start(1);

    session.handle_key(" ");
    session.on_timer();

    let cells: Vec<_> = session.state().snake.segments().copied().collect();
    assert_eq!(cells, vec![Position { x: 6, y: 5 }]);
}

#[test]
fn stepwise_growth_turn_and_self_collision() {
    let mut session = start(42);
    session.state_mut().snake = Snake::from_segments(vec![
        Position { x: 5, y: 5 },
        Position { x: 4, y: 5 },
        Position { x: 3, y: 5 },
        Position { x: 2, y: 5 },
    ]);
    session.state_mut().food = Food::new(Position { x: 6, y: 5 });

    session.handle_key(" ");
    let changes = session.on_timer();
    assert!(changes.scoreboard);
    assert_eq!(session.state().score, 1);
    assert_eq!(session.state().snake.len(), 5);
    // Keep the new food out of the path below.
    session.state_mut().food = Food::new(Position { x: 15, y: 15 });

    session.handle_key("arrowdown");
    session.on_timer();
    session.handle_key("arrowleft");
    session.on_timer();
    assert_eq!(session.state().status, GameStatus::Running);
    assert_eq!(session.state().snake.head(), Position { x: 5, y: 6 });

    session.handle_key("arrowup");
    let changes = session.on_timer();

    assert!(changes.scoreboard);
    assert_eq!(session.state().status, GameStatus::Over);
    assert_eq!(session.state().score, 1);
    assert_eq!(session.state().snake.head(), Position { x: 5, y: 6 });
    assert!(!session.scheduler().is_active());
}

#[test]
fn paused_game_resumes_where_it_stopped() {
    let mut session = start(3);

    session.handle_key(" ");
    session.on_timer();
    session.handle_key(" ");
    assert_eq!(session.state().status, GameStatus::Paused);

    session.handle_key("arrowdown");
    assert_eq!(session.state().direction(), Direction::Down);

    session.handle_key(" ");
    session.on_timer();

    assert_eq!(session.state().status, GameStatus::Running);
    assert_eq!(session.state().snake.head(), Position { x: 6, y: 6 });
    assert_eq!(session.scheduler().starts(), 2);
}

#[test]
fn snake_crosses_every_edge() {
    let mut session = start(4);
    session.handle_key(" ");

    for _ in 0..20 {
        session.on_timer();
    }
    assert_eq!(session.state().snake.head(), Position { x: 5, y: 5 });

    session.handle_key("arrowup");
    for _ in 0..6 {
        session.on_timer();
    }
    assert_eq!(session.state().snake.head(), Position { x: 5, y: 19 });
}
