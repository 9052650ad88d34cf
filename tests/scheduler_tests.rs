//! Move queue timing, driven by a virtual clock.

use std::cell::RefCell;
use std::rc::Rc;

use rand::rngs::mock::StepRng;

use tui_2048::core::{Board, Game, GameConfig, ScheduleError, Session};
use tui_2048::types::Direction;

type TestSession = Session<(), StepRng>;
type Log = Rc<RefCell<Vec<(Direction, bool)>>>;

fn session_with(values: &[u32], config: GameConfig) -> TestSession {
    let mut session = Session::new(config, (), StepRng::new(0, 0));
    session.game_mut().load_board(Board::from_values(values));
    session
}

fn config(delay_ms: u32) -> GameConfig {
    GameConfig::new(2, 2048).unwrap().with_queue_delay_ms(delay_ms)
}

fn request(session: &mut TestSession, log: &Log, dir: Direction) -> Result<(), ScheduleError> {
    let log = log.clone();
    session.request_move(dir, move |_: &mut Game<(), StepRng>, changed| {
        log.borrow_mut().push((dir, changed))
    })
}

#[test]
fn changing_move_then_two_noops_resolve_in_order() {
    let mut session = session_with(&[0, 2, 0, 0], config(300));
    let log = Log::default();

    request(&mut session, &log, Direction::Left).unwrap();
    request(&mut session, &log, Direction::Left).unwrap();
    request(&mut session, &log, Direction::Up).unwrap();

    // The first move applies at once and holds the rest back.
    assert_eq!(*log.borrow(), vec![(Direction::Left, true)]);
    assert_eq!(session.scheduler().pending(), 2);

    session.tick(150);
    session.tick(149);
    assert_eq!(log.borrow().len(), 1);

    // Both no-ops drain on the same tick once the delay is over.
    session.tick(1);
    assert_eq!(
        *log.borrow(),
        vec![
            (Direction::Left, true),
            (Direction::Left, false),
            (Direction::Up, false),
        ]
    );
    assert_eq!(session.scheduler().pending(), 0);
    assert!(!session.scheduler().is_armed());
}

#[test]
fn idle_timer_wakes_on_next_request() {
    let mut session = session_with(&[0, 2, 0, 0], config(300));
    let log = Log::default();

    request(&mut session, &log, Direction::Left).unwrap();
    session.tick(300);
    assert!(!session.scheduler().is_armed());

    request(&mut session, &log, Direction::Down).unwrap();
    assert_eq!(
        *log.borrow(),
        vec![(Direction::Left, true), (Direction::Down, true)]
    );
}

#[test]
fn full_queue_rejects_newest_without_calling_it() {
    let cfg = config(300).with_max_pending_moves(2).unwrap();
    let mut session = session_with(&[0, 2, 0, 0], cfg);
    let log = Log::default();

    request(&mut session, &log, Direction::Left).unwrap();
    request(&mut session, &log, Direction::Right).unwrap();
    request(&mut session, &log, Direction::Down).unwrap();
    let err = request(&mut session, &log, Direction::Up).unwrap_err();
    assert_eq!(
        err,
        ScheduleError::QueueFull {
            direction: Direction::Up,
            capacity: 2
        }
    );
    assert!(err.to_string().contains("up"));

    for _ in 0..10 {
        session.tick(300);
    }
    let dirs: Vec<Direction> = log.borrow().iter().map(|&(d, _)| d).collect();
    assert_eq!(dirs, vec![Direction::Left, Direction::Right, Direction::Down]);
}

#[test]
fn reset_drops_pending_callbacks() {
    let mut session = session_with(&[0, 2, 0, 0], config(300));
    let log = Log::default();

    request(&mut session, &log, Direction::Left).unwrap();
    request(&mut session, &log, Direction::Right).unwrap();
    session.request_reset();

    for _ in 0..10 {
        session.tick(300);
    }
    assert_eq!(*log.borrow(), vec![(Direction::Left, true)]);
}

#[test]
fn zero_delay_applies_everything_immediately() {
    let mut session = session_with(&[0, 2, 0, 0], config(0));
    let log = Log::default();

    for dir in [Direction::Left, Direction::Right, Direction::Down] {
        request(&mut session, &log, dir).unwrap();
    }
    assert_eq!(log.borrow().len(), 3);
    assert!(log.borrow().iter().all(|&(_, changed)| changed));
    assert!(!session.scheduler().is_armed());
}
