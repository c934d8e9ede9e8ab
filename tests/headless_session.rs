use std::sync::mpsc;
use std::time::{Duration, Instant};

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use keydash::runtime::{Event, FixedTicker, Runner, TestEventSource};
use keydash::session::{GameSession, Phase, SessionConfig, Signal};
use keydash::words::ScriptedPool;

// Headless integration using the internal runtime + GameSession without a TTY.
// Drives the same loop shape as the binary, with a scripted word pool and a
// shortened clock so the sprint completes quickly.

fn short_session(words: &[&str]) -> GameSession {
    let config = SessionConfig {
        duration: Duration::from_millis(120),
        result_delay: Duration::from_millis(20),
    };
    GameSession::with_config(Box::new(ScriptedPool::new(words)), config)
}

fn key(code: KeyCode) -> Event {
    Event::Key(KeyEvent::new(code, KeyModifiers::NONE))
}

#[test]
fn headless_sprint_completes_and_reports() {
    let mut session = short_session(&["sky", "blue"]);

    let (tx, rx) = mpsc::channel();
    let es = TestEventSource::new(rx);
    let ticker = FixedTicker::new(Duration::from_millis(5));
    let runner = Runner::new(es, ticker);

    // Queue the start signal and the keystrokes ahead of the loop:
    // the whole word plus one wrong key.
    tx.send(key(KeyCode::Enter)).unwrap();
    for c in ['s', 'k', 'y', 'x'] {
        tx.send(key(KeyCode::Char(c))).unwrap();
    }

    // Act: drive the event loop until the result lands (or bounded steps)
    let mut delivered = None;
    for _ in 0..400u32 {
        match runner.step() {
            Event::Tick => {
                if let Some(result) = session.handle(Signal::Tick(Instant::now())) {
                    delivered = Some(result);
                    break;
                }
            }
            Event::Resize => {}
            Event::Key(key) => match key.code {
                KeyCode::Enter => {
                    session.handle(Signal::Start(Instant::now()));
                }
                KeyCode::Char(c) => {
                    session.handle(Signal::Input(c));
                }
                _ => {}
            },
        }
    }

    let result = delivered.expect("sprint should deliver a result");
    assert_eq!(result.hits, 3);
    assert_eq!(result.misses, 1);
    assert_eq!(result.accuracy, 75.0);
    assert_eq!(session.phase(), Phase::Idle);
    assert_eq!(session.timer_text(), "0.00");
}

#[test]
fn headless_untouched_sprint_reports_zero_accuracy() {
    let mut session = short_session(&["apple"]);

    let (_tx, rx) = mpsc::channel();
    let es = TestEventSource::new(rx);
    let ticker = FixedTicker::new(Duration::from_millis(5));
    let runner = Runner::new(es, ticker);

    session.handle(Signal::Start(Instant::now()));

    let mut delivered = None;
    for _ in 0..400u32 {
        if let Event::Tick = runner.step() {
            if let Some(result) = session.handle(Signal::Tick(Instant::now())) {
                delivered = Some(result);
                break;
            }
        }
    }

    let result = delivered.expect("expiry alone should still deliver a result");
    assert_eq!(result.hits, 0);
    assert_eq!(result.misses, 0);
    assert_eq!(result.accuracy, 0.0);
}

#[test]
fn headless_replay_runs_a_second_sprint() {
    let mut session = short_session(&["sky", "blue"]);

    let (_tx, rx) = mpsc::channel();
    let es = TestEventSource::new(rx);
    let ticker = FixedTicker::new(Duration::from_millis(5));
    let runner = Runner::new(es, ticker);

    // First sprint: type the whole first word, let the clock run out.
    session.handle(Signal::Start(Instant::now()));
    for c in ['s', 'k', 'y'] {
        session.handle(Signal::Input(c));
    }

    let mut first = None;
    for _ in 0..400u32 {
        if let Event::Tick = runner.step() {
            if let Some(result) = session.handle(Signal::Tick(Instant::now())) {
                first = Some(result);
                break;
            }
        }
    }
    assert_eq!(first.expect("first sprint result").hits, 3);

    // Replay: a fresh sprint with a fresh tally and the next drawn word.
    session.handle(Signal::Start(Instant::now()));
    assert_eq!(session.phase(), Phase::Running);
    assert_eq!(session.hits(), 0);
    assert_eq!(session.display_word(), "blue");

    let mut second = None;
    for _ in 0..400u32 {
        if let Event::Tick = runner.step() {
            if let Some(result) = session.handle(Signal::Tick(Instant::now())) {
                second = Some(result);
                break;
            }
        }
    }
    assert_eq!(second.expect("second sprint result").hits, 0);
}
