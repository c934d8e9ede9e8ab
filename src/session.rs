use std::time::{Duration, Instant};

use crate::clock::{self, CountdownClock, ZERO_TIME};
use crate::cursor::{MatchCursor, Outcome};
use crate::score::ScoreCounter;
use crate::words::WordSource;

/// Length of one sprint. Fixed; the game has no difficulty knobs.
pub const SPRINT_DURATION: Duration = Duration::from_millis(3000);

/// How long the final "0.00" stays on screen before the result banner.
pub const DEFAULT_RESULT_DELAY: Duration = Duration::from_millis(100);

pub const START_PROMPT: &str = "press enter to start";
pub const REPLAY_PROMPT: &str = "press enter to replay";

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Phase {
    /// Waiting for a start signal.
    Idle,
    /// Clock running, input scored.
    Running,
    /// Clock ran out; the result is delivered after a short delay.
    Finished,
}

/// Everything the session reacts to. Time enters only through the
/// timestamps carried here, which keeps the state machine deterministic
/// under test.
#[derive(Clone, Copy, Debug)]
pub enum Signal {
    Start(Instant),
    Input(char),
    Tick(Instant),
}

/// Final tally, emitted exactly once per completed sprint.
#[derive(Clone, Debug, PartialEq)]
pub struct SessionResult {
    pub hits: u32,
    pub misses: u32,
    pub accuracy: f64,
}

impl SessionResult {
    /// One-line form shown in the result banner.
    pub fn summary(&self) -> String {
        format!(
            "{} letters, {} misses, {:.2}% accuracy!",
            self.hits, self.misses, self.accuracy
        )
    }
}

#[derive(Clone, Debug)]
pub struct SessionConfig {
    pub duration: Duration,
    pub result_delay: Duration,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            duration: SPRINT_DURATION,
            result_delay: DEFAULT_RESULT_DELAY,
        }
    }
}

/// The game's state machine. Owns the word pool, the cursor through the
/// current word, the tally, and the countdown; reacts to [`Signal`]s and
/// exposes the values the display shell renders.
///
/// One session instance lives for the whole process and is reinitialized
/// on every start signal.
pub struct GameSession {
    config: SessionConfig,
    phase: Phase,
    pool: Box<dyn WordSource>,
    cursor: Option<MatchCursor>,
    score: ScoreCounter,
    clock: CountdownClock,
    finished_at: Option<Instant>,
    timer_text: String,
    last_result: Option<SessionResult>,
}

impl GameSession {
    pub fn new(pool: Box<dyn WordSource>) -> Self {
        Self::with_config(pool, SessionConfig::default())
    }

    pub fn with_config(pool: Box<dyn WordSource>, config: SessionConfig) -> Self {
        let clock = CountdownClock::new(config.duration);
        let timer_text = clock::format_seconds(config.duration.as_millis() as i64);
        Self {
            config,
            phase: Phase::Idle,
            pool,
            cursor: None,
            score: ScoreCounter::default(),
            clock,
            finished_at: None,
            timer_text,
            last_result: None,
        }
    }

    /// Feed one signal through the state machine. Returns the final tally
    /// on the single signal that completes a sprint, `None` otherwise; the
    /// caller is the result reporter.
    pub fn handle(&mut self, signal: Signal) -> Option<SessionResult> {
        match signal {
            Signal::Start(now) => self.on_start(now),
            Signal::Input(c) => {
                self.on_input(c);
                None
            }
            Signal::Tick(now) => self.on_tick(now),
        }
    }

    fn on_start(&mut self, now: Instant) -> Option<SessionResult> {
        if self.phase == Phase::Running {
            // Redundant start; dropped.
            return None;
        }

        // A start inside the delivery window flushes the pending result
        // before the new sprint begins.
        let flushed = if self.phase == Phase::Finished {
            self.deliver_result()
        } else {
            None
        };

        self.score.reset();
        let word = self.pool.draw();
        self.cursor = Some(MatchCursor::new(word));
        self.clock.start(now);
        self.timer_text = clock::format_seconds(self.clock.remaining_ms(now));
        self.finished_at = None;
        self.phase = Phase::Running;

        flushed
    }

    fn on_input(&mut self, c: char) {
        if self.phase != Phase::Running {
            return;
        }
        let Some(cursor) = self.cursor.as_mut() else {
            return;
        };
        match cursor.feed(c, self.pool.as_mut()) {
            Outcome::Hit => self.score.record_hit(),
            Outcome::Miss => self.score.record_miss(),
        }
    }

    fn on_tick(&mut self, now: Instant) -> Option<SessionResult> {
        match self.phase {
            Phase::Running => {
                if self.clock.is_expired(now) {
                    // First expired sample: stop the clock, clamp the
                    // display, and arm the result delivery.
                    self.clock.stop();
                    self.timer_text = ZERO_TIME.to_string();
                    self.finished_at = Some(now);
                    self.phase = Phase::Finished;
                } else {
                    self.timer_text = clock::format_seconds(self.clock.remaining_ms(now));
                }
                None
            }
            Phase::Finished => {
                let due = self
                    .finished_at
                    .is_some_and(|t| now.duration_since(t) >= self.config.result_delay);
                if due {
                    self.deliver_result()
                } else {
                    None
                }
            }
            Phase::Idle => None,
        }
    }

    fn deliver_result(&mut self) -> Option<SessionResult> {
        let result = SessionResult {
            hits: self.score.hits(),
            misses: self.score.misses(),
            accuracy: self.score.accuracy(),
        };
        self.last_result = Some(result.clone());
        self.finished_at = None;
        self.phase = Phase::Idle;
        Some(result)
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn hits(&self) -> u32 {
        self.score.hits()
    }

    pub fn misses(&self) -> u32 {
        self.score.misses()
    }

    /// Remaining time as the shell displays it: "3.00" before the first
    /// start, a live countdown while running, exactly "0.00" from expiry on.
    pub fn timer_text(&self) -> &str {
        &self.timer_text
    }

    /// The word line: the current mask while running, otherwise a prompt.
    pub fn display_word(&self) -> String {
        match self.phase {
            Phase::Running => self
                .cursor
                .as_ref()
                .map(MatchCursor::masked)
                .unwrap_or_default(),
            Phase::Finished => REPLAY_PROMPT.to_string(),
            Phase::Idle => {
                if self.last_result.is_some() {
                    REPLAY_PROMPT.to_string()
                } else {
                    START_PROMPT.to_string()
                }
            }
        }
    }

    /// Cursor through the current word, present while a sprint is live.
    pub fn cursor(&self) -> Option<&MatchCursor> {
        self.cursor.as_ref()
    }

    /// Tally of the most recently completed sprint.
    pub fn last_result(&self) -> Option<&SessionResult> {
        self.last_result.as_ref()
    }
}
