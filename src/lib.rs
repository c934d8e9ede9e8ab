// Library surface for headless/integration tests and reuse.
// The binary in main.rs is a thin terminal shell over these modules.
pub mod clock;
pub mod cursor;
pub mod runtime;
pub mod score;
pub mod session;
pub mod ui;
pub mod words;

/// Timer resample interval for the game loop.
pub const TICK_RATE_MS: u64 = 10;
