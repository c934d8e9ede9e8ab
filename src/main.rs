use std::{
    error::Error,
    io::{self, stdin},
    time::{Duration, Instant},
};

use clap::{error::ErrorKind, CommandFactory, Parser};
use crossterm::{
    event::{KeyCode, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
    tty::IsTty,
};
use ratatui::{
    backend::{Backend, CrosstermBackend},
    Terminal,
};

use keydash::runtime::{Event, FixedTicker, Runner, TermEventSource};
use keydash::session::{GameSession, Phase, SessionConfig, Signal, SPRINT_DURATION};
use keydash::words::RandomPool;
use keydash::TICK_RATE_MS;

/// three seconds on the clock, type what you see
#[derive(Parser, Debug, Clone)]
#[clap(
    version,
    about,
    long_about = "A tiny terminal typing sprint. Hit enter to start a three second \
                  countdown, type the displayed words letter by letter, and get your \
                  accuracy when the clock runs out."
)]
struct Cli {
    /// milliseconds to keep the final time on screen before the result banner
    #[clap(long, default_value_t = 100)]
    result_delay_ms: u64,
}

impl Cli {
    fn to_session_config(&self) -> SessionConfig {
        SessionConfig {
            duration: SPRINT_DURATION,
            result_delay: Duration::from_millis(self.result_delay_ms),
        }
    }
}

fn main() -> Result<(), Box<dyn Error>> {
    let cli = Cli::parse();

    if !stdin().is_tty() {
        let mut cmd = Cli::command();
        cmd.error(ErrorKind::Io, "stdin must be a tty").exit();
    }

    enable_raw_mode()?;

    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut session = GameSession::with_config(Box::new(RandomPool), cli.to_session_config());
    let res = run_game(&mut terminal, &mut session);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    res
}

fn run_game<B: Backend>(
    terminal: &mut Terminal<B>,
    session: &mut GameSession,
) -> Result<(), Box<dyn Error>> {
    let runner = Runner::new(
        TermEventSource::new(),
        FixedTicker::new(Duration::from_millis(TICK_RATE_MS)),
    );

    terminal.draw(|f| f.render_widget(&*session, f.area()))?;

    loop {
        match runner.step() {
            Event::Tick => {
                let delivered = session.handle(Signal::Tick(Instant::now()));

                // Idle ticks don't change anything worth repainting; the
                // delivery tick does, since it lands the result banner.
                if session.phase() != Phase::Idle || delivered.is_some() {
                    terminal.draw(|f| f.render_widget(&*session, f.area()))?;
                }
            }
            Event::Resize => {
                terminal.draw(|f| f.render_widget(&*session, f.area()))?;
            }
            Event::Key(key) => {
                match key.code {
                    KeyCode::Esc => break,
                    KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                        break;
                    }
                    KeyCode::Enter => {
                        session.handle(Signal::Start(Instant::now()));
                    }
                    KeyCode::Char(c) => {
                        session.handle(Signal::Input(c));
                    }
                    _ => {}
                }
                terminal.draw(|f| f.render_widget(&*session, f.area()))?;
            }
        }
    }

    Ok(())
}
