use std::io;
use std::time::{Duration, Instant};

use crossterm::cursor::{Hide, Show};
use crossterm::event::{self, Event, KeyEventKind};
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;

use crate::game::GameState;
use crate::input::{self, GameInput};
use crate::renderer;

/// Concrete terminal type used by the driver loop.
pub type AppTerminal = Terminal<CrosstermBackend<io::Stdout>>;

/// Owns terminal lifecycle (raw mode + alternate screen) for one run.
///
/// Restores the terminal best-effort on drop, including on unwind.
pub struct TerminalSession {
    terminal: AppTerminal,
}

impl TerminalSession {
    /// Enters raw mode, switches to the alternate screen, and creates a
    /// ratatui terminal. Partially-applied terminal state is rolled back
    /// when a later step fails.
    pub fn enter() -> io::Result<Self> {
        enable_raw_mode()?;

        let mut stdout = io::stdout();
        if let Err(error) = execute!(stdout, EnterAlternateScreen, Hide) {
            let _ = disable_raw_mode();
            return Err(error);
        }

        match Terminal::new(CrosstermBackend::new(stdout)) {
            Ok(terminal) => Ok(Self { terminal }),
            Err(error) => {
                let _ = restore_terminal();
                Err(error)
            }
        }
    }

    fn terminal_mut(&mut self) -> &mut AppTerminal {
        &mut self.terminal
    }
}

impl Drop for TerminalSession {
    fn drop(&mut self) {
        let _ = restore_terminal();
    }
}

fn restore_terminal() -> io::Result<()> {
    let _ = disable_raw_mode();
    let mut stdout = io::stdout();
    execute!(stdout, Show, LeaveAlternateScreen)
}

/// Runs the game to completion: title screen, then the fixed-cadence
/// driver loop until the player quits.
///
/// One tick fires per elapsed interval and ticks never overlap; input
/// arriving between ticks is queued into the simulation and applied at
/// the next tick boundary.
pub fn run(game: &mut GameState, tick_interval: Duration) -> io::Result<()> {
    let mut session = TerminalSession::enter()?;

    if !wait_for_start(&mut session, game.high_score())? {
        return Ok(());
    }

    let mut last_tick = Instant::now();

    loop {
        session
            .terminal_mut()
            .draw(|frame| renderer::render(frame, game))?;

        let timeout = tick_interval.saturating_sub(last_tick.elapsed());
        if event::poll(timeout)? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    match input::map_key(key.code) {
                        Some(GameInput::Quit) => break,
                        Some(GameInput::Direction(direction)) => game.queue_direction(direction),
                        None => {}
                    }
                }
            }
        }

        if last_tick.elapsed() >= tick_interval {
            game.tick();
            last_tick = Instant::now();
        }
    }

    Ok(())
}

/// Shows the title screen until a key is pressed.
///
/// Returns false when the player asked to quit instead of starting.
fn wait_for_start(session: &mut TerminalSession, high_score: u32) -> io::Result<bool> {
    loop {
        session
            .terminal_mut()
            .draw(|frame| renderer::render_title(frame, high_score))?;

        if let Event::Key(key) = event::read()? {
            if key.kind != KeyEventKind::Press {
                continue;
            }

            return Ok(!matches!(input::map_key(key.code), Some(GameInput::Quit)));
        }
    }
}
