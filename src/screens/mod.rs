pub mod game;
pub mod score;

use crate::config::RoundConfig;
use crate::error::GameError;
use crossterm::cursor::{Hide, MoveTo, Show};
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use crossterm::terminal::{self, Clear, ClearType, EnterAlternateScreen, LeaveAlternateScreen};
use crossterm::{execute, queue};
use game::RoundExit;
use score::ScoreExit;
use std::io::{self, Stdout, Write};
use std::time::Duration;

pub struct TerminalGuard
{
    stdout: Stdout,
}

impl TerminalGuard
{
    pub fn enter() -> io::Result<Self>
    {
        let mut stdout = io::stdout();
        terminal::enable_raw_mode()?;
        execute!(stdout, EnterAlternateScreen, Hide)?;
        Ok(Self { stdout })
    }

    pub fn stdout(&mut self) -> &mut Stdout
    {
        &mut self.stdout
    }
}

impl Drop for TerminalGuard
{
    fn drop(&mut self)
    {
        let _ = execute!(self.stdout, Show, LeaveAlternateScreen);
        let _ = terminal::disable_raw_mode();
    }
}

/// Plays rounds until the player quits. Returns the number of rounds finished.
pub fn run_session(config: &RoundConfig) -> Result<u32, GameError>
{
    let mut term = TerminalGuard::enter()?;
    let mut rounds = 0;

    loop {
        let final_score = match game::run_round(&mut term, config)? {
            RoundExit::Finished(score) => score,
            RoundExit::Quit => break,
        };
        rounds += 1;
        match score::run_score(&mut term, final_score)? {
            ScoreExit::PlayAgain => continue,
            ScoreExit::Quit => break,
        }
    }

    tracing::info!(rounds, "session ended");
    Ok(rounds)
}

/// Key presses the screens care about, already filtered to presses only.
pub(crate) fn next_key(timeout: Duration) -> Result<Option<KeyEvent>, GameError>
{
    if !event::poll(timeout)? {
        return Ok(None);
    }
    match event::read()? {
        Event::Key(key) if key.kind == KeyEventKind::Press => Ok(Some(key)),
        _ => Ok(None),
    }
}

pub(crate) fn is_quit(key: &KeyEvent) -> bool
{
    match key.code {
        KeyCode::Esc => true,
        KeyCode::Char('c') => key.modifiers.contains(KeyModifiers::CONTROL),
        _ => false,
    }
}

pub(crate) fn discard_pending_input() -> Result<(), GameError>
{
    while event::poll(Duration::from_millis(0))? {
        let _ = event::read()?;
    }
    Ok(())
}

pub(crate) fn present(stdout: &mut Stdout, lines: &[String]) -> Result<(), GameError>
{
    let output = format!("{}\r\n", lines.join("\r\n"));
    queue!(stdout, MoveTo(0, 0), Clear(ClearType::All))?;
    stdout.write_all(output.as_bytes())?;
    stdout.flush()?;
    Ok(())
}
