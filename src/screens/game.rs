use super::{TerminalGuard, is_quit, next_key, present};
use crate::config::RoundConfig;
use crate::error::GameError;
use crate::round::{Buzz, RoundController, RoundEvent};
use crossterm::event::KeyCode;
use std::io::Write;
use std::time::{Duration, Instant};

const TICK_MS: u64 = 33;
const CORRECT_FLASH: Duration = Duration::from_millis(400);
const PANIC_FLASH: Duration = Duration::from_millis(250);

pub enum RoundExit
{
    Finished(i32),
    Quit,
}

#[derive(Clone, Copy, PartialEq, Eq)]
enum Action
{
    Correct,
    Skip,
    Quit,
}

/// What the screen currently shows, built only from round events.
#[derive(Default)]
struct RoundView
{
    remaining: Duration,
    word: String,
    score: i32,
    flash: Option<(Buzz, Instant)>,
}

impl RoundView
{
    fn apply(&mut self, event: RoundEvent, now: Instant)
    {
        match event {
            RoundEvent::Remaining(remaining) => self.remaining = remaining,
            RoundEvent::Word(word) => self.word = word,
            RoundEvent::Score(score) => self.score = score,
            RoundEvent::Buzz(Buzz::Correct) => self.flash = Some((Buzz::Correct, now + CORRECT_FLASH)),
            RoundEvent::Buzz(Buzz::CountdownPanic) => {
                self.flash = Some((Buzz::CountdownPanic, now + PANIC_FLASH))
            }
            RoundEvent::Buzz(_) | RoundEvent::Finished(_) => {}
        }
    }

    fn banner(&self, now: Instant) -> Option<String>
    {
        match self.flash {
            Some((Buzz::Correct, until)) if now < until => {
                Some(format!("{}  GOT IT!  \x1b[0m", ansi_background(0, 150, 70)))
            }
            Some((Buzz::CountdownPanic, until)) if now < until => {
                Some(format!("{}  HURRY!  \x1b[0m", ansi_background(170, 20, 20)))
            }
            _ => None,
        }
    }
}

pub fn run_round(term: &mut TerminalGuard, config: &RoundConfig) -> Result<RoundExit, GameError>
{
    let mut round = RoundController::new(config.clone(), Instant::now());
    let events = round.subscribe();
    let mut view = RoundView::default();
    let mut last_draw: Option<Instant> = None;

    loop {
        let timeout = input_timeout(round.next_tick_at(), Instant::now());
        match read_action(timeout)? {
            Some(Action::Correct) => {
                round.mark_correct();
            }
            Some(Action::Skip) => {
                round.skip();
            }
            Some(Action::Quit) => {
                round.teardown();
                return Ok(RoundExit::Quit);
            }
            None => {}
        }

        let now = Instant::now();
        round.advance(now);

        let mut finished = false;
        for event in events.try_iter() {
            match event {
                RoundEvent::Finished(true) => finished = true,
                RoundEvent::Buzz(Buzz::GameOver) => {
                    term.stdout().write_all(b"\x07")?;
                    round.acknowledge_buzz();
                }
                RoundEvent::Buzz(Buzz::Correct) | RoundEvent::Buzz(Buzz::CountdownPanic) => {
                    view.apply(event, now);
                    round.acknowledge_buzz();
                }
                other => view.apply(other, now),
            }
        }

        if finished {
            round.acknowledge_finished();
            draw_round(term, &view, now)?;
            return Ok(RoundExit::Finished(round.score()));
        }

        if last_draw.is_none_or(|at| at.elapsed() >= Duration::from_millis(TICK_MS)) {
            draw_round(term, &view, now)?;
            last_draw = Some(Instant::now());
        }
    }
}

fn read_action(timeout: Duration) -> Result<Option<Action>, GameError>
{
    let Some(key) = next_key(timeout)? else {
        return Ok(None);
    };
    if is_quit(&key) {
        return Ok(Some(Action::Quit));
    }
    let action = match key.code {
        KeyCode::Enter | KeyCode::Char('y') => Some(Action::Correct),
        KeyCode::Char(' ') | KeyCode::Char('n') => Some(Action::Skip),
        _ => None,
    };
    Ok(action)
}

/// Wait for input no longer than a redraw frame or the next countdown tick.
fn input_timeout(next_tick: Option<Instant>, now: Instant) -> Duration
{
    let frame = Duration::from_millis(TICK_MS);
    match next_tick {
        Some(at) => at.saturating_duration_since(now).min(frame),
        None => frame,
    }
}

fn draw_round(term: &mut TerminalGuard, view: &RoundView, now: Instant) -> Result<(), GameError>
{
    let mut lines = Vec::new();
    lines.push("Guess the Word".to_string());
    lines.push(format!(
        "Time left: {}  Score: {}",
        format_elapsed(view.remaining),
        view.score
    ));
    lines.push(String::new());
    lines.push(format!("The word is:  {}", view.word.to_uppercase()));
    lines.push(String::new());
    lines.push(view.banner(now).unwrap_or_default());
    lines.push(String::new());
    lines.push("Controls: ENTER got it, SPACE skip, ESC quit".to_string());
    present(term.stdout(), &lines)
}

/// `MM:SS`, or `H:MM:SS` past an hour.
pub fn format_elapsed(duration: Duration) -> String
{
    let total = duration.as_secs();
    let (hours, minutes, seconds) = (total / 3600, (total % 3600) / 60, total % 60);
    if hours > 0 {
        format!("{hours}:{minutes:02}:{seconds:02}")
    } else {
        format!("{minutes:02}:{seconds:02}")
    }
}

fn ansi_background(r: u8, g: u8, b: u8) -> String
{
    format!("\x1b[48;2;{};{};{}m", r, g, b)
}

#[cfg(test)]
mod tests
{
    use super::*;

    #[test]
    fn formats_like_a_countdown_clock()
    {
        assert_eq!(format_elapsed(Duration::from_secs(60)), "01:00");
        assert_eq!(format_elapsed(Duration::from_secs(9)), "00:09");
        assert_eq!(format_elapsed(Duration::ZERO), "00:00");
        assert_eq!(format_elapsed(Duration::from_secs(3725)), "1:02:05");
    }

    #[test]
    fn input_wait_is_capped_by_frame_and_tick()
    {
        let now = Instant::now();
        assert_eq!(input_timeout(None, now), Duration::from_millis(TICK_MS));
        assert_eq!(
            input_timeout(Some(now + Duration::from_millis(5)), now),
            Duration::from_millis(5)
        );
        assert_eq!(input_timeout(Some(now), now + Duration::from_secs(1)), Duration::ZERO);
    }

    #[test]
    fn view_tracks_round_events()
    {
        let now = Instant::now();
        let mut view = RoundView::default();
        view.apply(RoundEvent::Word("zebra".to_string()), now);
        view.apply(RoundEvent::Score(3), now);
        view.apply(RoundEvent::Remaining(Duration::from_secs(42)), now);
        view.apply(RoundEvent::Buzz(Buzz::Correct), now);
        assert_eq!(view.word, "zebra");
        assert_eq!(view.score, 3);
        assert_eq!(view.remaining, Duration::from_secs(42));
        assert!(view.banner(now).is_some());
        assert!(view.banner(now + CORRECT_FLASH).is_none());
    }
}
