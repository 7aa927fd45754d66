use super::{TerminalGuard, discard_pending_input, is_quit, next_key, present};
use crate::error::GameError;
use crate::score::{ScoreEvent, ScoreReporter};
use crossterm::event::KeyCode;
use std::time::Duration;

const POLL_MS: u64 = 50;

pub enum ScoreExit
{
    PlayAgain,
    Quit,
}

pub fn run_score(term: &mut TerminalGuard, final_score: i32) -> Result<ScoreExit, GameError>
{
    discard_pending_input()?;
    let mut reporter = ScoreReporter::new(final_score);
    let events = reporter.subscribe();
    let mut shown_score = 0;
    let mut dirty = true;

    loop {
        for event in events.try_iter() {
            match event {
                ScoreEvent::Score(score) => {
                    shown_score = score;
                    dirty = true;
                }
                ScoreEvent::PlayAgain(true) => {
                    reporter.acknowledge_play_again();
                    return Ok(ScoreExit::PlayAgain);
                }
                ScoreEvent::PlayAgain(false) => {}
            }
        }

        if dirty {
            draw_score(term, shown_score)?;
            dirty = false;
        }

        if let Some(key) = next_key(Duration::from_millis(POLL_MS))? {
            if is_quit(&key) {
                return Ok(ScoreExit::Quit);
            }
            match key.code {
                KeyCode::Enter | KeyCode::Char('r') => reporter.request_play_again(),
                KeyCode::Char('q') => return Ok(ScoreExit::Quit),
                _ => {}
            }
        }
    }
}

fn draw_score(term: &mut TerminalGuard, score: i32) -> Result<(), GameError>
{
    let lines = vec![
        "Time's up!".to_string(),
        String::new(),
        format!("Final score: {}", score),
        String::new(),
        "Press ENTER or R to play again, Q or ESC to quit.".to_string(),
    ];
    present(term.stdout(), &lines)
}
