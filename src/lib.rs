//! Timed word guessing party game.
//!
//! A round shows one word at a time while a countdown runs; the player marks
//! it guessed or skips it. When time runs out the score screen offers a replay.

pub mod config;
pub mod error;
pub mod notify;
pub mod round;
pub mod score;
pub mod screens;
pub mod timer;
mod word_queue;
pub mod words;

pub use config::RoundConfig;
pub use error::GameError;
pub use round::{Buzz, Phase, RoundController, RoundEvent};
pub use score::{ScoreEvent, ScoreReporter};
