use crate::error::GameError;
use crate::words::{canonical_words, load_word_file};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::time::Duration;

pub const COUNTDOWN_TIME: Duration = Duration::from_secs(60);
pub const ONE_SECOND: Duration = Duration::from_secs(1);
pub const PANIC_TIME: Duration = Duration::from_secs(10);

/// Everything a round needs to run, injected at construction.
#[derive(Clone, Debug)]
pub struct RoundConfig
{
    words: Vec<String>,
    duration: Duration,
    interval: Duration,
    panic_threshold: Duration,
}

impl RoundConfig
{
    pub fn new(words: Vec<String>, duration: Duration, interval: Duration) -> Result<Self, GameError>
    {
        if words.is_empty() {
            return Err(GameError::EmptyWordList);
        }
        if interval.is_zero() {
            return Err(GameError::InvalidTiming("tick interval must be positive".to_string()));
        }
        if duration.is_zero() {
            return Err(GameError::InvalidTiming("round duration must be positive".to_string()));
        }
        if ticks_needed(duration, interval) > u32::MAX as u128 {
            return Err(GameError::InvalidTiming(format!(
                "round of {duration:?} needs more than {} ticks of {interval:?}",
                u32::MAX
            )));
        }
        Ok(Self {
            words,
            duration,
            interval,
            panic_threshold: PANIC_TIME,
        })
    }

    pub fn with_panic_threshold(mut self, threshold: Duration) -> Self
    {
        self.panic_threshold = threshold;
        self
    }

    pub fn words(&self) -> &[String]
    {
        &self.words
    }

    pub fn duration(&self) -> Duration
    {
        self.duration
    }

    pub fn interval(&self) -> Duration
    {
        self.interval
    }

    pub fn panic_threshold(&self) -> Duration
    {
        self.panic_threshold
    }

    /// Ticks needed to count the full duration down to zero.
    pub fn tick_count(&self) -> u32
    {
        ticks_needed(self.duration, self.interval) as u32
    }
}

fn ticks_needed(duration: Duration, interval: Duration) -> u128
{
    duration.as_nanos().div_ceil(interval.as_nanos().max(1))
}

impl Default for RoundConfig
{
    fn default() -> Self
    {
        Self {
            words: canonical_words(),
            duration: COUNTDOWN_TIME,
            interval: ONE_SECOND,
            panic_threshold: PANIC_TIME,
        }
    }
}

#[derive(Debug, Parser)]
#[command(name = "guess-the-word", version, about = "Timed word guessing party game")]
pub struct Cli
{
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Round length in seconds.
    #[arg(long, env = "GUESS_SECONDS", default_value_t = 60, global = true)]
    pub seconds: u64,

    /// Remaining seconds at which the countdown starts to warn.
    #[arg(long, default_value_t = 10, global = true)]
    pub panic_seconds: u64,

    /// Word list, one word per line.
    #[arg(long = "words", env = "GUESS_WORDS_FILE", global = true)]
    pub words_file: Option<PathBuf>,

    /// Write logs here. Logging is off without it.
    #[arg(long, env = "GUESS_LOG_FILE", global = true)]
    pub log_file: Option<PathBuf>,
}

#[derive(Debug, Subcommand, Clone, Copy, PartialEq, Eq)]
pub enum Command
{
    /// Play rounds until you quit (default).
    Play,
    /// Print the active word list.
    Words,
}

impl Cli
{
    pub fn round_config(&self) -> Result<RoundConfig, GameError>
    {
        let words = match &self.words_file {
            Some(path) => load_word_file(path)?,
            None => canonical_words(),
        };
        let config = RoundConfig::new(words, Duration::from_secs(self.seconds), ONE_SECOND)?;
        Ok(config.with_panic_threshold(Duration::from_secs(self.panic_seconds)))
    }
}

#[cfg(test)]
mod tests
{
    use super::*;

    #[test]
    fn default_round_is_sixty_one_second_ticks()
    {
        let config = RoundConfig::default();
        assert_eq!(config.words().len(), 21);
        assert_eq!(config.tick_count(), 60);
        assert_eq!(config.panic_threshold(), PANIC_TIME);
    }

    #[test]
    fn partial_final_interval_still_counts_as_a_tick()
    {
        let config = RoundConfig::new(
            vec!["owl".to_string()],
            Duration::from_millis(2500),
            ONE_SECOND,
        )
        .unwrap();
        assert_eq!(config.tick_count(), 3);
    }

    #[test]
    fn sub_millisecond_interval_counts_every_tick()
    {
        let config = RoundConfig::new(
            vec!["a".to_string()],
            Duration::from_millis(1),
            Duration::from_micros(500),
        )
        .unwrap();
        assert_eq!(config.tick_count(), 2);
    }

    #[test]
    fn rejects_rounds_longer_than_the_tick_budget()
    {
        let too_long = Duration::from_secs(u32::MAX as u64 + 5);
        assert!(matches!(
            RoundConfig::new(vec!["a".to_string()], too_long, ONE_SECOND),
            Err(GameError::InvalidTiming(_))
        ));
        let longest = Duration::from_secs(u32::MAX as u64);
        let config = RoundConfig::new(vec!["a".to_string()], longest, ONE_SECOND).unwrap();
        assert_eq!(config.tick_count(), u32::MAX);
    }

    #[test]
    fn rejects_empty_word_list_and_zero_timing()
    {
        assert!(matches!(
            RoundConfig::new(Vec::new(), COUNTDOWN_TIME, ONE_SECOND),
            Err(GameError::EmptyWordList)
        ));
        assert!(matches!(
            RoundConfig::new(vec!["a".to_string()], COUNTDOWN_TIME, Duration::ZERO),
            Err(GameError::InvalidTiming(_))
        ));
        assert!(matches!(
            RoundConfig::new(vec!["a".to_string()], Duration::ZERO, ONE_SECOND),
            Err(GameError::InvalidTiming(_))
        ));
    }

    #[test]
    fn cli_defaults_build_the_canonical_round()
    {
        let cli = Cli::try_parse_from(["guess-the-word"]).unwrap();
        assert_eq!(cli.command, None);
        let config = cli.round_config().unwrap();
        assert_eq!(config.duration(), COUNTDOWN_TIME);
        assert_eq!(config.words().len(), 21);
    }

    #[test]
    fn cli_accepts_options_after_subcommand()
    {
        let cli = Cli::try_parse_from(["guess-the-word", "play", "--seconds", "30", "--panic-seconds", "5"])
            .unwrap();
        assert_eq!(cli.command, Some(Command::Play));
        let config = cli.round_config().unwrap();
        assert_eq!(config.tick_count(), 30);
        assert_eq!(config.panic_threshold(), Duration::from_secs(5));
    }
}
