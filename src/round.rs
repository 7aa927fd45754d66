use crate::config::RoundConfig;
use crate::notify::Notifier;
use crate::timer::RepeatingTimer;
use crate::word_queue::WordQueue;
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::sync::mpsc::Receiver;
use std::time::{Duration, Instant};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase
{
    Running,
    Finished,
}

/// Feedback cue for the presentation layer to play once and acknowledge.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Buzz
{
    Correct,
    CountdownPanic,
    GameOver,
    None,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RoundEvent
{
    Remaining(Duration),
    Word(String),
    Score(i32),
    Finished(bool),
    Buzz(Buzz),
}

pub struct RoundController
{
    queue: WordQueue<StdRng>,
    interval: Duration,
    panic_threshold: Duration,
    remaining: Duration,
    word: String,
    score: i32,
    phase: Phase,
    finished: bool,
    buzz: Buzz,
    timer: RepeatingTimer,
    events: Notifier<RoundEvent>,
}

impl RoundController
{
    pub fn new(config: RoundConfig, now: Instant) -> Self
    {
        Self::with_rng(config, StdRng::from_entropy(), now)
    }

    pub fn with_rng(config: RoundConfig, rng: StdRng, now: Instant) -> Self
    {
        let timer = RepeatingTimer::start(config.interval(), config.tick_count(), now);
        let mut queue = WordQueue::new(config.words().to_vec(), rng);
        let word = queue.next_word();
        tracing::info!(
            words = config.words().len(),
            duration_ms = config.duration().as_millis() as u64,
            "round created"
        );
        Self {
            queue,
            interval: config.interval(),
            panic_threshold: config.panic_threshold(),
            remaining: config.duration(),
            word,
            score: 0,
            phase: Phase::Running,
            finished: false,
            buzz: Buzz::None,
            timer,
            events: Notifier::default(),
        }
    }

    pub fn subscribe(&mut self) -> Receiver<RoundEvent>
    {
        let snapshot = [
            RoundEvent::Remaining(self.remaining),
            RoundEvent::Word(self.word.clone()),
            RoundEvent::Score(self.score),
            RoundEvent::Finished(self.finished),
            RoundEvent::Buzz(self.buzz),
        ];
        self.events.subscribe(snapshot)
    }

    /// Runs every tick that has come due by `now`. Returns how many ran.
    pub fn advance(&mut self, now: Instant) -> u32
    {
        let due = self.timer.poll(now);
        for _ in 0..due {
            self.tick();
        }
        due
    }

    pub fn next_tick_at(&self) -> Option<Instant>
    {
        self.timer.next_due()
    }

    fn tick(&mut self)
    {
        if self.phase == Phase::Finished {
            return;
        }
        self.remaining = self.remaining.saturating_sub(self.interval);
        self.events.publish(RoundEvent::Remaining(self.remaining));

        if self.remaining.is_zero() {
            self.phase = Phase::Finished;
            self.timer.cancel();
            self.set_buzz(Buzz::GameOver);
            self.finished = true;
            self.events.publish(RoundEvent::Finished(true));
            tracing::info!(score = self.score, "round finished");
        } else if self.remaining <= self.panic_threshold {
            self.set_buzz(Buzz::CountdownPanic);
        }
    }

    /// Returns false once the round has finished; the score is then frozen.
    pub fn skip(&mut self) -> bool
    {
        if !self.accepts_guesses() {
            return false;
        }
        self.set_score(self.score - 1);
        self.next_word();
        true
    }

    pub fn mark_correct(&mut self) -> bool
    {
        if !self.accepts_guesses() {
            return false;
        }
        self.set_buzz(Buzz::Correct);
        self.set_score(self.score + 1);
        self.next_word();
        true
    }

    pub fn acknowledge_finished(&mut self)
    {
        self.finished = false;
        self.events.publish(RoundEvent::Finished(false));
    }

    pub fn acknowledge_buzz(&mut self)
    {
        self.set_buzz(Buzz::None);
    }

    /// Stops the countdown for good. Calling it again does nothing.
    pub fn teardown(&mut self)
    {
        if self.timer.cancel() {
            tracing::info!(remaining_ms = self.remaining.as_millis() as u64, "round torn down");
        }
    }

    pub fn remaining(&self) -> Duration
    {
        self.remaining
    }

    pub fn word(&self) -> &str
    {
        &self.word
    }

    pub fn score(&self) -> i32
    {
        self.score
    }

    pub fn is_finished(&self) -> bool
    {
        self.finished
    }

    pub fn phase(&self) -> Phase
    {
        self.phase
    }

    pub fn buzz(&self) -> Buzz
    {
        self.buzz
    }

    fn accepts_guesses(&self) -> bool
    {
        if self.phase == Phase::Finished {
            tracing::debug!("guess ignored after round end");
            return false;
        }
        true
    }

    fn next_word(&mut self)
    {
        self.word = self.queue.next_word();
        self.events.publish(RoundEvent::Word(self.word.clone()));
    }

    fn set_score(&mut self, score: i32)
    {
        self.score = score;
        self.events.publish(RoundEvent::Score(score));
    }

    fn set_buzz(&mut self, buzz: Buzz)
    {
        self.buzz = buzz;
        self.events.publish(RoundEvent::Buzz(buzz));
    }
}

impl Drop for RoundController
{
    fn drop(&mut self)
    {
        self.teardown();
    }
}
