use crate::notify::Notifier;
use std::sync::mpsc::Receiver;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ScoreEvent
{
    Score(i32),
    PlayAgain(bool),
}

/// Holds the final score of a finished round and the one-shot replay signal.
pub struct ScoreReporter
{
    final_score: i32,
    play_again: bool,
    events: Notifier<ScoreEvent>,
}

impl ScoreReporter
{
    pub fn new(final_score: i32) -> Self
    {
        tracing::info!(final_score, "score reported");
        Self {
            final_score,
            play_again: false,
            events: Notifier::default(),
        }
    }

    pub fn subscribe(&mut self) -> Receiver<ScoreEvent>
    {
        self.events.subscribe([
            ScoreEvent::Score(self.final_score),
            ScoreEvent::PlayAgain(self.play_again),
        ])
    }

    pub fn final_score(&self) -> i32
    {
        self.final_score
    }

    pub fn play_again_requested(&self) -> bool
    {
        self.play_again
    }

    pub fn request_play_again(&mut self)
    {
        tracing::debug!("play again requested");
        self.set_play_again(true);
    }

    pub fn acknowledge_play_again(&mut self)
    {
        self.set_play_again(false);
    }

    fn set_play_again(&mut self, value: bool)
    {
        self.play_again = value;
        self.events.publish(ScoreEvent::PlayAgain(value));
    }
}

#[cfg(test)]
mod tests
{
    use super::*;

    #[test]
    fn publishes_final_score_immediately()
    {
        let mut reporter = ScoreReporter::new(-4);
        assert_eq!(reporter.final_score(), -4);
        assert!(!reporter.play_again_requested());
        let rx = reporter.subscribe();
        assert_eq!(
            rx.try_iter().collect::<Vec<_>>(),
            vec![ScoreEvent::Score(-4), ScoreEvent::PlayAgain(false)]
        );
    }

    #[test]
    fn play_again_request_then_acknowledge()
    {
        let mut reporter = ScoreReporter::new(7);
        let rx = reporter.subscribe();
        rx.try_iter().count();

        reporter.request_play_again();
        assert!(reporter.play_again_requested());
        reporter.acknowledge_play_again();
        assert!(!reporter.play_again_requested());
        assert_eq!(reporter.final_score(), 7);
        assert_eq!(
            rx.try_iter().collect::<Vec<_>>(),
            vec![ScoreEvent::PlayAgain(true), ScoreEvent::PlayAgain(false)]
        );
    }
}
