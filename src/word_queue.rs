use rand::Rng;
use rand::seq::SliceRandom;
use std::collections::VecDeque;

/// Shuffled pool of words still to be shown in the current cycle.
pub(crate) struct WordQueue<R: Rng>
{
    words: Vec<String>,
    pending: VecDeque<String>,
    rng: R,
    refills: u32,
}

impl<R: Rng> WordQueue<R>
{
    /// `words` must not be empty; `RoundConfig` validates this.
    pub(crate) fn new(words: Vec<String>, rng: R) -> Self
    {
        Self {
            words,
            pending: VecDeque::new(),
            rng,
            refills: 0,
        }
    }

    pub(crate) fn next_word(&mut self) -> String
    {
        if self.pending.is_empty() {
            self.refill();
        }
        self.pending.pop_front().unwrap_or_default()
    }

    #[cfg(test)]
    fn remaining(&self) -> usize
    {
        self.pending.len()
    }

    #[cfg(test)]
    fn refills(&self) -> u32
    {
        self.refills
    }

    fn refill(&mut self)
    {
        let mut fresh = self.words.clone();
        fresh.shuffle(&mut self.rng);
        self.pending.extend(fresh);
        self.refills += 1;
        tracing::debug!(cycle = self.refills, size = self.pending.len(), "word queue refilled");
    }
}
