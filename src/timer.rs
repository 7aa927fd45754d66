use std::time::{Duration, Instant};

/// Handle to a repeating task that fires a fixed number of times.
///
/// The owner drives it with `poll`, which reports how many ticks became due
/// since the last call. Ticks are counted from the start instant, so a late
/// poll catches up instead of drifting.
#[derive(Debug)]
pub struct RepeatingTimer
{
    interval: Duration,
    started_at: Instant,
    total_ticks: u32,
    fired: u32,
    cancelled: bool,
}

impl RepeatingTimer
{
    pub fn start(interval: Duration, total_ticks: u32, now: Instant) -> Self
    {
        Self {
            interval,
            started_at: now,
            total_ticks,
            fired: 0,
            cancelled: false,
        }
    }

    pub fn poll(&mut self, now: Instant) -> u32
    {
        if !self.is_active() {
            return 0;
        }
        let elapsed = now.saturating_duration_since(self.started_at);
        let interval = self.interval.as_nanos().max(1);
        let due = (elapsed.as_nanos() / interval).min(self.total_ticks as u128) as u32;
        let fresh = due.saturating_sub(self.fired);
        self.fired += fresh;
        fresh
    }

    /// Returns whether the timer was still active. Safe to call repeatedly.
    pub fn cancel(&mut self) -> bool
    {
        let was_active = self.is_active();
        self.cancelled = true;
        was_active
    }

    pub fn is_active(&self) -> bool
    {
        !self.cancelled && self.fired < self.total_ticks
    }

    pub fn next_due(&self) -> Option<Instant>
    {
        if !self.is_active() {
            return None;
        }
        Some(self.started_at + self.interval * (self.fired + 1))
    }
}

#[cfg(test)]
mod tests
{
    use super::*;

    const SECOND: Duration = Duration::from_secs(1);

    #[test]
    fn reports_ticks_as_they_become_due()
    {
        let start = Instant::now();
        let mut timer = RepeatingTimer::start(SECOND, 5, start);
        assert_eq!(timer.poll(start + Duration::from_millis(999)), 0);
        assert_eq!(timer.poll(start + SECOND), 1);
        assert_eq!(timer.poll(start + SECOND), 0);
        assert_eq!(timer.poll(start + Duration::from_millis(3500)), 2);
        assert_eq!(timer.next_due(), Some(start + SECOND * 4));
    }

    #[test]
    fn sub_millisecond_interval_is_not_truncated()
    {
        let start = Instant::now();
        let half_ms = Duration::from_micros(500);
        let mut timer = RepeatingTimer::start(half_ms, 2, start);
        assert_eq!(timer.poll(start + half_ms), 1);
        assert_eq!(timer.next_due(), Some(start + half_ms * 2));
        assert_eq!(timer.poll(start + Duration::from_millis(1)), 1);
        assert!(!timer.is_active());
    }

    #[test]
    fn stops_after_the_tick_budget()
    {
        let start = Instant::now();
        let mut timer = RepeatingTimer::start(SECOND, 3, start);
        assert_eq!(timer.poll(start + SECOND * 10), 3);
        assert!(!timer.is_active());
        assert_eq!(timer.poll(start + SECOND * 20), 0);
        assert_eq!(timer.next_due(), None);
    }

    #[test]
    fn cancel_is_idempotent_and_final()
    {
        let start = Instant::now();
        let mut timer = RepeatingTimer::start(SECOND, 60, start);
        assert_eq!(timer.poll(start + SECOND * 2), 2);
        assert!(timer.cancel());
        assert!(!timer.cancel());
        assert_eq!(timer.poll(start + SECOND * 30), 0);
        assert_eq!(timer.next_due(), None);
    }
}
