use std::time::{Duration, Instant};

/// Starts and stops the periodic tick task.
///
/// The session only decides *whether* ticks should happen; the owner of the
/// event loop asks the concrete scheduler *when*.
pub trait Scheduler {
    /// Begins firing every `period`. Restarting replaces the previous period.
    fn start(&mut self, period: Duration);

    /// Stops firing. Stopping an inactive scheduler is a no-op.
    fn stop(&mut self);

    /// Returns true while the periodic task is active.
    fn is_active(&self) -> bool;
}

/// Wall-clock scheduler polled by the terminal event loop.
#[derive(Debug, Clone, Default)]
pub struct IntervalTicker {
    active: Option<Interval>,
}

#[derive(Debug, Clone, Copy)]
struct Interval {
    period: Duration,
    next_due: Instant,
}

impl IntervalTicker {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Time left until the next firing, or `None` while stopped.
    #[must_use]
    pub fn time_until_due(&self, now: Instant) -> Option<Duration> {
        self.active
            .map(|interval| interval.next_due.saturating_duration_since(now))
    }

    /// Consumes one due firing, returning whether a tick should run now.
    ///
    /// A loop that fell more than a period behind resumes from `now` instead
    /// of replaying missed ticks in a burst.
    pub fn fire_if_due(&mut self, now: Instant) -> bool {
        let Some(interval) = self.active.as_mut() else {
            return false;
        };

        if now < interval.next_due {
            return false;
        }

        interval.next_due += interval.period;
        if interval.next_due <= now {
            interval.next_due = now + interval.period;
        }
        true
    }

    fn start_at(&mut self, period: Duration, now: Instant) {
        self.active = Some(Interval {
            period,
            next_due: now + period,
        });
    }
}

impl Scheduler for IntervalTicker {
    fn start(&mut self, period: Duration) {
        self.start_at(period, Instant::now());
    }

    fn stop(&mut self) {
        self.active = None;
    }

    fn is_active(&self) -> bool {
        self.active.is_some()
    }
}

/// Scheduler that never fires by itself; the caller drives ticks by hand.
#[derive(Debug, Clone, Default)]
pub struct ManualScheduler {
    period: Option<Duration>,
    starts: u32,
}

impl ManualScheduler {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Period passed to the most recent `start`, while active.
    #[must_use]
    pub fn period(&self) -> Option<Duration> {
        self.period
    }

    /// Number of times the task has been started.
    #[must_use]
    pub fn starts(&self) -> u32 {
        self.starts
    }
}

impl Scheduler for ManualScheduler {
    fn start(&mut self, period: Duration) {
        self.period = Some(period);
        self.starts += 1;
    }

    fn stop(&mut self) {
        self.period = None;
    }

    fn is_active(&self) -> bool {
        self.period.is_some()
    }
}
