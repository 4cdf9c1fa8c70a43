//! Fixed frequency loop pacing

use std::thread;
use std::time::{Duration, Instant};

use crate::error::TrajectoryError;

/// Period of a loop running at `hz`.
///
/// `hz` must be positive and finite, and slow rates must still give a
/// period that fits in a [`Duration`].
pub fn period_of(hz: f64) -> Result<Duration, TrajectoryError> {
    if !hz.is_finite() || hz <= 0.0 {
        return Err(TrajectoryError::InvalidSamplingRate(hz));
    }
    Duration::try_from_secs_f64(1.0 / hz).map_err(|_| TrajectoryError::InvalidSamplingRate(hz))
}

/// Sleeps so that consecutive calls to [`Rate::sleep`] are one period apart
#[derive(Debug)]
pub struct Rate {
    period: Duration,
    next: Instant,
}

impl Rate {
    pub fn new(hz: f64) -> Result<Self, TrajectoryError> {
        let period = period_of(hz)?;
        let now = Instant::now();
        let next = now
            .checked_add(period)
            .ok_or(TrajectoryError::InvalidSamplingRate(hz))?;
        Ok(Rate { period, next })
    }

    pub fn period(&self) -> Duration {
        self.period
    }

    /// Sleep until the end of the current period.
    ///
    /// If the caller fell behind by more than a period the schedule is
    /// restarted from now instead of bursting to catch up.
    pub fn sleep(&mut self) {
        let now = Instant::now();
        if self.next > now {
            thread::sleep(self.next - now);
            self.next += self.period;
        } else {
            self.next = now + self.period;
        }
    }
}
