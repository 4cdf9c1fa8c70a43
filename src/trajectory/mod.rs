//! Trajectory generation module
//!
//! A [`Trajectory`] is a fixed-length list of sampled positions that the
//! controller plays back one sample per update period, wrapping around at
//! the end so the motion loops for as long as the objects are moving.

pub mod cubic_spline;
pub mod spline;
pub mod triangle_wave;

use crate::common::types::Position;

pub use self::spline::ClosedSpline;
pub use self::triangle_wave::TriangleWave;

/// Upper bound on the number of samples in one trajectory
pub const MAX_SAMPLES: usize = 10_000_000;

/// Sampled positions of one object over one loop of its motion
#[derive(Debug, Clone, PartialEq)]
pub struct Trajectory {
    samples: Vec<Position>,
}

impl Trajectory {
    /// Create a trajectory from its samples
    pub fn new(samples: Vec<Position>) -> Self {
        Trajectory { samples }
    }

    /// Number of samples in one loop
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Sample at `index`, wrapping modulo the trajectory length
    pub fn sample(&self, index: usize) -> Option<Position> {
        if self.samples.is_empty() {
            return None;
        }
        Some(self.samples[index % self.samples.len()])
    }

    pub fn samples(&self) -> &[Position] {
        &self.samples
    }

    pub fn first(&self) -> Option<Position> {
        self.samples.first().copied()
    }

    pub fn last(&self) -> Option<Position> {
        self.samples.last().copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sample_wraps_around() {
        let trajectory = Trajectory::new(vec![
            Position::new(0.0, 0.0, 0.0),
            Position::new(1.0, 0.0, 0.0),
            Position::new(2.0, 0.0, 0.0),
        ]);

        assert_eq!(trajectory.len(), 3);
        assert_eq!(trajectory.sample(1), Some(Position::new(1.0, 0.0, 0.0)));
        assert_eq!(trajectory.sample(3), Some(Position::new(0.0, 0.0, 0.0)));
        assert_eq!(trajectory.sample(8), Some(Position::new(2.0, 0.0, 0.0)));
    }

    #[test]
    fn empty_trajectory_has_no_samples() {
        let trajectory = Trajectory::new(Vec::new());
        assert!(trajectory.is_empty());
        assert_eq!(trajectory.sample(0), None);
        assert_eq!(trajectory.first(), None);
    }
}
