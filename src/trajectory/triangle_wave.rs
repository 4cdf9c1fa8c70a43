//! Vertical triangle wave trajectory

use std::f64::consts::{PI, TAU};

use super::{Trajectory, MAX_SAMPLES};
use crate::common::types::Position;
use crate::error::TrajectoryError;

/// Object bouncing up and down above a fixed (x, y) point
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TriangleWave {
    /// x coordinate (m)
    pub x: f64,
    /// y coordinate (m)
    pub y: f64,
    /// amplitude of the wave along z (m)
    pub amplitude: f64,
    /// frequency of the wave (Hz)
    pub frequency: f64,
    /// height of the zero of the wave above the ground (m)
    pub offset: f64,
}

impl TriangleWave {
    /// Number of samples in one period when sampled at `sampling_rate` Hz
    pub fn period_len(&self, sampling_rate: f64) -> Result<usize, TrajectoryError> {
        if !sampling_rate.is_finite() || sampling_rate <= 0.0 {
            return Err(TrajectoryError::InvalidSamplingRate(sampling_rate));
        }
        if !self.frequency.is_finite() || self.frequency <= 0.0 {
            return Err(TrajectoryError::InvalidFrequency(self.frequency));
        }

        let samples = (sampling_rate / self.frequency).floor();
        if samples > MAX_SAMPLES as f64 {
            return Err(TrajectoryError::TooManySamples {
                requested: samples,
                max: MAX_SAMPLES,
            });
        }
        let len = samples as usize;
        if len == 0 {
            return Err(TrajectoryError::EmptyPeriod {
                frequency: self.frequency,
                sampling_rate,
            });
        }
        Ok(len)
    }

    /// Sample one full period of the wave.
    ///
    /// Time samples are evenly spaced over `[0, 1 / frequency]`, both ends
    /// included, so the first and last samples sit at the bottom of the wave.
    pub fn generate(&self, sampling_rate: f64) -> Result<Trajectory, TrajectoryError> {
        let len = self.period_len(sampling_rate)?;
        let last = (len - 1).max(1) as f64;

        let samples = (0..len)
            .map(|k| {
                let phase = TAU * (k as f64 / last);
                let z = self.offset + self.amplitude * triangle(phase);
                Position::new(self.x, self.y, z)
            })
            .collect();

        Ok(Trajectory::new(samples))
    }
}

/// Symmetric triangle waveform with period 2π: -1 at phase 0, +1 at π.
pub fn triangle(phase: f64) -> f64 {
    let p = phase.rem_euclid(TAU);
    if p < PI {
        -1.0 + 2.0 * p / PI
    } else {
        1.0 - 2.0 * (p - PI) / PI
    }
}
