//! Randomized closed 3D spline trajectory

use rand::Rng;

use super::cubic_spline::{CubicSpline, MIN_KNOTS};
use super::{Trajectory, MAX_SAMPLES};
use crate::common::types::{Bounds, Position};
use crate::error::TrajectoryError;

pub const DEFAULT_CONTROL_POINTS: usize = 10;
/// More sampling points means a slower object.
pub const DEFAULT_SAMPLING_POINTS: usize = 4000;
/// The fit solves a dense system in the number of control points.
pub const MAX_CONTROL_POINTS: usize = 1000;

/// Closed spline through random control points inside a box
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ClosedSpline {
    pub x: Bounds,
    pub y: Bounds,
    pub z: Bounds,
    /// number of random control points, the last one is replaced by the first
    pub n_points: usize,
    /// number of samples taken over the whole length of the spline
    pub n_sampling_points: usize,
}

impl ClosedSpline {
    pub fn new(x: Bounds, y: Bounds, z: Bounds) -> Self {
        ClosedSpline {
            x,
            y,
            z,
            n_points: DEFAULT_CONTROL_POINTS,
            n_sampling_points: DEFAULT_SAMPLING_POINTS,
        }
    }

    fn validate(&self) -> Result<(), TrajectoryError> {
        if self.n_points < MIN_KNOTS {
            return Err(TrajectoryError::TooFewControlPoints {
                min: MIN_KNOTS,
                got: self.n_points,
            });
        }
        if self.n_points > MAX_CONTROL_POINTS {
            return Err(TrajectoryError::TooManyControlPoints {
                max: MAX_CONTROL_POINTS,
                got: self.n_points,
            });
        }
        check_sampling_points(self.n_sampling_points)?;
        for (axis, (min, max)) in [('x', self.x), ('y', self.y), ('z', self.z)] {
            // the sampler scales by the span, so it must not overflow either
            let span = (max - min) / (1.0 - f64::EPSILON);
            if !min.is_finite() || !max.is_finite() || !(min <= max) || !span.is_finite() {
                return Err(TrajectoryError::InvalidBounds { axis, min, max });
            }
        }
        Ok(())
    }

    /// Draw uniformly distributed control points and close the loop
    pub fn control_points<R: Rng>(
        &self,
        rng: &mut R,
    ) -> Result<Vec<Position>, TrajectoryError> {
        self.validate()?;

        let mut points: Vec<Position> = (0..self.n_points)
            .map(|_| {
                Position::new(
                    rng.gen_range(self.x.0..=self.x.1),
                    rng.gen_range(self.y.0..=self.y.1),
                    rng.gen_range(self.z.0..=self.z.1),
                )
            })
            .collect();

        let last = points.len() - 1;
        points[last] = points[0];
        Ok(points)
    }

    /// Generate a trajectory through fresh random control points
    pub fn generate<R: Rng>(&self, rng: &mut R) -> Result<Trajectory, TrajectoryError> {
        let points = self.control_points(rng)?;
        self.interpolate(&points)
    }

    /// Fit an interpolating spline through `points` and sample it evenly
    /// over its parameter range.
    pub fn interpolate(&self, points: &[Position]) -> Result<Trajectory, TrajectoryError> {
        if points.len() < MIN_KNOTS {
            return Err(TrajectoryError::TooFewControlPoints {
                min: MIN_KNOTS,
                got: points.len(),
            });
        }
        check_sampling_points(self.n_sampling_points)?;

        let u = chord_length_parameters(points)?;

        let axis = |select: fn(&Position) -> f64, name: char| {
            let values: Vec<f64> = points.iter().map(select).collect();
            CubicSpline::new(&u, &values).ok_or(TrajectoryError::SingularSystem { axis: name })
        };
        let sx = axis(|p| p.x, 'x')?;
        let sy = axis(|p| p.y, 'y')?;
        let sz = axis(|p| p.z, 'z')?;

        let last = (self.n_sampling_points - 1).max(1) as f64;
        let samples = (0..self.n_sampling_points)
            .map(|k| {
                let t = k as f64 / last;
                Position::new(sx.eval(t), sy.eval(t), sz.eval(t))
            })
            .collect();

        Ok(Trajectory::new(samples))
    }
}

fn check_sampling_points(n_sampling_points: usize) -> Result<(), TrajectoryError> {
    if n_sampling_points == 0 {
        return Err(TrajectoryError::NoSamplingPoints);
    }
    if n_sampling_points > MAX_SAMPLES {
        return Err(TrajectoryError::TooManySamples {
            requested: n_sampling_points as f64,
            max: MAX_SAMPLES,
        });
    }
    Ok(())
}

/// Cumulative chord length of the polyline, normalized to [0, 1]
fn chord_length_parameters(points: &[Position]) -> Result<Vec<f64>, TrajectoryError> {
    let mut u = Vec::with_capacity(points.len());
    u.push(0.0);

    let mut total = 0.0;
    for (index, pair) in points.windows(2).enumerate() {
        let step = (pair[1] - pair[0]).norm();
        if !(step > 0.0) {
            return Err(TrajectoryError::CoincidentControlPoints {
                index,
                next: index + 1,
            });
        }
        total += step;
        u.push(total);
    }

    for value in u.iter_mut() {
        *value /= total;
    }
    // exact end so the last sample lands on the closing point
    if let Some(end) = u.last_mut() {
        *end = 1.0;
    }
    Ok(u)
}
