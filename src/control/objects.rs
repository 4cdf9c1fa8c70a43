//! Per-object motion configuration
//!
//! Objects are described by flat parameters keyed by their index:
//!
//! ```text
//! n_objects: 2
//! object_0_model_name: box_100mm
//! object_0_function: triangle_wave
//! object_0_x / object_0_y / object_0_z_amplitude / object_0_z_frequency / object_0_z_offset
//! object_1_model_name: sphere_50mm
//! object_1_function: 3d_spline
//! object_1_x_min ... object_1_z_max, object_1_n_points
//! n_sampling_points: 4000
//! ```

use rand::Rng;
use tracing::info;

use crate::error::{ControllerError, ControllerResult, TrajectoryError};
use crate::params::{self, ParameterSource};
use crate::trajectory::{ClosedSpline, Trajectory, TriangleWave};

pub const TRIANGLE_WAVE: &str = "triangle_wave";
pub const SPLINE_3D: &str = "3d_spline";

/// Motion function selected for an object
#[derive(Debug, Clone, PartialEq)]
pub enum MotionFunction {
    TriangleWave(TriangleWave),
    Spline3d(ClosedSpline),
}

impl MotionFunction {
    /// Parameter value selecting this function
    pub fn name(&self) -> &'static str {
        match self {
            MotionFunction::TriangleWave(_) => TRIANGLE_WAVE,
            MotionFunction::Spline3d(_) => SPLINE_3D,
        }
    }

    /// Sample the function. `sampling_rate` only matters for the wave.
    pub fn trajectory<R: Rng>(
        &self,
        sampling_rate: f64,
        rng: &mut R,
    ) -> Result<Trajectory, TrajectoryError> {
        match self {
            MotionFunction::TriangleWave(wave) => wave.generate(sampling_rate),
            MotionFunction::Spline3d(spline) => spline.generate(rng),
        }
    }
}

/// A simulated object and how it moves
#[derive(Debug, Clone, PartialEq)]
pub struct ObjectDescriptor {
    pub model_name: String,
    pub motion: MotionFunction,
}

fn key(index: usize, name: &str) -> String {
    format!("object_{}_{}", index, name)
}

impl ObjectDescriptor {
    /// Read the descriptor of object `index`
    pub fn from_parameters(params: &dyn ParameterSource, index: usize) -> ControllerResult<Self> {
        let model_name = params::require_string(params, &key(index, "model_name"))?;
        let function = params::require_string(params, &key(index, "function"))?;

        let motion = match function.as_str() {
            TRIANGLE_WAVE => MotionFunction::TriangleWave(TriangleWave {
                x: params::require_f64(params, &key(index, "x"))?,
                y: params::require_f64(params, &key(index, "y"))?,
                amplitude: params::require_f64(params, &key(index, "z_amplitude"))?,
                frequency: params::require_f64(params, &key(index, "z_frequency"))?,
                offset: params::require_f64(params, &key(index, "z_offset"))?,
            }),
            SPLINE_3D => {
                let bounds = |axis: &str| -> ControllerResult<(f64, f64)> {
                    Ok((
                        params::require_f64(params, &key(index, &format!("{}_min", axis)))?,
                        params::require_f64(params, &key(index, &format!("{}_max", axis)))?,
                    ))
                };
                let mut spline = ClosedSpline::new(bounds("x")?, bounds("y")?, bounds("z")?);
                spline.n_points = params::require_count(params, &key(index, "n_points"))?;
                spline.n_sampling_points = params::require_count(params, "n_sampling_points")?;
                MotionFunction::Spline3d(spline)
            }
            _ => return Err(ControllerError::UnknownFunction { index, function }),
        };

        Ok(ObjectDescriptor { model_name, motion })
    }

    /// Sample this object's trajectory
    pub fn trajectory<R: Rng>(
        &self,
        index: usize,
        sampling_rate: f64,
        rng: &mut R,
    ) -> ControllerResult<Trajectory> {
        self.motion
            .trajectory(sampling_rate, rng)
            .map_err(|source| ControllerError::Trajectory {
                index,
                model_name: self.model_name.clone(),
                source,
            })
    }
}

/// Read `n_objects` (default 1) and every object's descriptor
pub fn load_objects(params: &dyn ParameterSource) -> ControllerResult<Vec<ObjectDescriptor>> {
    let n_objects = params::count_or(params, "n_objects", 1)?;

    (0..n_objects)
        .map(|index| {
            let object = ObjectDescriptor::from_parameters(params, index)?;
            info!(index, model_name = %object.model_name, function = object.motion.name(), "loaded object");
            Ok(object)
        })
        .collect()
}
