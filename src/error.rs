//! Error types for trajectory generation and the controller loop

use thiserror::Error;

/// Invalid inputs to one of the trajectory generators
#[derive(Error, Debug, Clone, PartialEq)]
pub enum TrajectoryError {
    #[error("frequency must be a positive finite number, got {0}")]
    InvalidFrequency(f64),

    #[error("sampling rate must be a positive finite number, got {0}")]
    InvalidSamplingRate(f64),

    #[error("frequency {frequency} Hz is above the sampling rate {sampling_rate} Hz")]
    EmptyPeriod { frequency: f64, sampling_rate: f64 },

    #[error("a closed spline needs at least {min} control points, got {got}")]
    TooFewControlPoints { min: usize, got: usize },

    #[error("{requested} samples requested, at most {max} are supported")]
    TooManySamples { requested: f64, max: usize },

    #[error("{got} control points requested, at most {max} are supported")]
    TooManyControlPoints { max: usize, got: usize },

    #[error("a spline needs at least one sampling point")]
    NoSamplingPoints,

    #[error("invalid {axis} bounds: [{min}, {max}] is not a finite, ordered range")]
    InvalidBounds { axis: char, min: f64, max: f64 },

    #[error("consecutive control points {index} and {next} coincide")]
    CoincidentControlPoints { index: usize, next: usize },

    #[error("spline system for the {axis} axis is singular")]
    SingularSystem { axis: char },
}

/// Errors raised while configuring or running the controller
#[derive(Error, Debug)]
pub enum ControllerError {
    #[error("missing parameter: {name}")]
    MissingParameter { name: String },

    #[error("invalid parameter {name}: {reason}")]
    InvalidParameter { name: String, reason: String },

    #[error("object {index}: unknown motion function {function:?}")]
    UnknownFunction { index: usize, function: String },

    #[error("object {index} ({model_name}): {source}")]
    Trajectory {
        index: usize,
        model_name: String,
        #[source]
        source: TrajectoryError,
    },

    #[error("invalid configuration: {0}")]
    Configuration(#[from] TrajectoryError),
}

pub type ControllerResult<T> = Result<T, ControllerError>;
