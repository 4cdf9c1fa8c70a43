pub mod common;
pub mod config;
pub mod control;
pub mod error;
pub mod lifecycle;
pub mod params;
pub mod trajectory;

pub use crate::config::ControllerConfig;
pub use crate::control::run_flag::RunFlag;
pub use crate::control::sink::{PoseSink, PoseUpdate, RecordingSink};
pub use crate::control::ObjectsController;
pub use crate::error::{ControllerError, ControllerResult, TrajectoryError};
pub use crate::params::{ParameterSource, ParameterTable};
