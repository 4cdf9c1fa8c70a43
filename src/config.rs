//! Node level settings, read once at start-up

use crate::error::ControllerResult;
use crate::control::rate::period_of;
use crate::params::{self, ParameterSource};

/// Settings of the controller node itself
#[derive(Debug, Clone, PartialEq)]
pub struct ControllerConfig {
    /// Position update frequency (Hz), also the triangle wave sampling rate
    pub update_rate: f64,
    /// Height objects are parked at when stopped (m)
    pub park_height: f64,
    pub move_objects_topic: String,
    pub model_state_topic: String,
    pub reference_frame: String,
}

impl Default for ControllerConfig {
    fn default() -> Self {
        ControllerConfig {
            update_rate: 100.0,
            park_height: 3.0,
            move_objects_topic: "move_objects".to_string(),
            model_state_topic: "gazebo/set_model_state".to_string(),
            reference_frame: "world".to_string(),
        }
    }
}

impl ControllerConfig {
    /// Overlay the defaults with whatever `params` provides
    pub fn from_parameters(params: &dyn ParameterSource) -> ControllerResult<Self> {
        let defaults = ControllerConfig::default();
        let config = ControllerConfig {
            update_rate: params::f64_or(params, "update_rate", defaults.update_rate)?,
            park_height: params::f64_or(params, "park_height", defaults.park_height)?,
            move_objects_topic: params::string_or(
                params,
                "move_objects_topic",
                defaults.move_objects_topic,
            )?,
            model_state_topic: params::string_or(
                params,
                "model_state_topic",
                defaults.model_state_topic,
            )?,
            reference_frame: params::string_or(params, "reference_frame", defaults.reference_frame)?,
        };
        config.validate()?;
        Ok(config)
    }

    /// The update rate must be positive with a representable period
    pub fn validate(&self) -> ControllerResult<()> {
        period_of(self.update_rate)?;
        Ok(())
    }
}
