//! One activation worth of object motion

use rand::Rng;
use tracing::{debug, warn};

use super::objects::{self, ObjectDescriptor};
use super::sink::PoseSink;
use crate::common::types::Position;
use crate::error::ControllerResult;
use crate::params::ParameterSource;
use crate::trajectory::Trajectory;

/// Objects with their precomputed trajectories and the playback position
#[derive(Debug, Clone)]
pub struct MotionSession {
    objects: Vec<ObjectDescriptor>,
    trajectories: Vec<Trajectory>,
    sample: usize,
}

impl MotionSession {
    /// Read the object set and sample a fresh trajectory for each object
    pub fn from_parameters<R: Rng>(
        params: &dyn ParameterSource,
        sampling_rate: f64,
        rng: &mut R,
    ) -> ControllerResult<Self> {
        let objects = objects::load_objects(params)?;
        MotionSession::new(objects, sampling_rate, rng)
    }

    pub fn new<R: Rng>(
        objects: Vec<ObjectDescriptor>,
        sampling_rate: f64,
        rng: &mut R,
    ) -> ControllerResult<Self> {
        let trajectories = objects
            .iter()
            .enumerate()
            .map(|(index, object)| {
                let trajectory = object.trajectory(index, sampling_rate, rng)?;
                debug!(
                    model_name = %object.model_name,
                    samples = trajectory.len(),
                    "generated trajectory"
                );
                Ok(trajectory)
            })
            .collect::<ControllerResult<Vec<_>>>()?;

        Ok(MotionSession {
            objects,
            trajectories,
            sample: 0,
        })
    }

    pub fn objects(&self) -> &[ObjectDescriptor] {
        &self.objects
    }

    pub fn trajectories(&self) -> &[Trajectory] {
        &self.trajectories
    }

    /// Index of the next sample to publish
    pub fn sample_index(&self) -> usize {
        self.sample
    }

    /// Publish the current sample of every object and advance.
    ///
    /// Each object wraps around its own trajectory length.
    pub fn step(&mut self, sink: &dyn PoseSink) {
        for (object, trajectory) in self.objects.iter().zip(&self.trajectories) {
            if let Some(position) = trajectory.sample(self.sample) {
                publish(sink, &object.model_name, position);
            }
        }
        self.sample = self.sample.wrapping_add(1);
    }

    /// Publish every object once at its parked location: `(index, 0, height)`
    pub fn park(&self, sink: &dyn PoseSink, height: f64) {
        for (index, object) in self.objects.iter().enumerate() {
            publish(sink, &object.model_name, park_position(index, height));
        }
    }
}

pub fn park_position(index: usize, height: f64) -> Position {
    Position::new(index as f64, 0.0, height)
}

fn publish(sink: &dyn PoseSink, model_name: &str, position: Position) {
    if let Err(e) = sink.publish(model_name, position) {
        warn!(model_name, error = %e, "failed to publish object pose");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::control::sink::RecordingSink;
    use crate::params::ParameterTable;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn params() -> ParameterTable {
        ParameterTable::new()
            .with("n_objects", 2_i64)
            .with("object_0_model_name", "box")
            .with("object_0_function", "triangle_wave")
            .with("object_0_x", 0.0)
            .with("object_0_y", 0.0)
            .with("object_0_z_amplitude", 0.5)
            .with("object_0_z_frequency", 25.0)
            .with("object_0_z_offset", 1.0)
            .with("object_1_model_name", "cylinder")
            .with("object_1_function", "triangle_wave")
            .with("object_1_x", 1.0)
            .with("object_1_y", 2.0)
            .with("object_1_z_amplitude", 0.5)
            .with("object_1_z_frequency", 50.0)
            .with("object_1_z_offset", 1.0)
    }

    #[test]
    fn step_publishes_every_object_in_order() {
        let mut rng = StdRng::seed_from_u64(0);
        let mut session = MotionSession::from_parameters(&params(), 100.0, &mut rng).unwrap();
        let sink = RecordingSink::new();

        session.step(&sink);

        let updates = sink.updates();
        assert_eq!(updates.len(), 2);
        assert_eq!(updates[0].model_name, "box");
        assert_eq!(updates[1].model_name, "cylinder");
        assert_eq!(updates[1].position, Position::new(1.0, 2.0, 0.5));
        assert_eq!(session.sample_index(), 1);
    }

    #[test]
    fn each_object_wraps_around_its_own_length() {
        let mut rng = StdRng::seed_from_u64(0);
        let mut session = MotionSession::from_parameters(&params(), 100.0, &mut rng).unwrap();
        assert_eq!(session.trajectories()[0].len(), 4);
        assert_eq!(session.trajectories()[1].len(), 2);

        let sink = RecordingSink::new();
        for _ in 0..5 {
            session.step(&sink);
        }

        let updates = sink.updates();
        let box_z: Vec<f64> = updates
            .iter()
            .filter(|u| u.model_name == "box")
            .map(|u| u.position.z)
            .collect();
        let cylinder_z: Vec<f64> = updates
            .iter()
            .filter(|u| u.model_name == "cylinder")
            .map(|u| u.position.z)
            .collect();

        assert_eq!(box_z.len(), 5);
        assert!((box_z[4] - box_z[0]).abs() < 1e-12);
        assert!((cylinder_z[2] - cylinder_z[0]).abs() < 1e-12);
        assert!((cylinder_z[3] - cylinder_z[1]).abs() < 1e-12);
    }

    #[test]
    fn park_lines_objects_up_in_the_air() {
        let mut rng = StdRng::seed_from_u64(0);
        let session = MotionSession::from_parameters(&params(), 100.0, &mut rng).unwrap();
        let sink = RecordingSink::new();

        session.park(&sink, 3.0);

        let updates = sink.updates();
        assert_eq!(updates.len(), 2);
        assert_eq!(updates[0].position, Position::new(0.0, 0.0, 3.0));
        assert_eq!(updates[1].position, Position::new(1.0, 0.0, 3.0));
    }

    #[test]
    fn one_bad_object_fails_the_whole_session() {
        let mut params = params();
        params.set("object_1_z_frequency", 0.0);
        let mut rng = StdRng::seed_from_u64(0);

        assert!(MotionSession::from_parameters(&params, 100.0, &mut rng).is_err());
    }
}
