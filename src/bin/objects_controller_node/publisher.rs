//! Teleports simulator models through `gazebo_msgs/ModelState`

use std::sync::Arc;

use gazebo_msgs::msg::ModelState;
use geometry_msgs::msg::{Point, Pose, Quaternion};
use objects_controller::common::types::Position;
use objects_controller::PoseSink;

pub struct ModelStatePublisher {
    publisher: Arc<rclrs::Publisher<ModelState>>,
    reference_frame: String,
}

impl ModelStatePublisher {
    pub fn new(publisher: Arc<rclrs::Publisher<ModelState>>, reference_frame: &str) -> Self {
        ModelStatePublisher {
            publisher,
            reference_frame: reference_frame.to_string(),
        }
    }
}

impl PoseSink for ModelStatePublisher {
    fn publish(&self, model_name: &str, position: Position) -> anyhow::Result<()> {
        let mut state = ModelState::default();
        state.model_name = model_name.to_string();
        state.reference_frame = self.reference_frame.clone();
        state.pose = pose_at(position);

        self.publisher.publish(&state)?;
        Ok(())
    }
}

/// Pose at `position` with the identity orientation
fn pose_at(position: Position) -> Pose {
    Pose {
        position: Point {
            x: position.x,
            y: position.y,
            z: position.z,
        },
        orientation: Quaternion {
            x: 0.0,
            y: 0.0,
            z: 0.0,
            w: 1.0,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pose_keeps_position_and_identity_orientation() {
        let pose = pose_at(Position::new(1.5, -2.0, 3.0));
        assert_eq!(
            (pose.position.x, pose.position.y, pose.position.z),
            (1.5, -2.0, 3.0)
        );
        assert_eq!(pose.orientation.w, 1.0);
        assert_eq!(pose.orientation.x, 0.0);
    }
}
