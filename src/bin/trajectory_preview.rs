use objects_controller::control::session::MotionSession;
use objects_controller::lifecycle::LifecycleNode;
use objects_controller::{ControllerConfig, ObjectsController, ParameterTable, RecordingSink, RunFlag};
use std::sync::Arc;

fn main() {
    println!("Initializing Objects Controller preview...");

    let params = ParameterTable::new()
        .with("n_objects", 2_i64)
        .with("n_sampling_points", 400_i64)
        .with("object_0_model_name", "box_100mm")
        .with("object_0_function", "triangle_wave")
        .with("object_0_x", 0.0)
        .with("object_0_y", -0.6)
        .with("object_0_z_amplitude", 0.3)
        .with("object_0_z_frequency", 0.5)
        .with("object_0_z_offset", 0.8)
        .with("object_1_model_name", "sphere_50mm")
        .with("object_1_function", "3d_spline")
        .with("object_1_x_min", -0.4)
        .with("object_1_x_max", 0.4)
        .with("object_1_y_min", -0.8)
        .with("object_1_y_max", -0.3)
        .with("object_1_z_min", 0.2)
        .with("object_1_z_max", 1.0)
        .with("object_1_n_points", 10_i64);

    let config = ControllerConfig::default();

    // Trajectories as the controller would generate them on activation
    let mut rng = rand::thread_rng();
    let session = match MotionSession::from_parameters(&params, config.update_rate, &mut rng) {
        Ok(session) => session,
        Err(e) => {
            println!("Failed to generate trajectories: {}", e);
            return;
        }
    };

    for (object, trajectory) in session.objects().iter().zip(session.trajectories()) {
        println!(
            "{} ({}): {} samples, first {:?}, last {:?}",
            object.model_name,
            object.motion.name(),
            trajectory.len(),
            trajectory.first().map(|p| (p.x, p.y, p.z)),
            trajectory.last().map(|p| (p.x, p.y, p.z)),
        );
    }

    // Drive a few updates through a recording sink
    let sink = Arc::new(RecordingSink::new());
    let mut controller =
        ObjectsController::new(config, Arc::new(params), sink.clone(), RunFlag::new());

    if let Err(e) = controller.on_activate() {
        println!("Failed to activate controller: {}", e);
        return;
    }
    for _ in 0..5 {
        controller.step();
    }
    if let Err(e) = controller.on_deactivate() {
        println!("Failed to deactivate controller: {}", e);
        return;
    }

    for update in sink.updates() {
        println!(
            "{} -> ({:.3}, {:.3}, {:.3})",
            update.model_name, update.position.x, update.position.y, update.position.z
        );
    }
}
