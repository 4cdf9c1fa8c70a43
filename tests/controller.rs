use objects_controller::common::types::Position;
use objects_controller::lifecycle::LifecycleNode;
use objects_controller::params::ParameterValue;
use objects_controller::{
    ControllerConfig, ControllerError, ObjectsController, ParameterSource, ParameterTable,
    PoseUpdate, RecordingSink, RunFlag,
};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};
use std::thread;
use std::time::{Duration, Instant};

fn wait_until(timeout: Duration, condition: impl Fn() -> bool) -> bool {
    let start = Instant::now();
    while start.elapsed() < timeout {
        if condition() {
            return true;
        }
        thread::sleep(Duration::from_millis(2));
    }
    condition()
}

fn two_objects() -> ParameterTable {
    ParameterTable::new()
        .with("n_objects", 2_i64)
        .with("n_sampling_points", 50_i64)
        .with("object_0_model_name", "box")
        .with("object_0_function", "triangle_wave")
        .with("object_0_x", 0.2)
        .with("object_0_y", 0.4)
        .with("object_0_z_amplitude", 0.5)
        .with("object_0_z_frequency", 1000.0)
        .with("object_0_z_offset", 1.0)
        .with("object_1_model_name", "sphere")
        .with("object_1_function", "3d_spline")
        .with("object_1_x_min", -1.0)
        .with("object_1_x_max", 1.0)
        .with("object_1_y_min", -1.0)
        .with("object_1_y_max", 1.0)
        .with("object_1_z_min", 0.5)
        .with("object_1_z_max", 1.5)
        .with("object_1_n_points", 6_i64)
}

fn fast_config() -> ControllerConfig {
    ControllerConfig {
        update_rate: 1000.0,
        ..ControllerConfig::default()
    }
}

#[test]
fn moves_while_flag_is_set_and_parks_on_stop() {
    let sink = Arc::new(RecordingSink::new());
    let run_flag = RunFlag::new();
    let alive = Arc::new(AtomicBool::new(true));

    let mut controller = ObjectsController::new(
        fast_config(),
        Arc::new(two_objects()),
        sink.clone(),
        run_flag.clone(),
    );
    let loop_alive = Arc::clone(&alive);
    let handle = thread::spawn(move || controller.run(|| loop_alive.load(Ordering::Acquire)));

    // nothing is published while stopped
    thread::sleep(Duration::from_millis(20));
    assert!(sink.is_empty());

    run_flag.set(true);
    // more than two full loops of the 50 sample spline
    assert!(wait_until(Duration::from_secs(5), || sink.len() >= 220));

    run_flag.set(false);
    let parked = |updates: &[PoseUpdate]| {
        updates.len() >= 2
            && updates[updates.len() - 2].position == Position::new(0.0, 0.0, 3.0)
            && updates[updates.len() - 1].position == Position::new(1.0, 0.0, 3.0)
    };
    assert!(wait_until(Duration::from_secs(5), || parked(&sink.updates())));

    alive.store(false, Ordering::Release);
    handle.join().unwrap().unwrap();

    let updates = sink.updates();
    let moving = &updates[..updates.len() - 2];
    assert_eq!(moving.len() % 2, 0);
    for pair in moving.chunks(2) {
        assert_eq!(pair[0].model_name, "box");
        assert_eq!(pair[1].model_name, "sphere");
        // the wave has a single sample per period: it sits at the bottom
        assert_eq!(pair[0].position, Position::new(0.2, 0.4, 0.5));
    }

    let sphere: Vec<Position> = moving
        .iter()
        .filter(|u| u.model_name == "sphere")
        .map(|u| u.position)
        .collect();
    for p in &sphere {
        assert!(p.x.is_finite() && p.y.is_finite() && p.z.is_finite());
    }
    // 50 samples per loop, wrapped modulo the trajectory length
    assert!(sphere.len() > 100);
    assert_eq!(sphere[50], sphere[0]);
    assert_eq!(sphere[100], sphere[0]);
    assert_eq!(sphere[51], sphere[1]);
}

#[test]
fn missing_parameters_stop_the_loop() {
    let sink = Arc::new(RecordingSink::new());
    let run_flag = RunFlag::new();
    run_flag.set(true);

    let mut params = two_objects();
    params.remove("object_1_n_points");

    let mut controller =
        ObjectsController::new(fast_config(), Arc::new(params), sink.clone(), run_flag);
    let result = controller.run(|| true);

    match result {
        Err(ControllerError::MissingParameter { name }) => assert_eq!(name, "object_1_n_points"),
        other => panic!("unexpected result: {:?}", other),
    }
    assert!(sink.is_empty());
}

/// Parameter set that can be edited while the controller holds it
struct SharedParameters(Mutex<ParameterTable>);

impl ParameterSource for SharedParameters {
    fn get(&self, name: &str) -> Option<ParameterValue> {
        self.0.lock().ok()?.get(name)
    }
}

#[test]
fn parameters_are_read_again_on_each_activation() {
    let sink = Arc::new(RecordingSink::new());
    let params = Arc::new(SharedParameters(Mutex::new(two_objects())));
    let mut controller =
        ObjectsController::new(fast_config(), params.clone(), sink.clone(), RunFlag::new());

    controller.on_activate().unwrap();
    assert_eq!(controller.session().unwrap().objects().len(), 2);
    controller.on_deactivate().unwrap();

    params.0.lock().unwrap().set("n_objects", 1_i64);

    controller.on_activate().unwrap();
    assert_eq!(controller.session().unwrap().objects().len(), 1);
    controller.on_deactivate().unwrap();

    // two parked objects, then one
    assert_eq!(sink.len(), 3);
}
