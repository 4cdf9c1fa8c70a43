mod parameters;
mod publisher;

use anyhow::{Error, Result};
use objects_controller::{ControllerConfig, ObjectsController, RunFlag};
use rclrs::{Context, CreateBasicExecutor, Node, RclrsErrorFilter, SpinOptions, QOS_PROFILE_DEFAULT};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};
use std::thread;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use gazebo_msgs::msg::ModelState;
use std_msgs::msg::Bool;

use self::parameters::RosParameters;
use self::publisher::ModelStatePublisher;

struct ObjectsControllerNode {
    node: Arc<Node>,
    move_subscription: Mutex<Option<Arc<rclrs::Subscription<Bool>>>>,
    run_flag: RunFlag,
    alive: Arc<AtomicBool>,
}

impl ObjectsControllerNode {
    pub fn new(executor: &rclrs::Executor, name: &str) -> Result<Arc<Self>, Error> {
        let node = executor.create_node(name)?;

        let params = Arc::new(RosParameters::new(Arc::clone(&node)));
        let config = ControllerConfig::from_parameters(params.as_ref())?;
        info!(
            update_rate = config.update_rate,
            move_objects = %config.move_objects_topic,
            model_state = %config.model_state_topic,
            "Using parameters"
        );

        let model_state_publisher =
            node.create_publisher::<ModelState>(&config.model_state_topic, QOS_PROFILE_DEFAULT)?;
        let sink = Arc::new(ModelStatePublisher::new(
            model_state_publisher,
            &config.reference_frame,
        ));

        let run_flag = RunFlag::new();
        let alive = Arc::new(AtomicBool::new(true));

        let objects_controller_node = Arc::new(ObjectsControllerNode {
            node,
            move_subscription: None.into(),
            run_flag: run_flag.clone(),
            alive: Arc::clone(&alive),
        });

        // Start/stop signal, last value wins
        let listener_flag = run_flag.clone();
        let move_subscription = objects_controller_node.node.create_subscription::<Bool, _>(
            &config.move_objects_topic,
            QOS_PROFILE_DEFAULT,
            move |msg: Bool| {
                info!(move_objects = msg.data, "Received move signal");
                listener_flag.set(msg.data);
            },
        )?;
        if let Ok(mut slot) = objects_controller_node.move_subscription.lock() {
            *slot = Some(move_subscription);
        }

        // Publish loop runs beside the executor
        let mut controller = ObjectsController::new(config, params, sink, run_flag);
        thread::spawn(move || {
            let keep_running = || alive.load(Ordering::Acquire);
            if let Err(e) = controller.run(keep_running) {
                error!(error = %e, "Objects controller stopped");
                std::process::exit(1);
            }
        });

        Ok(objects_controller_node)
    }

    fn is_moving(&self) -> bool {
        self.run_flag.is_set()
    }
}

impl Drop for ObjectsControllerNode {
    fn drop(&mut self) {
        self.alive.store(false, Ordering::Release);
    }
}

fn main() -> Result<(), Error> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    info!("Initializing Objects Controller Node...");

    let mut executor = Context::default_from_env()?.create_basic_executor();

    let objects_controller_node = ObjectsControllerNode::new(&executor, "objects_controller")?;

    info!("Objects Controller Node initialized. Starting to spin...");
    info!("To use with parameters: ros2 run objects_controller objects_controller_node --ros-args --params-file /path/to/objects_controller/config/objects_controller.yaml");

    let result = executor
        .spin(SpinOptions::default())
        .first_error()
        .map_err(|err| err.into());

    if objects_controller_node.is_moving() {
        info!("Shutting down while objects are moving");
    }
    drop(objects_controller_node);
    result
}
