//! Control module: moves the simulated objects while the run flag is set
pub mod objects;
pub mod rate;
pub mod run_flag;
pub mod session;
pub mod sink;

use std::sync::Arc;

use tracing::info;

use self::rate::Rate;
use self::run_flag::RunFlag;
use self::session::MotionSession;
use self::sink::PoseSink;
use crate::config::ControllerConfig;
use crate::error::ControllerResult;
use crate::lifecycle::{LifecycleNode, LifecycleNodeBase, State};
use crate::params::ParameterSource;

/// Publish loop for the simulated objects
pub struct ObjectsController {
    base: LifecycleNodeBase,
    config: ControllerConfig,
    params: Arc<dyn ParameterSource>,
    sink: Arc<dyn PoseSink>,
    run_flag: RunFlag,
    session: Option<MotionSession>,
}

impl ObjectsController {
    /// Create a new controller, initially stopped
    pub fn new(
        config: ControllerConfig,
        params: Arc<dyn ParameterSource>,
        sink: Arc<dyn PoseSink>,
        run_flag: RunFlag,
    ) -> Self {
        ObjectsController {
            base: LifecycleNodeBase::new("objects_controller"),
            config,
            params,
            sink,
            run_flag,
            session: None,
        }
    }

    pub fn config(&self) -> &ControllerConfig {
        &self.config
    }

    pub fn run_flag(&self) -> &RunFlag {
        &self.run_flag
    }

    /// Session of the current (or last) activation
    pub fn session(&self) -> Option<&MotionSession> {
        self.session.as_ref()
    }

    /// Poll the run flag once per update period until `ok` returns false.
    ///
    /// Returns the first configuration error; the caller is expected to
    /// terminate.
    pub fn run(&mut self, ok: impl Fn() -> bool) -> ControllerResult<()> {
        let mut rate = Rate::new(self.config.update_rate)?;
        while ok() {
            if self.run_flag.is_set() {
                self.run_once(&mut rate, &ok)?;
            } else {
                rate.sleep();
            }
        }
        Ok(())
    }

    /// One activation: load objects, play their trajectories while the
    /// flag stays set, then park them.
    pub fn run_once(&mut self, rate: &mut Rate, ok: &impl Fn() -> bool) -> ControllerResult<()> {
        self.on_activate()?;

        while self.run_flag.is_set() && ok() {
            self.step();
            rate.sleep();
        }

        self.on_deactivate()?;
        rate.sleep();
        Ok(())
    }

    /// Publish the next sample of every object
    pub fn step(&mut self) {
        if let Some(session) = self.session.as_mut() {
            session.step(self.sink.as_ref());
        }
    }
}

impl LifecycleNode for ObjectsController {
    fn on_activate(&mut self) -> ControllerResult<()> {
        info!(node = %self.base.name, "Moving objects");
        let mut rng = rand::thread_rng();
        let session =
            MotionSession::from_parameters(self.params.as_ref(), self.config.update_rate, &mut rng)?;
        self.session = Some(session);
        self.base.set_state(State::Running);
        Ok(())
    }

    fn on_deactivate(&mut self) -> ControllerResult<()> {
        if let Some(session) = &self.session {
            info!(
                node = %self.base.name,
                objects = session.objects().len(),
                height = self.config.park_height,
                "Parking objects"
            );
            session.park(self.sink.as_ref(), self.config.park_height);
        }
        self.base.set_state(State::Stopped);
        Ok(())
    }

    fn state(&self) -> State {
        self.base.get_state()
    }
}
