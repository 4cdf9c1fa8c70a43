//! Lifecycle management for controller components

use crate::error::ControllerResult;

/// Trait for components that can be started and stopped repeatedly
pub trait LifecycleNode: Send {
    /// Move from [`State::Stopped`] to [`State::Running`]
    fn on_activate(&mut self) -> ControllerResult<()>;

    /// Move from [`State::Running`] back to [`State::Stopped`]
    fn on_deactivate(&mut self) -> ControllerResult<()>;

    /// Current state of the component
    fn state(&self) -> State;
}

/// Base implementation for lifecycle nodes
#[derive(Debug)]
pub struct LifecycleNodeBase {
    pub name: String,
    state: State,
}

/// State of a lifecycle node
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum State {
    Stopped,
    Running,
}

impl LifecycleNodeBase {
    /// Create a new lifecycle node base, initially stopped
    pub fn new(name: &str) -> Self {
        LifecycleNodeBase {
            name: name.to_string(),
            state: State::Stopped,
        }
    }

    /// Get the current state
    pub fn get_state(&self) -> State {
        self.state
    }

    /// Set the state
    pub fn set_state(&mut self, state: State) {
        self.state = state;
    }
}
