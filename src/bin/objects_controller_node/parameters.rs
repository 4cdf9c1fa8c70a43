//! ROS 2 node parameters as a [`ParameterSource`]

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use objects_controller::params::ParameterValue;
use objects_controller::ParameterSource;
use rclrs::{Node, OptionalParameter};
use tracing::{debug, warn};

enum Declared {
    Double(OptionalParameter<f64>),
    Integer(OptionalParameter<i64>),
    Text(OptionalParameter<Arc<str>>),
}

/// Declares each parameter as optional the first time it is read and keeps
/// the handle, so later reads see values changed at runtime.
pub struct RosParameters {
    node: Arc<Node>,
    declared: Mutex<HashMap<String, Declared>>,
}

impl RosParameters {
    pub fn new(node: Arc<Node>) -> Self {
        RosParameters {
            node,
            declared: Mutex::new(HashMap::new()),
        }
    }

    /// Declare `name` with the first type its override accepts.
    fn declare(&self, name: &str) -> Option<()> {
        let mut declared = self.declared.lock().ok()?;
        if declared.contains_key(name) {
            return Some(());
        }

        for kind in [Kind::Double, Kind::Integer, Kind::Text] {
            let handle = match kind {
                Kind::Double => self
                    .node
                    .declare_parameter::<f64>(name)
                    .optional()
                    .map(Declared::Double)
                    .map_err(|e| format!("{:?}", e)),
                Kind::Integer => self
                    .node
                    .declare_parameter::<i64>(name)
                    .optional()
                    .map(Declared::Integer)
                    .map_err(|e| format!("{:?}", e)),
                Kind::Text => self
                    .node
                    .declare_parameter::<Arc<str>>(name)
                    .optional()
                    .map(Declared::Text)
                    .map_err(|e| format!("{:?}", e)),
            };
            match handle {
                Ok(handle) => {
                    declared.insert(name.to_string(), handle);
                    return Some(());
                }
                Err(e) => debug!(name, error = %e, "could not declare parameter"),
            }
        }
        warn!(name, "parameter has an unsupported type");
        None
    }
}

#[derive(Clone, Copy)]
enum Kind {
    Double,
    Integer,
    Text,
}

impl ParameterSource for RosParameters {
    fn get(&self, name: &str) -> Option<ParameterValue> {
        self.declare(name)?;
        let declared = self.declared.lock().ok()?;
        match declared.get(name)? {
            Declared::Double(p) => p.get().map(ParameterValue::Double),
            Declared::Integer(p) => p.get().map(ParameterValue::Integer),
            Declared::Text(p) => p.get().map(|v| ParameterValue::String(v.to_string())),
        }
    }
}
