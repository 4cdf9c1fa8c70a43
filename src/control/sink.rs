//! Destinations for object pose updates

use std::sync::Mutex;

use crate::common::types::Position;

/// Receives pose updates for simulated objects
pub trait PoseSink: Send + Sync {
    /// Teleport `model_name` to `position`
    fn publish(&self, model_name: &str, position: Position) -> anyhow::Result<()>;
}

/// A single published pose update
#[derive(Debug, Clone, PartialEq)]
pub struct PoseUpdate {
    pub model_name: String,
    pub position: Position,
}

/// Keeps every update in memory
#[derive(Debug, Default)]
pub struct RecordingSink {
    updates: Mutex<Vec<PoseUpdate>>,
}

impl RecordingSink {
    pub fn new() -> Self {
        RecordingSink::default()
    }

    /// Copy of everything published so far
    pub fn updates(&self) -> Vec<PoseUpdate> {
        self.updates
            .lock()
            .map(|updates| updates.clone())
            .unwrap_or_default()
    }

    pub fn len(&self) -> usize {
        self.updates.lock().map(|updates| updates.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl PoseSink for RecordingSink {
    fn publish(&self, model_name: &str, position: Position) -> anyhow::Result<()> {
        let mut updates = self
            .updates
            .lock()
            .map_err(|_| anyhow::anyhow!("recording sink poisoned"))?;
        updates.push(PoseUpdate {
            model_name: model_name.to_string(),
            position,
        });
        Ok(())
    }
}
