use std::sync::{Mutex, PoisonError};

use tracing::debug;

use crate::{
    error::Error,
    traits::{Direction, MoveArm},
};

/// Arm that records every `move_arm` call, for debug or tests.
#[derive(Debug, Default)]
pub struct RecordingArm {
    calls: Mutex<Vec<(u32, Direction)>>,
}

impl RecordingArm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn calls(&self) -> Vec<(u32, Direction)> {
        self.calls
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

impl MoveArm for RecordingArm {
    fn move_arm(&self, axis: u32, direction: Direction) -> Result<(), Error> {
        debug!(axis, %direction, "record move_arm");
        self.calls
            .lock()
            .map_err(|e| anyhow::anyhow!("recording arm is poisoned: {e}"))?
            .push((axis, direction));
        Ok(())
    }
}
