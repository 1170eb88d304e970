use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::{error::Error, traits::AxisEvent};

/// Routes one joystick axis to one arm motor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(deny_unknown_fields)]
pub struct AxisMapping {
    /// Joystick axis index.
    pub in_axis: u32,
    /// Arm motor index passed to `move_arm`.
    pub out_axis: u32,
    /// Negates the deflection before the dead zone is applied.
    #[serde(default)]
    pub reversed: bool,
}

impl AxisMapping {
    pub fn new(in_axis: u32, out_axis: u32, reversed: bool) -> Self {
        Self {
            in_axis,
            out_axis,
            reversed,
        }
    }
}

/// Translates joystick axes into arm axes.
///
/// With no mappings every joystick axis is passed through unchanged. Once any
/// mapping is configured, axes without a mapping are dropped.
#[derive(Debug, Clone, Default)]
pub struct AxisRouter {
    mappings: Vec<AxisMapping>,
}

impl AxisRouter {
    pub fn new(mappings: Vec<AxisMapping>) -> Self {
        Self { mappings }
    }

    pub fn is_identity(&self) -> bool {
        self.mappings.is_empty()
    }

    pub fn route(&self, event: AxisEvent) -> Vec<AxisEvent> {
        if self.is_identity() {
            return vec![event];
        }
        self.mappings
            .iter()
            .filter(|m| m.in_axis == event.axis)
            .map(|m| {
                let value = if m.reversed { -event.value } else { event.value };
                debug!(
                    "axis {} -> {} value {}",
                    m.in_axis, m.out_axis, value
                );
                AxisEvent::new(m.out_axis, value)
            })
            .collect()
    }

    /// Fails if any mapping drives a motor the arm does not have.
    pub fn validate(&self, num_motors: usize) -> Result<(), Error> {
        for m in &self.mappings {
            if m.out_axis as usize >= num_motors {
                return Err(Error::MotorOutOfRange {
                    in_axis: m.in_axis,
                    out_axis: m.out_axis,
                    num_motors,
                });
            }
        }
        Ok(())
    }

    /// Warns about mappings that read axes the device does not have.
    pub fn warn_unavailable_axes(&self, num_axes: usize) {
        for m in &self.mappings {
            if m.in_axis as usize >= num_axes {
                warn!(
                    "Your joystick has {} axes, but controlling the robot needs at least {}",
                    num_axes,
                    m.in_axis + 1
                );
            }
        }
    }
}
