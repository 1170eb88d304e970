use std::fmt;

use auto_impl::auto_impl;

use crate::error::Error;

/// Deflection beyond which an axis counts as pushed. The comparison is strict.
pub const DEAD_ZONE: f64 = 0.5;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Negative,
    Positive,
}

impl Direction {
    /// Returns `None` while `value` is inside `[-DEAD_ZONE, DEAD_ZONE]`.
    pub fn from_deflection(value: f64) -> Option<Self> {
        if value > DEAD_ZONE {
            Some(Self::Positive)
        } else if value < -DEAD_ZONE {
            Some(Self::Negative)
        } else {
            None
        }
    }

    pub fn signum(self) -> i8 {
        match self {
            Self::Negative => -1,
            Self::Positive => 1,
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.signum())
    }
}

/// Moves one axis of the arm.
#[auto_impl(&, Box, Arc)]
pub trait MoveArm: Send + Sync {
    fn move_arm(&self, axis: u32, direction: Direction) -> Result<(), Error>;
}
