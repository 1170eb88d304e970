use auto_impl::auto_impl;

use crate::error::Error;

/// Deflection of one joystick axis.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AxisEvent {
    /// Index of the physical axis that moved.
    pub axis: u32,
    /// Normalized deflection in `[-1.0, 1.0]`.
    pub value: f64,
}

impl AxisEvent {
    pub fn new(axis: u32, value: f64) -> Self {
        Self { axis, value }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum JoystickEvent {
    AxisMotion(AxisEvent),
    ButtonPressed(u32),
    ButtonReleased(u32),
    /// The loop should terminate.
    Quit,
    Other,
}

/// An opened joystick device.
///
/// The handle is owned by exactly one event loop. [`Joystick::wait_event`]
/// blocks until the next event arrives, with no timeout.
#[auto_impl(&mut, Box)]
pub trait Joystick {
    fn wait_event(&mut self) -> Result<JoystickEvent, Error>;

    /// Releases the device. Implementations must tolerate being called more
    /// than once, but [`JoystickSession`](crate::JoystickSession) only calls it once.
    fn release(&mut self);

    /// Number of axes the device reports, if known.
    fn num_axes(&self) -> Option<usize> {
        None
    }
}

/// Source of joystick handles, looked up by device index.
pub trait InputSubsystem {
    type Joystick: Joystick;

    fn open_joystick(&mut self, id: usize) -> Result<Self::Joystick, Error>;
}
