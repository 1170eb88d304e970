pub mod joystick;
mod move_arm;

pub use joystick::{AxisEvent, InputSubsystem, Joystick, JoystickEvent};
pub use move_arm::*;
