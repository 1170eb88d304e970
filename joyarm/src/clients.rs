mod dummy_joystick;
mod print_arm;
mod recording_arm;

pub use dummy_joystick::*;
pub use print_arm::*;
pub use recording_arm::*;
