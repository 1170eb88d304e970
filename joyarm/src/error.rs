use thiserror::Error;

#[derive(Debug, Error)]
#[non_exhaustive]
pub enum Error {
    #[error("joyarm: No Joystick id={} is found.", id)]
    NoDevice { id: usize },
    #[error("joyarm: Failed to acquire joystick : {}", message)]
    DeviceAcquisition { message: String },
    #[error("joyarm: Event queue disconnected : {}", message)]
    Disconnected { message: String },
    #[error(
        "joyarm: Joystick axis {} is mapped to motor #{}, but the arm has {} motors",
        in_axis,
        out_axis,
        num_motors
    )]
    MotorOutOfRange {
        in_axis: u32,
        out_axis: u32,
        num_motors: usize,
    },
    #[error("joyarm: I/O: {}", .0)]
    Io(#[from] std::io::Error),
    #[error("joyarm: Other: {:?}", .0)]
    Other(#[from] anyhow::Error),
}
