use joyarm::{InputSubsystem, Joystick, JoystickEvent};
use joyarm_gilrs::{GilrsSubsystem, Map};

fn main() {
    tracing_subscriber::fmt::init();
    let mut subsystem = GilrsSubsystem::new(Map::default());
    let mut joystick = match subsystem.open_joystick(0) {
        Ok(joystick) => joystick,
        Err(e) => {
            eprintln!("{e}");
            return;
        }
    };
    println!("num_axes = {:?}", joystick.num_axes());
    loop {
        match joystick.wait_event() {
            Ok(JoystickEvent::Quit) | Err(_) => break,
            Ok(ev) => println!("Result = {ev:?}"),
        }
    }
    joystick.release();
}
