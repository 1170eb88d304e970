use std::io::{self, Write};

use tracing::{debug, info};

use crate::{
    axis_map::AxisRouter,
    error::Error,
    traits::{AxisEvent, Direction, InputSubsystem, Joystick, JoystickEvent, MoveArm},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopState {
    Running,
    Stopped,
}

/// Owns a joystick for the duration of an event loop and releases it exactly
/// once when dropped, including while unwinding.
#[derive(Debug)]
pub struct JoystickSession<J>
where
    J: Joystick,
{
    joystick: J,
    released: bool,
}

impl<J> JoystickSession<J>
where
    J: Joystick,
{
    pub fn new(joystick: J) -> Self {
        Self {
            joystick,
            released: false,
        }
    }
}

impl<J> Joystick for JoystickSession<J>
where
    J: Joystick,
{
    fn wait_event(&mut self) -> Result<JoystickEvent, Error> {
        self.joystick.wait_event()
    }

    fn release(&mut self) {
        if !self.released {
            self.released = true;
            debug!("releasing joystick");
            self.joystick.release();
        }
    }

    fn num_axes(&self) -> Option<usize> {
        self.joystick.num_axes()
    }
}

impl<J> Drop for JoystickSession<J>
where
    J: Joystick,
{
    fn drop(&mut self) {
        self.release();
    }
}

/// Turns joystick events into arm movements.
///
/// Every axis-motion event is echoed to `out` as `"<axis> : <value>"`.
#[derive(Debug)]
pub struct Dispatcher<A, W = io::Stdout>
where
    A: MoveArm,
    W: Write,
{
    arm: A,
    out: W,
    router: AxisRouter,
}

impl<A> Dispatcher<A>
where
    A: MoveArm,
{
    pub fn new(arm: A) -> Self {
        Self::with_writer(arm, io::stdout())
    }
}

impl<A, W> Dispatcher<A, W>
where
    A: MoveArm,
    W: Write,
{
    pub fn with_writer(arm: A, out: W) -> Self {
        Self {
            arm,
            out,
            router: AxisRouter::default(),
        }
    }

    pub fn with_axis_router(mut self, router: AxisRouter) -> Self {
        self.router = router;
        self
    }

    pub fn arm(&self) -> &A {
        &self.arm
    }

    pub fn into_writer(self) -> W {
        self.out
    }

    /// Runs the event loop until a quit event arrives.
    ///
    /// The joystick is released on every exit path before this returns.
    pub fn run<J>(&mut self, joystick: J) -> Result<(), Error>
    where
        J: Joystick,
    {
        let mut session = JoystickSession::new(joystick);
        if let Some(num_axes) = session.num_axes() {
            self.router.warn_unavailable_axes(num_axes);
        }
        info!("entering event loop");
        let mut state = LoopState::Running;
        while state == LoopState::Running {
            debug!("eventloop");
            state = self.step(&mut session)?;
        }
        info!("event loop stopped");
        Ok(())
    }

    /// Blocks for one event and handles it.
    pub fn step<J>(&mut self, joystick: &mut J) -> Result<LoopState, Error>
    where
        J: Joystick,
    {
        let event = joystick.wait_event()?;
        self.handle_event(event)
    }

    pub fn handle_event(&mut self, event: JoystickEvent) -> Result<LoopState, Error> {
        match event {
            JoystickEvent::Quit => {
                debug!("quit event");
                Ok(LoopState::Stopped)
            }
            JoystickEvent::AxisMotion(event) => {
                self.handle_axis(event)?;
                Ok(LoopState::Running)
            }
            _ => Ok(LoopState::Running),
        }
    }

    fn handle_axis(&mut self, event: AxisEvent) -> Result<(), Error> {
        writeln!(self.out, "{} : {:.6}", event.axis, event.value)?;
        for routed in self.router.route(event) {
            if let Some(direction) = Direction::from_deflection(routed.value) {
                self.arm.move_arm(routed.axis, direction)?;
            }
        }
        Ok(())
    }
}

/// Opens joystick `device_id` from `subsystem` and dispatches its events until
/// a quit event arrives.
///
/// If the device cannot be acquired the error is returned before any event
/// is read.
pub fn run<S, A, W>(
    subsystem: &mut S,
    device_id: usize,
    dispatcher: &mut Dispatcher<A, W>,
) -> Result<(), Error>
where
    S: InputSubsystem,
    A: MoveArm,
    W: Write,
{
    info!("Setting up joystick {device_id}");
    let joystick = subsystem.open_joystick(device_id)?;
    dispatcher.run(joystick)
}
