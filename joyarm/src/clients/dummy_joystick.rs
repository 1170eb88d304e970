use std::{
    collections::VecDeque,
    sync::{
        atomic::{AtomicUsize, Ordering},
        Arc,
    },
};

use crate::{
    error::Error,
    traits::{AxisEvent, InputSubsystem, Joystick, JoystickEvent},
};

/// Shared view of how a [`DummyJoystick`] has been used.
#[derive(Debug, Clone, Default)]
pub struct DummyCounters {
    reads: Arc<AtomicUsize>,
    releases: Arc<AtomicUsize>,
}

impl DummyCounters {
    pub fn reads(&self) -> usize {
        self.reads.load(Ordering::Relaxed)
    }

    pub fn releases(&self) -> usize {
        self.releases.load(Ordering::Relaxed)
    }
}

/// Dummy Joystick for debug or tests.
///
/// Returns the given events in order. Once they run out, `wait_event` fails
/// with [`Error::Disconnected`].
#[derive(Debug)]
pub struct DummyJoystick {
    events: VecDeque<JoystickEvent>,
    num_axes: Option<usize>,
    counters: DummyCounters,
}

impl DummyJoystick {
    /// Creates a new `DummyJoystick` which returns the given events.
    pub fn new(events: Vec<JoystickEvent>) -> Self {
        Self {
            events: events.into(),
            num_axes: None,
            counters: DummyCounters::default(),
        }
    }

    /// Creates a new `DummyJoystick` which sweeps every axis through
    /// `-1.0, 0.0, 1.0` and then quits.
    pub fn with_axis_sweep(num_axes: u32) -> Self {
        let mut events = vec![];
        for axis in 0..num_axes {
            for value in [-1.0, 0.0, 1.0] {
                events.push(JoystickEvent::AxisMotion(AxisEvent::new(axis, value)));
            }
        }
        events.push(JoystickEvent::Quit);
        Self::new(events).with_num_axes(num_axes as usize)
    }

    pub fn with_num_axes(mut self, num_axes: usize) -> Self {
        self.num_axes = Some(num_axes);
        self
    }

    pub fn counters(&self) -> DummyCounters {
        self.counters.clone()
    }

    pub fn remaining(&self) -> usize {
        self.events.len()
    }
}

impl Joystick for DummyJoystick {
    fn wait_event(&mut self) -> Result<JoystickEvent, Error> {
        self.counters.reads.fetch_add(1, Ordering::Relaxed);
        self.events.pop_front().ok_or_else(|| Error::Disconnected {
            message: "no more dummy events".to_owned(),
        })
    }

    fn release(&mut self) {
        self.counters.releases.fetch_add(1, Ordering::Relaxed);
    }

    fn num_axes(&self) -> Option<usize> {
        self.num_axes
    }
}

/// Dummy InputSubsystem for debug or tests.
///
/// Holds at most one joystick, reachable under index 0.
#[derive(Debug, Default)]
pub struct DummyInputSubsystem {
    joystick: Option<DummyJoystick>,
}

impl DummyInputSubsystem {
    pub fn new(joystick: DummyJoystick) -> Self {
        Self {
            joystick: Some(joystick),
        }
    }

    /// A subsystem without any device attached.
    pub fn empty() -> Self {
        Self::default()
    }
}

impl InputSubsystem for DummyInputSubsystem {
    type Joystick = DummyJoystick;

    fn open_joystick(&mut self, id: usize) -> Result<DummyJoystick, Error> {
        if id != 0 {
            return Err(Error::NoDevice { id });
        }
        self.joystick.take().ok_or(Error::NoDevice { id })
    }
}
