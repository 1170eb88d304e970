#![doc = include_str!("../README.md")]

use std::{
    sync::{
        atomic::{AtomicBool, Ordering},
        Arc,
    },
    thread::JoinHandle,
    time::Duration,
};

use joyarm::{AxisEvent, Error, InputSubsystem, Joystick, JoystickEvent};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use tracing::{debug, error, info, warn};

/// How long the reader thread blocks on gilrs before checking whether the
/// joystick was released.
const READER_WAKE_INTERVAL: Duration = Duration::from_millis(100);

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, JsonSchema)]
#[serde(deny_unknown_fields)]
pub struct AxisEntry {
    #[schemars(with = "String")]
    pub axis: gilrs::Axis,
    /// Axis index reported to the dispatcher.
    pub index: u32,
    /// Multiplied into every value read from this axis.
    #[serde(default = "default_scale")]
    pub scale: f64,
}

fn default_scale() -> f64 {
    1.0
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, JsonSchema)]
#[serde(deny_unknown_fields)]
pub struct Map {
    #[serde(default = "default_axes")]
    axes: Vec<AxisEntry>,
}

impl Map {
    pub fn new() -> Self {
        Self {
            axes: default_axes(),
        }
    }

    pub fn with_axes(axes: Vec<AxisEntry>) -> Self {
        Self { axes }
    }

    fn entry(&self, a: gilrs::Axis) -> Option<&AxisEntry> {
        self.axes.iter().find(|e| e.axis == a)
    }

    fn convert_axis(&self, a: gilrs::Axis, v: f32) -> Option<AxisEvent> {
        if let Some(e) = self.entry(a) {
            debug!("convert_axis {:?} -> {}", a, e.index);
            Some(AxisEvent::new(e.index, v as f64 * e.scale))
        } else {
            debug!("unknown map {:?}", a);
            None
        }
    }

    fn convert_event(&self, e: gilrs::EventType) -> Option<JoystickEvent> {
        match e {
            gilrs::EventType::ButtonPressed(_b, c) => {
                Some(JoystickEvent::ButtonPressed(c.into_u32()))
            }
            gilrs::EventType::ButtonReleased(_b, c) => {
                Some(JoystickEvent::ButtonReleased(c.into_u32()))
            }
            gilrs::EventType::AxisChanged(a, v, _c) => {
                self.convert_axis(a, v).map(JoystickEvent::AxisMotion)
            }
            gilrs::EventType::Disconnected => {
                warn!("joystick disconnected");
                None
            }
            _ => None,
        }
    }

    /// One past the highest index of the mapped axes the gamepad provides.
    fn num_axes(&self, gamepad: &gilrs::Gamepad<'_>) -> usize {
        self.axes
            .iter()
            .filter(|e| gamepad.axis_code(e.axis).is_some())
            .map(|e| e.index as usize + 1)
            .max()
            .unwrap_or(0)
    }
}

impl Default for Map {
    fn default() -> Self {
        Self::new()
    }
}

fn default_axes() -> Vec<AxisEntry> {
    let axis = |axis, index, scale| AxisEntry { axis, index, scale };
    // gilrs reports up as positive; flip the Y sticks so down is positive.
    vec![
        axis(gilrs::Axis::LeftStickX, 0, 1.0),
        axis(gilrs::Axis::LeftStickY, 1, -1.0),
        axis(gilrs::Axis::LeftZ, 2, 1.0),
        axis(gilrs::Axis::RightStickX, 3, 1.0),
        axis(gilrs::Axis::RightStickY, 4, -1.0),
        axis(gilrs::Axis::RightZ, 5, 1.0),
        axis(gilrs::Axis::DPadX, 6, 1.0),
        axis(gilrs::Axis::DPadY, 7, -1.0),
    ]
}

#[derive(Debug, Serialize, Deserialize, Clone, Default, JsonSchema)]
#[serde(deny_unknown_fields)]
pub struct GilJoystickConfig {
    #[serde(default)]
    pub device_id: usize,
    #[serde(default)]
    pub map: Map,
}

/// Pushes a [`JoystickEvent::Quit`] into the joystick's event queue.
#[derive(Debug, Clone)]
pub struct QuitSender(flume::Sender<JoystickEvent>);

impl QuitSender {
    pub fn new(tx: flume::Sender<JoystickEvent>) -> Self {
        Self(tx)
    }

    /// Returns `false` if nobody is listening anymore.
    pub fn quit(&self) -> bool {
        self.0.send(JoystickEvent::Quit).is_ok()
    }
}

/// Opens gilrs joysticks by index.
///
/// All joysticks opened from one subsystem share its event queue, which is
/// also the queue [`QuitSender`] writes to.
#[derive(Debug)]
pub struct GilrsSubsystem {
    map: Map,
    tx: flume::Sender<JoystickEvent>,
    rx: flume::Receiver<JoystickEvent>,
}

impl GilrsSubsystem {
    pub fn new(map: Map) -> Self {
        let (tx, rx) = flume::unbounded();
        Self { map, tx, rx }
    }

    pub fn new_from_config(config: GilJoystickConfig) -> Self {
        Self::new(config.map)
    }

    pub fn quit_sender(&self) -> QuitSender {
        QuitSender(self.tx.clone())
    }
}

impl Default for GilrsSubsystem {
    fn default() -> Self {
        Self::new(Map::default())
    }
}

impl InputSubsystem for GilrsSubsystem {
    type Joystick = GilJoystick;

    fn open_joystick(&mut self, id: usize) -> Result<GilJoystick, Error> {
        GilJoystick::open(id, self.map.clone(), self.tx.clone(), self.rx.clone())
    }
}

#[derive(Debug)]
pub struct GilJoystick {
    rx: flume::Receiver<JoystickEvent>,
    handle: Option<JoinHandle<()>>,
    is_running: Arc<AtomicBool>,
    num_axes: usize,
}

impl GilJoystick {
    fn open(
        id: usize,
        map: Map,
        tx: flume::Sender<JoystickEvent>,
        rx: flume::Receiver<JoystickEvent>,
    ) -> Result<Self, Error> {
        let (ready_tx, ready_rx) = flume::bounded(1);
        let is_running = Arc::new(AtomicBool::new(true));
        let is_running_cloned = is_running.clone();
        // gilrs::Gilrs is not Send, so it lives on the reader thread.
        let handle = std::thread::spawn(move || {
            let mut gil = match gilrs::Gilrs::new() {
                Ok(gil) => gil,
                Err(e) => {
                    let _ = ready_tx.send(Err(Error::DeviceAcquisition {
                        message: e.to_string(),
                    }));
                    return;
                }
            };
            let mut num_axes = None;
            for (connected_id, gamepad) in gil.gamepads() {
                info!("{} is {:?}", gamepad.name(), gamepad.power_info());
                if id == usize::from(connected_id) {
                    num_axes = Some(map.num_axes(&gamepad));
                }
            }
            match num_axes {
                Some(n) => {
                    let _ = ready_tx.send(Ok(n));
                }
                None => {
                    let _ = ready_tx.send(Err(Error::NoDevice { id }));
                    return;
                }
            }
            while is_running_cloned.load(Ordering::Relaxed) {
                let Some(gilrs::Event {
                    id: recv_id, event, ..
                }) = gil.next_event_blocking(Some(READER_WAKE_INTERVAL))
                else {
                    continue;
                };
                if id != usize::from(recv_id) {
                    continue;
                }
                if let Some(e) = map.convert_event(event) {
                    if tx.send(e).is_err() {
                        break;
                    }
                }
            }
            debug!("gilrs reader thread stopped");
        });

        let ready = ready_rx.recv().map_err(|e| Error::DeviceAcquisition {
            message: format!("gilrs reader thread exited: {e}"),
        });
        match ready.and_then(|r| r) {
            Ok(num_axes) => {
                info!("Opened joystick id={id} with {num_axes} axes");
                Ok(Self {
                    rx,
                    handle: Some(handle),
                    is_running,
                    num_axes,
                })
            }
            Err(e) => {
                if handle.join().is_err() {
                    error!("gilrs reader thread panicked");
                }
                Err(e)
            }
        }
    }
}

impl Joystick for GilJoystick {
    fn wait_event(&mut self) -> Result<JoystickEvent, Error> {
        self.rx.recv().map_err(|e| Error::Disconnected {
            message: e.to_string(),
        })
    }

    fn release(&mut self) {
        self.is_running.store(false, Ordering::Relaxed);
        if let Some(handle) = self.handle.take() {
            if handle.join().is_err() {
                error!("gilrs reader thread panicked");
            }
        }
    }

    fn num_axes(&self) -> Option<usize> {
        Some(self.num_axes)
    }
}

impl Drop for GilJoystick {
    fn drop(&mut self) {
        self.release();
    }
}
