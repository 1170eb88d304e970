use std::panic::{self, AssertUnwindSafe};

use joyarm::{
    run, AxisEvent, AxisMapping, AxisRouter, Direction, Dispatcher, DummyInputSubsystem,
    DummyJoystick, Error, JoystickEvent, LoopState, MoveArm, PrintArm, RecordingArm,
};

fn axis(axis: u32, value: f64) -> JoystickEvent {
    JoystickEvent::AxisMotion(AxisEvent::new(axis, value))
}

fn dispatch(events: Vec<JoystickEvent>) -> (Vec<(u32, Direction)>, String, usize) {
    let mut joystick = DummyJoystick::new(events);
    let counters = joystick.counters();
    let arm = RecordingArm::new();
    let mut dispatcher = Dispatcher::with_writer(&arm, Vec::new());
    dispatcher.run(&mut joystick).unwrap();
    let out = String::from_utf8(dispatcher.into_writer()).unwrap();
    (arm.calls(), out, counters.releases())
}

#[test]
fn test_positive_deflection() {
    let (calls, out, releases) = dispatch(vec![axis(2, 0.73), JoystickEvent::Quit]);
    assert_eq!(out, "2 : 0.730000\n");
    assert_eq!(calls, vec![(2, Direction::Positive)]);
    assert_eq!(releases, 1);
}

#[test]
fn test_negative_deflection() {
    let (calls, out, _) = dispatch(vec![axis(0, -0.9), JoystickEvent::Quit]);
    assert_eq!(out, "0 : -0.900000\n");
    assert_eq!(calls, vec![(0, Direction::Negative)]);
}

#[test]
fn test_dead_zone() {
    let (calls, out, _) = dispatch(vec![
        axis(1, 0.1),
        axis(1, 0.5),
        axis(1, -0.5),
        axis(1, 0.0),
        JoystickEvent::Quit,
    ]);
    assert_eq!(
        out,
        "1 : 0.100000\n1 : 0.500000\n1 : -0.500000\n1 : 0.000000\n"
    );
    assert!(calls.is_empty());
}

#[test]
fn test_other_events_are_ignored() {
    let (calls, out, releases) = dispatch(vec![
        JoystickEvent::ButtonPressed(5),
        JoystickEvent::ButtonReleased(5),
        JoystickEvent::Other,
        JoystickEvent::Quit,
    ]);
    assert!(calls.is_empty());
    assert!(out.is_empty());
    assert_eq!(releases, 1);
}

#[test]
fn test_quit_stops_before_remaining_events() {
    let mut joystick = DummyJoystick::new(vec![
        axis(0, 1.0),
        JoystickEvent::Quit,
        axis(1, 1.0),
    ]);
    let counters = joystick.counters();
    let arm = RecordingArm::new();
    let mut dispatcher = Dispatcher::with_writer(&arm, Vec::new());
    dispatcher.run(&mut joystick).unwrap();
    assert_eq!(arm.calls(), vec![(0, Direction::Positive)]);
    assert_eq!(counters.reads(), 2);
    assert_eq!(counters.releases(), 1);
    assert_eq!(joystick.remaining(), 1);
}

#[test]
fn test_axis_sweep() {
    let joystick = DummyJoystick::with_axis_sweep(3);
    let arm = RecordingArm::new();
    let mut dispatcher = Dispatcher::with_writer(&arm, Vec::new());
    dispatcher.run(joystick).unwrap();
    assert_eq!(
        arm.calls(),
        vec![
            (0, Direction::Negative),
            (0, Direction::Positive),
            (1, Direction::Negative),
            (1, Direction::Positive),
            (2, Direction::Negative),
            (2, Direction::Positive),
        ]
    );
}

#[test]
fn test_step() {
    let mut joystick = DummyJoystick::new(vec![axis(3, 0.8), JoystickEvent::Quit]);
    let arm = RecordingArm::new();
    let mut dispatcher = Dispatcher::with_writer(&arm, Vec::new());
    assert_eq!(dispatcher.step(&mut joystick).unwrap(), LoopState::Running);
    assert_eq!(dispatcher.step(&mut joystick).unwrap(), LoopState::Stopped);
    assert_eq!(arm.calls(), vec![(3, Direction::Positive)]);
}

#[test]
fn test_run_with_subsystem() {
    let joystick = DummyJoystick::new(vec![axis(2, 0.73), JoystickEvent::Quit]);
    let counters = joystick.counters();
    let mut subsystem = DummyInputSubsystem::new(joystick);
    let arm = PrintArm::with_writer(Vec::new());
    let mut dispatcher = Dispatcher::with_writer(&arm, Vec::new());
    run(&mut subsystem, 0, &mut dispatcher).unwrap();
    assert_eq!(
        String::from_utf8(dispatcher.into_writer()).unwrap(),
        "2 : 0.730000\n"
    );
    assert_eq!(
        String::from_utf8(arm.into_inner()).unwrap(),
        "Would move arm axis 2 in direction 1\n"
    );
    assert_eq!(counters.releases(), 1);
}

#[test]
fn test_acquisition_failure_reads_nothing() {
    let joystick = DummyJoystick::new(vec![axis(2, 0.73), JoystickEvent::Quit]);
    let counters = joystick.counters();
    let mut subsystem = DummyInputSubsystem::new(joystick);
    let arm = RecordingArm::new();
    let mut dispatcher = Dispatcher::with_writer(&arm, Vec::new());
    let err = run(&mut subsystem, 1, &mut dispatcher).unwrap_err();
    assert!(matches!(err, Error::NoDevice { id: 1 }));
    assert_eq!(counters.reads(), 0);
    assert_eq!(counters.releases(), 0);
    assert!(arm.calls().is_empty());

    let err = run(&mut DummyInputSubsystem::empty(), 0, &mut dispatcher).unwrap_err();
    assert!(matches!(err, Error::NoDevice { id: 0 }));
}

#[test]
fn test_joystick_fault_releases() {
    // No quit event: the dummy reports a disconnect once the events run out.
    let mut joystick = DummyJoystick::new(vec![axis(0, 0.9)]);
    let counters = joystick.counters();
    let arm = RecordingArm::new();
    let mut dispatcher = Dispatcher::with_writer(&arm, Vec::new());
    let err = dispatcher.run(&mut joystick).unwrap_err();
    assert!(matches!(err, Error::Disconnected { .. }));
    assert_eq!(arm.calls(), vec![(0, Direction::Positive)]);
    assert_eq!(counters.releases(), 1);
}

struct FailingArm;

impl MoveArm for FailingArm {
    fn move_arm(&self, axis: u32, _: Direction) -> Result<(), Error> {
        Err(anyhow::anyhow!("motor {axis} jammed").into())
    }
}

#[test]
fn test_handler_fault_releases() {
    let mut joystick = DummyJoystick::new(vec![axis(0, 0.1), axis(0, 0.9), JoystickEvent::Quit]);
    let counters = joystick.counters();
    let mut dispatcher = Dispatcher::with_writer(FailingArm, Vec::new());
    let err = dispatcher.run(&mut joystick).unwrap_err();
    assert!(matches!(err, Error::Other(_)));
    assert_eq!(counters.reads(), 2);
    assert_eq!(counters.releases(), 1);
}

struct PanickingArm;

impl MoveArm for PanickingArm {
    fn move_arm(&self, _: u32, _: Direction) -> Result<(), Error> {
        panic!("driver crashed");
    }
}

#[test]
fn test_panic_releases() {
    let joystick = DummyJoystick::new(vec![axis(0, -0.9), JoystickEvent::Quit]);
    let counters = joystick.counters();
    let result = panic::catch_unwind(AssertUnwindSafe(|| {
        let mut dispatcher = Dispatcher::with_writer(PanickingArm, Vec::new());
        dispatcher.run(joystick)
    }));
    assert!(result.is_err());
    assert_eq!(counters.releases(), 1);
}

#[test]
fn test_axis_router() {
    let router = AxisRouter::new(vec![
        AxisMapping::new(3, 1, false),
        AxisMapping::new(2, 2, true),
        AxisMapping::new(1, 3, false),
        AxisMapping::new(0, 4, true),
    ]);
    let mut joystick = DummyJoystick::new(vec![
        axis(3, -0.8),
        axis(2, 0.8),
        axis(0, -0.6),
        axis(6, 1.0),
        JoystickEvent::Quit,
    ])
    .with_num_axes(4);
    let arm = RecordingArm::new();
    let mut dispatcher = Dispatcher::with_writer(&arm, Vec::new()).with_axis_router(router);
    dispatcher.run(&mut joystick).unwrap();
    assert_eq!(
        arm.calls(),
        vec![
            (1, Direction::Negative),
            (2, Direction::Negative),
            (4, Direction::Positive),
        ]
    );
    assert_eq!(
        String::from_utf8(dispatcher.into_writer()).unwrap(),
        "3 : -0.800000\n2 : 0.800000\n0 : -0.600000\n6 : 1.000000\n"
    );
}
