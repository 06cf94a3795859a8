//! End-to-end tests: command text in, status text out
//!
//! Wires the full path the firmware uses: inbound hub line -> command parser
//! -> stepper level device -> mock motion primitive ticks -> rendered status
//! into the hub dispatch.

use hubnode::communication::hub::MockHub;
use hubnode::core::traits::MockClock;
use hubnode::devices::stepper_level::{MotionState, StepperLevel, StepperLevelConfig};
use hubnode::devices::{deliver_command, init_device, service_device};
use hubnode::platform::mock::MockStepper;
use hubnode::platform::StepperConfig;
use hubnode::platform::StepperInterface;

fn make_device(
    config: StepperLevelConfig,
    clock: &MockClock,
) -> StepperLevel<MockStepper, &MockClock> {
    StepperLevel::new(config, MockStepper::new(StepperConfig::default()), clock)
}

/// Tick the device until it stops moving, bounded so failures terminate
fn pump(device: &mut StepperLevel<MockStepper, &MockClock>, hub: &mut MockHub) {
    for _ in 0..10_000 {
        service_device(device, hub).unwrap();
        if !device.is_moving() {
            return;
        }
    }
    panic!("device never finished moving");
}

#[test]
fn command_round_trip_reports_mapped_target() {
    let clock = MockClock::new();
    let mut device = make_device(StepperLevelConfig::default(), &clock);
    let mut hub = MockHub::new();

    init_device(&mut device, &mut hub).unwrap();
    assert_eq!(hub.last(), Some("stepper1 0:90:2000"));

    // Bring-up move to the starting angle completes and re-reports
    pump(&mut device, &mut hub);
    assert_eq!(hub.last(), Some("stepper1 0:90:2000"));

    deliver_command(&mut device, &mut hub, "stepper1 40:1500+180-0").unwrap();
    let before = hub.len();
    pump(&mut device, &mut hub);

    assert_eq!(hub.len(), before + 1);
    assert_eq!(hub.last(), Some("stepper1 40:72:1500"));
    assert_eq!(device.stepper().current_position(), 72);
}

#[test]
fn status_is_emitted_only_on_state_changes() {
    let clock = MockClock::new();
    let mut device = make_device(StepperLevelConfig::default(), &clock);
    let mut hub = MockHub::new();

    init_device(&mut device, &mut hub).unwrap();
    pump(&mut device, &mut hub);
    let settled = hub.len();

    // Idle ticks stay quiet
    for _ in 0..100 {
        service_device(&mut device, &mut hub).unwrap();
    }
    assert_eq!(hub.len(), settled);
}

#[test]
fn sentinel_line_changes_nothing() {
    let clock = MockClock::new();
    let mut device = make_device(StepperLevelConfig::default(), &clock);
    let mut hub = MockHub::new();

    init_device(&mut device, &mut hub).unwrap();
    pump(&mut device, &mut hub);

    deliver_command(&mut device, &mut hub, "stepper1 55:1200+180-0").unwrap();
    pump(&mut device, &mut hub);
    let settled = hub.len();
    let steps = device.stepper().steps_taken();

    deliver_command(&mut device, &mut hub, "stepper1 refresh!").unwrap();
    pump(&mut device, &mut hub);

    assert_eq!(hub.len(), settled);
    assert_eq!(device.stepper().steps_taken(), steps);
    assert_eq!(device.current_level(), 55);
    assert_eq!(device.current_rate(), 1200);
}

#[test]
fn repeated_command_settles_to_identical_status() {
    let clock = MockClock::new();
    let mut device = make_device(StepperLevelConfig::default(), &clock);
    let mut hub = MockHub::new();

    init_device(&mut device, &mut hub).unwrap();
    pump(&mut device, &mut hub);

    deliver_command(&mut device, &mut hub, "stepper1 40:1500+180-0").unwrap();
    pump(&mut device, &mut hub);
    let first = hub.last().unwrap().to_string();
    let steps = device.stepper().steps_taken();

    deliver_command(&mut device, &mut hub, "stepper1 40:1500+180-0").unwrap();
    pump(&mut device, &mut hub);

    assert_eq!(hub.last(), Some(first.as_str()));
    assert_eq!(device.stepper().steps_taken(), steps);
}

#[test]
fn cooldown_cuts_power_after_the_configured_hold() {
    let clock = MockClock::new();
    let config = StepperLevelConfig {
        disable_after_move: true,
        ..StepperLevelConfig::default()
    };
    let mut device = make_device(config, &clock);
    let mut hub = MockHub::new();

    init_device(&mut device, &mut hub).unwrap();
    pump(&mut device, &mut hub);

    deliver_command(&mut device, &mut hub, "stepper1 75:1000+180-0").unwrap();
    pump(&mut device, &mut hub);
    assert_eq!(device.state(), MotionState::Cooldown);
    assert!(device.stepper().outputs_enabled());

    // Holding torque for the full cooldown window
    clock.advance(999);
    service_device(&mut device, &mut hub).unwrap();
    assert!(device.stepper().outputs_enabled());

    clock.advance(1);
    service_device(&mut device, &mut hub).unwrap();
    assert!(!device.stepper().outputs_enabled());
    assert_eq!(device.state(), MotionState::Disabled);

    // A later command wakes the output stage back up
    deliver_command(&mut device, &mut hub, "stepper1 10:1000+180-0").unwrap();
    assert!(device.stepper().outputs_enabled());
    pump(&mut device, &mut hub);
    assert_eq!(hub.last(), Some("stepper1 10:18:1000"));
}

#[test]
fn command_during_cooldown_keeps_power_on() {
    let clock = MockClock::new();
    let config = StepperLevelConfig {
        disable_after_move: true,
        ..StepperLevelConfig::default()
    };
    let mut device = make_device(config, &clock);
    let mut hub = MockHub::new();

    init_device(&mut device, &mut hub).unwrap();
    pump(&mut device, &mut hub);
    assert_eq!(device.state(), MotionState::Cooldown);

    clock.advance(900);
    deliver_command(&mut device, &mut hub, "stepper1 100:4000+180-0").unwrap();

    // Well past the stale deadline: still moving, still powered
    clock.advance(2_000);
    for _ in 0..20 {
        service_device(&mut device, &mut hub).unwrap();
        assert!(device.stepper().outputs_enabled());
    }
    assert_eq!(device.stepper().disable_calls(), 0);
}

#[test]
fn malformed_line_degrades_to_an_in_bounds_move() {
    let clock = MockClock::new();
    let mut device = make_device(StepperLevelConfig::default(), &clock);
    let mut hub = MockHub::new();

    init_device(&mut device, &mut hub).unwrap();
    pump(&mut device, &mut hub);

    // No delimiters: all-zero request collapses the range to angle 0
    deliver_command(&mut device, &mut hub, "stepper1").unwrap();
    pump(&mut device, &mut hub);

    assert_eq!(device.stepper().current_position(), 0);
    assert_eq!(hub.last(), Some("stepper1 0:0:0"));
}

#[test]
fn two_devices_share_one_clock() {
    let clock = MockClock::new();
    let mut lift = make_device(
        StepperLevelConfig {
            name: "lift",
            disable_after_move: true,
            ..StepperLevelConfig::default()
        },
        &clock,
    );
    let mut blinds = make_device(
        StepperLevelConfig {
            name: "blinds",
            min_angle: 180,
            max_angle: 0,
            ..StepperLevelConfig::default()
        },
        &clock,
    );
    let mut hub = MockHub::new();

    init_device(&mut lift, &mut hub).unwrap();
    init_device(&mut blinds, &mut hub).unwrap();
    pump(&mut lift, &mut hub);
    pump(&mut blinds, &mut hub);

    deliver_command(&mut lift, &mut hub, "lift 100:1000+180-0").unwrap();
    deliver_command(&mut blinds, &mut hub, "blinds 25:2000+0-180").unwrap();

    // Interleaved ticks, one bounded step each: neither starves the other
    for _ in 0..10_000 {
        service_device(&mut lift, &mut hub).unwrap();
        service_device(&mut blinds, &mut hub).unwrap();
        if !lift.is_moving() && !blinds.is_moving() {
            break;
        }
    }

    assert_eq!(lift.stepper().current_position(), 180);
    assert_eq!(blinds.stepper().current_position(), 135);

    // The shared clock drives lift's cooldown while blinds stays powered
    clock.advance(1_000);
    service_device(&mut lift, &mut hub).unwrap();
    service_device(&mut blinds, &mut hub).unwrap();
    assert!(!lift.stepper().outputs_enabled());
    assert!(blinds.stepper().outputs_enabled());
}
