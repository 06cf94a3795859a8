//! Level-commanded stepper actuator driver
//!
//! Implements the hub's "switch level" capability on a stepper/servo-class
//! actuator: the hub commands a percentage level (0-100) and a motion
//! duration, the driver maps the level into a configured angle range and
//! walks the motion primitive there one step per tick. The configured range
//! may be inverted (`min_angle > max_angle`), which flips motion direction
//! transparently.
//!
//! # Design
//!
//! The driver is a non-blocking state machine polled from the shared control
//! loop. Each `update()` call performs exactly one bounded increment of
//! motion, so one slow actuator can never starve the other devices on the
//! node. The motion primitive and the clock are injected ([`StepperInterface`],
//! [`TimeSource`]) so the whole machine runs against mocks on the host.
//!
//! Commanded targets are clamped into the configured range and malformed
//! commands degrade to zero-filled requests; the actuator may end up at an
//! unintended but always in-bounds position, it never halts on bad input.
//!
//! [`StepperInterface`]: crate::platform::StepperInterface
//! [`TimeSource`]: crate::core::traits::TimeSource

pub mod power;

use crate::communication::hub::command::{self, ParsedCommand};
use crate::communication::hub::StatusReport;
use crate::core::traits::TimeSource;
use crate::devices::Device;
use crate::platform::{Result, StepperInterface};
use crate::{log_debug, log_info};

use power::PowerGate;

/// Acceleration handed to the primitive at bring-up (steps/sec²)
const STARTUP_ACCELERATION: f32 = 100.0;

/// Motion-control state
///
/// `Disabled` is only reachable from `Cooldown`; a new command re-enters
/// `Moving` from any state and re-enables the output stage.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum MotionState {
    /// No pending or in-progress motion, output stage powered
    Idle,
    /// Target set, primitive advancing one step per tick
    Moving,
    /// Move complete, counting down to power-off
    Cooldown,
    /// Output stage off
    Disabled,
}

/// Static configuration for one level-commanded actuator
#[derive(Debug, Clone, Copy)]
pub struct StepperLevelConfig {
    /// Hub tile name; must match what the hub dispatches on
    pub name: &'static str,
    /// Angle to seek during bring-up
    pub starting_angle: i32,
    /// Cut output-stage power after each move
    pub disable_after_move: bool,
    /// Cooldown before the power cut (ms)
    pub disable_time_ms: u32,
    /// Angle mapped to level 0
    pub min_angle: i32,
    /// Angle mapped to level 100
    pub max_angle: i32,
    /// Initial full-range time budget (ms); kept gentle so the bring-up
    /// move is slow, every later rate comes from the hub
    pub rate_ms: i32,
}

impl Default for StepperLevelConfig {
    fn default() -> Self {
        Self {
            name: "stepper1",
            starting_angle: 90, // midpoint of the default range
            disable_after_move: false,
            disable_time_ms: 1000,
            min_angle: 0,
            max_angle: 180,
            rate_ms: 2000,
        }
    }
}

/// Map a 0-100 level into the configured angle range
///
/// Linear in the signed difference and integer-truncated, so an inverted
/// range (`min_angle > max_angle`) maps level 100 to the numerically smaller
/// angle without any special casing.
pub fn level_to_angle(level: i32, min_angle: i32, max_angle: i32) -> i32 {
    min_angle + (max_angle - min_angle) * level / 100
}

/// Level-commanded stepper actuator
///
/// One instance per configured device; constructed once at process start and
/// mutated only by inbound commands and the periodic tick.
pub struct StepperLevel<S, C>
where
    S: StepperInterface,
    C: TimeSource,
{
    name: &'static str,
    stepper: S,
    clock: C,
    min_angle: i32,
    max_angle: i32,
    current_level: i32,
    old_angle: i32,
    target_angle: i32,
    current_angle: i32,
    current_rate: i32,
    step_budget_ms: i32,
    state: MotionState,
    gate: PowerGate,
}

impl<S, C> StepperLevel<S, C>
where
    S: StepperInterface,
    C: TimeSource,
{
    /// Create the actuator around an injected primitive and clock
    pub fn new(config: StepperLevelConfig, stepper: S, clock: C) -> Self {
        let midpoint = (config.min_angle + config.max_angle) / 2;
        Self {
            name: config.name,
            stepper,
            clock,
            min_angle: config.min_angle,
            max_angle: config.max_angle,
            current_level: 0,
            old_angle: midpoint,
            target_angle: config.starting_angle,
            current_angle: midpoint,
            current_rate: config.rate_ms,
            step_budget_ms: 0,
            state: MotionState::Idle,
            gate: PowerGate::new(config.disable_after_move, config.disable_time_ms),
        }
    }

    /// Current motion-control state
    pub fn state(&self) -> MotionState {
        self.state
    }

    /// Whether a motion is in progress
    pub fn is_moving(&self) -> bool {
        self.state == MotionState::Moving
    }

    /// Last applied level
    pub fn current_level(&self) -> i32 {
        self.current_level
    }

    /// Current clamped target angle
    pub fn target_angle(&self) -> i32 {
        self.target_angle
    }

    /// Current full-range time budget (ms)
    pub fn current_rate(&self) -> i32 {
        self.current_rate
    }

    /// Derived per-degree time budget (ms)
    pub fn step_budget_ms(&self) -> i32 {
        self.step_budget_ms
    }

    /// Access the underlying motion primitive
    pub fn stepper(&self) -> &S {
        &self.stepper
    }

    /// Start motion toward the pending target
    ///
    /// Re-enables the output stage, cancels any pending power-down, clamps
    /// the target into the configured range, derives the per-degree budget,
    /// and enters `Moving`.
    fn begin_move(&mut self) -> Result<()> {
        self.stepper.enable_outputs()?;
        self.gate.cancel();

        // Directional clamp: a target past both bounds resolves by value
        // comparison, not by field name, so an inverted configuration clamps
        // to the correct side.
        if self.target_angle < self.min_angle && self.target_angle < self.max_angle {
            self.target_angle = if self.min_angle < self.max_angle {
                self.min_angle
            } else {
                self.max_angle
            };
        }
        if self.target_angle > self.max_angle && self.target_angle > self.min_angle {
            self.target_angle = if self.max_angle > self.min_angle {
                self.max_angle
            } else {
                self.min_angle
            };
        }

        // Full-range budget spread per degree of range; a zero-width range
        // degrades to a zero budget instead of a division fault.
        self.step_budget_ms = self
            .current_rate
            .checked_div(self.max_angle - self.min_angle)
            .map(i32::saturating_abs)
            .unwrap_or(0);

        self.current_angle = self.old_angle;
        self.state = MotionState::Moving;
        log_debug!("{}: target angle set to {}", self.name, self.target_angle);
        Ok(())
    }

    fn status(&self) -> StatusReport {
        StatusReport {
            level: self.current_level,
            target: self.target_angle,
            rate: self.current_rate,
        }
    }
}

impl<S, C> Device for StepperLevel<S, C>
where
    S: StepperInterface,
    C: TimeSource,
{
    fn name(&self) -> &str {
        self.name
    }

    fn init(&mut self) -> Result<Option<StatusReport>> {
        // Enable signal is active-low on the supported driver stages
        self.stepper.set_pins_inverted(false, false, true);
        self.stepper.set_acceleration(STARTUP_ACCELERATION);
        self.stepper.set_max_speed(self.current_rate as f32);
        self.begin_move()?;
        log_info!("{}: initialized, seeking {}", self.name, self.target_angle);
        Ok(Some(self.status()))
    }

    fn update(&mut self) -> Result<Option<StatusReport>> {
        let mut report = None;

        if self.state == MotionState::Moving {
            self.stepper.move_to(self.target_angle);
            if self.stepper.target_position() == self.stepper.current_position() {
                self.state = if self.gate.arm(self.clock.now_ms()) {
                    MotionState::Cooldown
                } else {
                    MotionState::Idle
                };
                log_debug!("{}: move complete at {}", self.name, self.target_angle);
                report = Some(self.status());
            }
        }

        // At most one step per tick; cost independent of remaining distance
        self.stepper.run();

        if self.state == MotionState::Cooldown && self.gate.take_due(self.clock.now_ms()) {
            self.stepper.disable_outputs()?;
            self.state = MotionState::Disabled;
            log_debug!("{}: output stage disabled after cooldown", self.name);
        }

        Ok(report)
    }

    fn apply_command(&mut self, text: &str) -> Result<Option<StatusReport>> {
        let request = match command::parse(text) {
            ParsedCommand::Skip => return Ok(None),
            ParsedCommand::Motion(request) => request,
        };

        self.current_level = request.level;
        self.current_rate = request.rate;
        self.stepper.set_max_speed(self.current_rate as f32);
        self.max_angle = request.max_angle;
        self.min_angle = request.min_angle;
        self.old_angle = self.current_angle;
        self.target_angle = level_to_angle(self.current_level, self.min_angle, self.max_angle);
        self.begin_move()?;

        Ok(None)
    }
}
