//! Stepper motion primitive trait
//!
//! This module defines the interface to the hardware-facing motion primitive:
//! an open-loop positioner that advances toward an absolute target one step at
//! a time when polled. Implementations wrap a concrete driver stage
//! (step/dir pulse generation, serial driver ICs); `MockStepper` in
//! `platform::mock` substitutes a simulated primitive in tests.

use crate::platform::Result;

/// Static stepper wiring and pulse configuration
///
/// Passed through unmodified to the platform implementation; the drivers
/// built on top never interpret these values.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StepperConfig {
    /// Step pulse output pin
    pub step_pin: u8,
    /// Direction output pin
    pub dir_pin: u8,
    /// Output-stage enable pin
    pub enable_pin: u8,
    /// Minimum pulse width (μs)
    pub min_pulse_us: u16,
    /// Maximum pulse width (μs)
    pub max_pulse_us: u16,
}

impl Default for StepperConfig {
    fn default() -> Self {
        Self {
            step_pin: 0,
            dir_pin: 1,
            enable_pin: 2,
            min_pulse_us: 544,
            max_pulse_us: 2400,
        }
    }
}

/// Stepper motion primitive interface
///
/// Platform implementations must provide this interface for position control.
/// The primitive is an open-loop system: positions are measured by counting
/// emitted pulses, so there is no guarantee the mechanism is physically where
/// the counter says.
///
/// # Safety Invariants
///
/// - Only one owner per primitive instance
/// - `run()` must be polled from a single context; each call performs at most
///   one step and returns without waiting
pub trait StepperInterface {
    /// Energize the output stage
    ///
    /// Idempotent; calling while already enabled is a no-op at the hardware
    /// level.
    ///
    /// # Errors
    ///
    /// Returns `PlatformError::Stepper` if the output stage cannot be
    /// switched.
    fn enable_outputs(&mut self) -> Result<()>;

    /// Cut power to the output stage
    ///
    /// The mechanism no longer holds position once disabled.
    ///
    /// # Errors
    ///
    /// Returns `PlatformError::Stepper` if the output stage cannot be
    /// switched.
    fn disable_outputs(&mut self) -> Result<()>;

    /// Set the absolute target position
    fn move_to(&mut self, target: i32);

    /// Current position, as measured by counting emitted steps
    fn current_position(&self) -> i32;

    /// Most recently set target position
    fn target_position(&self) -> i32;

    /// Advance at most one step toward the target
    ///
    /// Must be called as often as possible, typically once per loop
    /// iteration. Returns `true` if a step was taken.
    fn run(&mut self) -> bool;

    /// Set the maximum permitted speed cap
    fn set_max_speed(&mut self, speed: f32);

    /// Set the acceleration/deceleration rate
    fn set_acceleration(&mut self, acceleration: f32);

    /// Set polarity inversion for the direction, step, and enable signals
    fn set_pins_inverted(&mut self, dir: bool, step: bool, enable: bool);
}
