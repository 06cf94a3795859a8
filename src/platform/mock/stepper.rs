//! Mock stepper implementation for testing

use crate::platform::{
    Result,
    traits::{StepperConfig, StepperInterface},
};

/// Mock stepper motion primitive
///
/// Simulates an open-loop positioner: each `run()` call advances the position
/// counter by at most one unit toward the target. Enable/disable transitions
/// are counted so tests can assert power-gating behavior.
#[derive(Debug)]
pub struct MockStepper {
    config: StepperConfig,
    current: i32,
    target: i32,
    max_speed: f32,
    acceleration: f32,
    pins_inverted: (bool, bool, bool),
    outputs_enabled: bool,
    enable_calls: u32,
    disable_calls: u32,
    steps_taken: u32,
}

impl MockStepper {
    /// Create a new mock stepper at position 0
    pub fn new(config: StepperConfig) -> Self {
        Self {
            config,
            current: 0,
            target: 0,
            max_speed: 0.0,
            acceleration: 0.0,
            pins_inverted: (false, false, false),
            outputs_enabled: false,
            enable_calls: 0,
            disable_calls: 0,
            steps_taken: 0,
        }
    }

    /// Wiring configuration the mock was created with
    pub fn config(&self) -> &StepperConfig {
        &self.config
    }

    /// Whether the output stage is currently energized
    pub fn outputs_enabled(&self) -> bool {
        self.outputs_enabled
    }

    /// Number of `enable_outputs` calls observed
    pub fn enable_calls(&self) -> u32 {
        self.enable_calls
    }

    /// Number of `disable_outputs` calls observed
    pub fn disable_calls(&self) -> u32 {
        self.disable_calls
    }

    /// Total steps taken since creation
    pub fn steps_taken(&self) -> u32 {
        self.steps_taken
    }

    /// Last speed cap passed to `set_max_speed`
    pub fn max_speed(&self) -> f32 {
        self.max_speed
    }

    /// Last rate passed to `set_acceleration`
    pub fn acceleration(&self) -> f32 {
        self.acceleration
    }

    /// Last polarity configuration passed to `set_pins_inverted`
    pub fn pins_inverted(&self) -> (bool, bool, bool) {
        self.pins_inverted
    }

    /// Force the position counter (hardware positioning moves in tests)
    pub fn set_current_position(&mut self, position: i32) {
        self.current = position;
    }
}

impl StepperInterface for MockStepper {
    fn enable_outputs(&mut self) -> Result<()> {
        self.outputs_enabled = true;
        self.enable_calls += 1;
        Ok(())
    }

    fn disable_outputs(&mut self) -> Result<()> {
        self.outputs_enabled = false;
        self.disable_calls += 1;
        Ok(())
    }

    fn move_to(&mut self, target: i32) {
        self.target = target;
    }

    fn current_position(&self) -> i32 {
        self.current
    }

    fn target_position(&self) -> i32 {
        self.target
    }

    fn run(&mut self) -> bool {
        if self.current == self.target {
            return false;
        }
        self.current += (self.target - self.current).signum();
        self.steps_taken += 1;
        true
    }

    fn set_max_speed(&mut self, speed: f32) {
        self.max_speed = speed;
    }

    fn set_acceleration(&mut self, acceleration: f32) {
        self.acceleration = acceleration;
    }

    fn set_pins_inverted(&mut self, dir: bool, step: bool, enable: bool) {
        self.pins_inverted = (dir, step, enable);
    }
}
