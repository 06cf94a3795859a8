//! Platform abstraction traits
//!
//! This module defines the traits that platform implementations must provide.

pub mod stepper;

// Re-export trait interfaces
pub use stepper::{StepperConfig, StepperInterface};
