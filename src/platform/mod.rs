//! Platform abstraction layer
//!
//! This module provides hardware abstraction for the motion primitives the
//! device drivers are built on. All platform-specific code is isolated here;
//! drivers only ever see the trait interfaces.

pub mod error;
pub mod traits;

#[cfg(any(test, feature = "mock"))]
pub mod mock;

// Re-export commonly used types
pub use error::{PlatformError, Result, StepperError};
pub use traits::{StepperConfig, StepperInterface};
