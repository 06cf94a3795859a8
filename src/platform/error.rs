//! Platform error types
//!
//! This module defines error types for platform operations.

use core::fmt;

/// Result type for platform operations
pub type Result<T> = core::result::Result<T, PlatformError>;

/// Platform-level errors
///
/// All platform implementations map their HAL-specific errors to these variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PlatformError {
    /// Stepper driver operation failed
    Stepper(StepperError),
    /// Invalid configuration provided
    InvalidConfig,
}

/// Stepper-driver-specific errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum StepperError {
    /// Communication with the driver stage failed (UART/SPI drivers)
    CommunicationError,
    /// Output stage could not be switched
    OutputStageFault,
}

impl fmt::Display for PlatformError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlatformError::Stepper(e) => write!(f, "stepper error: {}", e),
            PlatformError::InvalidConfig => write!(f, "invalid configuration"),
        }
    }
}

impl fmt::Display for StepperError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StepperError::CommunicationError => write!(f, "communication error"),
            StepperError::OutputStageFault => write!(f, "output stage fault"),
        }
    }
}

impl From<StepperError> for PlatformError {
    fn from(e: StepperError) -> Self {
        PlatformError::Stepper(e)
    }
}
