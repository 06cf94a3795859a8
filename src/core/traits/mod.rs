//! Core traits for platform-agnostic node functionality.
//!
//! This module provides trait abstractions that decouple device logic from
//! platform-specific implementations (Embassy, mock, etc.).

pub mod time;

pub use time::{MockClock, TimeSource};

#[cfg(feature = "embassy")]
pub use time::EmbassyClock;
