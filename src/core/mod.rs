//! Core node infrastructure
//!
//! This module contains the pieces shared by every device on the node:
//! the injected time source and the logging macros.

pub mod logging;
pub mod traits;
