//! Device traits
//!
//! This module contains the hardware-independent capability every device on
//! the node implements. The host loop owns a set of devices, initializes
//! each once, routes inbound command lines to them by name, and ticks them
//! forever; devices never see the transport and never block.

use crate::communication::hub::StatusReport;
use crate::platform::Result;

/// Device capability
///
/// Each device variant implements this trait; the host loop works only this
/// boundary and never sees a concrete driver type.
///
/// # Contract
///
/// - `update` is invoked at high frequency from the shared control loop and
///   must complete in bounded time, performing at most one incremental unit
///   of work per call. It may never wait or sleep.
/// - A returned [`StatusReport`] means observable device state changed; the
///   host renders it with the device name and hands it to the hub dispatch.
pub trait Device {
    /// Hub-facing device name (the hub's tile name)
    fn name(&self) -> &str;

    /// One-time bring-up after construction
    ///
    /// # Errors
    ///
    /// Returns `PlatformError` if the underlying primitive fails bring-up.
    fn init(&mut self) -> Result<Option<StatusReport>>;

    /// One non-blocking tick of device work
    ///
    /// # Errors
    ///
    /// Returns `PlatformError` if the underlying primitive fails.
    fn update(&mut self) -> Result<Option<StatusReport>>;

    /// Apply one inbound command line
    ///
    /// The full line is passed through, name prefix included; devices parse
    /// what they understand and ignore the rest.
    ///
    /// # Errors
    ///
    /// Returns `PlatformError` if the underlying primitive fails.
    fn apply_command(&mut self, text: &str) -> Result<Option<StatusReport>>;
}
