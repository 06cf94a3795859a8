//! Device drivers
//!
//! This module contains device drivers that use platform abstraction traits,
//! plus the host-loop helpers that connect a device to the hub dispatch.
//!
//! ## Modules
//!
//! - `stepper_level`: level-commanded stepper actuator driver
//! - `traits`: device capability definition (`Device`)

pub mod stepper_level;
pub mod traits;

pub use traits::Device;

use crate::communication::hub::{HubDispatch, StatusReport};
use crate::platform::Result;

/// Initialize a device and forward its first status to the hub
pub fn init_device<D: Device, H: HubDispatch>(device: &mut D, hub: &mut H) -> Result<()> {
    let report = device.init()?;
    forward(device, hub, report);
    Ok(())
}

/// Run one tick of a device and forward any status change to the hub
///
/// Called from the shared control loop at high frequency; completes in
/// bounded time regardless of how far the device is from its target.
pub fn service_device<D: Device, H: HubDispatch>(device: &mut D, hub: &mut H) -> Result<()> {
    let report = device.update()?;
    forward(device, hub, report);
    Ok(())
}

/// Deliver one inbound command line and forward any status change to the hub
pub fn deliver_command<D: Device, H: HubDispatch>(
    device: &mut D,
    hub: &mut H,
    text: &str,
) -> Result<()> {
    let report = device.apply_command(text)?;
    forward(device, hub, report);
    Ok(())
}

fn forward<D: Device, H: HubDispatch>(device: &D, hub: &mut H, report: Option<StatusReport>) {
    if let Some(report) = report {
        hub.send(report.render(device.name()).as_str());
    }
}
