//! Outbound status rendering
//!
//! Devices report `level:target:rate` after init and after every completed
//! move; the host loop prefixes the device name and hands the line to the
//! hub dispatch collaborator:
//!
//! ```text
//! <name> <level>:<target>:<rate>
//! ```

use core::fmt::Write;

/// Fixed capacity of a rendered status line
pub const STATUS_CAPACITY: usize = 64;

/// One device status snapshot
///
/// Emitted whenever level, target, or rate changes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct StatusReport {
    /// Last applied level (0-100, not re-clamped after derivation)
    pub level: i32,
    /// Current target angle in primitive units
    pub target: i32,
    /// Current full-range time budget (ms)
    pub rate: i32,
}

impl StatusReport {
    /// Render the hub wire format for the named device
    ///
    /// A line exceeding the fixed capacity is truncated; the capacity covers
    /// every representable field combination with room to spare for any sane
    /// device name.
    pub fn render(&self, name: &str) -> heapless::String<STATUS_CAPACITY> {
        let mut line = heapless::String::new();
        let _ = write!(line, "{} {}:{}:{}", name, self.level, self.target, self.rate);
        line
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_wire_format() {
        let report = StatusReport {
            level: 40,
            target: 72,
            rate: 1500,
        };
        assert_eq!(report.render("stepper1").as_str(), "stepper1 40:72:1500");
    }

    #[test]
    fn renders_negative_target() {
        let report = StatusReport {
            level: 0,
            target: -90,
            rate: 2000,
        };
        assert_eq!(report.render("blinds").as_str(), "blinds 0:-90:2000");
    }

    #[test]
    fn overlong_name_truncates_instead_of_failing() {
        let report = StatusReport {
            level: 100,
            target: 180,
            rate: 2000,
        };
        let name = "a-device-name-far-longer-than-any-hub-tile-would-ever-carry";
        let line = report.render(name);
        assert!(line.len() <= STATUS_CAPACITY);
        assert!(line.as_str().starts_with("a-device-name"));
    }
}
