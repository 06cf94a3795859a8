//! Output-stage power gating
//!
//! After a move completes, a stepper can either keep holding current flowing
//! (stays powered, holds torque) or cut the output stage once a cooldown has
//! passed. [`PowerGate`] owns that countdown: armed at move completion,
//! cancelled when a new move starts, and polled each tick for expiry.

/// Cooldown countdown for the actuator output stage
///
/// The gate never touches hardware itself; the driver asks [`take_due`] each
/// tick and performs the disable exactly once when it fires.
///
/// [`take_due`]: PowerGate::take_due
#[derive(Debug)]
pub struct PowerGate {
    disable_after_move: bool,
    disable_time_ms: u32,
    armed_at_ms: Option<u32>,
}

impl PowerGate {
    /// Create a gate
    ///
    /// When `disable_after_move` is false the gate never arms and the
    /// actuator stays powered indefinitely after motion.
    pub fn new(disable_after_move: bool, disable_time_ms: u32) -> Self {
        Self {
            disable_after_move,
            disable_time_ms,
            armed_at_ms: None,
        }
    }

    /// Arm the countdown at move completion
    ///
    /// Returns `true` if the countdown armed (power-down is configured);
    /// `false` leaves the gate inert.
    pub fn arm(&mut self, now_ms: u32) -> bool {
        if !self.disable_after_move {
            return false;
        }
        self.armed_at_ms = Some(now_ms);
        true
    }

    /// Drop any pending countdown
    ///
    /// Called when a new move starts, so a stale deadline can never cut
    /// power mid-motion.
    pub fn cancel(&mut self) {
        self.armed_at_ms = None;
    }

    /// Whether a countdown is pending
    pub fn is_armed(&self) -> bool {
        self.armed_at_ms.is_some()
    }

    /// Check the countdown, consuming it when it fires
    ///
    /// Returns `true` exactly once per armed countdown: at the first call at
    /// or after the configured cooldown has elapsed. Wrapping subtraction
    /// keeps the comparison valid across millisecond-counter wraparound.
    pub fn take_due(&mut self, now_ms: u32) -> bool {
        match self.armed_at_ms {
            Some(armed_at) if now_ms.wrapping_sub(armed_at) >= self.disable_time_ms => {
                self.armed_at_ms = None;
                true
            }
            _ => false,
        }
    }
}
