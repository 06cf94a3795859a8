//! Time abstraction for platform-agnostic timing operations.
//!
//! Devices take their notion of time through the [`TimeSource`] trait so that
//! cooldown deadlines can be tested deterministically on the host. The counter
//! is a `u32` millisecond tick that wraps after ~49.7 days; all elapsed-time
//! math therefore uses wrapping subtraction, never timestamp comparison.

use core::cell::Cell;

/// Platform-agnostic monotonic millisecond clock.
///
/// Implementations:
/// - `EmbassyClock` for embedded targets using Embassy (feature `embassy`)
/// - [`MockClock`] for host testing with controllable time
///
/// # Example
///
/// ```
/// use hubnode::core::traits::{MockClock, TimeSource};
///
/// fn cooldown_elapsed<C: TimeSource>(clock: &C, armed_at: u32, budget: u32) -> bool {
///     clock.elapsed_ms_since(armed_at) >= budget
/// }
///
/// let clock = MockClock::new();
/// clock.advance(1_500);
/// assert!(cooldown_elapsed(&clock, 0, 1_000));
/// ```
pub trait TimeSource: Clone + Send + Sync {
    /// Current time in milliseconds since system start.
    ///
    /// Wraps around after `u32::MAX` milliseconds.
    fn now_ms(&self) -> u32;

    /// Elapsed milliseconds since a reference point.
    ///
    /// Uses wrapping subtraction so the result stays correct across counter
    /// wraparound, as long as the real elapsed time is below `u32::MAX` ms.
    fn elapsed_ms_since(&self, reference_ms: u32) -> u32 {
        self.now_ms().wrapping_sub(reference_ms)
    }
}

// ============================================================================
// Mock Implementation (always available for testing)
// ============================================================================

/// Mock time source with controllable time advancement.
///
/// Allows tests to control time progression, enabling deterministic testing
/// of cooldown and other timing-dependent behavior.
///
/// # Example
///
/// ```
/// use hubnode::core::traits::{MockClock, TimeSource};
///
/// let clock = MockClock::new();
/// assert_eq!(clock.now_ms(), 0);
///
/// clock.advance(1000);
/// assert_eq!(clock.now_ms(), 1000);
/// ```
#[derive(Clone, Default)]
pub struct MockClock {
    current_ms: Cell<u32>,
}

// Safety: MockClock is only used in single-threaded test contexts where Cell
// is safe. The Send+Sync bounds on TimeSource are required for embedded
// contexts, but MockClock is not used there.
unsafe impl Send for MockClock {}
unsafe impl Sync for MockClock {}

impl MockClock {
    /// Creates a new `MockClock` starting at time 0.
    pub fn new() -> Self {
        Self {
            current_ms: Cell::new(0),
        }
    }

    /// Creates a new `MockClock` starting at the specified time.
    pub fn with_initial(ms: u32) -> Self {
        Self {
            current_ms: Cell::new(ms),
        }
    }

    /// Sets the current time to an absolute value.
    pub fn set(&self, ms: u32) {
        self.current_ms.set(ms);
    }

    /// Advances the current time, wrapping at `u32::MAX`.
    pub fn advance(&self, ms: u32) {
        self.current_ms.set(self.current_ms.get().wrapping_add(ms));
    }
}

impl TimeSource for MockClock {
    fn now_ms(&self) -> u32 {
        self.current_ms.get()
    }
}

// A shared reference is itself a time source, so one clock can serve every
// device on the node (and tests keep a handle to advance the mock).
impl<T: TimeSource> TimeSource for &T {
    fn now_ms(&self) -> u32 {
        (**self).now_ms()
    }
}

// ============================================================================
// Embassy Implementation (firmware targets)
// ============================================================================

/// Time source backed by the Embassy time driver.
#[cfg(feature = "embassy")]
#[derive(Debug, Clone, Copy, Default)]
pub struct EmbassyClock;

#[cfg(feature = "embassy")]
impl TimeSource for EmbassyClock {
    fn now_ms(&self) -> u32 {
        embassy_time::Instant::now().as_millis() as u32
    }
}

// ============================================================================
// Unit Tests
// ============================================================================
