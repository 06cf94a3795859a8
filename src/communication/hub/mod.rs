//! Hub protocol boundary
//!
//! Command parsing, status rendering, and the dispatch collaborator the host
//! loop hands status strings to.

pub mod command;
pub mod status;

pub use command::{MotionRequest, ParsedCommand, SKIP_SENTINEL};
pub use status::{StatusReport, STATUS_CAPACITY};

/// Hub dispatch collaborator
///
/// The framework side that carries status strings back to the hub. Supplied
/// by the host; the node never blocks on it.
pub trait HubDispatch {
    /// Hand a rendered status message to the hub transport
    fn send(&mut self, message: &str);
}

/// Mock hub dispatch that records every message for test assertions
#[cfg(any(test, feature = "mock"))]
#[derive(Debug, Default)]
pub struct MockHub {
    sent: heapless::Vec<heapless::String<STATUS_CAPACITY>, 16>,
}

#[cfg(any(test, feature = "mock"))]
impl MockHub {
    /// Create an empty recorder
    pub fn new() -> Self {
        Self::default()
    }

    /// All recorded messages, oldest first
    pub fn messages(&self) -> impl Iterator<Item = &str> {
        self.sent.iter().map(|s| s.as_str())
    }

    /// Number of recorded messages
    pub fn len(&self) -> usize {
        self.sent.len()
    }

    /// Whether nothing has been recorded yet
    pub fn is_empty(&self) -> bool {
        self.sent.is_empty()
    }

    /// Most recently recorded message
    pub fn last(&self) -> Option<&str> {
        self.sent.last().map(|s| s.as_str())
    }
}

#[cfg(any(test, feature = "mock"))]
impl HubDispatch for MockHub {
    fn send(&mut self, message: &str) {
        let mut stored = heapless::String::new();
        // Capacity matches the render buffer, so this cannot truncate
        let _ = stored.push_str(message);
        let _ = self.sent.push(stored);
    }
}
