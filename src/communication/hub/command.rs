//! Inbound hub command parsing
//!
//! The hub commands a level change with a single delimited line:
//!
//! ```text
//! <name> <level>:<rate>+<max>-<min>
//! ```
//!
//! e.g. `stepper1 40:1500+180-0`. The four fields sit at fixed delimiter
//! positions relative to the name prefix; the name itself is routed by the
//! host loop and never interpreted here. A line containing the skip sentinel
//! (`'!'`) is ignored entirely.
//!
//! # Degenerate input
//!
//! An absent delimiter yields an empty substring, and every field parses with
//! a zero fallback. Malformed text therefore produces an all-zero
//! [`MotionRequest`] instead of a parse failure: the device moves to an
//! unintended but in-bounds position rather than halting. This matches the
//! hub-side contract, which retries nothing and reads no error channel.

/// Character marking a command line the node must ignore
pub const SKIP_SENTINEL: char = '!';

/// A complete, immutable motion request decoded from one command line
///
/// The parser always produces the whole request before the state machine
/// applies it, so a command takes effect atomically at the next tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct MotionRequest {
    /// Commanded level, nominally 0-100
    pub level: i32,
    /// Time budget (ms) for a full-range traversal
    pub rate: i32,
    /// Angle mapped to level 100
    pub max_angle: i32,
    /// Angle mapped to level 0
    pub min_angle: i32,
}

/// Outcome of parsing one inbound line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ParsedCommand {
    /// A motion request to apply
    Motion(MotionRequest),
    /// Line carried the skip sentinel; touch nothing
    Skip,
}

/// Parse one inbound command line
pub fn parse(text: &str) -> ParsedCommand {
    if text.contains(SKIP_SENTINEL) {
        return ParsedCommand::Skip;
    }

    let space = text.find(' ');
    let colon = text.find(':');
    let plus = text.find('+');
    let minus = text.find('-');

    ParsedCommand::Motion(MotionRequest {
        level: parse_field(slice_between(text, space, colon)),
        rate: parse_field(slice_between(text, colon, plus)),
        max_angle: parse_field(slice_between(text, plus, minus)),
        min_angle: parse_field(slice_after(text, minus)),
    })
}

/// Substring strictly between two delimiter positions
///
/// Empty when either delimiter is absent or the positions are out of order;
/// degenerate layouts degrade to zero fields, they never panic.
fn slice_between(text: &str, start: Option<usize>, end: Option<usize>) -> &str {
    match (start, end) {
        (Some(s), Some(e)) => text.get(s + 1..e).unwrap_or(""),
        _ => "",
    }
}

/// Substring from just past a delimiter to the end of the line
fn slice_after(text: &str, start: Option<usize>) -> &str {
    match start {
        Some(s) => text.get(s + 1..).unwrap_or(""),
        None => "",
    }
}

fn parse_field(raw: &str) -> i32 {
    raw.trim().parse().unwrap_or(0)
}
