use std::time::Duration;

/// ## Resource ceilings
///
/// Checked once per executed token. Breaching any of them ends the run.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Limits {
    /// Values on all stacks, callers included.
    pub max_stack: usize,
    /// Time spent inside `run`, summed across resumptions.
    pub max_duration: Duration,
    /// Nested user function calls.
    pub max_calls: usize,
}

impl Limits {
    pub const MAX_STACK: usize = u16::MAX as usize;
    pub const MAX_DURATION: Duration = Duration::from_secs(5);
    pub const MAX_CALLS: usize = 1024;
}

impl Default for Limits {
    fn default() -> Limits {
        Limits {
            max_stack: Limits::MAX_STACK,
            max_duration: Limits::MAX_DURATION,
            max_calls: Limits::MAX_CALLS,
        }
    }
}
