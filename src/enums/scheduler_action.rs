use std::time::Duration;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SchedulerAction {
    /// Disarm any outstanding timer, then arm a fresh one.
    Arm(Duration),
    Disarm,
    NoOp,
}
