#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SchedulerState {
    /// No timer armed.
    #[default]
    Idle,
    /// Exactly one timer outstanding.
    Armed,
}
