#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WatchOutcome {
    /// No audit is pending any more; polling stopped on its own.
    Settled,
    /// Stopped by the caller (Ctrl-C) while audits were still pending.
    Cancelled,
}
