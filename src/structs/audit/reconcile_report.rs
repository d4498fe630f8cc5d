/// What one reconciliation pass changed in the collection.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReconcileReport {
    pub added: usize,
    pub updated: usize,
    pub unchanged: usize,
    pub removed: usize,
    /// Audits that moved from pending to completed.
    pub completed: usize,
    /// Audits that moved from pending to failed.
    pub failed: usize,
    /// Terminal audits the service reported as pending again.
    pub regressed: usize,
}

impl ReconcileReport {
    pub fn has_changes(&self) -> bool {
        self.added + self.updated + self.removed > 0
    }

    pub fn finished(&self) -> usize {
        self.completed + self.failed
    }
}
