use std::time::Duration;
use crate::config::constants::DEFAULT_POLL_INTERVAL_MS;
use crate::enums::scheduler_action::SchedulerAction;
use crate::enums::scheduler_state::SchedulerState;
use crate::services::audit_store::AuditCollectionStore;

/// Decides whether a refresh should be scheduled for the current
/// collection. Holds no timer itself; callers apply the returned
/// [`SchedulerAction`] to a timer such as
/// [`crate::services::poll_timer::PollTimer`].
#[derive(Debug, Clone)]
pub struct PollingScheduler {
    state: SchedulerState,
    interval: Duration,
}

impl PollingScheduler {
    pub fn new(interval: Duration) -> Self {
        Self {
            state: SchedulerState::Idle,
            interval,
        }
    }

    pub fn state(&self) -> SchedulerState {
        self.state
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    pub fn is_armed(&self) -> bool {
        self.state == SchedulerState::Armed
    }

    /// Transition table. Re-arming while armed replaces the outstanding
    /// timer, so there is never more than one.
    pub fn next_action(state: SchedulerState, has_pending: bool, interval: Duration) -> SchedulerAction {
        match (state, has_pending) {
            (_, true) => SchedulerAction::Arm(interval),
            (SchedulerState::Armed, false) => SchedulerAction::Disarm,
            (SchedulerState::Idle, false) => SchedulerAction::NoOp,
        }
    }

    /// Run after every change to the collection, including the first load.
    pub fn evaluate(&mut self, store: &AuditCollectionStore) -> SchedulerAction {
        self.evaluate_pending(store.has_pending())
    }

    pub fn evaluate_pending(&mut self, has_pending: bool) -> SchedulerAction {
        let action = Self::next_action(self.state, has_pending, self.interval);
        self.state = match action {
            SchedulerAction::Arm(_) => SchedulerState::Armed,
            SchedulerAction::Disarm => SchedulerState::Idle,
            SchedulerAction::NoOp => self.state,
        };
        action
    }

    /// The timer is consumed by firing. Returns `false` for a firing that
    /// arrives while idle, which must not trigger a refresh.
    pub fn on_timer_fired(&mut self) -> bool {
        match self.state {
            SchedulerState::Armed => {
                self.state = SchedulerState::Idle;
                true
            }
            SchedulerState::Idle => false,
        }
    }

    pub fn teardown(&mut self) -> SchedulerAction {
        let action = match self.state {
            SchedulerState::Armed => SchedulerAction::Disarm,
            SchedulerState::Idle => SchedulerAction::NoOp,
        };
        self.state = SchedulerState::Idle;
        action
    }
}

impl Default for PollingScheduler {
    fn default() -> Self {
        Self::new(Duration::from_millis(DEFAULT_POLL_INTERVAL_MS))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::enums::audit_status::AuditStatus;
    use crate::structs::audit::audit::Audit;

    const INTERVAL: Duration = Duration::from_millis(5000);

    fn audit(id: &str, status: AuditStatus) -> Audit {
        Audit {
            status,
            ..Audit::pending(id, "https://example.com", "2025-12-19T00:00:00Z")
        }
    }

    #[test]
    fn transition_table() {
        use SchedulerAction::*;
        use SchedulerState::*;

        assert_eq!(PollingScheduler::next_action(Idle, true, INTERVAL), Arm(INTERVAL));
        assert_eq!(PollingScheduler::next_action(Armed, true, INTERVAL), Arm(INTERVAL));
        assert_eq!(PollingScheduler::next_action(Armed, false, INTERVAL), Disarm);
        assert_eq!(PollingScheduler::next_action(Idle, false, INTERVAL), NoOp);
    }

    #[test]
    fn default_interval_is_five_seconds() {
        assert_eq!(PollingScheduler::default().interval(), Duration::from_millis(5000));
    }

    #[test]
    fn all_terminal_collection_stays_idle() {
        let mut store = AuditCollectionStore::new();
        store.replace_all(vec![audit("a", AuditStatus::Completed), audit("b", AuditStatus::Failed)]);

        let mut scheduler = PollingScheduler::new(INTERVAL);
        assert_eq!(scheduler.evaluate(&store), SchedulerAction::NoOp);
        assert_eq!(scheduler.state(), SchedulerState::Idle);
    }

    #[test]
    fn one_pending_audit_arms() {
        let mut store = AuditCollectionStore::new();
        store.replace_all(vec![
            audit("a", AuditStatus::Completed),
            audit("b", AuditStatus::Completed),
            audit("c", AuditStatus::Pending),
        ]);

        let mut scheduler = PollingScheduler::new(INTERVAL);
        assert_eq!(scheduler.evaluate(&store), SchedulerAction::Arm(INTERVAL));
        assert!(scheduler.is_armed());

        store.replace_all(vec![
            audit("a", AuditStatus::Completed),
            audit("b", AuditStatus::Completed),
            audit("c", AuditStatus::Completed),
        ]);
        assert_eq!(scheduler.evaluate(&store), SchedulerAction::Disarm);
        assert!(!scheduler.is_armed());
    }

    #[test]
    fn loop_quiets_itself_once_pending_audit_completes() {
        let mut store = AuditCollectionStore::new();
        store.replace_all(vec![audit("a", AuditStatus::Pending)]);
        let mut scheduler = PollingScheduler::new(INTERVAL);
        scheduler.evaluate(&store);

        assert!(scheduler.on_timer_fired());
        store.replace_all(vec![audit("a", AuditStatus::Completed)]);

        assert_eq!(scheduler.evaluate(&store), SchedulerAction::NoOp);
        assert_eq!(scheduler.state(), SchedulerState::Idle);
        assert!(!scheduler.on_timer_fired());
    }

    #[test]
    fn failed_refresh_keeps_polling() {
        let mut store = AuditCollectionStore::new();
        store.replace_all(vec![audit("a", AuditStatus::Pending)]);
        let mut scheduler = PollingScheduler::new(INTERVAL);
        scheduler.evaluate(&store);

        // refresh failed: collection unchanged
        assert!(scheduler.on_timer_fired());
        assert_eq!(scheduler.evaluate(&store), SchedulerAction::Arm(INTERVAL));
    }

    #[test]
    fn teardown_disarms_only_when_armed() {
        let mut scheduler = PollingScheduler::new(INTERVAL);
        assert_eq!(scheduler.teardown(), SchedulerAction::NoOp);

        scheduler.evaluate_pending(true);
        assert_eq!(scheduler.teardown(), SchedulerAction::Disarm);
        assert_eq!(scheduler.state(), SchedulerState::Idle);
        assert!(!scheduler.on_timer_fired());
    }
}
