use std::cell::{Ref, RefCell};
use std::future::Future;
use std::sync::Arc;
use std::time::Duration;
use crate::enums::scheduler_action::SchedulerAction;
use crate::enums::scheduler_state::SchedulerState;
use crate::enums::watch_outcome::WatchOutcome;
use crate::errors::SiteSageResult;
use crate::services::audit_normalizer::normalize_all;
use crate::services::audit_store::AuditCollectionStore;
use crate::services::poll_timer::PollTimer;
use crate::services::polling_scheduler::PollingScheduler;
use crate::structs::audit::audit::Audit;
use crate::structs::audit::audit_request::AuditRequest;
use crate::structs::audit::canonical_audit_view::CanonicalAuditView;
use crate::structs::audit::reconcile_report::ReconcileReport;
use crate::traits::audit_service::AuditService;

enum WatchEvent {
    TimerFired,
    Shutdown,
}

/// One dashboard visit: owns the audit collection, the polling scheduler
/// and its timer. Created on entry and dropped (or torn down) on exit.
///
/// Runs on a single task. [`DashboardSession::fetch`] only needs `&self`,
/// so a manual refresh may overlap a scheduled one; stale snapshots are
/// discarded by the store.
pub struct DashboardSession {
    service: Arc<dyn AuditService>,
    store: RefCell<AuditCollectionStore>,
    scheduler: PollingScheduler,
    timer: PollTimer,
}

impl DashboardSession {
    pub fn new(service: Arc<dyn AuditService>, interval: Duration) -> Self {
        Self {
            service,
            store: RefCell::new(AuditCollectionStore::new()),
            scheduler: PollingScheduler::new(interval),
            timer: PollTimer::new(),
        }
    }

    pub fn store(&self) -> Ref<'_, AuditCollectionStore> {
        self.store.borrow()
    }

    pub fn snapshot(&self) -> Vec<Audit> {
        self.store.borrow().snapshot().to_vec()
    }

    pub fn views(&self) -> Vec<CanonicalAuditView> {
        normalize_all(self.store.borrow().snapshot())
    }

    pub fn scheduler_state(&self) -> SchedulerState {
        self.scheduler.state()
    }

    pub fn is_polling(&self) -> bool {
        self.scheduler.is_armed()
    }

    /// Lists audits and applies the snapshot unless a newer write beat it.
    pub async fn fetch(&self) -> SiteSageResult<Option<ReconcileReport>> {
        let ticket = self.store.borrow_mut().begin_fetch();
        let audits = self.service.list().await?;
        let report = self.store.borrow_mut().apply_fetch(ticket, audits);

        if let Some(report) = &report {
            log::debug!(
                "Audit snapshot applied: +{} ~{} -{} ({} finished)",
                report.added,
                report.updated,
                report.removed,
                report.finished()
            );
        }
        Ok(report)
    }

    /// Fetch, then re-evaluate the schedule. A failed fetch leaves the
    /// collection as it was, so polling continues if anything is pending.
    pub async fn refresh(&mut self) -> SiteSageResult<Option<ReconcileReport>> {
        let result = self.fetch().await;
        self.settle(result)
    }

    fn settle(
        &mut self,
        result: SiteSageResult<Option<ReconcileReport>>,
    ) -> SiteSageResult<Option<ReconcileReport>> {
        if let Err(e) = &result {
            log::warn!("⚠️ Failed to refresh audits: {}", e);
        }
        self.reschedule();
        result
    }

    /// Submits new audits and shows them immediately.
    pub async fn submit(&mut self, request: AuditRequest) -> SiteSageResult<Vec<Audit>> {
        let created = self.service.submit(request).await?;
        self.store.borrow_mut().merge_submitted(created.clone());
        self.reschedule();
        Ok(created)
    }

    pub fn reschedule(&mut self) -> SchedulerAction {
        let action = self.scheduler.evaluate(&self.store.borrow());
        self.timer.apply(action);
        action
    }

    /// Keeps refreshing on the scheduler's interval until nothing is pending
    /// or `shutdown` resolves. `on_update` runs after every applied refresh.
    ///
    /// `shutdown` is also raced against an in-flight fetch, so a hung
    /// request never delays teardown.
    pub async fn watch<S, F>(&mut self, shutdown: S, mut on_update: F) -> WatchOutcome
    where
        S: Future<Output = ()>,
        F: FnMut(&[Audit], &ReconcileReport),
    {
        tokio::pin!(shutdown);
        self.reschedule();

        while self.scheduler.is_armed() {
            let event = tokio::select! {
                _ = self.timer.wait() => WatchEvent::TimerFired,
                _ = &mut shutdown => WatchEvent::Shutdown,
            };

            match event {
                WatchEvent::TimerFired => {
                    if !self.scheduler.on_timer_fired() {
                        continue;
                    }
                    let fetched = tokio::select! {
                        result = self.fetch() => Some(result),
                        _ = &mut shutdown => None,
                    };

                    match fetched {
                        Some(result) => {
                            if let Ok(Some(report)) = self.settle(result) {
                                on_update(self.store.borrow().snapshot(), &report);
                            }
                        }
                        None => {
                            self.teardown();
                            return WatchOutcome::Cancelled;
                        }
                    }
                }
                WatchEvent::Shutdown => {
                    self.teardown();
                    return WatchOutcome::Cancelled;
                }
            }
        }

        WatchOutcome::Settled
    }

    /// Disarms the timer unconditionally.
    pub fn teardown(&mut self) {
        let action = self.scheduler.teardown();
        self.timer.apply(action);
        self.timer.disarm();
    }
}

impl Drop for DashboardSession {
    fn drop(&mut self) {
        self.teardown();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::enums::audit_status::AuditStatus;
    use crate::errors::SiteSageError;
    use crate::traits::audit_service::MockAuditService;
    use async_trait::async_trait;
    use mockall::Sequence;
    use std::sync::atomic::{AtomicUsize, Ordering};

    const INTERVAL: Duration = Duration::from_millis(5000);

    fn audit(id: &str, status: AuditStatus) -> Audit {
        Audit {
            status,
            ..Audit::pending(id, "https://example.com", "2025-12-19T00:00:00Z")
        }
    }

    fn session(service: MockAuditService) -> DashboardSession {
        DashboardSession::new(Arc::new(service), INTERVAL)
    }

    #[tokio::test(start_paused = true)]
    async fn initial_load_with_pending_audit_arms() {
        let mut service = MockAuditService::new();
        service
            .expect_list()
            .times(1)
            .returning(|| Ok(vec![audit("a", AuditStatus::Completed), audit("b", AuditStatus::Pending)]));

        let mut session = session(service);
        session.refresh().await.unwrap();

        assert_eq!(session.scheduler_state(), SchedulerState::Armed);
        assert_eq!(session.store().len(), 2);
    }

    #[tokio::test(start_paused = true)]
    async fn initial_load_with_terminal_audits_stays_idle() {
        let mut service = MockAuditService::new();
        service
            .expect_list()
            .times(1)
            .returning(|| Ok(vec![audit("a", AuditStatus::Completed), audit("b", AuditStatus::Failed)]));

        let mut session = session(service);
        session.refresh().await.unwrap();

        assert_eq!(session.scheduler_state(), SchedulerState::Idle);
        assert_eq!(session.watch(std::future::pending(), |_, _| {}).await, WatchOutcome::Settled);
    }

    #[tokio::test(start_paused = true)]
    async fn watch_polls_until_pending_audit_completes() {
        let mut seq = Sequence::new();
        let mut service = MockAuditService::new();
        service
            .expect_list()
            .times(1)
            .in_sequence(&mut seq)
            .returning(|| Ok(vec![audit("a", AuditStatus::Pending)]));
        service
            .expect_list()
            .times(1)
            .in_sequence(&mut seq)
            .returning(|| Ok(vec![audit("a", AuditStatus::Pending)]));
        service
            .expect_list()
            .times(1)
            .in_sequence(&mut seq)
            .returning(|| Ok(vec![audit("a", AuditStatus::Completed)]));

        let mut session = session(service);
        session.refresh().await.unwrap();

        let started = tokio::time::Instant::now();
        let mut updates = 0;
        let outcome = session.watch(std::future::pending(), |_, _| updates += 1).await;

        assert_eq!(outcome, WatchOutcome::Settled);
        assert_eq!(updates, 2);
        assert!(started.elapsed() >= INTERVAL * 2);
        assert_eq!(session.scheduler_state(), SchedulerState::Idle);
    }

    #[tokio::test(start_paused = true)]
    async fn refresh_failure_keeps_collection_and_polling() {
        let mut seq = Sequence::new();
        let mut service = MockAuditService::new();
        service
            .expect_list()
            .times(1)
            .in_sequence(&mut seq)
            .returning(|| Ok(vec![audit("a", AuditStatus::Pending)]));
        service
            .expect_list()
            .times(1)
            .in_sequence(&mut seq)
            .returning(|| Err(SiteSageError::service_error("list audits", 503, "maintenance")));
        service
            .expect_list()
            .times(1)
            .in_sequence(&mut seq)
            .returning(|| Ok(vec![audit("a", AuditStatus::Failed)]));

        let mut session = session(service);
        session.refresh().await.unwrap();

        let failed = session.refresh().await;
        assert!(failed.is_err());
        assert_eq!(session.store().len(), 1);
        assert!(session.is_polling());

        let outcome = session.watch(std::future::pending(), |_, _| {}).await;
        assert_eq!(outcome, WatchOutcome::Settled);
        assert_eq!(session.snapshot()[0].status, AuditStatus::Failed);
    }

    #[tokio::test(start_paused = true)]
    async fn shutdown_tears_down_before_next_poll() {
        let mut service = MockAuditService::new();
        service
            .expect_list()
            .times(1)
            .returning(|| Ok(vec![audit("a", AuditStatus::Pending)]));

        let mut session = session(service);
        session.refresh().await.unwrap();

        let shutdown = tokio::time::sleep(Duration::from_millis(1000));
        let outcome = session.watch(shutdown, |_, _| {}).await;

        assert_eq!(outcome, WatchOutcome::Cancelled);
        assert_eq!(session.scheduler_state(), SchedulerState::Idle);

        // no further list() call even after the interval passes
        tokio::time::sleep(INTERVAL * 2).await;
    }

    /// Answers the first `list` with one pending audit, then never again.
    #[derive(Default)]
    struct StallingService {
        calls: AtomicUsize,
    }

    #[async_trait]
    impl AuditService for StallingService {
        async fn submit(&self, _request: AuditRequest) -> SiteSageResult<Vec<Audit>> {
            Ok(Vec::new())
        }

        async fn list(&self) -> SiteSageResult<Vec<Audit>> {
            if self.calls.fetch_add(1, Ordering::SeqCst) == 0 {
                return Ok(vec![audit("a", AuditStatus::Pending)]);
            }
            std::future::pending().await
        }

        async fn get(&self, id: &str) -> SiteSageResult<Audit> {
            Ok(audit(id, AuditStatus::Pending))
        }
    }

    #[tokio::test(start_paused = true)]
    async fn shutdown_interrupts_hung_poll() {
        let service = Arc::new(StallingService::default());
        let mut session = DashboardSession::new(service.clone(), INTERVAL);
        session.refresh().await.unwrap();

        // fires while the second list() is still outstanding
        let shutdown = tokio::time::sleep(Duration::from_millis(6000));
        let outcome = tokio::time::timeout(Duration::from_secs(3600), session.watch(shutdown, |_, _| {}))
            .await
            .expect("watch should return once shutdown resolves");

        assert_eq!(outcome, WatchOutcome::Cancelled);
        assert_eq!(session.scheduler_state(), SchedulerState::Idle);
        assert_eq!(service.calls.load(Ordering::SeqCst), 2);

        tokio::time::sleep(INTERVAL * 2).await;
        assert_eq!(service.calls.load(Ordering::SeqCst), 2);
        assert_eq!(session.store().len(), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn submit_shows_new_audits_and_arms() {
        let mut service = MockAuditService::new();
        service
            .expect_submit()
            .withf(|request| request.urls == vec!["https://example.com".to_string()])
            .times(1)
            .returning(|_| Ok(vec![audit("new", AuditStatus::Pending)]));

        let mut session = session(service);
        let created = session
            .submit(AuditRequest::new(vec!["https://example.com".to_string()]))
            .await
            .unwrap();

        assert_eq!(created.len(), 1);
        assert_eq!(session.views()[0].status_label(), "Processing");
        assert!(session.is_polling());
    }

    #[tokio::test(start_paused = true)]
    async fn failed_submission_leaves_session_untouched() {
        let mut service = MockAuditService::new();
        service
            .expect_submit()
            .returning(|_| Err(SiteSageError::auth_error("submit audits", "no stored credential")));

        let mut session = session(service);
        let error = session
            .submit(AuditRequest::new(vec!["https://example.com".to_string()]))
            .await
            .unwrap_err();

        assert!(error.is_auth_error());
        assert!(session.store().is_empty());
        assert!(!session.is_polling());
    }
}
