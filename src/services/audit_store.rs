use std::collections::HashMap;
use crate::enums::audit_status::AuditStatus;
use crate::structs::audit::audit::Audit;
use crate::structs::audit::reconcile_report::ReconcileReport;

/// Sequence number handed out when a fetch starts. A fetch result is only
/// applied if no newer write reached the store in the meantime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct FetchTicket(u64);

/// Ordered collection of the audits visible in one dashboard session.
///
/// Writes always replace whole records keyed by id; the store never holds
/// two audits with the same id.
#[derive(Debug, Default)]
pub struct AuditCollectionStore {
    audits: Vec<Audit>,
    issued_sequence: u64,
    applied_sequence: u64,
}

impl AuditCollectionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Swaps the stored collection for `audits`. Audits missing from the
    /// snapshot are dropped; the rest are overwritten in full.
    pub fn replace_all(&mut self, audits: Vec<Audit>) -> ReconcileReport {
        self.applied_sequence = self.issued_sequence;
        self.reconcile(audits)
    }

    pub fn begin_fetch(&mut self) -> FetchTicket {
        self.issued_sequence += 1;
        FetchTicket(self.issued_sequence)
    }

    /// Applies a fetched snapshot unless a newer write already landed.
    /// Returns `None` when the snapshot was discarded as stale.
    pub fn apply_fetch(&mut self, ticket: FetchTicket, audits: Vec<Audit>) -> Option<ReconcileReport> {
        if ticket.0 <= self.applied_sequence {
            log::debug!(
                "Discarding stale audit snapshot (fetch #{}, store at #{})",
                ticket.0,
                self.applied_sequence
            );
            return None;
        }

        self.applied_sequence = ticket.0;
        Some(self.reconcile(audits))
    }

    /// Puts freshly created audits at the front, replacing any stored audit
    /// with the same id. Fetches started before this call become stale.
    pub fn merge_submitted(&mut self, submitted: Vec<Audit>) -> ReconcileReport {
        let mut merged = submitted;
        let stale: Vec<Audit> = self
            .audits
            .iter()
            .filter(|stored| !merged.iter().any(|fresh| fresh.id == stored.id))
            .cloned()
            .collect();
        merged.extend(stale);
        self.replace_all(merged)
    }

    pub fn has_pending(&self) -> bool {
        self.audits.iter().any(Audit::is_pending)
    }

    pub fn pending_count(&self) -> usize {
        self.audits.iter().filter(|a| a.is_pending()).count()
    }

    pub fn snapshot(&self) -> &[Audit] {
        &self.audits
    }

    pub fn get(&self, id: &str) -> Option<&Audit> {
        self.audits.iter().find(|a| a.id == id)
    }

    pub fn len(&self) -> usize {
        self.audits.len()
    }

    pub fn is_empty(&self) -> bool {
        self.audits.is_empty()
    }

    fn reconcile(&mut self, incoming: Vec<Audit>) -> ReconcileReport {
        let previous: HashMap<&str, (AuditStatus, &Audit)> = self.audits
            .iter()
            .map(|a| (a.id.as_str(), (a.status, a)))
            .collect();

        let next = dedupe_by_id(incoming);
        let mut report = ReconcileReport::default();

        for audit in &next {
            match previous.get(audit.id.as_str()) {
                None => report.added += 1,
                Some((_, old)) if *old == audit => report.unchanged += 1,
                Some((old_status, _)) => {
                    report.updated += 1;
                    match (old_status, audit.status) {
                        (AuditStatus::Pending, AuditStatus::Completed) => report.completed += 1,
                        (AuditStatus::Pending, AuditStatus::Failed) => report.failed += 1,
                        (old, AuditStatus::Pending) if old.is_terminal() => {
                            report.regressed += 1;
                            log::warn!(
                                "⚠️ Audit {} went from {} back to pending; keeping the service's answer",
                                audit.id,
                                old
                            );
                        }
                        _ => {}
                    }
                }
            }
        }

        report.removed = previous
            .keys()
            .filter(|id| !next.iter().any(|a| a.id == **id))
            .count();

        self.audits = next;
        report
    }
}

/// Keeps the first position of every id and the last record seen for it.
fn dedupe_by_id(incoming: Vec<Audit>) -> Vec<Audit> {
    let mut positions: HashMap<String, usize> = HashMap::new();
    let mut result: Vec<Audit> = Vec::with_capacity(incoming.len());

    for audit in incoming {
        match positions.get(&audit.id) {
            Some(&index) => result[index] = audit,
            None => {
                positions.insert(audit.id.clone(), result.len());
                result.push(audit);
            }
        }
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;

    fn audit(id: &str, status: AuditStatus) -> Audit {
        Audit {
            status,
            ..Audit::pending(id, &format!("https://{}.example.com", id), "2025-12-19T00:00:00Z")
        }
    }

    fn ids(store: &AuditCollectionStore) -> Vec<&str> {
        store.snapshot().iter().map(|a| a.id.as_str()).collect()
    }

    #[test]
    fn replace_all_drops_absent_and_overwrites_present() {
        let mut store = AuditCollectionStore::new();
        store.replace_all(vec![audit("a", AuditStatus::Pending), audit("b", AuditStatus::Pending)]);

        let mut finished = audit("b", AuditStatus::Completed);
        finished.seo_score = Some(91.0);
        let report = store.replace_all(vec![finished, audit("c", AuditStatus::Pending)]);

        assert_eq!(ids(&store), vec!["b", "c"]);
        assert_eq!(store.get("b").unwrap().seo_score, Some(91.0));
        assert!(store.get("a").is_none());
        assert_eq!(report.added, 1);
        assert_eq!(report.updated, 1);
        assert_eq!(report.completed, 1);
        assert_eq!(report.removed, 1);
    }

    #[test]
    fn submitted_audit_replaces_stored_one_with_same_id() {
        let mut store = AuditCollectionStore::new();
        let mut old = audit("x", AuditStatus::Completed);
        old.url = "https://old.example.com".to_string();
        store.replace_all(vec![old, audit("y", AuditStatus::Completed)]);
        assert!(!store.has_pending());

        let mut fresh = audit("x", AuditStatus::Pending);
        fresh.url = "https://new.example.com".to_string();
        store.merge_submitted(vec![fresh]);

        assert_eq!(ids(&store), vec!["x", "y"]);
        let stored = store.get("x").unwrap();
        assert_eq!(stored.status, AuditStatus::Pending);
        assert_eq!(stored.url, "https://new.example.com");
        assert!(store.has_pending());
    }

    #[test]
    fn replace_all_is_idempotent() {
        let snapshot = vec![audit("a", AuditStatus::Completed), audit("b", AuditStatus::Pending)];
        let mut store = AuditCollectionStore::new();

        store.replace_all(snapshot.clone());
        let first: Vec<Audit> = store.snapshot().to_vec();
        let report = store.replace_all(snapshot);

        assert_eq!(store.snapshot(), first.as_slice());
        assert!(!report.has_changes());
        assert_eq!(report.unchanged, 2);
    }

    #[test]
    fn duplicate_ids_collapse_to_one_entry() {
        let mut store = AuditCollectionStore::new();
        store.replace_all(vec![
            audit("a", AuditStatus::Pending),
            audit("b", AuditStatus::Pending),
            audit("a", AuditStatus::Completed),
        ]);

        assert_eq!(ids(&store), vec!["a", "b"]);
        assert_eq!(store.get("a").unwrap().status, AuditStatus::Completed);
    }

    #[test]
    fn has_pending_tracks_any_pending_audit() {
        let mut store = AuditCollectionStore::new();
        assert!(!store.has_pending());

        store.replace_all(vec![
            audit("a", AuditStatus::Completed),
            audit("b", AuditStatus::Completed),
            audit("c", AuditStatus::Pending),
        ]);
        assert!(store.has_pending());
        assert_eq!(store.pending_count(), 1);

        store.replace_all(vec![
            audit("a", AuditStatus::Completed),
            audit("b", AuditStatus::Completed),
            audit("c", AuditStatus::Failed),
        ]);
        assert!(!store.has_pending());
    }

    #[test]
    fn status_regression_is_accepted_but_reported() {
        let mut store = AuditCollectionStore::new();
        store.replace_all(vec![audit("a", AuditStatus::Completed)]);

        let report = store.replace_all(vec![audit("a", AuditStatus::Pending)]);

        assert_eq!(report.regressed, 1);
        assert!(store.has_pending());
    }

    #[test]
    fn out_of_order_fetch_results_are_discarded() {
        let mut store = AuditCollectionStore::new();
        let older = store.begin_fetch();
        let newer = store.begin_fetch();

        assert!(store.apply_fetch(newer, vec![audit("a", AuditStatus::Completed)]).is_some());
        assert!(store.apply_fetch(older, vec![audit("a", AuditStatus::Pending)]).is_none());
        assert_eq!(store.get("a").unwrap().status, AuditStatus::Completed);
    }

    #[test]
    fn in_order_fetch_results_all_apply() {
        let mut store = AuditCollectionStore::new();
        let first = store.begin_fetch();
        assert!(store.apply_fetch(first, vec![audit("a", AuditStatus::Pending)]).is_some());
        let second = store.begin_fetch();
        assert!(store.apply_fetch(second, vec![audit("a", AuditStatus::Failed)]).is_some());
        assert_eq!(store.get("a").unwrap().status, AuditStatus::Failed);
    }

    #[test]
    fn submission_supersedes_fetch_started_before_it() {
        let mut store = AuditCollectionStore::new();
        store.replace_all(vec![audit("old", AuditStatus::Completed)]);

        let in_flight = store.begin_fetch();
        store.merge_submitted(vec![audit("new", AuditStatus::Pending)]);

        assert_eq!(ids(&store), vec!["new", "old"]);
        assert!(store.apply_fetch(in_flight, vec![audit("old", AuditStatus::Completed)]).is_none());
        assert!(store.get("new").is_some());
    }
}
