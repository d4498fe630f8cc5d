use std::time::Duration;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use crate::enums::scheduler_action::SchedulerAction;

/// Event sent by an elapsed timer, tagged with the generation it was armed
/// under.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimerFired {
    generation: u64,
}

/// Single-shot tokio timer with at most one outstanding sleep.
///
/// Disarming aborts the sleeping task and bumps the generation, so a
/// firing that was already queued before the disarm is rejected by
/// [`PollTimer::accept`].
pub struct PollTimer {
    generation: u64,
    handle: Option<JoinHandle<()>>,
    sender: mpsc::UnboundedSender<TimerFired>,
    receiver: mpsc::UnboundedReceiver<TimerFired>,
}

impl PollTimer {
    pub fn new() -> Self {
        let (sender, receiver) = mpsc::unbounded_channel();
        Self {
            generation: 0,
            handle: None,
            sender,
            receiver,
        }
    }

    pub fn is_armed(&self) -> bool {
        self.handle.is_some()
    }

    pub fn apply(&mut self, action: SchedulerAction) {
        match action {
            SchedulerAction::Arm(interval) => self.arm(interval),
            SchedulerAction::Disarm => self.disarm(),
            SchedulerAction::NoOp => {}
        }
    }

    pub fn arm(&mut self, interval: Duration) {
        self.disarm();
        self.generation += 1;

        let generation = self.generation;
        let sender = self.sender.clone();
        self.handle = Some(tokio::spawn(async move {
            tokio::time::sleep(interval).await;
            let _ = sender.send(TimerFired { generation });
        }));
        log::debug!("⏲️ Poll timer armed for {:?} (generation {})", interval, generation);
    }

    pub fn disarm(&mut self) {
        if let Some(handle) = self.handle.take() {
            handle.abort();
            log::debug!("Poll timer disarmed (generation {})", self.generation);
        }
        self.generation += 1;
    }

    /// True if `fired` belongs to the currently armed timer. Accepting
    /// consumes the timer.
    pub fn accept(&mut self, fired: TimerFired) -> bool {
        if fired.generation == self.generation && self.handle.is_some() {
            self.handle = None;
            true
        } else {
            log::debug!("Ignoring stale timer event (generation {})", fired.generation);
            false
        }
    }

    /// Resolves when the armed timer fires. Never resolves while disarmed.
    pub async fn wait(&mut self) {
        loop {
            match self.receiver.recv().await {
                Some(fired) if self.accept(fired) => return,
                Some(_) => continue,
                None => std::future::pending::<()>().await,
            }
        }
    }
}

impl Default for PollTimer {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for PollTimer {
    fn drop(&mut self) {
        if let Some(handle) = self.handle.take() {
            handle.abort();
        }
    }
}
