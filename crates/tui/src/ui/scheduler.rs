//! Deadline scheduler for the wizard's two deferred actions.
//!
//! Both deferrals are fire-and-forget: a focus shift scheduled to land after
//! the slot array is committed and rendered, and the paste-notice auto-clear.
//! The runtime polls `take_due` from its tick loop; tests drive the same API
//! with explicit instants, so no real timers are involved.

use std::time::{Duration, Instant};

/// Short gap so the focus target exists (post-commit render) before the
/// shift lands.
pub const FOCUS_SHIFT_DELAY: Duration = Duration::from_millis(50);
/// Display lifetime of the paste-feedback notice.
pub const PASTE_NOTICE_TTL: Duration = Duration::from_millis(3500);

/// The deferred actions the wizard can schedule.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeferredAction {
    /// Move focus to the first word slot.
    FocusFirstSlot,
    /// Drop the paste-feedback notice, whatever it currently says.
    ClearPasteNotice,
}

/// Accumulates deadlines and releases actions once they fall due.
///
/// Pending entries are never cancelled: a newer paste arriving before an
/// older clear fires simply leaves the old deadline to fire later against
/// whatever state then exists.
#[derive(Debug, Default)]
pub struct TimerScheduler {
    pending: Vec<(Instant, DeferredAction)>,
}

impl TimerScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Schedules `action` to fire `delay` from now.
    pub fn schedule(&mut self, action: DeferredAction, delay: Duration) {
        self.schedule_from(Instant::now(), action, delay);
    }

    /// Schedules `action` relative to an explicit `now`.
    pub fn schedule_from(&mut self, now: Instant, action: DeferredAction, delay: Duration) {
        self.pending.push((now + delay, action));
    }

    pub fn has_pending(&self) -> bool {
        !self.pending.is_empty()
    }

    /// Removes and returns every action whose deadline is at or before `now`,
    /// in the order they were scheduled.
    pub fn take_due(&mut self, now: Instant) -> Vec<DeferredAction> {
        let mut due = Vec::new();
        self.pending.retain(|(deadline, action)| {
            if *deadline <= now {
                due.push(*action);
                false
            } else {
                true
            }
        });
        due
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nothing_fires_before_its_deadline() {
        let start = Instant::now();
        let mut scheduler = TimerScheduler::new();
        scheduler.schedule_from(start, DeferredAction::ClearPasteNotice, PASTE_NOTICE_TTL);

        assert!(scheduler.take_due(start + Duration::from_millis(3499)).is_empty());
        assert!(scheduler.has_pending());
        assert_eq!(
            scheduler.take_due(start + PASTE_NOTICE_TTL),
            vec![DeferredAction::ClearPasteNotice]
        );
        assert!(!scheduler.has_pending());
    }

    #[test]
    fn due_actions_drain_in_schedule_order() {
        let start = Instant::now();
        let mut scheduler = TimerScheduler::new();
        scheduler.schedule_from(start, DeferredAction::FocusFirstSlot, FOCUS_SHIFT_DELAY);
        scheduler.schedule_from(start, DeferredAction::ClearPasteNotice, PASTE_NOTICE_TTL);

        assert_eq!(
            scheduler.take_due(start + Duration::from_millis(100)),
            vec![DeferredAction::FocusFirstSlot]
        );
        assert_eq!(
            scheduler.take_due(start + Duration::from_secs(10)),
            vec![DeferredAction::ClearPasteNotice]
        );
    }

    #[test]
    fn overlapping_notices_each_keep_their_own_deadline() {
        let start = Instant::now();
        let mut scheduler = TimerScheduler::new();
        scheduler.schedule_from(start, DeferredAction::ClearPasteNotice, PASTE_NOTICE_TTL);
        scheduler.schedule_from(start + Duration::from_secs(1), DeferredAction::ClearPasteNotice, PASTE_NOTICE_TTL);

        assert_eq!(scheduler.take_due(start + PASTE_NOTICE_TTL).len(), 1);
        assert!(scheduler.has_pending());
        assert_eq!(
            scheduler.take_due(start + Duration::from_secs(1) + PASTE_NOTICE_TTL).len(),
            1
        );
    }
}
