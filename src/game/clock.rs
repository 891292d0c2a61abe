use super::notify::NotificationId;

/// Milliseconds elapsed since the controller was mounted.
pub type Millis = u64;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TimerId(u64);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerKind {
    LoadingTick,
    XpTick,
    LevelUpGuard,
    NotificationExpiry(NotificationId),
    TapReset,
    EggPhase,
    EggExpiry,
    SwipeHintClear,
}

#[derive(Debug, Clone)]
struct Entry {
    id: TimerId,
    kind: TimerKind,
    due: Millis,
    period: Option<Millis>,
}

/// Every pending timeout and interval owned by one controller.
///
/// Nothing here touches a real clock. The owner feeds in the current time and
/// pulls out whatever has come due, which keeps the whole lifecycle
/// deterministic under test and trivially cancellable on teardown.
#[derive(Debug, Clone, Default)]
pub struct Timers {
    next_id: u64,
    entries: Vec<Entry>,
}

impl Timers {
    pub fn new() -> Self {
        Self::default()
    }

    /// Schedule a one-shot timer `delay` ms after `now`.
    pub fn after(&mut self, now: Millis, delay: Millis, kind: TimerKind) -> TimerId {
        self.insert(now.saturating_add(delay), None, kind)
    }

    /// Schedule a repeating timer, first firing one `period` after `now`.
    pub fn every(&mut self, now: Millis, period: Millis, kind: TimerKind) -> TimerId {
        // a zero period would spin forever in pop_due
        let period = period.max(1);
        self.insert(now.saturating_add(period), Some(period), kind)
    }

    fn insert(&mut self, due: Millis, period: Option<Millis>, kind: TimerKind) -> TimerId {
        let id = TimerId(self.next_id);
        self.next_id += 1;
        self.entries.push(Entry {
            id,
            kind,
            due,
            period,
        });
        id
    }

    pub fn cancel(&mut self, id: TimerId) -> bool {
        if let Some(pos) = self.entries.iter().position(|e| e.id == id) {
            self.entries.remove(pos);
            true
        } else {
            false
        }
    }

    /// Cancels `slot` if it holds a timer and leaves it empty.
    pub fn cancel_slot(&mut self, slot: &mut Option<TimerId>) {
        if let Some(id) = slot.take() {
            self.cancel(id);
        }
    }

    pub fn next_deadline(&self) -> Option<Millis> {
        self.entries.iter().map(|e| e.due).min()
    }

    /// Removes and returns the earliest timer due at or before `now`.
    ///
    /// Ties go to whichever timer was scheduled first. Repeating timers are
    /// re-armed one period after the deadline they just hit, so a late pump
    /// still replays every missed tick in order.
    pub fn pop_due(&mut self, now: Millis) -> Option<(Millis, TimerKind)> {
        let pos = self
            .entries
            .iter()
            .enumerate()
            .filter(|(_, e)| e.due <= now)
            .min_by_key(|(_, e)| (e.due, e.id))
            .map(|(i, _)| i)?;
        let Entry {
            due, kind, period, ..
        } = self.entries[pos];
        match period {
            Some(period) => self.entries[pos].due = due.saturating_add(period),
            None => {
                self.entries.remove(pos);
            }
        }
        Some((due, kind))
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
