use std::sync::atomic::{AtomicU64, Ordering};

use super::clock::TimerId;

/// Unique for the lifetime of the process, across every controller instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NotificationId(u64);

impl NotificationId {
    pub fn next() -> Self {
        static COUNTER: AtomicU64 = AtomicU64::new(0);
        Self(COUNTER.fetch_add(1, Ordering::Relaxed))
    }

    pub fn get(self) -> u64 {
        self.0
    }
}

/// Only affects how a toast is coloured.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NotificationKind {
    #[default]
    Info,
    Achievement,
    Warning,
}

impl NotificationKind {
    pub fn class(self) -> &'static str {
        match self {
            NotificationKind::Info => "border-cyan-400 text-cyan-300",
            NotificationKind::Achievement => "border-yellow-400 text-yellow-300",
            NotificationKind::Warning => "border-red-400 text-red-300",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub id: NotificationId,
    pub message: String,
    pub kind: NotificationKind,
}

#[derive(Debug, Clone)]
struct Entry {
    notification: Notification,
    expiry: TimerId,
}

/// Toasts currently on screen, oldest first.
///
/// Each entry remembers the timer that will remove it, so dismissing one
/// toast early cancels exactly that timer and leaves the rest alone.
#[derive(Debug, Clone, Default)]
pub struct Notifications {
    entries: Vec<Entry>,
}

impl Notifications {
    pub fn push(&mut self, notification: Notification, expiry: TimerId) {
        self.entries.push(Entry {
            notification,
            expiry,
        });
    }

    /// Removes the notification and hands back its expiry timer.
    pub fn remove(&mut self, id: NotificationId) -> Option<TimerId> {
        let pos = self
            .entries
            .iter()
            .position(|e| e.notification.id == id)?;
        Some(self.entries.remove(pos).expiry)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Notification> {
        self.entries.iter().map(|e| &e.notification)
    }

    pub fn to_vec(&self) -> Vec<Notification> {
        self.iter().cloned().collect()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::clock::{TimerKind, Timers};

    fn note(message: &str) -> Notification {
        Notification {
            id: NotificationId::next(),
            message: message.to_string(),
            kind: NotificationKind::Info,
        }
    }

    #[test]
    fn test_ids_are_monotonic() {
        let a = NotificationId::next();
        let b = NotificationId::next();
        assert!(b > a);
        assert_ne!(a.get(), b.get());
    }

    #[test]
    fn test_insertion_order_and_removal() {
        let mut timers = Timers::new();
        let mut list = Notifications::default();
        let first = note("first");
        let second = note("second");
        let first_id = first.id;
        let first_timer = timers.after(0, 3_000, TimerKind::NotificationExpiry(first.id));
        list.push(first, first_timer);
        let second_timer = timers.after(0, 3_000, TimerKind::NotificationExpiry(second.id));
        list.push(second, second_timer);

        let messages = list.iter().map(|n| n.message.as_str()).collect::<Vec<_>>();
        assert_eq!(messages, vec!["first", "second"]);

        assert_eq!(list.remove(first_id), Some(first_timer));
        assert_eq!(list.remove(first_id), None);
        assert_eq!(list.len(), 1);
        assert_eq!(list.to_vec()[0].message, "second");
    }
}
