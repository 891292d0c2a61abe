use std::collections::VecDeque;

use super::clock::Millis;

pub const SECRET_SEQUENCE: [&str; 10] = [
    "ArrowUp",
    "ArrowUp",
    "ArrowDown",
    "ArrowDown",
    "ArrowLeft",
    "ArrowRight",
    "ArrowLeft",
    "ArrowRight",
    "b",
    "a",
];

pub const MAX_PHASE: u8 = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Trigger {
    KeySequence,
    Taps,
}

impl Trigger {
    pub fn describe(self) -> &'static str {
        match self {
            Trigger::KeySequence => "the secret code",
            Trigger::Taps => "rapid taps",
        }
    }
}

/// Trailing window over the most recent key names.
#[derive(Debug, Clone, Default)]
pub struct KeyWindow {
    keys: VecDeque<String>,
}

impl KeyWindow {
    /// Record a key. Returns `true` when the window now spells the secret
    /// sequence, in which case the window is emptied.
    pub fn push(&mut self, key: &str) -> bool {
        self.keys.push_back(key.to_string());
        if self.keys.len() > SECRET_SEQUENCE.len() {
            self.keys.pop_front();
        }
        let matched = self.keys.len() == SECRET_SEQUENCE.len()
            && self.keys.iter().zip(SECRET_SEQUENCE).all(|(k, s)| k == s);
        if matched {
            self.keys.clear();
        }
        matched
    }

    pub fn len(&self) -> usize {
        self.keys.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TapCounter {
    count: u32,
}

impl TapCounter {
    /// Count a tap. Returns `true` and resets when `threshold` is reached.
    pub fn tap(&mut self, threshold: u32) -> bool {
        self.count += 1;
        if self.count >= threshold {
            self.count = 0;
            true
        } else {
            false
        }
    }

    pub fn reset(&mut self) {
        self.count = 0;
    }

    pub fn count(&self) -> u32 {
        self.count
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Egg {
    #[default]
    Idle,
    Active {
        phase: u8,
        trigger: Trigger,
        since: Millis,
    },
}

impl Egg {
    pub fn is_active(&self) -> bool {
        matches!(self, Egg::Active { .. })
    }

    /// 0 while idle, otherwise 1 through [`MAX_PHASE`].
    pub fn phase(&self) -> u8 {
        match self {
            Egg::Idle => 0,
            Egg::Active { phase, .. } => *phase,
        }
    }

    /// Enter phase 1. Ignored (returns `false`) while already active.
    pub fn activate(&mut self, trigger: Trigger, now: Millis) -> bool {
        if self.is_active() {
            return false;
        }
        *self = Egg::Active {
            phase: 1,
            trigger,
            since: now,
        };
        true
    }

    /// Step the phase. Returns `true` while further steps remain.
    pub fn advance(&mut self) -> bool {
        match self {
            Egg::Idle => false,
            Egg::Active { phase, .. } => {
                *phase = (*phase + 1).min(MAX_PHASE);
                *phase < MAX_PHASE
            }
        }
    }

    pub fn expire(&mut self) -> bool {
        std::mem::take(self).is_active()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sequence_matches_trailing_window() {
        let mut window = KeyWindow::default();
        // noise first, then the real thing
        for key in ["x", "ArrowUp", "Enter"] {
            assert!(!window.push(key));
        }
        let (last, rest) = SECRET_SEQUENCE.split_last().expect("sequence is non-empty");
        for key in rest {
            assert!(!window.push(key));
        }
        assert!(window.push(last));
        assert!(window.is_empty());
    }

    #[test]
    fn test_window_is_bounded() {
        let mut window = KeyWindow::default();
        for _ in 0..25 {
            window.push("ArrowUp");
        }
        assert_eq!(window.len(), SECRET_SEQUENCE.len());
    }

    #[test]
    fn test_wrong_case_does_not_match() {
        let mut window = KeyWindow::default();
        let mut matched = false;
        for key in &SECRET_SEQUENCE[..8] {
            matched |= window.push(key);
        }
        matched |= window.push("B");
        matched |= window.push("A");
        assert!(!matched);
    }

    #[test]
    fn test_tap_counter_fires_on_threshold() {
        let mut taps = TapCounter::default();
        for _ in 0..4 {
            assert!(!taps.tap(5));
        }
        assert_eq!(taps.count(), 4);
        assert!(taps.tap(5));
        assert_eq!(taps.count(), 0);
    }

    #[test]
    fn test_egg_guard_and_phases() {
        let mut egg = Egg::default();
        assert_eq!(egg.phase(), 0);
        assert!(egg.activate(Trigger::Taps, 10));
        assert!(!egg.activate(Trigger::KeySequence, 20));
        assert_eq!(
            egg,
            Egg::Active {
                phase: 1,
                trigger: Trigger::Taps,
                since: 10
            }
        );

        assert!(egg.advance());
        assert!(egg.advance());
        assert!(egg.advance());
        assert!(!egg.advance());
        assert_eq!(egg.phase(), MAX_PHASE);
        assert!(!egg.advance());
        assert_eq!(egg.phase(), MAX_PHASE);

        assert!(egg.expire());
        assert_eq!(egg, Egg::Idle);
        assert!(!egg.expire());
    }
}
