pub const MAX_PROGRESS: u32 = 100;
pub const XP_PER_LEVEL: u32 = 100;

/// The "LOADING..." bar shown before the player presses start.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Loading {
    active: bool,
    progress: u32,
}

impl Default for Loading {
    fn default() -> Self {
        Self {
            active: true,
            progress: 0,
        }
    }
}

impl Loading {
    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn progress(&self) -> u32 {
        self.progress
    }

    /// Fill the bar by `step`. Returns `true` once the bar is full, at which
    /// point the caller should stop ticking. A full bar does not end loading.
    pub fn tick(&mut self, step: u32) -> bool {
        self.progress = (self.progress + step).min(MAX_PROGRESS);
        self.progress >= MAX_PROGRESS
    }

    /// Returns `false` if the player had already pressed start.
    pub fn start(&mut self) -> bool {
        std::mem::replace(&mut self.active, false)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LevelUp {
    pub level: u32,
    /// Cleared when a previous level-up is still inside its guard window.
    pub announce: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Experience {
    xp: u32,
    level: u32,
    announcing: bool,
}

impl Default for Experience {
    fn default() -> Self {
        Self {
            xp: 0,
            level: 1,
            announcing: false,
        }
    }
}

impl Experience {
    pub fn xp(&self) -> u32 {
        self.xp
    }

    pub fn level(&self) -> u32 {
        self.level
    }

    pub fn percent(&self) -> u32 {
        self.xp * 100 / XP_PER_LEVEL
    }

    /// Add `amount` xp. Reaching the cap wraps xp to zero and bumps the level
    /// by exactly one, however far past the cap the gain went.
    pub fn gain(&mut self, amount: u32) -> Option<LevelUp> {
        let next = self.xp + amount;
        if next < XP_PER_LEVEL {
            self.xp = next;
            return None;
        }
        self.xp = 0;
        self.level += 1;
        let announce = !self.announcing;
        self.announcing = true;
        Some(LevelUp {
            level: self.level,
            announce,
        })
    }

    pub fn is_announcing(&self) -> bool {
        self.announcing
    }

    pub fn release_announcement(&mut self) {
        self.announcing = false;
    }
}
