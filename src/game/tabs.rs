/// Which content panel a tab shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TabKind {
    Overview,
    Skills,
    Projects,
    Experience,
    Certifications,
    Contact,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tab {
    pub kind: TabKind,
    pub id: &'static str,
    pub title: &'static str,
    pub icon: &'static str,
}

/// Order matters: swipes and the radial menu walk this table.
pub static TABS: [Tab; 6] = [
    Tab {
        kind: TabKind::Overview,
        id: "overview",
        title: "Overview",
        icon: "🎮",
    },
    Tab {
        kind: TabKind::Skills,
        id: "skills",
        title: "Skills",
        icon: "⚔️",
    },
    Tab {
        kind: TabKind::Projects,
        id: "projects",
        title: "Projects",
        icon: "🗺️",
    },
    Tab {
        kind: TabKind::Experience,
        id: "experience",
        title: "Experience",
        icon: "📜",
    },
    Tab {
        kind: TabKind::Certifications,
        id: "certifications",
        title: "Certifications",
        icon: "🏅",
    },
    Tab {
        kind: TabKind::Contact,
        id: "contact",
        title: "Contact",
        icon: "✉️",
    },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TabNav {
    index: usize,
}

impl TabNav {
    pub fn current(&self) -> &'static Tab {
        &TABS[self.index]
    }

    pub fn index(&self) -> usize {
        self.index
    }

    /// Step through the table, wrapping at both ends.
    pub fn navigate(&mut self, delta: i32) -> &'static Tab {
        let count = TABS.len() as i64;
        let next = (self.index as i64 + i64::from(delta)).rem_euclid(count);
        self.index = next as usize;
        self.current()
    }

    /// Returns `false` and leaves the selection alone for an unknown id.
    pub fn select(&mut self, id: &str) -> bool {
        match TABS.iter().position(|t| t.id == id) {
            Some(index) => {
                self.index = index;
                true
            }
            None => false,
        }
    }

    /// Degrees to turn the radial menu so the active tab sits on top.
    pub fn rotation(&self) -> f64 {
        self.index as f64 * (360.0 / TABS.len() as f64) * -1.0
    }
}

/// Offset of the `index`-th of `count` icons on a circle of `radius`,
/// starting at twelve o'clock and going clockwise (screen coordinates).
pub fn radial_position(index: usize, count: usize, radius: f64) -> (f64, f64) {
    if count == 0 {
        return (0.0, 0.0);
    }
    let angle = (index as f64 / count as f64) * std::f64::consts::TAU - std::f64::consts::FRAC_PI_2;
    (radius * angle.cos(), radius * angle.sin())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_navigate_wraps_both_ways() {
        let mut nav = TabNav::default();
        assert_eq!(nav.navigate(-1).id, "contact");
        assert_eq!(nav.navigate(1).id, "overview");
        assert_eq!(nav.navigate(1).id, "skills");
    }

    #[test]
    fn test_full_cycle_returns_to_start() {
        for start in 0..TABS.len() {
            for laps in 1..4 {
                let mut nav = TabNav::default();
                nav.navigate(start as i32);
                for _ in 0..TABS.len() * laps {
                    nav.navigate(1);
                }
                assert_eq!(nav.index(), start);
            }
        }
    }

    #[test]
    fn test_select_and_rotation() {
        let mut nav = TabNav::default();
        assert_eq!(nav.rotation(), 0.0);
        assert!(nav.select("projects"));
        assert_eq!(nav.index(), 2);
        assert_eq!(nav.rotation(), -120.0);

        assert!(!nav.select("inventory"));
        assert_eq!(nav.current().id, "projects");
    }

    #[test]
    fn test_tab_ids_are_unique() {
        for (i, a) in TABS.iter().enumerate() {
            assert!(TABS.iter().skip(i + 1).all(|b| b.id != a.id));
        }
    }

    #[test]
    fn test_radial_positions() {
        let (x, y) = radial_position(0, 4, 100.0);
        assert!(x.abs() < 1e-9);
        assert!((y + 100.0).abs() < 1e-9);

        let (x, y) = radial_position(1, 4, 100.0);
        assert!((x - 100.0).abs() < 1e-9);
        assert!(y.abs() < 1e-9);

        assert_eq!(radial_position(3, 0, 100.0), (0.0, 0.0));
    }

    #[test]
    fn test_each_kind_has_one_tab() {
        let kinds = [
            TabKind::Overview,
            TabKind::Skills,
            TabKind::Projects,
            TabKind::Experience,
            TabKind::Certifications,
            TabKind::Contact,
        ];
        assert_eq!(kinds.len(), TABS.len());
        for kind in kinds {
            assert_eq!(TABS.iter().filter(|t| t.kind == kind).count(), 1, "{kind:?}");
        }
    }
}
