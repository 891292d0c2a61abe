mod audio;
mod clock;
mod easter_egg;
mod gesture;
mod notify;
mod progress;
mod tabs;

pub use audio::{AudioCommand, Music, PlaybackError};
pub use clock::{Millis, TimerId, TimerKind, Timers};
pub use easter_egg::{Egg, KeyWindow, TapCounter, Trigger, MAX_PHASE, SECRET_SEQUENCE};
pub use gesture::{interpret, Point, SwipeDirection};
pub use notify::{Notification, NotificationId, NotificationKind, Notifications};
pub use progress::{Experience, LevelUp, Loading, MAX_PROGRESS, XP_PER_LEVEL};
pub use tabs::{radial_position, Tab, TabKind, TabNav, TABS};

use serde::{Deserialize, Serialize};

/// Every timing and threshold the page runs on.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    pub loading_interval_ms: Millis,
    pub loading_step: u32,
    pub xp_interval_ms: Millis,
    pub xp_step: u32,
    pub level_up_guard_ms: Millis,
    pub notification_ttl_ms: Millis,
    pub swipe_threshold: f64,
    pub swipe_hint_ms: Millis,
    pub tap_threshold: u32,
    pub tap_reset_ms: Millis,
    pub egg_phase_ms: Millis,
    pub egg_duration_ms: Millis,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            loading_interval_ms: 200,
            loading_step: 5,
            xp_interval_ms: 3_000,
            xp_step: 10,
            level_up_guard_ms: 1_000,
            notification_ttl_ms: 3_000,
            swipe_threshold: 50.0,
            swipe_hint_ms: 300,
            tap_threshold: 5,
            tap_reset_ms: 3_000,
            egg_phase_ms: 300,
            egg_duration_ms: 5_000,
        }
    }
}

/// All view state of one mounted portfolio page.
///
/// The controller never reads a clock. Callers report the time through
/// [`Portfolio::advance_to`] before delivering an event, and sleep until
/// [`Portfolio::next_deadline`] between events. Every timer lives in the
/// owned [`Timers`] registry, so [`Portfolio::teardown`] cancels all of them.
#[derive(Debug, Clone)]
pub struct Portfolio {
    tuning: Tuning,
    now: Millis,
    mounted: bool,
    timers: Timers,

    tabs: TabNav,
    menu_open: bool,
    touch_origin: Option<Point>,
    swipe_hint: Option<SwipeDirection>,
    swipe_hint_timer: Option<TimerId>,

    notifications: Notifications,

    loading: Loading,
    loading_timer: Option<TimerId>,
    experience: Experience,
    xp_timer: Option<TimerId>,

    keys: KeyWindow,
    taps: TapCounter,
    tap_reset_timer: Option<TimerId>,
    egg: Egg,
    egg_phase_timer: Option<TimerId>,
    egg_expiry_timer: Option<TimerId>,

    music: Music,
}

impl Default for Portfolio {
    fn default() -> Self {
        Self::new(Tuning::default())
    }
}

impl Portfolio {
    pub fn new(tuning: Tuning) -> Self {
        Self {
            tuning,
            now: 0,
            mounted: false,
            timers: Timers::new(),
            tabs: TabNav::default(),
            menu_open: false,
            touch_origin: None,
            swipe_hint: None,
            swipe_hint_timer: None,
            notifications: Notifications::default(),
            loading: Loading::default(),
            loading_timer: None,
            experience: Experience::default(),
            xp_timer: None,
            keys: KeyWindow::default(),
            taps: TapCounter::default(),
            tap_reset_timer: None,
            egg: Egg::default(),
            egg_phase_timer: None,
            egg_expiry_timer: None,
            music: Music::default(),
        }
    }

    // ---- lifecycle ----

    /// Start the loading and XP ticks. Mounting twice is a no-op.
    pub fn mount(&mut self, now: Millis) {
        if self.mounted {
            return;
        }
        self.mounted = true;
        self.now = now;
        self.loading_timer = Some(self.timers.every(
            now,
            self.tuning.loading_interval_ms,
            TimerKind::LoadingTick,
        ));
        self.xp_timer = Some(
            self.timers
                .every(now, self.tuning.xp_interval_ms, TimerKind::XpTick),
        );
        log::debug!("portfolio mounted at {now}ms");
    }

    /// Cancel every timer and drop all state. A later `mount` starts fresh.
    pub fn teardown(&mut self) {
        let pending = self.timers.len();
        self.timers.clear();
        *self = Self::new(self.tuning);
        log::debug!("portfolio torn down, cancelled {pending} timers");
    }

    pub fn is_mounted(&self) -> bool {
        self.mounted
    }

    pub fn now(&self) -> Millis {
        self.now
    }

    pub fn tuning(&self) -> &Tuning {
        &self.tuning
    }

    pub fn next_deadline(&self) -> Option<Millis> {
        self.timers.next_deadline()
    }

    pub fn pending_timers(&self) -> usize {
        self.timers.len()
    }

    /// Fire everything due up to `now`, in deadline order. Time never runs
    /// backwards; an earlier `now` is ignored.
    pub fn advance_to(&mut self, now: Millis) {
        let now = now.max(self.now);
        while let Some((due, kind)) = self.timers.pop_due(now) {
            self.now = due;
            self.fire(kind);
        }
        self.now = now;
    }

    fn fire(&mut self, kind: TimerKind) {
        match kind {
            TimerKind::LoadingTick => {
                if self.loading.tick(self.tuning.loading_step) {
                    self.timers.cancel_slot(&mut self.loading_timer);
                }
            }
            TimerKind::XpTick => {
                if let Some(up) = self.experience.gain(self.tuning.xp_step) {
                    log::info!("level up: {}", up.level);
                    if up.announce {
                        self.post_kind(
                            format!("⭐ LEVEL UP! You reached level {}", up.level),
                            NotificationKind::Achievement,
                        );
                        self.timers.after(
                            self.now,
                            self.tuning.level_up_guard_ms,
                            TimerKind::LevelUpGuard,
                        );
                    }
                }
            }
            TimerKind::LevelUpGuard => self.experience.release_announcement(),
            TimerKind::NotificationExpiry(id) => {
                self.notifications.remove(id);
            }
            TimerKind::TapReset => {
                self.tap_reset_timer = None;
                self.taps.reset();
            }
            TimerKind::EggPhase => {
                if !self.egg.advance() {
                    self.timers.cancel_slot(&mut self.egg_phase_timer);
                }
            }
            TimerKind::EggExpiry => {
                self.egg_expiry_timer = None;
                self.timers.cancel_slot(&mut self.egg_phase_timer);
                if self.egg.expire() {
                    log::debug!("easter egg expired");
                    self.post("⌛ Secret level closed. Find it again!");
                }
            }
            TimerKind::SwipeHintClear => {
                self.swipe_hint_timer = None;
                self.swipe_hint = None;
            }
        }
    }

    // ---- loading & progression ----

    pub fn loading(&self) -> &Loading {
        &self.loading
    }

    /// Leave the loading screen. Allowed at any progress.
    pub fn start(&mut self) -> bool {
        if !self.loading.start() {
            return false;
        }
        self.timers.cancel_slot(&mut self.loading_timer);
        log::debug!("player pressed start at {}%", self.loading.progress());
        true
    }

    pub fn experience(&self) -> &Experience {
        &self.experience
    }

    // ---- tabs, menu, gestures ----

    pub fn current_tab(&self) -> &'static Tab {
        self.tabs.current()
    }

    pub fn tab_index(&self) -> usize {
        self.tabs.index()
    }

    pub fn rotation(&self) -> f64 {
        self.tabs.rotation()
    }

    pub fn navigate(&mut self, delta: i32) -> &'static Tab {
        self.tabs.navigate(delta)
    }

    pub fn select_tab(&mut self, id: &str) -> bool {
        let found = self.tabs.select(id);
        if !found {
            log::warn!("ignoring unknown tab id {id:?}");
        }
        found
    }

    pub fn is_menu_open(&self) -> bool {
        self.menu_open
    }

    pub fn toggle_menu(&mut self) {
        self.menu_open = !self.menu_open;
    }

    pub fn close_menu(&mut self) {
        self.menu_open = false;
    }

    pub fn swipe_hint(&self) -> Option<SwipeDirection> {
        self.swipe_hint
    }

    pub fn touch_start(&mut self, at: Point) {
        self.touch_origin = Some(at);
    }

    /// Finish a gesture begun with [`Portfolio::touch_start`]. Horizontal
    /// swipes change tab, vertical ones close the menu.
    pub fn touch_end(&mut self, at: Point) -> Option<SwipeDirection> {
        let origin = self.touch_origin.take()?;
        let direction = interpret(origin, at, self.tuning.swipe_threshold)?;
        match direction.tab_delta() {
            Some(delta) => {
                self.navigate(delta);
            }
            None => self.close_menu(),
        }
        self.timers.cancel_slot(&mut self.swipe_hint_timer);
        self.swipe_hint = Some(direction);
        self.swipe_hint_timer = Some(self.timers.after(
            self.now,
            self.tuning.swipe_hint_ms,
            TimerKind::SwipeHintClear,
        ));
        Some(direction)
    }

    // ---- easter egg ----

    pub fn egg(&self) -> &Egg {
        &self.egg
    }

    pub fn tap_count(&self) -> u32 {
        self.taps.count()
    }

    /// Feed a raw key name from the global keydown listener.
    pub fn key_down(&mut self, key: &str) -> bool {
        self.keys.push(key) && self.trigger_egg(Trigger::KeySequence)
    }

    /// A tap on the hidden hotspot. Each tap pushes the reset deadline back.
    pub fn tap_hotspot(&mut self) -> bool {
        self.timers.cancel_slot(&mut self.tap_reset_timer);
        if self.taps.tap(self.tuning.tap_threshold) {
            return self.trigger_egg(Trigger::Taps);
        }
        self.tap_reset_timer = Some(self.timers.after(
            self.now,
            self.tuning.tap_reset_ms,
            TimerKind::TapReset,
        ));
        false
    }

    /// Dismiss the secret level early. Unlike expiry, no toast is posted.
    pub fn close_egg(&mut self) -> bool {
        self.timers.cancel_slot(&mut self.egg_phase_timer);
        self.timers.cancel_slot(&mut self.egg_expiry_timer);
        let was_active = self.egg.expire();
        if was_active {
            log::debug!("easter egg closed by the player");
        }
        was_active
    }

    fn trigger_egg(&mut self, trigger: Trigger) -> bool {
        if !self.egg.activate(trigger, self.now) {
            log::debug!("easter egg already active, ignoring {trigger:?}");
            return false;
        }
        log::info!("easter egg unlocked via {trigger:?}");
        self.post_kind(
            format!("🎮 Secret level unlocked with {}!", trigger.describe()),
            NotificationKind::Achievement,
        );
        self.egg_phase_timer = Some(self.timers.every(
            self.now,
            self.tuning.egg_phase_ms,
            TimerKind::EggPhase,
        ));
        self.egg_expiry_timer = Some(self.timers.after(
            self.now,
            self.tuning.egg_duration_ms,
            TimerKind::EggExpiry,
        ));
        true
    }

    // ---- notifications ----

    pub fn notifications(&self) -> &Notifications {
        &self.notifications
    }

    pub fn post(&mut self, message: impl Into<String>) -> NotificationId {
        self.post_kind(message, NotificationKind::Info)
    }

    pub fn post_kind(&mut self, message: impl Into<String>, kind: NotificationKind) -> NotificationId {
        let id = NotificationId::next();
        let expiry = self.timers.after(
            self.now,
            self.tuning.notification_ttl_ms,
            TimerKind::NotificationExpiry(id),
        );
        self.notifications.push(
            Notification {
                id,
                message: message.into(),
                kind,
            },
            expiry,
        );
        id
    }

    /// Close a toast early. Other toasts keep their own deadlines.
    pub fn dismiss(&mut self, id: NotificationId) -> bool {
        match self.notifications.remove(id) {
            Some(expiry) => {
                self.timers.cancel(expiry);
                true
            }
            None => false,
        }
    }

    // ---- music ----

    pub fn music(&self) -> &Music {
        &self.music
    }

    pub fn toggle_music(&mut self) -> AudioCommand {
        self.music.toggle()
    }

    pub fn playback_rejected(&mut self, err: &PlaybackError) {
        log::warn!("{err}");
        match err {
            PlaybackError::Blocked(_) => {
                if self.music.rejected() {
                    self.post_kind(
                        "🔇 Click anywhere on the page to enable music",
                        NotificationKind::Warning,
                    );
                }
            }
            PlaybackError::Unavailable => {
                self.music.reset();
                self.post_kind("🔇 Music is unavailable", NotificationKind::Warning);
            }
        }
    }

    /// Any click on the page. Returns the retry to run if one was armed.
    pub fn page_clicked(&mut self) -> Option<AudioCommand> {
        self.music.clicked()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mounted() -> Portfolio {
        let mut p = Portfolio::default();
        p.mount(0);
        p
    }

    fn messages(p: &Portfolio) -> Vec<String> {
        p.notifications().iter().map(|n| n.message.clone()).collect()
    }

    #[test]
    fn test_loading_bar_fills_without_leaving_loading() {
        let mut p = mounted();
        p.advance_to(1_000);
        assert_eq!(p.loading().progress(), 25);

        p.advance_to(10_000);
        assert_eq!(p.loading().progress(), 100);
        assert!(p.loading().is_active());
        // only the xp tick is left
        assert_eq!(p.pending_timers(), 1);

        assert!(p.start());
        assert!(!p.loading().is_active());
        assert!(!p.start());
    }

    #[test]
    fn test_start_early_stops_loading_tick() {
        let mut p = mounted();
        p.advance_to(400);
        assert!(p.start());
        p.advance_to(2_000);
        assert_eq!(p.loading().progress(), 10);
    }

    #[test]
    fn test_navigation_cycles() {
        let mut p = mounted();
        for n in 0..(TABS.len() * 3) {
            if n % TABS.len() == 0 {
                assert_eq!(p.current_tab().id, "overview");
                assert_eq!(p.rotation(), 0.0);
            }
            p.navigate(1);
        }
        assert_eq!(p.navigate(-1).id, "contact");
        assert_eq!(p.rotation(), -300.0);
    }

    #[test]
    fn test_select_tab() {
        let mut p = mounted();
        assert!(p.select_tab("experience"));
        assert_eq!(p.tab_index(), 3);
        assert!(!p.select_tab("nope"));
        assert_eq!(p.current_tab().id, "experience");
    }

    #[test]
    fn test_swipe_left_from_overview() {
        let mut p = mounted();
        p.advance_to(1_000);
        p.touch_start(Point::new(200.0, 100.0));
        let dir = p.touch_end(Point::new(140.0, 90.0));
        assert_eq!(dir, Some(SwipeDirection::Left));
        assert_eq!(p.current_tab().id, "skills");
        assert_eq!(p.swipe_hint(), Some(SwipeDirection::Left));

        p.advance_to(1_299);
        assert_eq!(p.swipe_hint(), Some(SwipeDirection::Left));
        p.advance_to(1_300);
        assert_eq!(p.swipe_hint(), None);
    }

    #[test]
    fn test_swipe_hint_does_not_leak_into_next_gesture() {
        let mut p = mounted();
        p.touch_start(Point::new(0.0, 0.0));
        p.touch_end(Point::new(100.0, 0.0));
        assert_eq!(p.current_tab().id, "contact");

        p.advance_to(200);
        p.touch_start(Point::new(0.0, 0.0));
        p.touch_end(Point::new(-100.0, 0.0));
        assert_eq!(p.swipe_hint(), Some(SwipeDirection::Left));

        // the first hint's timer was superseded, so 300ms after the first
        // gesture the second hint is still showing
        p.advance_to(300);
        assert_eq!(p.swipe_hint(), Some(SwipeDirection::Left));
        p.advance_to(500);
        assert_eq!(p.swipe_hint(), None);
    }

    #[test]
    fn test_vertical_swipe_closes_menu() {
        let mut p = mounted();
        p.toggle_menu();
        assert!(p.is_menu_open());
        p.touch_start(Point::new(50.0, 400.0));
        assert_eq!(p.touch_end(Point::new(60.0, 300.0)), Some(SwipeDirection::Up));
        assert!(!p.is_menu_open());
        assert_eq!(p.current_tab().id, "overview");

        p.toggle_menu();
        p.touch_start(Point::new(50.0, 300.0));
        assert_eq!(p.touch_end(Point::new(50.0, 420.0)), Some(SwipeDirection::Down));
        assert!(!p.is_menu_open());
    }

    #[test]
    fn test_small_or_unpaired_touches_do_nothing() {
        let mut p = mounted();
        assert_eq!(p.touch_end(Point::new(500.0, 0.0)), None);
        p.touch_start(Point::new(0.0, 0.0));
        assert_eq!(p.touch_end(Point::new(-30.0, 20.0)), None);
        assert_eq!(p.swipe_hint(), None);
        assert_eq!(p.current_tab().id, "overview");
    }

    #[test]
    fn test_notifications_expire_independently() {
        let mut p = mounted();
        p.start();
        p.post("first");
        p.advance_to(1_000);
        p.post("second");
        assert_eq!(messages(&p), vec!["first", "second"]);

        p.advance_to(2_999);
        assert_eq!(p.notifications().len(), 2);
        p.advance_to(3_000);
        assert_eq!(messages(&p), vec!["second"]);
        p.advance_to(3_999);
        assert_eq!(p.notifications().len(), 1);
        p.advance_to(4_000);
        assert!(p.notifications().is_empty());
    }

    #[test]
    fn test_dismiss_cancels_only_that_timer() {
        let mut p = mounted();
        let a = p.post("a");
        p.post("b");
        let before = p.pending_timers();
        assert!(p.dismiss(a));
        assert!(!p.dismiss(a));
        assert_eq!(p.pending_timers(), before - 1);
        assert_eq!(messages(&p), vec!["b"]);
        p.advance_to(3_000);
        assert!(p.notifications().is_empty());
    }

    #[test]
    fn test_xp_levels_up_once_per_crossing() {
        let mut p = mounted();
        p.start();
        for step in 1..=9 {
            p.advance_to(step * 3_000);
            assert!(p.experience().xp() < XP_PER_LEVEL);
        }
        assert_eq!(p.experience().xp(), 90);
        assert_eq!(p.experience().level(), 1);

        p.advance_to(30_000);
        assert_eq!(p.experience().xp(), 0);
        assert_eq!(p.experience().level(), 2);
        assert_eq!(messages(&p), vec!["⭐ LEVEL UP! You reached level 2"]);

        p.advance_to(60_000);
        assert_eq!(p.experience().level(), 3);
        let level_ups = messages(&p)
            .iter()
            .filter(|m| m.contains("LEVEL UP"))
            .count();
        assert_eq!(level_ups, 1);
        assert!(p.experience().is_announcing());
        p.advance_to(61_000);
        assert!(!p.experience().is_announcing());
    }

    #[test]
    fn test_xp_ticks_while_loading() {
        let mut p = mounted();
        p.advance_to(6_000);
        assert!(p.loading().is_active());
        assert_eq!(p.experience().xp(), 20);
    }

    #[test]
    fn test_rapid_taps_trigger_egg_once() {
        let mut p = mounted();
        for i in 0..4 {
            p.advance_to(i * 500);
            assert!(!p.tap_hotspot());
        }
        assert_eq!(p.tap_count(), 4);
        p.advance_to(2_000);
        assert!(p.tap_hotspot());
        assert_eq!(p.tap_count(), 0);
        assert!(p.egg().is_active());
        assert_eq!(
            messages(&p),
            vec!["🎮 Secret level unlocked with rapid taps!"]
        );

        // five more taps while active are swallowed
        for _ in 0..5 {
            assert!(!p.tap_hotspot());
        }
        assert_eq!(p.notifications().len(), 1);
    }

    #[test]
    fn test_slow_taps_never_accumulate() {
        let mut p = mounted();
        for i in 0..20 {
            p.advance_to(i * 3_001);
            assert!(!p.tap_hotspot());
            assert_eq!(p.tap_count(), 1);
        }
        assert!(!p.egg().is_active());
    }

    #[test]
    fn test_tap_resets_existing_timer() {
        let mut p = mounted();
        p.tap_hotspot();
        p.advance_to(2_500);
        p.tap_hotspot();
        // the reset armed by the first tap would have fired here
        p.advance_to(3_000);
        assert_eq!(p.tap_count(), 2);
        p.advance_to(5_500);
        assert_eq!(p.tap_count(), 0);
    }

    #[test]
    fn test_key_sequence_unlocks() {
        let mut p = mounted();
        p.key_down("Shift");
        let mut unlocked = false;
        for key in SECRET_SEQUENCE {
            unlocked = p.key_down(key);
        }
        assert!(unlocked);
        assert!(p.egg().is_active());
        assert_eq!(
            messages(&p),
            vec!["🎮 Secret level unlocked with the secret code!"]
        );
    }

    #[test]
    fn test_egg_phases_and_expiry() {
        let mut p = mounted();
        p.advance_to(100);
        for key in SECRET_SEQUENCE {
            p.key_down(key);
        }
        assert_eq!(p.egg().phase(), 1);

        p.advance_to(400);
        assert_eq!(p.egg().phase(), 2);
        p.advance_to(1_300);
        assert_eq!(p.egg().phase(), MAX_PHASE);

        // re-trigger while active changes nothing, including the deadline
        p.advance_to(2_000);
        for key in SECRET_SEQUENCE {
            assert!(!p.key_down(key));
        }
        p.advance_to(5_099);
        assert!(p.egg().is_active());
        p.advance_to(5_100);
        assert!(!p.egg().is_active());
        assert_eq!(p.egg().phase(), 0);
        assert!(messages(&p).iter().any(|m| m.contains("Secret level closed")));

        // and it can be unlocked again afterwards
        for key in SECRET_SEQUENCE {
            p.key_down(key);
        }
        assert!(p.egg().is_active());
    }

    #[test]
    fn test_egg_expires_mid_sequence() {
        let tuning = Tuning {
            egg_phase_ms: 2_000,
            ..Tuning::default()
        };
        let mut p = Portfolio::new(tuning);
        p.mount(0);
        for _ in 0..5 {
            p.tap_hotspot();
        }
        p.advance_to(4_999);
        assert_eq!(p.egg().phase(), 3);
        p.advance_to(5_000);
        assert_eq!(*p.egg(), Egg::Idle);
        // no phase tick left behind
        p.advance_to(7_000);
        assert_eq!(p.egg().phase(), 0);
    }

    #[test]
    fn test_closing_egg_cancels_its_timers() {
        let mut p = mounted();
        p.start();
        for _ in 0..5 {
            p.tap_hotspot();
        }
        assert!(p.egg().is_active());
        // xp tick, unlock toast expiry, egg phase, egg expiry
        assert_eq!(p.pending_timers(), 4);

        p.advance_to(700);
        assert!(p.close_egg());
        assert_eq!(*p.egg(), Egg::Idle);
        assert_eq!(p.pending_timers(), 2);
        assert!(!p.close_egg());

        p.advance_to(10_000);
        assert!(!messages(&p).iter().any(|m| m.contains("Secret level closed")));

        for _ in 0..5 {
            p.tap_hotspot();
        }
        assert!(p.egg().is_active());
        assert_eq!(p.egg().phase(), 1);
    }

    #[test]
    fn test_huge_tuning_values_do_not_overflow() {
        let tuning = Tuning {
            egg_duration_ms: u64::MAX,
            notification_ttl_ms: u64::MAX,
            xp_interval_ms: u64::MAX,
            ..Tuning::default()
        };
        let mut p = Portfolio::new(tuning);
        p.mount(10);
        for _ in 0..5 {
            p.tap_hotspot();
        }
        assert!(p.egg().is_active());
        p.advance_to(60_000);
        assert!(p.egg().is_active());
        assert_eq!(p.notifications().len(), 1);
        assert_eq!(p.experience().level(), 1);
    }

    #[test]
    fn test_music_autoplay_rejection_and_retry() {
        let mut p = mounted();
        assert_eq!(p.page_clicked(), None);
        assert_eq!(p.toggle_music(), AudioCommand::Play);

        p.playback_rejected(&PlaybackError::Blocked("NotAllowedError".to_string()));
        assert_eq!(
            messages(&p),
            vec!["🔇 Click anywhere on the page to enable music"]
        );
        assert_eq!(p.page_clicked(), Some(AudioCommand::Play));
        assert_eq!(p.page_clicked(), None);

        assert_eq!(p.toggle_music(), AudioCommand::Pause);
        assert!(!p.music().is_enabled());
    }

    #[test]
    fn test_missing_audio_element_switches_music_off() {
        let mut p = mounted();
        p.toggle_music();
        p.playback_rejected(&PlaybackError::Unavailable);
        assert!(!p.music().is_enabled());
        assert_eq!(p.page_clicked(), None);
        assert_eq!(messages(&p), vec!["🔇 Music is unavailable"]);
    }

    #[test]
    fn test_teardown_cancels_everything() {
        let mut p = mounted();
        p.post("hello");
        p.tap_hotspot();
        p.touch_start(Point::new(0.0, 0.0));
        p.touch_end(Point::new(80.0, 0.0));
        for key in SECRET_SEQUENCE {
            p.key_down(key);
        }
        assert!(p.pending_timers() > 0);

        p.teardown();
        assert!(!p.is_mounted());
        assert_eq!(p.next_deadline(), None);
        p.advance_to(60_000);
        assert!(p.notifications().is_empty());
        assert_eq!(p.experience().level(), 1);
        assert_eq!(p.loading().progress(), 0);
        assert!(!p.egg().is_active());

        // remount is a full reset
        p.mount(60_000);
        assert!(p.loading().is_active());
        assert_eq!(p.current_tab().id, "overview");
        assert_eq!(p.pending_timers(), 2);
    }

    #[test]
    fn test_mount_is_idempotent_and_time_is_monotonic() {
        let mut p = mounted();
        p.mount(0);
        assert_eq!(p.pending_timers(), 2);
        p.advance_to(1_000);
        p.advance_to(500);
        assert_eq!(p.now(), 1_000);
        assert_eq!(p.next_deadline(), Some(1_200));
    }

    #[test]
    fn test_tuning_defaults_from_partial_config() {
        let tuning: Tuning =
            serde_json::from_str(r#"{ "swipe_threshold": 80.0 }"#).expect("should parse");
        assert_eq!(tuning.swipe_threshold, 80.0);
        assert_eq!(tuning.notification_ttl_ms, 3_000);
        assert_eq!(tuning.egg_duration_ms, 5_000);
    }
}
