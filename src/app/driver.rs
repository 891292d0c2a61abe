use std::time::Duration;

use chrono::Utc;
use leptos::{html, prelude::*, task::spawn_local};
use wasm_bindgen_futures::JsFuture;

use crate::game::{AudioCommand, Millis, PlaybackError, Portfolio};

/// Wall-clock milliseconds since the page component was created.
#[derive(Debug, Clone, Copy)]
pub struct Clock {
    epoch_ms: i64,
}

impl Clock {
    pub fn start() -> Self {
        Self {
            epoch_ms: Utc::now().timestamp_millis(),
        }
    }

    pub fn now(&self) -> Millis {
        (Utc::now().timestamp_millis() - self.epoch_ms).max(0) as Millis
    }
}

/// Connects a [`Portfolio`] to the browser: a single timeout sleeps until the
/// controller's next deadline and is re-armed after every dispatch.
#[derive(Clone, Copy)]
pub struct Driver {
    state: RwSignal<Portfolio>,
    pending: StoredValue<Option<TimeoutHandle>>,
    clock: Clock,
}

impl Driver {
    pub fn new(portfolio: Portfolio) -> Self {
        Self {
            state: RwSignal::new(portfolio),
            pending: StoredValue::new(None),
            clock: Clock::start(),
        }
    }

    pub fn state(&self) -> RwSignal<Portfolio> {
        self.state
    }

    pub fn mount(self) {
        let now = self.clock.now();
        self.dispatch(|p| p.mount(now));
    }

    /// Catch the controller up to the current time, apply `f`, then re-arm
    /// the timeout. Returns `None` once the state has been disposed.
    pub fn dispatch<R>(self, f: impl FnOnce(&mut Portfolio) -> R) -> Option<R> {
        let now = self.clock.now();
        let res = self.state.try_update(|p| {
            p.advance_to(now);
            f(p)
        });
        self.reschedule();
        res
    }

    fn cancel_pending(self) {
        if let Some(handle) = self.pending.try_update_value(Option::take).flatten() {
            handle.clear();
        }
    }

    fn reschedule(self) {
        self.cancel_pending();
        let Some(deadline) = self
            .state
            .try_with_untracked(Portfolio::next_deadline)
            .flatten()
        else {
            return;
        };
        let delay = deadline.saturating_sub(self.clock.now());
        match set_timeout_with_handle(
            move || {
                self.dispatch(|_| ());
            },
            Duration::from_millis(delay),
        ) {
            Ok(handle) => {
                self.pending.try_set_value(Some(handle));
            }
            Err(e) => log::error!("couldn't schedule next tick: {e:?}"),
        }
    }

    pub fn teardown(self) {
        self.cancel_pending();
        self.state.try_update_untracked(Portfolio::teardown);
    }
}

/// Runs [`AudioCommand`]s against the page's `<audio>` element and reports
/// rejected playback back to the controller.
#[derive(Clone, Copy)]
pub struct AudioControl {
    node: NodeRef<html::Audio>,
    driver: Driver,
}

impl AudioControl {
    pub fn new(node: NodeRef<html::Audio>, driver: Driver) -> Self {
        Self { node, driver }
    }

    pub fn node(&self) -> NodeRef<html::Audio> {
        self.node
    }

    pub fn run(self, cmd: AudioCommand) {
        let Some(audio) = self.node.get_untracked() else {
            self.reject(PlaybackError::Unavailable);
            return;
        };
        match cmd {
            AudioCommand::Pause => {
                if let Err(e) = audio.pause() {
                    log::warn!("couldn't pause music: {e:?}");
                }
            }
            AudioCommand::Play => {
                audio.set_loop(true);
                match audio.play() {
                    Ok(promise) => spawn_local(async move {
                        if let Err(e) = JsFuture::from(promise).await {
                            self.reject(PlaybackError::Blocked(format!("{e:?}")));
                        }
                    }),
                    Err(e) => self.reject(PlaybackError::Blocked(format!("{e:?}"))),
                }
            }
        }
    }

    fn reject(self, err: PlaybackError) {
        self.driver.dispatch(|p| p.playback_rejected(&err));
    }
}
