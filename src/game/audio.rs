use thiserror::Error;

/// What the page should do with its `<audio>` element.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AudioCommand {
    Play,
    Pause,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PlaybackError {
    #[error("Playback was blocked until the user interacts with the page: {0}")]
    Blocked(String),
    #[error("Audio element is not available")]
    Unavailable,
}

/// Background music preference plus the pending one-shot retry that gets
/// armed when the browser refuses to autoplay.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Music {
    enabled: bool,
    retry_armed: bool,
}

impl Music {
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    pub fn is_retry_armed(&self) -> bool {
        self.retry_armed
    }

    pub fn toggle(&mut self) -> AudioCommand {
        self.enabled = !self.enabled;
        if self.enabled {
            AudioCommand::Play
        } else {
            self.retry_armed = false;
            AudioCommand::Pause
        }
    }

    /// Returns `true` if a retry was armed, i.e. the player still wants music.
    pub fn rejected(&mut self) -> bool {
        self.retry_armed = self.enabled;
        self.retry_armed
    }

    /// Consume the armed retry, if any, on a user click.
    pub fn clicked(&mut self) -> Option<AudioCommand> {
        if std::mem::replace(&mut self.retry_armed, false) && self.enabled {
            Some(AudioCommand::Play)
        } else {
            None
        }
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
