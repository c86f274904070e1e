use super::advanced::Playback;
use serde::Serialize;

/// What a single `play` call did.
#[derive(Debug, Serialize, PartialEq, Eq, Clone)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum PlayOutcome {
    /// Played by the basic player itself.
    Direct(Playback),
    /// Played through a `MediaAdapter`.
    Adapted(Playback),
    /// Accepted but nothing played.
    Inert,
    /// The type name is not one the player handles.
    InvalidFormat,
}

impl PlayOutcome {
    /// The console line for this outcome, if any.
    pub fn message(&self) -> Option<String> {
        match self {
            PlayOutcome::Direct(playback) | PlayOutcome::Adapted(playback) => {
                Some(playback.to_string())
            }
            PlayOutcome::Inert => None,
            PlayOutcome::InvalidFormat => Some("Invalid media format.".to_string()),
        }
    }

    pub fn playback(&self) -> Option<&Playback> {
        match self {
            PlayOutcome::Direct(playback) | PlayOutcome::Adapted(playback) => Some(playback),
            PlayOutcome::Inert | PlayOutcome::InvalidFormat => None,
        }
    }
}

/// Uniform entry point shared by every player in the family.
pub trait MediaPlayer {
    fn play(&self, audio_type: &str, file_name: &str) -> PlayOutcome;
}
