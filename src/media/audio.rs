use super::adapter::MediaAdapter;
use super::advanced::Playback;
use super::format::MediaFormat;
use super::player::{MediaPlayer, PlayOutcome};
use tracing::{debug, info};

/// The front-end player. Plays mp3 itself and hands vlc/mp4 to a fresh
/// `MediaAdapter` on every call.
#[derive(Debug, Default, Clone, Copy)]
pub struct AudioPlayer;

impl AudioPlayer {
    pub fn new() -> Self {
        Self
    }
}

impl MediaPlayer for AudioPlayer {
    fn play(&self, audio_type: &str, file_name: &str) -> PlayOutcome {
        match audio_type.parse::<MediaFormat>() {
            Ok(format) if format.is_advanced() => {
                debug!(%format, file_name, "delegating to media adapter");
                MediaAdapter::new(format).play(audio_type, file_name)
            }
            Ok(format) => {
                debug!(%format, file_name, "playing directly");
                PlayOutcome::Direct(Playback::new(format, file_name))
            }
            Err(e) => {
                info!(error = %e, file_name, "rejecting media");
                PlayOutcome::InvalidFormat
            }
        }
    }
}
