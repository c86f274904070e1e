use super::advanced::{AdvancedMediaPlayerBox, Mp4Player, VlcPlayer};
use super::format::MediaFormat;
use super::player::{MediaPlayer, PlayOutcome};
use tracing::{debug, warn};

/// Bridges the `MediaPlayer` interface onto an advanced player.
///
/// The delegate is picked once, at construction. A format with no advanced
/// player leaves the adapter without a delegate, and every `play` on it is
/// inert.
pub struct MediaAdapter {
    advanced_player: Option<AdvancedMediaPlayerBox>,
}

impl MediaAdapter {
    pub fn new(format: MediaFormat) -> Self {
        let advanced_player: Option<AdvancedMediaPlayerBox> = match format {
            MediaFormat::Vlc => Some(Box::new(VlcPlayer)),
            MediaFormat::Mp4 => Some(Box::new(Mp4Player)),
            MediaFormat::Mp3 => None,
        };
        if advanced_player.is_none() {
            warn!(%format, "no advanced player for format; adapter will be inert");
        } else {
            debug!(%format, "media adapter constructed");
        }
        Self { advanced_player }
    }

    pub fn has_delegate(&self) -> bool {
        self.advanced_player.is_some()
    }
}

impl MediaPlayer for MediaAdapter {
    fn play(&self, audio_type: &str, file_name: &str) -> PlayOutcome {
        let Some(player) = &self.advanced_player else {
            return PlayOutcome::Inert;
        };
        let playback = match audio_type.parse::<MediaFormat>() {
            Ok(MediaFormat::Vlc) => player.play_vlc(file_name),
            Ok(MediaFormat::Mp4) => player.play_mp4(file_name),
            Ok(MediaFormat::Mp3) | Err(_) => None,
        };
        playback.map_or(PlayOutcome::Inert, PlayOutcome::Adapted)
    }
}
