use super::format::MediaFormat;
use serde::Serialize;
use std::fmt;
use tracing::trace;

/// A file that a player actually started.
#[derive(Debug, Serialize, PartialEq, Eq, Clone)]
pub struct Playback {
    pub format: MediaFormat,
    pub file: String,
}

impl Playback {
    pub fn new(format: MediaFormat, file: &str) -> Self {
        Self {
            format,
            file: file.to_string(),
        }
    }
}

impl fmt::Display for Playback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Playing {} file: {}", self.format, self.file)
    }
}

/// Players for formats the basic audio player cannot handle.
///
/// Each implementation only plays its own format; the other method returns
/// `None` instead of failing.
pub trait AdvancedMediaPlayer {
    fn play_vlc(&self, file_name: &str) -> Option<Playback>;
    fn play_mp4(&self, file_name: &str) -> Option<Playback>;
}

pub type AdvancedMediaPlayerBox = Box<dyn AdvancedMediaPlayer>;

#[derive(Debug, Default, Clone, Copy)]
pub struct VlcPlayer;

impl AdvancedMediaPlayer for VlcPlayer {
    fn play_vlc(&self, file_name: &str) -> Option<Playback> {
        Some(Playback::new(MediaFormat::Vlc, file_name))
    }

    fn play_mp4(&self, file_name: &str) -> Option<Playback> {
        trace!(file_name, "vlc player ignores mp4");
        None
    }
}

#[derive(Debug, Default, Clone, Copy)]
pub struct Mp4Player;

impl AdvancedMediaPlayer for Mp4Player {
    fn play_vlc(&self, file_name: &str) -> Option<Playback> {
        trace!(file_name, "mp4 player ignores vlc");
        None
    }

    fn play_mp4(&self, file_name: &str) -> Option<Playback> {
        Some(Playback::new(MediaFormat::Mp4, file_name))
    }
}
