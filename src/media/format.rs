use serde::Serialize;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// The closed set of formats the player family knows about.
#[derive(Debug, Serialize, PartialEq, Eq, Clone, Copy, Hash)]
#[serde(rename_all = "lowercase")]
pub enum MediaFormat {
    Mp3,
    Vlc,
    Mp4,
}

impl MediaFormat {
    pub fn name(&self) -> &'static str {
        match self {
            MediaFormat::Mp3 => "mp3",
            MediaFormat::Vlc => "vlc",
            MediaFormat::Mp4 => "mp4",
        }
    }

    /// Formats that need an adapter in front of an advanced player.
    pub fn is_advanced(&self) -> bool {
        matches!(self, MediaFormat::Vlc | MediaFormat::Mp4)
    }
}

impl fmt::Display for MediaFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Returned when a type name is outside the known set.
#[derive(Error, Debug, PartialEq, Eq, Clone)]
#[error("unsupported media format: {0}")]
pub struct UnsupportedFormat(pub String);

impl FromStr for MediaFormat {
    type Err = UnsupportedFormat;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case("mp3") {
            Ok(MediaFormat::Mp3)
        } else if s.eq_ignore_ascii_case("vlc") {
            Ok(MediaFormat::Vlc)
        } else if s.eq_ignore_ascii_case("mp4") {
            Ok(MediaFormat::Mp4)
        } else {
            Err(UnsupportedFormat(s.to_string()))
        }
    }
}
