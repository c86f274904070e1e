//! Adapter pattern: a basic audio player that reaches advanced players
//! through a `MediaAdapter`.

pub mod adapter;
pub mod advanced;
pub mod audio;
pub mod format;
pub mod player;

pub use adapter::MediaAdapter;
pub use advanced::{AdvancedMediaPlayer, Mp4Player, Playback, VlcPlayer};
pub use audio::AudioPlayer;
pub use format::{MediaFormat, UnsupportedFormat};
pub use player::{MediaPlayer, PlayOutcome};
