use pattern_showcase::media::{
    AudioPlayer, MediaAdapter, MediaFormat, MediaPlayer, PlayOutcome, Playback,
};

#[test]
fn test_mp3_case_insensitive() {
    let player = AudioPlayer::new();
    assert_eq!(player.play("MP3", "x.mp3"), player.play("mp3", "x.mp3"));
    assert_eq!(
        player.play("MP3", "x.mp3"),
        PlayOutcome::Direct(Playback::new(MediaFormat::Mp3, "x.mp3"))
    );
}

#[test]
fn test_wav_is_invalid() {
    let outcome = AudioPlayer::new().play("wav", "x.wav");
    assert_eq!(outcome, PlayOutcome::InvalidFormat);
    assert_eq!(outcome.playback(), None);
}

#[test]
fn test_players_share_the_interface() {
    let players: Vec<Box<dyn MediaPlayer>> = vec![
        Box::new(AudioPlayer::new()),
        Box::new(MediaAdapter::new(MediaFormat::Mp4)),
    ];
    for player in &players {
        assert_eq!(
            player.play("mp4", "video.mp4"),
            PlayOutcome::Adapted(Playback::new(MediaFormat::Mp4, "video.mp4"))
        );
    }
}

#[test]
fn test_adapter_without_delegate() {
    let adapter = MediaAdapter::new(MediaFormat::Mp3);
    assert!(!adapter.has_delegate());
    for audio_type in ["mp3", "vlc", "mp4", "flac"] {
        assert_eq!(adapter.play(audio_type, "file"), PlayOutcome::Inert);
    }
}
