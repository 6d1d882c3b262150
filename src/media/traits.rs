use super::MediaError;

/// Playback boundary for bundled clips, addressed by logical name.
/// Fire-and-forget: nothing reports back when a clip ends except
/// [`MediaPlayer::is_audio_playing`].
pub trait MediaPlayer {
    fn play_audio(&mut self, clip: &str) -> Result<(), MediaError>;
    fn stop_audio(&mut self);
    fn play_video(&mut self, clip: &str) -> Result<(), MediaError>;
    fn is_audio_playing(&self) -> bool;
}
