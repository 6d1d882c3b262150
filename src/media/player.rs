use tracing::{debug, warn};

use super::{
    MediaError, MediaPlayer, config::MediaConfig, playback::PlaybackEngine, video::VideoLauncher,
};

/// Plays clips from the media directory: audio through rodio, video through
/// the configured external player.
pub struct SystemMediaPlayer {
    config: MediaConfig,
    audio: PlaybackEngine,
    video: VideoLauncher,
}

impl SystemMediaPlayer {
    pub fn new(config: MediaConfig) -> Self {
        let video = VideoLauncher::new(config.video_player.clone());
        Self {
            config,
            audio: PlaybackEngine::new(),
            video,
        }
    }
}

impl MediaPlayer for SystemMediaPlayer {
    fn play_audio(&mut self, clip: &str) -> Result<(), MediaError> {
        let path = self
            .config
            .audio_path(clip)
            .ok_or_else(|| MediaError::AssetNotFound(clip.to_string()))?;
        debug!("Playing audio {}", path.display());
        self.audio.play_file(&path)
    }

    fn stop_audio(&mut self) {
        self.audio.stop();
    }

    fn play_video(&mut self, clip: &str) -> Result<(), MediaError> {
        let path = self
            .config
            .video_path(clip)
            .ok_or_else(|| MediaError::AssetNotFound(clip.to_string()))?;
        debug!("Playing video {}", path.display());
        self.video.launch(&path).inspect_err(|e| {
            warn!("Video playback failed: {}", e);
        })
    }

    fn is_audio_playing(&self) -> bool {
        self.audio.is_playing()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_assets_are_reported_not_played() {
        let dir = tempfile::tempdir().unwrap();
        let mut player = SystemMediaPlayer::new(MediaConfig::new(dir.path()));

        assert!(matches!(
            player.play_audio("Haruhikage"),
            Err(MediaError::AssetNotFound(_))
        ));
        assert!(matches!(
            player.play_video("為什麼要演奏春日影！"),
            Err(MediaError::AssetNotFound(_))
        ));
        assert!(!player.is_audio_playing());
        player.stop_audio();
    }
}
