use std::path::{Path, PathBuf};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayerCommand {
    pub program: String,
    pub args: Vec<String>,
}

impl PlayerCommand {
    /// The desktop's "open with default application" command.
    pub fn system_opener() -> Self {
        let program = if cfg!(target_os = "macos") {
            "open"
        } else if cfg!(target_os = "windows") {
            "explorer"
        } else {
            "xdg-open"
        };
        Self {
            program: program.to_string(),
            args: vec![],
        }
    }
}

#[derive(Debug, Clone)]
pub struct MediaConfig {
    pub media_dir: PathBuf,
    pub audio_extension: String,
    pub video_extension: String,
    /// External program used to show videos; the clip path is appended.
    pub video_player: PlayerCommand,
}

impl MediaConfig {
    pub fn new(media_dir: impl Into<PathBuf>) -> Self {
        Self {
            media_dir: media_dir.into(),
            audio_extension: "mp3".to_string(),
            video_extension: "mp4".to_string(),
            video_player: PlayerCommand {
                program: "mpv".to_string(),
                args: vec!["--fs".to_string(), "--really-quiet".to_string()],
            },
        }
    }

    pub fn parse_command(raw: &str) -> Option<PlayerCommand> {
        let mut parts = raw.split_whitespace().map(str::to_string);
        let program = parts.next()?;
        Some(PlayerCommand {
            program,
            args: parts.collect(),
        })
    }

    pub fn audio_path(&self, clip: &str) -> Option<PathBuf> {
        existing(&self.media_dir, clip, &self.audio_extension)
    }

    pub fn video_path(&self, clip: &str) -> Option<PathBuf> {
        existing(&self.media_dir, clip, &self.video_extension)
    }
}

fn existing(dir: &Path, clip: &str, extension: &str) -> Option<PathBuf> {
    let path = dir.join(format!("{clip}.{extension}"));
    path.is_file().then_some(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolves_only_existing_clips() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("Haruhikage.mp3"), b"id3").unwrap();
        let config = MediaConfig::new(dir.path());

        assert_eq!(
            config.audio_path("Haruhikage"),
            Some(dir.path().join("Haruhikage.mp3"))
        );
        assert_eq!(config.video_path("Haruhikage"), None);
        assert_eq!(config.audio_path("Mayoiuta"), None);
    }

    #[test]
    fn blank_command_is_rejected() {
        assert_eq!(MediaConfig::parse_command("   "), None);
        assert_eq!(
            MediaConfig::parse_command("mpv"),
            Some(PlayerCommand {
                program: "mpv".to_string(),
                args: vec![],
            })
        );
    }
}
