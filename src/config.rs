use std::{path::PathBuf, time::Duration};

use directories::UserDirs;
use tracing::warn;

use crate::{
    media::config::{MediaConfig, PlayerCommand},
    util::log::get_data_dir,
};

const DEFAULT_SPLASH_UNIT_MS: u64 = 1000;

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub data_dir: PathBuf,
    /// External catalog file; the embedded `pic_database.json` is used when unset.
    pub catalog_path: Option<PathBuf>,
    pub downloads_dir: PathBuf,
    pub splash_unit: Duration,
    pub media: MediaConfig,
    /// Program images are opened with; the file path or URL is appended.
    pub image_viewer: PlayerCommand,
}

impl AppConfig {
    /// Reads `HARUHIKAGE_*` variables. Anything missing or malformed falls
    /// back to its default.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let data_dir = lookup("HARUHIKAGE_DATA")
            .map(PathBuf::from)
            .unwrap_or_else(get_data_dir);

        let media_dir = lookup("HARUHIKAGE_MEDIA")
            .map(PathBuf::from)
            .unwrap_or_else(|| data_dir.join("media"));

        let downloads_dir = lookup("HARUHIKAGE_DOWNLOADS")
            .map(PathBuf::from)
            .or_else(|| {
                UserDirs::new().and_then(|dirs| dirs.picture_dir().map(|p| p.to_path_buf()))
            })
            .unwrap_or_else(|| data_dir.join("downloads"));

        let splash_unit = match lookup("HARUHIKAGE_SPLASH_UNIT_MS") {
            Some(raw) => match raw.trim().parse::<u64>() {
                Ok(ms) if ms > 0 => Duration::from_millis(ms),
                _ => {
                    warn!("Ignoring invalid HARUHIKAGE_SPLASH_UNIT_MS={raw:?}");
                    Duration::from_millis(DEFAULT_SPLASH_UNIT_MS)
                }
            },
            None => Duration::from_millis(DEFAULT_SPLASH_UNIT_MS),
        };

        let mut media = MediaConfig::new(media_dir);
        if let Some(player) = lookup("HARUHIKAGE_VIDEO_PLAYER") {
            match MediaConfig::parse_command(&player) {
                Some(command) => media.video_player = command,
                None => warn!("Ignoring empty HARUHIKAGE_VIDEO_PLAYER"),
            }
        }

        let image_viewer = match lookup("HARUHIKAGE_IMAGE_VIEWER") {
            Some(raw) => MediaConfig::parse_command(&raw).unwrap_or_else(|| {
                warn!("Ignoring empty HARUHIKAGE_IMAGE_VIEWER");
                PlayerCommand::system_opener()
            }),
            None => PlayerCommand::system_opener(),
        };

        Self {
            data_dir,
            catalog_path: lookup("HARUHIKAGE_CATALOG").map(PathBuf::from),
            downloads_dir,
            splash_unit,
            media,
            image_viewer,
        }
    }

    pub fn store_dir(&self) -> PathBuf {
        self.data_dir.join("store")
    }
}
