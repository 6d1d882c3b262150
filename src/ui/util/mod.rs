pub mod handler;

use std::time::{SystemTime, UNIX_EPOCH};

use crate::media::PlaybackStatus;

/// Pulsing marker shown next to the playback label while a clip is live.
pub fn playback_indicator(status: PlaybackStatus) -> &'static str {
    if status == PlaybackStatus::Idle {
        return " ";
    }

    const FRAME_STEP_MS: u128 = 100;
    let now = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis())
        .unwrap_or_default();

    match (now / FRAME_STEP_MS) % 6 {
        0 | 5 => "·",
        1 | 4 => "•",
        _ => "●",
    }
}
