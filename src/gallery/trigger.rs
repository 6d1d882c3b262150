//! Search-box easter eggs.
//!
//! Typing one of two reserved strings into the gallery search plays a
//! bundled clip. The decision is a pure function over the previous text, the
//! new text and the current playback status; carrying the effect out is the
//! caller's job.

use crate::media::PlaybackStatus;

pub const AUDIO_TRIGGER: &str = "春";
pub const VIDEO_TRIGGER: &str = "春日影";

pub const AUDIO_CLIP: &str = "Haruhikage";
pub const VIDEO_CLIP: &str = "為什麼要演奏春日影！";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MediaEffect {
    None,
    PlayAudio(&'static str),
    /// Stop whatever audio is playing, then present the video full-screen.
    StopAudioAndPlayVideo(&'static str),
}

pub fn transition(
    previous: &str,
    new: &str,
    status: PlaybackStatus,
) -> (PlaybackStatus, MediaEffect) {
    if previous == new {
        return (status, MediaEffect::None);
    }

    match new {
        AUDIO_TRIGGER if status == PlaybackStatus::Audio => (status, MediaEffect::None),
        AUDIO_TRIGGER => (PlaybackStatus::Audio, MediaEffect::PlayAudio(AUDIO_CLIP)),
        VIDEO_TRIGGER => (
            PlaybackStatus::Video,
            MediaEffect::StopAudioAndPlayVideo(VIDEO_CLIP),
        ),
        _ => (status, MediaEffect::None),
    }
}
