/// What the easter-egg player last started. "春" after "春日影" starts the
/// audio clip without closing the external video player, so status reads
/// `Audio` (and `Idle` once the clip ends) while the video may still run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PlaybackStatus {
    #[default]
    Idle,
    Audio,
    Video,
}

impl PlaybackStatus {
    pub fn label(&self) -> &'static str {
        match self {
            PlaybackStatus::Idle => "idle",
            PlaybackStatus::Audio => "♪ 春日影",
            PlaybackStatus::Video => "▶ 春日影",
        }
    }
}
