use tracing::{debug, info, warn};

use super::{
    ImageItem,
    catalog::{CatalogSource, load_catalog},
    favorites::Favorites,
    filter::filter_items,
    trigger::{MediaEffect, transition},
};
use crate::{
    media::{MediaPlayer, PlaybackStatus},
    storage::KeyValueStore,
};

/// Gallery model behind the image screen.
///
/// Owns the catalog, the favorites list with its store, the search text and
/// the easter-egg playback status. All mutation comes from the UI thread.
pub struct GalleryManager {
    catalog: Vec<ImageItem>,
    favorites: Favorites,
    search_text: String,
    last_search_text: String,
    status: PlaybackStatus,
    store: Box<dyn KeyValueStore>,
    player: Box<dyn MediaPlayer>,
}

impl GalleryManager {
    pub fn new(store: Box<dyn KeyValueStore>, player: Box<dyn MediaPlayer>) -> Self {
        Self {
            catalog: Vec::new(),
            favorites: Favorites::new(),
            search_text: String::new(),
            last_search_text: String::new(),
            status: PlaybackStatus::Idle,
            store,
            player,
        }
    }

    /// Builds the manager and runs both startup loads.
    pub fn load(
        source: &CatalogSource,
        store: Box<dyn KeyValueStore>,
        player: Box<dyn MediaPlayer>,
    ) -> Self {
        let mut manager = Self::new(store, player);
        manager.load_catalog(source);
        manager.load_favorites();
        manager
    }

    pub fn load_catalog(&mut self, source: &CatalogSource) {
        self.catalog = load_catalog(source);
    }

    pub fn load_favorites(&mut self) {
        self.favorites = Favorites::load(self.store.as_ref());
        info!("{} favorites restored", self.favorites.len());
    }

    pub fn catalog(&self) -> &[ImageItem] {
        &self.catalog
    }

    pub fn favorites(&self) -> &[ImageItem] {
        self.favorites.items()
    }

    pub fn search_text(&self) -> &str {
        &self.search_text
    }

    /// Updates the search text. Trigger rules run only when the value differs
    /// from the last one seen; the visible text is updated regardless.
    pub fn set_search_text(&mut self, text: impl Into<String>) -> MediaEffect {
        self.search_text = text.into();
        if self.search_text == self.last_search_text {
            return MediaEffect::None;
        }

        let observed = self.observed_status();
        let (next, effect) = transition(&self.last_search_text, &self.search_text, observed);
        self.last_search_text = self.search_text.clone();
        self.status = self.apply(effect, observed, next);
        effect
    }

    pub fn filtered_catalog(&self) -> Vec<&ImageItem> {
        filter_items(&self.catalog, &self.search_text)
    }

    pub fn filtered_favorites(&self) -> Vec<&ImageItem> {
        filter_items(self.favorites.items(), &self.search_text)
    }

    pub fn is_favorite(&self, item: &ImageItem) -> bool {
        self.favorites.contains(&item.id)
    }

    /// Adds or removes `item` and writes the whole list back. A failed write
    /// is logged; the in-memory list keeps the change and the next successful
    /// write brings the store back in line.
    pub fn toggle_favorite(&mut self, item: &ImageItem) -> bool {
        let now_favorite = self.favorites.toggle(item);
        debug!(
            "{} favorite {}",
            if now_favorite { "Added" } else { "Removed" },
            item.id
        );
        if let Err(e) = self.favorites.save(self.store.as_mut()) {
            warn!("Error saving favorites: {}", e);
        }
        now_favorite
    }

    pub fn playback_status(&self) -> PlaybackStatus {
        self.observed_status()
    }

    /// Audio that ran out on its own counts as idle.
    fn observed_status(&self) -> PlaybackStatus {
        match self.status {
            PlaybackStatus::Audio if !self.player.is_audio_playing() => PlaybackStatus::Idle,
            status => status,
        }
    }

    fn apply(
        &mut self,
        effect: MediaEffect,
        current: PlaybackStatus,
        next: PlaybackStatus,
    ) -> PlaybackStatus {
        match effect {
            MediaEffect::None => next,
            MediaEffect::PlayAudio(clip) => match self.player.play_audio(clip) {
                Ok(()) => next,
                Err(e) => {
                    debug!("Audio easter egg skipped: {}", e);
                    current
                }
            },
            MediaEffect::StopAudioAndPlayVideo(clip) => {
                self.player.stop_audio();
                match self.player.play_video(clip) {
                    Ok(()) => next,
                    Err(e) => {
                        debug!("Video easter egg skipped: {}", e);
                        PlaybackStatus::Idle
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::{cell::RefCell, rc::Rc};

    use super::*;
    use crate::{
        gallery::{
            favorites::FAVORITES_KEY,
            trigger::{AUDIO_CLIP, VIDEO_CLIP},
        },
        media::MediaError,
        storage::{MemoryStore, StoreError},
    };

    #[derive(Debug, Clone, PartialEq, Eq)]
    enum Call {
        PlayAudio(String),
        StopAudio,
        PlayVideo(String),
    }

    #[derive(Default)]
    struct Recorder {
        calls: Vec<Call>,
        audio_playing: bool,
        assets_missing: bool,
    }

    #[derive(Clone, Default)]
    struct FakePlayer(Rc<RefCell<Recorder>>);

    impl MediaPlayer for FakePlayer {
        fn play_audio(&mut self, clip: &str) -> Result<(), MediaError> {
            let mut rec = self.0.borrow_mut();
            rec.calls.push(Call::PlayAudio(clip.to_string()));
            if rec.assets_missing {
                return Err(MediaError::AssetNotFound(clip.to_string()));
            }
            rec.audio_playing = true;
            Ok(())
        }

        fn stop_audio(&mut self) {
            let mut rec = self.0.borrow_mut();
            rec.calls.push(Call::StopAudio);
            rec.audio_playing = false;
        }

        fn play_video(&mut self, clip: &str) -> Result<(), MediaError> {
            let mut rec = self.0.borrow_mut();
            rec.calls.push(Call::PlayVideo(clip.to_string()));
            if rec.assets_missing {
                return Err(MediaError::AssetNotFound(clip.to_string()));
            }
            Ok(())
        }

        fn is_audio_playing(&self) -> bool {
            self.0.borrow().audio_playing
        }
    }

    /// Store whose writes always fail.
    struct ReadOnlyStore(MemoryStore);

    impl KeyValueStore for ReadOnlyStore {
        fn get(&self, key: &str) -> Result<Option<Vec<u8>>, StoreError> {
            self.0.get(key)
        }

        fn set(&mut self, key: &str, _value: &[u8]) -> Result<(), StoreError> {
            Err(StoreError::InvalidKey(key.to_string()))
        }
    }

    #[derive(Clone, Default)]
    struct SharedStore(Rc<RefCell<MemoryStore>>);

    impl KeyValueStore for SharedStore {
        fn get(&self, key: &str) -> Result<Option<Vec<u8>>, StoreError> {
            self.0.borrow().get(key)
        }

        fn set(&mut self, key: &str, value: &[u8]) -> Result<(), StoreError> {
            self.0.borrow_mut().set(key, value)
        }
    }

    fn item(id: &str, name: &str) -> ImageItem {
        ImageItem::new(id, name, format!("https://example.com/{id}.jpg"))
    }

    fn manager_with(player: FakePlayer) -> GalleryManager {
        let mut manager = GalleryManager::new(Box::new(MemoryStore::new()), Box::new(player));
        manager.catalog = vec![
            item("1", "MyGO01 Haruhikage"),
            item("2", "MyGO02 迷星叫"),
            item("3", "MyGO03 haruhikage reprise"),
        ];
        manager
    }

    fn calls(player: &FakePlayer) -> Vec<Call> {
        player.0.borrow().calls.clone()
    }

    #[test]
    fn filtered_views_follow_search_text() {
        let mut manager = manager_with(FakePlayer::default());
        manager.toggle_favorite(&item("3", "MyGO03 haruhikage reprise"));
        manager.toggle_favorite(&item("2", "MyGO02 迷星叫"));

        assert_eq!(manager.filtered_catalog().len(), 3);
        assert_eq!(manager.filtered_favorites().len(), 2);

        manager.set_search_text("HARU");
        let ids: Vec<_> = manager.filtered_catalog().iter().map(|i| i.id.clone()).collect();
        assert_eq!(ids, vec!["1", "3"]);
        let ids: Vec<_> = manager.filtered_favorites().iter().map(|i| i.id.clone()).collect();
        assert_eq!(ids, vec!["3"]);

        manager.set_search_text("");
        assert_eq!(manager.filtered_catalog().len(), 3);
    }

    #[test]
    fn audio_trigger_does_not_restart_playing_audio() {
        let player = FakePlayer::default();
        let mut manager = manager_with(player.clone());

        assert_eq!(manager.set_search_text("春"), MediaEffect::PlayAudio(AUDIO_CLIP));
        assert_eq!(manager.playback_status(), PlaybackStatus::Audio);

        manager.set_search_text("");
        assert_eq!(manager.set_search_text("春"), MediaEffect::None);
        assert_eq!(calls(&player), vec![Call::PlayAudio(AUDIO_CLIP.to_string())]);
    }

    #[test]
    fn audio_trigger_restarts_after_clip_ends() {
        let player = FakePlayer::default();
        let mut manager = manager_with(player.clone());

        manager.set_search_text("春");
        player.0.borrow_mut().audio_playing = false;
        assert_eq!(manager.playback_status(), PlaybackStatus::Idle);

        manager.set_search_text("");
        assert_eq!(manager.set_search_text("春"), MediaEffect::PlayAudio(AUDIO_CLIP));
        assert_eq!(calls(&player).len(), 2);
    }

    #[test]
    fn video_trigger_stops_audio_every_time() {
        let player = FakePlayer::default();
        let mut manager = manager_with(player.clone());

        manager.set_search_text("春");
        manager.set_search_text("春日");
        manager.set_search_text("春日影");
        assert_eq!(manager.playback_status(), PlaybackStatus::Video);
        assert!(!player.0.borrow().audio_playing);

        manager.set_search_text("春日");
        manager.set_search_text("春日影");

        assert_eq!(
            calls(&player),
            vec![
                Call::PlayAudio(AUDIO_CLIP.to_string()),
                Call::StopAudio,
                Call::PlayVideo(VIDEO_CLIP.to_string()),
                Call::StopAudio,
                Call::PlayVideo(VIDEO_CLIP.to_string()),
            ]
        );
    }

    #[test]
    fn repeated_text_updates_query_without_trigger() {
        let player = FakePlayer::default();
        let mut manager = manager_with(player.clone());

        manager.set_search_text("春日影");
        assert_eq!(manager.set_search_text("春日影"), MediaEffect::None);
        assert_eq!(manager.search_text(), "春日影");
        assert_eq!(calls(&player).len(), 2);

        assert_eq!(manager.set_search_text(String::from("迷星")), MediaEffect::None);
        assert_eq!(manager.search_text(), "迷星");
        assert_eq!(manager.filtered_catalog().len(), 1);
    }

    #[test]
    fn missing_media_is_silently_skipped() {
        let player = FakePlayer::default();
        player.0.borrow_mut().assets_missing = true;
        let mut manager = manager_with(player.clone());

        manager.set_search_text("春");
        assert_eq!(manager.playback_status(), PlaybackStatus::Idle);
        manager.set_search_text("春日影");
        assert_eq!(manager.playback_status(), PlaybackStatus::Idle);
    }

    #[test]
    fn toggling_persists_every_mutation() {
        let store = SharedStore::default();
        let mut manager =
            GalleryManager::new(Box::new(store.clone()), Box::new(FakePlayer::default()));
        let a = item("a", "MyGO01 a");
        let b = item("b", "MyGO02 b");

        assert!(manager.toggle_favorite(&a));
        assert!(manager.toggle_favorite(&b));
        assert!(manager.is_favorite(&a));

        let mut restored =
            GalleryManager::new(Box::new(store.clone()), Box::new(FakePlayer::default()));
        restored.load_favorites();
        assert_eq!(restored.favorites(), &[a.clone(), b.clone()]);

        assert!(!manager.toggle_favorite(&a));
        restored.load_favorites();
        assert_eq!(restored.favorites(), &[b]);
    }

    #[test]
    fn failed_write_keeps_memory_state() {
        let mut seeded = MemoryStore::new();
        seeded
            .set(FAVORITES_KEY, &serde_json::to_vec(&vec![item("a", "MyGO01 a")]).unwrap())
            .unwrap();

        let mut manager = GalleryManager::new(
            Box::new(ReadOnlyStore(seeded)),
            Box::new(FakePlayer::default()),
        );
        manager.load_favorites();
        assert_eq!(manager.favorites().len(), 1);

        manager.toggle_favorite(&item("b", "MyGO02 b"));
        assert_eq!(manager.favorites().len(), 2);
        assert!(manager.is_favorite(&item("b", "MyGO02 b")));
    }

    #[test]
    fn load_reads_bundled_catalog() {
        let manager = GalleryManager::load(
            &CatalogSource::Bundled,
            Box::new(MemoryStore::new()),
            Box::new(FakePlayer::default()),
        );
        assert!(!manager.catalog().is_empty());
        assert!(manager.favorites().is_empty());
    }
}
