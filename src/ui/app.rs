use std::time::Instant;

use flume::{Receiver, Sender};
use ratatui::Frame;
use tracing::{info, warn};

use crate::{
    config::AppConfig,
    event::events::Event,
    gallery::{GalleryManager, catalog::CatalogSource},
    http::ImageDownloader,
    media::{ImageViewer, SystemMediaPlayer},
    splash::{ActiveFlag, SplashSequencer},
    storage::FileStore,
    util::task::TaskManager,
};

use super::{
    message::AppMessage,
    tui::{self, TerminalEvent},
    util::handler::EventHandler,
    views::{gallery::GalleryView, splash::SplashWidget},
};

/// The splash while it is mounted. Dropped as soon as its flag clears.
pub struct Splash {
    pub sequencer: SplashSequencer,
    pub started_at: Option<Instant>,
}

pub struct App {
    pub event_rx: Receiver<Event>,
    pub event_tx: Sender<Event>,
    pub splash_active: ActiveFlag,
    pub splash: Option<Splash>,
    pub gallery: GalleryManager,
    pub gallery_view: GalleryView,
    pub downloader: ImageDownloader,
    pub viewer: ImageViewer,
    pub task_manager: TaskManager,
    pub has_focus: bool,
    pub should_quit: bool,
}

impl App {
    pub fn new(config: AppConfig) -> color_eyre::Result<Self> {
        let (event_tx, event_rx) = flume::unbounded();

        let store = FileStore::new(config.store_dir());
        let player = SystemMediaPlayer::new(config.media.clone());
        let source = CatalogSource::from_override(config.catalog_path.as_deref());
        let gallery = GalleryManager::load(&source, Box::new(store), Box::new(player));

        let splash_active = ActiveFlag::new();
        let splash = Splash {
            sequencer: SplashSequencer::new(splash_active.clone(), config.splash_unit),
            started_at: None,
        };

        info!(
            "Starting with {} images, {} favorites",
            gallery.catalog().len(),
            gallery.favorites().len()
        );

        Ok(Self {
            event_rx,
            event_tx,
            splash_active,
            splash: Some(splash),
            gallery,
            gallery_view: GalleryView::new(),
            downloader: ImageDownloader::new(config.downloads_dir),
            viewer: ImageViewer::new(config.image_viewer),
            task_manager: TaskManager::new(),
            has_focus: true,
            should_quit: false,
        })
    }

    pub async fn run(&mut self) -> color_eyre::Result<()> {
        let mut tui = tui::Tui::new()?;
        tui.enter()?;

        while !self.should_quit {
            tui.draw(|f| {
                self.ui(f);
            })?;

            EventHandler::handle_events(self, &mut tui).await?;
        }

        self.task_manager.abort_all();
        tui.exit()?;
        Ok(())
    }

    fn ui(&mut self, frame: &mut Frame) {
        if !self.has_focus {
            return;
        }

        let area = frame.area();
        match &self.splash {
            Some(splash) => {
                frame.render_widget(SplashWidget::new(splash.sequencer.frame()), area);
            }
            None => self.gallery_view.render(frame, area, &self.gallery),
        }
    }

    /// Starts the splash clock on the first frame and advances it on every
    /// tick; unmounts it once the active flag has been cleared.
    pub fn on_tick(&mut self) {
        if let Some(splash) = &mut self.splash {
            let started_at = *splash.started_at.get_or_insert_with(Instant::now);
            splash.sequencer.advance(started_at.elapsed());
        }

        if self.splash.is_some() && !self.splash_active.is_active() {
            info!("Splash dismissed");
            self.splash = None;
        }
    }

    pub fn is_splash_showing(&self) -> bool {
        self.splash.is_some()
    }

    pub fn update(&mut self, msg: AppMessage) {
        match msg {
            AppMessage::Quit => self.should_quit = true,
            AppMessage::SearchInput(c) => {
                let mut text = self.gallery.search_text().to_string();
                text.push(c);
                self.set_search_text(text);
            }
            AppMessage::SearchPaste(pasted) => {
                let mut text = self.gallery.search_text().to_string();
                text.push_str(pasted.trim_end_matches(['\r', '\n']));
                self.set_search_text(text);
            }
            AppMessage::SearchBackspace => {
                let mut text = self.gallery.search_text().to_string();
                if text.pop().is_some() {
                    self.set_search_text(text);
                }
            }
            AppMessage::ClearSearch => self.set_search_text(String::new()),
            AppMessage::SelectNext => {
                let len = self.gallery_view.displayed(&self.gallery).len();
                self.gallery_view.select_next(len);
            }
            AppMessage::SelectPrevious => {
                let len = self.gallery_view.displayed(&self.gallery).len();
                self.gallery_view.select_previous(len);
            }
            AppMessage::ToggleFavoritesView => {
                self.gallery_view.toggle_favorites();
                self.gallery_view.clear_message();
            }
            AppMessage::ToggleFavorite => {
                if let Some(item) = self.gallery_view.selected(&self.gallery).cloned() {
                    let added = self.gallery.toggle_favorite(&item);
                    self.gallery_view
                        .set_message(if added { "加到最愛" } else { "移除最愛" });
                    let len = self.gallery_view.displayed(&self.gallery).len();
                    self.gallery_view.clamp_selection(len);
                }
            }
            AppMessage::DownloadSelected => self.download_selected(),
            AppMessage::OpenSelected => self.open_selected(),
        }
    }

    fn set_search_text(&mut self, text: String) {
        self.gallery.set_search_text(text);
        self.gallery_view.clear_message();
        let len = self.gallery_view.displayed(&self.gallery).len();
        self.gallery_view.clamp_selection(len);
    }

    /// Shows the selected image in the external viewer, preferring a copy
    /// already saved by a download over the remote URL.
    fn open_selected(&mut self) {
        let Some(item) = self.gallery_view.selected(&self.gallery).cloned() else {
            return;
        };

        let opened = match self.downloader.saved_path(&item) {
            Some(path) => self.viewer.open(&path),
            None => self.viewer.open(&item.image_url),
        };
        match opened {
            Ok(()) => self.gallery_view.set_message(format!("已開啟 #{}", item.id)),
            Err(e) => {
                warn!("Failed to open {}: {}", item.image_url, e);
                self.gallery_view.set_message(format!("無法開啟圖片: {e}"));
            }
        }
    }

    fn download_selected(&mut self) {
        let Some(item) = self.gallery_view.selected(&self.gallery).cloned() else {
            return;
        };

        let key = format!("download:{}", item.id);
        if self.task_manager.is_running(&key) {
            return;
        }

        self.gallery_view.set_message("下載中...");
        let downloader = self.downloader.clone();
        let tx = self.event_tx.clone();
        self.task_manager.spawn(
            key,
            tokio::spawn(async move {
                let event = match downloader.download(&item).await {
                    Ok(path) => Event::ImageDownloaded { id: item.id, path },
                    Err(e) => {
                        warn!("Failed to download {}: {}", item.image_url, e);
                        Event::DownloadFailed {
                            id: item.id,
                            error: e.to_string(),
                        }
                    }
                };
                let _ = tx.send(event);
            }),
        );
    }

    pub fn handle_event(&mut self, event: Event) {
        match event {
            Event::ImageDownloaded { id, path } => {
                info!("Image {} saved", id);
                self.gallery_view
                    .set_message(format!("已儲存 {}", path.display()));
            }
            Event::DownloadFailed { id, error } => {
                self.gallery_view
                    .set_message(format!("下載失敗 #{id}: {error}"));
            }
        }
    }

    pub fn handle_terminal_event(&mut self, event: TerminalEvent) {
        match event {
            TerminalEvent::Init | TerminalEvent::Tick => self.on_tick(),
            TerminalEvent::FocusGained => self.has_focus = true,
            TerminalEvent::FocusLost => self.has_focus = false,
            TerminalEvent::Paste(text) if !self.is_splash_showing() => {
                self.update(AppMessage::SearchPaste(text));
            }
            _ => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::{collections::HashMap, time::Duration};

    fn test_app(dir: &std::path::Path) -> App {
        let vars: HashMap<&str, String> = HashMap::from([
            ("HARUHIKAGE_DATA", dir.display().to_string()),
            ("HARUHIKAGE_DOWNLOADS", dir.join("downloads").display().to_string()),
            ("HARUHIKAGE_SPLASH_UNIT_MS", "1".to_string()),
            ("HARUHIKAGE_IMAGE_VIEWER", "haruhikage-no-such-viewer".to_string()),
        ]);
        let config = AppConfig::from_lookup(|key| vars.get(key).cloned());
        App::new(config).unwrap()
    }

    fn dismiss_splash(app: &mut App) {
        app.on_tick();
        std::thread::sleep(Duration::from_millis(10));
        app.on_tick();
        assert!(!app.is_splash_showing());
    }

    #[test]
    fn splash_unmounts_after_sequence() {
        let dir = tempfile::tempdir().unwrap();
        let mut app = test_app(dir.path());
        assert!(app.is_splash_showing());
        assert!(app.splash_active.is_active());

        dismiss_splash(&mut app);
        assert!(!app.splash_active.is_active());

        app.on_tick();
        assert!(!app.is_splash_showing());
    }

    #[test]
    fn typing_filters_the_gallery() {
        let dir = tempfile::tempdir().unwrap();
        let mut app = test_app(dir.path());
        dismiss_splash(&mut app);

        let all = app.gallery_view.displayed(&app.gallery).len();
        for c in "迷星".chars() {
            app.update(AppMessage::SearchInput(c));
        }
        assert_eq!(app.gallery.search_text(), "迷星");
        let filtered = app.gallery_view.displayed(&app.gallery);
        assert!(filtered.len() < all);
        assert!(filtered.iter().all(|item| item.display_name.contains("迷星")));

        app.update(AppMessage::SearchBackspace);
        assert_eq!(app.gallery.search_text(), "迷");
        app.update(AppMessage::ClearSearch);
        assert_eq!(app.gallery_view.displayed(&app.gallery).len(), all);
    }

    #[test]
    fn favorites_survive_restart() {
        let dir = tempfile::tempdir().unwrap();
        let mut app = test_app(dir.path());
        dismiss_splash(&mut app);

        app.update(AppMessage::SelectNext);
        app.update(AppMessage::SelectNext);
        let chosen = app.gallery_view.selected(&app.gallery).cloned().unwrap();
        app.update(AppMessage::ToggleFavorite);
        assert!(app.gallery.is_favorite(&chosen));

        app.update(AppMessage::ToggleFavoritesView);
        assert_eq!(app.gallery_view.displayed(&app.gallery), vec![&chosen]);

        let restarted = test_app(dir.path());
        assert_eq!(restarted.gallery.favorites(), &[chosen]);
    }

    #[test]
    fn missing_viewer_is_reported_in_status() {
        let dir = tempfile::tempdir().unwrap();
        let mut app = test_app(dir.path());
        dismiss_splash(&mut app);

        app.update(AppMessage::OpenSelected);
        assert_eq!(app.gallery_view.message(), None);

        app.update(AppMessage::SelectNext);
        app.update(AppMessage::OpenSelected);
        assert!(
            app.gallery_view
                .message()
                .is_some_and(|m| m.starts_with("無法開啟圖片")
                    && m.contains("haruhikage-no-such-viewer"))
        );
    }

    #[test]
    fn keys_are_ignored_during_splash() {
        let dir = tempfile::tempdir().unwrap();
        let mut app = test_app(dir.path());

        app.handle_terminal_event(TerminalEvent::Paste("春".to_string()));
        assert_eq!(app.gallery.search_text(), "");
    }

    #[test]
    fn download_results_are_reported() {
        let dir = tempfile::tempdir().unwrap();
        let mut app = test_app(dir.path());

        app.handle_event(Event::DownloadFailed {
            id: "0001".to_string(),
            error: "timeout".to_string(),
        });
        assert_eq!(app.gallery_view.message(), Some("下載失敗 #0001: timeout"));

        app.handle_event(Event::ImageDownloaded {
            id: "0001".to_string(),
            path: dir.path().join("0001.jpg"),
        });
        assert!(
            app.gallery_view
                .message()
                .is_some_and(|m| m.starts_with("已儲存") && m.ends_with("0001.jpg"))
        );
    }
}
