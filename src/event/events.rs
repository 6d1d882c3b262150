use std::path::PathBuf;

/// Results of background work, delivered to the UI loop.
#[derive(Debug, Clone)]
pub enum Event {
    ImageDownloaded { id: String, path: PathBuf },
    DownloadFailed { id: String, error: String },
}
