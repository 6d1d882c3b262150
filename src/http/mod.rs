use std::path::PathBuf;

use thiserror::Error;
use tracing::info;

use crate::gallery::ImageItem;

#[derive(Error, Debug)]
pub enum DownloadError {
    #[error("Request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("Server answered {0}")]
    Status(reqwest::StatusCode),

    #[error("Failed to save {path}: {source}")]
    Save {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Saves gallery images to a local directory.
#[derive(Clone)]
pub struct ImageDownloader {
    client: reqwest::Client,
    target_dir: PathBuf,
}

impl ImageDownloader {
    pub fn new(target_dir: impl Into<PathBuf>) -> Self {
        Self {
            client: reqwest::Client::new(),
            target_dir: target_dir.into(),
        }
    }

    /// Where `item` lands once downloaded, if it already has.
    pub fn saved_path(&self, item: &ImageItem) -> Option<PathBuf> {
        let path = self.target_dir.join(file_name_for(item));
        path.is_file().then_some(path)
    }

    pub async fn download(&self, item: &ImageItem) -> Result<PathBuf, DownloadError> {
        let response = self.client.get(&item.image_url).send().await?;
        if !response.status().is_success() {
            return Err(DownloadError::Status(response.status()));
        }
        let bytes = response.bytes().await?;

        let path = self.target_dir.join(file_name_for(item));
        let save_err = |source: std::io::Error| DownloadError::Save {
            path: path.clone(),
            source,
        };
        tokio::fs::create_dir_all(&self.target_dir)
            .await
            .map_err(save_err)?;
        tokio::fs::write(&path, &bytes).await.map_err(save_err)?;

        info!("Saved {} ({} bytes)", path.display(), bytes.len());
        Ok(path)
    }
}

/// Last URL path segment, or `<id>.jpg` when the URL has none.
pub fn file_name_for(item: &ImageItem) -> String {
    reqwest::Url::parse(&item.image_url)
        .ok()
        .and_then(|url| {
            url.path_segments()?
                .next_back()
                .filter(|name| name.contains('.'))
                .map(str::to_string)
        })
        .unwrap_or_else(|| format!("{}.jpg", item.id))
}
