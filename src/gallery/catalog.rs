use std::path::{Path, PathBuf};

use rust_embed::RustEmbed;
use thiserror::Error;
use tracing::{error, info};

use super::ImageItem;

pub const CATALOG_FILE: &str = "pic_database.json";

#[derive(RustEmbed)]
#[folder = "assets/"]
struct BundledAssets;

#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("Catalog asset {0} is not bundled")]
    Missing(String),

    #[error("Failed to read catalog {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to decode catalog: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Where the catalog document comes from.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum CatalogSource {
    #[default]
    Bundled,
    File(PathBuf),
}

impl CatalogSource {
    pub fn from_override(path: Option<&Path>) -> Self {
        match path {
            Some(path) => CatalogSource::File(path.to_path_buf()),
            None => CatalogSource::Bundled,
        }
    }

    fn read(&self) -> Result<Vec<u8>, CatalogError> {
        match self {
            CatalogSource::Bundled => BundledAssets::get(CATALOG_FILE)
                .map(|file| file.data.into_owned())
                .ok_or_else(|| CatalogError::Missing(CATALOG_FILE.to_string())),
            CatalogSource::File(path) => std::fs::read(path).map_err(|source| CatalogError::Read {
                path: path.clone(),
                source,
            }),
        }
    }
}

pub fn parse_catalog(bytes: &[u8]) -> Result<Vec<ImageItem>, CatalogError> {
    Ok(serde_json::from_slice(bytes)?)
}

pub fn try_load_catalog(source: &CatalogSource) -> Result<Vec<ImageItem>, CatalogError> {
    parse_catalog(&source.read()?)
}

/// Loads the catalog, degrading to an empty one on any failure.
pub fn load_catalog(source: &CatalogSource) -> Vec<ImageItem> {
    match try_load_catalog(source) {
        Ok(items) => {
            info!("Loaded {} catalog images from {:?}", items.len(), source);
            items
        }
        Err(e) => {
            error!("Error loading catalog: {}", e);
            Vec::new()
        }
    }
}
