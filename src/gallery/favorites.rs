use std::collections::HashSet;

use thiserror::Error;
use tracing::{debug, warn};

use super::ImageItem;
use crate::storage::{KeyValueStore, StoreError};

/// Store key holding the serialized favorites list.
pub const FAVORITES_KEY: &str = "favorites";

#[derive(Error, Debug)]
pub enum FavoritesError {
    #[error("Failed to encode favorites: {0}")]
    Encode(#[from] serde_json::Error),

    #[error(transparent)]
    Store(#[from] StoreError),
}

/// Ordered favorites, unique by id.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Favorites {
    items: Vec<ImageItem>,
}

impl Favorites {
    pub fn new() -> Self {
        Self::default()
    }

    /// Keeps the first occurrence of every id.
    pub fn from_items(items: impl IntoIterator<Item = ImageItem>) -> Self {
        let mut seen = HashSet::new();
        let items = items
            .into_iter()
            .filter(|item| seen.insert(item.id.clone()))
            .collect();
        Self { items }
    }

    pub fn items(&self) -> &[ImageItem] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn contains(&self, id: &str) -> bool {
        self.items.iter().any(|item| item.id == id)
    }

    /// Removes `item` by id if present, appends it otherwise. Returns whether
    /// it is a favorite afterwards.
    pub fn toggle(&mut self, item: &ImageItem) -> bool {
        if self.contains(&item.id) {
            self.items.retain(|existing| existing.id != item.id);
            false
        } else {
            self.items.push(item.clone());
            true
        }
    }

    pub fn encode(&self) -> Result<Vec<u8>, serde_json::Error> {
        serde_json::to_vec(&self.items)
    }

    pub fn decode(bytes: &[u8]) -> Result<Self, serde_json::Error> {
        let items: Vec<ImageItem> = serde_json::from_slice(bytes)?;
        Ok(Self::from_items(items))
    }

    /// Reads the persisted list. Absent or unreadable entries yield an empty
    /// list.
    pub fn load(store: &dyn KeyValueStore) -> Self {
        match store.get(FAVORITES_KEY) {
            Ok(Some(bytes)) => match Self::decode(&bytes) {
                Ok(favorites) => {
                    debug!("Loaded {} favorites", favorites.len());
                    favorites
                }
                Err(e) => {
                    warn!("Error loading favorites: {}", e);
                    Self::new()
                }
            },
            Ok(None) => Self::new(),
            Err(e) => {
                warn!("Error loading favorites: {}", e);
                Self::new()
            }
        }
    }

    pub fn save(&self, store: &mut dyn KeyValueStore) -> Result<(), FavoritesError> {
        let bytes = self.encode()?;
        store.set(FAVORITES_KEY, &bytes)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStore;

    fn item(id: &str) -> ImageItem {
        ImageItem::new(id, format!("MyGO01 item {id}"), format!("https://example.com/{id}.jpg"))
    }

    #[test]
    fn toggle_twice_restores_previous_sequence() {
        let mut favorites = Favorites::from_items([item("a"), item("b"), item("c")]);
        let before = favorites.clone();

        assert!(!favorites.toggle(&item("b")));
        assert!(!favorites.contains("b"));
        assert!(favorites.toggle(&item("d")));

        assert!(!favorites.toggle(&item("d")));
        assert_eq!(favorites.items(), &[item("a"), item("c")]);

        let mut favorites = before.clone();
        favorites.toggle(&item("z"));
        favorites.toggle(&item("z"));
        assert_eq!(favorites, before);
    }

    #[test]
    fn removal_is_by_id() {
        let mut favorites = Favorites::from_items([item("a")]);
        let renamed = ImageItem::new("a", "different name", "different url");
        assert!(!favorites.toggle(&renamed));
        assert!(favorites.is_empty());
    }

    #[test]
    fn decode_keeps_order_and_drops_duplicate_ids() {
        let favorites = Favorites::from_items([item("c"), item("a"), item("b")]);
        let decoded = Favorites::decode(&favorites.encode().unwrap()).unwrap();
        assert_eq!(decoded, favorites);

        let dup = serde_json::to_vec(&vec![item("a"), item("b"), item("a")]).unwrap();
        let decoded = Favorites::decode(&dup).unwrap();
        assert_eq!(decoded.items(), &[item("a"), item("b")]);
    }

    #[test]
    fn load_degrades_to_empty() {
        let store = MemoryStore::new();
        assert!(Favorites::load(&store).is_empty());

        let mut store = MemoryStore::new();
        store.set(FAVORITES_KEY, b"corrupt").unwrap();
        assert!(Favorites::load(&store).is_empty());
    }

    #[test]
    fn save_then_load_round_trips_through_store() {
        let mut store = MemoryStore::new();
        let favorites = Favorites::from_items([item("2"), item("1")]);
        favorites.save(&mut store).unwrap();
        assert_eq!(Favorites::load(&store), favorites);
    }
}
