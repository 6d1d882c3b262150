//! Image gallery: the bundled catalog, the persisted favorites list and the
//! search box that filters both (and hides two easter eggs).

pub mod catalog;
pub mod favorites;
pub mod filter;
pub mod item;
pub mod manager;
pub mod trigger;

pub use item::ImageItem;
pub use manager::GalleryManager;
