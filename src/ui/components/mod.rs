pub mod search_bar;
pub mod status_bar;

pub use search_bar::SearchBar;
pub use status_bar::StatusBar;
