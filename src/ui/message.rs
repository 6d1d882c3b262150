#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppMessage {
    // User Input
    Quit,

    // Search
    SearchInput(char),
    SearchPaste(String),
    SearchBackspace,
    ClearSearch,

    // Gallery
    SelectNext,
    SelectPrevious,
    ToggleFavoritesView,
    ToggleFavorite,
    DownloadSelected,
    OpenSelected,
}
