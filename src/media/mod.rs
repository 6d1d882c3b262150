pub mod config;
pub mod error;
pub mod playback;
pub mod player;
pub mod state;
pub mod traits;
pub mod video;
pub mod viewer;

pub use error::MediaError;
pub use player::SystemMediaPlayer;
pub use state::PlaybackStatus;
pub use traits::MediaPlayer;
pub use viewer::ImageViewer;
