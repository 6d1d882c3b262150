pub mod gallery;
pub mod splash;

pub use gallery::GalleryView;
pub use splash::SplashWidget;
