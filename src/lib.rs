pub mod config;
pub mod event;
pub mod gallery;
pub mod http;
pub mod media;
pub mod splash;
pub mod storage;
pub mod ui;
pub mod util;
