use thiserror::Error;

#[derive(Error, Debug)]
pub enum MediaError {
    #[error("Media asset not found: {0}")]
    AssetNotFound(String),

    #[error("Audio output device error: {0}")]
    DeviceError(String),

    #[error("Decoding error: {0}")]
    DecodingError(String),

    #[error("Failed to launch '{program}': {source}")]
    LaunchError {
        program: String,
        #[source]
        source: std::io::Error,
    },
}
