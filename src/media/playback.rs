use std::{fs::File, io::BufReader, path::Path};

use rodio::{Decoder, OutputStream, OutputStreamBuilder, Sink};
use tracing::info;

use super::MediaError;

/// Lazily opened rodio output. The device is only touched on the first clip,
/// so a machine without audio never fails at startup.
#[derive(Default)]
pub struct PlaybackEngine {
    output: Option<(OutputStream, Sink)>,
}

impl PlaybackEngine {
    pub fn new() -> Self {
        Self { output: None }
    }

    fn open_output() -> Result<(OutputStream, Sink), MediaError> {
        let mut stream = OutputStreamBuilder::open_default_stream()
            .map_err(|e| MediaError::DeviceError(e.to_string()))?;
        // The drop notice goes to stderr and would tear the TUI.
        stream.log_on_drop(false);
        let sink = Sink::connect_new(stream.mixer());
        info!("Opened default audio output");
        Ok((stream, sink))
    }

    fn sink(&mut self) -> Result<&Sink, MediaError> {
        if self.output.is_none() {
            self.output = Some(Self::open_output()?);
        }
        self.output
            .as_ref()
            .map(|(_, sink)| sink)
            .ok_or_else(|| MediaError::DeviceError("audio output unavailable".to_string()))
    }

    /// Replaces whatever is queued with the file at `path`.
    pub fn play_file(&mut self, path: &Path) -> Result<(), MediaError> {
        let file = File::open(path)
            .map_err(|_| MediaError::AssetNotFound(path.display().to_string()))?;
        let byte_len = file.metadata().ok().map(|m| m.len());

        let mut builder = Decoder::builder().with_data(BufReader::new(file));
        if let Some(hint) = path.extension().and_then(|ext| ext.to_str()) {
            builder = builder.with_hint(hint);
        }
        if let Some(len) = byte_len {
            builder = builder.with_byte_len(len);
        }
        let decoder = builder
            .build()
            .map_err(|e| MediaError::DecodingError(e.to_string()))?;

        let sink = self.sink()?;
        sink.clear();
        sink.append(decoder);
        sink.play();
        Ok(())
    }

    pub fn stop(&mut self) {
        if let Some((_, sink)) = &self.output {
            sink.clear();
        }
    }

    pub fn is_playing(&self) -> bool {
        match &self.output {
            Some((_, sink)) => !sink.empty() && !sink.is_paused(),
            None => false,
        }
    }
}
