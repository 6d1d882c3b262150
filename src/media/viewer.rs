use std::{
    ffi::OsStr,
    process::{Child, Command, Stdio},
};

use tracing::debug;

use super::{MediaError, config::PlayerCommand};

/// Opens images in an external viewer. Viewers outlive the app; finished
/// ones are reaped on the next open.
pub struct ImageViewer {
    command: PlayerCommand,
    children: Vec<Child>,
}

impl ImageViewer {
    pub fn new(command: PlayerCommand) -> Self {
        Self {
            command,
            children: Vec::new(),
        }
    }

    /// Shows `target`, a local file or a URL.
    pub fn open(&mut self, target: impl AsRef<OsStr>) -> Result<(), MediaError> {
        self.reap();

        let child = Command::new(&self.command.program)
            .args(&self.command.args)
            .arg(target.as_ref())
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()
            .map_err(|source| MediaError::LaunchError {
                program: self.command.program.clone(),
                source,
            })?;

        debug!("Opened image with {} (pid {})", self.command.program, child.id());
        self.children.push(child);
        Ok(())
    }

    fn reap(&mut self) {
        self.children.retain_mut(|child| matches!(child.try_wait(), Ok(None)));
    }
}
