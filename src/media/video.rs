use std::{
    path::Path,
    process::{Child, Command, Stdio},
};

use tracing::{debug, warn};

use super::{MediaError, config::PlayerCommand};

/// Hands video clips to an external full-screen player.
pub struct VideoLauncher {
    command: PlayerCommand,
    child: Option<Child>,
}

impl VideoLauncher {
    pub fn new(command: PlayerCommand) -> Self {
        Self {
            command,
            child: None,
        }
    }

    /// Starts `path` from the beginning, replacing a still-running player.
    pub fn launch(&mut self, path: &Path) -> Result<(), MediaError> {
        self.stop();

        let child = Command::new(&self.command.program)
            .args(&self.command.args)
            .arg(path)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()
            .map_err(|source| MediaError::LaunchError {
                program: self.command.program.clone(),
                source,
            })?;

        debug!("Launched {} (pid {})", self.command.program, child.id());
        self.child = Some(child);
        Ok(())
    }

    fn stop(&mut self) {
        if let Some(mut child) = self.child.take() {
            if let Ok(None) = child.try_wait() {
                if let Err(e) = child.kill() {
                    warn!("Failed to stop video player: {}", e);
                }
            }
            let _ = child.wait();
        }
    }
}

impl Drop for VideoLauncher {
    fn drop(&mut self) {
        self.stop();
    }
}

#[cfg(all(test, unix))]
mod tests {
    use super::*;

    fn is_running(launcher: &mut VideoLauncher) -> bool {
        launcher
            .child
            .as_mut()
            .is_some_and(|child| matches!(child.try_wait(), Ok(None)))
    }

    #[test]
    fn missing_program_is_a_launch_error() {
        let mut launcher = VideoLauncher::new(PlayerCommand {
            program: "haruhikage-no-such-player".to_string(),
            args: vec![],
        });
        assert!(matches!(
            launcher.launch(Path::new("clip.mp4")),
            Err(MediaError::LaunchError { .. })
        ));
        assert!(!is_running(&mut launcher));
    }

    #[test]
    fn relaunch_replaces_running_player() {
        let mut launcher = VideoLauncher::new(PlayerCommand {
            program: "sleep".to_string(),
            args: vec![],
        });
        launcher.launch(Path::new("30")).unwrap();
        assert!(is_running(&mut launcher));
        launcher.launch(Path::new("30")).unwrap();
        assert!(is_running(&mut launcher));
    }
}
