//!
//! The platform image viewer.
//!

use std::path::Path;
use std::process::Command;

///
/// The image viewer error.
///
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The launcher could not be started.
    #[error("Starting viewer `{program}` for {path:?}: {error}")]
    Spawn {
        /// The launcher program.
        program: String,
        /// The image path.
        path: std::path::PathBuf,
        /// The underlying IO error.
        error: std::io::Error,
    },
    /// The launcher exited with an error.
    #[error("Viewer `{program}` for {path:?} exited with {status}")]
    Status {
        /// The launcher program.
        program: String,
        /// The image path.
        path: std::path::PathBuf,
        /// The launcher exit status.
        status: std::process::ExitStatus,
    },
}

///
/// Opens the image at `path` in the platform default viewer.
///
/// Blocks until the launcher returns, which usually happens as soon as the
/// viewer window is up.
///
pub fn display(path: &Path) -> Result<(), Error> {
    let mut command = launcher();
    command.arg(path);
    let program = command.get_program().to_string_lossy().into_owned();

    let status = command.status().map_err(|error| Error::Spawn {
        program: program.clone(),
        path: path.to_path_buf(),
        error,
    })?;
    if !status.success() {
        return Err(Error::Status {
            program,
            path: path.to_path_buf(),
            status,
        });
    }
    Ok(())
}

#[cfg(target_os = "macos")]
fn launcher() -> Command {
    Command::new("open")
}

#[cfg(target_os = "windows")]
fn launcher() -> Command {
    let mut command = Command::new("cmd");
    command.args(["/C", "start", ""]);
    command
}

#[cfg(not(any(target_os = "macos", target_os = "windows")))]
fn launcher() -> Command {
    Command::new("xdg-open")
}
