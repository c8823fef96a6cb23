//!
//! Represents a single chart output file in a set of many.
//!

use std::path::Path;
use std::path::PathBuf;

use super::format::Format;

///
/// Represents a single chart output file in a set of many.
///
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct File {
    /// Path to the file, the base path with the format extension appended.
    pub path: PathBuf,
    /// The image format.
    pub format: Format,
}

impl File {
    ///
    /// Creates a new file instance next to `base_path`.
    ///
    /// The extension is appended rather than substituted, so `gas.v2`
    /// becomes `gas.v2.svg`.
    ///
    pub fn new(base_path: &Path, format: Format) -> Self {
        let mut path = base_path.as_os_str().to_owned();
        path.push(".");
        path.push(format.extension());
        Self {
            path: PathBuf::from(path),
            format,
        }
    }
}
