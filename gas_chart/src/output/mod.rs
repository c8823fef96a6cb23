//!
//! Gas chart output.
//!


pub mod file;
pub mod format;

use std::path::Path;
use std::path::PathBuf;

use crate::chart::Chart;

use self::file::File;
use self::format::Format;

/// The default output base path.
pub const DEFAULT_BASE_PATH: &str = "gas-savings";

///
/// The set of image files the chart is written to.
///
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Output {
    /// The files, one per format.
    pub files: Vec<File>,
}

impl Output {
    ///
    /// Creates the output with every supported format next to `base_path`.
    ///
    pub fn new(base_path: &Path) -> Self {
        Self {
            files: Format::ALL
                .into_iter()
                .map(|format| File::new(base_path, format))
                .collect(),
        }
    }

    ///
    /// Draws the chart into every file, overwriting existing ones.
    ///
    /// Returns the written paths.
    ///
    pub fn write_to_files(&self, chart: &Chart) -> anyhow::Result<Vec<PathBuf>> {
        let mut paths = Vec::with_capacity(self.files.len());
        for File { path, format } in self.files.iter() {
            if let Some(parent) = path.parent() {
                if !parent.as_os_str().is_empty() {
                    std::fs::create_dir_all(parent).map_err(|error| {
                        anyhow::anyhow!("Chart directory {parent:?} creating: {error}")
                    })?;
                }
            }
            format
                .draw(chart, path.as_path())
                .map_err(|error| anyhow::anyhow!("Chart file {path:?} writing: {error}"))?;
            paths.push(path.to_owned());
        }
        Ok(paths)
    }
}

///
/// Writes the chart to `<base_path>.svg` and `<base_path>.png`.
///
pub fn save(chart: &Chart, base_path: &Path) -> anyhow::Result<Vec<PathBuf>> {
    Output::new(base_path).write_to_files(chart)
}
