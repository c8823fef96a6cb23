//!
//! Output image format.
//!

use std::path::Path;

use plotters::prelude::*;

use crate::chart::error::Error as ChartError;
use crate::chart::Chart;

///
/// Output image format.
///
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    /// Scalable vector graphics.
    Svg,
    /// Portable network graphics.
    Png,
}

impl Format {
    /// All formats in the order they are written.
    pub const ALL: [Self; 2] = [Self::Svg, Self::Png];

    ///
    /// Returns the file extension.
    ///
    pub fn extension(&self) -> &'static str {
        match self {
            Self::Svg => "svg",
            Self::Png => "png",
        }
    }

    ///
    /// Draws `chart` into the file at `path` with the backend of the format.
    ///
    pub fn draw(&self, chart: &Chart, path: &Path) -> Result<(), ChartError> {
        match self {
            Self::Svg => {
                let root = SVGBackend::new(path, crate::chart::SIZE).into_drawing_area();
                chart.draw(&root)
            }
            Self::Png => {
                let root = BitMapBackend::new(path, crate::chart::SIZE).into_drawing_area();
                chart.draw(&root)
            }
        }
    }
}

impl std::fmt::Display for Format {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Format::Svg => write!(f, "svg"),
            Format::Png => write!(f, "png"),
        }
    }
}
