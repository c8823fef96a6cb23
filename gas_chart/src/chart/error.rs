//!
//! The chart rendering error.
//!

///
/// The chart rendering error.
///
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The drawing area could not be prepared.
    #[error("Failed to create drawing area: {0}")]
    DrawingArea(String),
    /// The coordinate system or the mesh could not be configured.
    #[error("Failed to configure chart: {0}")]
    ChartConfig(String),
    /// The bars, annotations, or the legend could not be drawn.
    #[error("Failed to draw chart elements: {0}")]
    Drawing(String),
    /// The backend could not flush the image.
    #[error("Failed to present chart: {0}")]
    Present(String),
}
