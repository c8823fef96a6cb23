//!
//! The gas savings chart library.
//!

pub mod chart;
pub mod measurement;
pub mod output;
pub mod scenario;
pub mod series;
pub mod summary;
pub mod viewer;

pub use crate::chart::error::Error as ChartError;
pub use crate::chart::formatter::EngFormatter;
pub use crate::chart::render;
pub use crate::chart::Chart;
pub use crate::measurement::error::Error as MeasurementError;
pub use crate::measurement::implementation::Implementation;
pub use crate::measurement::MeasurementSet;
pub use crate::output::format::Format as OutputFormat;
pub use crate::output::save;
pub use crate::output::Output;
pub use crate::output::DEFAULT_BASE_PATH;
pub use crate::scenario::Scenario;
pub use crate::series::compute_aggregates;
pub use crate::series::Series;
pub use crate::summary::Summary;
pub use crate::viewer::display;
pub use crate::viewer::Error as ViewerError;
