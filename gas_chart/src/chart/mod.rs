//!
//! The grouped bar chart.
//!

#[cfg(test)]
mod tests;

pub mod annotation;
pub mod axis;
pub mod bar;
pub mod error;
pub mod formatter;

use plotters::coord::Shift;
use plotters::prelude::*;
use plotters::style::text_anchor::HPos;
use plotters::style::text_anchor::Pos;
use plotters::style::text_anchor::VPos;

use crate::scenario::Scenario;
use crate::series::Series;

use self::annotation::Annotation;
use self::axis::GroupAxis;
use self::bar::Bar;
use self::error::Error as ChartError;
use self::formatter::EngFormatter;

/// The image size in pixels.
pub const SIZE: (u32, u32) = (640, 480);

/// The image resolution used to convert points to pixels.
pub const DPI: f64 = 100.0;

/// The bar width in the x-axis units.
pub const BAR_WIDTH: f64 = 0.35;

/// The y-axis description.
pub const Y_LABEL: &str = "Gas";

/// The separator between a tick value and its SI prefix.
pub const THIN_SPACE: &str = "\u{2009}";

/// The margin around the plot area, in pixels.
const TIGHT_LAYOUT_MARGIN: u32 = 8;

/// The x-axis label area height, in pixels.
const X_LABEL_AREA_SIZE: u32 = 28;

/// The y-axis label area width, in pixels.
const Y_LABEL_AREA_SIZE: u32 = 64;

/// The share of the data span left empty at the x-axis ends.
const X_MARGIN_RATIO: f64 = 0.05;

/// The share of the tallest bar left above it for its annotation.
const Y_HEADROOM_RATIO: f64 = 0.1;

/// The font family of all text.
const FONT_FAMILY: &str = "sans-serif";

/// The font size of all text.
const FONT_SIZE: f64 = 14.0;

/// The bar colors by series index.
const SERIES_COLORS: [RGBColor; 2] = [RGBColor(31, 119, 180), RGBColor(255, 127, 14)];

///
/// The grouped bar chart.
///
/// Every x-axis group holds one bar per series, placed side by side around
/// the group position.
///
#[derive(Debug, Clone, PartialEq)]
pub struct Chart {
    /// The x-axis group labels.
    pub labels: Vec<String>,
    /// The series, in the legend order.
    pub series: Vec<Series>,
    /// The bar width in the x-axis units.
    pub bar_width: f64,
    /// The y-axis description.
    pub y_label: String,
    /// The y-axis tick formatter.
    pub y_formatter: EngFormatter,
}

impl Chart {
    ///
    /// Lays out two series over the scenario groups.
    ///
    pub fn new(
        first: Series,
        second: Series,
        labels: [&str; Scenario::ALL.len()],
    ) -> Self {
        Self {
            labels: labels.iter().map(|label| (*label).to_owned()).collect(),
            series: vec![first, second],
            bar_width: BAR_WIDTH,
            y_label: Y_LABEL.to_owned(),
            y_formatter: EngFormatter::new(0, THIN_SPACE),
        }
    }

    ///
    /// Returns the bars, grouped by series.
    ///
    pub fn bars(&self) -> Vec<Bar> {
        let series_count = self.series.len() as f64;
        self.series
            .iter()
            .enumerate()
            .flat_map(|(series_index, series)| {
                let offset = (series_index as f64 - (series_count - 1.0) / 2.0) * self.bar_width;
                series
                    .values
                    .iter()
                    .enumerate()
                    .map(move |(group_index, gas)| Bar {
                        series_index,
                        group_index,
                        center: group_index as f64 + offset,
                        width: self.bar_width,
                        height: *gas,
                    })
            })
            .collect()
    }

    ///
    /// Returns the bar height annotations, one per bar.
    ///
    pub fn annotations(&self) -> Vec<Annotation> {
        self.bars().iter().map(Annotation::from).collect()
    }

    ///
    /// Returns the x-axis positions of the groups.
    ///
    pub fn group_positions(&self) -> Vec<f64> {
        (0..self.labels.len()).map(|index| index as f64).collect()
    }

    ///
    /// Returns the label of the group at `position`, if there is one.
    ///
    pub fn group_label(&self, position: f64) -> Option<&str> {
        let index = position.round();
        if (position - index).abs() > f64::EPSILON || index < 0.0 {
            return None;
        }
        self.labels.get(index as usize).map(String::as_str)
    }

    ///
    /// Returns the visible x-axis range.
    ///
    pub fn x_range(&self) -> std::ops::Range<f64> {
        let bars = self.bars();
        let left = bars.iter().map(Bar::left).fold(f64::INFINITY, f64::min);
        let right = bars.iter().map(Bar::right).fold(f64::NEG_INFINITY, f64::max);
        if left > right {
            return -0.5..0.5;
        }
        let margin = (right - left) * X_MARGIN_RATIO;
        (left - margin)..(right + margin)
    }

    ///
    /// Returns the visible y-axis range.
    ///
    pub fn y_range(&self) -> std::ops::Range<f64> {
        let tallest = self
            .series
            .iter()
            .flat_map(|series| series.values.iter())
            .copied()
            .max()
            .unwrap_or_default();
        if tallest == 0 {
            return 0.0..1.0;
        }
        0.0..(tallest as f64 * (1.0 + Y_HEADROOM_RATIO))
    }

    ///
    /// Draws the chart onto `root` and flushes the backend.
    ///
    pub fn draw<DB>(&self, root: &DrawingArea<DB, Shift>) -> Result<(), ChartError>
    where
        DB: DrawingBackend,
    {
        root.fill(&WHITE)
            .map_err(|error| ChartError::DrawingArea(error.to_string()))?;

        let mut chart = ChartBuilder::on(root)
            .margin(TIGHT_LAYOUT_MARGIN)
            .x_label_area_size(X_LABEL_AREA_SIZE)
            .y_label_area_size(Y_LABEL_AREA_SIZE)
            .build_cartesian_2d(
                GroupAxis::new(self.x_range(), self.group_positions()),
                self.y_range(),
            )
            .map_err(|error| ChartError::ChartConfig(error.to_string()))?;

        let x_formatter = |x: &f64| self.group_label(*x).unwrap_or_default().to_owned();
        let y_formatter = |y: &f64| self.y_formatter.format(*y);
        chart
            .configure_mesh()
            .disable_mesh()
            .x_label_formatter(&x_formatter)
            .y_label_formatter(&y_formatter)
            .y_desc(self.y_label.as_str())
            .label_style((FONT_FAMILY, FONT_SIZE))
            .axis_desc_style((FONT_FAMILY, FONT_SIZE))
            .draw()
            .map_err(|error| ChartError::ChartConfig(error.to_string()))?;

        let bars = self.bars();
        for (series_index, series) in self.series.iter().enumerate() {
            let color = SERIES_COLORS[series_index % SERIES_COLORS.len()];
            chart
                .draw_series(
                    bars.iter()
                        .filter(|bar| bar.series_index == series_index)
                        .map(|bar| {
                            Rectangle::new(
                                [(bar.left(), 0.0), (bar.right(), bar.height as f64)],
                                color.filled(),
                            )
                        }),
                )
                .map_err(|error| ChartError::Drawing(error.to_string()))?
                .label(series.label.as_str())
                .legend(move |(x, y)| {
                    Rectangle::new([(x, y - 5), (x + 20, y + 5)], color.filled())
                });
        }

        let text_style = TextStyle::from((FONT_FAMILY, FONT_SIZE).into_font())
            .pos(Pos::new(HPos::Center, VPos::Bottom));
        chart
            .draw_series(self.annotations().into_iter().map(|annotation| {
                let offset = annotation.offset_pixels(DPI);
                EmptyElement::at((annotation.x, annotation.y))
                    + Text::new(annotation.text, (0, -offset), text_style.clone())
            }))
            .map_err(|error| ChartError::Drawing(error.to_string()))?;

        chart
            .configure_series_labels()
            .position(SeriesLabelPosition::UpperRight)
            .background_style(WHITE.mix(0.8))
            .border_style(BLACK.mix(0.2))
            .label_font((FONT_FAMILY, FONT_SIZE))
            .draw()
            .map_err(|error| ChartError::Drawing(error.to_string()))?;

        root.present()
            .map_err(|error| ChartError::Present(error.to_string()))?;
        Ok(())
    }
}

///
/// Lays out the legacy and optimized series over the scenario groups.
///
pub fn render(first: Series, second: Series, labels: [&str; Scenario::ALL.len()]) -> Chart {
    Chart::new(first, second, labels)
}
