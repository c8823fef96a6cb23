//!
//! The grouped bar chart tests.
//!

use plotters::prelude::*;

use crate::measurement::implementation::Implementation;
use crate::scenario::Scenario;
use crate::series::compute_aggregates;
use crate::series::Series;

use super::Chart;

fn chart() -> Chart {
    let legacy = compute_aggregates(&Implementation::Legacy.measurements()).expect("Always valid");
    let optimized =
        compute_aggregates(&Implementation::Optimized.measurements()).expect("Always valid");
    Chart::new(
        legacy,
        optimized,
        [Scenario::HappyPath.label(), Scenario::ChallengePath.label()],
    )
}

#[test]
fn four_bars() {
    let bars = chart().bars();

    assert_eq!(bars.len(), 4);
    let heights: Vec<u64> = bars.iter().map(|bar| bar.height).collect();
    assert_eq!(heights, vec![690897, 1014182, 156588, 220361]);
}

#[test]
fn bars_are_offset_by_half_width() {
    let chart = chart();
    let bars = chart.bars();

    for bar in bars.iter() {
        let expected = if bar.series_index == 0 {
            bar.group_index as f64 - chart.bar_width / 2.0
        } else {
            bar.group_index as f64 + chart.bar_width / 2.0
        };
        assert!((bar.center - expected).abs() < 1e-9, "{bar:?}");
    }
}

#[test]
fn bars_do_not_overlap() {
    let bars = chart().bars();

    for group_index in 0..2 {
        let group: Vec<_> = bars
            .iter()
            .filter(|bar| bar.group_index == group_index)
            .collect();
        assert_eq!(group.len(), 2);
        assert!(group[0].right() <= group[1].left() + 1e-9);
    }
}

#[test]
fn four_annotations_match_bars() {
    let chart = chart();
    let bars = chart.bars();
    let annotations = chart.annotations();

    assert_eq!(annotations.len(), 4);
    for (bar, annotation) in bars.iter().zip(annotations.iter()) {
        assert_eq!(annotation.text, bar.height.to_string());
        assert_eq!(annotation.x, bar.center);
        assert_eq!(annotation.y, bar.height as f64);
        assert_eq!(annotation.offset_points, 3.0);
    }
}

#[test]
fn annotation_offset_in_pixels() {
    let annotations = chart().annotations();

    assert_eq!(annotations[0].offset_pixels(72.0), 3);
    assert_eq!(annotations[0].offset_pixels(100.0), 4);
}

#[test]
fn group_labels() {
    let chart = chart();

    assert_eq!(chart.group_label(0.0), Some("Happy Path"));
    assert_eq!(chart.group_label(1.0), Some("Challenge Path"));
    assert_eq!(chart.group_label(0.5), None);
    assert_eq!(chart.group_label(2.0), None);
    assert_eq!(chart.group_label(-1.0), None);
}

#[test]
fn ranges_contain_all_bars() {
    let chart = chart();
    let x_range = chart.x_range();
    let y_range = chart.y_range();

    for bar in chart.bars() {
        assert!(x_range.start < bar.left() && bar.right() < x_range.end);
        assert!((bar.height as f64) < y_range.end);
    }
    assert_eq!(y_range.start, 0.0);
}

#[test]
fn empty_series_ranges() {
    let chart = Chart::new(
        Series::new("Legacy", [0, 0]),
        Series::new("Optimized", [0, 0]),
        ["Happy Path", "Challenge Path"],
    );

    assert_eq!(chart.y_range(), 0.0..1.0);
}

#[test]
fn y_axis() {
    let chart = chart();

    assert_eq!(chart.y_label, "Gas");
    assert_eq!(chart.y_formatter.format(400_000.0), "400\u{2009}k");
}

#[test]
fn draw_svg() {
    let chart = chart();
    let mut buffer = String::new();
    {
        let root = SVGBackend::with_string(&mut buffer, super::SIZE).into_drawing_area();
        chart.draw(&root).expect("Always valid");
    }

    for annotation in chart.annotations() {
        assert!(buffer.contains(annotation.text.as_str()), "{annotation:?}");
    }
    assert_eq!(buffer.matches("Happy Path").count(), 1);
    assert_eq!(buffer.matches("Challenge Path").count(), 1);
    assert!(buffer.contains("Legacy"));
    assert!(buffer.contains("Optimized"));
    assert!(buffer.contains("Gas"));
}
