//! SVG chart rendering via `plotters`.
//!
//! This is the presentation edge of the tool: it consumes the already-ranked
//! label/value pairs from the core and owns every styling decision. Bar
//! charts annotate each bar with a caller-supplied string (the raw value, or
//! the original price text for the auction leaderboard). Pie charts label
//! slices either with percentages (team distribution) or with absolute
//! counts derived from the slice values (player breakdown).

use std::path::Path;

use anyhow::{Context, Result};
use plotters::element::Pie;
use plotters::prelude::*;

pub const ORANGE: RGBColor = RGBColor(255, 165, 0);
pub const MEDIUM_SEA_GREEN: RGBColor = RGBColor(60, 179, 113);
pub const DODGER_BLUE: RGBColor = RGBColor(30, 144, 255);
pub const PLUM: RGBColor = RGBColor(221, 160, 221);

const PIE_PALETTE: &[RGBColor] = &[
    RGBColor(141, 211, 199),
    RGBColor(255, 255, 179),
    RGBColor(190, 186, 218),
    RGBColor(251, 128, 114),
    RGBColor(128, 177, 211),
    RGBColor(253, 180, 98),
    RGBColor(179, 222, 105),
    RGBColor(252, 205, 229),
    RGBColor(217, 217, 217),
    RGBColor(188, 128, 189),
];

const BAR_CHART_SIZE: (u32, u32) = (1200, 640);
const PIE_CHART_SIZE: (u32, u32) = (820, 820);

#[derive(Debug, Clone)]
pub struct Bar {
    pub label: String,
    pub value: f64,
    pub annotation: String,
}

#[derive(Debug, Clone)]
pub struct Slice {
    pub label: String,
    pub value: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SliceLabels {
    Percentages,
    AbsoluteValues,
}

/// Draws a vertical bar chart with one labeled bar per entry and an
/// annotation above each bar.
pub fn bar_chart(
    path: &Path,
    title: &str,
    y_label: &str,
    bars: &[Bar],
    color: RGBColor,
) -> Result<()> {
    let root = SVGBackend::new(path, BAR_CHART_SIZE).into_drawing_area();
    root.fill(&WHITE)?;
    let y_max = bars
        .iter()
        .map(|bar| bar.value)
        .fold(0.0_f64, f64::max)
        .max(1.0)
        * 1.15;
    let mut chart = ChartBuilder::on(&root)
        .caption(title, ("sans-serif", 28))
        .margin(18)
        .x_label_area_size(120)
        .y_label_area_size(70)
        .build_cartesian_2d((0..bars.len()).into_segmented(), 0f64..y_max)?;
    chart
        .configure_mesh()
        .disable_x_mesh()
        .x_desc("Player")
        .y_desc(y_label)
        .x_labels(bars.len().max(1))
        .x_label_formatter(&|segment| match segment {
            SegmentValue::Exact(idx) | SegmentValue::CenterOf(idx) => bars
                .get(*idx)
                .map(|bar| bar.label.clone())
                .unwrap_or_default(),
            SegmentValue::Last => String::new(),
        })
        .draw()?;
    chart.draw_series(bars.iter().enumerate().map(|(idx, bar)| {
        Rectangle::new(
            [
                (SegmentValue::Exact(idx), 0.0),
                (SegmentValue::Exact(idx + 1), bar.value),
            ],
            color.filled(),
        )
    }))?;
    chart.draw_series(bars.iter().enumerate().map(|(idx, bar)| {
        Text::new(
            bar.annotation.clone(),
            (SegmentValue::CenterOf(idx), bar.value),
            ("sans-serif", 14),
        )
    }))?;
    root.present()
        .with_context(|| format!("Writing chart {path:?}"))?;
    Ok(())
}

/// Draws a pie chart. With [`SliceLabels::AbsoluteValues`] each slice label
/// carries its rounded absolute value instead of a percentage.
pub fn pie_chart(path: &Path, title: &str, slices: &[Slice], labels: SliceLabels) -> Result<()> {
    let root = SVGBackend::new(path, PIE_CHART_SIZE).into_drawing_area();
    root.fill(&WHITE)?;
    let root = root.titled(title, ("sans-serif", 28))?;
    let (width, height) = root.dim_in_pixel();
    let center = ((width / 2) as i32, (height / 2) as i32);
    let radius = f64::from(width.min(height)) * 0.36;

    let sizes: Vec<f64> = slices.iter().map(|slice| slice.value).collect();
    let slice_labels: Vec<String> = slices
        .iter()
        .map(|slice| match labels {
            SliceLabels::Percentages => slice.label.clone(),
            SliceLabels::AbsoluteValues => {
                format!("{}: {:.0}", slice.label, slice.value.round())
            }
        })
        .collect();
    let colors: Vec<RGBColor> = (0..slices.len())
        .map(|idx| PIE_PALETTE[idx % PIE_PALETTE.len()])
        .collect();

    let mut pie = Pie::new(&center, &radius, &sizes, &colors, &slice_labels);
    pie.start_angle(-90.0);
    pie.label_style(("sans-serif", 18).into_font().color(&BLACK));
    if labels == SliceLabels::Percentages {
        pie.percentages(("sans-serif", 16).into_font().color(&BLACK));
    }
    root.draw(&pie)?;
    root.present()
        .with_context(|| format!("Writing chart {path:?}"))?;
    Ok(())
}
