//! Bar Chart Renderer
//! Draws the top equipment totals to a PNG with plotters.
//!
//! Layout:
//! 1. Title centered above the plot
//! 2. One bar per equipment, in ranking order
//! 3. Equipment names under the bars, rotated
//! 4. Y-axis from zero (or the smallest negative total) to a padded maximum

use crate::error::{PipelineError, Result};
use crate::stats::TopEquipment;
use log::{info, warn};
use plotters::prelude::*;
use plotters::style::FontTransform;
use std::ops::Range;
use std::path::{Path, PathBuf};

pub const CHART_TITLE: &str = "Top 10 Rented Farm Equipment by Rental Amount";
pub const X_AXIS_LABEL: &str = "Farm Equipment";
pub const Y_AXIS_LABEL: &str = "Total Rental Amount";

/// 12x8 inches at 100 DPI
pub const CHART_SIZE: (u32, u32) = (1200, 800);

const BAR_COLOR: RGBColor = RGBColor(31, 119, 180);
const MAX_LABEL_CHARS: usize = 28;

pub struct BarChartRenderer;

impl BarChartRenderer {
    /// Render `top` as a bar chart at `output_path`, replacing any existing file.
    ///
    /// Absent or empty data logs a warning, leaves `output_path` untouched and
    /// returns [`PipelineError::NoDataToVisualize`].
    pub fn render(top: Option<&TopEquipment>, output_path: &Path) -> Result<PathBuf> {
        info!("Creating visualization.");

        let Some(top) = top.filter(|t| !t.is_empty()) else {
            warn!("No data to visualize.");
            return Err(PipelineError::NoDataToVisualize);
        };

        Self::draw_bar_chart(top, output_path)
            .map_err(|e| PipelineError::Render(e.to_string()))?;

        info!("Visualization saved to {}", output_path.display());
        println!("Visualization saved to {}", output_path.display());
        Ok(output_path.to_path_buf())
    }

    fn draw_bar_chart(
        top: &TopEquipment,
        output_path: &Path,
    ) -> std::result::Result<(), Box<dyn std::error::Error>> {
        let labels: Vec<String> = top
            .entries
            .iter()
            .map(|e| Self::short_label(&e.name))
            .collect();
        let y_range = Self::value_range(&top.totals());

        let root = BitMapBackend::new(output_path, CHART_SIZE).into_drawing_area();
        root.fill(&WHITE)?;

        let mut chart = ChartBuilder::on(&root)
            .caption(CHART_TITLE, ("sans-serif", 28))
            .margin(20)
            .x_label_area_size(220)
            .y_label_area_size(100)
            .build_cartesian_2d((0u32..labels.len() as u32).into_segmented(), y_range)?;

        let label_font = ("sans-serif", 14)
            .into_font()
            .transform(FontTransform::Rotate90);

        chart
            .configure_mesh()
            .disable_x_mesh()
            .x_labels(labels.len())
            .x_label_style(label_font)
            .x_label_formatter(&|v: &SegmentValue<u32>| match v {
                SegmentValue::CenterOf(i) | SegmentValue::Exact(i) => {
                    labels.get(*i as usize).cloned().unwrap_or_default()
                }
                SegmentValue::Last => String::new(),
            })
            .y_label_formatter(&|v: &f64| format!("{v:.0}"))
            .x_desc(X_AXIS_LABEL)
            .y_desc(Y_AXIS_LABEL)
            .axis_desc_style(("sans-serif", 18))
            .draw()?;

        chart.draw_series(
            Histogram::vertical(&chart)
                .style(BAR_COLOR.filled())
                .margin(12)
                .data(top.entries.iter().enumerate().map(|(i, e)| (i as u32, e.total))),
        )?;

        root.present()?;
        Ok(())
    }

    /// Y-axis span covering every total plus headroom, snapped to a nice step.
    pub fn value_range(totals: &[f64]) -> Range<f64> {
        let finite = totals.iter().copied().filter(|v| v.is_finite());
        let (min, max) = finite.fold((0.0f64, 0.0f64), |(lo, hi), v| (lo.min(v), hi.max(v)));

        let span = max - min;
        if span <= 0.0 {
            return 0.0..1.0;
        }

        let step = Self::nice_step(span * 1.1, 8);
        let lo = if min < 0.0 { (min * 1.1 / step).floor() * step } else { 0.0 };
        let hi = if max > 0.0 { (max * 1.1 / step).ceil() * step } else { 0.0 };
        lo..hi
    }

    fn nice_step(range: f64, target_steps: usize) -> f64 {
        let raw_step = range / target_steps as f64;
        let magnitude = 10f64.powf(raw_step.log10().floor());
        let normalized = raw_step / magnitude;

        let nice = if normalized <= 1.0 {
            1.0
        } else if normalized <= 2.0 {
            2.0
        } else if normalized <= 5.0 {
            5.0
        } else {
            10.0
        };

        nice * magnitude
    }

    /// Truncate long equipment names so rotated labels fit the label area.
    pub fn short_label(name: &str) -> String {
        if name.chars().count() <= MAX_LABEL_CHARS {
            return name.to_string();
        }
        let head: String = name.chars().take(MAX_LABEL_CHARS - 1).collect();
        format!("{head}…")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stats::EquipmentTotal;

    #[test]
    fn absent_data_writes_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("top_10_equipment.png");

        let err = BarChartRenderer::render(None, &path).unwrap_err();
        assert!(matches!(err, PipelineError::NoDataToVisualize));
        assert!(!path.exists());
    }

    #[test]
    fn empty_ranking_is_treated_as_absent() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("top_10_equipment.png");

        let err = BarChartRenderer::render(Some(&TopEquipment::default()), &path).unwrap_err();
        assert!(matches!(err, PipelineError::NoDataToVisualize));
        assert!(!path.exists());
    }

    #[test]
    fn ranking_is_drawn_over_existing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("top_10_equipment.png");
        std::fs::write(&path, b"stale chart").unwrap();

        let top = TopEquipment {
            entries: vec![
                EquipmentTotal {
                    name: "Combine".into(),
                    total: 250.0,
                },
                EquipmentTotal {
                    name: "Rake".into(),
                    total: 200.0,
                },
            ],
        };

        match BarChartRenderer::render(Some(&top), &path) {
            Ok(written) => {
                assert_eq!(written, path);
                let bytes = std::fs::read(&path).unwrap();
                assert!(bytes.starts_with(b"\x89PNG\r\n\x1a\n"));
                assert!(bytes.len() > b"stale chart".len());
            }
            // Hosts without any system font cannot draw the labels
            Err(PipelineError::Render(_)) => {}
            Err(other) => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn range_starts_at_zero_and_covers_max() {
        let range = BarChartRenderer::value_range(&[250.0, 200.0, 12.0]);
        assert_eq!(range.start, 0.0);
        assert!(range.end >= 250.0 * 1.1);
        assert!(range.end <= 400.0);
    }

    #[test]
    fn range_extends_below_zero_for_refunds() {
        let range = BarChartRenderer::value_range(&[100.0, -40.0]);
        assert!(range.start <= -40.0);
        assert!(range.end >= 100.0);
    }

    #[test]
    fn degenerate_range_falls_back_to_unit() {
        assert_eq!(BarChartRenderer::value_range(&[]), 0.0..1.0);
        assert_eq!(BarChartRenderer::value_range(&[0.0, 0.0]), 0.0..1.0);
    }

    #[test]
    fn nice_step_snaps_to_1_2_5() {
        assert_eq!(BarChartRenderer::nice_step(80.0, 8), 10.0);
        assert_eq!(BarChartRenderer::nice_step(150.0, 8), 20.0);
        assert_eq!(BarChartRenderer::nice_step(330.0, 8), 50.0);
    }

    #[test]
    fn long_labels_are_truncated() {
        assert_eq!(BarChartRenderer::short_label("Tractor"), "Tractor");

        let long = "Self-Propelled Forage Harvester 9000 Series";
        let short = BarChartRenderer::short_label(long);
        assert_eq!(short.chars().count(), MAX_LABEL_CHARS);
        assert!(short.ends_with('…'));
    }
}
