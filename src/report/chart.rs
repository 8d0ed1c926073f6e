//! Bar chart rendering

use crate::config::ChartConfig;
use crate::error::{AnalyzerError, Result};
use crate::types::FrequencyDistribution;
use plotters::coord::ranged1d::SegmentValue;
use plotters::prelude::*;
use plotters::style::text_anchor::{HPos, Pos, VPos};
use std::path::{Path, PathBuf};

/// Draws a frequency distribution to an image file
#[cfg_attr(test, mockall::automock)]
pub trait ChartRenderer: Send + Sync {
    /// Render `distribution` as a bar chart at `output_path`, returning the written path
    fn render_bar_chart(
        &self,
        distribution: &FrequencyDistribution,
        title: &str,
        output_path: &Path,
    ) -> Result<PathBuf>;
}

/// Bitmap bar chart renderer
#[derive(Debug, Clone, Default)]
pub struct BarChartRenderer {
    config: ChartConfig,
}

const BAR_COLOR: RGBColor = RGBColor(68, 114, 196);
const TEXT_COLOR: RGBColor = RGBColor(40, 40, 60);

impl BarChartRenderer {
    pub fn new(config: ChartConfig) -> Self {
        Self { config }
    }

    fn draw(
        &self,
        distribution: &FrequencyDistribution,
        title: &str,
        output_path: &Path,
    ) -> std::result::Result<(), Box<dyn std::error::Error>> {
        let font = self.config.font.as_str();
        let root = BitMapBackend::new(output_path, (self.config.width, self.config.height))
            .into_drawing_area();
        root.fill(&WHITE)?;

        if distribution.is_empty() {
            let (w, h) = root.dim_in_pixel();
            let centered = Pos::new(HPos::Center, VPos::Center);
            root.draw(&Text::new(
                title.to_string(),
                (w as i32 / 2, h as i32 / 4),
                (font, 24).into_font().color(&TEXT_COLOR).pos(centered),
            ))?;
            root.draw(&Text::new(
                "No data",
                (w as i32 / 2, h as i32 / 2),
                (font, 18).into_font().color(&TEXT_COLOR).pos(centered),
            ))?;
            root.present()?;
            return Ok(());
        }

        let labels: Vec<String> = distribution.keys().iter().map(|k| k.to_string()).collect();
        let counts: Vec<u32> = distribution.iter().map(|(_, v)| v as u32).collect();
        let max = distribution.max_count() as u32;
        // Headroom for the count annotations
        let y_max = max + (max / 5).max(1);

        let mut chart = ChartBuilder::on(&root)
            .caption(title, (font, 24).into_font().color(&TEXT_COLOR))
            .margin(15)
            .x_label_area_size(40)
            .y_label_area_size(50)
            .build_cartesian_2d((0..labels.len()).into_segmented(), 0u32..y_max)?;

        chart
            .configure_mesh()
            .disable_x_mesh()
            .light_line_style(RGBColor(235, 235, 240))
            .y_desc("Count")
            .x_labels(labels.len())
            .x_label_formatter(&|v| match v {
                SegmentValue::CenterOf(i) => labels.get(*i).cloned().unwrap_or_default(),
                _ => String::new(),
            })
            .label_style((font, 14).into_font().color(&TEXT_COLOR))
            .draw()?;

        chart.draw_series(
            Histogram::vertical(&chart)
                .style(BAR_COLOR.filled())
                .margin(12)
                .data(counts.iter().enumerate().map(|(i, c)| (i, *c))),
        )?;

        let annotation = (font, 14)
            .into_font()
            .color(&TEXT_COLOR)
            .pos(Pos::new(HPos::Center, VPos::Bottom));
        chart.draw_series(counts.iter().enumerate().map(|(i, c)| {
            Text::new(
                c.to_string(),
                (SegmentValue::CenterOf(i), *c),
                annotation.clone(),
            )
        }))?;

        root.present()?;
        Ok(())
    }
}

impl ChartRenderer for BarChartRenderer {
    fn render_bar_chart(
        &self,
        distribution: &FrequencyDistribution,
        title: &str,
        output_path: &Path,
    ) -> Result<PathBuf> {
        if let Some(parent) = output_path.parent().filter(|p| !p.as_os_str().is_empty()) {
            if !parent.is_dir() {
                return Err(AnalyzerError::Render(format!(
                    "output directory does not exist: {}",
                    parent.display()
                )));
            }
        }
        if distribution.is_empty() {
            tracing::warn!(title, "Rendering chart with no data");
        }

        self.draw(distribution, title, output_path).map_err(|e| {
            AnalyzerError::Render(format!("{}: {}", output_path.display(), e))
        })?;

        tracing::info!(path = %output_path.display(), bars = distribution.len(), "Chart saved");
        Ok(output_path.to_path_buf())
    }
}
