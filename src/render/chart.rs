use image::RgbImage;
use palette::Srgb;
use plotters::prelude::*;

use super::RenderError;
use crate::config::{AxisBounds, RenderSettings};
use crate::data::model::Spectrum;

pub const X_DESC: &str = "Wavelength (nm)";
pub const Y_DESC: &str = "Molar Absorptivity (cm⁻¹ M⁻¹)";

// Sizes in typographic points, scaled to pixels by the run's dpi.
const AXIS_DESC_PT: f64 = 12.0;
const TICK_LABEL_PT: f64 = 10.0;
const LINE_WIDTH_PT: f64 = 3.0;
const MARKER_RADIUS_PT: f64 = 0.8;
const MARGIN_PT: f64 = 12.0;
const X_LABEL_AREA_PT: f64 = 42.0;
const Y_LABEL_AREA_PT: f64 = 62.0;

// ---------------------------------------------------------------------------
// Series
// ---------------------------------------------------------------------------

/// One spectrum drawn as markers plus a connecting line.
#[derive(Debug, Clone, Copy)]
pub struct Series<'a> {
    pub spectrum: &'a Spectrum,
    pub color: Srgb<u8>,
}

/// Split `points` into runs of consecutive points that fall inside
/// `bounds`, so lines never leave the plotting area.
pub fn visible_runs(
    points: impl IntoIterator<Item = (f64, f64)>,
    bounds: &AxisBounds,
) -> Vec<Vec<(f64, f64)>> {
    let (x_lo, x_hi) = ordered(bounds.x_min, bounds.x_max);
    let (y_lo, y_hi) = ordered(bounds.y_min, bounds.y_max);

    let mut runs = Vec::new();
    let mut current = Vec::new();
    for (x, y) in points {
        if (x_lo..=x_hi).contains(&x) && (y_lo..=y_hi).contains(&y) {
            current.push((x, y));
        } else if !current.is_empty() {
            runs.push(std::mem::take(&mut current));
        }
    }
    if !current.is_empty() {
        runs.push(current);
    }
    runs
}

fn ordered(a: f64, b: f64) -> (f64, f64) {
    if a <= b {
        (a, b)
    } else {
        (b, a)
    }
}

fn draw_err<E: std::error::Error>(e: E) -> RenderError {
    RenderError::Draw(e.to_string())
}

// ---------------------------------------------------------------------------
// Chart rendering
// ---------------------------------------------------------------------------

/// Render `series` onto a white canvas of `settings.pixel_size()`.
///
/// Only the left and bottom axes are drawn; there is no grid, legend or
/// title.
pub fn render_chart(
    series: &[Series<'_>],
    bounds: &AxisBounds,
    settings: &RenderSettings,
) -> Result<RgbImage, RenderError> {
    let (width, height) = settings.pixel_size();
    let px = |pt: f64| settings.points_to_px(pt);
    let mut buffer = vec![0u8; width as usize * height as usize * 3];

    {
        let root = BitMapBackend::with_buffer(&mut buffer, (width, height)).into_drawing_area();
        root.fill(&WHITE).map_err(draw_err)?;

        let desc_font = (FontFamily::SansSerif, px(AXIS_DESC_PT), FontStyle::Bold).into_font();
        let tick_font = (FontFamily::SansSerif, px(TICK_LABEL_PT), FontStyle::Bold).into_font();

        let mut chart = ChartBuilder::on(&root)
            .margin(px(MARGIN_PT) as u32)
            .x_label_area_size(px(X_LABEL_AREA_PT) as u32)
            .y_label_area_size(px(Y_LABEL_AREA_PT) as u32)
            .build_cartesian_2d(bounds.x_min..bounds.x_max, bounds.y_min..bounds.y_max)
            .map_err(draw_err)?;

        chart
            .configure_mesh()
            .disable_mesh()
            .x_desc(X_DESC)
            .y_desc(Y_DESC)
            .axis_desc_style(desc_font)
            .label_style(tick_font)
            .axis_style(BLACK.stroke_width(px(1.0).ceil() as u32))
            .x_label_formatter(&|x| format!("{x:.0}"))
            .draw()
            .map_err(draw_err)?;

        let line_width = px(LINE_WIDTH_PT).round().max(1.0) as u32;
        let marker_radius = px(MARKER_RADIUS_PT).round().max(1.0) as u32;

        for s in series {
            let color = RGBColor(s.color.red, s.color.green, s.color.blue);
            let runs = visible_runs(s.spectrum.absorptivity_points(), bounds);
            log::trace!(
                "{}: {} visible segment(s)",
                s.spectrum.source.display(),
                runs.len()
            );

            for run in &runs {
                chart
                    .draw_series(LineSeries::new(run.iter().copied(), color.stroke_width(line_width)))
                    .map_err(draw_err)?;
                chart
                    .draw_series(
                        run.iter()
                            .map(|&p| Circle::new(p, marker_radius, color.filled())),
                    )
                    .map_err(draw_err)?;
            }
        }

        root.present().map_err(draw_err)?;
    }

    RgbImage::from_raw(width, height, buffer)
        .ok_or_else(|| RenderError::Draw("canvas buffer size mismatch".into()))
}
