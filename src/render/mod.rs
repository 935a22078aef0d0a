//! PNG output: plotters draws into an in-memory canvas, the white margin is
//! trimmed and the result is encoded with `image`.
pub mod bbox;
pub mod chart;

use std::path::{Path, PathBuf};

use image::ImageFormat;
use thiserror::Error;

use crate::color::{ColorCycle, SINGLE_PLOT_COLOR};
use crate::config::RunConfig;
use crate::data::model::Spectrum;
use self::chart::Series;

/// Whitespace left around the cropped drawing, in inches.
const PAD_INCHES: f64 = 0.1;

#[derive(Debug, Error)]
pub enum RenderError {
    #[error("drawing failed: {0}")]
    Draw(String),
    #[error("cannot write {}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },
}

/// `<dir>/<stem>Plot.png` next to the input file.
pub fn plot_path(source: &Path) -> PathBuf {
    let stem = crate::data::model::file_stem(source);
    source.with_file_name(format!("{stem}Plot.png"))
}

/// Draw `series`, crop and write a PNG to `out`, overwriting any existing
/// file.
pub fn write_plot(series: &[Series<'_>], config: &RunConfig, out: &Path) -> Result<(), RenderError> {
    let canvas = chart::render_chart(series, &config.bounds, &config.render)?;
    let pad = (config.render.dpi as f64 * PAD_INCHES).round() as u32;
    let cropped = bbox::tight_crop(&canvas, pad);

    cropped
        .save_with_format(out, ImageFormat::Png)
        .map_err(|source| RenderError::Write {
            path: out.to_path_buf(),
            source,
        })?;
    log::info!(
        "wrote {} ({}x{} px)",
        out.display(),
        cropped.width(),
        cropped.height()
    );
    Ok(())
}

/// Plot a single spectrum in red to [`plot_path`] of its source file.
pub fn render_single(spectrum: &Spectrum, config: &RunConfig) -> Result<PathBuf, RenderError> {
    let out = plot_path(&spectrum.source);
    let series = [Series {
        spectrum,
        color: SINGLE_PLOT_COLOR,
    }];
    write_plot(&series, config, &out)?;
    Ok(out)
}

/// Series for the overlay plot: one per spectrum, coloured by position.
pub fn overlay_series<'a>(spectra: &'a [Spectrum], config: &RunConfig) -> Vec<Series<'a>> {
    let cycle = ColorCycle::new(&config.colors);
    spectra
        .iter()
        .enumerate()
        .map(|(i, spectrum)| {
            let color = cycle.color_for(i);
            log::debug!("overlay series {i}: {} in {color}", spectrum.source.display());
            Series {
                spectrum,
                color: color.rgb,
            }
        })
        .collect()
}

/// Plot every spectrum on shared axes to `config.overlay_path`.
pub fn render_overlay(spectra: &[Spectrum], config: &RunConfig) -> Result<PathBuf, RenderError> {
    let series = overlay_series(spectra, config);
    write_plot(&series, config, &config.overlay_path)?;
    Ok(config.overlay_path.clone())
}
