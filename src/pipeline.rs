use std::path::PathBuf;

use anyhow::{Context, Result};

use crate::config::RunConfig;
use crate::data::model::Spectrum;
use crate::data::{export, loader, transform};
use crate::render;

/// Files written by a successful run.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct RunReport {
    /// One `<stem>Plot.png` per input file, in input order.
    pub plots: Vec<PathBuf>,
    pub overlay: Option<PathBuf>,
    pub csv: Vec<PathBuf>,
}

impl RunReport {
    pub fn artifacts(&self) -> impl Iterator<Item = &PathBuf> {
        self.plots.iter().chain(self.overlay.iter()).chain(self.csv.iter())
    }
}

/// Load every input file and compute its molar absorptivity.
///
/// Fails on the first file that cannot be read, parsed or normalised.
pub fn load_all(config: &RunConfig) -> Result<Vec<Spectrum>> {
    config
        .files
        .iter()
        .enumerate()
        .map(|(index, path)| -> Result<Spectrum> {
            let concentration = config.concentration_for(index)?;
            let mut spectrum = loader::load_file(path, config.header_lines)?;
            transform::apply_absorptivity(&mut spectrum, concentration, config.path_length)
                .with_context(|| format!("processing {}", path.display()))?;
            log::debug!(
                "{}: {} records at {concentration} M, {} cm",
                path.display(),
                spectrum.len(),
                config.path_length
            );
            Ok(spectrum)
        })
        .collect()
}

/// Run the whole tool: load and transform every file once, then write the
/// per-file plots and, when requested, the overlay plot.
///
/// Nothing is written unless every input file loads.
pub fn run(config: &RunConfig) -> Result<RunReport> {
    let spectra = load_all(config)?;
    let mut report = RunReport::default();

    for spectrum in &spectra {
        let out = render::render_single(spectrum, config)
            .with_context(|| format!("plotting {}", spectrum.source.display()))?;
        report.plots.push(out);

        if config.export_csv {
            if export::is_same_file(&export::csv_path(spectrum), &spectrum.source) {
                log::warn!(
                    "{}: CSV export would overwrite the input, skipped",
                    spectrum.source.display()
                );
                continue;
            }
            let csv = export::export_csv(spectrum)?;
            log::info!("wrote {}", csv.display());
            report.csv.push(csv);
        }
    }

    if config.overlay {
        let out = render::render_overlay(&spectra, config).context("plotting overlay")?;
        report.overlay = Some(out);
    }

    Ok(report)
}
