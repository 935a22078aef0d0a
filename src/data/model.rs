use std::path::{Path, PathBuf};

use serde::Serialize;

// ---------------------------------------------------------------------------
// SpectralRecord – one row of an instrument export
// ---------------------------------------------------------------------------

/// A single (wavelength, absorbance) reading plus the derived molar
/// absorptivity.
///
/// `molar_absorptivity` is `None` until the record has gone through
/// [`crate::data::transform::apply_absorptivity`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SpectralRecord {
    /// Wavelength in nm.
    pub wavelength: f64,
    /// Raw absorbance (dimensionless).
    pub absorbance: f64,
    /// Absorbance normalised by concentration and path length (cm⁻¹ M⁻¹).
    pub molar_absorptivity: Option<f64>,
}

impl SpectralRecord {
    pub fn new(wavelength: f64, absorbance: f64) -> Self {
        Self {
            wavelength,
            absorbance,
            molar_absorptivity: None,
        }
    }
}

// ---------------------------------------------------------------------------
// Spectrum – all records loaded from one file
// ---------------------------------------------------------------------------

/// The ordered records of one input file, in file order.
#[derive(Debug, Clone)]
pub struct Spectrum {
    /// File the records were read from.
    pub source: PathBuf,
    pub records: Vec<SpectralRecord>,
}

impl Spectrum {
    pub fn new(source: impl Into<PathBuf>, records: Vec<SpectralRecord>) -> Self {
        Spectrum {
            source: source.into(),
            records,
        }
    }

    /// Number of records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the spectrum holds no records.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// File name without its extension, used to name derived artifacts.
    pub fn stem(&self) -> String {
        file_stem(&self.source)
    }

    /// `(wavelength, molar absorptivity)` pairs for plotting.
    /// Records that were never transformed are skipped.
    pub fn absorptivity_points(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.records
            .iter()
            .filter_map(|r| r.molar_absorptivity.map(|e| (r.wavelength, e)))
    }
}

/// Stem of `path`, or the full file name when there is no extension.
pub fn file_stem(path: &Path) -> String {
    path.file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default()
}
