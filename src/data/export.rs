use std::io;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use super::model::Spectrum;

/// `<dir>/<stem>.csv` next to the input file.
pub fn csv_path(spectrum: &Spectrum) -> PathBuf {
    spectrum
        .source
        .with_file_name(format!("{}.csv", spectrum.stem()))
}

/// Write the transformed table as comma-separated values with a
/// `wavelength,absorbance,molar_absorptivity` header.
pub fn write_csv<W: io::Write>(spectrum: &Spectrum, out: W) -> Result<()> {
    let mut writer = csv::Writer::from_writer(out);
    for record in &spectrum.records {
        writer.serialize(record).context("serializing record")?;
    }
    writer.flush().context("flushing CSV writer")?;
    Ok(())
}

/// Write the table to [`csv_path`], overwriting any existing file.
pub fn export_csv(spectrum: &Spectrum) -> Result<PathBuf> {
    let path = csv_path(spectrum);
    let file = std::fs::File::create(&path)
        .with_context(|| format!("creating {}", path.display()))?;
    write_csv(spectrum, file).with_context(|| format!("writing {}", path.display()))?;
    Ok(path)
}

/// Whether `path` would clobber the input file itself.
pub fn is_same_file(a: &Path, b: &Path) -> bool {
    match (a.canonicalize(), b.canonicalize()) {
        (Ok(a), Ok(b)) => a == b,
        _ => a == b,
    }
}
