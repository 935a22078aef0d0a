use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::{Path, PathBuf};

use thiserror::Error;

use super::model::{SpectralRecord, Spectrum};

/// Columns per data row in an instrument export: wavelength, absorbance and
/// a trailing artifact column that is always dropped.
const EXPORT_COLUMNS: usize = 3;

/// Reasons an instrument export cannot be turned into a [`Spectrum`].
///
/// Every variant is fatal for the whole file; there is no partial-row
/// recovery.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("cannot open {}", .path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("{}: read failed", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("{}: malformed row", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },
    #[error("{}, line {line}: expected 3 tab-separated columns, found {found}", .path.display())]
    Columns { path: PathBuf, line: u64, found: usize },
    #[error("{}, line {line}: {column} '{value}' is not a number", .path.display())]
    NotANumber {
        path: PathBuf,
        line: u64,
        column: &'static str,
        value: String,
    },
    #[error("{}: no data rows after {header_lines} header line(s)", .path.display())]
    Empty { path: PathBuf, header_lines: usize },
}

// ---------------------------------------------------------------------------
// Public entry-points
// ---------------------------------------------------------------------------

/// Load a tab-delimited UV-Vis export.
///
/// Layout:
/// ```text
/// <header line(s), discarded>
/// 300.02<TAB>0.4512<TAB>
/// 300.41<TAB>0.4498<TAB>
/// ```
/// The first `header_lines` physical lines are skipped unconditionally.
/// Blank lines are ignored, `\r\n` endings are accepted. Every other line
/// must carry exactly three fields; the third one is dropped.
pub fn load_file(path: &Path, header_lines: usize) -> Result<Spectrum, LoadError> {
    let file = File::open(path).map_err(|source| LoadError::Open {
        path: path.to_path_buf(),
        source,
    })?;
    read_spectrum(BufReader::new(file), path, header_lines)
}

/// Same as [`load_file`] but reads from an arbitrary source. `source` is
/// only used to label the spectrum and error messages.
pub fn load_reader<R: io::Read>(
    rdr: R,
    source: &Path,
    header_lines: usize,
) -> Result<Spectrum, LoadError> {
    read_spectrum(BufReader::new(rdr), source, header_lines)
}

fn reader_builder() -> csv::ReaderBuilder {
    let mut builder = csv::ReaderBuilder::new();
    builder
        .delimiter(b'\t')
        .has_headers(false)
        .flexible(true)
        .quoting(false)
        .trim(csv::Trim::All);
    builder
}

/// Data lines with their 1-based physical line numbers, header and blank
/// lines removed, joined with `\n`.
fn data_lines<R: BufRead>(
    rdr: R,
    path: &Path,
    header_lines: usize,
) -> Result<(Vec<u8>, Vec<u64>), LoadError> {
    let mut body = Vec::new();
    let mut numbers = Vec::new();

    for (index, line) in rdr.split(b'\n').enumerate() {
        let line = line.map_err(|source| LoadError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        if index < header_lines {
            continue;
        }
        let line = line.strip_suffix(b"\r").unwrap_or(&line);
        if line.iter().all(u8::is_ascii_whitespace) {
            continue;
        }
        body.extend_from_slice(line);
        body.push(b'\n');
        numbers.push(index as u64 + 1);
    }
    Ok((body, numbers))
}

fn read_spectrum<R: BufRead>(
    rdr: R,
    path: &Path,
    header_lines: usize,
) -> Result<Spectrum, LoadError> {
    let (body, line_numbers) = data_lines(rdr, path, header_lines)?;
    let mut reader = reader_builder().from_reader(body.as_slice());
    let mut records = Vec::with_capacity(line_numbers.len());

    // Every data line is non-blank and unquoted, so csv yields exactly one
    // record per entry of `line_numbers`.
    for (result, &line) in reader.byte_records().zip(&line_numbers) {
        let row = result.map_err(|source| LoadError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        if row.len() != EXPORT_COLUMNS {
            return Err(LoadError::Columns {
                path: path.to_path_buf(),
                line,
                found: row.len(),
            });
        }

        let wavelength = parse_field(&row[0], path, line, "wavelength")?;
        let absorbance = parse_field(&row[1], path, line, "absorbance")?;
        records.push(SpectralRecord::new(wavelength, absorbance));
    }

    if records.is_empty() {
        return Err(LoadError::Empty {
            path: path.to_path_buf(),
            header_lines,
        });
    }

    log::debug!("{}: {} records", path.display(), records.len());
    Ok(Spectrum::new(path, records))
}

fn parse_field(raw: &[u8], path: &Path, line: u64, column: &'static str) -> Result<f64, LoadError> {
    let text = String::from_utf8_lossy(raw);
    text.parse::<f64>().map_err(|_| LoadError::NotANumber {
        path: path.to_path_buf(),
        line,
        column,
        value: text.into_owned(),
    })
}
