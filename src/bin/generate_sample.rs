//! Writes synthetic UV-Vis exports (`sample_A.txt`, ...) for trying `uvvis`.

use std::f64::consts::{LN_2, TAU};
use std::fs::File;
use std::io::{BufWriter, Write};

use anyhow::{Context, Result};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// An electronic absorption band, Gaussian in energy (wavenumber) space.
struct Band {
    center_nm: f64,
    /// Full width at half maximum in cm⁻¹.
    fwhm_wavenumber: f64,
    peak_absorbance: f64,
}

impl Band {
    fn absorbance_at(&self, wavelength_nm: f64) -> f64 {
        // nm → cm⁻¹
        let offset = 1.0e7 / wavelength_nm - 1.0e7 / self.center_nm;
        self.peak_absorbance * (-4.0 * LN_2 * (offset / self.fwhm_wavenumber).powi(2)).exp()
    }
}

/// Zero-mean normal sample via Box-Muller.
fn noise(rng: &mut StdRng, std_dev: f64) -> f64 {
    let u1: f64 = rng.gen_range(f64::EPSILON..1.0);
    let u2: f64 = rng.gen();
    std_dev * (-2.0 * u1.ln()).sqrt() * (TAU * u2).cos()
}

/// Same layout as an OceanView copy: one header line, then
/// `wavelength<TAB>absorbance<TAB>` with the trailing empty column.
fn write_export(path: &str, readings: impl Iterator<Item = (f64, f64)>) -> Result<usize> {
    let file = File::create(path).with_context(|| format!("creating {path}"))?;
    let mut out = BufWriter::new(file);
    writeln!(out, "Wavelength (nm)\tAbsorbance\t")?;
    let mut count = 0;
    for (wl, a) in readings {
        writeln!(out, "{wl:.2}\t{a:.5}\t")?;
        count += 1;
    }
    out.flush()?;
    Ok(count)
}

fn main() -> Result<()> {
    let mut rng = StdRng::seed_from_u64(42);

    // Peak absorbances at 0.1 mM in a 1 cm cuvette.
    let samples = [
        (
            "sample_A",
            vec![
                Band { center_nm: 320.0, fwhm_wavenumber: 3500.0, peak_absorbance: 1.2 },
                Band { center_nm: 455.0, fwhm_wavenumber: 3000.0, peak_absorbance: 0.9 },
            ],
        ),
        (
            "sample_B",
            vec![
                Band { center_nm: 350.0, fwhm_wavenumber: 4000.0, peak_absorbance: 1.5 },
                Band { center_nm: 520.0, fwhm_wavenumber: 2500.0, peak_absorbance: 0.6 },
                Band { center_nm: 680.0, fwhm_wavenumber: 1200.0, peak_absorbance: 0.3 },
            ],
        ),
        (
            "sample_C",
            vec![
                Band { center_nm: 410.0, fwhm_wavenumber: 2200.0, peak_absorbance: 1.8 },
                Band { center_nm: 610.0, fwhm_wavenumber: 3000.0, peak_absorbance: 0.5 },
            ],
        ),
    ];

    for (name, bands) in &samples {
        // 250 nm → 1099.5 nm in 0.5 nm steps, with a slight scattering baseline.
        let readings: Vec<(f64, f64)> = (0..1700)
            .map(|i| {
                let wl = 250.0 + i as f64 * 0.5;
                let baseline = 0.02 * (400.0 / wl).powi(4);
                let signal: f64 = bands.iter().map(|b| b.absorbance_at(wl)).sum();
                (wl, signal + baseline + noise(&mut rng, 0.004))
            })
            .collect();

        let path = format!("{name}.txt");
        let count = write_export(&path, readings.into_iter())?;
        println!("Wrote {count} readings to {path}");
    }

    Ok(())
}
