use std::path::PathBuf;

use thiserror::Error;

use crate::cli::Args;
use crate::color::SeriesColor;

/// Default values shared by the CLI and [`RunConfig::new`].
pub mod defaults {
    pub const X_MIN: f64 = 300.0;
    pub const X_MAX: f64 = 1000.0;
    pub const Y_MIN: f64 = -100.0;
    pub const Y_MAX: f64 = 20000.0;
    /// mol/L
    pub const CONCENTRATION: f64 = 0.0001;
    /// cm
    pub const PATH_LENGTH: f64 = 1.0;
    pub const OVERLAY: &str = "OverlayPlot.png";
    pub const HEADER_LINES: usize = 1;
    pub const DPI: u32 = 300;
    /// Highest accepted `--dpi`; the canvas is held in memory uncompressed.
    pub const MAX_DPI: u32 = 1200;
    /// Figure size in inches (width, height).
    pub const FIGURE_SIZE: (f64, f64) = (6.4, 4.8);
}

#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("no input files given")]
    NoFiles,
    #[error("{count} concentrations given for {files} files; none for file index {index}")]
    MissingConcentration {
        index: usize,
        count: usize,
        files: usize,
    },
    #[error("dpi must be between 1 and {max}, got {dpi}")]
    InvalidDpi { dpi: u32, max: u32 },
}

// ---------------------------------------------------------------------------
// Concentration
// ---------------------------------------------------------------------------

/// Molar concentration of the measured samples.
#[derive(Debug, Clone, PartialEq)]
pub enum Concentration {
    /// One value shared by every file.
    Uniform(f64),
    /// One value per file, matched by position.
    PerFile(Vec<f64>),
}

impl Concentration {
    /// A single value is broadcast; two or more are indexed per file.
    pub fn from_values(values: &[f64]) -> Self {
        match values {
            [] => Concentration::Uniform(defaults::CONCENTRATION),
            [single] => Concentration::Uniform(*single),
            many => Concentration::PerFile(many.to_vec()),
        }
    }

    /// Concentration for the file at `index` among `files` inputs.
    pub fn for_file(&self, index: usize, files: usize) -> Result<f64, ConfigError> {
        match self {
            Concentration::Uniform(c) => Ok(*c),
            Concentration::PerFile(list) => {
                list.get(index)
                    .copied()
                    .ok_or(ConfigError::MissingConcentration {
                        index,
                        count: list.len(),
                        files,
                    })
            }
        }
    }
}

impl Default for Concentration {
    fn default() -> Self {
        Concentration::Uniform(defaults::CONCENTRATION)
    }
}

// ---------------------------------------------------------------------------
// Plot geometry
// ---------------------------------------------------------------------------

/// Axis limits shared by every plot of a run. Not cross-checked.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AxisBounds {
    pub x_min: f64,
    pub x_max: f64,
    pub y_min: f64,
    pub y_max: f64,
}

impl Default for AxisBounds {
    fn default() -> Self {
        AxisBounds {
            x_min: defaults::X_MIN,
            x_max: defaults::X_MAX,
            y_min: defaults::Y_MIN,
            y_max: defaults::Y_MAX,
        }
    }
}

/// Raster settings: the canvas is `figure_size * dpi` pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RenderSettings {
    pub dpi: u32,
    pub figure_size: (f64, f64),
}

impl RenderSettings {
    pub fn pixel_size(&self) -> (u32, u32) {
        let dpi = self.dpi as f64;
        (
            (self.figure_size.0 * dpi).round() as u32,
            (self.figure_size.1 * dpi).round() as u32,
        )
    }

    /// Pixels covered by `points` typographic points (1/72 inch).
    pub fn points_to_px(&self, points: f64) -> f64 {
        points * self.dpi as f64 / 72.0
    }
}

impl Default for RenderSettings {
    fn default() -> Self {
        RenderSettings {
            dpi: defaults::DPI,
            figure_size: defaults::FIGURE_SIZE,
        }
    }
}

// ---------------------------------------------------------------------------
// RunConfig
// ---------------------------------------------------------------------------

/// Everything a run needs, built once at startup.
#[derive(Debug, Clone)]
pub struct RunConfig {
    pub files: Vec<PathBuf>,
    pub bounds: AxisBounds,
    pub concentration: Concentration,
    /// cm, shared by every file.
    pub path_length: f64,
    /// Overlay series colours; empty means the default palette.
    pub colors: Vec<SeriesColor>,
    /// Also render the combined overlay plot.
    pub overlay: bool,
    pub overlay_path: PathBuf,
    pub header_lines: usize,
    pub export_csv: bool,
    pub render: RenderSettings,
}

impl RunConfig {
    /// Config with defaults for everything but the input files.
    pub fn new(files: Vec<PathBuf>) -> Self {
        RunConfig {
            files,
            bounds: AxisBounds::default(),
            concentration: Concentration::default(),
            path_length: defaults::PATH_LENGTH,
            colors: Vec::new(),
            overlay: false,
            overlay_path: PathBuf::from(defaults::OVERLAY),
            header_lines: defaults::HEADER_LINES,
            export_csv: false,
            render: RenderSettings::default(),
        }
    }

    /// Concentration used for input file `index`.
    pub fn concentration_for(&self, index: usize) -> Result<f64, ConfigError> {
        self.concentration.for_file(index, self.files.len())
    }
}

impl TryFrom<Args> for RunConfig {
    type Error = ConfigError;

    fn try_from(args: Args) -> Result<Self, Self::Error> {
        if args.files.is_empty() {
            return Err(ConfigError::NoFiles);
        }
        if args.dpi == 0 || args.dpi > defaults::MAX_DPI {
            return Err(ConfigError::InvalidDpi {
                dpi: args.dpi,
                max: defaults::MAX_DPI,
            });
        }
        let concentration = Concentration::from_values(&args.concentration);
        if let Concentration::PerFile(list) = &concentration {
            if list.len() < args.files.len() {
                return Err(ConfigError::MissingConcentration {
                    index: list.len(),
                    count: list.len(),
                    files: args.files.len(),
                });
            }
        }
        Ok(RunConfig {
            files: args.files,
            bounds: AxisBounds {
                x_min: args.xmin,
                x_max: args.xmax,
                y_min: args.ymin,
                y_max: args.ymax,
            },
            concentration,
            path_length: args.path_length,
            colors: args.colors,
            overlay: args.plot_true,
            overlay_path: args.overlay,
            header_lines: args.header_lines,
            export_csv: args.export_csv,
            render: RenderSettings {
                dpi: args.dpi,
                figure_size: defaults::FIGURE_SIZE,
            },
        })
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;
    use clap::Parser;

    use super::*;

    fn config(argv: &[&str]) -> RunConfig {
        let args = Args::try_parse_from(std::iter::once("uvvis").chain(argv.iter().copied())).unwrap();
        RunConfig::try_from(args).unwrap()
    }

    #[test]
    fn defaults_apply() {
        let cfg = config(&["-f", "a.txt"]);
        assert_eq!(cfg.bounds, AxisBounds::default());
        assert_eq!(cfg.concentration, Concentration::Uniform(0.0001));
        assert_eq!(cfg.path_length, 1.0);
        assert_eq!(cfg.colors.len(), 8);
        assert!(!cfg.overlay);
        assert_eq!(cfg.overlay_path, PathBuf::from("OverlayPlot.png"));
        assert_eq!(cfg.render.dpi, 300);
    }

    #[test]
    fn single_concentration_is_broadcast() {
        let cfg = config(&["-f", "a.txt", "b.txt", "c.txt", "-c", "0.002"]);
        for i in 0..3 {
            assert_eq!(cfg.concentration_for(i).unwrap(), 0.002);
        }
    }

    #[test]
    fn explicit_default_concentration_is_still_used() {
        let cfg = config(&["-f", "a.txt", "b.txt", "-c", "0.0001"]);
        assert_eq!(cfg.concentration_for(1).unwrap(), 0.0001);
    }

    #[test]
    fn concentration_list_is_indexed_per_file() {
        let cfg = config(&["--files", "a.txt", "b.txt", "--concentration", "0.001", "0.002"]);
        assert_eq!(cfg.concentration_for(0).unwrap(), 0.001);
        assert_eq!(cfg.concentration_for(1).unwrap(), 0.002);
    }

    #[test]
    fn short_concentration_list_is_rejected_up_front() {
        let args = Args::try_parse_from(["uvvis", "-f", "a.txt", "b.txt", "c.txt", "-c", "0.001", "0.002"])
            .unwrap();
        assert_eq!(
            RunConfig::try_from(args).unwrap_err(),
            ConfigError::MissingConcentration {
                index: 2,
                count: 2,
                files: 3
            }
        );
    }

    #[test]
    fn per_file_lookup_past_the_list_fails() {
        let mut cfg = RunConfig::new(vec!["a.txt".into(), "b.txt".into()]);
        cfg.concentration = Concentration::PerFile(vec![0.001]);
        assert_eq!(
            cfg.concentration_for(1).unwrap_err(),
            ConfigError::MissingConcentration {
                index: 1,
                count: 1,
                files: 2
            }
        );
    }

    #[test]
    fn longer_concentration_list_is_accepted() {
        let cfg = config(&["-f", "a.txt", "-c", "0.001", "0.002"]);
        assert_eq!(cfg.concentration_for(0).unwrap(), 0.001);
    }

    #[test]
    fn negative_bounds_parse() {
        let cfg = config(&["-f", "a.txt", "--ymin", "-250", "-x", "250.5"]);
        assert_eq!(cfg.bounds.y_min, -250.0);
        assert_eq!(cfg.bounds.x_min, 250.5);
    }

    #[test]
    fn pixel_size_follows_dpi() {
        let settings = RenderSettings::default();
        assert_eq!(settings.pixel_size(), (1920, 1440));
        assert_relative_eq!(settings.points_to_px(12.0), 50.0);
        let low = RenderSettings {
            dpi: 100,
            ..settings
        };
        assert_eq!(low.pixel_size(), (640, 480));
    }

    #[test]
    fn zero_dpi_is_rejected() {
        let args = Args::try_parse_from(["uvvis", "-f", "a.txt", "--dpi", "0"]).unwrap();
        assert_eq!(
            RunConfig::try_from(args).unwrap_err(),
            ConfigError::InvalidDpi { dpi: 0, max: 1200 }
        );
    }

    #[test]
    fn oversized_dpi_is_rejected() {
        let args = Args::try_parse_from(["uvvis", "-f", "a.txt", "--dpi", "4000000000"]).unwrap();
        assert!(matches!(
            RunConfig::try_from(args).unwrap_err(),
            ConfigError::InvalidDpi { dpi: 4_000_000_000, .. }
        ));
        let args = Args::try_parse_from(["uvvis", "-f", "a.txt", "--dpi", "1200"]).unwrap();
        assert!(RunConfig::try_from(args).is_ok());
    }
}
