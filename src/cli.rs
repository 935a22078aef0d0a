use std::path::PathBuf;

use clap::{ArgAction, Parser};
use log::LevelFilter;

use crate::color::{default_colors, SeriesColor};
use crate::config::defaults;

/// Plot UV-Vis spectra from raw data exported by OceanView.
#[derive(Parser, Debug)]
#[command(
    name = "uvvis",
    version,
    about,
    long_about = None,
    disable_version_flag = true,
    after_help = "Writes <stem>Plot.png next to every input file."
)]
pub struct Args {
    /// Print version
    #[arg(short = 'v', long, action = ArgAction::Version)]
    #[allow(dead_code)]
    version: Option<bool>,

    /// Files to plot
    #[arg(short, long, alias = "file", num_args = 1.., required = true)]
    pub files: Vec<PathBuf>,

    /// x-axis minimum
    #[arg(short = 'x', long, default_value_t = defaults::X_MIN, allow_negative_numbers = true)]
    pub xmin: f64,

    /// x-axis maximum
    #[arg(short = 'z', long, default_value_t = defaults::X_MAX, allow_negative_numbers = true)]
    pub xmax: f64,

    /// y-axis minimum
    #[arg(short = 'y', long, default_value_t = defaults::Y_MIN, allow_negative_numbers = true)]
    pub ymin: f64,

    /// y-axis maximum
    #[arg(short = 'u', long, default_value_t = defaults::Y_MAX, allow_negative_numbers = true)]
    pub ymax: f64,

    /// Concentration in mol/L; one value for all files or one per file
    #[arg(short, long, num_args = 1.., default_values_t = vec![defaults::CONCENTRATION])]
    pub concentration: Vec<f64>,

    /// Path length in cm
    #[arg(short = 'b', long, default_value_t = defaults::PATH_LENGTH)]
    pub path_length: f64,

    /// Overlay series colours (CSS names or #rrggbb), matched to files by position
    #[arg(short = 'r', long, alias = "color", num_args = 1.., default_values_t = default_colors())]
    pub colors: Vec<SeriesColor>,

    /// Combine all input files into one overlay plot
    #[arg(short, long)]
    pub plot_true: bool,

    /// File name for the overlay plot
    #[arg(short, long, default_value = defaults::OVERLAY)]
    pub overlay: PathBuf,

    /// Number of leading lines discarded from every input file
    #[arg(long, default_value_t = defaults::HEADER_LINES)]
    pub header_lines: usize,

    /// Output resolution in dots per inch
    #[arg(long, default_value_t = defaults::DPI)]
    pub dpi: u32,

    /// Also write <stem>.csv with the computed molar absorptivity
    #[arg(long)]
    pub export_csv: bool,

    /// More log output (repeat for trace)
    #[arg(long, action = ArgAction::Count, conflicts_with = "quiet")]
    pub verbose: u8,

    /// Less log output (-qq for errors only)
    #[arg(short, long, action = ArgAction::Count)]
    pub quiet: u8,
}

impl Args {
    /// Log level derived from `--verbose`/`--quiet`, starting at `info`.
    pub fn log_level(&self) -> LevelFilter {
        match (self.verbose, self.quiet) {
            (0, 0) => LevelFilter::Info,
            (1, _) => LevelFilter::Debug,
            (v, _) if v > 1 => LevelFilter::Trace,
            (_, 1) => LevelFilter::Warn,
            _ => LevelFilter::Error,
        }
    }
}
