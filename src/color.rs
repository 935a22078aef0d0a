use std::fmt;
use std::str::FromStr;

use palette::Srgb;
use thiserror::Error;

/// Series colours used when `--colors` is not given.
pub const DEFAULT_COLORS: [&str; 8] = [
    "Red", "Blue", "Green", "Purple", "Yellow", "Pink", "Brown", "Orange",
];

/// Colour of every per-file plot.
pub const SINGLE_PLOT_COLOR: Srgb<u8> = palette::named::RED;

#[derive(Debug, Error, PartialEq)]
#[error("unknown colour '{0}' (expected a CSS colour name such as 'Red' or a hex code such as '#ff8800')")]
pub struct ColorError(pub String);

// ---------------------------------------------------------------------------
// SeriesColor – a user-supplied colour
// ---------------------------------------------------------------------------

/// A colour as written on the command line, resolved to RGB.
#[derive(Debug, Clone, PartialEq)]
pub struct SeriesColor {
    pub name: String,
    pub rgb: Srgb<u8>,
}

impl FromStr for SeriesColor {
    type Err = ColorError;

    /// Names are matched case-insensitively against the CSS named colour
    /// table; anything else is tried as a hex code.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim();
        let rgb = palette::named::from_str(&name.to_ascii_lowercase())
            .or_else(|| Srgb::<u8>::from_str(name).ok())
            .ok_or_else(|| ColorError(s.to_string()))?;
        Ok(SeriesColor {
            name: name.to_string(),
            rgb,
        })
    }
}

impl fmt::Display for SeriesColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}

/// The default palette, resolved.
pub fn default_colors() -> Vec<SeriesColor> {
    DEFAULT_COLORS
        .iter()
        .filter_map(|name| name.parse().ok())
        .collect()
}

// ---------------------------------------------------------------------------
// Color cycle: series index → colour
// ---------------------------------------------------------------------------

/// Assigns colours to overlay series by position, wrapping around when there
/// are more series than colours.
#[derive(Debug, Clone)]
pub struct ColorCycle {
    colors: Vec<SeriesColor>,
}

impl ColorCycle {
    /// An empty list falls back to [`DEFAULT_COLORS`].
    pub fn new(colors: &[SeriesColor]) -> Self {
        let colors = if colors.is_empty() {
            default_colors()
        } else {
            colors.to_vec()
        };
        ColorCycle { colors }
    }

    /// Colour of series `index`.
    pub fn color_for(&self, index: usize) -> &SeriesColor {
        &self.colors[index % self.colors.len()]
    }
}
