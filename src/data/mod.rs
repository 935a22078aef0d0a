//! Data layer: core types, loading, transform and export.
//!
//! Architecture:
//! ```text
//!  instrument export (.txt, tab-delimited)
//!        │
//!        ▼
//!   ┌──────────┐
//!   │  loader   │  parse file → Spectrum (wavelength, absorbance)
//!   └──────────┘
//!        │
//!        ▼
//!   ┌───────────┐
//!   │ transform  │  absorbance / (concentration · path length)
//!   └───────────┘
//!        │
//!        ├──────────────► render (PNG)
//!        ▼
//!   ┌──────────┐
//!   │  export   │  optional <stem>.csv
//!   └──────────┘
//! ```

pub mod export;
pub mod loader;
pub mod model;
pub mod transform;
