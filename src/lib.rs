//! Molar absorptivity plots from UV-Vis spectrometer exports.
//!
//! The tool is one forward pipeline:
//! [`cli`] → [`config`] → [`data::loader`] → [`data::transform`] → [`render`],
//! composed by [`pipeline::run`].

pub mod cli;
pub mod color;
pub mod config;
pub mod data;
pub mod pipeline;
pub mod render;
