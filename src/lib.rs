#![warn(clippy::all, rust_2018_idioms)]

/// the window side of the program
mod app;
pub use app::{Settings, SettingsError, State};

/// general purpose math concepts
pub mod geo;

/// the figure itself and the timing of its growth
pub mod pattern;
