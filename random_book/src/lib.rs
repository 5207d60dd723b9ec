//! Random book generator: a grid of random characters that re-randomizes
//! itself on a timer, shown in an egui window.
//!
//! The window is a thin layer over [`book::RandomBook`], a two-state machine
//! (Stopped / Running) that owns the [`grid::Grid`] and decides when the next
//! tick is due.

pub mod alphabet;
pub mod book;
pub mod config;
pub mod error;
pub mod grid;
pub mod save;
pub mod ui;

pub use alphabet::Alphabet;
pub use book::{RandomBook, RunState};
pub use config::{BookConfig, FormInput, TickSettings};
pub use error::{BookError, Result};
pub use grid::{Grid, resample};
