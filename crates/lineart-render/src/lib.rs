//! Terminal rendering for the lineart simulation.
//!
//! Polygons are rasterized into a grid of colored cells, one cell per
//! viewport unit, and drawn as a ratatui paragraph. The simulation crate
//! never sees the terminal.

mod chars;
mod color;
mod raster;
mod state;

pub use chars::Marker;
pub use color::to_terminal_color;
pub use raster::Raster;
pub use state::LineartView;
