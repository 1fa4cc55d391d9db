//! Simulation kernel for the lineart animation.
//!
//! A set of colored polygons bounces around a fixed rectangular viewport.
//! Every vertex and every color channel moves with the same bounded
//! reflection rule ([`Mover`]), and the initial trail of polygons is
//! derived up front by the [`Generator`]. Rendering is left to the host.

mod color;
mod error;
mod generator;
mod mover;
mod point;
mod polygon;
mod random;
mod simulation;
mod viewport;

pub use color::Color;
pub use error::{Axis, LineartError, Result};
pub use generator::Generator;
pub use mover::Mover;
pub use point::Point;
pub use polygon::Polygon;
pub use random::{FixedSource, RandomSource, RngSource, SequenceSource};
pub use simulation::{Lineart, SimulationSettings};
pub use viewport::{ScreenSize, Viewport};
