//! The live collection of bouncing polygons.

use log::{debug, trace};
use serde::Deserialize;

use crate::error::Result;
use crate::generator::Generator;
use crate::polygon::Polygon;
use crate::random::{RandomSource, RngSource};
use crate::viewport::Viewport;

/// Default number of polygons in the trail.
pub const POLYGON_NUM: usize = 10;
/// Default number of vertices per polygon.
pub const POINTS_NUM: usize = 4;

/// Sizes of the polygon collection.
///
/// Deserializes from a `polygons = .., vertices = ..` table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct SimulationSettings {
    #[serde(rename = "polygons")]
    pub polygon_count: usize,
    #[serde(rename = "vertices")]
    pub vertex_count: usize,
}

impl Default for SimulationSettings {
    fn default() -> Self {
        Self {
            polygon_count: POLYGON_NUM,
            vertex_count: POINTS_NUM,
        }
    }
}

/// Bouncing polygon simulation.
#[derive(Debug, Clone)]
pub struct Lineart {
    viewport: Viewport,
    settings: SimulationSettings,
    polygons: Vec<Polygon>,
    frame: u64,
}

impl Lineart {
    /// Build a simulation seeded from system entropy.
    pub fn new(viewport: Viewport, settings: SimulationSettings) -> Result<Self> {
        Self::with_source(viewport, settings, RngSource::from_entropy())
    }

    /// Build a simulation drawing from `source`.
    ///
    /// Seed points are spread over the whole viewport and the polygon
    /// trail is derived from them.
    pub fn with_source<R: RandomSource>(
        viewport: Viewport,
        settings: SimulationSettings,
        source: R,
    ) -> Result<Self> {
        let mut generator = Generator::new(viewport, source);
        let points = generator.generate_points(
            viewport.max_x(),
            viewport.max_y(),
            settings.vertex_count,
        )?;
        let polygons = generator.generate_polygons(points, settings.polygon_count)?;

        debug!(
            "created {} polygons of {} points in {}x{}",
            polygons.len(),
            settings.vertex_count,
            viewport.width,
            viewport.height
        );

        Ok(Self {
            viewport,
            settings,
            polygons,
            frame: 0,
        })
    }

    pub fn polygons(&self) -> &[Polygon] {
        &self.polygons
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    pub fn settings(&self) -> SimulationSettings {
        self.settings
    }

    /// Number of completed [`advance`](Self::advance) calls.
    pub fn frame(&self) -> u64 {
        self.frame
    }

    /// Move every polygon one step, in collection order.
    ///
    /// All next positions are computed before any polygon changes, so a
    /// failure leaves the whole collection as it was.
    pub fn advance(&mut self) -> Result<()> {
        let staged = self
            .polygons
            .iter()
            .map(Polygon::next_points)
            .collect::<Result<Vec<_>>>()?;

        for (polygon, points) in self.polygons.iter_mut().zip(staged) {
            polygon.commit(points);
        }
        self.frame += 1;
        trace!("advanced to frame {}", self.frame);
        Ok(())
    }
}
