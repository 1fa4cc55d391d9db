//! Randomized construction of points, colors and polygon trails.

use crate::color::{self, Color};
use crate::error::Result;
use crate::point::{self, Point};
use crate::polygon::Polygon;
use crate::random::RandomSource;
use crate::viewport::Viewport;

/// Upper bound (exclusive) for generated color channels.
const CHANNEL_RANGE: i32 = 256;

/// Factory for the initial simulation state.
///
/// Holds only the viewport that points are validated against and the
/// random source draws come from.
#[derive(Debug)]
pub struct Generator<R> {
    viewport: Viewport,
    source: R,
}

impl<R: RandomSource> Generator<R> {
    pub fn new(viewport: Viewport, source: R) -> Self {
        Self { viewport, source }
    }

    /// `count` points at random positions in `[0, x_range) x [0, y_range)`,
    /// each with positive speeds in `[10, 20)`.
    pub fn generate_points(
        &mut self,
        x_range: i32,
        y_range: i32,
        count: usize,
    ) -> Result<Vec<Point>> {
        (0..count)
            .map(|_| {
                let x = self.source.below(x_range);
                let y = self.source.below(y_range);
                let dx = self.speed(point::SPEED_BASE, point::SPEED_VARIANT);
                let dy = self.speed(point::SPEED_BASE, point::SPEED_VARIANT);
                Point::new(x, y, dx, dy, self.viewport)
            })
            .collect()
    }

    /// Random color with positive channel speeds in `[2, 6)`.
    pub fn generate_color(&mut self) -> Color {
        let r = self.source.below(CHANNEL_RANGE);
        let g = self.source.below(CHANNEL_RANGE);
        let b = self.source.below(CHANNEL_RANGE);
        let sr = self.speed(color::SPEED_BASE, color::SPEED_VARIANT);
        let sg = self.speed(color::SPEED_BASE, color::SPEED_VARIANT);
        let sb = self.speed(color::SPEED_BASE, color::SPEED_VARIANT);
        Color::new(r, g, b).with_speeds(sr, sg, sb)
    }

    /// A copy of `color` advanced one step; `color` itself is unchanged.
    pub fn generate_next_color(&self, color: &Color) -> Color {
        let mut next = *color;
        next.advance();
        next
    }

    /// Trail of `count` polygons starting from `points`.
    ///
    /// Polygon `i + 1` uses the `next_position` of every point of polygon
    /// `i` and the next color in the lineage started by a fresh color.
    pub fn generate_polygons(
        &mut self,
        mut points: Vec<Point>,
        count: usize,
    ) -> Result<Vec<Polygon>> {
        let mut polygons = Vec::with_capacity(count);
        let mut color = self.generate_color();

        for i in 0..count {
            if i > 0 {
                points = points
                    .iter()
                    .map(Point::next_position)
                    .collect::<Result<Vec<_>>>()?;
                color = self.generate_next_color(&color);
            }
            polygons.push(Polygon::new(points.clone(), color));
        }

        Ok(polygons)
    }

    fn speed(&mut self, base: i32, variant: i32) -> i32 {
        base + self.source.below(variant)
    }
}
