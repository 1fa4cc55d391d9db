//! Closed shape of moving points sharing one color.

use crate::color::Color;
use crate::error::Result;
use crate::generator::Generator;
use crate::point::Point;
use crate::random::RandomSource;
use crate::viewport::Viewport;

/// Ordered vertices plus a drifting color.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Polygon {
    points: Vec<Point>,
    color: Color,
}

impl Polygon {
    pub fn new(points: Vec<Point>, color: Color) -> Self {
        Self { points, color }
    }

    /// `vertex_count` independent origin points and a freshly generated color.
    pub fn with_defaults<R: RandomSource>(
        viewport: Viewport,
        vertex_count: usize,
        source: R,
    ) -> Self {
        let color = Generator::new(viewport, source).generate_color();
        let points = (0..vertex_count).map(|_| Point::origin(viewport)).collect();
        Self::new(points, color)
    }

    pub fn points(&self) -> &[Point] {
        &self.points
    }

    pub fn color(&self) -> &Color {
        &self.color
    }

    /// Consecutive vertex pairs, closing the loop from last to first.
    pub fn edges(&self) -> impl Iterator<Item = (&Point, &Point)> + '_ {
        let n = self.points.len();
        (0..n).map(move |i| (&self.points[i], &self.points[(i + 1) % n]))
    }

    /// Every point one step ahead, in order.
    pub fn next_points(&self) -> Result<Vec<Point>> {
        self.points.iter().map(Point::next_position).collect()
    }

    /// Move every point and the color one step.
    ///
    /// On error nothing is changed.
    pub fn advance(&mut self) -> Result<()> {
        let points = self.next_points()?;
        self.commit(points);
        Ok(())
    }

    /// Install precomputed next points and step the color.
    pub(crate) fn commit(&mut self, points: Vec<Point>) {
        self.points = points;
        self.color.advance();
    }
}
