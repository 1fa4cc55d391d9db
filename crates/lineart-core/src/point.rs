//! Moving vertex inside the viewport.

use crate::error::{Axis, LineartError, Result};
use crate::mover::Mover;
use crate::viewport::Viewport;

/// Base per-axis speed for generated points.
pub const SPEED_BASE: i32 = 10;
/// Random spread added on top of [`SPEED_BASE`].
pub const SPEED_VARIANT: i32 = 10;

/// 2D position with a velocity, bounded by its [`Viewport`].
///
/// The position always satisfies `0 <= x <= width` and
/// `0 <= y <= height`; constructors and setters reject anything else.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Point {
    x: i32,
    y: i32,
    dx: i32,
    dy: i32,
    bounds: Viewport,
}

impl Point {
    /// Create a point, validating the position against `bounds`.
    pub fn new(x: i32, y: i32, dx: i32, dy: i32, bounds: Viewport) -> Result<Self> {
        let mut point = Self::origin(bounds);
        point.set_x(x)?;
        point.set_y(y)?;
        point.dx = dx;
        point.dy = dy;
        Ok(point)
    }

    /// Stationary point at `(0, 0)`.
    pub fn origin(bounds: Viewport) -> Self {
        Self {
            x: 0,
            y: 0,
            dx: 0,
            dy: 0,
            bounds,
        }
    }

    pub fn x(&self) -> i32 {
        self.x
    }

    pub fn y(&self) -> i32 {
        self.y
    }

    pub fn dx(&self) -> i32 {
        self.dx
    }

    pub fn dy(&self) -> i32 {
        self.dy
    }

    pub fn bounds(&self) -> Viewport {
        self.bounds
    }

    pub fn set_x(&mut self, x: i32) -> Result<()> {
        self.x = check(Axis::X, x, self.bounds.max_x())?;
        Ok(())
    }

    pub fn set_y(&mut self, y: i32) -> Result<()> {
        self.y = check(Axis::Y, y, self.bounds.max_y())?;
        Ok(())
    }

    pub fn set_dx(&mut self, dx: i32) {
        self.dx = dx;
    }

    pub fn set_dy(&mut self, dy: i32) {
        self.dy = dy;
    }

    /// The point one step ahead. `self` is left untouched.
    ///
    /// Fails only when a speed larger than the viewport carries the
    /// position out of bounds.
    pub fn next_position(&self) -> Result<Point> {
        let (x, dx) = Mover::update(self.x, self.dx, self.bounds.max_x());
        let (y, dy) = Mover::update(self.y, self.dy, self.bounds.max_y());
        Point::new(x, y, dx, dy, self.bounds)
    }
}

fn check(axis: Axis, value: i32, max: i32) -> Result<i32> {
    if (0..=max).contains(&value) {
        Ok(value)
    } else {
        Err(LineartError::InvalidCoordinate { axis, value, max })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parts(p: &Point) -> [i32; 4] {
        [p.x(), p.y(), p.dx(), p.dy()]
    }

    #[test]
    fn test_has_location_and_speed() {
        let p = Point::new(100, 200, 3, 4, Viewport::default()).unwrap();
        assert_eq!(parts(&p), [100, 200, 3, 4]);
    }

    #[test]
    fn test_next_position_keeps_original() {
        let p = Point::new(100, 200, 3, 4, Viewport::default()).unwrap();
        let n = p.next_position().unwrap();
        assert_eq!(parts(&n), [103, 204, 3, 4]);
        assert_eq!(parts(&p), [100, 200, 3, 4]);
    }

    #[test]
    fn test_next_position_bounces_at_max_x() {
        let viewport = Viewport::default();
        let width = viewport.max_x();
        let p = Point::new(width - 7, 0, 10, 5, viewport).unwrap();
        let n = p.next_position().unwrap();
        assert_eq!(parts(&n), [width - 3, 5, -10, 5]);
    }

    #[test]
    fn test_next_position_bounces_at_min_x() {
        let p = Point::new(3, 0, -10, 5, Viewport::default()).unwrap();
        let n = p.next_position().unwrap();
        assert_eq!(parts(&n), [7, 5, 10, 5]);
    }

    #[test]
    fn test_bounds_are_inclusive() {
        let viewport = Viewport::new(320, 240);
        assert!(Point::new(0, 0, 0, 0, viewport).is_ok());
        assert!(Point::new(320, 240, 0, 0, viewport).is_ok());
    }

    #[test]
    fn test_invalid_x_is_rejected() {
        let viewport = Viewport::default();
        let mut point = Point::origin(viewport);
        assert_eq!(
            point.set_x(-1),
            Err(LineartError::InvalidCoordinate {
                axis: Axis::X,
                value: -1,
                max: 320
            })
        );
        assert!(point.set_x(321).is_err());
        assert_eq!(point.x(), 0);
        assert!(Point::new(321, 0, 0, 0, viewport).is_err());
    }

    #[test]
    fn test_invalid_y_is_rejected() {
        let viewport = Viewport::default();
        let mut point = Point::origin(viewport);
        assert!(point.set_y(-1).is_err());
        assert!(matches!(
            point.set_y(241),
            Err(LineartError::InvalidCoordinate { axis: Axis::Y, value: 241, max: 240 })
        ));
        assert_eq!(point.y(), 0);
    }

    #[test]
    fn test_oversized_speed_surfaces_error() {
        let p = Point::new(0, 0, 1000, 0, Viewport::new(100, 100)).unwrap();
        assert!(matches!(
            p.next_position(),
            Err(LineartError::InvalidCoordinate { axis: Axis::X, .. })
        ));
    }

    #[test]
    fn test_overflowing_speed_surfaces_error() {
        let p = Point::new(10, 0, i32::MAX, 0, Viewport::default()).unwrap();
        assert_eq!(
            p.next_position(),
            Err(LineartError::InvalidCoordinate {
                axis: Axis::X,
                value: 630 - i32::MAX,
                max: 320
            })
        );

        let p = Point::new(0, 5, 0, i32::MIN, Viewport::default()).unwrap();
        assert!(matches!(
            p.next_position(),
            Err(LineartError::InvalidCoordinate { axis: Axis::Y, .. })
        ));
    }

    #[test]
    fn test_set_speeds_redirect_motion() {
        let mut p = Point::new(50, 50, 3, 4, Viewport::default()).unwrap();
        p.set_dx(-7);
        p.set_dy(0);
        assert_eq!((p.dx(), p.dy()), (-7, 0));

        let n = p.next_position().unwrap();
        assert_eq!(parts(&n), [43, 50, -7, 0]);
    }
}
