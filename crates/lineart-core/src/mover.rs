//! Bounded scalar motion with single-pass reflection.

/// Advances a `(position, velocity)` pair inside `[0, border]`.
#[derive(Debug, Clone, Copy)]
pub struct Mover;

impl Mover {
    /// Step `pos` by `speed`, bouncing off `0` and `border`.
    ///
    /// Callers keep `0 <= pos <= border` before the call. At most one
    /// reflection is applied per step and the result is not re-validated,
    /// so a `|speed|` larger than `border` can still leave the bound.
    /// Arithmetic runs in `i64`; results beyond `i32` saturate.
    pub fn update(pos: i32, speed: i32, border: i32) -> (i32, i32) {
        let border = i64::from(border);
        let mut pos = i64::from(pos) + i64::from(speed);
        let mut speed = i64::from(speed);

        if pos > border {
            // bounce at upper side
            pos = border * 2 - pos;
            speed = -speed;
        } else if pos < 0 {
            // bounce at lower side
            pos = -pos;
            speed = -speed;
        }

        (saturate(pos), saturate(speed))
    }
}

fn saturate(value: i64) -> i32 {
    value.clamp(i64::from(i32::MIN), i64::from(i32::MAX)) as i32
}
