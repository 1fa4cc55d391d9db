//! Drifting RGB color.

use std::fmt;

use crate::mover::Mover;

/// Border used when bouncing color channels.
///
/// One past the displayable range, so a channel may sit at 256.
pub const CHANNEL_BORDER: i32 = 256;

/// Base channel speed for generated colors.
pub const SPEED_BASE: i32 = 2;
/// Random spread added on top of [`SPEED_BASE`].
pub const SPEED_VARIANT: i32 = 4;

/// RGB triple with a velocity per channel.
///
/// Channels are not validated; colors come from the
/// [`Generator`](crate::Generator).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Color {
    pub r: i32,
    pub g: i32,
    pub b: i32,
    pub sr: i32,
    pub sg: i32,
    pub sb: i32,
}

impl Color {
    /// Create a color with zero channel speeds.
    pub fn new(r: i32, g: i32, b: i32) -> Self {
        Self {
            r,
            g,
            b,
            ..Self::default()
        }
    }

    pub fn set_speeds(&mut self, sr: i32, sg: i32, sb: i32) {
        self.sr = sr;
        self.sg = sg;
        self.sb = sb;
    }

    /// Builder form of [`set_speeds`](Self::set_speeds).
    pub fn with_speeds(mut self, sr: i32, sg: i32, sb: i32) -> Self {
        self.set_speeds(sr, sg, sb);
        self
    }

    pub fn rgb(&self) -> [i32; 3] {
        [self.r, self.g, self.b]
    }

    pub fn speeds(&self) -> [i32; 3] {
        [self.sr, self.sg, self.sb]
    }

    /// Move every channel one step in place.
    pub fn advance(&mut self) -> &mut Self {
        (self.r, self.sr) = Mover::update(self.r, self.sr, CHANNEL_BORDER);
        (self.g, self.sg) = Mover::update(self.g, self.sg, CHANNEL_BORDER);
        (self.b, self.sb) = Mover::update(self.b, self.sb, CHANNEL_BORDER);
        self
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "rgb({},{},{})", self.r, self.g, self.b)
    }
}
