//! Viewport bounds and the write-once screen size.

use log::{debug, warn};

use crate::error::{LineartError, Result};

/// Default viewport width.
pub const DEFAULT_WIDTH: u16 = 320;
/// Default viewport height.
pub const DEFAULT_HEIGHT: u16 = 240;

/// Inclusive coordinate space `[0, width] x [0, height]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Default for Viewport {
    fn default() -> Self {
        Self::new(DEFAULT_WIDTH, DEFAULT_HEIGHT)
    }
}

impl Viewport {
    pub const fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }

    /// Upper x bound as a signed border for [`Mover`](crate::Mover).
    pub fn max_x(&self) -> i32 {
        i32::from(self.width)
    }

    /// Upper y bound as a signed border for [`Mover`](crate::Mover).
    pub fn max_y(&self) -> i32 {
        i32::from(self.height)
    }
}

/// Screen size that can be configured exactly once.
///
/// The host owns one of these and hands the resulting [`Viewport`] to
/// [`Lineart`](crate::Lineart). Until [`init`](Self::init) succeeds the
/// default 320x240 bounds are reported.
#[derive(Debug, Clone, Default)]
pub struct ScreenSize {
    viewport: Viewport,
    initialized: bool,
}

impl ScreenSize {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the screen size. Fails if it was already set.
    pub fn init(&mut self, width: u16, height: u16) -> Result<Viewport> {
        if self.initialized {
            warn!(
                "rejected screen size {}x{}, already set to {}x{}",
                width, height, self.viewport.width, self.viewport.height
            );
            return Err(LineartError::ScreenSizeAlreadyInitialized);
        }
        self.viewport = Viewport::new(width, height);
        self.initialized = true;
        debug!("screen size initialized to {}x{}", width, height);
        Ok(self.viewport)
    }

    /// Restore the default size and allow [`init`](Self::init) again.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    pub fn is_initialized(&self) -> bool {
        self.initialized
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let screen = ScreenSize::new();
        assert!(!screen.is_initialized());
        assert_eq!(screen.viewport(), Viewport::new(320, 240));
    }

    #[test]
    fn test_init_sets_size() {
        let mut screen = ScreenSize::new();
        let viewport = screen.init(1280, 768).unwrap();
        assert_eq!(viewport, Viewport::new(1280, 768));
        assert_eq!(screen.viewport(), viewport);
        assert!(screen.is_initialized());
    }

    #[test]
    fn test_second_init_fails_and_keeps_size() {
        let mut screen = ScreenSize::new();
        screen.init(1280, 768).unwrap();
        assert_eq!(
            screen.init(640, 480),
            Err(LineartError::ScreenSizeAlreadyInitialized)
        );
        assert_eq!(screen.viewport(), Viewport::new(1280, 768));
    }

    #[test]
    fn test_reset_allows_init_again() {
        let mut screen = ScreenSize::new();
        screen.init(1280, 768).unwrap();
        screen.reset();
        assert!(!screen.is_initialized());
        assert_eq!(screen.viewport(), Viewport::default());
        assert!(screen.init(640, 480).is_ok());
    }
}
