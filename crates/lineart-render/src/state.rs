//! Reusable view that draws a simulation onto a frame.

use lineart_core::Lineart;
use ratatui::{Frame, layout::Rect, widgets::Paragraph};

use crate::chars::Marker;
use crate::raster::Raster;

/// Rendering state kept between frames.
#[derive(Debug)]
pub struct LineartView {
    /// Cell grid sized to the simulation viewport.
    raster: Raster,
    /// Glyph style for lit cells.
    marker: Marker,
}

impl Default for LineartView {
    fn default() -> Self {
        Self::new(Marker::default())
    }
}

impl LineartView {
    pub fn new(marker: Marker) -> Self {
        Self {
            raster: Raster::new(0, 0),
            marker,
        }
    }

    pub fn marker(&self) -> Marker {
        self.marker
    }

    pub fn set_marker(&mut self, marker: Marker) {
        self.marker = marker;
    }

    /// Rasterize every polygon and draw the result into `area`.
    ///
    /// Later polygons are drawn over earlier ones. Cells beyond `area`
    /// are cropped.
    pub fn render(&mut self, frame: &mut Frame, area: Rect, lineart: &Lineart) {
        self.rasterize(lineart);
        frame.render_widget(Paragraph::new(self.raster.lines(self.marker)), area);
    }

    /// Redraw the raster from the current simulation state.
    pub fn rasterize(&mut self, lineart: &Lineart) -> &Raster {
        let viewport = lineart.viewport();
        // positions are inclusive, so the grid is one cell larger per axis
        let width = viewport.width.saturating_add(1);
        let height = viewport.height.saturating_add(1);

        if self.raster.width() != width || self.raster.height() != height {
            self.raster = Raster::new(width, height);
        } else {
            self.raster.clear();
        }

        for polygon in lineart.polygons() {
            self.raster.draw_polygon(polygon);
        }
        &self.raster
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lineart_core::{FixedSource, SimulationSettings, Viewport};
    use ratatui::{Terminal, backend::TestBackend};

    fn lineart() -> Lineart {
        Lineart::with_source(
            Viewport::new(39, 19),
            SimulationSettings {
                polygon_count: 2,
                vertex_count: 3,
            },
            FixedSource(2),
        )
        .unwrap()
    }

    #[test]
    fn test_raster_matches_viewport() {
        let mut view = LineartView::default();
        let raster = view.rasterize(&lineart());
        assert_eq!((raster.width(), raster.height()), (40, 20));
        // all vertices of the head polygon coincide at (2, 2)
        assert!(raster.get(2, 2).is_some());
        assert!(raster.get(0, 0).is_none());
    }

    #[test]
    fn test_render_to_backend() {
        let lineart = lineart();
        let mut view = LineartView::new(Marker::Hash);
        let mut terminal = Terminal::new(TestBackend::new(40, 20)).unwrap();
        terminal
            .draw(|frame| {
                let area = frame.area();
                view.render(frame, area, &lineart);
            })
            .unwrap();

        let buffer = terminal.backend().buffer();
        assert_eq!(buffer[(2, 2)].symbol(), "#");
        assert_eq!(buffer[(14, 14)].symbol(), "#");
        assert_eq!(buffer[(0, 0)].symbol(), " ");
    }
}
