//! Cell grid that polygons are rasterized into.

use lineart_core::{Point, Polygon};
use ratatui::{
    style::{Color, Style},
    text::{Line, Span},
};

use crate::chars::Marker;
use crate::color::to_terminal_color;

/// Grid of optionally lit, colored cells.
#[derive(Debug, Clone)]
pub struct Raster {
    width: u16,
    height: u16,
    cells: Vec<Option<Color>>,
}

impl Raster {
    /// Empty raster of `width` x `height` cells.
    pub fn new(width: u16, height: u16) -> Self {
        Self {
            width,
            height,
            cells: vec![None; width as usize * height as usize],
        }
    }

    pub fn width(&self) -> u16 {
        self.width
    }

    pub fn height(&self) -> u16 {
        self.height
    }

    /// Turn every cell off.
    pub fn clear(&mut self) {
        self.cells.fill(None);
    }

    /// Color at `(x, y)`, or `None` if unlit or outside the grid.
    pub fn get(&self, x: i32, y: i32) -> Option<Color> {
        self.index(x, y).and_then(|i| self.cells[i])
    }

    /// Light one cell. Coordinates outside the grid are ignored.
    pub fn plot(&mut self, x: i32, y: i32, color: Color) {
        if let Some(i) = self.index(x, y) {
            self.cells[i] = Some(color);
        }
    }

    /// Bresenham line between two cells, both ends included.
    pub fn draw_line(&mut self, from: (i32, i32), to: (i32, i32), color: Color) {
        let (mut x, mut y) = from;
        let (x1, y1) = to;
        let dx = (x1 - x).abs();
        let dy = -(y1 - y).abs();
        let sx = if x < x1 { 1 } else { -1 };
        let sy = if y < y1 { 1 } else { -1 };
        let mut err = dx + dy;

        loop {
            self.plot(x, y, color);
            if x == x1 && y == y1 {
                break;
            }
            let e2 = 2 * err;
            if e2 >= dy {
                err += dy;
                x += sx;
            }
            if e2 <= dx {
                err += dx;
                y += sy;
            }
        }
    }

    /// Outline of `polygon` in its own color, closing last to first.
    pub fn draw_polygon(&mut self, polygon: &Polygon) {
        let color = to_terminal_color(polygon.color());
        for (a, b) in polygon.edges() {
            self.draw_line(cell(a), cell(b), color);
        }
    }

    /// One styled line per row.
    pub fn lines(&self, marker: Marker) -> Vec<Line<'static>> {
        let glyph = marker.glyph().to_string();
        (0..self.height as i32)
            .map(|y| {
                let spans: Vec<Span> = (0..self.width as i32)
                    .map(|x| match self.get(x, y) {
                        Some(color) => Span::styled(glyph.clone(), Style::new().fg(color)),
                        None => Span::raw(" "),
                    })
                    .collect();
                Line::from(spans)
            })
            .collect()
    }

    fn index(&self, x: i32, y: i32) -> Option<usize> {
        if x < 0 || y < 0 || x >= self.width as i32 || y >= self.height as i32 {
            return None;
        }
        Some(y as usize * self.width as usize + x as usize)
    }
}

fn cell(point: &Point) -> (i32, i32) {
    (point.x(), point.y())
}

#[cfg(test)]
mod tests {
    use super::*;
    use lineart_core::Viewport;

    const RED: Color = Color::Rgb(255, 0, 0);

    fn lit(raster: &Raster) -> Vec<(i32, i32)> {
        let mut cells = Vec::new();
        for y in 0..raster.height() as i32 {
            for x in 0..raster.width() as i32 {
                if raster.get(x, y).is_some() {
                    cells.push((x, y));
                }
            }
        }
        cells
    }

    #[test]
    fn test_plot_ignores_outside() {
        let mut raster = Raster::new(4, 3);
        raster.plot(-1, 0, RED);
        raster.plot(4, 0, RED);
        raster.plot(0, 3, RED);
        assert!(lit(&raster).is_empty());
        raster.plot(3, 2, RED);
        assert_eq!(lit(&raster), vec![(3, 2)]);
    }

    #[test]
    fn test_horizontal_line() {
        let mut raster = Raster::new(5, 2);
        raster.draw_line((4, 1), (1, 1), RED);
        assert_eq!(lit(&raster), vec![(1, 1), (2, 1), (3, 1), (4, 1)]);
    }

    #[test]
    fn test_diagonal_line() {
        let mut raster = Raster::new(4, 4);
        raster.draw_line((0, 0), (3, 3), RED);
        assert_eq!(lit(&raster), vec![(0, 0), (1, 1), (2, 2), (3, 3)]);
    }

    #[test]
    fn test_single_cell_line() {
        let mut raster = Raster::new(3, 3);
        raster.draw_line((1, 1), (1, 1), RED);
        assert_eq!(lit(&raster), vec![(1, 1)]);
    }

    #[test]
    fn test_draw_polygon_outline() {
        let viewport = Viewport::new(4, 4);
        let corners = [(0, 0), (4, 0), (4, 4), (0, 4)];
        let points = corners
            .iter()
            .map(|&(x, y)| Point::new(x, y, 0, 0, viewport).unwrap())
            .collect();
        let polygon = Polygon::new(points, lineart_core::Color::new(10, 20, 30));

        let mut raster = Raster::new(5, 5);
        raster.draw_polygon(&polygon);

        assert_eq!(lit(&raster).len(), 16);
        assert_eq!(raster.get(0, 4), Some(Color::Rgb(10, 20, 30)));
        assert_eq!(raster.get(2, 2), None);
    }

    #[test]
    fn test_lines_use_marker() {
        let mut raster = Raster::new(3, 2);
        raster.plot(1, 0, RED);
        let lines = raster.lines(Marker::Hash);
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0].spans.len(), 3);
        assert_eq!(lines[0].spans[1].content, "#");
        assert_eq!(lines[0].spans[1].style.fg, Some(RED));
        assert_eq!(lines[1].spans[1].content, " ");
    }

    #[test]
    fn test_clear() {
        let mut raster = Raster::new(2, 2);
        raster.plot(0, 0, RED);
        raster.clear();
        assert!(lit(&raster).is_empty());
    }
}
