//! Drawing surfaces for the galaxy renderer.

use galaxy_core::Point;
use ratatui::{buffer::Buffer, layout::Rect, style::Color, widgets::Widget};

use crate::color::{Rgb, blend, to_rgb};

/// Glyph drawing the top pixel as foreground and the bottom one as background.
const HALF_BLOCK: char = '▀';

/// A 2D surface the galaxy can be drawn onto.
pub trait Surface {
    /// Width and height in pixels.
    fn size(&self) -> (f32, f32);

    fn fill_circle(&mut self, center: Point, radius: f32, color: Color, alpha: f32);

    /// Fill a closed polygon using the even-odd rule.
    fn fill_polygon(&mut self, vertices: &[Point], color: Color, alpha: f32);
}

/// An RGB pixel grid rendered into the terminal with two pixels per cell.
#[derive(Debug, Clone, PartialEq)]
pub struct PixelCanvas {
    width: u16,
    height: u16,
    pixels: Vec<Rgb>,
}

impl PixelCanvas {
    /// Create a canvas of `width` x `height` pixels filled with `background`.
    pub fn new(width: u16, height: u16, background: Color) -> Self {
        Self {
            width,
            height,
            pixels: vec![to_rgb(background); width as usize * height as usize],
        }
    }

    /// Create a canvas covering a terminal area.
    pub fn for_area(area: Rect, background: Color) -> Self {
        Self::new(area.width, area.height.saturating_mul(2), background)
    }

    pub fn width(&self) -> u16 {
        self.width
    }

    pub fn height(&self) -> u16 {
        self.height
    }

    pub fn pixel(&self, x: u16, y: u16) -> Option<Rgb> {
        if x < self.width && y < self.height {
            Some(self.pixels[self.index(x, y)])
        } else {
            None
        }
    }

    /// Number of pixels differing from `color`.
    pub fn count_not(&self, color: Color) -> usize {
        let rgb = to_rgb(color);
        self.pixels.iter().filter(|p| **p != rgb).count()
    }

    fn index(&self, x: u16, y: u16) -> usize {
        y as usize * self.width as usize + x as usize
    }

    fn blend_pixel(&mut self, x: u16, y: u16, rgb: Rgb, alpha: f32) {
        if x < self.width && y < self.height {
            let index = self.index(x, y);
            self.pixels[index] = blend(rgb, self.pixels[index], alpha);
        }
    }

    /// Pixel columns or rows covering `low..=high`, clipped to `limit`.
    fn span(low: f32, high: f32, limit: u16) -> Option<(u16, u16)> {
        if limit == 0 || !low.is_finite() || !high.is_finite() {
            return None;
        }
        let first = low.floor().max(0.0);
        let last = high.floor().min(limit as f32 - 1.0);
        if first > last {
            return None;
        }
        Some((first as u16, last as u16))
    }
}

impl Surface for PixelCanvas {
    fn size(&self) -> (f32, f32) {
        (self.width as f32, self.height as f32)
    }

    fn fill_circle(&mut self, center: Point, radius: f32, color: Color, alpha: f32) {
        if radius <= 0.0 || alpha <= 0.0 {
            return;
        }
        let rgb = to_rgb(color);

        // Circles smaller than a pixel tint the pixel holding the center.
        if radius < 0.5 {
            if center.x >= 0.0 && center.y >= 0.0 {
                let coverage = (std::f32::consts::PI * radius * radius).min(1.0);
                self.blend_pixel(center.x as u16, center.y as u16, rgb, alpha * coverage);
            }
            return;
        }

        let Some((x0, x1)) = Self::span(center.x - radius, center.x + radius, self.width) else {
            return;
        };
        let Some((y0, y1)) = Self::span(center.y - radius, center.y + radius, self.height) else {
            return;
        };

        for y in y0..=y1 {
            for x in x0..=x1 {
                let pixel_center = Point::new(x as f32 + 0.5, y as f32 + 0.5);
                if pixel_center.distance(center) <= radius {
                    self.blend_pixel(x, y, rgb, alpha);
                }
            }
        }
    }

    fn fill_polygon(&mut self, vertices: &[Point], color: Color, alpha: f32) {
        if vertices.len() < 3 || alpha <= 0.0 {
            return;
        }
        let rgb = to_rgb(color);

        let (min_y, max_y) = vertices
            .iter()
            .fold((f32::INFINITY, f32::NEG_INFINITY), |(lo, hi), p| {
                (lo.min(p.y), hi.max(p.y))
            });
        let Some((y0, y1)) = Self::span(min_y, max_y, self.height) else {
            return;
        };

        let mut crossings = Vec::new();
        for y in y0..=y1 {
            let scan_y = y as f32 + 0.5;
            crossings.clear();

            let closing = (vertices[vertices.len() - 1], vertices[0]);
            let edges = vertices.windows(2).map(|pair| (pair[0], pair[1]));
            for (a, b) in edges.chain(std::iter::once(closing)) {
                if (a.y <= scan_y) != (b.y <= scan_y) {
                    crossings.push(a.x + (scan_y - a.y) * (b.x - a.x) / (b.y - a.y));
                }
            }
            crossings.sort_by(f32::total_cmp);

            for pair in crossings.chunks_exact(2) {
                // Pixels whose centers fall between the two crossings.
                let Some((x0, x1)) = Self::span(pair[0] - 0.5, pair[1] - 0.5, self.width) else {
                    continue;
                };
                for x in x0..=x1 {
                    let center_x = x as f32 + 0.5;
                    if center_x >= pair[0] && center_x < pair[1] {
                        self.blend_pixel(x, y, rgb, alpha);
                    }
                }
            }
        }
    }
}

impl Widget for &PixelCanvas {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let rows = area.height.min(self.height.div_ceil(2));
        let cols = area.width.min(self.width);

        for row in 0..rows {
            for col in 0..cols {
                let Some(top) = self.pixel(col, row * 2) else {
                    continue;
                };
                let bottom = self.pixel(col, row * 2 + 1).unwrap_or(top);

                if let Some(cell) = buf.cell_mut((area.x + col, area.y + row)) {
                    cell.set_char(HALF_BLOCK)
                        .set_fg(Color::Rgb(top.0, top.1, top.2))
                        .set_bg(Color::Rgb(bottom.0, bottom.1, bottom.2));
                }
            }
        }
    }
}

/// A surface that records draw calls instead of rasterizing them.
#[cfg(test)]
#[derive(Debug, Default)]
pub struct RecordingSurface {
    pub width: f32,
    pub height: f32,
    pub circles: Vec<(Point, f32, Color, f32)>,
    pub polygons: Vec<(Vec<Point>, Color, f32)>,
}

#[cfg(test)]
impl Surface for RecordingSurface {
    fn size(&self) -> (f32, f32) {
        (self.width, self.height)
    }

    fn fill_circle(&mut self, center: Point, radius: f32, color: Color, alpha: f32) {
        self.circles.push((center, radius, color, alpha));
    }

    fn fill_polygon(&mut self, vertices: &[Point], color: Color, alpha: f32) {
        self.polygons.push((vertices.to_vec(), color, alpha));
    }
}
