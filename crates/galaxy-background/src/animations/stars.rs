//! Spiked star polygons that shine in place.

use std::f32::consts::{FRAC_PI_2, TAU};

use galaxy_core::{Point, StarData};
use rand::Rng;
use ratatui::style::Color;
use tracing::debug;

/// Randomized, immutable parameters of one star.
#[derive(Debug, Clone, PartialEq)]
pub struct Star {
    /// Start point as a fraction of canvas width.
    pub center_offset_x: f32,
    /// Start point as a fraction of canvas height.
    pub center_offset_y: f32,
    pub edge_count: u32,
    pub side_length: f32,
    /// Interior angle in radians.
    pub interior_angle: f32,
    pub color: Color,
    /// Fades out while the others fade in.
    pub reversed: bool,
}

impl Star {
    /// First vertex of the star on a `width` x `height` canvas.
    pub fn start(&self, width: f32, height: f32) -> Point {
        Point::new(self.center_offset_x * width, self.center_offset_y * height)
    }

    pub fn path(&self, width: f32, height: f32) -> StarPath {
        StarPath::new(
            self.start(width, height),
            self.side_length,
            self.edge_count,
            self.interior_angle,
        )
    }

    /// Opacity for the current shine value.
    pub fn alpha(&self, max_alpha: f32, shine: f32) -> f32 {
        let shine = if self.reversed { 1.0 - shine } else { shine };
        max_alpha.clamp(0.0, 1.0) * shine.clamp(0.0, 1.0)
    }
}

/// Closed outline of a star, starting and (for two or more edges) ending at
/// the start point.
#[derive(Debug, Clone, PartialEq)]
pub struct StarPath {
    vertices: Vec<Point>,
}

impl StarPath {
    /// Walk `edge_count` steps from `start`, two sides per step.
    ///
    /// Each step turns by a full turn divided by `edge_count`. The first side
    /// follows the interior angle, the second mirrors it, which leaves a spike
    /// at every step.
    pub fn new(start: Point, side_length: f32, edge_count: u32, interior_angle: f32) -> Self {
        let mut vertices = Vec::with_capacity(1 + 2 * edge_count as usize);
        vertices.push(start);

        let exterior_angle = -interior_angle;
        let mut current = start;
        for step in 0..edge_count {
            let rotation = TAU / edge_count as f32 * step as f32;
            let spike = current.offset(side_length, interior_angle + rotation);
            current = spike.offset(side_length, exterior_angle + rotation);
            vertices.push(spike);
            vertices.push(current);
        }

        Self { vertices }
    }

    pub fn vertices(&self) -> &[Point] {
        &self.vertices
    }

    /// Line segments between consecutive vertices.
    pub fn segments(&self) -> impl Iterator<Item = (Point, Point)> + '_ {
        self.vertices.windows(2).map(|pair| (pair[0], pair[1]))
    }

    /// Top-left and bottom-right corners of the bounding box.
    pub fn bounds(&self) -> Option<(Point, Point)> {
        let first = *self.vertices.first()?;
        Some(self.vertices.iter().fold((first, first), |(min, max), p| {
            (
                Point::new(min.x.min(p.x), min.y.min(p.y)),
                Point::new(max.x.max(p.x), max.y.max(p.y)),
            )
        }))
    }
}

/// Generate the star dataset.
pub fn generate<R: Rng + ?Sized>(data: &StarData, rng: &mut R) -> Vec<Star> {
    if data.star_colors.is_empty() {
        debug!("star palette is empty, generating no stars");
        return Vec::new();
    }

    let count = data.number_of_stars;
    let max_side_length = data.max_side_length.max(0.0);

    let stars: Vec<Star> = (0..count)
        .map(|index| Star {
            center_offset_x: rng.random::<f32>(),
            center_offset_y: rng.random::<f32>(),
            edge_count: rng.random_range(0..=data.max_edge_count),
            side_length: rng.random::<f32>() * max_side_length,
            interior_angle: rng.random::<f32>() * FRAC_PI_2,
            color: data.star_colors[rng.random_range(0..data.star_colors.len())],
            reversed: index < count / 2,
        })
        .collect();

    debug!(count = stars.len(), max_side_length, "generated stars");
    stars
}
