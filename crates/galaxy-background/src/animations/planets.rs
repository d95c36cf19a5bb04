//! Planets drifting in from just outside the canvas edges.

use std::f32::consts::{FRAC_PI_2, PI};

use galaxy_core::{PlanetData, Point};
use rand::Rng;
use ratatui::style::Color;
use tracing::debug;

/// Coefficient placing a planet just before the top or left edge.
pub const OUTSIDE_NEAR: f32 = -0.1;
/// Coefficient placing a planet just past the bottom or right edge.
pub const OUTSIDE_FAR: f32 = 1.1;

/// The canvas edge a planet starts beyond.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Edge {
    Top,
    Bottom,
    Left,
    Right,
}

impl Edge {
    pub const ALL: [Edge; 4] = [Edge::Top, Edge::Bottom, Edge::Left, Edge::Right];

    /// Build an edge from which axis lies outside the canvas and on which side.
    pub fn from_axis(x_outside: bool, far_side: bool) -> Self {
        match (x_outside, far_side) {
            (true, false) => Edge::Left,
            (true, true) => Edge::Right,
            (false, false) => Edge::Top,
            (false, true) => Edge::Bottom,
        }
    }

    /// Classify a coefficient pair, or `None` if both lie inside 0.0-1.0.
    pub fn from_coefficients(x: f32, y: f32) -> Option<Self> {
        if x < 0.0 {
            Some(Edge::Left)
        } else if x > 1.0 {
            Some(Edge::Right)
        } else if y < 0.0 {
            Some(Edge::Top)
        } else if y > 1.0 {
            Some(Edge::Bottom)
        } else {
            None
        }
    }

    /// Coefficients for a planet beyond this edge, `inside` along the edge.
    pub fn coefficients(self, inside: f32) -> (f32, f32) {
        match self {
            Edge::Top => (inside, OUTSIDE_NEAR),
            Edge::Bottom => (inside, OUTSIDE_FAR),
            Edge::Left => (OUTSIDE_NEAR, inside),
            Edge::Right => (OUTSIDE_FAR, inside),
        }
    }

    /// Rotation applied to a base angle in 0..=PI so the shift points inward.
    ///
    /// Directions are `(sin, cos)`, so a base angle in 0..=PI already points
    /// right, into the canvas from the left edge.
    pub fn rotation(self) -> f32 {
        match self {
            Edge::Left => 0.0,
            Edge::Bottom => FRAC_PI_2,
            Edge::Right => PI,
            Edge::Top => -FRAC_PI_2,
        }
    }

    /// Unit vector pointing from this edge into the canvas.
    pub fn inward(self) -> Point {
        match self {
            Edge::Top => Point::new(0.0, 1.0),
            Edge::Bottom => Point::new(0.0, -1.0),
            Edge::Left => Point::new(1.0, 0.0),
            Edge::Right => Point::new(-1.0, 0.0),
        }
    }
}

/// Randomized, immutable parameters of one planet.
#[derive(Debug, Clone, PartialEq)]
pub struct Planet {
    /// Horizontal position as a fraction of canvas width.
    pub center_offset_x: f32,
    /// Vertical position as a fraction of canvas height.
    pub center_offset_y: f32,
    pub edge: Edge,
    /// Direction of travel in radians.
    pub shift_angle: f32,
    pub radius: f32,
    pub color: Color,
    pub alpha: f32,
    /// Travels from the far end of its path back to its start.
    pub reversed: bool,
}

impl Planet {
    /// Pixel center on a `width` x `height` canvas for animation `value`.
    pub fn center(&self, width: f32, height: f32, diagonal: f32, value: f32) -> Point {
        let start = Point::new(self.center_offset_x * width, self.center_offset_y * height);
        start.offset(shift_distance(value, diagonal, self.reversed), self.shift_angle)
    }
}

/// Distance travelled along the shift angle for animation `value`.
pub fn shift_distance(value: f32, diagonal: f32, reversed: bool) -> f32 {
    if reversed {
        (1.0 - value) * diagonal
    } else {
        value * diagonal
    }
}

/// Canvas diagonal, the distance every planet travels over one cycle.
pub fn diagonal(width: f32, height: f32) -> f32 {
    width.hypot(height)
}

/// Generate the planet dataset.
///
/// An empty palette yields no planets. The first half of the sequence is
/// reversed so the population does not pulse in unison.
pub fn generate<R: Rng + ?Sized>(data: &PlanetData, rng: &mut R) -> Vec<Planet> {
    if data.planet_colors.is_empty() {
        debug!("planet palette is empty, generating no planets");
        return Vec::new();
    }

    let count = data.number_of_planets;
    let max_radius = data.max_planet_radius.max(0.0);
    let max_alpha = data.max_planet_alpha.clamp(0.0, 1.0);

    let planets: Vec<Planet> = (0..count)
        .map(|index| {
            let edge = Edge::from_axis(rng.random_bool(0.5), rng.random_bool(0.5));
            let (center_offset_x, center_offset_y) = edge.coefficients(rng.random::<f32>());
            let base_angle = rng.random_range(0.0..=PI);
            let color = data.planet_colors[rng.random_range(0..data.planet_colors.len())];

            Planet {
                center_offset_x,
                center_offset_y,
                edge,
                shift_angle: base_angle + edge.rotation(),
                radius: rng.random::<f32>() * max_radius,
                color,
                alpha: rng.random::<f32>() * max_alpha,
                reversed: index < count / 2,
            }
        })
        .collect();

    debug!(count = planets.len(), max_radius, max_alpha, "generated planets");
    planets
}
