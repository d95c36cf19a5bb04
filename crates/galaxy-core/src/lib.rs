//! Core types shared by the galaxy crates.

mod easing;

pub use easing::Easing;

use ratatui::style::Color;
use serde::{Deserialize, Deserializer, Serialize};

/// A point on the canvas, in canvas pixels.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Move this point by `distance` along the direction `angle`.
    ///
    /// The direction maps `sin` to the x axis and `cos` to the y axis, so an
    /// angle of zero points straight down the canvas.
    pub fn offset(self, distance: f32, angle: f32) -> Self {
        let (sin, cos) = angle.sin_cos();
        Self {
            x: self.x + distance * sin,
            y: self.y + distance * cos,
        }
    }

    /// Euclidean distance to another point.
    pub fn distance(self, other: Point) -> f32 {
        (self.x - other.x).hypot(self.y - other.y)
    }
}

/// Repeat behaviour of an animation once it reaches its end value.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RepeatMode {
    /// Run forward, then backward (ping-pong).
    #[default]
    Reverse,
    /// Jump back to the start value and run forward again.
    Restart,
}

/// Duration, easing and repeat behaviour of a looping animation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AnimationSpec {
    /// Length of one forward run in milliseconds.
    pub duration_ms: u64,
    pub easing: Easing,
    pub repeat: RepeatMode,
}

impl AnimationSpec {
    pub const fn new(duration_ms: u64, easing: Easing, repeat: RepeatMode) -> Self {
        Self {
            duration_ms,
            easing,
            repeat,
        }
    }
}

/// An animation table where every key is optional.
#[derive(Debug, Deserialize)]
struct PartialAnimationSpec {
    duration_ms: Option<u64>,
    easing: Option<Easing>,
    repeat: Option<RepeatMode>,
}

impl PartialAnimationSpec {
    fn or(self, base: AnimationSpec) -> AnimationSpec {
        AnimationSpec {
            duration_ms: self.duration_ms.unwrap_or(base.duration_ms),
            easing: self.easing.unwrap_or(base.easing),
            repeat: self.repeat.unwrap_or(base.repeat),
        }
    }
}

/// Keys missing from a planet animation table keep the planet defaults.
fn planet_animation<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> Result<AnimationSpec, D::Error> {
    Ok(PartialAnimationSpec::deserialize(deserializer)?.or(DEFAULT_PLANET_ANIMATION))
}

/// Keys missing from a star shining table keep the star defaults.
fn star_shining_animation<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> Result<AnimationSpec, D::Error> {
    Ok(PartialAnimationSpec::deserialize(deserializer)?.or(DEFAULT_STAR_SHINING_ANIMATION))
}

/// Default planet drift: a slow linear ping-pong.
pub const DEFAULT_PLANET_ANIMATION: AnimationSpec =
    AnimationSpec::new(30_000, Easing::Linear, RepeatMode::Reverse);

/// Default star shining: a short eased ping-pong.
pub const DEFAULT_STAR_SHINING_ANIMATION: AnimationSpec =
    AnimationSpec::new(3_000, Easing::FastOutSlowIn, RepeatMode::Reverse);

/// Light gray, gray and dark gray.
pub const DEFAULT_PLANET_COLORS: [Color; 3] = [
    Color::Rgb(0xCC, 0xCC, 0xCC),
    Color::Rgb(0x88, 0x88, 0x88),
    Color::Rgb(0x44, 0x44, 0x44),
];

/// White, gray and dark gray.
pub const DEFAULT_STAR_COLORS: [Color; 3] = [
    Color::Rgb(0xFF, 0xFF, 0xFF),
    Color::Rgb(0x88, 0x88, 0x88),
    Color::Rgb(0x44, 0x44, 0x44),
];

/// Bounds used when generating the planet dataset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlanetData {
    pub number_of_planets: usize,
    /// Upper bound of a planet radius, in canvas pixels.
    pub max_planet_radius: f32,
    pub max_planet_alpha: f32,
    pub planet_colors: Vec<Color>,
    #[serde(deserialize_with = "planet_animation")]
    pub animation: AnimationSpec,
}

impl Default for PlanetData {
    fn default() -> Self {
        Self {
            number_of_planets: 100,
            max_planet_radius: 2.0,
            max_planet_alpha: 0.5,
            planet_colors: DEFAULT_PLANET_COLORS.to_vec(),
            animation: DEFAULT_PLANET_ANIMATION,
        }
    }
}

/// Bounds used when generating the star dataset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StarData {
    pub number_of_stars: usize,
    pub star_colors: Vec<Color>,
    /// Upper bound of a single star side, in canvas pixels.
    pub max_side_length: f32,
    /// Edge counts are drawn from `0..=max_edge_count`.
    pub max_edge_count: u32,
    pub max_alpha: f32,
    #[serde(deserialize_with = "star_shining_animation")]
    pub shining_animation: AnimationSpec,
}

impl Default for StarData {
    fn default() -> Self {
        Self {
            number_of_stars: 100,
            star_colors: DEFAULT_STAR_COLORS.to_vec(),
            max_side_length: 3.0,
            max_edge_count: 10,
            max_alpha: 0.8,
            shining_animation: DEFAULT_STAR_SHINING_ANIMATION,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_point_offset_axis_mapping() {
        let p = Point::new(10.0, 20.0).offset(5.0, 0.0);
        assert!((p.x - 10.0).abs() < 1e-5);
        assert!((p.y - 25.0).abs() < 1e-5);

        let p = Point::new(10.0, 20.0).offset(5.0, std::f32::consts::FRAC_PI_2);
        assert!((p.x - 15.0).abs() < 1e-5);
        assert!((p.y - 20.0).abs() < 1e-5);
    }

    #[test]
    fn test_point_distance() {
        let d = Point::new(0.0, 0.0).distance(Point::new(3.0, 4.0));
        assert!((d - 5.0).abs() < 1e-6);
    }

    #[test]
    fn test_defaults() {
        let planets = PlanetData::default();
        assert_eq!(planets.number_of_planets, 100);
        assert_eq!(planets.planet_colors.len(), 3);
        assert_eq!(planets.animation.repeat, RepeatMode::Reverse);

        let stars = StarData::default();
        assert_eq!(stars.max_edge_count, 10);
        assert_eq!(stars.shining_animation.easing, Easing::FastOutSlowIn);
    }
}
