//! The generated galaxy and its per-frame draw pass.

use galaxy_core::{PlanetData, StarData};
use rand::Rng;

use crate::animations::{
    planets::{self, Planet},
    stars::{self, Star},
};
use crate::canvas::Surface;

/// Planets and stars generated once per session.
///
/// Nothing here changes between frames; every position is derived from the
/// stored coefficients, the surface size and the animation values.
#[derive(Debug, Clone, PartialEq)]
pub struct Galaxy {
    planets: Vec<Planet>,
    stars: Vec<Star>,
    max_star_alpha: f32,
}

impl Galaxy {
    pub fn generate<R: Rng + ?Sized>(
        planet_data: &PlanetData,
        star_data: &StarData,
        rng: &mut R,
    ) -> Self {
        Self {
            planets: planets::generate(planet_data, rng),
            stars: stars::generate(star_data, rng),
            max_star_alpha: star_data.max_alpha,
        }
    }

    pub fn planets(&self) -> &[Planet] {
        &self.planets
    }

    pub fn stars(&self) -> &[Star] {
        &self.stars
    }

    /// Draw every star, then every planet on top.
    ///
    /// `planet_shift` and `star_shine` are the current values of the planet
    /// and star animations, both in 0.0-1.0.
    pub fn draw<S: Surface + ?Sized>(&self, surface: &mut S, planet_shift: f32, star_shine: f32) {
        let (width, height) = surface.size();
        let diagonal = planets::diagonal(width, height);

        for star in &self.stars {
            let path = star.path(width, height);
            let alpha = star.alpha(self.max_star_alpha, star_shine);
            surface.fill_polygon(path.vertices(), star.color, alpha);
        }

        for planet in &self.planets {
            let center = planet.center(width, height, diagonal, planet_shift);
            surface.fill_circle(center, planet.radius, planet.color, planet.alpha);
        }
    }
}
