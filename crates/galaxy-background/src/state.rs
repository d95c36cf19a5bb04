//! Galaxy animation state management.

use galaxy_core::{PlanetData, StarData};
use rand::{SeedableRng, rngs::StdRng};
use ratatui::{Frame, buffer::Buffer, layout::Rect, style::Color, widgets::Widget};
use tracing::info;

use crate::{animation::Animation, canvas::PixelCanvas, galaxy::Galaxy};

/// Galaxy animation state.
#[derive(Debug)]
pub struct GalaxyState {
    /// Generated planets and stars.
    galaxy: Galaxy,
    /// Planet drift animation.
    planet_animation: Animation,
    /// Star shining animation.
    star_animation: Animation,
    planet_data: PlanetData,
    star_data: StarData,
    /// Color behind every shape.
    background: Color,
    /// Seed the current galaxy was generated from.
    seed: u64,
}

impl GalaxyState {
    /// Create a new galaxy state generated from `seed`.
    pub fn new(planet_data: PlanetData, star_data: StarData, background: Color, seed: u64) -> Self {
        let mut rng = StdRng::seed_from_u64(seed);
        let galaxy = Galaxy::generate(&planet_data, &star_data, &mut rng);
        info!(
            seed,
            planets = galaxy.planets().len(),
            stars = galaxy.stars().len(),
            "galaxy generated"
        );

        Self {
            galaxy,
            planet_animation: Animation::new(planet_data.animation),
            star_animation: Animation::new(star_data.shining_animation),
            planet_data,
            star_data,
            background,
            seed,
        }
    }

    /// Regenerate the galaxy from a new seed, keeping the configuration.
    pub fn reseed(&mut self, seed: u64) {
        *self = Self::new(
            self.planet_data.clone(),
            self.star_data.clone(),
            self.background,
            seed,
        );
    }

    pub fn galaxy(&self) -> &Galaxy {
        &self.galaxy
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Planet shift and star shine after `elapsed_ms` milliseconds.
    pub fn values_at(&self, elapsed_ms: u64) -> (f32, f32) {
        (
            self.planet_animation.value_at(elapsed_ms),
            self.star_animation.value_at(elapsed_ms),
        )
    }

    /// Rasterize one frame sized to `area`.
    pub fn canvas(&self, area: Rect, elapsed_ms: u64) -> PixelCanvas {
        let mut canvas = PixelCanvas::for_area(area, self.background);
        let (planet_shift, star_shine) = self.values_at(elapsed_ms);
        self.galaxy.draw(&mut canvas, planet_shift, star_shine);
        canvas
    }

    /// Render the galaxy to the whole frame.
    pub fn render(&self, frame: &mut Frame, elapsed_ms: u64) {
        let area = frame.area();
        frame.render_widget(&self.canvas(area, elapsed_ms), area);
    }

    /// Render the galaxy into an arbitrary buffer region.
    pub fn render_area(&self, area: Rect, buf: &mut Buffer, elapsed_ms: u64) {
        (&self.canvas(area, elapsed_ms)).render(area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use galaxy_core::{AnimationSpec, Easing, RepeatMode};
    use ratatui::{Terminal, backend::TestBackend};

    fn state(planets: usize, stars: usize, seed: u64) -> GalaxyState {
        let planet_data = PlanetData {
            number_of_planets: planets,
            max_planet_radius: 3.0,
            max_planet_alpha: 1.0,
            animation: AnimationSpec::new(1000, Easing::Linear, RepeatMode::Reverse),
            ..PlanetData::default()
        };
        let star_data = StarData {
            number_of_stars: stars,
            ..StarData::default()
        };
        GalaxyState::new(planet_data, star_data, Color::Black, seed)
    }

    #[test]
    fn test_values_follow_animations() {
        let state = state(1, 1, 0);
        assert_eq!(state.values_at(0), (0.0, 0.0));
        assert_eq!(state.values_at(500).0, 0.5);
        assert_eq!(state.values_at(1500).0, 0.5);
        assert_eq!(state.values_at(2000).0, 0.0);
    }

    #[test]
    fn test_render_empty_galaxy_is_background() {
        let state = state(0, 0, 1);
        let mut terminal = Terminal::new(TestBackend::new(20, 10)).unwrap();
        terminal.draw(|frame| state.render(frame, 250)).unwrap();

        let buffer = terminal.backend().buffer();
        for y in 0..10 {
            for x in 0..20 {
                let cell = &buffer[(x, y)];
                assert_eq!(cell.symbol(), "▀");
                assert_eq!(cell.fg, Color::Rgb(0, 0, 0));
                assert_eq!(cell.bg, Color::Rgb(0, 0, 0));
            }
        }
    }

    #[test]
    fn test_render_draws_planets() {
        let state = state(200, 0, 2);
        let area = Rect::new(0, 0, 40, 20);

        // Halfway through the drift most planets are crossing the canvas.
        let canvas = state.canvas(area, 500);
        assert!(canvas.count_not(Color::Black) > 0);

        let mut buf = Buffer::empty(area);
        state.render_area(area, &mut buf, 500);
        let lit = buf
            .content()
            .iter()
            .filter(|cell| cell.fg != Color::Rgb(0, 0, 0) || cell.bg != Color::Rgb(0, 0, 0))
            .count();
        assert!(lit > 0);
    }

    #[test]
    fn test_reseed_changes_galaxy() {
        let mut state = state(20, 20, 3);
        let before = state.galaxy().clone();
        state.reseed(4);
        assert_eq!(state.seed(), 4);
        assert_ne!(state.galaxy(), &before);

        state.reseed(3);
        assert_eq!(state.galaxy(), &before);
    }

    #[test]
    fn test_render_tracks_resize() {
        let state = state(50, 50, 5);
        let small = state.canvas(Rect::new(0, 0, 10, 5), 100);
        let large = state.canvas(Rect::new(0, 0, 30, 15), 100);
        assert_eq!((small.width(), small.height()), (10, 10));
        assert_eq!((large.width(), large.height()), (30, 30));
    }
}
