//! Animated galaxy background.
//!
//! Planets start just outside the canvas edges and drift across it while
//! star polygons shine in place. Shapes are generated once from a seeded
//! random source; every frame recomputes their positions from the stored
//! coefficients, the canvas size and the current animation values, then
//! rasterizes them onto a [`PixelCanvas`] rendered with half-block cells.

mod animation;
mod animations;
mod canvas;
mod color;
mod galaxy;
mod state;

pub use animation::Animation;
pub use animations::planets::{self, Edge, Planet};
pub use animations::stars::{self, Star, StarPath};
pub use canvas::{PixelCanvas, Surface};
pub use color::{Rgb, blend, to_rgb};
pub use galaxy::Galaxy;
pub use state::GalaxyState;
