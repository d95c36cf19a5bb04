//! Shape datasets and their motion.

pub mod planets;
pub mod stars;
