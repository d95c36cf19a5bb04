//! Looping animation values driven by elapsed time.

use galaxy_core::{AnimationSpec, RepeatMode};

/// A scalar animating from 0.0 to 1.0 and repeating forever.
///
/// The value is a pure function of elapsed time, so the render loop only
/// needs to track how long the animation has been running.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Animation {
    spec: AnimationSpec,
}

impl Animation {
    pub fn new(spec: AnimationSpec) -> Self {
        Self { spec }
    }

    /// Current value after `elapsed_ms` milliseconds.
    pub fn value_at(&self, elapsed_ms: u64) -> f32 {
        let duration = self.spec.duration_ms;
        if duration == 0 {
            return 1.0;
        }

        let cycle = elapsed_ms / duration;
        let within = (elapsed_ms % duration) as f32 / duration as f32;

        let progress = match self.spec.repeat {
            RepeatMode::Restart => within,
            RepeatMode::Reverse if cycle % 2 == 0 => within,
            RepeatMode::Reverse => 1.0 - within,
        };

        self.spec.easing.transform(progress)
    }
}
