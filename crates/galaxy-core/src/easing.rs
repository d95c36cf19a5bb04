//! Easing curves for animation progress.

use serde::{Deserialize, Serialize};

/// Maps linear progress in 0.0-1.0 onto eased progress.
///
/// The non-linear curves are cubic beziers anchored at (0, 0) and (1, 1).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Easing {
    #[default]
    Linear,
    /// Accelerates quickly, decelerates slowly (0.4, 0.0, 0.2, 1.0).
    FastOutSlowIn,
    /// Starts at full speed, decelerates slowly (0.0, 0.0, 0.2, 1.0).
    LinearOutSlowIn,
    /// Accelerates quickly, ends at full speed (0.4, 0.0, 1.0, 1.0).
    FastOutLinearIn,
}

impl Easing {
    /// Apply the curve to `fraction`, clamped to 0.0-1.0.
    pub fn transform(self, fraction: f32) -> f32 {
        let fraction = fraction.clamp(0.0, 1.0);
        match self {
            Easing::Linear => fraction,
            Easing::FastOutSlowIn => cubic_bezier(0.4, 0.0, 0.2, 1.0, fraction),
            Easing::LinearOutSlowIn => cubic_bezier(0.0, 0.0, 0.2, 1.0, fraction),
            Easing::FastOutLinearIn => cubic_bezier(0.4, 0.0, 1.0, 1.0, fraction),
        }
    }
}

/// Evaluate a unit cubic bezier at horizontal position `x`.
fn cubic_bezier(x1: f32, y1: f32, x2: f32, y2: f32, x: f32) -> f32 {
    if x <= 0.0 || x >= 1.0 {
        return x;
    }

    let curve = |a: f32, b: f32, t: f32| {
        let u = 1.0 - t;
        3.0 * u * u * t * a + 3.0 * u * t * t * b + t * t * t
    };

    // Bisection on the x polynomial, which is monotonic for x1, x2 in 0..=1.
    let mut low = 0.0_f32;
    let mut high = 1.0_f32;
    let mut t = x;
    for _ in 0..32 {
        let estimate = curve(x1, x2, t);
        if (estimate - x).abs() < 1e-6 {
            break;
        }
        if estimate < x {
            low = t;
        } else {
            high = t;
        }
        t = (low + high) / 2.0;
    }

    curve(y1, y2, t)
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL: [Easing; 4] = [
        Easing::Linear,
        Easing::FastOutSlowIn,
        Easing::LinearOutSlowIn,
        Easing::FastOutLinearIn,
    ];

    #[test]
    fn test_endpoints_fixed() {
        for easing in ALL {
            assert_eq!(easing.transform(0.0), 0.0, "{easing:?}");
            assert_eq!(easing.transform(1.0), 1.0, "{easing:?}");
        }
    }

    #[test]
    fn test_monotonic() {
        for easing in ALL {
            let mut previous = 0.0;
            for step in 1..=100 {
                let value = easing.transform(step as f32 / 100.0);
                assert!(value + 1e-4 >= previous, "{easing:?} at {step}");
                previous = value;
            }
        }
    }

    #[test]
    fn test_curve_shapes() {
        // Slow-in curves are ahead of linear at the midpoint, slow-out behind.
        assert!(Easing::FastOutSlowIn.transform(0.5) > 0.5);
        assert!(Easing::LinearOutSlowIn.transform(0.5) > 0.5);
        assert!(Easing::FastOutLinearIn.transform(0.5) < 0.5);
        assert_eq!(Easing::Linear.transform(0.25), 0.25);
    }

    #[test]
    fn test_clamps_out_of_range() {
        assert_eq!(Easing::FastOutSlowIn.transform(-1.0), 0.0);
        assert_eq!(Easing::FastOutSlowIn.transform(2.0), 1.0);
    }
}
