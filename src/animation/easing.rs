use serde::{Deserialize, Serialize};

/// Progress curve applied to a tween.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
pub enum Easing {
    Linear,
    /// Standard material curve, `cubic-bezier(0.4, 0, 0.2, 1)`.
    #[default]
    FastOutSlowIn,
    /// `cubic-bezier(0, 0, 0.2, 1)`.
    LinearOutSlowIn,
    /// `cubic-bezier(0.4, 0, 1, 1)`.
    FastOutLinearIn,
    CubicBezier(f64, f64, f64, f64),
}

impl Easing {
    /// Maps linear progress in `[0, 1]` to eased progress.
    #[must_use]
    pub fn apply(self, t: f64) -> f64 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Self::Linear => t,
            Self::FastOutSlowIn => cubic_bezier_ease(t, 0.4, 0.0, 0.2, 1.0),
            Self::LinearOutSlowIn => cubic_bezier_ease(t, 0.0, 0.0, 0.2, 1.0),
            Self::FastOutLinearIn => cubic_bezier_ease(t, 0.4, 0.0, 1.0, 1.0),
            Self::CubicBezier(x1, y1, x2, y2) => cubic_bezier_ease(t, x1, y1, x2, y2),
        }
    }
}

/// CSS-style cubic bezier easing through (0,0), (x1,y1), (x2,y2), (1,1).
///
/// Solves `x(s) = t` with Newton-Raphson, falling back to bisection.
fn cubic_bezier_ease(t: f64, x1: f64, y1: f64, x2: f64, y2: f64) -> f64 {
    if t <= 0.0 {
        return 0.0;
    }
    if t >= 1.0 {
        return 1.0;
    }

    let sample = |a1: f64, a2: f64, s: f64| {
        let inv = 1.0 - s;
        3.0 * inv * inv * s * a1 + 3.0 * inv * s * s * a2 + s * s * s
    };
    let slope = |a1: f64, a2: f64, s: f64| {
        let inv = 1.0 - s;
        3.0 * inv * inv * a1 + 6.0 * inv * s * (a2 - a1) + 3.0 * s * s * (1.0 - a2)
    };

    let mut s = t;
    for _ in 0..8 {
        let error = sample(x1, x2, s) - t;
        if error.abs() < 1e-7 {
            return sample(y1, y2, s);
        }
        let derivative = slope(x1, x2, s);
        if derivative.abs() < 1e-6 {
            break;
        }
        s -= error / derivative;
    }

    let (mut low, mut high) = (0.0, 1.0);
    s = t;
    for _ in 0..64 {
        let x = sample(x1, x2, s);
        if (x - t).abs() < 1e-7 {
            break;
        }
        if x < t {
            low = s;
        } else {
            high = s;
        }
        s = (low + high) / 2.0;
    }
    sample(y1, y2, s)
}

#[cfg(test)]
mod tests {
    use super::Easing;

    #[test]
    fn endpoints_are_exact() {
        for easing in [
            Easing::Linear,
            Easing::FastOutSlowIn,
            Easing::LinearOutSlowIn,
            Easing::FastOutLinearIn,
        ] {
            assert_eq!(easing.apply(0.0), 0.0);
            assert_eq!(easing.apply(1.0), 1.0);
        }
    }

    #[test]
    fn fast_out_slow_in_leads_linear_at_midpoint() {
        let eased = Easing::FastOutSlowIn.apply(0.5);
        assert!(eased > 0.5 && eased < 1.0, "eased={eased}");
    }

    #[test]
    fn symmetric_bezier_crosses_midpoint() {
        let eased = Easing::CubicBezier(0.42, 0.0, 0.58, 1.0).apply(0.5);
        assert!((eased - 0.5).abs() <= 1e-4, "eased={eased}");
    }
}
