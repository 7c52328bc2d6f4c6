//! # Easing Curves
//!
//! CSS-style `cubic-bezier(x1, y1, x2, y2)` timing functions. The curve starts
//! at `(0, 0)` and ends at `(1, 1)`; [`CubicBezier::ease`] maps linear progress
//! in `[0, 1]` to eased progress.

/// A cubic Bézier timing function with fixed end points.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CubicBezier {
    x1: f64,
    y1: f64,
    x2: f64,
    y2: f64,
}

/// Track transition used by the paging carousel: `cubic-bezier(.32, 1, .36, 1)`.
pub const CAROUSEL_EASE: CubicBezier = CubicBezier::new(0.32, 1.0, 0.36, 1.0);

/// The CSS `ease` keyword: `cubic-bezier(.25, .1, .25, 1)`.
pub const EASE: CubicBezier = CubicBezier::new(0.25, 0.1, 0.25, 1.0);

const NEWTON_ITERATIONS: usize = 8;
const EPSILON: f64 = 1e-7;

impl CubicBezier {
    /// Create a timing function. `x1` and `x2` must lie in `[0, 1]`.
    pub const fn new(x1: f64, y1: f64, x2: f64, y2: f64) -> Self {
        Self { x1, y1, x2, y2 }
    }

    /// Map linear progress `t` (clamped to `[0, 1]`) to eased progress.
    pub fn ease(&self, t: f64) -> f64 {
        if t <= 0.0 {
            return 0.0;
        }
        if t >= 1.0 {
            return 1.0;
        }
        let s = self.solve_for_x(t);
        sample(self.y1, self.y2, s)
    }

    // Find the curve parameter whose x coordinate equals `x`.
    fn solve_for_x(&self, x: f64) -> f64 {
        // Newton-Raphson converges fast for well-behaved curves
        let mut s = x;
        for _ in 0..NEWTON_ITERATIONS {
            let err = sample(self.x1, self.x2, s) - x;
            if err.abs() < EPSILON {
                return s;
            }
            let slope = slope(self.x1, self.x2, s);
            if slope.abs() < EPSILON {
                break;
            }
            s -= err / slope;
        }

        // Fall back to bisection
        let (mut lo, mut hi) = (0.0, 1.0);
        s = x;
        while hi - lo > EPSILON {
            let value = sample(self.x1, self.x2, s);
            if (value - x).abs() < EPSILON {
                break;
            }
            if value < x {
                lo = s;
            } else {
                hi = s;
            }
            s = (lo + hi) / 2.0;
        }
        s
    }
}

// One coordinate of the Bézier polynomial with P0 = 0 and P3 = 1.
fn sample(p1: f64, p2: f64, s: f64) -> f64 {
    let c = 3.0 * p1;
    let b = 3.0 * (p2 - p1) - c;
    let a = 1.0 - c - b;
    ((a * s + b) * s + c) * s
}

fn slope(p1: f64, p2: f64, s: f64) -> f64 {
    let c = 3.0 * p1;
    let b = 3.0 * (p2 - p1) - c;
    let a = 1.0 - c - b;
    (3.0 * a * s + 2.0 * b) * s + c
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_end_points_are_fixed() {
        assert_eq!(CAROUSEL_EASE.ease(0.0), 0.0);
        assert_eq!(CAROUSEL_EASE.ease(1.0), 1.0);
        assert_eq!(CAROUSEL_EASE.ease(-3.0), 0.0);
        assert_eq!(CAROUSEL_EASE.ease(7.0), 1.0);
    }

    #[test]
    fn test_linear_curve_is_identity() {
        let linear = CubicBezier::new(0.0, 0.0, 1.0, 1.0);
        for i in 0..=10 {
            let t = f64::from(i) / 10.0;
            assert!((linear.ease(t) - t).abs() < 1e-4, "t = {t}");
        }
    }

    #[test]
    fn test_ease_out_front_loads_progress() {
        // Halfway in time is well past halfway in value
        assert!(CAROUSEL_EASE.ease(0.5) > 0.8);
        assert!(EASE.ease(0.5) > 0.7);
    }

    #[test]
    fn test_monotonic() {
        let mut last = 0.0;
        for i in 0..=100 {
            let v = CAROUSEL_EASE.ease(f64::from(i) / 100.0);
            assert!(v + 1e-6 >= last);
            last = v;
        }
    }
}
