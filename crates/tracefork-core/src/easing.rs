//! Timing curves for mode transitions.
//!
//! Mode tables carry CSS-style `cubic-bezier(x1, y1, x2, y2)` strings so the
//! same value can be handed straight to a stylesheet; [`Easing::parse`] turns
//! them into something the engine can evaluate.

use crate::error::{EngineError, EngineResult};
use std::str::FromStr;

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Easing {
    Linear,
    CubicBezier { x1: f32, y1: f32, x2: f32, y2: f32 },
}

impl Easing {
    pub fn parse(s: &str) -> EngineResult<Self> {
        let invalid = || EngineError::InvalidEasing(s.to_string());
        let t = s.trim();
        if t == "linear" {
            return Ok(Self::Linear);
        }
        let args = t
            .strip_prefix("cubic-bezier(")
            .and_then(|r| r.strip_suffix(')'))
            .ok_or_else(invalid)?;
        let mut v = [0.0_f32; 4];
        let mut n = 0;
        for part in args.split(',') {
            if n == 4 {
                return Err(invalid());
            }
            v[n] = part.trim().parse::<f32>().map_err(|_| invalid())?;
            n += 1;
        }
        if n != 4 || !v.iter().all(|x| x.is_finite()) {
            return Err(invalid());
        }
        // x control points must stay in [0, 1] for the curve to be a function of time
        if !(0.0..=1.0).contains(&v[0]) || !(0.0..=1.0).contains(&v[2]) {
            return Err(invalid());
        }
        Ok(Self::CubicBezier {
            x1: v[0],
            y1: v[1],
            x2: v[2],
            y2: v[3],
        })
    }

    /// Map linear progress `t` onto the curve. Input is clamped to [0, 1].
    pub fn sample(self, t: f32) -> f32 {
        let t = if t.is_finite() { t.clamp(0.0, 1.0) } else { 0.0 };
        match self {
            Self::Linear => t,
            Self::CubicBezier { x1, y1, x2, y2 } => {
                if t == 0.0 || t == 1.0 {
                    return t;
                }
                let u = solve_bezier_x(t, x1, x2);
                bezier(u, y1, y2)
            }
        }
    }
}

impl FromStr for Easing {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

// One-dimensional cubic bezier with endpoints fixed at 0 and 1
#[inline]
fn bezier(u: f32, p1: f32, p2: f32) -> f32 {
    let inv = 1.0 - u;
    3.0 * inv * inv * u * p1 + 3.0 * inv * u * u * p2 + u * u * u
}

#[inline]
fn bezier_derivative(u: f32, p1: f32, p2: f32) -> f32 {
    let inv = 1.0 - u;
    3.0 * inv * inv * p1 + 6.0 * inv * u * (p2 - p1) + 3.0 * u * u * (1.0 - p2)
}

fn solve_bezier_x(x: f32, x1: f32, x2: f32) -> f32 {
    const EPS: f32 = 1e-6;
    let mut u = x;
    for _ in 0..8 {
        let err = bezier(u, x1, x2) - x;
        if err.abs() < EPS {
            return u;
        }
        let d = bezier_derivative(u, x1, x2);
        if d.abs() < EPS {
            break;
        }
        u -= err / d;
    }
    // Newton stalled; bisection always converges because x(u) is monotonic here
    let (mut lo, mut hi) = (0.0_f32, 1.0_f32);
    u = x;
    for _ in 0..32 {
        let xu = bezier(u, x1, x2);
        if (xu - x).abs() < EPS {
            break;
        }
        if xu < x {
            lo = u;
        } else {
            hi = u;
        }
        u = 0.5 * (lo + hi);
    }
    u
}
