//! Shaping curves for per-character motion.
//!
//! Each curve maps normalized progress in `[0, 1]` to a value; inputs outside the range are
//! clamped. Parameters are plain data so the curves can be built per character per tick.

use std::f64::consts::PI;

/// Dips below zero by `dip` during the first half, then rises smoothly from 0 to 1.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DipAndRise {
    /// Depth of the dip.
    pub dip: f64,
}

impl DipAndRise {
    /// Evaluate at `x`.
    pub fn apply(self, x: f64) -> f64 {
        let x = x.clamp(0.0, 1.0);
        if x < 0.5 {
            -self.dip * (2.0 * PI * x).sin()
        } else {
            smoothstep((x - 0.5) / 0.5)
        }
    }
}

/// Zero at both ends, `amount` at the midpoint.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Swell {
    /// Peak value.
    pub amount: f64,
}

impl Swell {
    /// Evaluate at `x`.
    pub fn apply(self, x: f64) -> f64 {
        self.amount * (PI * x.clamp(0.0, 1.0)).sin()
    }
}

/// Three arcs of halving height: peaks of `strength`, `strength / 2` and `strength / 4` at
/// `x = 1/6`, `1/2` and `5/6`, zero at both ends.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Bounce {
    /// Height of the first peak.
    pub strength: f64,
}

impl Bounce {
    const ARCS: f64 = 3.0;

    /// Evaluate at `x`.
    pub fn apply(self, x: f64) -> f64 {
        let x = x.clamp(0.0, 1.0);
        if x >= 1.0 {
            return 0.0;
        }
        let arc = (x * Self::ARCS).floor().min(Self::ARCS - 1.0);
        let local = x * Self::ARCS - arc;
        self.strength * 0.5_f64.powf(arc) * (PI * local).sin()
    }
}

fn smoothstep(t: f64) -> f64 {
    let t = t.clamp(0.0, 1.0);
    t * t * (3.0 - 2.0 * t)
}

#[cfg(test)]
#[path = "../../tests/unit/animation/curves.rs"]
mod tests;
