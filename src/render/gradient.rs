use smallvec::{SmallVec, smallvec};

use crate::foundation::core::Rgba8Premul;
use crate::foundation::error::{KaraokeError, KaraokeResult};
use crate::model::layout::SyllableLayout;

/// Colors and fade band of the sung/unsung highlight.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct GradientOpts {
    /// Width of the fade band in pixels; rows narrower than this fade across their full width.
    pub fade_width_px: f64,
    /// Color of sung text.
    pub active: Rgba8Premul,
    /// Color of text not yet sung.
    pub inactive: Rgba8Premul,
}

impl Default for GradientOpts {
    fn default() -> Self {
        Self {
            fade_width_px: 100.0,
            active: Rgba8Premul::white(),
            inactive: Rgba8Premul::from_straight_rgba(255, 255, 255, 51),
        }
    }
}

impl GradientOpts {
    /// Reject non-finite or non-positive fade widths.
    pub fn validate(&self) -> KaraokeResult<()> {
        if !self.fade_width_px.is_finite() || self.fade_width_px <= 0.0 {
            return Err(KaraokeError::validation(
                "gradient fade_width_px must be finite and > 0",
            ));
        }
        Ok(())
    }
}

/// One color stop; `offset` is normalized over the brush span.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GradientStop {
    /// Position in `[0, 1]`.
    pub offset: f64,
    /// Color at `offset`.
    pub color: Rgba8Premul,
}

/// Horizontal brush masking one row.
#[derive(Clone, Debug, PartialEq)]
pub enum GradientBrush {
    /// Uniform color.
    Solid(Rgba8Premul),
    /// Horizontal gradient from `start_x` to `end_x`.
    Linear {
        /// Left end of the gradient in layout pixels.
        start_x: f64,
        /// Right end of the gradient in layout pixels.
        end_x: f64,
        /// Stops in increasing offset order.
        stops: SmallVec<[GradientStop; 4]>,
    },
}

/// Horizontal extent of a row and the normalized position of its highlight boundary.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LineSweep {
    /// Leftmost syllable edge.
    pub min_x: f64,
    /// Rightmost syllable edge.
    pub max_x: f64,
    /// Boundary position in `[0, 1]` from `min_x` to `max_x`.
    pub progress: f64,
}

impl LineSweep {
    /// `max_x - min_x`.
    pub fn width(&self) -> f64 {
        self.max_x - self.min_x
    }
}

/// Locate the highlight boundary of `row` at `time_ms`. `None` for an empty row.
///
/// Left-to-right rows sweep from 0 to 1, right-to-left rows from 1 to 0.
pub fn line_sweep(row: &[SyllableLayout], time_ms: i64, is_rtl: bool) -> Option<LineSweep> {
    let first = row.first()?;
    let last = row.last()?;
    let min_x = row
        .iter()
        .map(|l| l.origin().x)
        .fold(f64::INFINITY, f64::min);
    let max_x = row
        .iter()
        .map(|l| l.origin().x + l.width())
        .fold(f64::NEG_INFINITY, f64::max);
    let width = max_x - min_x;

    let (line_start, line_end) = if is_rtl { (1.0, 0.0) } else { (0.0, 1.0) };
    let progress = if time_ms <= first.syllable.start_ms {
        line_start
    } else if time_ms >= last.syllable.end_ms {
        line_end
    } else if width <= 0.0 {
        line_start
    } else {
        let x = boundary_x(row, time_ms, is_rtl, min_x, max_x);
        ((x - min_x) / width).clamp(0.0, 1.0)
    };

    Some(LineSweep {
        min_x,
        max_x,
        progress,
    })
}

fn boundary_x(row: &[SyllableLayout], time_ms: i64, is_rtl: bool, min_x: f64, max_x: f64) -> f64 {
    if let Some(active) = row.iter().find(|l| l.syllable.is_active(time_ms)) {
        let p = active.syllable.progress(time_ms);
        let x = active.origin().x;
        return if is_rtl {
            x + active.width() * (1.0 - p)
        } else {
            x + active.width() * p
        };
    }

    // Between syllables: pin to the trailing edge of the last one sung.
    let finished = row.iter().rev().find(|l| time_ms >= l.syllable.end_ms);
    match (finished, is_rtl) {
        (Some(l), true) => l.origin().x,
        (Some(l), false) => l.origin().x + l.width(),
        (None, true) => max_x,
        (None, false) => min_x,
    }
}

/// Brush that colors the sung part of `row` active and the rest inactive, with a fade band
/// centered on the boundary.
pub fn line_gradient(
    row: &[SyllableLayout],
    time_ms: i64,
    is_rtl: bool,
    opts: &GradientOpts,
) -> GradientBrush {
    let Some(sweep) = line_sweep(row, time_ms, is_rtl) else {
        return GradientBrush::Solid(opts.inactive);
    };
    let (first_start, last_end) = match (row.first(), row.last()) {
        (Some(f), Some(l)) => (f.syllable.start_ms, l.syllable.end_ms),
        _ => return GradientBrush::Solid(opts.inactive),
    };

    if sweep.width() <= 0.0 {
        let color = if time_ms >= last_end {
            opts.active
        } else {
            opts.inactive
        };
        return GradientBrush::Solid(color);
    }
    if time_ms <= first_start {
        return GradientBrush::Solid(opts.inactive);
    }
    if time_ms >= last_end {
        return GradientBrush::Solid(opts.active);
    }

    let fade = (opts.fade_width_px / sweep.width()).min(1.0);
    let center = -fade / 2.0 + (1.0 + fade) * sweep.progress;
    let fade_start = (center - fade / 2.0).clamp(0.0, 1.0);
    let fade_end = (center + fade / 2.0).clamp(0.0, 1.0);

    let (left, right) = if is_rtl {
        (opts.inactive, opts.active)
    } else {
        (opts.active, opts.inactive)
    };
    let stop = |offset, color| GradientStop { offset, color };
    GradientBrush::Linear {
        start_x: sweep.min_x,
        end_x: sweep.max_x,
        stops: smallvec![
            stop(0.0, left),
            stop(fade_start, left),
            stop(fade_end, right),
            stop(1.0, right),
        ],
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/gradient.rs"]
mod tests;
