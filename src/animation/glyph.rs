use std::ops::Range;
use std::sync::Arc;

use crate::animation::curves::{Bounce, DipAndRise, Swell};
use crate::animation::ease::Ease;
use crate::foundation::error::{KaraokeError, KaraokeResult};
use crate::model::layout::{SyllableLayout, WordAnimationInfo};
use crate::model::syllable::Syllable;
use crate::text::measure::graphemes;

/// Tuning of the per-character and fallback motion.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct MotionOpts {
    /// Vertical travel of a glyph that has not started rising, in pixels.
    pub float_amplitude_px: f64,
    /// Share of the word duration each character spends in motion.
    pub rich_duration_ratio: f64,
    /// Per-character time budget subtracted from the word duration before shaping.
    pub char_budget_ms: f64,
    /// Spare time at which the shaping curves reach full strength.
    pub saturation_ms: f64,
    /// Deepest dip of the float curve.
    pub max_dip: f64,
    /// Largest extra scale at the swell peak.
    pub max_swell: f64,
    /// Blur radius at full bounce strength, in pixels.
    pub max_blur_px: f64,
    /// The fallback rise lasts this multiple of the syllable duration.
    pub rise_duration_factor: f64,
    /// Curve of the fallback rise.
    pub rise_ease: Ease,
}

impl Default for MotionOpts {
    fn default() -> Self {
        Self {
            float_amplitude_px: 4.0,
            rich_duration_ratio: 0.8,
            char_budget_ms: 200.0,
            saturation_ms: 1000.0,
            max_dip: 0.5,
            max_swell: 0.1,
            max_blur_px: 10.0,
            rise_duration_factor: 700.0 / 500.0,
            rise_ease: Ease::RISE,
        }
    }
}

impl MotionOpts {
    /// Reject non-finite values and ratios outside their ranges.
    pub fn validate(&self) -> KaraokeResult<()> {
        let finite = [
            ("float_amplitude_px", self.float_amplitude_px),
            ("char_budget_ms", self.char_budget_ms),
            ("max_dip", self.max_dip),
            ("max_swell", self.max_swell),
            ("max_blur_px", self.max_blur_px),
        ];
        for (name, v) in finite {
            if !v.is_finite() || v < 0.0 {
                return Err(KaraokeError::validation(format!(
                    "motion {name} must be finite and >= 0"
                )));
            }
        }
        let positive = [
            ("rich_duration_ratio", self.rich_duration_ratio),
            ("saturation_ms", self.saturation_ms),
            ("rise_duration_factor", self.rise_duration_factor),
        ];
        for (name, v) in positive {
            if !v.is_finite() || v <= 0.0 {
                return Err(KaraokeError::validation(format!(
                    "motion {name} must be finite and > 0"
                )));
            }
        }
        if self.rich_duration_ratio > 1.0 {
            return Err(KaraokeError::validation(
                "motion rich_duration_ratio must be <= 1",
            ));
        }
        Ok(())
    }
}

/// How a syllable moves on a given tick.
#[derive(Clone, Debug, PartialEq)]
pub enum SyllableMotion {
    /// Per-character staggered float, swell and blur driven by the word's timing.
    Rich(Arc<WordAnimationInfo>),
    /// Single rise timed by the syllable at `borrowed` in the same row.
    Punctuation {
        /// Index of the timing source; the punctuation itself when nothing precedes it.
        borrowed: usize,
    },
    /// Single rise timed by the syllable itself.
    Simple,
}

/// Pick the motion for `row[index]`.
///
/// Punctuation borrows the timing of the nearest preceding non-punctuation syllable in row
/// order, which is singing order for both directions.
///
/// # Panics
///
/// If `index` is out of bounds.
pub fn resolve_motion(row: &[SyllableLayout], index: usize) -> SyllableMotion {
    let layout = &row[index];
    if layout.syllable.is_punctuation() {
        let borrowed = row[..index]
            .iter()
            .rposition(|l| !l.syllable.is_punctuation())
            .unwrap_or(index);
        return SyllableMotion::Punctuation { borrowed };
    }
    match (&layout.word_anim, layout.use_rich_animation) {
        (Some(info), true) => SyllableMotion::Rich(Arc::clone(info)),
        _ => SyllableMotion::Simple,
    }
}

/// Motion of one grapheme of a richly animated syllable.
#[derive(Clone, Debug, PartialEq)]
pub struct GlyphMotion {
    /// Byte range of the grapheme in the syllable content.
    pub bytes: Range<usize>,
    /// Caret offset of the grapheme from the syllable origin.
    pub x_offset: f64,
    /// Downward offset; negative while the dip lifts the glyph.
    pub y_offset: f64,
    /// Uniform scale about the word pivot.
    pub scale: f64,
    /// Shadow blur radius in pixels.
    pub blur: f64,
}

fn snap_or_clamp(elapsed: f64, duration: f64) -> f64 {
    if duration <= 0.0 {
        if elapsed >= 0.0 { 1.0 } else { 0.0 }
    } else {
        (elapsed / duration).clamp(0.0, 1.0)
    }
}

/// Per-grapheme motion of a syllable belonging to a rich word.
///
/// Characters start in sequence across the whole word: the first at the word start, the last
/// `rich_duration_ratio * duration` before the word end.
pub fn rich_glyph_motions(
    layout: &SyllableLayout,
    info: &WordAnimationInfo,
    time_ms: i64,
    opts: &MotionOpts,
) -> Vec<GlyphMotion> {
    let word_start = info.word_start_ms as f64;
    let word_end = info.word_end_ms as f64;
    let duration = info.word_duration_ms as f64;
    let motion_ms = opts.rich_duration_ratio * duration;

    let spare = duration - opts.char_budget_ms * info.char_count as f64;
    let strength = (spare / opts.saturation_ms).clamp(0.0, 1.0);
    let dip = DipAndRise {
        dip: opts.max_dip * strength,
    };
    let swell = Swell {
        amount: opts.max_swell * strength,
    };
    let bounce = Bounce { strength };

    let content = &layout.syllable.content;
    graphemes(content)
        .enumerate()
        .map(|(local, (byte, g))| {
            let abs = layout.char_offset_in_word + local;
            let ratio = if info.char_count > 1 {
                abs as f64 / (info.char_count - 1) as f64
            } else {
                0.5
            };
            let char_start = word_start + (word_end - motion_ms - word_start) * ratio;
            let progress = snap_or_clamp(time_ms as f64 - char_start, motion_ms);
            GlyphMotion {
                bytes: byte..byte + g.len(),
                x_offset: layout.measured.horizontal_offset(local),
                y_offset: opts.float_amplitude_px * dip.apply(1.0 - progress),
                scale: 1.0 + swell.apply(progress),
                blur: opts.max_blur_px * bounce.apply(progress),
            }
        })
        .collect()
}

/// Downward offset of a whole syllable timed by `timing`.
pub fn rise_offset(timing: &Syllable, time_ms: i64, opts: &MotionOpts) -> f64 {
    let elapsed = (time_ms - timing.start_ms) as f64;
    let span = opts.rise_duration_factor * timing.duration_ms() as f64;
    let progress = snap_or_clamp(elapsed, span);
    opts.float_amplitude_px * opts.rise_ease.apply(1.0 - progress)
}

/// Resolved motion of one syllable on one tick.
#[derive(Clone, Debug, PartialEq)]
pub enum SyllableAnimation {
    /// One entry per grapheme.
    Glyphs(Vec<GlyphMotion>),
    /// The syllable moves as a block.
    Block {
        /// Downward offset in pixels.
        y_offset: f64,
    },
}

/// Animate every syllable of a placed row at `time_ms`.
pub fn animate_row(
    row: &[SyllableLayout],
    time_ms: i64,
    opts: &MotionOpts,
) -> Vec<SyllableAnimation> {
    (0..row.len())
        .map(|i| match resolve_motion(row, i) {
            SyllableMotion::Rich(info) => {
                SyllableAnimation::Glyphs(rich_glyph_motions(&row[i], &info, time_ms, opts))
            }
            SyllableMotion::Punctuation { borrowed } => SyllableAnimation::Block {
                y_offset: rise_offset(&row[borrowed].syllable, time_ms, opts),
            },
            SyllableMotion::Simple => SyllableAnimation::Block {
                y_offset: rise_offset(&row[i].syllable, time_ms, opts),
            },
        })
        .collect()
}

#[cfg(test)]
#[path = "../../tests/unit/animation/glyph.rs"]
mod tests;
