use std::ops::Range;

use crate::foundation::error::{KaraokeError, KaraokeResult};
use crate::model::layout::SyllableLayout;
use crate::model::syllable::Syllable;
use crate::text::measure::{TextMeasurer, TextStyle, grapheme_count};
use crate::text::script;

/// Thresholds deciding which words get per-character animation.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct RichAnimationOpts {
    /// A word is rich only if each character gets strictly more than this many milliseconds.
    pub fast_char_threshold_ms: f64,
    /// Minimum word duration for rich animation.
    pub min_word_duration_ms: i64,
}

impl Default for RichAnimationOpts {
    fn default() -> Self {
        Self {
            fast_char_threshold_ms: 200.0,
            min_word_duration_ms: 1000,
        }
    }
}

impl RichAnimationOpts {
    /// Reject negative or non-finite thresholds.
    pub fn validate(&self) -> KaraokeResult<()> {
        if !self.fast_char_threshold_ms.is_finite() || self.fast_char_threshold_ms < 0.0 {
            return Err(KaraokeError::validation(
                "fast_char_threshold_ms must be finite and >= 0",
            ));
        }
        if self.min_word_duration_ms < 0 {
            return Err(KaraokeError::validation(
                "min_word_duration_ms must be >= 0",
            ));
        }
        Ok(())
    }

    /// Decide whether a word qualifies for rich animation.
    pub fn qualifies(&self, word: &[Syllable], is_accompaniment: bool) -> bool {
        if is_accompaniment {
            return false;
        }
        let (Some(first), Some(last)) = (word.first(), word.last()) else {
            return false;
        };

        let content: String = word.iter().map(|s| s.content.as_str()).collect();
        if !script::has_letters(&content) || script::is_simple_script(&content) {
            return false;
        }

        let duration = last.end_ms - first.start_ms;
        let chars = grapheme_count(&content);
        if duration <= 0 || chars == 0 {
            return false;
        }
        let per_char = duration as f64 / chars as f64;
        per_char > self.fast_char_threshold_ms && duration >= self.min_word_duration_ms
    }
}

/// Split syllables into words.
///
/// A word closes right after a syllable with trailing whitespace; whatever remains at the end
/// forms the last word.
pub fn group_into_words(syllables: &[Syllable]) -> Vec<Range<usize>> {
    let mut words = Vec::new();
    let mut start = 0usize;
    for (i, s) in syllables.iter().enumerate() {
        if s.ends_word() {
            words.push(start..i + 1);
            start = i + 1;
        }
    }
    if start < syllables.len() {
        words.push(start..syllables.len());
    }
    words
}

/// First layout pass: measure every syllable and broadcast each word's animation class.
///
/// `word_id` is the word's index in [`group_into_words`] order.
pub fn measure_syllables<M: TextMeasurer + ?Sized>(
    syllables: &[Syllable],
    measurer: &mut M,
    style: &TextStyle,
    is_accompaniment: bool,
    opts: &RichAnimationOpts,
) -> Vec<SyllableLayout> {
    let mut out = Vec::with_capacity(syllables.len());
    for (word_id, range) in group_into_words(syllables).into_iter().enumerate() {
        let word = &syllables[range];
        let rich = opts.qualifies(word, is_accompaniment);
        for s in word {
            let measured = measurer.measure(&s.content, style);
            out.push(SyllableLayout::measured(s.clone(), measured, word_id, rich));
        }
    }
    out
}

#[cfg(test)]
#[path = "../../tests/unit/layout/words.rs"]
mod tests;
